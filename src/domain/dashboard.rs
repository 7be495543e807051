// Current conditions shown on the landing and real-time screens
use super::air_quality::{classify, SeverityBand};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionTrend {
    Improving,
    Worsening,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub aqi: u32,
    pub location: String,
    pub last_updated: String,
    pub trend: ConditionTrend,
}

impl CurrentConditions {
    pub fn status(&self) -> SeverityBand {
        classify(f64::from(self.aqi)).band
    }

    pub fn color(&self) -> &'static str {
        classify(f64::from(self.aqi)).color
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherCondition {
    pub label: String,
    pub value: String,
}

impl WeatherCondition {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}
