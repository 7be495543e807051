// Pollutant readings and their health-limit metrics
use super::air_quality::{bar_width, limit_tone, percent_of_limit, LimitTone, SeverityBand};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "O3")]
    O3,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "CO")]
    Co,
}

impl Pollutant {
    pub fn name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollutantReading {
    pub pollutant: Pollutant,
    pub value: f64,
    pub unit: String,
    /// Health limit in the same unit; must be positive
    pub limit: f64,
    pub status: SeverityBand,
}

impl PollutantReading {
    pub fn new(
        pollutant: Pollutant,
        value: f64,
        unit: impl Into<String>,
        limit: f64,
        status: SeverityBand,
    ) -> Self {
        debug_assert!(limit > 0.0, "{} limit must be positive, got {}", pollutant, limit);
        Self {
            pollutant,
            value: value.max(0.0),
            unit: unit.into(),
            limit,
            status,
        }
    }

    pub fn percentage(&self) -> f64 {
        percent_of_limit(self.value, self.limit)
    }

    pub fn bar_width(&self) -> f64 {
        bar_width(self.percentage())
    }

    pub fn limit_tone(&self) -> LimitTone {
        limit_tone(self.percentage())
    }

    /// Value with unit, as shown in summary cards ("12 μg/m³", "0.5 ppm")
    pub fn display_value(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

/// Reading with the highest share of its limit
pub fn dominant(readings: &[PollutantReading]) -> Option<&PollutantReading> {
    readings
        .iter()
        .max_by(|a, b| a.percentage().total_cmp(&b.percentage()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(pollutant: Pollutant, value: f64, unit: &str, limit: f64) -> PollutantReading {
        PollutantReading::new(pollutant, value, unit, limit, SeverityBand::Good)
    }

    #[test]
    fn test_percentage_and_bar() {
        let pm25 = reading(Pollutant::Pm25, 12.0, "μg/m³", 25.0);
        assert_eq!(pm25.percentage(), 48.0);
        assert_eq!(pm25.limit_tone(), LimitTone::Green);

        let over = reading(Pollutant::Pm10, 80.0, "μg/m³", 50.0);
        assert_eq!(over.percentage(), 160.0);
        assert_eq!(over.bar_width(), 100.0);
        assert_eq!(over.limit_tone(), LimitTone::Red);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(reading(Pollutant::Co, 0.5, "ppm", 9.0).display_value(), "0.5 ppm");
        assert_eq!(reading(Pollutant::Pm25, 12.0, "μg/m³", 25.0).display_value(), "12 μg/m³");
    }

    #[test]
    fn test_negative_value_is_floored() {
        assert_eq!(reading(Pollutant::So2, -3.0, "ppb", 20.0).value, 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "limit must be positive")]
    fn test_zero_limit_is_rejected() {
        reading(Pollutant::No2, 15.0, "ppb", 0.0);
    }

    #[test]
    fn test_dominant_pollutant() {
        let readings = vec![
            reading(Pollutant::Pm25, 12.0, "μg/m³", 25.0),
            reading(Pollutant::O3, 45.0, "ppb", 70.0),
            reading(Pollutant::Co, 0.5, "ppm", 9.0),
        ];
        assert_eq!(dominant(&readings).map(|r| r.pollutant), Some(Pollutant::O3));
        assert!(dominant(&[]).is_none());
    }

    #[test]
    fn test_pollutant_serializes_with_display_name() {
        let json = serde_json::to_string(&Pollutant::Pm25).unwrap();
        assert_eq!(json, "\"PM2.5\"");
    }
}
