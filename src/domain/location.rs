// Monitoring locations shown on the map widget
use super::air_quality::{classify, SeverityBand};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationSample {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub aqi: u32,
}

impl LocationSample {
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64, aqi: u32) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
            aqi,
        }
    }

    pub fn status(&self) -> SeverityBand {
        classify(f64::from(self.aqi)).band
    }

    pub fn color(&self) -> &'static str {
        classify(f64::from(self.aqi)).color
    }
}

/// Base layer of the map widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Satellite,
    Street,
}

impl MapStyle {
    pub fn style_url(self) -> &'static str {
        match self {
            MapStyle::Satellite => "mapbox://styles/mapbox/satellite-v9",
            MapStyle::Street => "mapbox://styles/mapbox/light-v11",
        }
    }
}

impl FromStr for MapStyle {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "satellite" => Ok(MapStyle::Satellite),
            "street" => Ok(MapStyle::Street),
            other => Err(DashboardError::UnknownMapStyle(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derived_from_aqi() {
        let delhi = LocationSample::new("New Delhi", 77.2090, 28.6139, 156);
        assert_eq!(delhi.status(), SeverityBand::Unhealthy);
        assert_eq!(delhi.color(), "#ff0000");

        let kolkata = LocationSample::new("Kolkata", 88.3639, 22.5726, 134);
        assert_eq!(kolkata.status(), SeverityBand::UnhealthyForSensitiveGroups);
    }

    #[test]
    fn test_map_style_parse() {
        assert_eq!("street".parse::<MapStyle>().unwrap(), MapStyle::Street);
        assert_eq!("Satellite".parse::<MapStyle>().unwrap(), MapStyle::Satellite);
        assert!("terrain".parse::<MapStyle>().is_err());
        assert_eq!(MapStyle::Street.style_url(), "mapbox://styles/mapbox/light-v11");
    }
}
