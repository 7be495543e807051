// Real-time service - Use case for the live data screen
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::{CurrentConditions, WeatherCondition};
use crate::domain::pollutant::PollutantReading;
use crate::error::DashboardError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RealTimeSnapshot {
    pub current: CurrentConditions,
    pub pollutants: Vec<PollutantReading>,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Clone)]
pub struct RealTimeService {
    repository: Arc<dyn DashboardRepository>,
}

impl RealTimeService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn snapshot(&self) -> Result<RealTimeSnapshot, DashboardError> {
        let current = self.repository.current_conditions().await?;
        let pollutants = self.repository.pollutant_readings().await?;

        let weather = weather_or_empty(self.repository.as_ref()).await;

        tracing::debug!(
            "Real-time snapshot for {}: AQI {} ({}), {} pollutants",
            current.location,
            current.aqi,
            current.status(),
            pollutants.len()
        );

        Ok(RealTimeSnapshot {
            current,
            pollutants,
            weather,
        })
    }
}

/// Weather is decorative; screens render without it when the source fails
pub(crate) async fn weather_or_empty(
    repository: &dyn DashboardRepository,
) -> Vec<WeatherCondition> {
    match repository.weather().await {
        Ok(weather) => weather,
        Err(e) => {
            tracing::warn!("Error fetching weather conditions: {}", e);
            Vec::new()
        }
    }
}
