// Repository trait for the dashboard's display data
use crate::domain::alert::AlertHistoryEntry;
use crate::domain::dashboard::{CurrentConditions, WeatherCondition};
use crate::domain::location::LocationSample;
use crate::domain::pollutant::PollutantReading;
use crate::domain::site::{Feature, Milestone, Stat, TeamMember};
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Headline AQI for the configured location
    async fn current_conditions(&self) -> anyhow::Result<CurrentConditions>;

    /// Per-pollutant concentrations with their health limits
    async fn pollutant_readings(&self) -> anyhow::Result<Vec<PollutantReading>>;

    async fn weather(&self) -> anyhow::Result<Vec<WeatherCondition>>;

    /// Marker locations for the map widget
    async fn monitoring_locations(&self) -> anyhow::Result<Vec<LocationSample>>;

    async fn alert_history(&self) -> anyhow::Result<Vec<AlertHistoryEntry>>;

    async fn landing_features(&self) -> anyhow::Result<Vec<Feature>>;

    async fn about_features(&self) -> anyhow::Result<Vec<Feature>>;

    async fn stats(&self) -> anyhow::Result<Vec<Stat>>;

    async fn team(&self) -> anyhow::Result<Vec<TeamMember>>;

    async fn milestones(&self) -> anyhow::Result<Vec<Milestone>>;
}
