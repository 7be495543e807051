// Alert service - Use case for the alert configuration screen
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::alert::{
    predefined_templates, render_template, AlertContext, AlertHistoryEntry, AlertSettings,
    AlertTemplate, PollutantThreshold,
};
use crate::domain::pollutant::dominant;
use crate::error::DashboardError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AlertOverview {
    pub settings: AlertSettings,
    pub templates: Vec<AlertTemplate>,
    pub history: Vec<AlertHistoryEntry>,
    /// Enabled thresholds the current readings are above
    pub triggered: Vec<PollutantThreshold>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertPreview {
    pub message: String,
    pub context: AlertContext,
}

#[derive(Clone)]
pub struct AlertService {
    repository: Arc<dyn DashboardRepository>,
    location: String,
}

impl AlertService {
    pub fn new(repository: Arc<dyn DashboardRepository>, location: String) -> Self {
        Self {
            repository,
            location,
        }
    }

    pub fn default_settings(&self) -> AlertSettings {
        AlertSettings::with_location(self.location.clone())
    }

    pub async fn overview(&self) -> Result<AlertOverview, DashboardError> {
        let settings = self.default_settings();
        let readings = self.repository.pollutant_readings().await?;
        let triggered = settings.exceeded_thresholds(&readings).cloned().collect();
        let history = self.repository.alert_history().await?;

        Ok(AlertOverview {
            settings,
            templates: predefined_templates(),
            history,
            triggered,
        })
    }

    /// Render `template` (or the default SMS template) against current conditions.
    pub async fn preview(&self, template: Option<&str>) -> Result<AlertPreview, DashboardError> {
        let time = chrono::Local::now().format("%H:%M").to_string();
        self.preview_at(template, &time).await
    }

    pub async fn preview_at(
        &self,
        template: Option<&str>,
        time: &str,
    ) -> Result<AlertPreview, DashboardError> {
        let settings = self.default_settings();
        let current = self.repository.current_conditions().await?;
        let readings = self.repository.pollutant_readings().await?;

        let pollutant = settings
            .exceeded_thresholds(&readings)
            .next()
            .map(|t| t.pollutant)
            .or_else(|| dominant(&readings).map(|r| r.pollutant))
            .map(|p| p.name().to_string())
            .unwrap_or_default();

        let context = AlertContext {
            aqi: current.aqi,
            status: current.status().label().to_string(),
            location: current.location.clone(),
            time: time.to_string(),
            pollutant,
        };

        let template = template.unwrap_or(settings.sms_template.as_str());
        let message = render_template(template, &context);
        tracing::debug!("Rendered alert preview ({} chars)", message.len());

        Ok(AlertPreview { message, context })
    }
}
