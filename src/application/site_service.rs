// Site service - Use case for the landing and about screens
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::realtime_service::weather_or_empty;
use crate::domain::dashboard::{CurrentConditions, WeatherCondition};
use crate::domain::pollutant::PollutantReading;
use crate::domain::site::{Feature, Milestone, Stat, TeamMember};
use crate::error::DashboardError;
use std::sync::Arc;

/// Stats shown on the landing page; the about page shows the full list
const LANDING_STATS: usize = 3;

#[derive(Debug, Clone)]
pub struct LandingPage {
    pub current: CurrentConditions,
    pub pollutants: Vec<PollutantReading>,
    pub weather: Vec<WeatherCondition>,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone)]
pub struct AboutPage {
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub team: Vec<TeamMember>,
    pub milestones: Vec<Milestone>,
}

#[derive(Clone)]
pub struct SiteService {
    repository: Arc<dyn DashboardRepository>,
}

impl SiteService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn landing_page(&self) -> Result<LandingPage, DashboardError> {
        let mut stats = self.repository.stats().await?;
        stats.truncate(LANDING_STATS);

        Ok(LandingPage {
            current: self.repository.current_conditions().await?,
            pollutants: self.repository.pollutant_readings().await?,
            weather: weather_or_empty(self.repository.as_ref()).await,
            features: self.repository.landing_features().await?,
            stats,
        })
    }

    pub async fn about_page(&self) -> Result<AboutPage, DashboardError> {
        Ok(AboutPage {
            features: self.repository.about_features().await?,
            stats: self.repository.stats().await?,
            team: self.repository.team().await?,
            milestones: self.repository.milestones().await?,
        })
    }
}
