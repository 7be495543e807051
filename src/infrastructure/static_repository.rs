// Fixture-backed repository implementation
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::air_quality::SeverityBand;
use crate::domain::alert::{AlertHistoryEntry, DeliveryStatus, NotificationChannel};
use crate::domain::dashboard::{ConditionTrend, CurrentConditions, WeatherCondition};
use crate::domain::location::LocationSample;
use crate::domain::pollutant::{Pollutant, PollutantReading};
use crate::domain::site::{Feature, Milestone, Stat, TeamMember};
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct StaticRepository {
    location: String,
}

impl StaticRepository {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

fn feature(title: &str, description: &str) -> Feature {
    Feature {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn stat(number: &str, label: &str) -> Stat {
    Stat {
        number: number.to_string(),
        label: label.to_string(),
    }
}

fn member(name: &str, role: &str, expertise: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        expertise: expertise.to_string(),
    }
}

fn milestone(year: &str, title: &str, description: &str) -> Milestone {
    Milestone {
        year: year.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn history(
    id: u32,
    channel: NotificationChannel,
    message: &str,
    timestamp: &str,
) -> AlertHistoryEntry {
    AlertHistoryEntry {
        id,
        channel,
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        status: DeliveryStatus::Sent,
    }
}

#[async_trait]
impl DashboardRepository for StaticRepository {
    async fn current_conditions(&self) -> Result<CurrentConditions> {
        Ok(CurrentConditions {
            aqi: 42,
            location: self.location.clone(),
            last_updated: "2 minutes ago".to_string(),
            trend: ConditionTrend::Improving,
        })
    }

    async fn pollutant_readings(&self) -> Result<Vec<PollutantReading>> {
        Ok(vec![
            PollutantReading::new(Pollutant::Pm25, 12.0, "μg/m³", 25.0, SeverityBand::Good),
            PollutantReading::new(Pollutant::Pm10, 28.0, "μg/m³", 50.0, SeverityBand::Good),
            PollutantReading::new(Pollutant::No2, 15.0, "ppb", 40.0, SeverityBand::Good),
            PollutantReading::new(Pollutant::O3, 45.0, "ppb", 70.0, SeverityBand::Moderate),
            PollutantReading::new(Pollutant::So2, 8.0, "ppb", 20.0, SeverityBand::Good),
            PollutantReading::new(Pollutant::Co, 0.5, "ppm", 9.0, SeverityBand::Good),
        ])
    }

    async fn weather(&self) -> Result<Vec<WeatherCondition>> {
        Ok(vec![
            WeatherCondition::new("Temperature", "28°C"),
            WeatherCondition::new("Humidity", "65%"),
            WeatherCondition::new("Wind Speed", "12 km/h"),
            WeatherCondition::new("Visibility", "8 km"),
        ])
    }

    async fn monitoring_locations(&self) -> Result<Vec<LocationSample>> {
        Ok(vec![
            LocationSample::new("New Delhi", 77.2090, 28.6139, 156),
            LocationSample::new("Mumbai", 72.8777, 19.0760, 89),
            LocationSample::new("Bangalore", 77.5946, 12.9716, 65),
            LocationSample::new("Chennai", 80.2707, 13.0827, 78),
            LocationSample::new("Kolkata", 88.3639, 22.5726, 134),
        ])
    }

    async fn alert_history(&self) -> Result<Vec<AlertHistoryEntry>> {
        Ok(vec![
            history(
                1,
                NotificationChannel::Sms,
                "AQI Alert: Level 85 (Moderate) detected in New Delhi",
                "2 hours ago",
            ),
            history(
                2,
                NotificationChannel::Email,
                "Daily Air Quality Summary - Good conditions expected",
                "1 day ago",
            ),
            history(
                3,
                NotificationChannel::Push,
                "Weather update affecting air quality in your area",
                "2 days ago",
            ),
        ])
    }

    async fn landing_features(&self) -> Result<Vec<Feature>> {
        Ok(vec![
            feature(
                "NASA TEMPO Integration",
                "Real-time satellite data with 2.1km × 4.5km resolution",
            ),
            feature("AI Predictions", "Advanced LSTM models for accurate 24hr-4week forecasts"),
            feature("Smart Alerts", "Personalized notifications via SMS, email & push"),
            feature("Health Advisory", "Personalized recommendations for safe outdoor activities"),
        ])
    }

    async fn about_features(&self) -> Result<Vec<Feature>> {
        Ok(vec![
            feature(
                "NASA TEMPO Integration",
                "First-ever geostationary satellite monitoring over North America with 2.1km × 4.5km resolution",
            ),
            feature(
                "AI-Powered Predictions",
                "Advanced LSTM neural networks delivering 85% accuracy in air quality forecasting",
            ),
            feature(
                "Health-First Approach",
                "Personalized recommendations based on WHO guidelines and individual health profiles",
            ),
            feature(
                "Multi-Source Data",
                "Combining satellite, ground sensors, and weather data for comprehensive monitoring",
            ),
        ])
    }

    async fn stats(&self) -> Result<Vec<Stat>> {
        Ok(vec![
            stat("85%", "Prediction Accuracy"),
            stat("2.1km", "Spatial Resolution"),
            stat("24/7", "Real-time Monitoring"),
            stat("50K+", "Users Protected"),
        ])
    }

    async fn team(&self) -> Result<Vec<TeamMember>> {
        Ok(vec![
            member("Dr. Sarah Chen", "Chief Data Scientist", "Atmospheric Physics, NASA TEMPO"),
            member("Alex Rodriguez", "Lead AI Engineer", "Machine Learning, LSTM Models"),
            member("Dr. Priya Sharma", "Health Advisory Lead", "Public Health, Air Quality Impact"),
            member("Michael Park", "Full-Stack Developer", "React, Cloud Architecture"),
        ])
    }

    async fn milestones(&self) -> Result<Vec<Milestone>> {
        Ok(vec![
            milestone(
                "2024",
                "AirGuard Pro Launch",
                "Platform officially launched with NASA TEMPO integration",
            ),
            milestone(
                "2023",
                "NASA Partnership",
                "Secured exclusive access to TEMPO satellite data",
            ),
            milestone(
                "2023",
                "AI Model Development",
                "Developed proprietary LSTM forecasting algorithms",
            ),
            milestone("2022", "Project Inception", "Initial research and development phase began"),
        ])
    }
}
