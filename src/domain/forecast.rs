// Forecast domain models
use super::air_quality::SeverityBand;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub hour: String,
    pub aqi: u32,
    pub status: SeverityBand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub day: String,
    pub date: String,
    pub high: u32,
    pub low: u32,
    pub status: SeverityBand,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPoint {
    pub week: String,
    pub avg_aqi: u32,
    pub status: SeverityBand,
    pub confidence: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodOutlook {
    pub label: String,
    pub aqi: u32,
    pub status: SeverityBand,
}

/// Calendar outlook for a single selected day
#[derive(Debug, Clone, PartialEq)]
pub struct DayOutlook {
    pub date: chrono::NaiveDate,
    pub aqi: u32,
    pub status: SeverityBand,
    pub summary: String,
    pub periods: Vec<PeriodOutlook>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub architecture: String,
    pub accuracy_percent: u32,
    pub update_frequency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInsights {
    pub hourly: String,
    pub daily: String,
    pub weekly: String,
}
