// Forecast service - Use case for the forecast screen
use crate::application::mock_series::{MockSeriesGenerator, StatusStrategy};
use crate::domain::air_quality::classify;
use crate::domain::forecast::{
    DailyPoint, DayOutlook, ForecastInsights, HourlyPoint, ModelInfo, PeriodOutlook, WeeklyPoint,
};
use crate::infrastructure::config::ForecastSettings;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of hourly points previewed on the 24-hour tab
pub const HOURLY_PREVIEW: usize = 12;

const DAY_PERIODS: [(&str, u32); 3] = [
    ("Morning (6 AM - 12 PM)", 45),
    ("Afternoon (12 PM - 6 PM)", 78),
    ("Evening (6 PM - 12 AM)", 52),
];
const DAY_OVERALL_AQI: u32 = 65;

#[derive(Debug, Clone)]
pub struct ForecastOverview {
    pub location: String,
    pub model: ModelInfo,
    pub insights: ForecastInsights,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
    pub weekly: Vec<WeeklyPoint>,
}

#[derive(Debug, Clone)]
pub struct ForecastService {
    location: String,
    settings: ForecastSettings,
}

impl ForecastService {
    pub fn new(location: String, settings: ForecastSettings) -> Self {
        Self { location, settings }
    }

    /// Fresh generator per call; a configured seed makes output reproducible.
    fn generator(&self) -> MockSeriesGenerator<ChaCha8Rng> {
        let rng = match self.settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        MockSeriesGenerator::new(rng, self.strategy())
    }

    pub fn strategy(&self) -> StatusStrategy {
        self.settings.status_strategy
    }

    pub fn hourly(&self) -> Vec<HourlyPoint> {
        self.generator().hourly_series()
    }

    pub fn daily(&self, today: NaiveDate) -> Vec<DailyPoint> {
        self.generator().daily_series(today)
    }

    pub fn weekly(&self) -> Vec<WeeklyPoint> {
        self.generator().weekly_series()
    }

    pub fn overview(&self, today: NaiveDate) -> ForecastOverview {
        let mut generator = self.generator();
        let hourly = generator.hourly_series();
        let daily = generator.daily_series(today);
        let weekly = generator.weekly_series();

        tracing::debug!(
            "Generated forecast overview for {}: {} hourly, {} daily, {} weekly points",
            self.location,
            hourly.len(),
            daily.len(),
            weekly.len()
        );

        ForecastOverview {
            location: self.location.clone(),
            model: model_info(),
            insights: insights(),
            hourly,
            daily,
            weekly,
        }
    }

    pub fn day_outlook(&self, date: NaiveDate) -> DayOutlook {
        let status = classify(f64::from(DAY_OVERALL_AQI)).band;
        let periods = DAY_PERIODS
            .iter()
            .map(|(label, aqi)| PeriodOutlook {
                label: label.to_string(),
                aqi: *aqi,
                status: classify(f64::from(*aqi)).band,
            })
            .collect();

        DayOutlook {
            date,
            aqi: DAY_OVERALL_AQI,
            status,
            summary: format!("{} air quality expected throughout the day", status),
            periods,
        }
    }
}

fn model_info() -> ModelInfo {
    ModelInfo {
        architecture: "LSTM".to_string(),
        accuracy_percent: 85,
        update_frequency: "3 hrs".to_string(),
    }
}

fn insights() -> ForecastInsights {
    ForecastInsights {
        hourly: "Air quality expected to remain good throughout the day. Slight improvement predicted during evening hours due to favorable wind conditions.".to_string(),
        daily: "Moderate air quality expected mid-week due to predicted weather patterns. Consider limiting outdoor activities on Wednesday and Thursday.".to_string(),
        weekly: "Overall air quality expected to remain within acceptable ranges. Seasonal patterns suggest gradual improvement towards month-end due to monsoon predictions.".to_string(),
    }
}
