// Mock forecast series generator
//
// Produces fixed-length synthetic series for the forecast screens. Values are
// independent uniform draws; nothing is correlated in time or cached between calls.
use crate::domain::air_quality::{classify, SeverityBand};
use crate::domain::forecast::{DailyPoint, HourlyPoint, Trend, WeeklyPoint};
use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Deserialize;

pub const HOURLY_POINTS: usize = 24;
pub const DAILY_POINTS: usize = 7;
pub const WEEKLY_POINTS: usize = 4;

/// How a generated point gets its severity band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStrategy {
    /// Classify the generated value with the canonical classifier
    #[default]
    Derived,
    /// Draw Good/Moderate independently of the value
    Independent,
}

pub struct MockSeriesGenerator<R: Rng> {
    rng: R,
    strategy: StatusStrategy,
}

impl<R: Rng> MockSeriesGenerator<R> {
    pub fn new(rng: R, strategy: StatusStrategy) -> Self {
        Self { rng, strategy }
    }

    /// 24 points labelled "00:00" through "23:00", aqi in [20, 119]
    pub fn hourly_series(&mut self) -> Vec<HourlyPoint> {
        (0..HOURLY_POINTS)
            .map(|hour| {
                let aqi = self.rng.gen_range(20..=119);
                let status = match self.strategy {
                    StatusStrategy::Derived => band_of(aqi),
                    StatusStrategy::Independent => {
                        if !(6..=20).contains(&hour) {
                            SeverityBand::Good
                        } else {
                            self.moderate_with_probability(0.3)
                        }
                    }
                };
                HourlyPoint {
                    hour: format!("{:02}:00", hour),
                    aqi,
                    status,
                }
            })
            .collect()
    }

    /// 7 points starting at `start`, high in [40, 119], low in [20, 59].
    /// `low <= high` is not enforced.
    pub fn daily_series(&mut self, start: NaiveDate) -> Vec<DailyPoint> {
        (0..DAILY_POINTS as u64)
            .map(|offset| {
                let date = start.checked_add_days(Days::new(offset)).unwrap_or(start);
                let high = self.rng.gen_range(40..=119);
                let low = self.rng.gen_range(20..=59);
                let status = match self.strategy {
                    StatusStrategy::Derived => band_of(high),
                    StatusStrategy::Independent => self.moderate_with_probability(0.4),
                };
                let trend = if self.rng.gen_bool(0.5) {
                    Trend::Up
                } else {
                    Trend::Down
                };
                DailyPoint {
                    day: date.format("%a").to_string(),
                    date: date.format("%b %-d").to_string(),
                    high,
                    low,
                    status,
                    trend,
                }
            })
            .collect()
    }

    /// 4 points "Week 1".."Week 4", avg in [30, 89], confidence in [75, 94]
    pub fn weekly_series(&mut self) -> Vec<WeeklyPoint> {
        (1..=WEEKLY_POINTS)
            .map(|week| {
                let avg_aqi = self.rng.gen_range(30..=89);
                let status = match self.strategy {
                    StatusStrategy::Derived => band_of(avg_aqi),
                    StatusStrategy::Independent => self.moderate_with_probability(0.3),
                };
                let confidence = self.rng.gen_range(75..=94);
                WeeklyPoint {
                    week: format!("Week {}", week),
                    avg_aqi,
                    status,
                    confidence,
                }
            })
            .collect()
    }

    fn moderate_with_probability(&mut self, p: f64) -> SeverityBand {
        if self.rng.gen_bool(p) {
            SeverityBand::Moderate
        } else {
            SeverityBand::Good
        }
    }
}

fn band_of(aqi: u32) -> SeverityBand {
    classify(f64::from(aqi)).band
}
