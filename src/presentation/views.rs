// Mapper from domain models to the JSON view models each screen renders
use crate::application::alert_service::{AlertOverview, AlertPreview};
use crate::application::forecast_service::{ForecastOverview, HOURLY_PREVIEW};
use crate::application::map_widget::{MapInitRequest, MapRenderer, MapWidget, WidgetState};
use crate::application::realtime_service::RealTimeSnapshot;
use crate::application::site_service::{AboutPage, LandingPage};
use crate::domain::air_quality::{
    badge_tone_for_label, classify, BadgeTone, LimitTone, SeverityBand,
};
use crate::domain::alert::{
    AlertHistoryEntry, AlertSettings, AlertTemplate, PollutantThreshold, TEMPLATE_VARIABLES,
};
use crate::domain::dashboard::{ConditionTrend, CurrentConditions, WeatherCondition};
use crate::domain::forecast::{
    DailyPoint, DayOutlook, ForecastInsights, HourlyPoint, ModelInfo, Trend, WeeklyPoint,
};
use crate::domain::location::MapStyle;
use crate::domain::pollutant::PollutantReading;
use crate::domain::site::{Feature, Milestone, Stat, TeamMember};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BandView {
    pub band: SeverityBand,
    pub label: &'static str,
    pub color: &'static str,
    pub badge_tone: BadgeTone,
}

impl From<SeverityBand> for BandView {
    fn from(band: SeverityBand) -> Self {
        Self {
            band,
            label: band.label(),
            color: band.color(),
            badge_tone: band.badge_tone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClassificationView {
    pub value: f64,
    #[serde(flatten)]
    pub band: BandView,
}

pub fn classification_view(value: f64) -> ClassificationView {
    ClassificationView {
        value,
        band: classify(value).band.into(),
    }
}

/// Badge lookup by status label; unknown labels get a neutral tone and no band
#[derive(Debug, Serialize)]
pub struct LabelClassificationView {
    pub label: String,
    pub band: Option<SeverityBand>,
    pub color: Option<&'static str>,
    pub badge_tone: BadgeTone,
}

pub fn label_classification_view(label: &str) -> LabelClassificationView {
    let band = SeverityBand::from_label(label);
    LabelClassificationView {
        label: label.to_string(),
        band,
        color: band.map(SeverityBand::color),
        badge_tone: badge_tone_for_label(label),
    }
}

#[derive(Debug, Serialize)]
pub struct CurrentView {
    pub aqi: u32,
    pub status: BandView,
    pub location: String,
    pub last_updated: String,
    pub trend: ConditionTrend,
}

impl From<CurrentConditions> for CurrentView {
    fn from(current: CurrentConditions) -> Self {
        Self {
            aqi: current.aqi,
            status: current.status().into(),
            location: current.location,
            last_updated: current.last_updated,
            trend: current.trend,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PollutantView {
    pub name: &'static str,
    pub value: f64,
    pub unit: String,
    pub display_value: String,
    pub limit: f64,
    pub percentage: f64,
    pub percentage_label: String,
    pub bar_width: f64,
    pub limit_tone: LimitTone,
    pub status: BandView,
}

impl From<PollutantReading> for PollutantView {
    fn from(reading: PollutantReading) -> Self {
        let percentage = reading.percentage();
        Self {
            name: reading.pollutant.name(),
            value: reading.value,
            display_value: reading.display_value(),
            limit: reading.limit,
            percentage,
            percentage_label: format!("{:.1}%", percentage),
            bar_width: reading.bar_width(),
            limit_tone: reading.limit_tone(),
            status: reading.status.into(),
            unit: reading.unit,
        }
    }
}

fn pollutant_views(readings: Vec<PollutantReading>) -> Vec<PollutantView> {
    readings.into_iter().map(PollutantView::from).collect()
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub current: CurrentView,
    pub pollutants: Vec<PollutantView>,
    pub weather: Vec<WeatherCondition>,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

impl From<LandingPage> for HomeView {
    fn from(page: LandingPage) -> Self {
        Self {
            current: page.current.into(),
            pollutants: pollutant_views(page.pollutants),
            weather: page.weather,
            features: page.features,
            stats: page.stats,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RealTimeView {
    pub current: CurrentView,
    pub pollutants: Vec<PollutantView>,
    pub weather: Vec<WeatherCondition>,
}

impl From<RealTimeSnapshot> for RealTimeView {
    fn from(snapshot: RealTimeSnapshot) -> Self {
        Self {
            current: snapshot.current.into(),
            pollutants: pollutant_views(snapshot.pollutants),
            weather: snapshot.weather,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HourlyView {
    pub hour: String,
    pub aqi: u32,
    pub color: &'static str,
    pub status: BandView,
}

impl From<HourlyPoint> for HourlyView {
    fn from(point: HourlyPoint) -> Self {
        Self {
            color: classify(f64::from(point.aqi)).color,
            hour: point.hour,
            aqi: point.aqi,
            status: point.status.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DailyView {
    pub day: String,
    pub date: String,
    pub high: u32,
    pub low: u32,
    pub color: &'static str,
    pub status: BandView,
    pub trend: Trend,
}

impl From<DailyPoint> for DailyView {
    fn from(point: DailyPoint) -> Self {
        Self {
            color: classify(f64::from(point.high)).color,
            day: point.day,
            date: point.date,
            high: point.high,
            low: point.low,
            status: point.status.into(),
            trend: point.trend,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeeklyView {
    pub week: String,
    pub avg_aqi: u32,
    pub color: &'static str,
    pub status: BandView,
    pub confidence: u32,
}

impl From<WeeklyPoint> for WeeklyView {
    fn from(point: WeeklyPoint) -> Self {
        Self {
            color: classify(f64::from(point.avg_aqi)).color,
            week: point.week,
            avg_aqi: point.avg_aqi,
            status: point.status.into(),
            confidence: point.confidence,
        }
    }
}

pub fn series_view<T, V: From<T>>(points: Vec<T>) -> Vec<V> {
    points.into_iter().map(V::from).collect()
}

#[derive(Debug, Serialize)]
pub struct ModelView {
    pub architecture: String,
    pub accuracy: String,
    pub update_frequency: String,
}

impl From<ModelInfo> for ModelView {
    fn from(model: ModelInfo) -> Self {
        Self {
            architecture: model.architecture,
            accuracy: format!("{}%", model.accuracy_percent),
            update_frequency: model.update_frequency,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InsightsView {
    pub hourly: String,
    pub daily: String,
    pub weekly: String,
}

impl From<ForecastInsights> for InsightsView {
    fn from(insights: ForecastInsights) -> Self {
        Self {
            hourly: insights.hourly,
            daily: insights.daily,
            weekly: insights.weekly,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastView {
    pub location: String,
    pub accuracy_badge: String,
    pub model: ModelView,
    pub insights: InsightsView,
    pub hourly_preview: Vec<HourlyView>,
    pub hourly: Vec<HourlyView>,
    pub daily: Vec<DailyView>,
    pub weekly: Vec<WeeklyView>,
}

impl From<ForecastOverview> for ForecastView {
    fn from(overview: ForecastOverview) -> Self {
        let hourly: Vec<HourlyView> = series_view(overview.hourly);
        let hourly_preview = hourly
            .iter()
            .take(HOURLY_PREVIEW)
            .map(|h| HourlyView {
                hour: h.hour.clone(),
                aqi: h.aqi,
                color: h.color,
                status: h.status.band.into(),
            })
            .collect();

        Self {
            location: overview.location,
            accuracy_badge: format!("{}% Accuracy", overview.model.accuracy_percent),
            model: overview.model.into(),
            insights: overview.insights.into(),
            hourly_preview,
            hourly,
            daily: series_view(overview.daily),
            weekly: series_view(overview.weekly),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PeriodView {
    pub label: String,
    pub aqi: u32,
    pub status: BandView,
}

#[derive(Debug, Serialize)]
pub struct DayOutlookView {
    pub date: String,
    pub title: String,
    pub aqi: u32,
    pub status: BandView,
    pub summary: String,
    pub periods: Vec<PeriodView>,
}

impl From<DayOutlook> for DayOutlookView {
    fn from(outlook: DayOutlook) -> Self {
        Self {
            date: outlook.date.format("%Y-%m-%d").to_string(),
            title: format!("Forecast for {}", outlook.date.format("%A, %B %-d, %Y")),
            aqi: outlook.aqi,
            status: outlook.status.into(),
            summary: outlook.summary,
            periods: outlook
                .periods
                .into_iter()
                .map(|p| PeriodView {
                    label: p.label,
                    aqi: p.aqi,
                    status: p.status.into(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlertsView {
    pub settings: AlertSettings,
    pub templates: Vec<AlertTemplate>,
    pub template_variables: Vec<String>,
    pub history: Vec<AlertHistoryEntry>,
    pub triggered: Vec<PollutantThreshold>,
}

impl From<AlertOverview> for AlertsView {
    fn from(overview: AlertOverview) -> Self {
        Self {
            settings: overview.settings,
            templates: overview.templates,
            template_variables: TEMPLATE_VARIABLES
                .iter()
                .map(|v| format!("{{{}}}", v))
                .collect(),
            history: overview.history,
            triggered: overview.triggered,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlertPreviewView {
    pub message: String,
    pub aqi: u32,
    pub status: String,
    pub location: String,
    pub time: String,
    pub pollutant: String,
}

impl From<AlertPreview> for AlertPreviewView {
    fn from(preview: AlertPreview) -> Self {
        Self {
            message: preview.message,
            aqi: preview.context.aqi,
            status: preview.context.status,
            location: preview.context.location,
            time: preview.context.time,
            pollutant: preview.context.pollutant,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MilestoneView {
    pub year: String,
    pub short_year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub team: Vec<TeamMember>,
    pub milestones: Vec<MilestoneView>,
}

impl From<AboutPage> for AboutView {
    fn from(page: AboutPage) -> Self {
        Self {
            features: page.features,
            stats: page.stats,
            team: page.team,
            milestones: page
                .milestones
                .into_iter()
                .map(|m: Milestone| MilestoneView {
                    short_year: m.short_year().to_string(),
                    year: m.year,
                    title: m.title,
                    description: m.description,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MapView {
    CredentialPrompt { style: MapStyle, message: String },
    Ready { map: MapInitRequest },
}

impl MapView {
    pub fn from_widget<R>(widget: &MapWidget<R>) -> Self
    where
        R: MapRenderer<Handle = MapInitRequest>,
    {
        match widget.state() {
            WidgetState::Active(descriptor) => MapView::Ready {
                map: descriptor.clone(),
            },
            WidgetState::CredentialPrompt => MapView::CredentialPrompt {
                style: widget.style(),
                message: "Enter your Mapbox public token to enable the interactive map."
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pollutant::Pollutant;

    #[test]
    fn test_pollutant_view_formats_percentage() {
        let view = PollutantView::from(PollutantReading::new(
            Pollutant::Co,
            0.5,
            "ppm",
            9.0,
            SeverityBand::Good,
        ));
        assert_eq!(view.percentage_label, "5.6%");
        assert_eq!(view.display_value, "0.5 ppm");
        assert_eq!(view.limit_tone, LimitTone::Green);
    }

    #[test]
    fn test_classification_view_serializes_flat() {
        let json = serde_json::to_value(classification_view(134.0)).unwrap();
        assert_eq!(json["band"], "unhealthy_for_sensitive_groups");
        assert_eq!(json["label"], "Unhealthy for Sensitive Groups");
        assert_eq!(json["color"], "#ff7e00");
        assert_eq!(json["badge_tone"], "orange");
        assert_eq!(json["value"], 134.0);
    }

    #[test]
    fn test_label_classification_view() {
        let view = label_classification_view("unhealthy for sensitive groups");
        assert_eq!(view.band, Some(SeverityBand::UnhealthyForSensitiveGroups));
        assert_eq!(view.color, Some("#ff7e00"));
        assert_eq!(view.badge_tone, BadgeTone::Orange);

        let unknown = label_classification_view("smoky");
        assert_eq!(unknown.band, None);
        assert_eq!(unknown.badge_tone, BadgeTone::Neutral);
    }
}
