// HTTP request handlers
use crate::domain::location::MapStyle;
use crate::error::DashboardError;
use crate::infrastructure::map_descriptor::DescriptorRenderer;
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use crate::presentation::views::{
    classification_view, label_classification_view, series_view, AboutView, AlertPreviewView,
    AlertsView, DailyView, DayOutlookView, ForecastView, HomeView, HourlyView, MapView,
    RealTimeView, WeeklyView,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Both parameters arrive as text so a blank `value=` can fall through to `label`
#[derive(Deserialize)]
pub struct ClassifyQuery {
    pub value: Option<String>,
    pub label: Option<String>,
}

#[derive(Deserialize)]
pub struct MapQuery {
    pub style: Option<String>,
}

#[derive(Deserialize)]
pub struct MapSessionRequest {
    #[serde(default)]
    pub access_token: String,
    pub style: Option<String>,
}

#[derive(Deserialize)]
pub struct AlertPreviewRequest {
    pub template: Option<String>,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn non_blank(param: Option<&str>) -> Option<&str> {
    param.map(str::trim).filter(|p| !p.is_empty())
}

fn parse_style(style: Option<&str>) -> Result<Option<MapStyle>, DashboardError> {
    non_blank(style).map(str::parse::<MapStyle>).transpose()
}

fn parse_aqi(value: &str) -> Result<f64, DashboardError> {
    value
        .parse::<f64>()
        .map_err(|_| DashboardError::BadRequest(format!("invalid AQI value '{}'", value)))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn home(State(state): State<Arc<AppState>>) -> ApiResult<HomeView> {
    let page = state.site_service.landing_page().await?;
    Ok(Json(page.into()))
}

pub async fn realtime(State(state): State<Arc<AppState>>) -> ApiResult<RealTimeView> {
    let snapshot = state.realtime_service.snapshot().await?;
    Ok(Json(snapshot.into()))
}

pub async fn forecasts(State(state): State<Arc<AppState>>) -> ApiResult<ForecastView> {
    Ok(Json(state.forecast_service.overview(today()).into()))
}

pub async fn hourly_forecast(State(state): State<Arc<AppState>>) -> ApiResult<Vec<HourlyView>> {
    Ok(Json(series_view(state.forecast_service.hourly())))
}

pub async fn daily_forecast(State(state): State<Arc<AppState>>) -> ApiResult<Vec<DailyView>> {
    Ok(Json(series_view(state.forecast_service.daily(today()))))
}

pub async fn weekly_forecast(State(state): State<Arc<AppState>>) -> ApiResult<Vec<WeeklyView>> {
    Ok(Json(series_view(state.forecast_service.weekly())))
}

/// Calendar outlook for a `YYYY-MM-DD` date
pub async fn day_outlook(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<DayOutlookView> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| DashboardError::InvalidDate(date.clone()))?;
    Ok(Json(state.forecast_service.day_outlook(date).into()))
}

/// Classify a numeric AQI (`?value=`) or a status label (`?label=`)
pub async fn classify(
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    match (non_blank(query.value.as_deref()), non_blank(query.label.as_deref())) {
        (Some(value), _) => Ok(Json(classification_view(parse_aqi(value)?)).into_response()),
        (None, Some(label)) => Ok(Json(label_classification_view(label)).into_response()),
        (None, None) => Err(DashboardError::MissingParameter("value or label").into()),
    }
}

pub async fn alerts(State(state): State<Arc<AppState>>) -> ApiResult<AlertsView> {
    let overview = state.alert_service.overview().await?;
    Ok(Json(overview.into()))
}

pub async fn preview_alert(
    State(state): State<Arc<AppState>>,
    request: Result<Json<AlertPreviewRequest>, JsonRejection>,
) -> ApiResult<AlertPreviewView> {
    let Json(request) = request?;
    let preview = state
        .alert_service
        .preview(request.template.as_deref())
        .await?;
    Ok(Json(preview.into()))
}

pub async fn about(State(state): State<Arc<AppState>>) -> ApiResult<AboutView> {
    let page = state.site_service.about_page().await?;
    Ok(Json(page.into()))
}

/// Map widget using the configured access token
pub async fn map_widget(
    query: Result<Query<MapQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<MapView> {
    let Query(query) = query?;
    let style = parse_style(query.style.as_deref())?;
    open_map(&state, &state.map_access_token, style).await
}

/// Map widget using a token the user entered; the token is not stored
pub async fn map_session(
    State(state): State<Arc<AppState>>,
    request: Result<Json<MapSessionRequest>, JsonRejection>,
) -> ApiResult<MapView> {
    let Json(request) = request?;
    let style = parse_style(request.style.as_deref())?;
    open_map(&state, &request.access_token, style).await
}

async fn open_map(
    state: &AppState,
    access_token: &str,
    style: Option<MapStyle>,
) -> ApiResult<MapView> {
    let widget = state
        .map_service
        .open(DescriptorRenderer::default(), access_token, style)
        .await?;
    Ok(Json(MapView::from_widget(&widget)))
}
