// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    about, alerts, classify, daily_forecast, day_outlook, forecasts, health_check, home,
    hourly_forecast, map_session, map_widget, preview_alert, realtime, weekly_forecast,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/home", get(home))
        .route("/api/realtime", get(realtime))
        .route("/api/forecasts", get(forecasts))
        .route("/api/forecasts/hourly", get(hourly_forecast))
        .route("/api/forecasts/daily", get(daily_forecast))
        .route("/api/forecasts/weekly", get(weekly_forecast))
        .route("/api/forecasts/day/:date", get(day_outlook))
        .route("/api/classify", get(classify))
        .route("/api/alerts", get(alerts))
        .route("/api/alerts/preview", post(preview_alert))
        .route("/api/about", get(about))
        .route("/api/map", get(map_widget))
        .route("/api/map/session", post(map_session))
        .with_state(state)
}
