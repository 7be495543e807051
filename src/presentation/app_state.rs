// Application state for HTTP handlers
use crate::application::alert_service::AlertService;
use crate::application::forecast_service::ForecastService;
use crate::application::map_service::MapService;
use crate::application::realtime_service::RealTimeService;
use crate::application::site_service::SiteService;

#[derive(Clone)]
pub struct AppState {
    pub site_service: SiteService,
    pub realtime_service: RealTimeService,
    pub forecast_service: ForecastService,
    pub alert_service: AlertService,
    pub map_service: MapService,
    /// Token from configuration; empty when the user must supply one
    pub map_access_token: String,
}
