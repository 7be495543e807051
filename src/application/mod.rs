// Application layer - Use cases over the domain
pub mod alert_service;
pub mod dashboard_repository;
pub mod forecast_service;
pub mod map_service;
pub mod map_widget;
pub mod mock_series;
pub mod realtime_service;
pub mod site_service;
