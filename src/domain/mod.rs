// Domain layer - Air quality models and pure rules
pub mod air_quality;
pub mod alert;
pub mod dashboard;
pub mod forecast;
pub mod location;
pub mod pollutant;
pub mod site;
