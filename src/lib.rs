//! AirGuard dashboard service: air quality classification, mock forecast
//! generation and the JSON view models behind each dashboard screen.
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
