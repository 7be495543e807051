// Infrastructure layer - Configuration and adapters
pub mod config;
pub mod map_descriptor;
pub mod static_repository;
