use crate::application::mock_series::StatusStrategy;
use crate::domain::location::MapStyle;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "AIRGUARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub map: MapSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MapSettings {
    /// Mapbox public token; empty means the widget asks the user for one
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub default_style: MapStyle,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ForecastSettings {
    pub seed: Option<u64>,
    #[serde(default)]
    pub status_strategy: StatusStrategy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSettings {
    pub location: String,
}

/// Defaults, then `config/dashboard.{toml,yaml,json}` if present, then
/// `AIRGUARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("site.location", "New Delhi, India")?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_toml_source() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                bind = "127.0.0.1:3000"

                [map]
                access_token = "pk.abc"
                default_style = "street"

                [forecast]
                seed = 7
                status_strategy = "independent"

                [site]
                location = "Mumbai, India"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: DashboardConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.map.access_token, "pk.abc");
        assert_eq!(config.map.default_style, MapStyle::Street);
        assert_eq!(config.forecast.seed, Some(7));
        assert_eq!(config.forecast.status_strategy, StatusStrategy::Independent);
        assert_eq!(config.site.location, "Mumbai, India");
    }

    #[test]
    fn test_optional_sections_default() {
        let settings = config::Config::builder()
            .set_default("server.bind", "0.0.0.0:8080")
            .unwrap()
            .set_default("site.location", "New Delhi, India")
            .unwrap()
            .build()
            .unwrap();

        let config: DashboardConfig = settings.try_deserialize().unwrap();
        assert!(config.map.access_token.is_empty());
        assert_eq!(config.map.default_style, MapStyle::Satellite);
        assert_eq!(config.forecast.seed, None);
        assert_eq!(config.forecast.status_strategy, StatusStrategy::Derived);
    }
}
