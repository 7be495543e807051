// Map service - Opens map widget sessions over the monitoring locations
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::map_widget::{MapRenderer, MapWidget};
use crate::domain::location::MapStyle;
use crate::error::DashboardError;
use std::sync::Arc;

#[derive(Clone)]
pub struct MapService {
    repository: Arc<dyn DashboardRepository>,
    default_style: MapStyle,
}

impl MapService {
    pub fn new(repository: Arc<dyn DashboardRepository>, default_style: MapStyle) -> Self {
        Self {
            repository,
            default_style,
        }
    }

    /// Build a widget and submit `access_token`. A blank token leaves the widget
    /// on the credential prompt without touching the renderer.
    pub async fn open<R: MapRenderer>(
        &self,
        renderer: R,
        access_token: &str,
        style: Option<MapStyle>,
    ) -> Result<MapWidget<R>, DashboardError> {
        let locations = self.repository.monitoring_locations().await?;
        let style = style.unwrap_or(self.default_style);

        let mut widget = MapWidget::new(renderer, locations, style);
        if !widget.submit_token(access_token)? {
            tracing::info!("No map access token available, prompting for one");
        }
        Ok(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::map_widget::WidgetState;
    use crate::infrastructure::map_descriptor::DescriptorRenderer;
    use crate::infrastructure::static_repository::StaticRepository;

    fn service() -> MapService {
        MapService::new(
            Arc::new(StaticRepository::new("New Delhi, India")),
            MapStyle::Satellite,
        )
    }

    #[tokio::test]
    async fn test_open_without_token_prompts() {
        let widget = service()
            .open(DescriptorRenderer::default(), "", None)
            .await
            .unwrap();
        assert!(matches!(widget.state(), WidgetState::CredentialPrompt));
        assert_eq!(widget.style(), MapStyle::Satellite);
    }

    #[tokio::test]
    async fn test_open_with_token_uses_requested_style() {
        let widget = service()
            .open(DescriptorRenderer::default(), "pk.test", Some(MapStyle::Street))
            .await
            .unwrap();
        match widget.state() {
            WidgetState::Active(descriptor) => {
                assert_eq!(descriptor.style, MapStyle::Street);
                assert_eq!(descriptor.markers.len(), 5);
            }
            WidgetState::CredentialPrompt => panic!("expected an active map"),
        }
    }
}
