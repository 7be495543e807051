// Map renderer that hands the init request to the browser as a JSON descriptor
use crate::application::map_widget::{MapInitRequest, MapRenderer};
use crate::error::DashboardError;

/// The browser's mapping library does the actual drawing; the "instance" on this
/// side is the descriptor it is created from.
#[derive(Debug, Default)]
pub struct DescriptorRenderer {
    live: usize,
}

impl MapRenderer for DescriptorRenderer {
    type Handle = MapInitRequest;

    fn initialize(&mut self, request: &MapInitRequest) -> Result<MapInitRequest, DashboardError> {
        if request.markers.is_empty() {
            return Err(DashboardError::MapInitialization(
                "no monitoring locations to display".to_string(),
            ));
        }
        self.live += 1;
        tracing::debug!("Created map descriptor ({} live)", self.live);
        Ok(request.clone())
    }

    fn teardown(&mut self, handle: MapInitRequest) {
        self.live = self.live.saturating_sub(1);
        tracing::debug!("Released {:?} map descriptor ({} live)", handle.style, self.live);
    }
}
