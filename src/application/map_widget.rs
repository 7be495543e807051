// Map widget session
//
// Owns at most one live map handle from an external renderer. The handle is
// released on reconfiguration, on returning to the credential prompt, and on drop.
use crate::domain::air_quality::SeverityBand;
use crate::domain::location::{LocationSample, MapStyle};
use crate::error::DashboardError;
use serde::Serialize;

pub const MAP_CENTER: (f64, f64) = (77.2090, 20.5937);
pub const MAP_ZOOM: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub title: String,
    pub aqi: u32,
    pub status: SeverityBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub aqi: u32,
    pub color: &'static str,
    pub popup: MarkerPopup,
}

impl From<&LocationSample> for MarkerSpec {
    fn from(location: &LocationSample) -> Self {
        Self {
            name: location.name.clone(),
            longitude: location.longitude,
            latitude: location.latitude,
            aqi: location.aqi,
            color: location.color(),
            popup: MarkerPopup {
                title: location.name.clone(),
                aqi: location.aqi,
                status: location.status(),
            },
        }
    }
}

/// Everything the mapping library needs to create one map instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapInitRequest {
    pub access_token: String,
    pub style: MapStyle,
    pub style_url: &'static str,
    pub center: (f64, f64),
    pub zoom: f64,
    pub markers: Vec<MarkerSpec>,
}

/// External mapping collaborator. Rendering is fire-and-forget; nothing flows back
/// except the handle used for teardown.
pub trait MapRenderer {
    type Handle;

    fn initialize(&mut self, request: &MapInitRequest) -> Result<Self::Handle, DashboardError>;

    fn teardown(&mut self, handle: Self::Handle);
}

pub enum WidgetState<'a, H> {
    /// No usable credential: ask the user for one
    CredentialPrompt,
    Active(&'a H),
}

pub struct MapWidget<R: MapRenderer> {
    renderer: R,
    locations: Vec<LocationSample>,
    style: MapStyle,
    access_token: Option<String>,
    handle: Option<R::Handle>,
}

impl<R: MapRenderer> MapWidget<R> {
    pub fn new(renderer: R, locations: Vec<LocationSample>, style: MapStyle) -> Self {
        Self {
            renderer,
            locations,
            style,
            access_token: None,
            handle: None,
        }
    }

    /// Accept a credential and initialize the map. Blank input keeps the prompt.
    pub fn submit_token(&mut self, token: &str) -> Result<bool, DashboardError> {
        let token = token.trim();
        if token.is_empty() {
            tracing::debug!("Map credential is empty, staying on prompt");
            return Ok(false);
        }
        self.access_token = Some(token.to_string());
        self.activate()?;
        Ok(true)
    }

    pub fn set_style(&mut self, style: MapStyle) -> Result<(), DashboardError> {
        if self.style == style {
            return Ok(());
        }
        self.style = style;
        if self.handle.is_some() {
            self.activate()?;
        }
        Ok(())
    }

    /// Tear the map down and show the credential prompt again
    pub fn request_token_change(&mut self) {
        self.release();
        self.access_token = None;
    }

    pub fn style(&self) -> MapStyle {
        self.style
    }

    pub fn state(&self) -> WidgetState<'_, R::Handle> {
        match &self.handle {
            Some(handle) => WidgetState::Active(handle),
            None => WidgetState::CredentialPrompt,
        }
    }

    fn init_request(&self, access_token: &str) -> MapInitRequest {
        MapInitRequest {
            access_token: access_token.to_string(),
            style: self.style,
            style_url: self.style.style_url(),
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers: self.locations.iter().map(MarkerSpec::from).collect(),
        }
    }

    fn activate(&mut self) -> Result<(), DashboardError> {
        self.release();
        let Some(token) = self.access_token.as_deref() else {
            return Ok(());
        };
        let request = self.init_request(token);
        tracing::debug!(
            "Initializing map with style {:?} and {} markers",
            request.style,
            request.markers.len()
        );
        self.handle = Some(self.renderer.initialize(&request)?);
        Ok(())
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!("Tearing down map instance");
            self.renderer.teardown(handle);
        }
    }
}

impl<R: MapRenderer> Drop for MapWidget<R> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        initialized: Vec<MapInitRequest>,
        torn_down: Vec<usize>,
    }

    /// Records every call; handles are sequence numbers
    #[derive(Clone, Default)]
    struct RecordingRenderer {
        calls: Rc<RefCell<Calls>>,
    }

    impl MapRenderer for RecordingRenderer {
        type Handle = usize;

        fn initialize(&mut self, request: &MapInitRequest) -> Result<usize, DashboardError> {
            let mut calls = self.calls.borrow_mut();
            calls.initialized.push(request.clone());
            Ok(calls.initialized.len())
        }

        fn teardown(&mut self, handle: usize) {
            self.calls.borrow_mut().torn_down.push(handle);
        }
    }

    fn locations() -> Vec<LocationSample> {
        vec![
            LocationSample::new("New Delhi", 77.2090, 28.6139, 156),
            LocationSample::new("Mumbai", 72.8777, 19.0760, 89),
            LocationSample::new("Bangalore", 77.5946, 12.9716, 65),
            LocationSample::new("Chennai", 80.2707, 13.0827, 78),
            LocationSample::new("Kolkata", 88.3639, 22.5726, 134),
        ]
    }

    #[test]
    fn test_empty_token_shows_prompt_without_initializing() {
        let renderer = RecordingRenderer::default();
        let mut widget = MapWidget::new(renderer.clone(), locations(), MapStyle::Street);

        assert!(!widget.submit_token("").unwrap());
        assert!(!widget.submit_token("   ").unwrap());
        assert!(matches!(widget.state(), WidgetState::CredentialPrompt));
        assert!(renderer.calls.borrow().initialized.is_empty());
    }

    #[test]
    fn test_token_initializes_once_with_all_markers() {
        let renderer = RecordingRenderer::default();
        let mut widget = MapWidget::new(renderer.clone(), locations(), MapStyle::Street);

        assert!(widget.submit_token("pk.test").unwrap());
        assert!(matches!(widget.state(), WidgetState::Active(&1)));

        let calls = renderer.calls.borrow();
        assert_eq!(calls.initialized.len(), 1);
        let request = &calls.initialized[0];
        assert_eq!(request.access_token, "pk.test");
        assert_eq!(request.style_url, "mapbox://styles/mapbox/light-v11");
        assert_eq!(request.center, (77.2090, 20.5937));

        let summary: Vec<(&str, u32, SeverityBand)> = request
            .markers
            .iter()
            .map(|m| (m.name.as_str(), m.aqi, m.popup.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("New Delhi", 156, SeverityBand::Unhealthy),
                ("Mumbai", 89, SeverityBand::Moderate),
                ("Bangalore", 65, SeverityBand::Moderate),
                ("Chennai", 78, SeverityBand::Moderate),
                ("Kolkata", 134, SeverityBand::UnhealthyForSensitiveGroups),
            ]
        );
        assert_eq!(request.markers[0].color, "#ff0000");
        assert_eq!(request.markers[4].color, "#ff7e00");
    }

    #[test]
    fn test_style_change_reinitializes() {
        let renderer = RecordingRenderer::default();
        let mut widget = MapWidget::new(renderer.clone(), locations(), MapStyle::Satellite);
        widget.submit_token("pk.test").unwrap();

        widget.set_style(MapStyle::Street).unwrap();
        widget.set_style(MapStyle::Street).unwrap();

        let calls = renderer.calls.borrow();
        assert_eq!(calls.initialized.len(), 2);
        assert_eq!(calls.torn_down, vec![1]);
        assert_eq!(calls.initialized[1].style, MapStyle::Street);
    }

    #[test]
    fn test_style_change_before_token_does_not_initialize() {
        let renderer = RecordingRenderer::default();
        let mut widget = MapWidget::new(renderer.clone(), locations(), MapStyle::Satellite);
        widget.set_style(MapStyle::Street).unwrap();

        assert!(renderer.calls.borrow().initialized.is_empty());
        assert_eq!(widget.style(), MapStyle::Street);
    }

    #[test]
    fn test_token_change_and_drop_release_handle() {
        let renderer = RecordingRenderer::default();
        {
            let mut widget = MapWidget::new(renderer.clone(), locations(), MapStyle::Satellite);
            widget.submit_token("pk.first").unwrap();
            widget.request_token_change();
            assert!(matches!(widget.state(), WidgetState::CredentialPrompt));

            widget.submit_token("pk.second").unwrap();
        }

        let calls = renderer.calls.borrow();
        assert_eq!(calls.initialized.len(), 2);
        assert_eq!(calls.torn_down, vec![1, 2]);
    }
}
