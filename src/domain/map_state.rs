//! Camera and overlay description for the map panel.
//!
//! Only describes what should be shown; the map component does the drawing
//! and fetches the outline resource itself.

use serde::Serialize;

use super::entities::Coordinate;

pub const STATEWIDE_CENTER: Coordinate = Coordinate::new(36.7, -119.4);
pub const DEFAULT_ZOOM: f64 = 5.0;
pub const RESULT_ZOOM: f64 = 12.0;
pub const RESULT_PITCH: f64 = 45.0;

pub const BASEMAP_STYLE: &str =
    "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json";
pub const CALIFORNIA_OUTLINE_URL: &str = "https://raw.githubusercontent.com/codeforamerica/click_that_hood/master/public/data/california.geojson";

const ACCENT: &str = "#00d2ff";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapMode {
    Default,
    Result,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinate,
    pub color: &'static str,
    pub size: u32,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlayLayer {
    pub source: &'static str,
    pub kind: &'static str,
    pub color: &'static str,
    pub opacity: f64,
    pub line_width: f64,
}

impl OverlayLayer {
    pub fn california_outline() -> Self {
        Self {
            source: CALIFORNIA_OUTLINE_URL,
            kind: "line",
            color: ACCENT,
            opacity: 0.5,
            line_width: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapViewState {
    pub style: &'static str,
    pub center: Coordinate,
    pub zoom: f64,
    pub pitch: f64,
    pub marker: Option<MapMarker>,
    pub overlay: Option<OverlayLayer>,
}

impl MapViewState {
    /// Statewide view with nothing drawn on top.
    pub fn statewide() -> Self {
        Self {
            style: BASEMAP_STYLE,
            center: STATEWIDE_CENTER,
            zoom: DEFAULT_ZOOM,
            pitch: 0.0,
            marker: None,
            overlay: None,
        }
    }

    /// Close-up tilted view on a predicted property.
    pub fn focused_on(position: Coordinate) -> Self {
        Self {
            style: BASEMAP_STYLE,
            center: position,
            zoom: RESULT_ZOOM,
            pitch: RESULT_PITCH,
            marker: Some(MapMarker {
                position,
                color: ACCENT,
                size: 25,
                opacity: 0.9,
            }),
            overlay: Some(OverlayLayer::california_outline()),
        }
    }
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::statewide()
    }
}

/// Result mode without a coordinate falls back to the statewide view.
pub fn build(mode: MapMode, coordinate: Option<Coordinate>) -> MapViewState {
    match (mode, coordinate) {
        (MapMode::Result, Some(position)) => MapViewState::focused_on(position),
        _ => MapViewState::statewide(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_statewide_without_marker() {
        let state = build(MapMode::Default, None);
        assert_eq!(state.center, Coordinate::new(36.7, -119.4));
        assert_eq!(state.zoom, 5.0);
        assert!(state.marker.is_none());
        assert!(state.overlay.is_none());
    }

    #[test]
    fn default_mode_ignores_coordinate() {
        let state = build(MapMode::Default, Some(Coordinate::new(34.05, -118.24)));
        assert_eq!(state, MapViewState::statewide());
    }

    #[test]
    fn result_mode_centers_and_marks_the_input() {
        let position = Coordinate::new(34.05, -118.24);
        let state = build(MapMode::Result, Some(position));
        assert_eq!(state.center, position);
        assert_eq!(state.zoom, 12.0);
        assert_eq!(state.pitch, 45.0);
        assert_eq!(state.marker.as_ref().map(|m| m.position), Some(position));
        assert_eq!(
            state.overlay.as_ref().map(|layer| layer.source),
            Some(CALIFORNIA_OUTLINE_URL)
        );
    }

    #[test]
    fn result_mode_without_coordinate_degrades_to_default() {
        assert_eq!(build(MapMode::Result, None), MapViewState::statewide());
    }

    #[test]
    fn serializes_for_the_map_script() {
        let state = MapViewState::focused_on(Coordinate::new(34.0, -118.0));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["center"]["lat"], 34.0);
        assert_eq!(json["overlay"]["kind"], "line");
        assert_eq!(json["marker"]["size"], 25);
    }
}
