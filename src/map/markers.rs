#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use serde::Serialize;

use super::projection::from_lon_lat;

/// A pin on the map, in WGS84 degrees.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapMarker {
    pub lon: f64,
    pub lat: f64,
    pub title: String,
}

impl MapMarker {
    pub fn new(lon: f64, lat: f64, title: impl Into<String>) -> Self {
        Self { lon, lat, title: title.into() }
    }
}

/// Kenyan cities followed by world capitals and hubs.
const DEFAULT_LOCATIONS: [(f64, f64, &str); 18] = [
    (36.8219, -1.2921, "Nairobi"),
    (37.0833, -1.0333, "Thika"),
    (37.6667, 0.0333, "Chuka"),
    (36.0800, -0.3031, "Nakuru"),
    (36.9564, -0.4167, "Nyeri"),
    (37.4500, -0.5700, "Embu"),
    (37.6500, 0.0500, "Meru"),
    (36.3167, -0.2667, "Nyahururu"),
    (-0.1278, 51.5074, "London"),
    (2.3522, 48.8566, "Paris"),
    (-74.0060, 40.7128, "New York"),
    (139.6917, 35.6895, "Tokyo"),
    (151.2093, -33.8688, "Sydney"),
    (37.6173, 55.7558, "Moscow"),
    (-43.1729, -22.9068, "Rio de Janeiro"),
    (31.2357, 30.0444, "Cairo"),
    (72.8777, 19.0760, "Mumbai"),
    (18.4241, -33.9249, "Cape Town"),
];

pub fn default_markers() -> Vec<MapMarker> {
    DEFAULT_LOCATIONS
        .iter()
        .map(|&(lon, lat, title)| MapMarker::new(lon, lat, title))
        .collect()
}

/// Initial view and pin styling handed to the map library.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    /// Id of the element the map renders into.
    pub target: String,
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: f64,
    pub icon_src: String,
    /// Icon anchor as fractions of its width/height.
    pub icon_anchor: [f64; 2],
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            target: "map".to_owned(),
            center_lon: 36.8219,
            center_lat: -1.2921,
            zoom: 3.0,
            icon_src: "/static/img/location_pin.png".to_owned(),
            icon_anchor: [0.5, 1.0],
        }
    }
}

/// Everything the host page's map script needs, already projected.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayer {
    pub target: String,
    pub center: [f64; 2],
    pub zoom: f64,
    pub icon: MarkerIcon,
    pub markers: Vec<ProjectedMarker>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub src: String,
    pub anchor: [f64; 2],
}

/// A marker record plus its projected position.
///
/// Keep the marker fields inline. `#[serde(flatten)]` serializes as a map,
/// and `serde_wasm_bindgen` hands maps to JS as `Map` instances.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectedMarker {
    pub lon: f64,
    pub lat: f64,
    pub title: String,
    /// EPSG:3857 position.
    pub coordinate: [f64; 2],
}

impl From<&MapMarker> for ProjectedMarker {
    fn from(marker: &MapMarker) -> Self {
        Self {
            lon: marker.lon,
            lat: marker.lat,
            title: marker.title.clone(),
            coordinate: from_lon_lat(marker.lon, marker.lat),
        }
    }
}

pub fn marker_layer(view: &MapView, markers: &[MapMarker]) -> MarkerLayer {
    MarkerLayer {
        target: view.target.clone(),
        center: from_lon_lat(view.center_lon, view.center_lat),
        zoom: view.zoom,
        icon: MarkerIcon { src: view.icon_src.clone(), anchor: view.icon_anchor },
        markers: markers.iter().map(ProjectedMarker::from).collect(),
    }
}
