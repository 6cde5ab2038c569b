//! Marker data for the standalone location map.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tiles, layers and rendering belong to the host page's map library. This
//! module only owns the data contract: `{lon, lat, title}` records, the
//! initial view, and their Web-Mercator projection.

pub mod markers;
pub mod projection;

/// Default marker layer as a plain JS object for the host page's map script.
///
/// # Errors
///
/// Returns the serialization failure as a JS error.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn map_marker_layer() -> Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue> {
    use serde::Serialize;

    let layer = markers::marker_layer(&markers::MapView::default(), &markers::default_markers());
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    layer.serialize(&serializer).map_err(wasm_bindgen::JsValue::from)
}
