use serde_test::{Token, assert_ser_tokens};

use super::*;

// =============================================================
// Default data
// =============================================================

#[test]
fn default_markers_start_with_nairobi_and_cover_all_locations() {
    let markers = default_markers();
    assert_eq!(markers.len(), 18);
    assert_eq!(markers[0], MapMarker::new(36.8219, -1.2921, "Nairobi"));
    assert_eq!(markers[17].title, "Cape Town");
}

#[test]
fn default_markers_are_valid_coordinates() {
    for m in default_markers() {
        assert!((-180.0..=180.0).contains(&m.lon), "{} lon out of range", m.title);
        assert!((-90.0..=90.0).contains(&m.lat), "{} lat out of range", m.title);
    }
}

#[test]
fn default_view_is_centered_on_nairobi() {
    let view = MapView::default();
    assert_eq!(view.target, "map");
    assert_eq!((view.center_lon, view.center_lat), (36.8219, -1.2921));
    assert_eq!(view.zoom, 3.0);
    assert_eq!(view.icon_anchor, [0.5, 1.0]);
}

// =============================================================
// Marker layer
// =============================================================

#[test]
fn marker_layer_projects_center_and_markers() {
    let view = MapView::default();
    let layer = marker_layer(&view, &default_markers());
    assert_eq!(layer.center, from_lon_lat(36.8219, -1.2921));
    assert_eq!(layer.markers.len(), 18);
    assert_eq!(layer.markers[0].coordinate, layer.center);
}

#[test]
fn marker_layer_serializes_flat_marker_records() {
    let view = MapView::default();
    let layer = marker_layer(&view, &[MapMarker::new(0.0, 0.0, "Null Island")]);
    let json = serde_json::to_value(&layer).expect("layer serializes");
    assert_eq!(json["target"], "map");
    assert_eq!(json["icon"]["src"], "/static/img/location_pin.png");
    assert_eq!(json["markers"][0]["title"], "Null Island");
    assert_eq!(json["markers"][0]["lon"], 0.0);
    assert_eq!(json["markers"][0]["coordinate"][0], 0.0);
}

#[test]
fn projected_marker_serializes_as_plain_struct() {
    let marker = ProjectedMarker::from(&MapMarker::new(0.0, 0.0, "Null Island"));
    assert_ser_tokens(
        &marker,
        &[
            Token::Struct { name: "ProjectedMarker", len: 4 },
            Token::Str("lon"),
            Token::F64(0.0),
            Token::Str("lat"),
            Token::F64(0.0),
            Token::Str("title"),
            Token::Str("Null Island"),
            Token::Str("coordinate"),
            Token::Tuple { len: 2 },
            Token::F64(0.0),
            Token::F64(0.0),
            Token::TupleEnd,
            Token::StructEnd,
        ],
    );
}

#[test]
fn marker_layer_serializes_as_struct_of_structs() {
    let layer = marker_layer(&MapView::default(), &[]);
    assert_ser_tokens(
        &layer,
        &[
            Token::Struct { name: "MarkerLayer", len: 5 },
            Token::Str("target"),
            Token::Str("map"),
            Token::Str("center"),
            Token::Tuple { len: 2 },
            Token::F64(layer.center[0]),
            Token::F64(layer.center[1]),
            Token::TupleEnd,
            Token::Str("zoom"),
            Token::F64(3.0),
            Token::Str("icon"),
            Token::Struct { name: "MarkerIcon", len: 2 },
            Token::Str("src"),
            Token::Str("/static/img/location_pin.png"),
            Token::Str("anchor"),
            Token::Tuple { len: 2 },
            Token::F64(0.5),
            Token::F64(1.0),
            Token::TupleEnd,
            Token::StructEnd,
            Token::Str("markers"),
            Token::Seq { len: Some(0) },
            Token::SeqEnd,
            Token::StructEnd,
        ],
    );
}

#[test]
fn empty_marker_list_still_yields_view() {
    let layer = marker_layer(&MapView::default(), &[]);
    assert!(layer.markers.is_empty());
    assert_eq!(layer.zoom, 3.0);
}
