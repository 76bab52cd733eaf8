#![cfg(target_arch = "wasm32")]

use serde_json::{json, Value};
use spot_map::engine::leaflet::{ensure_container, LeafletBackend};
use spot_map::view::view::OSM_ATTRIBUTION;
use spot_map::{LocationSpot, MapOptions, MapRenderer, SpotMap, SpotMapError};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Minimal stand-in for Leaflet's factories; records every call on
// `window.__leafletCalls`.
const RECORDING_LEAFLET: &str = r#"
window.__leafletCalls = { maps: [], views: [], tiles: [], markers: [] };
window.L = {
    map: function (id) {
        window.__leafletCalls.maps.push(id);
        return {
            setView: function (center, zoom) {
                window.__leafletCalls.views.push({ center: center, zoom: zoom });
                return this;
            }
        };
    },
    tileLayer: function (url, options) {
        const tile = { url: url, attribution: options.attribution, added: false };
        window.__leafletCalls.tiles.push(tile);
        return { addTo: function (map) { tile.added = true; return this; } };
    },
    marker: function (latlng) {
        const marker = { latlng: latlng, added: false, popup: null };
        window.__leafletCalls.markers.push(marker);
        return {
            addTo: function (map) { marker.added = true; return this; },
            bindPopup: function (html) { marker.popup = html; return this; }
        };
    }
};
"#;

fn add_container(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
}

fn install_recording_leaflet() {
    js_sys::eval(RECORDING_LEAFLET).unwrap();
}

fn remove_leaflet() {
    js_sys::eval("delete window.L; delete window.__leafletCalls;").unwrap();
}

fn leaflet_calls() -> Value {
    let encoded = js_sys::eval("JSON.stringify(window.__leafletCalls)")
        .unwrap()
        .as_string()
        .unwrap();
    serde_json::from_str(&encoded).unwrap()
}

#[wasm_bindgen_test]
fn test_missing_container_is_reported() {
    let err = ensure_container("no-such-map").unwrap_err();
    assert!(matches!(err, SpotMapError::MissingContainer(id) if id == "no-such-map"));
}

#[wasm_bindgen_test]
fn test_existing_container_is_found() {
    add_container("found-map");
    assert!(ensure_container("found-map").is_ok());
}

#[wasm_bindgen_test]
fn test_render_without_leaflet_loaded_fails() {
    remove_leaflet();
    add_container("bare-map");
    let spots = vec![LocationSpot::new("A", 50.0, "9-5", true).with_coordinates(18.5, 73.8)];
    let mut renderer = MapRenderer::new(
        LeafletBackend::new(),
        MapOptions::default().with_container("bare-map"),
    );

    let err = renderer.render(&spots).unwrap_err();
    assert!(matches!(err, SpotMapError::Wasm(_)));
    assert!(renderer.backend().markers().is_empty());
}

#[wasm_bindgen_test]
fn test_leaflet_receives_view_tiles_and_markers() {
    install_recording_leaflet();
    add_container("leaflet-map");
    let spots = vec![
        LocationSpot::new("A", 50.0, "9-5", true).with_coordinates(18.5, 73.8),
        LocationSpot::new("B", 30.0, "24x7", false),
    ];
    let mut renderer = MapRenderer::new(
        LeafletBackend::new(),
        MapOptions::default().with_container("leaflet-map"),
    );

    let rendered = renderer.render(&spots).unwrap();
    assert_eq!(rendered.summary.rendered, 1);
    assert_eq!(renderer.backend().markers().len(), 1);

    let calls = leaflet_calls();
    assert_eq!(calls["maps"], json!(["leaflet-map"]));
    assert_eq!(calls["views"], json!([{ "center": [18.5204, 73.8567], "zoom": 12 }]));
    assert_eq!(calls["tiles"][0]["url"], json!("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"));
    assert_eq!(calls["tiles"][0]["attribution"], json!(OSM_ATTRIBUTION));
    assert_eq!(calls["tiles"][0]["added"], json!(true));

    let markers = calls["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["latlng"], json!([18.5, 73.8]));
    assert_eq!(markers[0]["added"], json!(true));
    assert_eq!(
        markers[0]["popup"],
        json!("<b>A</b><br>₹50/hr<br>Timings: 9-5<br><span style=\"color:green;\">Available</span>")
    );

    remove_leaflet();
}

#[wasm_bindgen_test]
fn test_spot_map_renders_json_through_leaflet() {
    install_recording_leaflet();
    add_container("json-map");
    let mut map = SpotMap::new(MapOptions::for_center(Some(19.076), Some(72.8777)).with_container("json-map"));
    map.set_zoom(14);

    let placed = map
        .render(r#"[{"location": "A", "price": 50, "timings": "9-5", "available": true, "lat": 18.5, "lng": 73.8},
                    {"location": "B", "price": 30, "timings": "24x7", "available": false, "lat": null, "lng": null}]"#)
        .unwrap();
    assert_eq!(placed, 1);

    let calls = leaflet_calls();
    assert_eq!(calls["views"], json!([{ "center": [19.076, 72.8777], "zoom": 14 }]));
    assert_eq!(calls["markers"].as_array().unwrap().len(), 1);

    remove_leaflet();
}
