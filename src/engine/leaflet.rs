use js_sys::{Array, Object, Reflect};
use maud::Markup;
use wasm_bindgen::prelude::*;
use crate::engine::MapBackend;
use crate::error::SpotMapError;
use crate::model::{GeoPoint, LocationSpot, MapResult};
use crate::view::view::TileLayer;

// Leaflet bindings. `L` must already be loaded on the page; every call is
// `catch` so a missing library surfaces as an error instead of a trap.
#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: u8) -> Result<LeafletMap, JsValue>;

    #[derive(Clone, Debug)]
    pub type LeafletTileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn leaflet_tile_layer(url_template: &str, options: &Object) -> Result<LeafletTileLayer, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addTo)]
    fn add_layer_to(this: &LeafletTileLayer, map: &LeafletMap) -> Result<LeafletTileLayer, JsValue>;

    #[derive(Clone, Debug)]
    pub type LeafletMarker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn leaflet_marker(lat_lng: &Array) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addTo)]
    fn add_marker_to(this: &LeafletMarker, map: &LeafletMap) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = bindPopup)]
    fn bind_popup(this: &LeafletMarker, content: &str) -> Result<LeafletMarker, JsValue>;
}

fn js_error(action: &str, err: JsValue) -> SpotMapError {
    let message = err
        .as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", err));
    SpotMapError::Wasm(format!("{} failed: {}", action, message))
}

fn lat_lng(point: GeoPoint) -> Array {
    Array::of2(&JsValue::from_f64(point.lat), &JsValue::from_f64(point.lng))
}

/// Checks the container exists before Leaflet gets to it, so the caller
/// gets a named error rather than Leaflet's "Map container not found".
pub fn ensure_container(container_id: &str) -> MapResult<()> {
    let document = web_sys::window()
        .ok_or_else(|| SpotMapError::Wasm("No window".to_string()))?
        .document()
        .ok_or_else(|| SpotMapError::Wasm("No document".to_string()))?;

    document
        .get_element_by_id(container_id)
        .map(|_| ())
        .ok_or_else(|| SpotMapError::MissingContainer(container_id.to_string()))
}

/// Drives the page's global Leaflet (`L`).
#[derive(Clone, Debug, Default)]
pub struct LeafletBackend {
    markers: Vec<LeafletMarker>,
}

impl LeafletBackend {
    pub fn new() -> Self {
        LeafletBackend::default()
    }

    pub fn markers(&self) -> &[LeafletMarker] {
        &self.markers
    }
}

impl MapBackend for LeafletBackend {
    type Map = LeafletMap;

    fn create_map(&mut self, container_id: &str, center: GeoPoint, zoom: u8) -> MapResult<LeafletMap> {
        ensure_container(container_id)?;

        let map = leaflet_map(container_id).map_err(|e| js_error("L.map", e))?;
        map.set_view(&lat_lng(center), zoom)
            .map_err(|e| js_error("setView", e))?;
        Ok(map)
    }

    fn add_tile_layer(&mut self, map: &mut LeafletMap, layer: &TileLayer) -> MapResult<()> {
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("attribution"),
            &JsValue::from_str(&layer.attribution),
        )
        .map_err(|e| js_error("tile layer options", e))?;

        leaflet_tile_layer(&layer.url_template, &options)
            .map_err(|e| js_error("L.tileLayer", e))?
            .add_layer_to(map)
            .map_err(|e| js_error("tileLayer.addTo", e))?;
        Ok(())
    }

    fn add_marker(
        &mut self,
        map: &mut LeafletMap,
        position: GeoPoint,
        _spot: &LocationSpot,
        popup: &Markup,
    ) -> MapResult<()> {
        let marker = leaflet_marker(&lat_lng(position))
            .map_err(|e| js_error("L.marker", e))?
            .add_marker_to(map)
            .map_err(|e| js_error("marker.addTo", e))?
            .bind_popup(&popup.0)
            .map_err(|e| js_error("bindPopup", e))?;
        self.markers.push(marker);
        Ok(())
    }
}
