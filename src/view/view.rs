use crate::engine::leaflet::LeafletBackend;
use crate::engine::renderer::MapRenderer;
use crate::model::{parse_spots, GeoPoint, MapResult, SpotFilter};

pub const DEFAULT_CONTAINER_ID: &str = "map";
pub const DEFAULT_LAT: f64 = 18.5204;
pub const DEFAULT_LNG: f64 = 73.8567;
pub const DEFAULT_ZOOM: u8 = 12;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors";

// Base layer source; the attribution is required by the tile provider
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    pub fn new(url_template: impl Into<String>, attribution: impl Into<String>) -> Self {
        TileLayer {
            url_template: url_template.into(),
            attribution: attribution.into(),
        }
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        TileLayer::new(OSM_TILE_URL, OSM_ATTRIBUTION)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub container_id: String,
    pub center: GeoPoint,
    pub zoom: u8,
    pub tile_layer: TileLayer,
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            center: GeoPoint::new(DEFAULT_LAT, DEFAULT_LNG),
            zoom: DEFAULT_ZOOM,
            tile_layer: TileLayer::default(),
        }
    }
}

impl MapOptions {
    /// Default options with the center overridden per axis when given.
    pub fn for_center(lat: Option<f64>, lng: Option<f64>) -> Self {
        let center = GeoPoint::new(lat.unwrap_or(DEFAULT_LAT), lng.unwrap_or(DEFAULT_LNG));
        MapOptions::default().with_center(center)
    }

    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    pub fn with_center(mut self, center: GeoPoint) -> Self {
        self.center = center;
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_tile_layer(mut self, tile_layer: TileLayer) -> Self {
        self.tile_layer = tile_layer;
        self
    }
}

/// Page-facing handle: configure, then render a JSON spot list into the
/// container with Leaflet.
#[wasm_bindgen::prelude::wasm_bindgen]
#[derive(Default)]
pub struct SpotMap {
    options: MapOptions,
    filter: SpotFilter,
}

impl SpotMap {
    pub fn new(options: MapOptions) -> Self {
        SpotMap {
            options,
            filter: SpotFilter::default(),
        }
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn render_json(&self, spots_json: &str) -> MapResult<u32> {
        let spots = parse_spots(spots_json)?;
        let mut renderer = MapRenderer::new(LeafletBackend::new(), self.options.clone());
        let rendered = renderer.render(self.filter.apply(&spots))?;

        tracing::info!(
            "Rendered {} spots into #{} at {:?}, zoom {}",
            rendered.summary.rendered,
            self.options.container_id,
            self.options.center,
            self.options.zoom
        );

        Ok(rendered.summary.rendered as u32)
    }
}

#[wasm_bindgen::prelude::wasm_bindgen]
impl SpotMap {
    #[wasm_bindgen::prelude::wasm_bindgen(constructor)]
    pub fn new_wasm() -> SpotMap {
        SpotMap::default()
    }

    #[wasm_bindgen::prelude::wasm_bindgen]
    pub fn render(&self, spots_json: &str) -> Result<u32, wasm_bindgen::JsValue> {
        self.render_json(spots_json)
            .map_err(|e| wasm_bindgen::JsValue::from_str(&format!("Rendering error: {}", e)))
    }

    #[wasm_bindgen::prelude::wasm_bindgen(getter)]
    pub fn container(&self) -> String {
        self.options.container_id.clone()
    }

    #[wasm_bindgen::prelude::wasm_bindgen(setter)]
    pub fn set_container(&mut self, container_id: String) {
        self.options.container_id = container_id;
    }

    #[wasm_bindgen::prelude::wasm_bindgen(getter)]
    pub fn zoom(&self) -> u8 {
        self.options.zoom
    }

    #[wasm_bindgen::prelude::wasm_bindgen(setter)]
    pub fn set_zoom(&mut self, zoom: u8) {
        self.options.zoom = zoom;
    }

    #[wasm_bindgen::prelude::wasm_bindgen(getter)]
    pub fn center_lat(&self) -> f64 {
        self.options.center.lat
    }

    #[wasm_bindgen::prelude::wasm_bindgen(getter)]
    pub fn center_lng(&self) -> f64 {
        self.options.center.lng
    }

    #[wasm_bindgen::prelude::wasm_bindgen]
    pub fn set_center(&mut self, lat: f64, lng: f64) {
        self.options.center = GeoPoint::new(lat, lng);
    }

    #[wasm_bindgen::prelude::wasm_bindgen]
    pub fn set_tile_layer(&mut self, url_template: String, attribution: String) {
        self.options.tile_layer = TileLayer::new(url_template, attribution);
    }

    /// Only spots flagged available are drawn from now on.
    #[wasm_bindgen::prelude::wasm_bindgen]
    pub fn only_available(&mut self, enabled: bool) {
        self.filter.available_only = enabled;
    }

    #[wasm_bindgen::prelude::wasm_bindgen]
    pub fn search(&mut self, query: Option<String>) {
        self.filter.location_query = query;
    }
}
