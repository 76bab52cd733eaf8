use wasm_bindgen::prelude::*;
pub mod engine;
pub mod error;
pub mod model;
pub mod view;

pub use engine::renderer::MapRenderer;
pub use engine::{MapBackend, RenderSummary, RenderedMap};
pub use error::SpotMapError;
pub use model::{GeoPoint, LocationSpot, MapResult, SpotFilter};
pub use view::view::{MapOptions, SpotMap, TileLayer};

#[wasm_bindgen(start)]
fn start() {
    // No system clock on wasm32-unknown-unknown
    let _ = tracing_subscriber::fmt().without_time().try_init();
}

/// Renders `spots_json` into the `#map` element with Leaflet.
///
/// `default_lat` / `default_lng` fall back to central Pune when omitted.
/// Returns the number of markers placed.
#[wasm_bindgen]
pub fn init_map(
    spots_json: &str,
    default_lat: Option<f64>,
    default_lng: Option<f64>,
) -> Result<u32, JsValue> {
    SpotMap::new(MapOptions::for_center(default_lat, default_lng))
        .render_json(spots_json)
        .map_err(|e| JsValue::from_str(&format!("Rendering error: {}", e)))
}
