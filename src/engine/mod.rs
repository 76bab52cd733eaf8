use maud::Markup;
use crate::model::{GeoPoint, LocationSpot, MapResult};
use crate::view::view::TileLayer;

pub mod features;
pub mod leaflet;
pub mod popup;
pub mod renderer;

/// The mapping library as seen by the renderer.
///
/// Implementations own whatever handle the library returns for a map
/// (`Self::Map`); the renderer only threads it back into later calls. Errors
/// from any step abort the render and are returned unchanged.
pub trait MapBackend {
    type Map;

    /// Creates a map bound to the element `container_id`, centered and zoomed.
    fn create_map(&mut self, container_id: &str, center: GeoPoint, zoom: u8) -> MapResult<Self::Map>;

    fn add_tile_layer(&mut self, map: &mut Self::Map, layer: &TileLayer) -> MapResult<()>;

    /// Places a marker at `position` with `popup` bound to it.
    fn add_marker(
        &mut self,
        map: &mut Self::Map,
        position: GeoPoint,
        spot: &LocationSpot,
        popup: &Markup,
    ) -> MapResult<()>;
}

// Counts for one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
}

impl RenderSummary {
    pub fn total(&self) -> usize {
        self.rendered + self.skipped
    }
}

#[derive(Debug)]
pub struct RenderedMap<M> {
    pub map: M,
    pub summary: RenderSummary,
}
