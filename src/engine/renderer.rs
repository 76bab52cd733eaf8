use crate::engine::popup::popup_markup;
use crate::engine::{MapBackend, RenderSummary, RenderedMap};
use crate::model::{LocationSpot, MapResult, SpotFilter};
use crate::view::view::MapOptions;

/// Draws spot markers through an injected [`MapBackend`].
pub struct MapRenderer<B: MapBackend> {
    backend: B,
    options: MapOptions,
}

impl<B: MapBackend> MapRenderer<B> {
    pub fn new(backend: B, options: MapOptions) -> Self {
        MapRenderer { backend, options }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates the map, attaches the base layer, then places one marker per
    /// spot that has both coordinates, in input order.
    ///
    /// Spots without coordinates are counted as skipped. Any backend failure
    /// (missing container, library not loaded) is returned as is.
    pub fn render<'a, I>(&mut self, spots: I) -> MapResult<RenderedMap<B::Map>>
    where
        I: IntoIterator<Item = &'a LocationSpot>,
    {
        let options = &self.options;
        let mut map = self
            .backend
            .create_map(&options.container_id, options.center, options.zoom)?;
        self.backend.add_tile_layer(&mut map, &options.tile_layer)?;

        tracing::info!(
            "Created map in #{} at {:?}, zoom {}",
            options.container_id,
            options.center,
            options.zoom
        );

        let mut summary = RenderSummary::default();
        for spot in spots {
            let Some(position) = spot.position() else {
                tracing::debug!("Skipping {:?}: no coordinates", spot.location);
                summary.skipped += 1;
                continue;
            };

            let popup = popup_markup(spot);
            self.backend.add_marker(&mut map, position, spot, &popup)?;
            tracing::debug!("Placed marker for {:?} at {:?}", spot.location, position);
            summary.rendered += 1;
        }

        tracing::info!(
            "Rendered {} markers, skipped {} spots",
            summary.rendered,
            summary.skipped
        );

        Ok(RenderedMap { map, summary })
    }

    pub fn render_filtered(
        &mut self,
        spots: &[LocationSpot],
        filter: &SpotFilter,
    ) -> MapResult<RenderedMap<B::Map>> {
        self.render(filter.apply(spots))
    }
}
