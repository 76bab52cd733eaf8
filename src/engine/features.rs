use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value as GeoValue};
use maud::Markup;
use crate::engine::MapBackend;
use crate::error::SpotMapError;
use crate::model::{GeoPoint, LocationSpot, MapResult};
use crate::view::view::TileLayer;

// Headless backend: records the map instead of drawing it

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedMarker {
    pub position: GeoPoint,
    pub location: String,
    pub popup: String,
    pub spot: LocationSpot,
}

impl PlacedMarker {
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("location".to_string(), JsonValue::from(self.spot.location.clone()));
        properties.insert("price".to_string(), JsonValue::from(self.spot.price));
        properties.insert("timings".to_string(), JsonValue::from(self.spot.timings.clone()));
        properties.insert("available".to_string(), JsonValue::from(self.spot.available));
        properties.insert("popup".to_string(), JsonValue::from(self.popup.clone()));
        if let Some(owner_name) = &self.spot.owner_name {
            properties.insert("owner_name".to_string(), JsonValue::from(owner_name.clone()));
        }

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(GeoValue::Point(self.position.to_position()))),
            id: self.spot.id.map(|id| Id::Number(id.into())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeoJsonMap {
    container_id: String,
    center: GeoPoint,
    zoom: u8,
    tile_layers: Vec<TileLayer>,
    markers: Vec<PlacedMarker>,
}

impl GeoJsonMap {
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.markers.iter().map(PlacedMarker::to_feature).collect(),
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> MapResult<String> {
        serde_json::to_string(&self.to_feature_collection())
            .map_err(|e| SpotMapError::Serialization(format!("Failed to encode markers: {}", e)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct GeoJsonBackend;

impl GeoJsonBackend {
    pub fn new() -> Self {
        GeoJsonBackend
    }
}

impl MapBackend for GeoJsonBackend {
    type Map = GeoJsonMap;

    fn create_map(&mut self, container_id: &str, center: GeoPoint, zoom: u8) -> MapResult<GeoJsonMap> {
        if container_id.trim().is_empty() {
            return Err(SpotMapError::MissingContainer(container_id.to_string()));
        }
        Ok(GeoJsonMap {
            container_id: container_id.to_string(),
            center,
            zoom,
            tile_layers: Vec::new(),
            markers: Vec::new(),
        })
    }

    fn add_tile_layer(&mut self, map: &mut GeoJsonMap, layer: &TileLayer) -> MapResult<()> {
        map.tile_layers.push(layer.clone());
        Ok(())
    }

    fn add_marker(
        &mut self,
        map: &mut GeoJsonMap,
        position: GeoPoint,
        spot: &LocationSpot,
        popup: &Markup,
    ) -> MapResult<()> {
        map.markers.push(PlacedMarker {
            position,
            location: spot.location.clone(),
            popup: popup.0.clone(),
            spot: spot.clone(),
        });
        Ok(())
    }
}
