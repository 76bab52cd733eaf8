use crate::error::SpotMapError;
use serde::{Deserialize, Deserializer};
pub type MapResult<T> = Result<T, SpotMapError>;

pub type SpotId = i64;

// Geographic point (latitude, longitude)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// GeoJSON position, longitude first.
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}

/// A parking spot as delivered by the listing backend.
///
/// Field names follow the page payload (`lat`, `lng`, `price`, `available`);
/// the database column names (`latitude`, `longitude`, `price_per_hour`,
/// `availability`) are accepted as aliases so rows can be passed through
/// unchanged.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationSpot {
    #[serde(default)]
    pub id: Option<SpotId>,
    pub location: String,
    #[serde(alias = "price_per_hour")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timings: String,
    #[serde(alias = "availability", default, deserialize_with = "null_as_false")]
    pub available: bool,
    #[serde(alias = "latitude", default)]
    pub lat: Option<f64>,
    #[serde(alias = "longitude", default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

// Rows come straight from nullable columns; a null reads like the page's
// falsy check would.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Present, non-zero and not NaN. A spot pinned exactly on 0 is not drawn.
fn is_truthy(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}

impl LocationSpot {
    pub fn new(location: impl Into<String>, price: f64, timings: impl Into<String>, available: bool) -> Self {
        LocationSpot {
            id: None,
            location: location.into(),
            price,
            timings: timings.into(),
            available,
            lat: None,
            lng: None,
            owner_name: None,
        }
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    pub fn with_id(mut self, id: SpotId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_owner(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = Some(owner_name.into());
        self
    }

    pub fn has_coordinates(&self) -> bool {
        is_truthy(self.lat) && is_truthy(self.lng)
    }

    /// Marker position, or `None` when the spot must not be drawn.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if self.has_coordinates() => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

/// Parses the JSON array a page hands to `init_map`.
pub fn parse_spots(json: &str) -> MapResult<Vec<LocationSpot>> {
    serde_json::from_str(json)
        .map_err(|e| SpotMapError::Serialization(format!("Invalid spots payload: {}", e)))
}

// Listing filters used by the search and "all spots" pages
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpotFilter {
    pub available_only: bool,
    pub location_query: Option<String>,
}

impl SpotFilter {
    pub fn new() -> Self {
        SpotFilter::default()
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.location_query = Some(query.into());
        self
    }

    pub fn matches(&self, spot: &LocationSpot) -> bool {
        if self.available_only && !spot.available {
            return false;
        }
        match self.location_query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => spot
                .location
                .to_lowercase()
                .contains(&query.to_lowercase()),
            _ => true,
        }
    }

    pub fn apply<'a>(&self, spots: &'a [LocationSpot]) -> Vec<&'a LocationSpot> {
        spots.iter().filter(|spot| self.matches(spot)).collect()
    }
}
