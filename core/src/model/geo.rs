//! Places, bounding boxes and coordinates.
//!
//! Twitter writes coordinates in GeoJSON order, `[longitude, latitude]`.
//! `Coordinates` swaps them into named fields at parse time.

use serde::Deserialize;
use strum::{Display, EnumString};

use super::null_default;

/// A point on the map.
///
/// Parses from either a bare `[longitude, latitude]` pair or a GeoJSON
/// point object `{"type": "Point", "coordinates": [longitude, latitude]}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "CoordinatesWire")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinatesWire {
    Pair([f64; 2]),
    Point { coordinates: [f64; 2] },
}

impl From<CoordinatesWire> for Coordinates {
    fn from(wire: CoordinatesWire) -> Self {
        let [longitude, latitude] = match wire {
            CoordinatesWire::Pair(pair) => pair,
            CoordinatesWire::Point { coordinates } => coordinates,
        };
        Self { latitude, longitude }
    }
}

/// A polygon made of one or more rings. Ring order and point order are
/// kept exactly as received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_default")]
    pub coordinates: Vec<Vec<Coordinates>>,
}

/// Place type, also used as the granularity of a reverse geocode lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Granularity {
    Neighborhood,
    Poi,
    City,
    Admin,
    Country,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    pub place_type: Granularity,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub country_code: String,
    #[serde(default, deserialize_with = "null_default")]
    pub country: String,
    pub bounding_box: Option<BoundingBox>,
    pub centroid: Option<Coordinates>,
    #[serde(default, deserialize_with = "null_default")]
    pub contained_within: Vec<Place>,
}

/// Body of `geo/reverse_geocode`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReverseGeocode {
    pub query: Option<ReverseGeocodeQuery>,
    #[serde(default, deserialize_with = "null_default")]
    pub result: ReverseGeocodeResult,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReverseGeocodeQuery {
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReverseGeocodeResult {
    #[serde(default, deserialize_with = "null_default")]
    pub places: Vec<Place>,
}
