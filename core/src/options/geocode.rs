//! Options for the `geo/*` calls.

use url::form_urlencoded::byte_serialize;

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};
use crate::model::{Coordinates, Granularity};

use super::{count, set_opt, text, RequestOptions};

/// `GET geo/id/:place_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPlaceOptions {
    pub place_id: String,
}

impl From<&str> for GetPlaceOptions {
    fn from(place_id: &str) -> Self {
        Self {
            place_id: place_id.to_string(),
        }
    }
}

impl RequestOptions for GetPlaceOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let place_id = self.place_id.trim();
        if place_id.is_empty() {
            return Err(ValidationError::MissingField("place_id"));
        }
        let segment: String = byte_serialize(place_id.as_bytes()).collect();
        Ok(HttpRequest::get(format!("/1.1/geo/id/{segment}.json"), Params::new()))
    }
}

/// `GET geo/reverse_geocode`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseGeocodeOptions {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius, in meters or with a unit suffix such as `"5ft"`.
    pub accuracy: Option<String>,
    pub granularity: Option<Granularity>,
    pub max_results: Option<u32>,
}

impl ReverseGeocodeOptions {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            granularity: None,
            max_results: None,
        }
    }
}

impl From<Coordinates> for ReverseGeocodeOptions {
    fn from(point: Coordinates) -> Self {
        Self::new(point.latitude, point.longitude)
    }
}

impl From<(f64, f64)> for ReverseGeocodeOptions {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl RequestOptions for ReverseGeocodeOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::InvalidValue {
                field: "lat",
                reason: format!("{} is outside -90..90", self.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::InvalidValue {
                field: "long",
                reason: format!("{} is outside -180..180", self.longitude),
            });
        }

        let mut query = Params::new();
        query.set("lat", self.latitude);
        query.set("long", self.longitude);
        set_opt(&mut query, "accuracy", text(&self.accuracy));
        set_opt(&mut query, "granularity", self.granularity);
        set_opt(&mut query, "max_results", count(self.max_results));

        Ok(HttpRequest::get("/1.1/geo/reverse_geocode.json", query))
    }
}
