use serde::{Deserialize, Serialize};

/// Latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// The single tracked player.
#[derive(Debug, Clone, PartialEq)]
pub struct Pacman {
    pub location: Option<Coordinate>,
}

impl Pacman {
    pub fn new(location: Coordinate) -> Self {
        Self {
            location: Some(location),
        }
    }
}

/// Body of `GET /pacman/location`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationResponse {
    /// Returns `None` unless both fields of the coordinate are present.
    pub fn from_coordinate(coordinate: &Coordinate) -> Option<Self> {
        Some(Self {
            latitude: coordinate.latitude?,
            longitude: coordinate.longitude?,
        })
    }
}

/// JSON error payload returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
