use crate::models::Coordinate;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Request body requires latitude and longitude.")]
    MissingLatitudeAndLongitude,
    #[error("Request body requires latitude.")]
    MissingLatitude,
    #[error("Request body requires longitude.")]
    MissingLongitude,
    #[error("Latitude and longitude must be finite numbers.")]
    NonFinite,
}

/// Rejects `NaN` and infinities
pub fn validate_finite(latitude: f64, longitude: f64) -> Result<(f64, f64), ValidationError> {
    if latitude.is_finite() && longitude.is_finite() {
        Ok((latitude, longitude))
    } else {
        Err(ValidationError::NonFinite)
    }
}

/// Checks that a coordinate supplied as a request body carries both fields.
pub fn validate_coordinate(location: Option<&Coordinate>) -> Result<(f64, f64), ValidationError> {
    let Some(location) = location else {
        return Err(ValidationError::MissingLatitudeAndLongitude);
    };

    match (location.latitude, location.longitude) {
        (None, None) => Err(ValidationError::MissingLatitudeAndLongitude),
        (None, Some(_)) => Err(ValidationError::MissingLatitude),
        (Some(_), None) => Err(ValidationError::MissingLongitude),
        (Some(latitude), Some(longitude)) => validate_finite(latitude, longitude),
    }
}
