use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::models::{Coordinate, LocationResponse, Pacman};
use crate::repository::PacmanRepository;
use crate::validation::{ValidationError, validate_coordinate, validate_finite};

// POST /pacman/{latitude}/{longitude} - Create the Pacman at a location
pub async fn create_pacman(
    State(repo): State<PacmanRepository>,
    Path((latitude, longitude)): Path<(f64, f64)>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!("Mapped POST /pacman/{}/{}", latitude, longitude);

    let (latitude, longitude) = validate_finite(latitude, longitude).map_err(bad_request)?;

    if repo.get_player().is_some() {
        let message = "A Pacman already exists.";
        tracing::warn!("{message}");
        return Err(ApiError::Conflict(message.to_string()));
    }

    let pacman = Pacman::new(Coordinate::new(latitude, longitude));
    repo.add_player(pacman).map_err(|err| {
        tracing::error!("{err}");
        ApiError::from(err)
    })?;

    Ok(StatusCode::OK)
}

// GET /pacman/location - Get the Pacman's current location
pub async fn get_pacman_location(
    State(repo): State<PacmanRepository>,
) -> Result<Json<LocationResponse>, ApiError> {
    tracing::debug!("Mapped GET /pacman/location");

    let Some(pacman) = repo.get_player() else {
        let message = "No Pacman exists";
        tracing::warn!("{message}");
        return Err(ApiError::NotFound(message.to_string()));
    };

    pacman
        .location
        .as_ref()
        .and_then(LocationResponse::from_coordinate)
        .map(Json)
        .ok_or_else(|| {
            let message = "The location of the Pacman could not be extracted.";
            tracing::error!("{message}");
            ApiError::Internal(message.to_string())
        })
}

// PUT /pacman/location/{latitude}/{longitude} - Move the Pacman
pub async fn set_pacman_location(
    State(repo): State<PacmanRepository>,
    Path((latitude, longitude)): Path<(f64, f64)>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!("Mapped PUT /pacman/location/{}/{}", latitude, longitude);

    let (latitude, longitude) = validate_finite(latitude, longitude).map_err(bad_request)?;

    move_pacman(&repo, Coordinate::new(latitude, longitude))
}

// PUT /pacman/location - Move the Pacman, location given as a JSON body
pub async fn set_pacman_location_from_body(
    State(repo): State<PacmanRepository>,
    payload: Result<Json<Coordinate>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let location = match payload {
        Ok(Json(location)) => Some(location),
        Err(rejection) => {
            tracing::debug!("Unreadable location body: {rejection}");
            None
        }
    };

    tracing::debug!("Mapped PUT /pacman/location with body {:?}", location);

    let (latitude, longitude) = validate_coordinate(location.as_ref()).map_err(bad_request)?;

    move_pacman(&repo, Coordinate::new(latitude, longitude))
}

// DELETE /pacman - Remove the Pacman
pub async fn delete_pacman(
    State(repo): State<PacmanRepository>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!("Mapped DELETE /pacman");

    if repo.get_player().is_none() {
        return Err(no_pacman());
    }

    repo.clear_players();

    Ok(StatusCode::OK)
}

fn move_pacman(repo: &PacmanRepository, location: Coordinate) -> Result<StatusCode, ApiError> {
    let Some(pacman) = repo.get_player() else {
        return Err(no_pacman());
    };

    tracing::debug!(
        "Setting Pacman at location {:?} to location {:?}",
        pacman.location,
        location
    );

    // The player may have been deleted since the lookup above.
    if !repo.set_location(location) {
        return Err(no_pacman());
    }

    Ok(StatusCode::OK)
}

fn no_pacman() -> ApiError {
    let message = "No Pacman exists.";
    tracing::warn!("{message}");
    ApiError::NotFound(message.to_string())
}

fn bad_request(err: ValidationError) -> ApiError {
    tracing::warn!("{err}");
    ApiError::from(err)
}
