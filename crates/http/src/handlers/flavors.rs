use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use flavors_core::{Flavor, FlavorId, FlavorInput};
use flavors_service::ServiceError;

use crate::AppState;
use crate::api_error::ApiError;

/// The path id is validated before it reaches storage.
fn parse_id(raw: &str) -> Result<FlavorId, ApiError> {
    raw.parse::<FlavorId>().map_err(|e| ServiceError::from(e).into())
}

pub async fn list_flavors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Flavor>>, ApiError> {
    Ok(Json(state.flavor_service.list().await?))
}

pub async fn get_flavor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Flavor>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.flavor_service.get(id).await?))
}

pub async fn create_flavor(
    State(state): State<Arc<AppState>>,
    Json(input): Json<FlavorInput>,
) -> Result<(StatusCode, Json<Flavor>), ApiError> {
    let flavor = state.flavor_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(flavor)))
}

pub async fn update_flavor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<FlavorInput>,
) -> Result<Json<Flavor>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.flavor_service.update(id, input).await?))
}

pub async fn delete_flavor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.flavor_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
