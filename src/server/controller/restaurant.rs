use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        restaurant::{RestaurantDetailDto, RestaurantDto},
    },
    server::{
        error::AppError, model::restaurant::RestaurantSummary,
        service::restaurant::RestaurantService, state::AppState,
    },
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

/// List all restaurants.
///
/// Returns every restaurant projected to `{id, name, address}` without its
/// restaurant pizzas.
///
/// # Returns
/// - `200 OK` - All restaurants
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved restaurants", body = Vec<RestaurantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    let restaurants = service.get_all().await?;

    let dtos: Vec<RestaurantDto> = restaurants
        .into_iter()
        .map(RestaurantSummary::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a restaurant by ID.
///
/// Returns the restaurant with its restaurant pizzas, each expanded with its pizza.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Restaurant ID
///
/// # Returns
/// - `200 OK` - Restaurant details
/// - `404 Not Found` - No restaurant with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved restaurant", body = RestaurantDetailDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    let restaurant = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

/// Delete a restaurant.
///
/// Deletes the restaurant and all of its restaurant pizzas in one transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Restaurant ID
///
/// # Returns
/// - `204 No Content` - Restaurant and its restaurant pizzas deleted
/// - `404 Not Found` - No restaurant with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted restaurant"),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
