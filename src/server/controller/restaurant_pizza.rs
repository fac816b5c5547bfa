use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        restaurant_pizza::{CreateRestaurantPizzaDto, CreatedRestaurantPizzaDto},
    },
    server::{
        error::AppError, model::restaurant_pizza::CreateRestaurantPizzaParams,
        service::restaurant_pizza::RestaurantPizzaService, state::AppState,
    },
};

/// Tag for grouping restaurant pizza endpoints in OpenAPI documentation
pub static RESTAURANT_PIZZA_TAG: &str = "restaurant_pizza";

/// Create a restaurant pizza.
///
/// Links an existing pizza to an existing restaurant at the given price. The price
/// must be between 1 and 30 inclusive. A body that is not valid JSON of the expected
/// shape is rejected the same way as any other validation failure.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Price, pizza ID, and restaurant ID
///
/// # Returns
/// - `201 Created` - Created restaurant pizza with nested pizza and restaurant
/// - `400 Bad Request` - Missing or nonexistent parent, missing or out-of-range price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = RESTAURANT_PIZZA_TAG,
    request_body = CreateRestaurantPizzaDto,
    responses(
        (status = 201, description = "Successfully created restaurant pizza", body = CreatedRestaurantPizzaDto),
        (status = 400, description = "Validation errors", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = RestaurantPizzaService::new(&state.db);

    let params = CreateRestaurantPizzaParams::from_dto(payload);

    let created = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}
