use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, pizza::PizzaDto},
    server::{error::AppError, model::pizza::Pizza, service::pizza::PizzaService, state::AppState},
};

/// Tag for grouping pizza endpoints in OpenAPI documentation
pub static PIZZA_TAG: &str = "pizza";

/// List all pizzas.
///
/// Returns every pizza projected to `{id, name, ingredients}`.
///
/// # Returns
/// - `200 OK` - All pizzas
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pizzas",
    tag = PIZZA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pizzas", body = Vec<PizzaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PizzaService::new(&state.db);

    let pizzas = service.get_all().await?;

    let dtos: Vec<PizzaDto> = pizzas.into_iter().map(Pizza::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
