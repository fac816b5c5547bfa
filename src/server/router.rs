use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{index, pizza, restaurant, restaurant_pizza},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Pizza Restaurants API",
    description = "Restaurants, pizzas, and the prices restaurants charge for them"
))]
struct ApiDoc;

/// Builds the API routes and serves their OpenAPI document through Swagger UI.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index::index))
        .routes(routes!(restaurant::get_restaurants))
        .routes(routes!(
            restaurant::get_restaurant_by_id,
            restaurant::delete_restaurant
        ))
        .routes(routes!(pizza::get_pizzas))
        .routes(routes!(restaurant_pizza::create_restaurant_pizza))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application with middleware and state attached.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
