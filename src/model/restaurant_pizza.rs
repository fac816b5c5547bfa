use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{pizza::PizzaDto, restaurant::RestaurantDto};

/// Restaurant pizza as nested under a restaurant detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaDto {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: Option<PizzaDto>,
}

/// Request body for creating a restaurant pizza.
///
/// Every field is optional at the wire level so that missing values are reported as
/// validation errors rather than rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaDto {
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub pizza_id: Option<i32>,
    #[serde(default)]
    pub restaurant_id: Option<i32>,
}

/// Newly created restaurant pizza with both parents expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedRestaurantPizzaDto {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaDto,
    pub restaurant: RestaurantDto,
}
