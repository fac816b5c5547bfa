use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::restaurant_pizza::RestaurantPizzaDto;

/// Restaurant without any relationship expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Restaurant with its restaurant pizzas, each carrying the nested pizza.
///
/// The nested entries never point back at the restaurant object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetailDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaDto>,
}
