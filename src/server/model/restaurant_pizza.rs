//! Restaurant pizza domain models, parameters, and price validation.

use std::ops::RangeInclusive;

use crate::{
    model::restaurant_pizza::{
        CreateRestaurantPizzaDto, CreatedRestaurantPizzaDto, RestaurantPizzaDto,
    },
    server::{
        error::validation::Violation,
        model::{pizza::Pizza, restaurant::RestaurantSummary},
    },
};

/// Accepted prices, inclusive on both ends.
pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

/// Checks a requested price against `PRICE_RANGE`.
///
/// # Arguments
/// - `price` - Price from the request, `None` when absent or null
///
/// # Returns
/// - `Ok(i32)` - Price accepted for storage
/// - `Err(Violation::MissingPrice)` - No price supplied
/// - `Err(Violation::PriceOutOfRange)` - Price outside 1..=30
pub fn validate_price(price: Option<i64>) -> Result<i32, Violation> {
    match price {
        None => Err(Violation::MissingPrice),
        Some(price) if PRICE_RANGE.contains(&price) => Ok(price as i32),
        Some(price) => Err(Violation::PriceOutOfRange(price)),
    }
}

/// Unvalidated parameters for creating a restaurant pizza.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRestaurantPizzaParams {
    pub price: Option<i64>,
    pub pizza_id: Option<i32>,
    pub restaurant_id: Option<i32>,
}

impl CreateRestaurantPizzaParams {
    /// Converts the request DTO into service parameters.
    pub fn from_dto(dto: CreateRestaurantPizzaDto) -> Self {
        Self {
            price: dto.price,
            pizza_id: dto.pizza_id,
            restaurant_id: dto.restaurant_id,
        }
    }
}

/// Validated row ready to be inserted. Both parents are known to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// Restaurant pizza with its pizza, as nested under a restaurant detail.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithPizza {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: Option<Pizza>,
}

impl RestaurantPizzaWithPizza {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::restaurant_pizza::Model,
        pizza: Option<entity::pizza::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            price: entity.price,
            pizza_id: entity.pizza_id,
            restaurant_id: entity.restaurant_id,
            pizza: pizza.map(Pizza::from_entity),
        }
    }

    pub fn into_dto(self) -> RestaurantPizzaDto {
        RestaurantPizzaDto {
            id: self.id,
            price: self.price,
            pizza_id: self.pizza_id,
            restaurant_id: self.restaurant_id,
            pizza: self.pizza.map(Pizza::into_dto),
        }
    }
}

/// Newly created restaurant pizza with both parents.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedRestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub pizza: Pizza,
    pub restaurant: RestaurantSummary,
}

impl CreatedRestaurantPizza {
    /// Combines the inserted row with the parents looked up during validation.
    pub fn from_entity(
        entity: entity::restaurant_pizza::Model,
        pizza: Pizza,
        restaurant: RestaurantSummary,
    ) -> Self {
        Self {
            id: entity.id,
            price: entity.price,
            pizza,
            restaurant,
        }
    }

    pub fn into_dto(self) -> CreatedRestaurantPizzaDto {
        CreatedRestaurantPizzaDto {
            id: self.id,
            price: self.price,
            pizza_id: self.pizza.id,
            restaurant_id: self.restaurant.id,
            pizza: self.pizza.into_dto(),
            restaurant: self.restaurant.into_dto(),
        }
    }
}
