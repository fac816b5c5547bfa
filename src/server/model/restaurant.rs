//! Restaurant domain models.
//!
//! Provides the two restaurant projections served by the API: `RestaurantSummary` for
//! listings and embedding, and `RestaurantDetail` which expands the restaurant's
//! restaurant pizzas one level (each with its pizza, never with the restaurant again).

use crate::{
    model::restaurant::{RestaurantDetailDto, RestaurantDto},
    server::model::restaurant_pizza::RestaurantPizzaWithPizza,
};

/// Restaurant row together with its restaurant pizzas and their optional pizzas.
///
/// Returned by the repository and converted with `RestaurantDetail::from_with_pizzas`.
#[derive(Debug, Clone)]
pub struct RestaurantWithPizzas {
    pub restaurant: entity::restaurant::Model,
    pub restaurant_pizzas: Vec<(
        entity::restaurant_pizza::Model,
        Option<entity::pizza::Model>,
    )>,
}

/// Restaurant projected to `{id, name, address}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl RestaurantSummary {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Restaurant expanded with its restaurant pizzas.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetail {
    pub restaurant: RestaurantSummary,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

impl RestaurantDetail {
    /// Converts the repository result into the detail projection.
    ///
    /// # Arguments
    /// - `result` - Restaurant entity with its restaurant pizzas and their pizzas
    ///
    /// # Returns
    /// - `RestaurantDetail` - Restaurant with one level of expansion
    pub fn from_with_pizzas(result: RestaurantWithPizzas) -> Self {
        Self {
            restaurant: RestaurantSummary::from_entity(result.restaurant),
            restaurant_pizzas: result
                .restaurant_pizzas
                .into_iter()
                .map(|(restaurant_pizza, pizza)| {
                    RestaurantPizzaWithPizza::from_entity(restaurant_pizza, pizza)
                })
                .collect(),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RestaurantDetailDto {
        RestaurantDetailDto {
            id: self.restaurant.id,
            name: self.restaurant.name,
            address: self.restaurant.address,
            restaurant_pizzas: self
                .restaurant_pizzas
                .into_iter()
                .map(RestaurantPizzaWithPizza::into_dto)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn detail_dto_never_nests_the_restaurant() {
        let restaurant = fixture::restaurant::entity();
        let pizza = fixture::pizza::entity();
        let restaurant_pizza = fixture::restaurant_pizza::entity_builder()
            .restaurant_id(restaurant.id)
            .pizza_id(pizza.id)
            .build();

        let detail = RestaurantDetail::from_with_pizzas(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas: vec![(restaurant_pizza, Some(pizza))],
        });

        let json = serde_json::to_value(detail.into_dto()).unwrap();
        let nested = &json["restaurant_pizzas"][0];

        assert!(nested.get("restaurant").is_none());
        assert!(nested["pizza"].get("restaurant").is_none());
        assert!(nested["pizza"].get("restaurant_pizzas").is_none());
        assert_eq!(nested["pizza"]["name"], fixture::pizza::DEFAULT_NAME);
    }

    #[test]
    fn detail_dto_serializes_missing_pizza_as_null() {
        let restaurant_pizza = fixture::restaurant_pizza::entity();

        let detail = RestaurantDetail::from_with_pizzas(RestaurantWithPizzas {
            restaurant: fixture::restaurant::entity(),
            restaurant_pizzas: vec![(restaurant_pizza, None)],
        });

        let json = serde_json::to_value(detail.into_dto()).unwrap();

        assert!(json["restaurant_pizzas"][0]["pizza"].is_null());
    }
}
