//! Restaurant pizza fixtures for creating in-memory test data.

use entity::restaurant_pizza;

/// Default test price, inside the accepted 1..=30 range.
pub const DEFAULT_PRICE: i32 = 15;

/// Default restaurant ID the join row points at.
pub const DEFAULT_RESTAURANT_ID: i32 = 1;

/// Default pizza ID the join row points at.
pub const DEFAULT_PIZZA_ID: i32 = 1;

/// Creates a restaurant pizza entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - price: `15`
/// - restaurant_id: `1`
/// - pizza_id: `1`
pub fn entity() -> restaurant_pizza::Model {
    entity_builder().build()
}

/// Creates a restaurant pizza entity builder for customization.
pub fn entity_builder() -> RestaurantPizzaEntityBuilder {
    RestaurantPizzaEntityBuilder::default()
}

/// Builder for creating customized restaurant pizza entity models.
pub struct RestaurantPizzaEntityBuilder {
    id: i32,
    price: i32,
    restaurant_id: i32,
    pizza_id: i32,
}

impl Default for RestaurantPizzaEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            price: DEFAULT_PRICE,
            restaurant_id: DEFAULT_RESTAURANT_ID,
            pizza_id: DEFAULT_PIZZA_ID,
        }
    }
}

impl RestaurantPizzaEntityBuilder {
    /// Sets the restaurant pizza ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Sets the referenced restaurant ID.
    pub fn restaurant_id(mut self, restaurant_id: i32) -> Self {
        self.restaurant_id = restaurant_id;
        self
    }

    /// Sets the referenced pizza ID.
    pub fn pizza_id(mut self, pizza_id: i32) -> Self {
        self.pizza_id = pizza_id;
        self
    }

    /// Builds and returns the restaurant pizza entity model.
    pub fn build(self) -> restaurant_pizza::Model {
        restaurant_pizza::Model {
            id: self.id,
            price: self.price,
            restaurant_id: self.restaurant_id,
            pizza_id: self.pizza_id,
        }
    }
}
