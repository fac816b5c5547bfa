//! Pizza fixtures for creating in-memory test data.

use entity::pizza;

/// Default test pizza name.
pub const DEFAULT_NAME: &str = "Cheese";

/// Default test pizza ingredients.
pub const DEFAULT_INGREDIENTS: &str = "Dough,Tomato,Cheese";

/// Creates a pizza entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Cheese"`
/// - ingredients: `"Dough,Tomato,Cheese"`
pub fn entity() -> pizza::Model {
    entity_builder().build()
}

/// Creates a pizza entity builder for customization.
pub fn entity_builder() -> PizzaEntityBuilder {
    PizzaEntityBuilder::default()
}

/// Builder for creating customized pizza entity models.
pub struct PizzaEntityBuilder {
    id: i32,
    name: String,
    ingredients: String,
}

impl Default for PizzaEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            ingredients: DEFAULT_INGREDIENTS.to_string(),
        }
    }
}

impl PizzaEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn build(self) -> pizza::Model {
        pizza::Model {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}
