//! Restaurant fixtures for creating in-memory test data.

use entity::restaurant;

/// Default test restaurant name.
pub const DEFAULT_NAME: &str = "Dough";

/// Default test restaurant address.
pub const DEFAULT_ADDRESS: &str = "X";

/// Creates a restaurant entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Dough"`
/// - address: `"X"`
pub fn entity() -> restaurant::Model {
    entity_builder().build()
}

/// Creates a restaurant entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let restaurant = fixture::restaurant::entity_builder()
///     .name("Sanjay's Pizza")
///     .build();
/// ```
pub fn entity_builder() -> RestaurantEntityBuilder {
    RestaurantEntityBuilder::default()
}

/// Builder for creating customized restaurant entity models.
pub struct RestaurantEntityBuilder {
    id: i32,
    name: String,
    address: String,
}

impl Default for RestaurantEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

impl RestaurantEntityBuilder {
    /// Sets the restaurant ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the restaurant name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the restaurant address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and returns the restaurant entity model.
    pub fn build(self) -> restaurant::Model {
        restaurant::Model {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}
