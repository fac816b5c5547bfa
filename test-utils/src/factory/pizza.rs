//! Pizza factory for creating test pizza entities.

use crate::factory::helpers::next_id;
use crate::fixture::pizza::DEFAULT_INGREDIENTS;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pizzas with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pizza::PizzaFactory;
///
/// let pizza = PizzaFactory::new(&db)
///     .name("Cheese")
///     .ingredients("Dough,Tomato,Cheese")
///     .build()
///     .await?;
/// ```
pub struct PizzaFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    ingredients: String,
}

impl<'a> PizzaFactory<'a> {
    /// Creates a new PizzaFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pizza {id}"` where id is auto-incremented
    /// - ingredients: `"Dough,Tomato,Cheese"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pizza {}", id),
            ingredients: DEFAULT_INGREDIENTS.to_string(),
        }
    }

    /// Sets the pizza name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the pizza ingredients.
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    /// Builds and inserts the pizza entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pizza::Model)` - Created pizza entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pizza::Model, DbErr> {
        entity::pizza::ActiveModel {
            name: ActiveValue::Set(self.name),
            ingredients: ActiveValue::Set(self.ingredients),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pizza with default values.
pub async fn create_pizza(db: &DatabaseConnection) -> Result<entity::pizza::Model, DbErr> {
    PizzaFactory::new(db).build().await
}
