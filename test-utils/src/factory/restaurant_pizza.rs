//! Restaurant pizza factory for creating join rows between restaurants and pizzas.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurant pizzas with customizable price.
///
/// The referenced restaurant and pizza must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant_pizza::RestaurantPizzaFactory;
///
/// let restaurant_pizza = RestaurantPizzaFactory::new(&db, restaurant.id, pizza.id)
///     .price(25)
///     .build()
///     .await?;
/// ```
pub struct RestaurantPizzaFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::restaurant_pizza::Model,
}

impl<'a> RestaurantPizzaFactory<'a> {
    /// Creates a new RestaurantPizzaFactory with the fixture's default price.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - ID of an existing restaurant
    /// - `pizza_id` - ID of an existing pizza
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32, pizza_id: i32) -> Self {
        let entity = fixture::restaurant_pizza::entity_builder()
            .restaurant_id(restaurant_id)
            .pizza_id(pizza_id)
            .build();

        Self { db, entity }
    }

    /// Sets the price. The factory does not validate the range.
    pub fn price(mut self, price: i32) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the restaurant pizza entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant_pizza::Model)` - Created restaurant pizza entity
    /// - `Err(DbErr)` - Database error during insert (e.g. foreign key violation)
    pub async fn build(self) -> Result<entity::restaurant_pizza::Model, DbErr> {
        entity::restaurant_pizza::ActiveModel {
            id: ActiveValue::NotSet,
            price: ActiveValue::Set(self.entity.price),
            restaurant_id: ActiveValue::Set(self.entity.restaurant_id),
            pizza_id: ActiveValue::Set(self.entity.pizza_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant pizza with the default price for the given parents.
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    restaurant_id: i32,
    pizza_id: i32,
) -> Result<entity::restaurant_pizza::Model, DbErr> {
    RestaurantPizzaFactory::new(db, restaurant_id, pizza_id)
        .build()
        .await
}
