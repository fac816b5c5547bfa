//! Restaurant pizza data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::restaurant_pizza::NewRestaurantPizza;

/// Repository providing database operations for restaurant pizzas.
pub struct RestaurantPizzaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantPizzaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated restaurant pizza.
    ///
    /// Price range and parent existence are checked by the service before this is called;
    /// the foreign keys still reject a parent removed in between.
    ///
    /// # Arguments
    /// - `params` - Validated price and parent IDs
    ///
    /// # Returns
    /// - `Ok(entity::restaurant_pizza::Model)` - Inserted row with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: NewRestaurantPizza,
    ) -> Result<entity::restaurant_pizza::Model, DbErr> {
        entity::restaurant_pizza::ActiveModel {
            price: ActiveValue::Set(params.price),
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            pizza_id: ActiveValue::Set(params.pizza_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
