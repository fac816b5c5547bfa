//! Restaurant data repository for database operations.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::model::restaurant::RestaurantWithPizzas;

/// Repository providing database operations for restaurants.
pub struct RestaurantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantRepository<'a> {
    /// Creates a new RestaurantRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all restaurants ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<entity::restaurant::Model>)` - Every restaurant row
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a restaurant by ID without relations.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find_by_id(id).one(self.db).await
    }

    /// Gets a restaurant by ID with its restaurant pizzas and each one's pizza.
    ///
    /// Restaurant pizzas are ordered by ID. The pizza is `None` only if the row it
    /// references no longer exists.
    ///
    /// # Arguments
    /// - `id` - Restaurant ID
    ///
    /// # Returns
    /// - `Ok(Some(RestaurantWithPizzas))` - Restaurant found
    /// - `Ok(None)` - No restaurant with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id_with_pizzas(
        &self,
        id: i32,
    ) -> Result<Option<RestaurantWithPizzas>, DbErr> {
        let Some(restaurant) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let restaurant_pizzas = restaurant
            .find_related(entity::prelude::RestaurantPizza)
            .find_also_related(entity::prelude::Pizza)
            .order_by_asc(entity::restaurant_pizza::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas,
        }))
    }

    /// Deletes a restaurant and every restaurant pizza referencing it.
    ///
    /// Runs inside a single transaction so either the restaurant and all of its
    /// restaurant pizzas are removed, or nothing is.
    ///
    /// # Arguments
    /// - `id` - Restaurant ID
    ///
    /// # Returns
    /// - `Ok(Some(rows))` - Restaurant deleted; `rows` counts the restaurant plus its dependents
    /// - `Ok(None)` - No restaurant with this ID, nothing changed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<Option<u64>, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::Restaurant::find_by_id(id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let dependents = entity::prelude::RestaurantPizza::delete_many()
            .filter(entity::restaurant_pizza::Column::RestaurantId.eq(id))
            .exec(&txn)
            .await?;

        let restaurant = entity::prelude::Restaurant::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(dependents.rows_affected + restaurant.rows_affected))
    }
}
