//! Pizza data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing database operations for pizzas.
pub struct PizzaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PizzaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all pizzas ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<entity::pizza::Model>, DbErr> {
        entity::prelude::Pizza::find()
            .order_by_asc(entity::pizza::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a pizza by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::pizza::Model>, DbErr> {
        entity::prelude::Pizza::find_by_id(id).one(self.db).await
    }
}
