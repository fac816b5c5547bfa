use sea_orm::DatabaseConnection;

use crate::server::{
    data::restaurant::RestaurantRepository,
    error::AppError,
    model::restaurant::{RestaurantDetail, RestaurantSummary},
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every restaurant without relationship expansion
    pub async fn get_all(&self) -> Result<Vec<RestaurantSummary>, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let restaurants = repo.get_all().await?;

        Ok(restaurants
            .into_iter()
            .map(RestaurantSummary::from_entity)
            .collect())
    }

    /// Gets a restaurant expanded with its restaurant pizzas
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RestaurantDetail>, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let result = repo.get_by_id_with_pizzas(id).await?;

        Ok(result.map(RestaurantDetail::from_with_pizzas))
    }

    /// Deletes a restaurant together with its restaurant pizzas
    /// Returns false if the restaurant doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = RestaurantRepository::new(self.db);

        match repo.delete(id).await? {
            Some(rows) => {
                tracing::info!("Deleted restaurant {} ({} rows removed)", id, rows);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
