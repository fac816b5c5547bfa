use sea_orm::DatabaseConnection;

use crate::server::{data::pizza::PizzaRepository, error::AppError, model::pizza::Pizza};

pub struct PizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pizza without relationship expansion
    pub async fn get_all(&self) -> Result<Vec<Pizza>, AppError> {
        let repo = PizzaRepository::new(self.db);

        let pizzas = repo.get_all().await?;

        Ok(pizzas.into_iter().map(Pizza::from_entity).collect())
    }
}
