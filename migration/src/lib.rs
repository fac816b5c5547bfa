pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_restaurant_table;
mod m20260101_000002_create_pizza_table;
mod m20260101_000003_create_restaurant_pizza_table;
mod m20260101_000004_seed_restaurants_and_pizzas;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_restaurant_table::Migration),
            Box::new(m20260101_000002_create_pizza_table::Migration),
            Box::new(m20260101_000003_create_restaurant_pizza_table::Migration),
            Box::new(m20260101_000004_seed_restaurants_and_pizzas::Migration),
        ]
    }
}
