//! Database repository layer for all domain entities.
//!
//! Repositories hold a borrowed `DatabaseConnection` and perform all queries, inserts,
//! and deletes through SeaORM. They return entity models or repository result types that
//! the model layer converts into domain models.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

#[cfg(test)]
mod test;
