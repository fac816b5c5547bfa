//! SeaORM entities for the restaurant, pizza, and restaurant-pizza tables.

pub mod prelude;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
