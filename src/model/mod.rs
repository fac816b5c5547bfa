//! Wire DTOs serialized to and from the HTTP API.

pub mod api;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
