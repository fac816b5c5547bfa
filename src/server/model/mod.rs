//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Each response shape is its own type,
//! so relationship expansion is chosen explicitly per endpoint and cycles between
//! restaurants and their restaurant pizzas cannot be expressed.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
