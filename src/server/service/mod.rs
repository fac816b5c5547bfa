//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They validate writes, coordinate repository calls, and work with domain models rather
//! than DTOs or entity models.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
