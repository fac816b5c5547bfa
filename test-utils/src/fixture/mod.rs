//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for use in unit tests and as default
//! values for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let restaurant = fixture::restaurant::entity();
//!
//! let pizza = fixture::pizza::entity_builder()
//!     .name("Margherita")
//!     .build();
//! ```

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::{entity as pizza_entity, entity_builder as pizza_entity_builder};
pub use restaurant::{entity as restaurant_entity, entity_builder as restaurant_entity_builder};
pub use restaurant_pizza::{
    entity as restaurant_pizza_entity, entity_builder as restaurant_pizza_entity_builder,
};
