//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let restaurant = factory::create_restaurant(&db).await?;
//! let pizza = factory::create_pizza(&db).await?;
//! let restaurant_pizza =
//!     factory::create_restaurant_pizza(&db, restaurant.id, pizza.id).await?;
//!
//! // Or everything at once
//! let (restaurant, pizza, restaurant_pizza) =
//!     factory::helpers::create_restaurant_pizza_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let restaurant = factory::restaurant::RestaurantFactory::new(&db)
//!     .name("Dough")
//!     .address("X")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::create_pizza;
pub use restaurant::create_restaurant;
pub use restaurant_pizza::create_restaurant_pizza;
