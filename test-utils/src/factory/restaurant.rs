//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// Defaults come from `fixture::restaurant` with a unique name per restaurant.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant::RestaurantFactory;
///
/// let restaurant = RestaurantFactory::new(&db)
///     .name("Dough")
///     .address("X")
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::restaurant::Model,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RestaurantFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::restaurant::entity_builder()
            .name(format!("Restaurant {}", id))
            .address(format!("{} Main Street", id))
            .build();

        Self { db, entity }
    }

    /// Sets the restaurant name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the restaurant address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.entity.address = address.into();
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// The ID is generated by the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            address: ActiveValue::Set(self.entity.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values.
///
/// Shorthand for `RestaurantFactory::new(db).build().await`.
pub async fn create_restaurant(db: &DatabaseConnection) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_restaurant_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Restaurant)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let restaurant = create_restaurant(db).await?;

        assert!(restaurant.id > 0);
        assert!(restaurant.name.starts_with("Restaurant "));
        assert!(restaurant.address.ends_with(" Main Street"));

        Ok(())
    }

    #[tokio::test]
    async fn creates_restaurant_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Restaurant)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let restaurant = RestaurantFactory::new(db)
            .name("Dough")
            .address("X")
            .build()
            .await?;

        assert_eq!(restaurant.name, "Dough");
        assert_eq!(restaurant.address, "X");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_restaurants() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Restaurant)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_restaurant(db).await?;
        let second = create_restaurant(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
