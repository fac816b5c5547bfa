use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        pizza::PizzaRepository, restaurant::RestaurantRepository,
        restaurant_pizza::RestaurantPizzaRepository,
    },
    error::{validation::Violation, AppError},
    model::{
        pizza::Pizza,
        restaurant::RestaurantSummary,
        restaurant_pizza::{
            validate_price, CreateRestaurantPizzaParams, CreatedRestaurantPizza,
            NewRestaurantPizza,
        },
    },
};

pub struct RestaurantPizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantPizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a restaurant pizza linking an existing pizza and restaurant.
    ///
    /// Looks up both parents and checks the price, collecting every violation before
    /// failing. Nothing is written unless all checks pass.
    ///
    /// # Arguments
    /// - `params` - Requested price, pizza ID, and restaurant ID
    ///
    /// # Returns
    /// - `Ok(CreatedRestaurantPizza)` - Persisted row with both parents
    /// - `Err(AppError::Validation)` - One or more violations, no row written
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create(
        &self,
        params: CreateRestaurantPizzaParams,
    ) -> Result<CreatedRestaurantPizza, AppError> {
        let mut violations = Vec::new();

        let pizza = match params.pizza_id {
            Some(pizza_id) => {
                let pizza = PizzaRepository::new(self.db).get_by_id(pizza_id).await?;
                if pizza.is_none() {
                    violations.push(Violation::PizzaNotFound(pizza_id));
                }
                pizza
            }
            None => {
                violations.push(Violation::MissingPizzaId);
                None
            }
        };

        let restaurant = match params.restaurant_id {
            Some(restaurant_id) => {
                let restaurant = RestaurantRepository::new(self.db)
                    .get_by_id(restaurant_id)
                    .await?;
                if restaurant.is_none() {
                    violations.push(Violation::RestaurantNotFound(restaurant_id));
                }
                restaurant
            }
            None => {
                violations.push(Violation::MissingRestaurantId);
                None
            }
        };

        let price = match validate_price(params.price) {
            Ok(price) => Some(price),
            Err(violation) => {
                violations.push(violation);
                None
            }
        };

        let (Some(pizza), Some(restaurant), Some(price)) = (pizza, restaurant, price) else {
            return Err(AppError::Validation(violations));
        };

        let created = RestaurantPizzaRepository::new(self.db)
            .create(NewRestaurantPizza {
                price,
                pizza_id: pizza.id,
                restaurant_id: restaurant.id,
            })
            .await?;

        tracing::info!(
            "Created restaurant pizza {} (restaurant {}, pizza {}, price {})",
            created.id,
            restaurant.id,
            pizza.id,
            created.price
        );

        Ok(CreatedRestaurantPizza::from_entity(
            created,
            Pizza::from_entity(pizza),
            RestaurantSummary::from_entity(restaurant),
        ))
    }
}
