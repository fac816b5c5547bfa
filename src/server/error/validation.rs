use thiserror::Error;

/// A single reason a restaurant pizza write was rejected.
///
/// Violations are collected, not short-circuited, so one request may produce several.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Pizza id is required")]
    MissingPizzaId,

    #[error("Pizza with id {0} does not exist")]
    PizzaNotFound(i32),

    #[error("Restaurant id is required")]
    MissingRestaurantId,

    #[error("Restaurant with id {0} does not exist")]
    RestaurantNotFound(i32),

    #[error("Price is required")]
    MissingPrice,

    #[error("Price must be between 1 and 30")]
    PriceOutOfRange(i64),

    /// Request body is not a JSON object of the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}
