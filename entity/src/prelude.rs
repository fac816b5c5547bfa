pub use super::pizza::Entity as Pizza;
pub use super::restaurant::Entity as Restaurant;
pub use super::restaurant_pizza::Entity as RestaurantPizza;
