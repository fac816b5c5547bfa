mod pizza;
mod restaurant;
mod restaurant_pizza;
