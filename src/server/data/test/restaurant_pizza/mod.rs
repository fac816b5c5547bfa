use crate::server::{
    data::restaurant_pizza::RestaurantPizzaRepository,
    model::restaurant_pizza::NewRestaurantPizza,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
