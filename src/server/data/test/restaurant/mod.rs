use crate::server::data::restaurant::RestaurantRepository;
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_id_with_pizzas;
