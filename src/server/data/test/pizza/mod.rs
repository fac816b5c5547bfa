use crate::server::data::pizza::PizzaRepository;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_cascade;
mod get_all;
mod get_by_id;
