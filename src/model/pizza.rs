use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PizzaDto {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}
