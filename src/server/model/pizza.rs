//! Pizza domain model.

use crate::model::pizza::PizzaDto;

/// Pizza projected to its own columns, without any relationship expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl Pizza {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::pizza::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            ingredients: entity.ingredients,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PizzaDto {
        PizzaDto {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}
