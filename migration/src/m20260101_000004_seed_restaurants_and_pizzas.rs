use entity::{pizza, restaurant};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter},
};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (name, address) in RESTAURANTS {
            restaurant::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                address: ActiveValue::Set(address.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        for (name, ingredients) in PIZZAS {
            pizza::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ingredients: ActiveValue::Set(ingredients.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        pizza::Entity::delete_many()
            .filter(pizza::Column::Name.is_in(PIZZAS.map(|(name, _)| name)))
            .exec(db)
            .await?;

        restaurant::Entity::delete_many()
            .filter(restaurant::Column::Name.is_in(RESTAURANTS.map(|(name, _)| name)))
            .exec(db)
            .await?;

        Ok(())
    }
}
