use super::*;

/// Tests creating a restaurant pizza for existing parents.
///
/// Expected: Ok with the row persisted and an ID generated
#[tokio::test]
async fn creates_restaurant_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let pizza = factory::create_pizza(db).await?;

    let repo = RestaurantPizzaRepository::new(db);
    let created = repo
        .create(NewRestaurantPizza {
            price: 15,
            pizza_id: pizza.id,
            restaurant_id: restaurant.id,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.price, 15);
    assert_eq!(created.pizza_id, pizza.id);
    assert_eq!(created.restaurant_id, restaurant.id);

    let db_row = RestaurantPizza::find_by_id(created.id).one(db).await?;
    assert_eq!(db_row, Some(created));

    Ok(())
}

/// Tests that the foreign keys reject a nonexistent parent.
///
/// Expected: Err with no row persisted
#[tokio::test]
async fn fails_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::create_pizza(db).await?;

    let repo = RestaurantPizzaRepository::new(db);
    let result = repo
        .create(NewRestaurantPizza {
            price: 15,
            pizza_id: pizza.id,
            restaurant_id: 999,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(RestaurantPizza::find().count(db).await?, 0);

    Ok(())
}
