use super::*;

/// Tests deleting a restaurant with dependents.
///
/// Verifies that the restaurant and all of its restaurant pizzas are removed and the
/// reported row count is dependents + 1.
///
/// Expected: Ok(Some(3)) with restaurant and both restaurant pizzas deleted
#[tokio::test]
async fn deletes_restaurant_and_its_restaurant_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let first = factory::create_pizza(db).await?;
    let second = factory::create_pizza(db).await?;
    factory::create_restaurant_pizza(db, restaurant.id, first.id).await?;
    factory::create_restaurant_pizza(db, restaurant.id, second.id).await?;

    let repo = RestaurantRepository::new(db);
    let deleted = repo.delete(restaurant.id).await?;

    assert_eq!(deleted, Some(3));

    let db_restaurant = Restaurant::find_by_id(restaurant.id).one(db).await?;
    assert!(db_restaurant.is_none());

    let remaining = RestaurantPizza::find()
        .filter(entity::restaurant_pizza::Column::RestaurantId.eq(restaurant.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests that deleting a restaurant leaves other rows untouched.
///
/// Expected: Ok with pizzas and other restaurants' restaurant pizzas intact
#[tokio::test]
async fn leaves_other_rows_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, _) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    let other = factory::create_restaurant(db).await?;
    let kept = factory::create_restaurant_pizza(db, other.id, pizza.id).await?;

    let repo = RestaurantRepository::new(db);
    repo.delete(restaurant.id).await?;

    assert!(Pizza::find_by_id(pizza.id).one(db).await?.is_some());
    assert!(Restaurant::find_by_id(other.id).one(db).await?.is_some());
    assert_eq!(
        RestaurantPizza::find_by_id(kept.id).one(db).await?,
        Some(kept)
    );

    Ok(())
}

/// Tests deleting a restaurant that does not exist.
///
/// Expected: Ok(None) with nothing removed
#[tokio::test]
async fn returns_none_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    let repo = RestaurantRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert_eq!(deleted, None);
    assert_eq!(Restaurant::find().count(db).await?, 1);
    assert_eq!(RestaurantPizza::find().count(db).await?, 1);

    Ok(())
}
