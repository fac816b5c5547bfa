use super::*;

/// Tests that removing a pizza row removes its restaurant pizzas.
///
/// Pizza deletion is not exposed over HTTP, so this exercises the schema-level
/// ON DELETE CASCADE declared on the restaurant pizza entity.
///
/// Expected: Ok with the restaurant pizza gone and the restaurant kept
#[tokio::test]
async fn deleting_pizza_cascades_to_restaurant_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, _) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    Pizza::delete_by_id(pizza.id).exec(db).await?;

    assert_eq!(RestaurantPizza::find().count(db).await?, 0);
    assert!(Restaurant::find_by_id(restaurant.id).one(db).await?.is_some());

    Ok(())
}
