use super::*;
use test_utils::factory::restaurant_pizza::RestaurantPizzaFactory;

/// Tests getting a restaurant with its restaurant pizzas and their pizzas.
///
/// Expected: Ok(Some) with each restaurant pizza paired with its pizza
#[tokio::test]
async fn gets_restaurant_with_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let cheese = factory::create_pizza(db).await?;
    let pepperoni = factory::create_pizza(db).await?;
    RestaurantPizzaFactory::new(db, restaurant.id, cheese.id)
        .price(10)
        .build()
        .await?;
    RestaurantPizzaFactory::new(db, restaurant.id, pepperoni.id)
        .price(20)
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let result = repo.get_by_id_with_pizzas(restaurant.id).await?.unwrap();

    assert_eq!(result.restaurant, restaurant);
    assert_eq!(result.restaurant_pizzas.len(), 2);

    let (first, first_pizza) = &result.restaurant_pizzas[0];
    assert_eq!(first.price, 10);
    assert_eq!(first_pizza.as_ref(), Some(&cheese));

    let (second, second_pizza) = &result.restaurant_pizzas[1];
    assert_eq!(second.price, 20);
    assert_eq!(second_pizza.as_ref(), Some(&pepperoni));

    Ok(())
}

/// Tests that only the requested restaurant's pizzas are returned.
///
/// Expected: Ok(Some) without restaurant pizzas of other restaurants
#[tokio::test]
async fn excludes_other_restaurants_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    let other = factory::create_restaurant(db).await?;
    factory::create_restaurant_pizza(db, other.id, pizza.id).await?;

    let repo = RestaurantRepository::new(db);
    let result = repo.get_by_id_with_pizzas(restaurant.id).await?.unwrap();

    assert_eq!(result.restaurant_pizzas.len(), 1);
    assert_eq!(result.restaurant_pizzas[0].0, restaurant_pizza);

    Ok(())
}

/// Tests getting a restaurant that has no restaurant pizzas.
///
/// Expected: Ok(Some) with empty restaurant pizzas
#[tokio::test]
async fn gets_restaurant_without_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let repo = RestaurantRepository::new(db);
    let result = repo.get_by_id_with_pizzas(restaurant.id).await?.unwrap();

    assert!(result.restaurant_pizzas.is_empty());

    Ok(())
}

/// Tests getting a restaurant that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let result = repo.get_by_id_with_pizzas(999).await?;

    assert!(result.is_none());

    Ok(())
}
