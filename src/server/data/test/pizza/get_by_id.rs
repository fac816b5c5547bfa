use super::*;

/// Tests getting an existing pizza.
///
/// Expected: Ok(Some(pizza))
#[tokio::test]
async fn gets_pizza_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::pizza::PizzaFactory::new(db)
        .name("Cheese")
        .ingredients("Dough,Tomato,Cheese")
        .build()
        .await?;

    let repo = PizzaRepository::new(db);
    let result = repo.get_by_id(pizza.id).await?;

    assert_eq!(result, Some(pizza));

    Ok(())
}

/// Tests getting a pizza that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PizzaRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
