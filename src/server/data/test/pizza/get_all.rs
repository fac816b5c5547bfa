use super::*;

/// Tests listing pizzas ordered by ID.
///
/// Expected: Ok with every pizza
#[tokio::test]
async fn returns_all_pizzas_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizza_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_pizza(db).await?;
    let second = factory::create_pizza(db).await?;

    let repo = PizzaRepository::new(db);
    let pizzas = repo.get_all().await?;

    assert_eq!(pizzas, vec![first, second]);

    Ok(())
}
