use super::*;

fn param(name: &str) -> StoreItemParam {
    StoreItemParam {
        name: name.to_string(),
        description: String::new(),
        xp_price: 150,
        quantity: 10,
        category: "Merch".to_string(),
        limit_per_person: 1,
        event_id: None,
    }
}

/// Tests creating, updating and deleting an item.
///
/// Expected: each step is reflected by the next read
#[tokio::test]
async fn creates_updates_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StoreItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StoreItemRepository::new(db);
    let item = repo.create(param("Hoodie")).await?;
    assert_eq!(item.quantity, 10);

    let mut changed = param("Hoodie XL");
    changed.xp_price = 200;
    let updated = repo.update(item.id, changed).await?.unwrap();
    assert_eq!(updated.name, "Hoodie XL");
    assert_eq!(updated.xp_price, 200);

    assert!(repo.delete(item.id).await?);
    assert!(!repo.delete(item.id).await?);
    assert!(repo.find_by_id(item.id).await?.is_none());

    Ok(())
}

/// Tests catalog ordering.
///
/// Expected: items ordered by price ascending
#[tokio::test]
async fn lists_cheapest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StoreItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::store_item::StoreItemFactory::new(db)
        .price(500)
        .build()
        .await?;
    factory::store_item::StoreItemFactory::new(db)
        .price(50)
        .build()
        .await?;

    let items = StoreItemRepository::new(db).get_all().await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].xp_price, 50);

    Ok(())
}
