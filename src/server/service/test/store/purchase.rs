use super::*;

/// Tests a purchase of a finite-stock item.
///
/// Expected: Ok with XP debited, a purchase recorded and stock decremented
#[tokio::test]
async fn debits_xp_and_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(250).build().await?;
    let item = factory::store_item::StoreItemFactory::new(db)
        .price(100)
        .quantity(3)
        .build()
        .await?;

    let result = StoreService::new(db)
        .purchase(&member.slack_id, Some(item.id))
        .await?;

    assert!(result.success);
    assert_eq!(result.new_xp, 150);

    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert_eq!(member.experience_points, 150);
    assert_eq!(member.purchases.len(), 1);
    assert_eq!(member.purchases[0].item_id, item.id);

    let item = StoreItemRepository::new(db).find_by_id(item.id).await?.unwrap();
    assert_eq!(item.quantity, 2);

    Ok(())
}

/// Tests a purchase the member cannot afford.
///
/// Expected: Err(BadRequest) and the balance is unchanged
#[tokio::test]
async fn fails_with_insufficient_xp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(50).build().await?;
    let item = factory::store_item::StoreItemFactory::new(db)
        .price(100)
        .build()
        .await?;

    let result = StoreService::new(db)
        .purchase(&member.slack_id, Some(item.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Insufficient XP"));
    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert_eq!(member.experience_points, 50);

    Ok(())
}

/// Tests buying past the per-person limit.
///
/// Expected: the first purchase succeeds, the second returns Err(BadRequest)
#[tokio::test]
async fn fails_when_limit_reached() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(500).build().await?;
    let item = factory::store_item::StoreItemFactory::new(db)
        .price(100)
        .limit_per_person(1)
        .build()
        .await?;
    let service = StoreService::new(db);

    service.purchase(&member.slack_id, Some(item.id)).await?;
    let result = service.purchase(&member.slack_id, Some(item.id)).await;

    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "Purchase limit reached for this item")
    );

    Ok(())
}

/// Tests buying an item with no stock left.
///
/// Expected: Err(BadRequest) "Item is not in stock"
#[tokio::test]
async fn fails_when_out_of_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(500).build().await?;
    let item = factory::store_item::StoreItemFactory::new(db)
        .quantity(0)
        .build()
        .await?;

    let result = StoreService::new(db)
        .purchase(&member.slack_id, Some(item.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Item is not in stock"));

    Ok(())
}

/// Tests unknown ids.
///
/// Expected: Err(BadRequest) without an item id, Err(NotFound) for an unknown item
#[tokio::test]
async fn rejects_missing_and_unknown_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = StoreService::new(db);

    let missing = service.purchase(&member.slack_id, None).await;
    let unknown = service.purchase(&member.slack_id, Some(999)).await;

    assert!(matches!(missing, Err(AppError::BadRequest(_))));
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a purchase while another connection holds an open write on the member row.
///
/// Expected: Err(Conflict) once the busy timeout expires, and nothing is written
#[tokio::test]
async fn conflicts_while_member_row_is_locked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .file_backed()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(250).build().await?;
    let item = factory::store_item::StoreItemFactory::new(db)
        .price(100)
        .build()
        .await?;

    let holder = db.begin().await?;
    let domain = Member::from_entity(member.clone());
    let written = MemberRepository::new(&holder)
        .replace_purchases(&domain, domain.experience_points, &domain.purchases)
        .await?;
    assert!(written);

    let result = StoreService::new(db)
        .purchase(&member.slack_id, Some(item.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    holder.rollback().await?;

    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert_eq!(member.experience_points, 250);
    assert!(member.purchases.is_empty());

    Ok(())
}

/// Tests two simultaneous purchases that the balance only covers once.
///
/// Expected: exactly one Ok. The other is Err(Conflict), or Err(BadRequest) when the two
/// ran one after the other, and never a database error
#[tokio::test]
async fn concurrent_purchases_spend_balance_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .file_backed()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(100).build().await?;
    let item = factory::store_item::StoreItemFactory::new(db)
        .price(100)
        .build()
        .await?;

    let service = StoreService::new(db);
    let (first, second) = tokio::join!(
        service.purchase(&member.slack_id, Some(item.id)),
        service.purchase(&member.slack_id, Some(item.id)),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().all(|result| matches!(
        result,
        Ok(_) | Err(AppError::Conflict(_)) | Err(AppError::BadRequest(_))
    )));

    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert_eq!(member.experience_points, 0);
    assert_eq!(member.purchases.len(), 1);

    Ok(())
}
