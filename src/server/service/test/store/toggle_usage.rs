use super::*;

/// Tests marking a purchase as used.
///
/// Expected: Ok with the purchase marked used and a used timestamp
#[tokio::test]
async fn marks_purchase_used() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(100).build().await?;
    let item = factory::create_store_item(db).await?;
    let service = StoreService::new(db);
    service.purchase(&member.slack_id, Some(item.id)).await?;

    let result = service
        .toggle_usage(
            &member.slack_id,
            ToggleUsageDto {
                purchase_index: Some(0),
                mark_as_used: Some(true),
            },
        )
        .await?;

    assert!(result.updated_item.used);
    assert_eq!(result.message, "Item marked as used");
    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert!(member.purchases[0].used);
    assert!(member.purchases[0].used_at.is_some());

    Ok(())
}

/// Tests an index past the end of the purchase list.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_out_of_range_index() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let result = StoreService::new(db)
        .toggle_usage(
            &member.slack_id,
            ToggleUsageDto {
                purchase_index: Some(3),
                mark_as_used: Some(true),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid purchase index"));

    Ok(())
}

/// Tests a request that omits the used flag.
///
/// Expected: Err(BadRequest) and the purchase is left unchanged
#[tokio::test]
async fn rejects_missing_used_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).xp(100).build().await?;
    let item = factory::create_store_item(db).await?;
    let service = StoreService::new(db);
    service.purchase(&member.slack_id, Some(item.id)).await?;

    let result = service
        .toggle_usage(
            &member.slack_id,
            ToggleUsageDto {
                purchase_index: Some(0),
                mark_as_used: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid parameters"));
    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert!(!member.purchases[0].used);

    Ok(())
}
