use super::*;

fn record(item_id: i32) -> PurchaseRecord {
    PurchaseRecord {
        item_id,
        item_name: "Sticker Pack".to_string(),
        category: "Other".to_string(),
        xp_price: 100,
        purchased_at: Utc::now(),
        used: false,
        used_at: None,
    }
}

/// Tests writing a purchase against an unchanged member.
///
/// Expected: Ok(true) with XP and purchase list replaced
#[tokio::test]
async fn writes_when_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::member::MemberFactory::new(db).xp(300).build().await?;
    let repo = MemberRepository::new(db);
    let member = repo.find_by_slack_id(&entity.slack_id).await?.unwrap();

    let written = repo.replace_purchases(&member, 200, &[record(1)]).await?;

    assert!(written);
    let member = repo.find_by_slack_id(&entity.slack_id).await?.unwrap();
    assert_eq!(member.experience_points, 200);
    assert_eq!(member.purchases.len(), 1);

    Ok(())
}

/// Tests that a stale read loses to a concurrent write.
///
/// Expected: Ok(false) and the concurrent write is kept
#[tokio::test]
async fn rejects_stale_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::member::MemberFactory::new(db).xp(300).build().await?;
    let repo = MemberRepository::new(db);
    let first_read = repo.find_by_slack_id(&entity.slack_id).await?.unwrap();
    let second_read = first_read.clone();

    assert!(repo.replace_purchases(&first_read, 200, &[record(1)]).await?);
    let written = repo.replace_purchases(&second_read, 200, &[record(2)]).await?;

    assert!(!written);
    let member = repo.find_by_slack_id(&entity.slack_id).await?.unwrap();
    assert_eq!(member.purchases[0].item_id, 1);

    Ok(())
}
