use super::*;

/// Tests searching across name, email, slack name and slack id.
///
/// Expected: Ok with members matching any field, ignoring ASCII case
#[tokio::test]
async fn matches_any_field_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .name("Grace Hopper")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .email("GRACE@navy.example")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .slack_id("UGRACE")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .name("Linus")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let results = repo.search("grace", 20).await?;

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|m| m.name != "Linus"));

    Ok(())
}

/// Tests the result limit.
///
/// Expected: Ok with at most `limit` members
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_member(db).await?;
    }

    let repo = MemberRepository::new(db);
    let results = repo.search("Member", 3).await?;

    assert_eq!(results.len(), 3);

    Ok(())
}
