use super::*;

/// Tests assigning and clearing a member's team.
///
/// Expected: Ok with team_id set, then cleared
#[tokio::test]
async fn sets_and_clears_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);

    repo.set_team(&member.slack_id, Some(7)).await?;
    let on_team = repo.find_by_slack_id(&member.slack_id).await?.unwrap();
    assert_eq!(on_team.team_id, Some(7));

    repo.set_team(&member.slack_id, None).await?;
    let off_team = repo.find_by_slack_id(&member.slack_id).await?.unwrap();
    assert_eq!(off_team.team_id, None);

    Ok(())
}

/// Tests looking up several members at once.
///
/// Expected: Ok with only the requested members; empty input returns no members
#[tokio::test]
async fn finds_by_slack_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_member(db).await?;
    let b = factory::create_member(db).await?;
    factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let found = repo
        .find_by_slack_ids(&[a.slack_id.clone(), b.slack_id.clone()])
        .await?;

    assert_eq!(found.len(), 2);
    assert!(repo.find_by_slack_ids(&[]).await?.is_empty());

    Ok(())
}
