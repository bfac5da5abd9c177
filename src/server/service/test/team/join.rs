use super::*;

/// Tests joining a public team.
///
/// Expected: Ok with the member appended to the team and team id set
#[tokio::test]
async fn joins_public_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let joiner = Member::from_entity(factory::create_member(db).await?);

    TeamService::new(db).join(&joiner, Some(team.id)).await?;

    let team = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
    assert_eq!(team.members.len(), 2);
    assert!(team.members.iter().any(|m| m.id == joiner.slack_id));
    let joiner = MemberRepository::new(db)
        .find_by_slack_id(&joiner.slack_id)
        .await?
        .unwrap();
    assert_eq!(joiner.team_id, Some(team.id));

    Ok(())
}

/// Tests joining a private team directly.
///
/// Expected: Err(Forbidden) and the team is unchanged
#[tokio::test]
async fn fails_for_private_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_member_on_team(db, "Private").await?;
    let joiner = Member::from_entity(factory::create_member(db).await?);

    let result = TeamService::new(db).join(&joiner, Some(team.id)).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    let team = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
    assert_eq!(team.members.len(), 1);

    Ok(())
}

/// Tests joining a team that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let joiner = Member::from_entity(factory::create_member(db).await?);

    let result = TeamService::new(db).join(&joiner, Some(999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
