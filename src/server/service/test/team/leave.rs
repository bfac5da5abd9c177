use super::*;

/// Tests the last member leaving a team.
///
/// Expected: Ok, the team is deleted and the member's team id cleared
#[tokio::test]
async fn deletes_empty_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;

    TeamService::new(db)
        .leave(&Member::from_entity(member.clone()))
        .await?;

    assert!(TeamRepository::new(db).find_by_id(team.id).await?.is_none());
    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert_eq!(member.team_id, None);

    Ok(())
}

/// Tests one of two members leaving.
///
/// Expected: Ok and the team remains with the other member
#[tokio::test]
async fn keeps_team_with_remaining_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let joiner = Member::from_entity(factory::create_member(db).await?);
    let service = TeamService::new(db);
    service.join(&joiner, Some(team.id)).await?;

    service.leave(&Member::from_entity(founder.clone())).await?;

    let team = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
    assert_eq!(team.members.len(), 1);
    assert_eq!(team.members[0].id, joiner.slack_id);

    Ok(())
}

/// Tests leaving without a team.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn fails_without_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = Member::from_entity(factory::create_member(db).await?);

    let result = TeamService::new(db).leave(&member).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
