use super::*;

/// Tests requesting to join an invite-only team twice.
///
/// Expected: the first request is stored, the second returns Err(BadRequest)
#[tokio::test]
async fn records_single_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_member_on_team(db, "Ask for invite").await?;
    let requester = Member::from_entity(factory::create_member(db).await?);
    let service = TeamService::new(db);

    service.request(&requester, Some(team.id)).await?;
    let again = service.request(&requester, Some(team.id)).await;

    assert!(matches!(again, Err(AppError::BadRequest(msg)) if msg == "Join request already sent"));
    let team = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
    assert_eq!(team.join_requests.len(), 1);
    assert_eq!(team.join_requests[0].id, requester.slack_id);

    Ok(())
}

/// Tests requesting to join a public team.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_public_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let requester = Member::from_entity(factory::create_member(db).await?);

    let result = TeamService::new(db).request(&requester, Some(team.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
