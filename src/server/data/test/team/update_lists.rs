use super::*;

/// Tests replacing the member list.
///
/// Expected: Ok with the stored list equal to the written one
#[tokio::test]
async fn replaces_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let newcomer = Member::from_entity(factory::create_member(db).await?);
    let repo = TeamRepository::new(db);

    let mut team = repo.find_by_id(team.id).await?.unwrap();
    team.members.push(TeamMember::from_member(&newcomer));
    repo.update_members(team.id, &team.members).await?;

    let stored = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(stored.members.len(), 2);
    assert!(stored.has_member(&member.slack_id));
    assert!(stored.has_member(&newcomer.slack_id));

    Ok(())
}

/// Tests storing join requests and project names.
///
/// Expected: Ok with both lists read back
#[tokio::test]
async fn stores_requests_and_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .team_type("Ask for invite")
        .build()
        .await?;
    let requester = Member::from_entity(factory::create_member(db).await?);
    let repo = TeamRepository::new(db);

    repo.update_join_requests(team.id, &[JoinRequest::pending_for(&requester)])
        .await?;
    repo.update_projects(team.id, &["Robot".to_string()]).await?;

    let stored = repo.find_by_id(team.id).await?.unwrap();
    assert!(stored.has_request_from(&requester.slack_id));
    assert_eq!(stored.join_requests[0].status, "pending");
    assert_eq!(stored.projects, vec!["Robot".to_string()]);

    Ok(())
}
