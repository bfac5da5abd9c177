use super::*;

/// Tests creating a team with its founder.
///
/// Expected: Ok with the founder as the only member and empty project and request lists
#[tokio::test]
async fn creates_team_with_founder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let founder = Member::from_entity(factory::create_member(db).await?);
    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParam {
            name: "Rustaceans".to_string(),
            team_type: TeamType::AskForInvite,
            founder: TeamMember::from_member(&founder),
        })
        .await?;

    assert_eq!(team.name, "Rustaceans");
    assert_eq!(team.team_type, TeamType::AskForInvite);
    assert_eq!(team.members.len(), 1);
    assert!(team.has_member(&founder.slack_id));
    assert!(team.projects.is_empty());
    assert!(team.join_requests.is_empty());

    Ok(())
}

/// Tests deleting a team.
///
/// Expected: Ok with the team no longer found
#[tokio::test]
async fn deletes_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let repo = TeamRepository::new(db);
    repo.delete(team.id).await?;

    assert!(repo.find_by_id(team.id).await?.is_none());

    Ok(())
}
