use super::*;

fn named(name: &str) -> CreateProjectDto {
    CreateProjectDto {
        project_name: Some(name.to_string()),
        description: Some("  Tracks hackathon snacks ".to_string()),
    }
}

/// Tests creating a project for the member's team.
///
/// Expected: Ok in the Created state, listed on the team
#[tokio::test]
async fn creates_project_for_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let member = Member::from_entity(member);

    let project = ProjectService::new(db)
        .create(&member, named("Snack Tracker"))
        .await?;

    assert_eq!(project.status, "Created");
    assert_eq!(project.description, "Tracks hackathon snacks");
    assert_eq!(project.team_name, team.name);
    assert_eq!(project.member_names, vec![member.name.clone()]);
    let team = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
    assert_eq!(team.projects, vec!["Snack Tracker".to_string()]);

    Ok(())
}

/// Tests a second project with the same name on one team.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _) = factory::helpers::create_member_on_team(db, "Public").await?;
    let member = Member::from_entity(member);
    let service = ProjectService::new(db);
    service.create(&member, named("Snack Tracker")).await?;

    let result = service.create(&member, named("Snack Tracker")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating a project without a team.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn fails_without_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = Member::from_entity(factory::create_member(db).await?);

    let result = ProjectService::new(db)
        .create(&member, named("Snack Tracker"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
