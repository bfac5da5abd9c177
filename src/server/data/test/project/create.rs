use super::*;

/// Tests creating a project.
///
/// Expected: Ok with status Created and empty devlogs
#[tokio::test]
async fn creates_project_in_created_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let repo = ProjectRepository::new(db);
    let project = repo
        .create(CreateProjectParam {
            name: "Robot".to_string(),
            description: "Walks".to_string(),
            team_id: team.id,
        })
        .await?;

    assert_eq!(project.status, ProjectStatus::Created);
    assert_eq!(project.team_id, team.id);
    assert!(project.devlogs.is_empty());
    assert_eq!(project.hackatime_hours, 0.0);

    Ok(())
}

/// Tests the per-team name check.
///
/// Expected: true for the same team, false for another team
#[tokio::test]
async fn name_is_scoped_to_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    factory::project::ProjectFactory::new(db, team.id)
        .name("Robot")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.exists_in_team(team.id, "Robot").await?);
    assert!(!repo.exists_in_team(other.id, "Robot").await?);

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: only approved projects are returned
#[tokio::test]
async fn gets_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    factory::project::ProjectFactory::new(db, team.id)
        .status("Approved")
        .build()
        .await?;
    factory::project::ProjectFactory::new(db, team.id)
        .status("Rejected")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let approved = repo.get_by_status(ProjectStatus::Approved).await?;

    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].status, ProjectStatus::Approved);

    Ok(())
}
