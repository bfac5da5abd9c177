use super::*;

/// Tests a partial update.
///
/// Expected: Ok(Some) with the given fields changed and the rest kept
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let created = factory::project::ProjectFactory::new(db, team.id)
        .name("Robot")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateProjectParam {
                git_repo: Some("https://github.com/example/robot".to_string()),
                status: Some(ProjectStatus::InDevelopment),
                devlogs: Some(vec![Devlog {
                    id: "d1".to_string(),
                    content: "Wheels attached".to_string(),
                    image_url: None,
                    timestamp: Utc::now(),
                    author: "Ada".to_string(),
                }]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Robot");
    assert_eq!(updated.git_repo, "https://github.com/example/robot");
    assert_eq!(updated.status, ProjectStatus::InDevelopment);
    assert_eq!(updated.devlogs.len(), 1);

    Ok(())
}

/// Tests updating a missing project.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo.update(404, UpdateProjectParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
