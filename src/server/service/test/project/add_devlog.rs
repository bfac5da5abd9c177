use super::*;

/// Tests the first devlog on a new project.
///
/// Expected: Ok with the devlog stored and the status moved to "In development"
#[tokio::test]
async fn moves_created_project_into_development() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let project = factory::create_project(db, team.id).await?;
    let member = Member::from_entity(member);

    let updated = ProjectService::new(db)
        .add_devlog(
            &member,
            project.id,
            CreateDevlogDto {
                content: Some("Got the scanner working".to_string()),
                image_url: Some("   ".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.status, "In development");
    assert_eq!(updated.devlogs.len(), 1);
    assert_eq!(updated.devlogs[0].author, member.name);
    assert_eq!(updated.devlogs[0].image_url, None);

    Ok(())
}

/// Tests a devlog on an approved project.
///
/// Expected: Ok and the status stays "Approved"
#[tokio::test]
async fn keeps_reviewed_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let project = factory::project::ProjectFactory::new(db, team.id)
        .status("Approved")
        .build()
        .await?;

    let updated = ProjectService::new(db)
        .add_devlog(
            &Member::from_entity(member),
            project.id,
            CreateDevlogDto {
                content: Some("Polish".to_string()),
                image_url: None,
            },
        )
        .await?;

    assert_eq!(updated.status, "Approved");

    Ok(())
}

/// Tests a devlog with blank content.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let project = factory::create_project(db, team.id).await?;

    let result = ProjectService::new(db)
        .add_devlog(
            &Member::from_entity(member),
            project.id,
            CreateDevlogDto {
                content: Some("  ".to_string()),
                image_url: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
