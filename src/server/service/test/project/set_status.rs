use super::*;

/// Tests rejecting a project with a reason.
///
/// Expected: Ok with status "Rejected" and the trimmed reason stored
#[tokio::test]
async fn stores_rejection_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let project = factory::create_project(db, team.id).await?;

    let updated = ProjectService::new(db)
        .set_status(
            project.id,
            ProjectStatusDto {
                status: "Rejected".to_string(),
                rejection_reason: Some(" No repository ".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.status, "Rejected");
    assert_eq!(updated.rejection_reason.as_deref(), Some("No repository"));

    Ok(())
}

/// Tests approving a previously rejected project.
///
/// Expected: Ok with the rejection reason cleared
#[tokio::test]
async fn clears_reason_when_approved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let project = factory::create_project(db, team.id).await?;
    let service = ProjectService::new(db);
    service
        .set_status(
            project.id,
            ProjectStatusDto {
                status: "Rejected".to_string(),
                rejection_reason: Some("No repository".to_string()),
            },
        )
        .await?;

    let updated = service
        .set_status(
            project.id,
            ProjectStatusDto {
                status: "Approved".to_string(),
                rejection_reason: Some("ignored".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.status, "Approved");
    assert_eq!(updated.rejection_reason, None);

    Ok(())
}

/// Tests an unknown status string.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let project = factory::create_project(db, team.id).await?;

    let result = ProjectService::new(db)
        .set_status(
            project.id,
            ProjectStatusDto {
                status: "Shipped".to_string(),
                rejection_reason: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
