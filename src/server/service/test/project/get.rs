use super::*;

/// Tests reading another team's project.
///
/// Expected: Err(Forbidden) "Access denied"
#[tokio::test]
async fn denies_other_teams() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner_team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let (outsider, _) = factory::helpers::create_member_on_team(db, "Public").await?;
    let project = factory::create_project(db, owner_team.id).await?;

    let result = ProjectService::new(db)
        .get(&Member::from_entity(outsider), project.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(msg)) if msg == "Access denied"));

    Ok(())
}

/// Tests reading an unknown project.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_project() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _) = factory::helpers::create_member_on_team(db, "Public").await?;

    let result = ProjectService::new(db)
        .get(&Member::from_entity(member), 999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
