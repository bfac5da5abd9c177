use super::*;

/// Tests pairing with a single approved project.
///
/// Expected: Err(BadRequest) "Not enough projects available for voting"
#[tokio::test]
async fn requires_two_approved_projects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    factory::project::ProjectFactory::new(db, team.id)
        .status("Approved")
        .build()
        .await?;
    factory::create_project(db, team.id).await?;

    let result = VotingService::new(db).pair().await;

    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "Not enough projects available for voting")
    );

    Ok(())
}

/// Tests pairing with three approved projects.
///
/// Expected: Ok with two distinct approved projects
#[tokio::test]
async fn picks_two_distinct_projects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    for _ in 0..3 {
        factory::project::ProjectFactory::new(db, team.id)
            .status("Approved")
            .build()
            .await?;
    }

    let pair = VotingService::new(db).pair().await?;

    assert_eq!(pair.projects.len(), 2);
    assert_ne!(pair.projects[0].id, pair.projects[1].id);
    assert!(pair.projects.iter().all(|p| p.status == "Approved"));
    assert!(pair.projects.iter().all(|p| p.team_name == team.name));

    Ok(())
}
