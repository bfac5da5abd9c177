use super::*;

fn ballot(chosen: i32) -> CastVoteDto {
    CastVoteDto {
        projects_shown: Some(vec![chosen, 0]),
        project_chosen: Some(chosen),
        reason: Some("Liked it".to_string()),
    }
}

/// Tests tallying votes across projects.
///
/// Expected: one row per voted project, most votes first, with project names
#[tokio::test]
async fn orders_by_votes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .with_table(entity::prelude::Vote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let first = factory::project::ProjectFactory::new(db, team.id)
        .name("Snack Tracker")
        .build()
        .await?;
    let second = factory::project::ProjectFactory::new(db, team.id)
        .name("Badge Scanner")
        .build()
        .await?;
    let service = VotingService::new(db);
    service.cast("U1", ballot(first.id)).await?;
    service.cast("U2", ballot(second.id)).await?;
    service.cast("U3", ballot(second.id)).await?;

    let tally = service.tally().await?;

    assert_eq!(tally.len(), 2);
    assert_eq!(tally[0].project_id, second.id);
    assert_eq!(tally[0].project_name, "Badge Scanner");
    assert_eq!(tally[0].votes, 2);
    assert_eq!(tally[1].votes, 1);

    Ok(())
}
