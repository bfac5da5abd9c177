use super::*;

/// Tests recording a valid ballot.
///
/// Expected: Ok and one vote stored for the voter
#[tokio::test]
async fn records_vote() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VotingService::new(db)
        .cast(
            "U1",
            CastVoteDto {
                projects_shown: Some(vec![1, 2]),
                project_chosen: Some(2),
                reason: Some("Best demo".to_string()),
            },
        )
        .await?;

    let votes = VoteRepository::new(db).get_all().await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].voter_slack_id, "U1");
    assert_eq!(votes[0].projects_shown, vec![1, 2]);

    Ok(())
}
