use super::*;

/// Tests recording a vote.
///
/// Expected: the vote is stored with its shown projects decoded
#[tokio::test]
async fn records_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoteRepository::new(db);
    repo.create(CastVoteParam {
        voter_slack_id: "U1".to_string(),
        projects_shown: vec![3, 4],
        project_chosen: 4,
        reason: "Cleaner demo".to_string(),
    })
    .await?;

    let votes = repo.get_all().await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].projects_shown, vec![3, 4]);
    assert_eq!(votes[0].project_chosen, 4);

    Ok(())
}
