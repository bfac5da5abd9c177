use super::*;

/// Tests unlinking a Hackatime project that was never linked.
///
/// Expected: Ok with no links and the tracked hours reset, without fetching any stats
#[tokio::test]
async fn succeeds_for_unlinked_project() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let project = factory::create_project(db, team.id).await?;
    let http_client = reqwest::Client::new();

    let result = ProjectService::new(db)
        .unlink_hackatime(
            &Member::from_entity(member),
            project.id,
            HackatimeRequestDto {
                project_name: Some("hackboard".to_string()),
                user_id: None,
            },
            &HackatimeService::new(&http_client),
        )
        .await?;

    assert!(result.hackatime_projects.is_empty());
    assert_eq!(result.hackatime_hours, 0.0);

    Ok(())
}

/// Tests unlinking without a project name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn fails_without_project_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, team) = factory::helpers::create_member_on_team(db, "Public").await?;
    let project = factory::create_project(db, team.id).await?;
    let http_client = reqwest::Client::new();

    let result = ProjectService::new(db)
        .unlink_hackatime(
            &Member::from_entity(member),
            project.id,
            HackatimeRequestDto {
                project_name: Some("  ".to_string()),
                user_id: None,
            },
            &HackatimeService::new(&http_client),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
