use super::*;

/// Tests banning a member and adjusting their XP.
///
/// Expected: Ok(Some) with banned, reason and XP written
#[tokio::test]
async fn bans_and_sets_xp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);

    let updated = repo
        .update_admin(
            &member.invite_id,
            UpdateMemberParam {
                banned: Some(true),
                ban_reason: Some(Some("spam".to_string())),
                experience_points: Some(40),
            },
        )
        .await?
        .unwrap();

    assert!(updated.banned);
    assert_eq!(updated.ban_reason.as_deref(), Some("spam"));
    assert_eq!(updated.experience_points, 40);

    Ok(())
}

/// Tests unbanning clears the stored reason.
///
/// Expected: Ok(Some) with banned false and no reason
#[tokio::test]
async fn unban_clears_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .banned(Some("spam"))
        .build()
        .await?;
    let repo = MemberRepository::new(db);

    let updated = repo
        .update_admin(
            &member.invite_id,
            UpdateMemberParam::from(crate::model::member::UpdateMemberDto {
                banned: Some(false),
                ban_reason: None,
                experience_points: None,
            }),
        )
        .await?
        .unwrap();

    assert!(!updated.banned);
    assert_eq!(updated.ban_reason, None);

    Ok(())
}

/// Tests updating an unknown invite id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo
        .update_admin("missing", UpdateMemberParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
