use super::*;

/// Tests listing news newest first.
///
/// Expected: the most recently created item comes first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_news(db).await?;
    let latest = factory::create_news(db).await?;

    let news = NewsRepository::new(db).get_all().await?;

    assert_eq!(news.len(), 2);
    assert_eq!(news[0].id, latest.id);

    Ok(())
}

/// Tests updating and deleting a news item.
///
/// Expected: the update is read back and the delete removes it
#[tokio::test]
async fn updates_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_news(db).await?;
    let repo = NewsRepository::new(db);

    let updated = repo
        .update(
            created.id,
            NewsParam {
                name: "Schedule change".to_string(),
                description: String::new(),
                md_content: "Lunch moved to *13:00*".to_string(),
                author: "Organizers".to_string(),
                publication_date: None,
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.name, "Schedule change");
    assert_eq!(updated.publication_date, None);

    assert!(repo.delete(created.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
