use super::*;

fn param() -> EventParam {
    EventParam {
        name: "Opening ceremony".to_string(),
        location: "Main hall".to_string(),
        description: String::new(),
        day_of_week: "Friday".to_string(),
        hour: "18:00".to_string(),
        tags: vec![EventTag::MainEvent],
        xp_to_buy: None,
        max_attendees: None,
        store_item_id: None,
    }
}

/// Tests creating and updating an event with tags.
///
/// Expected: tags are stored and replaced on update
#[tokio::test]
async fn stores_and_replaces_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo.create(param()).await?;
    assert_eq!(event.tags, vec![EventTag::MainEvent]);

    let mut changed = param();
    changed.tags = vec![EventTag::StoreUnlockable, EventTag::LimitedAttendees];
    changed.xp_to_buy = Some(100);
    let updated = repo.update(event.id, changed).await?.unwrap();

    assert!(updated.has_tag(EventTag::StoreUnlockable));
    assert!(!updated.has_tag(EventTag::MainEvent));
    assert_eq!(updated.xp_to_buy, Some(100));

    Ok(())
}

/// Tests deleting an event.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let repo = EventRepository::new(db);

    assert!(repo.delete(event.id).await?);
    assert!(!repo.delete(event.id).await?);

    Ok(())
}

/// Tests finding the events unlocked by store items.
///
/// Expected: only the event linked to the given item
#[tokio::test]
async fn finds_by_store_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (item, event) = factory::helpers::create_ticketed_event(db).await?;
    factory::create_event(db).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_by_store_item_ids(&[item.id]).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, event.id);
    assert!(repo.get_by_store_item_ids(&[]).await?.is_empty());

    Ok(())
}
