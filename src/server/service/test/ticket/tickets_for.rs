use super::*;
use crate::server::data::member::MemberRepository;

/// Tests ticket derivation from purchases.
///
/// Expected: one ticket for the ticketed event the member bought into
#[tokio::test]
async fn derives_ticket_per_purchased_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::member::MemberFactory::new(db).xp(300).build().await?;
    let (item, event) = factory::helpers::create_ticketed_event(db).await?;
    factory::helpers::create_ticketed_event(db).await?;
    StoreService::new(db)
        .purchase(&entity.slack_id, Some(item.id))
        .await?;
    let member = MemberRepository::new(db)
        .find_by_slack_id(&entity.slack_id)
        .await?
        .unwrap();

    let tickets = TicketService::new(db).tickets_for(&member).await?;

    assert_eq!(tickets, vec![Ticket::new(entity.slack_id.clone(), event.id)]);

    Ok(())
}
