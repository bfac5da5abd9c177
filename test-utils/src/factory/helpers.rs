//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team of the given type with one registered member on it.
///
/// Both sides of the membership are written: the team's member list contains the member and
/// the member's `team_id` points at the team.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_type` - `"Public"`, `"Private"` or `"Ask for invite"`
///
/// # Returns
/// - `Ok((member, team))` - The member (with `team_id` set) and the team
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_on_team(
    db: &DatabaseConnection,
    team_type: &str,
) -> Result<(entity::member::Model, entity::team::Model), DbErr> {
    let member = crate::factory::member::MemberFactory::new(db)
        .pending(false)
        .build()
        .await?;
    let team = crate::factory::team::TeamFactory::new(db)
        .team_type(team_type)
        .member(&member)
        .build()
        .await?;

    let mut active = member.into_active_model();
    active.team_id = ActiveValue::Set(Some(team.id));
    let member = active.update(db).await?;

    Ok((member, team))
}

/// Creates a store item and a store-unlockable event linked to each other.
///
/// # Returns
/// - `Ok((store_item, event))` - Linked item and event
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ticketed_event(
    db: &DatabaseConnection,
) -> Result<(entity::store_item::Model, entity::event::Model), DbErr> {
    let item = crate::factory::store_item::StoreItemFactory::new(db)
        .category("Event")
        .build()
        .await?;
    let event = crate::factory::event::EventFactory::new(db)
        .tags(&["Store-unlockable"])
        .store_item_id(Some(item.id))
        .build()
        .await?;

    let mut active = item.into_active_model();
    active.event_id = ActiveValue::Set(Some(event.id));
    let item = active.update(db).await?;

    Ok((item, event))
}
