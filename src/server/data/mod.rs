//! Database repository layer for all domain entities.
//!
//! Each repository wraps a SeaORM connection and converts entity models into domain models at
//! the boundary. Repositories are generic over `ConnectionTrait` so a service can run several
//! of them inside one `DatabaseTransaction`.

pub mod event;
pub mod member;
pub mod news;
pub mod project;
pub mod setting;
pub mod store_item;
pub mod team;
pub mod vote;

#[cfg(test)]
mod test;

use sea_orm::{sqlx, DbErr, RuntimeErr};
use serde::Serialize;

use crate::server::util::json::encode_list;

/// Encodes a list column, reporting serialization failure as a database error.
pub(crate) fn encode_column<T: Serialize>(items: &[T], field: &'static str) -> Result<String, DbErr> {
    encode_list(items, field).map_err(|err| DbErr::Json(err.to_string()))
}

/// Whether a query failed because another connection holds a conflicting SQLite lock.
///
/// Covers `SQLITE_BUSY` and `SQLITE_LOCKED` with their extended codes. A deferred
/// transaction that loses the race to upgrade its read lock fails this way instead of
/// waiting.
pub(crate) fn is_lock_conflict(err: &DbErr) -> bool {
    let (DbErr::Exec(RuntimeErr::SqlxError(err)) | DbErr::Query(RuntimeErr::SqlxError(err))) = err
    else {
        return false;
    };
    let sqlx::Error::Database(err) = err.as_ref() else {
        return false;
    };

    matches!(
        err.code().as_deref(),
        Some("5" | "6" | "261" | "262" | "517")
    )
}
