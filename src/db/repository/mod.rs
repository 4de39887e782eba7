//! Repository layer — entity-scoped database operations.
//!
//! Every function takes the connection explicitly; callers own its
//! lifetime. Multi-statement writes run inside a transaction on that
//! connection so a failed reference check leaves the store untouched.

mod appointment;
mod doctor;
mod medication;
mod patient;
mod prescription;

use rusqlite::{params, Connection, Transaction, TransactionBehavior};

use super::DatabaseError;
use crate::models::EntityKind;

pub use appointment::*;
pub use doctor::*;
pub use medication::*;
pub use patient::*;
pub use prescription::*;

pub fn not_found(kind: EntityKind, id: i64) -> DatabaseError {
    DatabaseError::NotFound {
        entity_type: kind.label().to_string(),
        id: id.to_string(),
    }
}

/// Open a write transaction that takes the database write lock up front,
/// so rows checked by `ensure_exists` cannot vanish before the insert.
pub(crate) fn begin_write(conn: &Connection) -> Result<Transaction<'_>, DatabaseError> {
    Ok(Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?)
}

/// Referential check shared by every create that points at another row.
pub fn ensure_exists(conn: &Connection, kind: EntityKind, id: i64) -> Result<(), DatabaseError> {
    let exists: bool = conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", kind.table()),
        params![id],
        |row| row.get(0),
    )?;

    if exists {
        Ok(())
    } else {
        tracing::warn!(entity = kind.as_str(), id, "Referenced entity does not exist");
        Err(not_found(kind, id))
    }
}

pub(crate) fn delete_by_id(conn: &Connection, kind: EntityKind, id: i64) -> Result<(), DatabaseError> {
    let deleted = conn.execute(
        &format!("DELETE FROM {} WHERE id = ?1", kind.table()),
        params![id],
    )?;
    if deleted == 0 {
        return Err(not_found(kind, id));
    }
    tracing::info!(entity = kind.as_str(), id, "Deleted");
    Ok(())
}
