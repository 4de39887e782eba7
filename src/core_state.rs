//! Shared application state handed to every request handler.
//!
//! Holds only the location of the store. Each request opens its own
//! connection through [`CoreState::open_db`] and drops it when the handler
//! returns, so no connection outlives a request and none is shared.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::db::{self, DatabaseError};

pub struct CoreState {
    db_path: PathBuf,
}

impl CoreState {
    /// Prepare the store at `db_path`: create the file if needed and run
    /// pending migrations once, up front.
    pub fn initialize(db_path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = db::open_database(&db_path)?;
        drop(conn);

        tracing::info!(path = %db_path.display(), "Database ready");
        Ok(Self { db_path })
    }

    /// Open a fresh connection for one unit of work.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::connect(&self.db_path)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_creates_parent_dirs_and_schema() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("clinic.db");
        let state = CoreState::initialize(&path).unwrap();
        assert!(path.exists());
        assert_eq!(state.db_path(), path.as_path());

        let conn = state.open_db().unwrap();
        assert_eq!(db::count_tables(&conn).unwrap(), 6);
    }

    #[test]
    fn connections_are_independent_but_share_data() {
        let tmp = tempfile::tempdir().unwrap();
        let state = CoreState::initialize(tmp.path().join("clinic.db")).unwrap();

        {
            let conn = state.open_db().unwrap();
            conn.execute("INSERT INTO medications (name) VALUES ('Aspirin')", [])
                .unwrap();
        }

        let conn = state.open_db().unwrap();
        let names = db::get_all_medications(&conn).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].name, "Aspirin");
    }
}
