//! # snag-store
//!
//! Key-value record repository for Snag.
//!
//! The external store contract is small: point get, point set, and prefix
//! scan over JSON documents keyed by strings. This crate fulfils it with a
//! single `records` table in a local libSQL database (`":memory:"` for
//! tests) and layers typed per-entity repo methods on top.
//!
//! There is no transaction spanning multiple keys: creating a defect and its
//! history entry are two independent writes, and a crash between them leaves
//! an orphan defect with no history — acceptable for an audit-only trail.

pub mod error;
pub mod kv;
pub mod repos;

use error::StoreError;
use libsql::Builder;

const MIGRATION_001: &str = include_str!("../migrations/001_records.sql");

/// Record-store handle wrapping a libSQL database and connection.
pub struct SnagStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SnagStore {
    /// Open (or create) the store at the given path. `":memory:"` gives an
    /// ephemeral store.
    ///
    /// Runs the schema migration on open; the migration is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the
    /// migration fails.
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_records: {e}")))?;
        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
