//! The raw key-value contract: point get, point set, prefix scan.

use serde_json::Value;

use crate::SnagStore;
use crate::error::StoreError;

impl SnagStore {
    /// Fetch the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or the stored text is not
    /// valid JSON.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT value FROM records WHERE key = ?1",
                libsql::params![key],
            )
            .await?;
        match rows.next().await? {
            Some(row) => {
                let text = row.get::<String>(0)?;
                Ok(Some(serde_json::from_str(&text)?))
            }
            None => Ok(None),
        }
    }

    /// Store `doc` under `key`, replacing any existing document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn set(&self, key: &str, doc: &Value) -> Result<(), StoreError> {
        let text = serde_json::to_string(doc)?;
        self.conn()
            .execute(
                "INSERT INTO records (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                libsql::params![key, text],
            )
            .await?;
        Ok(())
    }

    /// Fetch every document whose key starts with `prefix`.
    ///
    /// Order is unspecified and no pagination is applied; the record sets
    /// this service manages are small. Prefixes are fixed kind markers, so
    /// no `LIKE` metacharacters occur in them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the scan fails or a stored document is not
    /// valid JSON.
    pub async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT value FROM records WHERE key LIKE ?1 || '%'",
                libsql::params![prefix],
            )
            .await?;
        let mut docs = Vec::new();
        while let Some(row) = rows.next().await? {
            let text = row.get::<String>(0)?;
            docs.push(serde_json::from_str(&text)?);
        }
        Ok(docs)
    }
}
