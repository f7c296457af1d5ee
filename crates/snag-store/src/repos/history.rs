//! History repository — append-only audit entries keyed under the defect.

use snag_core::entities::HistoryEntry;
use snag_core::keys;

use super::{decode_all, encode};
use crate::SnagStore;
use crate::error::StoreError;

impl SnagStore {
    /// Append one history entry. Entries are never mutated or deleted.
    ///
    /// This write is independent of the defect write it trails; a crash
    /// between the two leaves the defect without the entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on encode or write failure.
    pub async fn append_history(&self, entry: &HistoryEntry) -> Result<(), StoreError> {
        self.set(
            &keys::history(&entry.defect_id, &entry.id),
            &encode(entry)?,
        )
        .await
    }

    /// List all history entries for one defect, sorted by timestamp
    /// ascending. The store itself guarantees no order, so the chronological
    /// sort happens here.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on scan or decode failure.
    pub async fn history_for_defect(
        &self,
        defect_id: &str,
    ) -> Result<Vec<HistoryEntry>, StoreError> {
        let mut entries: Vec<HistoryEntry> =
            decode_all(self.get_by_prefix(&keys::history_for(defect_id)).await?)?;
        entries.sort_by_key(|entry| entry.timestamp);
        Ok(entries)
    }
}
