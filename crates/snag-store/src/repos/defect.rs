//! Defect repository — point get/put plus full listing.
//!
//! Updates persist the whole document (last-write-wins); there is no
//! field-level merge at this layer and no concurrency token.

use snag_core::entities::Defect;
use snag_core::keys;

use super::{decode, decode_all, encode};
use crate::SnagStore;
use crate::error::StoreError;

impl SnagStore {
    /// Fetch one defect record by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on query or decode failure.
    pub async fn get_defect(&self, id: &str) -> Result<Option<Defect>, StoreError> {
        match self.get(&keys::defect(id)).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    /// Write (or overwrite) a defect record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on encode or write failure.
    pub async fn put_defect(&self, defect: &Defect) -> Result<(), StoreError> {
        self.set(&keys::defect(&defect.id), &encode(defect)?).await
    }

    /// List all defect records. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on scan or decode failure.
    pub async fn list_defects(&self) -> Result<Vec<Defect>, StoreError> {
        decode_all(self.get_by_prefix(keys::DEFECT_PREFIX).await?)
    }
}
