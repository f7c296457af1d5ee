//! User repository — point get/put plus full listing.

use snag_core::entities::User;
use snag_core::keys;

use super::{decode, decode_all, encode};
use crate::SnagStore;
use crate::error::StoreError;

impl SnagStore {
    /// Fetch one user record by identity-provider id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on query or decode failure.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        match self.get(&keys::user(id)).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    /// Write (or overwrite) a user record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on encode or write failure.
    pub async fn put_user(&self, user: &User) -> Result<(), StoreError> {
        self.set(&keys::user(&user.id), &encode(user)?).await
    }

    /// List all user records. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on scan or decode failure.
    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        decode_all(self.get_by_prefix(keys::USER_PREFIX).await?)
    }
}
