//! Project repository — create is the only mutation; no handler updates
//! projects after creation.

use snag_core::entities::Project;
use snag_core::keys;

use super::{decode_all, encode};
use crate::SnagStore;
use crate::error::StoreError;

impl SnagStore {
    /// Write a project record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on encode or write failure.
    pub async fn put_project(&self, project: &Project) -> Result<(), StoreError> {
        self.set(&keys::project(&project.id), &encode(project)?)
            .await
    }

    /// List all project records. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on scan or decode failure.
    pub async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        decode_all(self.get_by_prefix(keys::PROJECT_PREFIX).await?)
    }
}
