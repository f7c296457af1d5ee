//! Typed per-entity repo methods over the key-value contract.
//!
//! Each module implements methods on [`crate::SnagStore`] for one record
//! kind, encoding entities to JSON documents and back. Decode failures mean
//! a corrupt or hand-edited record and surface as `StoreError::Document`.

mod defect;
mod history;
mod project;
mod user;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;

pub(crate) fn encode<T: Serialize>(entity: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(entity)?)
}

pub(crate) fn decode<T: DeserializeOwned>(doc: Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(doc)?)
}

pub(crate) fn decode_all<T: DeserializeOwned>(docs: Vec<Value>) -> Result<Vec<T>, StoreError> {
    docs.into_iter().map(decode).collect()
}
