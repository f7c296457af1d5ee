//! Entity structs for the four record kinds Snag persists.
//!
//! Each entity serializes with `camelCase` field names; that rendering is
//! both the wire format of the HTTP API and the document format stored in
//! the key-value table, so the two never drift apart.

mod defect;
mod history;
mod project;
mod user;

pub use defect::{Comment, Defect, DefectPatch};
pub use history::HistoryEntry;
pub use project::Project;
pub use user::User;
