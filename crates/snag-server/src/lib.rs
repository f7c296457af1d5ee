//! # snag-server
//!
//! HTTP API for Snag. Request handlers map verb+path to repository
//! operations, enforce authentication (and, for role updates, the admin
//! gate), and shape JSON responses and errors.
//!
//! Each handler runs to completion independently; there are no background
//! tasks, locks, or retries. Concurrent updates to the same defect resolve
//! by last-write-wins.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
