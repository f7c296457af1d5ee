//! # snag-core
//!
//! Core types and pure logic for Snag, a defect-tracking service.
//!
//! This crate provides the foundational pieces shared across all Snag crates:
//! - Entity structs for the four record kinds (user, project, defect, history entry)
//! - Closed enumerations for roles, statuses, priorities, and history actions
//! - Random id generation and the storage key layout
//! - The authenticated-identity type passed between crates
//! - Cross-cutting error types
//! - The aggregation engine: pure transforms over defect collections

pub mod analytics;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod keys;
