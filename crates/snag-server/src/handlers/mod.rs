//! Request handlers, grouped by resource.

pub mod analytics;
pub mod defects;
pub mod health;
pub mod projects;
pub mod users;
