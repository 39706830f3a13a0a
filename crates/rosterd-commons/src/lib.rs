//! # rosterd-commons
//!
//! Shared types for rosterd.
//!
//! This crate provides the foundational types used across the rosterd crates
//! (rosterd-store, rosterd-api, rosterd-jobs):
//!
//! - `UserId`: type-safe user identifier wrapper
//! - Domain models: `User`, `DailyStatistics`, `EmailNotification`
//! - `Auditable`: query helpers over creation/modification metadata
//! - `PageRequest` / `Page`: pagination policy for listing endpoints
//! - `RosterError`: the shared error taxonomy
//!
//! Domain models here are the single source of truth; do not redefine them in
//! other crates.

pub mod audit;
pub mod errors;
pub mod models;
pub mod pagination;

// Re-export commonly used types at crate root
pub use audit::Auditable;
pub use errors::{Result, RosterError};
pub use models::{DailyStatistics, EmailKind, EmailNotification, EmailStatus, User, UserId};
pub use pagination::{Page, PageRequest};
