//! Domain models for rosterd.
//!
//! Newtype wrappers enforce type safety for identifiers; the record structs
//! map 1:1 onto the SQLite tables owned by rosterd-store.

mod daily_statistics;
mod email_notification;
mod user;
mod user_id;

pub use daily_statistics::DailyStatistics;
pub use email_notification::{EmailKind, EmailNotification, EmailStatus};
pub use user::User;
pub use user_id::UserId;
