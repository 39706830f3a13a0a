//! Repositories: one per table.

mod emails;
mod stats;
mod users;

pub use emails::{EmailRepository, NewEmail};
pub use stats::{DailyCounters, StatsRepository};
pub use users::{NewUser, UserRepository, UserUpdate};
