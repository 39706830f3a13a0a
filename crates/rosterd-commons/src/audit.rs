//! Query helpers over audit metadata.
//!
//! Audit columns are written by the store's touch logic at insert/update
//! time; this trait only reads them. All helpers are pure and guard against
//! unset fields by returning a default instead of failing.

use chrono::{DateTime, Duration, Utc};

use crate::models::UserId;

/// Default window for [`Auditable::is_modified_recently_default`], in hours.
pub const RECENT_MODIFICATION_HOURS: i64 = 24;

/// A record carrying creation/modification metadata.
pub trait Auditable {
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
    fn created_by(&self) -> Option<&UserId>;
    fn updated_by(&self) -> Option<&UserId>;

    /// True iff the record was created by `user_id`. False when the creator
    /// is unknown.
    fn is_created_by(&self, user_id: &UserId) -> bool {
        self.created_by().map(|c| c == user_id).unwrap_or(false)
    }

    /// True iff the record was updated within the last `hours` hours.
    /// False when `updated_at` is unset.
    fn is_modified_recently(&self, hours: i64) -> bool {
        match self.updated_at() {
            Some(updated) => updated >= Utc::now() - Duration::hours(hours),
            None => false,
        }
    }

    /// [`Self::is_modified_recently`] with the standard 24h window.
    fn is_modified_recently_default(&self) -> bool {
        self.is_modified_recently(RECENT_MODIFICATION_HOURS)
    }

    /// Whole days elapsed since creation; 0 when `created_at` is unset.
    fn age_in_days(&self) -> i64 {
        match self.created_at() {
            Some(created) => (Utc::now() - created).num_days().max(0),
            None => 0,
        }
    }

    /// True iff the record has been modified after its creation, comparing
    /// both timestamps truncated to whole seconds. False when either is
    /// unset.
    fn was_modified_after_creation(&self) -> bool {
        match (self.created_at(), self.updated_at()) {
            (Some(created), Some(updated)) => created.timestamp() != updated.timestamp(),
            _ => false,
        }
    }
}
