//! User repository.
//!
//! The write path is the single place audit metadata gets stamped:
//! `created_at`/`created_by` once at insert, `updated_at`/`updated_by` on
//! every update. `created_at` is never part of an UPDATE statement, which is
//! what keeps it immutable.

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use rosterd_commons::{Page, PageRequest, Result, RosterError, User, UserId};

/// Payload for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update; `None` fields are left untouched. The username is a
/// lookup key and cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Wraps `q` in `%...%` with LIKE metacharacters escaped, for use with
/// `LIKE ?1 ESCAPE '\'`.
fn like_pattern(q: &str) -> String {
    let escaped = q
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new user. `actor` becomes `created_by`/`updated_by`.
    ///
    /// Both timestamps are set to the same instant so a freshly created
    /// record does not count as modified-after-creation.
    pub async fn create(&self, new: NewUser, actor: Option<&UserId>) -> Result<User> {
        let now = Utc::now();
        let user = User {
            id: UserId::generate(),
            username: new.username,
            email: new.email,
            first_name: new.first_name,
            last_name: new.last_name,
            created_at: Some(now),
            updated_at: Some(now),
            created_by: actor.cloned(),
            updated_by: actor.cloned(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, first_name, last_name,
                               created_at, updated_at, created_by, updated_by)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(&user.created_by)
        .bind(&user.updated_by)
        .execute(&self.pool)
        .await?;

        // Return the row as stored so timestamps match later reads exactly
        let stored = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
            .bind(&user.id)
            .fetch_one(&self.pool)
            .await?;
        Ok(stored)
    }

    pub async fn get(&self, id: &UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Applies a partial update and touches `updated_at`/`updated_by`.
    pub async fn update(
        &self,
        id: &UserId,
        update: UserUpdate,
        actor: Option<&UserId>,
    ) -> Result<User> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| RosterError::not_found(format!("user '{}'", id)))?;

        let email = update.email.unwrap_or(current.email);
        let first_name = update.first_name.unwrap_or(current.first_name);
        let last_name = update.last_name.unwrap_or(current.last_name);
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE users
            SET email = ?1, first_name = ?2, last_name = ?3,
                updated_at = ?4, updated_by = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&email)
        .bind(&first_name)
        .bind(&last_name)
        .bind(now)
        .bind(actor)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(User {
            email,
            first_name,
            last_name,
            updated_at: Some(now),
            updated_by: actor.cloned(),
            ..current
        })
    }

    /// Paged listing, newest first. With `query` set, filters by substring
    /// match on username, email, first or last name. LIKE metacharacters in
    /// the query are escaped so `%` and `_` match literally.
    pub async fn search(&self, query: Option<&str>, page: PageRequest) -> Result<Page<User>> {
        match query {
            Some(q) if !q.is_empty() => {
                let pattern = like_pattern(q);
                let total = sqlx::query_scalar::<_, i64>(
                    r#"
                    SELECT COUNT(*) FROM users
                    WHERE username LIKE ?1 ESCAPE '\' OR email LIKE ?1 ESCAPE '\'
                       OR first_name LIKE ?1 ESCAPE '\' OR last_name LIKE ?1 ESCAPE '\'
                    "#,
                )
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await?;

                let items = sqlx::query_as::<_, User>(
                    r#"
                    SELECT * FROM users
                    WHERE username LIKE ?1 ESCAPE '\' OR email LIKE ?1 ESCAPE '\'
                       OR first_name LIKE ?1 ESCAPE '\' OR last_name LIKE ?1 ESCAPE '\'
                    ORDER BY created_at DESC
                    LIMIT ?2 OFFSET ?3
                    "#,
                )
                .bind(&pattern)
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?;

                Ok(Page::new(items, page, total))
            }
            _ => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                    .fetch_one(&self.pool)
                    .await?;

                let items = sqlx::query_as::<_, User>(
                    "SELECT * FROM users ORDER BY created_at DESC LIMIT ?1 OFFSET ?2",
                )
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?;

                Ok(Page::new(items, page, total))
            }
        }
    }

    /// Number of users whose account was created on `date` (UTC). Feeds the
    /// daily rollup.
    pub async fn count_registered_on(&self, date: NaiveDate) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE date(created_at) = ?1",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
