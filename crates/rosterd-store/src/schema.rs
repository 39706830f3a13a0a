//! Schema definition.
//!
//! Applied idempotently at startup; every statement is `IF NOT EXISTS`.

use sqlx::SqlitePool;

use rosterd_commons::Result;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id          TEXT PRIMARY KEY,
        username    TEXT NOT NULL UNIQUE,
        email       TEXT NOT NULL UNIQUE,
        first_name  TEXT NOT NULL DEFAULT '',
        last_name   TEXT NOT NULL DEFAULT '',
        created_at  TEXT,
        updated_at  TEXT,
        created_by  TEXT,
        updated_by  TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_users_created_at ON users (created_at DESC)",
    r#"
    CREATE TABLE IF NOT EXISTS daily_statistics (
        id                  INTEGER PRIMARY KEY AUTOINCREMENT,
        date                TEXT NOT NULL UNIQUE,
        user_registrations  INTEGER NOT NULL DEFAULT 0,
        emails_sent         INTEGER NOT NULL DEFAULT 0,
        login_attempts      INTEGER NOT NULL DEFAULT 0,
        tasks_executed      INTEGER NOT NULL DEFAULT 0,
        generated_at        TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS email_notifications (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        recipient   TEXT NOT NULL,
        subject     TEXT NOT NULL,
        content     TEXT NOT NULL,
        kind        TEXT NOT NULL DEFAULT 'GENERAL',
        status      TEXT NOT NULL DEFAULT 'PENDING',
        attempts    INTEGER NOT NULL DEFAULT 0,
        created_at  TEXT NOT NULL,
        sent_at     TEXT,
        last_error  TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_email_notifications_status ON email_notifications (status, created_at)",
];

/// Creates all tables and indexes if they do not exist yet.
pub async fn apply(pool: &SqlitePool) -> Result<()> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
