//! Embedded schema definitions applied at startup.
//!
//! All statements are idempotent (`IF NOT EXISTS`) so the bootstrap can run
//! on every boot and in test setup without tracking applied versions.
//! The `(tournament_id, email)` unique constraint backstops the duplicate
//! check inside the registration transaction; emails are stored lowercased,
//! so the constraint is defined on the normalized form.

use sqlx::PgPool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS tournaments (
        id UUID PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        max_players INTEGER NOT NULL,
        start_at TIMESTAMP NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS players (
        id UUID PRIMARY KEY,
        tournament_id UUID NOT NULL REFERENCES tournaments (id) ON DELETE CASCADE,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(255) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT NOW(),
        CONSTRAINT uq_players_tournament_email UNIQUE (tournament_id, email)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_players_tournament_id ON players (tournament_id)
    "#,
];

/// Apply the embedded schema to the given pool
pub(crate) async fn apply(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
