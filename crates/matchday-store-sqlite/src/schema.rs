//! SQL schema for the Matchday SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id     TEXT PRIMARY KEY,
    external_id INTEGER NOT NULL UNIQUE,  -- chat-platform user id
    name        TEXT NOT NULL,
    created_at  TEXT NOT NULL             -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS games (
    game_id    TEXT PRIMARY KEY,
    chat_id    INTEGER NOT NULL,
    opponent   TEXT NOT NULL,
    location   TEXT NOT NULL,
    price      REAL NOT NULL DEFAULT 0,
    date       TEXT NOT NULL,             -- naive local, YYYY-MM-DD HH:MM:SS
    created_by TEXT NOT NULL REFERENCES users(user_id),
    created_at TEXT NOT NULL,
    is_active  INTEGER NOT NULL DEFAULT 1
);

-- One row per (game, user); re-registration updates the row in place.
-- Rows are never deleted, so attendance history survives the game date.
CREATE TABLE IF NOT EXISTS game_attendance (
    game_id   TEXT NOT NULL REFERENCES games(game_id),
    user_id   TEXT NOT NULL REFERENCES users(user_id),
    status    TEXT NOT NULL,              -- 'attending' | 'out'
    has_paid  INTEGER NOT NULL DEFAULT 0,
    joined_at TEXT NOT NULL,
    PRIMARY KEY (game_id, user_id)
);

CREATE INDEX IF NOT EXISTS games_chat_idx      ON games(chat_id, date);
CREATE INDEX IF NOT EXISTS attendance_game_idx ON game_attendance(game_id);

PRAGMA user_version = 1;
";
