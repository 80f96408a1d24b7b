//! SQL schema for the Healio knowledge store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Insertion order is store order: listing and lookup both sort by id.
CREATE TABLE IF NOT EXISTS diseases (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL UNIQUE,
    description     TEXT NOT NULL,
    causes          TEXT NOT NULL,
    symptoms        TEXT NOT NULL,
    precautions     TEXT NOT NULL,
    home_care       TEXT NOT NULL,
    when_to_consult TEXT NOT NULL,
    emergency_signs TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS health_tips (
    id  INTEGER PRIMARY KEY AUTOINCREMENT,
    tip TEXT NOT NULL UNIQUE
);

PRAGMA user_version = 1;
";
