//! [`SqliteStore`]: the SQLite implementation of [`KnowledgeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use healio_core::{disease::DiseaseRecord, store::KnowledgeStore};

use crate::{Error, Result, schema::SCHEMA, seed};

const DISEASE_COLUMNS: &str = "name, description, causes, symptoms, \
                               precautions, home_care, when_to_consult, \
                               emergency_signs";

fn disease_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DiseaseRecord> {
  Ok(DiseaseRecord {
    name:            row.get(0)?,
    description:     row.get(1)?,
    causes:          row.get(2)?,
    symptoms:        row.get(3)?,
    precautions:     row.get(4)?,
    home_care:       row.get(5)?,
    when_to_consult: row.get(6)?,
    emergency_signs: row.get(7)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// The Healio knowledge catalog backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, initialise the schema and seed the
  /// built-in catalog.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  async fn init(&self) -> Result<()> {
    let inserted = self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(seed::apply(conn)?)
      })
      .await?;
    tracing::debug!(inserted, "knowledge store seeded");
    Ok(())
  }
}

// ─── KnowledgeStore impl ─────────────────────────────────────────────────────

impl KnowledgeStore for SqliteStore {
  type Error = Error;

  async fn list_diseases(&self) -> Result<Vec<DiseaseRecord>> {
    let records = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {DISEASE_COLUMNS} FROM diseases ORDER BY id"))?;
        let rows = stmt
          .query_map([], disease_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(records)
  }

  async fn find_by_name_fragment(
    &self,
    fragment: &str,
  ) -> Result<Option<DiseaseRecord>> {
    let needle = fragment.to_lowercase();

    // Matched in Rust: SQLite's `lower()` only folds ASCII.
    let record = self
      .conn
      .call(move |conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {DISEASE_COLUMNS} FROM diseases ORDER BY id"))?;
        let mut rows = stmt.query_map([], disease_from_row)?;
        while let Some(record) = rows.next().transpose()? {
          if record.name.to_lowercase().contains(&needle) {
            return Ok(Some(record));
          }
        }
        Ok(None)
      })
      .await?;
    Ok(record)
  }

  async fn random_tip(&self) -> Result<Option<String>> {
    let tip = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT tip FROM health_tips ORDER BY RANDOM() LIMIT 1",
              [],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(tip)
  }
}
