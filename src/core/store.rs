//! Local media store backed by SQLite.
//!
//! One table, `media`, keyed by the TMDB id. Rows are written once and
//! never deleted here; `path` is the only column that can be updated
//! afterwards. Two processes racing the exists-check-then-insert can both
//! get past the check; the primary key makes the loser fail instead of
//! duplicating the row.

use crate::models::media::LocalRecord;
use crate::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Handle to the local media database.
pub struct MediaStore {
    conn: Connection,
}

/// A stored row as returned by list queries. The poster blob is left in
/// the database; use [`MediaStore::poster`] to get it.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub id: u64,
    pub media_type: String,
    pub title: String,
    pub year: i32,
    pub overview: String,
    pub director: String,
    pub path: String,
}

impl MediaStore {
    /// Open the database, creating the `media` table when missing.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS media (
                id INTEGER PRIMARY KEY,
                media_type TEXT NOT NULL,
                title TEXT NOT NULL,
                year INTEGER NOT NULL,
                overview TEXT NOT NULL,
                director TEXT NOT NULL DEFAULT '',
                poster BLOB,
                path TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Insert a record. A single statement, so the row is either fully
    /// there or not at all.
    pub fn insert(&self, record: &LocalRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO media (id, media_type, title, year, overview, director, poster, path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.id,
                record.media_type.to_string(),
                record.title,
                record.year,
                record.overview,
                record.director,
                record.poster,
                record.path,
            ],
        )?;
        tracing::info!(id = record.id, title = %record.title, "record inserted");
        Ok(())
    }

    /// Look up a record by TMDB id. Returns its title and year.
    pub fn find_by_id(&self, id: u64) -> Result<Option<(String, i32)>> {
        let row = self
            .conn
            .query_row(
                "SELECT title, year FROM media WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(row)
    }

    /// Look up a record id by title (case-insensitive) and exact year.
    ///
    /// The schema doesn't stop two records from sharing a title and year;
    /// when that happens the lookup refuses to pick one.
    pub fn find_by_title_year(&self, title: &str, year: i32) -> Result<Option<u64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM media WHERE LOWER(title) = LOWER(?1) AND year = ?2")?;
        let ids: Vec<u64> = stmt
            .query_map(params![title, year], |row| row.get(0))?
            .collect::<std::result::Result<_, _>>()?;

        match ids.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(Error::AmbiguousLocalRecord {
                title: title.to_string(),
                year,
            }),
        }
    }

    /// Update the stored path of a record. The only mutation an existing
    /// row supports.
    pub fn update_path(&self, id: u64, path: &str) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE media SET path = ?1 WHERE id = ?2",
            params![path, id],
        )?;
        if changed == 0 {
            return Err(Error::RecordNotFound(format!("id {}", id)));
        }
        tracing::info!(id, path, "record path updated");
        Ok(())
    }

    /// Get the poster blob of a record by title (case-insensitive).
    pub fn poster(&self, title: &str) -> Result<Vec<u8>> {
        let poster: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT poster FROM media WHERE LOWER(title) = LOWER(?1)",
                params![title],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| Error::RecordNotFound(format!("'{}'", title)))?;

        poster.ok_or_else(|| Error::PosterMissing(format!("'{}'", title)))
    }

    /// List stored records ordered by title, then year.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<StoredMedia>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, media_type, title, year, overview, director, path
             FROM media ORDER BY title, year ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredMedia {
                id: row.get(0)?,
                media_type: row.get(1)?,
                title: row.get(2)?,
                year: row.get(3)?,
                overview: row.get(4)?,
                director: row.get(5)?,
                path: row.get(6)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            if limit.is_some_and(|l| records.len() >= l) {
                break;
            }
            records.push(row?);
        }
        Ok(records)
    }
}
