//! Database module - SQLite storage for selfie sessions and profiles

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, warn};

use crate::backend::{ProfileStore, SelfieSession, SessionHistory, UserProfile, UserRole};
use crate::score::{CrossRealityScore, ImageResult};

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        debug!(path, "database opened");
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Self { conn: Connection::open_in_memory()? };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                image_id TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                rating REAL NOT NULL,
                potential_rating REAL NOT NULL,
                details TEXT NOT NULL DEFAULT '[]'
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS profiles (
                caller TEXT PRIMARY KEY,
                name TEXT,
                role TEXT NOT NULL DEFAULT 'guest'
            )",
            [],
        )?;

        Ok(())
    }
}

impl SessionHistory for Database {
    fn record_session(&self, session: &SelfieSession) -> Result<i64> {
        let details = serde_json::to_string(&session.score.details)?;
        self.conn.execute(
            "INSERT INTO sessions (image_id, timestamp, rating, potential_rating, details) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session.image_id,
                session.timestamp.to_rfc3339(),
                session.score.rating,
                session.score.potential_rating,
                details,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_all_sessions(&self) -> Result<Vec<SelfieSession>> {
        let mut stmt = self.conn.prepare(
            "SELECT image_id, timestamp, rating, potential_rating, details FROM sessions ORDER BY timestamp DESC, id DESC"
        )?;

        let sessions = stmt.query_map([], |row| {
            let date_str: String = row.get(1)?;
            let details_str: String = row.get(4)?;
            let details: Vec<ImageResult> = serde_json::from_str(&details_str).unwrap_or_else(|e| {
                warn!("bad details column {:?}: {}", details_str, e);
                Vec::new()
            });

            Ok(SelfieSession {
                image_id: row.get(0)?,
                timestamp: DateTime::parse_from_rfc3339(&date_str)
                    .map(|d| d.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now()),
                score: CrossRealityScore {
                    rating: row.get(2)?,
                    potential_rating: row.get(3)?,
                    details,
                },
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

        Ok(sessions)
    }

    fn get_session_count(&self) -> Result<u64> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl ProfileStore for Database {
    fn get_profile(&self, caller: &str) -> Result<Option<UserProfile>> {
        let name: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT name FROM profiles WHERE caller = ?1",
                params![caller],
                |row| row.get(0),
            )
            .optional()?;

        Ok(name.flatten().map(|name| UserProfile { name }))
    }

    /// Saving a profile registers a guest as a regular user
    fn save_profile(&self, caller: &str, profile: &UserProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profiles (caller, name, role) VALUES (?1, ?2, 'user')
             ON CONFLICT(caller) DO UPDATE SET
                name = excluded.name,
                role = CASE WHEN role = 'guest' THEN 'user' ELSE role END",
            params![caller, profile.name],
        )?;
        Ok(())
    }

    fn get_role(&self, caller: &str) -> Result<UserRole> {
        let role: Option<String> = self
            .conn
            .query_row(
                "SELECT role FROM profiles WHERE caller = ?1",
                params![caller],
                |row| row.get(0),
            )
            .optional()?;

        match role {
            Some(r) => r.parse(),
            None => Ok(UserRole::Guest),
        }
    }

    fn set_role(&self, caller: &str, role: UserRole) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profiles (caller, role) VALUES (?1, ?2)
             ON CONFLICT(caller) DO UPDATE SET role = excluded.role",
            params![caller, role.as_str()],
        )?;
        Ok(())
    }
}
