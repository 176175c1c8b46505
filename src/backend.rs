//! Backend contracts - scoring, session history and profiles
//!
//! Scoring happens in an external service; this crate only knows the
//! request/response shape. `db::Database` implements the storage side.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::score::CrossRealityScore;
use crate::selfie::validate_selfie_file;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    #[default]
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            other => bail!("unknown role '{}'", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    pub image_id: String,
}

/// One scored selfie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelfieSession {
    pub image_id: String,
    pub timestamp: DateTime<Utc>,
    pub score: CrossRealityScore,
}

/// External scoring service
pub trait ScoringService {
    fn submit_selfie(&self, input: &SessionInput) -> Result<CrossRealityScore>;
}

pub trait SessionHistory {
    fn record_session(&self, session: &SelfieSession) -> Result<i64>;

    /// Newest first
    fn get_all_sessions(&self) -> Result<Vec<SelfieSession>>;

    fn get_session_count(&self) -> Result<u64>;

    /// Rating of the most recent session, 0.0 if there are none
    fn current_score(&self) -> Result<f64> {
        Ok(self
            .get_all_sessions()?
            .first()
            .map(|s| s.score.rating)
            .unwrap_or(0.0))
    }
}

/// Profiles and roles keyed by caller identity
pub trait ProfileStore {
    fn get_profile(&self, caller: &str) -> Result<Option<UserProfile>>;
    fn save_profile(&self, caller: &str, profile: &UserProfile) -> Result<()>;
    /// Unknown callers are guests
    fn get_role(&self, caller: &str) -> Result<UserRole>;
    fn set_role(&self, caller: &str, role: UserRole) -> Result<()>;

    fn is_admin(&self, caller: &str) -> Result<bool> {
        Ok(self.get_role(caller)? == UserRole::Admin)
    }
}

/// Validate a local selfie, score it and record the session
pub fn submit_selfie<S, H>(scorer: &S, history: &H, path: &Path) -> Result<SelfieSession>
where
    S: ScoringService + ?Sized,
    H: SessionHistory + ?Sized,
{
    validate_selfie_file(path)?;

    let image_id = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => bail!("selfie path has no file name: {}", path.display()),
    };

    let input = SessionInput { image_id };
    let score = scorer.submit_selfie(&input)?;

    let session = SelfieSession {
        image_id: input.image_id,
        timestamp: Utc::now(),
        score,
    };
    let id = history.record_session(&session)?;
    info!(id, image_id = %session.image_id, rating = session.score.rating, "selfie session recorded");

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::score::ImageResult;
    use std::cell::Cell;

    struct FixedScorer {
        rating: f64,
        calls: Cell<u32>,
    }

    impl ScoringService for FixedScorer {
        fn submit_selfie(&self, _input: &SessionInput) -> Result<CrossRealityScore> {
            self.calls.set(self.calls.get() + 1);
            Ok(CrossRealityScore {
                rating: self.rating,
                potential_rating: self.rating + 4.0,
                details: vec![ImageResult::GoodLighting],
            })
        }
    }

    struct FailingScorer;

    impl ScoringService for FailingScorer {
        fn submit_selfie(&self, _input: &SessionInput) -> Result<CrossRealityScore> {
            bail!("backend unavailable")
        }
    }

    fn temp_selfie(name: &str, len: usize) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}", std::process::id(), name));
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::Guest.to_string(), "guest");
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_submit_selfie_records_session() {
        let db = Database::open_in_memory().unwrap();
        let scorer = FixedScorer { rating: 18.0, calls: Cell::new(0) };
        let path = temp_selfie("submit_ok.jpg", 64);

        let session = submit_selfie(&scorer, &db, &path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(scorer.calls.get(), 1);
        assert!(session.image_id.ends_with("submit_ok.jpg"));
        assert_eq!(db.get_session_count().unwrap(), 1);
        assert_eq!(db.current_score().unwrap(), 18.0);
    }

    #[test]
    fn test_submit_selfie_rejects_before_scoring() {
        let db = Database::open_in_memory().unwrap();
        let scorer = FixedScorer { rating: 18.0, calls: Cell::new(0) };
        let path = temp_selfie("submit_bad.gif", 64);

        let result = submit_selfie(&scorer, &db, &path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
        assert_eq!(scorer.calls.get(), 0);
        assert_eq!(db.get_session_count().unwrap(), 0);
    }

    #[test]
    fn test_submit_selfie_scoring_failure_records_nothing() {
        let db = Database::open_in_memory().unwrap();
        let path = temp_selfie("submit_fail.png", 64);

        let result = submit_selfie(&FailingScorer, &db, &path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.unwrap_err().to_string().contains("backend unavailable"));
        assert_eq!(db.get_session_count().unwrap(), 0);
    }
}
