//! looksmax - LooksMax Pro command line
//!
//! Home workout plans plus a local history of scored selfies

use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use looksmax::backend::{ProfileStore, SelfieSession, SessionHistory, UserProfile};
use looksmax::db::Database;
use looksmax::score::{CrossRealityScore, ImageResult, MAX_RATING, explain, format_rating};
use looksmax::selfie::validate_selfie_file;
use looksmax::tips::{self, SafetyCategory};
use looksmax::workouts::{
    DAYS_PER_WEEK_RANGE, EquipmentType, WorkoutGoal, WorkoutPreferences, format_plan,
    generate_workout,
};

#[derive(Parser)]
#[command(name = "looksmax")]
#[command(author, version, about = "LooksMax Pro - selfie ratings and home workouts")]
struct Cli {
    /// SQLite database with the local session history
    #[arg(long, global = true, env = "LOOKSMAX_DB", default_value = "looksmax.db")]
    db: String,

    /// Caller identity used for profile lookups
    #[arg(long, global = true, env = "LOOKSMAX_CALLER", default_value = "local")]
    caller: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a home workout plan
    Workout {
        /// general, strength, endurance or flexibility
        #[arg(short, long, default_value = "general")]
        goal: WorkoutGoal,

        /// Training days per week (2-6)
        #[arg(short, long, default_value = "3", value_parser = parse_days)]
        days: i32,

        /// bodyweight, minimal or gym
        #[arg(short, long, default_value = "bodyweight")]
        equipment: EquipmentType,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show workout safety notes
    Tips {
        /// Show one random note instead of the full list
        #[arg(short, long)]
        random: bool,

        /// preparation, technique, recovery, supervision or medical
        #[arg(short, long, value_parser = parse_category)]
        category: Option<SafetyCategory>,
    },

    /// Explain detected image signals (goodLighting, centeredFace, smileDetected)
    Explain {
        details: Vec<ImageResult>,
    },

    /// Check that a selfie file can be uploaded
    Check {
        file: PathBuf,
    },

    /// Record a score returned by the scoring service
    Log {
        /// Image reference the score belongs to
        image_id: String,

        #[arg(short, long)]
        rating: f64,

        #[arg(short, long)]
        potential: f64,

        /// Detected signal, repeatable
        #[arg(short, long = "detail")]
        details: Vec<ImageResult>,
    },

    /// List session history
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show score statistics
    Stats,

    /// Show or update the caller profile
    Profile {
        /// New display name
        #[arg(short, long)]
        set: Option<String>,
    },
}

fn parse_days(s: &str) -> Result<i32, String> {
    let days: i32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if DAYS_PER_WEEK_RANGE.contains(&days) {
        Ok(days)
    } else {
        Err(format!(
            "days per week must be between {} and {}",
            DAYS_PER_WEEK_RANGE.start(),
            DAYS_PER_WEEK_RANGE.end()
        ))
    }
}

fn parse_category(s: &str) -> Result<SafetyCategory, String> {
    SafetyCategory::all()
        .iter()
        .find(|c| c.name().eq_ignore_ascii_case(s))
        .copied()
        .ok_or_else(|| format!("unknown category '{}'", s))
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Workout { goal, days, equipment, json } => {
            let preferences = WorkoutPreferences { goal, days_per_week: days, equipment };
            let plan = generate_workout(&preferences);
            info!(%goal, %equipment, days = plan.days.len(), "workout plan generated");

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{}\n", tips::AGE_NOTICE);
                println!("Your Custom Home Workout Plan ({}, {})", goal.label(), equipment.label());
                println!("{:=<60}", "");
                println!("{}", format_plan(&plan));
                println!("\nImportant Safety Notes (Ages 13+):");
                for note in tips::safety_notes() {
                    println!("  - {}", note.text);
                }
            }
        }

        Commands::Tips { random, category } => {
            if let Some(category) = category {
                match tips::get_random_note_by_category(category) {
                    Some(note) => println!("{}", tips::format_note(note)),
                    None => println!("No notes for {}", category.name()),
                }
            } else if random {
                println!("{}", tips::format_note(tips::get_random_note()));
            } else {
                for note in tips::safety_notes() {
                    println!("{}", tips::format_note(note));
                }
            }
        }

        Commands::Explain { details } => {
            let explanation = explain(&details);
            for badge in &explanation.badges {
                println!("{}", badge);
            }
            println!("{}", explanation.description);
        }

        Commands::Check { file } => {
            let size = validate_selfie_file(&file)?;
            println!("{} is ready to upload ({} bytes)", file.display(), size);
        }

        Commands::Log { image_id, rating, potential, details } => {
            if !(0.0..=MAX_RATING).contains(&rating) || !(0.0..=MAX_RATING).contains(&potential) {
                bail!("ratings must be between 0 and {}", MAX_RATING);
            }

            let db = Database::open(&cli.db)?;
            let session = SelfieSession {
                image_id: image_id.clone(),
                timestamp: Utc::now(),
                score: CrossRealityScore { rating, potential_rating: potential, details },
            };
            let id = db.record_session(&session)?;
            println!(
                "Logged: {} - {}/30 (potential {}/30) (id: {})",
                image_id,
                format_rating(Some(rating), 1),
                format_rating(Some(potential), 1),
                id
            );
        }

        Commands::History { limit } => {
            let db = Database::open(&cli.db)?;
            let sessions = db.get_all_sessions()?;
            let count = db.get_session_count()?;

            if sessions.is_empty() {
                println!("No selfies yet. Capture your first one to start your history.");
                return Ok(());
            }

            println!("{} {} captured", count, if count == 1 { "selfie" } else { "selfies" });
            println!("{:-<70}", "");
            for s in sessions.iter().take(limit) {
                println!(
                    "{} | {:24} | {:>5}/30 | potential {:>5}/30",
                    s.timestamp.format("%Y-%m-%d %H:%M"),
                    s.image_id,
                    format_rating(Some(s.score.rating), 1),
                    format_rating(Some(s.score.potential_rating), 1),
                );
            }
        }

        Commands::Stats => {
            let db = Database::open(&cli.db)?;
            let sessions = db.get_all_sessions()?;

            println!("Score Statistics");
            println!("{:-<40}", "");
            println!("Sessions: {}", db.get_session_count()?);
            println!("Current score: {}/30", format_rating(Some(db.current_score()?), 1));

            let best = sessions.iter().map(|s| s.score.rating).fold(None, |acc: Option<f64>, r| {
                Some(acc.map_or(r, |a| a.max(r)))
            });
            println!("Best score: {}/30", format_rating(best, 1));

            if let Some(latest) = sessions.first() {
                println!("Potential: {}/30", format_rating(Some(latest.score.potential_rating), 1));
                println!("{}", latest.score.explanation().description);
            }
        }

        Commands::Profile { set } => {
            let db = Database::open(&cli.db)?;
            if let Some(name) = set {
                db.save_profile(&cli.caller, &UserProfile { name })?;
                info!(caller = %cli.caller, "profile saved");
            }

            let name = db
                .get_profile(&cli.caller)?
                .map(|p| p.name)
                .unwrap_or_else(|| "-".to_string());
            println!("Caller: {}", cli.caller);
            println!("Name: {}", name);
            println!("Role: {}", db.get_role(&cli.caller)?);
        }
    }

    Ok(())
}
