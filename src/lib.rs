//! looksmax - LooksMax Pro core
//!
//! Static home workout plans, selfie score explanations and a local
//! session history for results from the scoring backend.

pub mod backend;
pub mod db;
pub mod score;
pub mod selfie;
pub mod tips;
pub mod workouts;

pub use db::Database;
pub use workouts::{WorkoutPlan, WorkoutPreferences, generate_workout};
