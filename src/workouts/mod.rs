//! Workout plan generator - static home workout plans from preferences
//!
//! Equipment picks the catalog, days-per-week picks how many templates
//! are taken from its front, goal only changes the description wording.

pub mod catalog;

pub use catalog::{Exercise, WorkoutDay, catalog_for};

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Day counts offered by the preferences form
pub const DAYS_PER_WEEK_RANGE: RangeInclusive<i32> = 2..=6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutGoal {
    #[default]
    General,
    Strength,
    Endurance,
    Flexibility,
}

impl WorkoutGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutGoal::General => "general",
            WorkoutGoal::Strength => "strength",
            WorkoutGoal::Endurance => "endurance",
            WorkoutGoal::Flexibility => "flexibility",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutGoal::General => "General Fitness",
            WorkoutGoal::Strength => "Build Strength",
            WorkoutGoal::Endurance => "Improve Endurance",
            WorkoutGoal::Flexibility => "Increase Flexibility",
        }
    }

    pub fn all() -> &'static [WorkoutGoal] {
        &[
            WorkoutGoal::General,
            WorkoutGoal::Strength,
            WorkoutGoal::Endurance,
            WorkoutGoal::Flexibility,
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    #[default]
    Bodyweight,
    Minimal,
    Gym,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Bodyweight => "bodyweight",
            EquipmentType::Minimal => "minimal",
            EquipmentType::Gym => "gym",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Bodyweight => "Bodyweight Only (No Equipment)",
            EquipmentType::Minimal => "Light Dumbbells/Resistance Bands",
            EquipmentType::Gym => "Home Gym Equipment",
        }
    }

    pub fn all() -> &'static [EquipmentType] {
        &[EquipmentType::Bodyweight, EquipmentType::Minimal, EquipmentType::Gym]
    }
}

impl fmt::Display for WorkoutGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutGoal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match WorkoutGoal::all().iter().find(|g| g.as_str() == s.to_lowercase()) {
            Some(goal) => Ok(*goal),
            None => bail!("unknown goal '{}' (expected general, strength, endurance or flexibility)", s),
        }
    }
}

impl FromStr for EquipmentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match EquipmentType::all().iter().find(|e| e.as_str() == s.to_lowercase()) {
            Some(equipment) => Ok(*equipment),
            None => bail!("unknown equipment '{}' (expected bodyweight, minimal or gym)", s),
        }
    }
}

/// Input for plan generation. `days_per_week` is not validated here
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPreferences {
    pub goal: WorkoutGoal,
    pub days_per_week: i32,
    pub equipment: EquipmentType,
}

impl Default for WorkoutPreferences {
    fn default() -> Self {
        Self {
            goal: WorkoutGoal::General,
            days_per_week: 3,
            equipment: EquipmentType::Bodyweight,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub description: String,
    pub days: Vec<&'static WorkoutDay>,
}

/// Generate a plan. Never fails: too many days clamp to the catalog size,
/// zero or negative days give an empty plan.
pub fn generate_workout(preferences: &WorkoutPreferences) -> WorkoutPlan {
    let WorkoutPreferences { goal, days_per_week, equipment } = *preferences;
    let catalog = catalog_for(equipment);

    let take = usize::try_from(days_per_week.max(0))
        .unwrap_or(0)
        .min(catalog.len());

    debug!(%goal, %equipment, days_per_week, take, "generating workout plan");

    WorkoutPlan {
        description: describe(goal, days_per_week, equipment),
        days: catalog[..take].iter().collect(),
    }
}

fn describe(goal: WorkoutGoal, days: i32, equipment: EquipmentType) -> String {
    match equipment {
        EquipmentType::Bodyweight => format!(
            "A {}-day bodyweight home training program for ages 13+ focusing on {} fitness. \
             Perfect for home workouts with no equipment needed.",
            days, goal
        ),
        EquipmentType::Gym => format!(
            "A {}-day home gym program for ages 13+ targeting {}. \
             Uses light to moderate dumbbells and basic home gym equipment with teen-safe exercises.",
            days, goal
        ),
        EquipmentType::Minimal => format!(
            "A {}-day home program for ages 13+ using light dumbbells and resistance bands. \
             Efficient workouts for {} fitness with minimal equipment.",
            days, goal
        ),
    }
}

/// Format plan for terminal output
pub fn format_plan(plan: &WorkoutPlan) -> String {
    let mut lines = vec![plan.description.clone()];

    for day in &plan.days {
        lines.push(String::new());
        lines.push(format!("{} ({})", day.name, day.focus));
        lines.push(format!("{:-<40}", ""));
        for exercise in day.exercises {
            lines.push(format!(
                "  {} - {} sets × {}, {} rest",
                exercise.name, exercise.sets, exercise.reps, exercise.rest
            ));
            if let Some(notes) = exercise.notes {
                lines.push(format!("    💡 {}", notes));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(goal: WorkoutGoal, days_per_week: i32, equipment: EquipmentType) -> WorkoutPreferences {
        WorkoutPreferences { goal, days_per_week, equipment }
    }

    fn foci(plan: &WorkoutPlan) -> Vec<&'static str> {
        plan.days.iter().map(|d| d.focus).collect()
    }

    #[test]
    fn test_days_length_is_min_of_request_and_catalog() {
        for equipment in EquipmentType::all() {
            let len = catalog_for(*equipment).len() as i32;
            for days in -2..=8 {
                let plan = generate_workout(&prefs(WorkoutGoal::General, days, *equipment));
                let expected = days.clamp(0, len) as usize;
                assert_eq!(plan.days.len(), expected, "{} with {} days", equipment, days);
            }
        }
    }

    #[test]
    fn test_goal_does_not_change_days() {
        for equipment in EquipmentType::all() {
            let baseline = generate_workout(&prefs(WorkoutGoal::General, 4, *equipment));
            for goal in WorkoutGoal::all() {
                let plan = generate_workout(&prefs(*goal, 4, *equipment));
                assert_eq!(plan.days, baseline.days);
            }
        }
    }

    #[test]
    fn test_goal_changes_description() {
        let general = generate_workout(&prefs(WorkoutGoal::General, 3, EquipmentType::Gym));
        let endurance = generate_workout(&prefs(WorkoutGoal::Endurance, 3, EquipmentType::Gym));
        assert_ne!(general.description, endurance.description);
        assert!(endurance.description.contains("targeting endurance"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let p = prefs(WorkoutGoal::Strength, 3, EquipmentType::Minimal);
        assert_eq!(generate_workout(&p), generate_workout(&p));
    }

    #[test]
    fn test_first_day_stable_across_requests() {
        for equipment in EquipmentType::all() {
            let first = catalog_for(*equipment)[0];
            for days in 1..=6 {
                let plan = generate_workout(&prefs(WorkoutGoal::General, days, *equipment));
                assert_eq!(*plan.days[0], first);
            }
        }
    }

    #[test]
    fn test_zero_days_empty() {
        let plan = generate_workout(&prefs(WorkoutGoal::General, 0, EquipmentType::Bodyweight));
        assert!(plan.days.is_empty());
        assert!(plan.description.contains("0-day"));
    }

    #[test]
    fn test_negative_days_empty() {
        let plan = generate_workout(&prefs(WorkoutGoal::General, -3, EquipmentType::Gym));
        assert!(plan.days.is_empty());
    }

    #[test]
    fn test_bodyweight_clamps_to_three() {
        let plan = generate_workout(&prefs(WorkoutGoal::General, 6, EquipmentType::Bodyweight));
        assert_eq!(plan.days.len(), 3);
        assert!(plan.description.contains("6-day"));
    }

    #[test]
    fn test_scenario_strength_bodyweight() {
        let plan = generate_workout(&prefs(WorkoutGoal::Strength, 3, EquipmentType::Bodyweight));
        let names: Vec<_> = plan.days.iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Day 1", "Day 2", "Day 3"]);
        assert_eq!(foci(&plan), vec!["Upper Body Push", "Lower Body", "Upper Body Pull & Core"]);
        assert!(plan.description.contains("3-day"));
        assert!(plan.description.contains("strength"));
        assert!(plan.description.contains("no equipment needed"));
    }

    #[test]
    fn test_scenario_general_gym_clamped() {
        let plan = generate_workout(&prefs(WorkoutGoal::General, 5, EquipmentType::Gym));
        assert_eq!(
            foci(&plan),
            vec!["Upper Body Push", "Lower Body", "Upper Body Pull", "Full Body"]
        );
        assert!(plan.description.contains("light to moderate dumbbells and basic home gym equipment"));
    }

    #[test]
    fn test_scenario_flexibility_minimal() {
        let plan = generate_workout(&prefs(WorkoutGoal::Flexibility, 2, EquipmentType::Minimal));
        assert_eq!(foci(&plan), vec!["Upper Body", "Lower Body"]);
        assert!(plan.description.contains("flexibility fitness with minimal equipment"));
    }

    #[test]
    fn test_default_preferences() {
        let p = WorkoutPreferences::default();
        assert_eq!(p.goal, WorkoutGoal::General);
        assert_eq!(p.days_per_week, 3);
        assert_eq!(p.equipment, EquipmentType::Bodyweight);
    }

    #[test]
    fn test_parse_goal_and_equipment() {
        assert_eq!("Strength".parse::<WorkoutGoal>().unwrap(), WorkoutGoal::Strength);
        assert_eq!("gym".parse::<EquipmentType>().unwrap(), EquipmentType::Gym);
        assert!("cardio".parse::<WorkoutGoal>().is_err());
        assert!("kettlebell".parse::<EquipmentType>().is_err());
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&prefs(WorkoutGoal::Endurance, 4, EquipmentType::Minimal)).unwrap();
        assert_eq!(json, r#"{"goal":"endurance","days_per_week":4,"equipment":"minimal"}"#);
        let back: WorkoutPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back.equipment, EquipmentType::Minimal);
    }

    #[test]
    fn test_plan_serializes_without_missing_notes() {
        let plan = generate_workout(&prefs(WorkoutGoal::General, 1, EquipmentType::Bodyweight));
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["days"][0]["focus"], "Upper Body Push");
        assert_eq!(value["days"][0]["exercises"][0]["name"], "Push-ups");
        assert_eq!(value["days"][0]["exercises"][0]["notes"], "Modify on knees if needed");
    }

    #[test]
    fn test_format_plan_contains_exercises() {
        let plan = generate_workout(&prefs(WorkoutGoal::General, 2, EquipmentType::Bodyweight));
        let text = format_plan(&plan);
        assert!(text.starts_with(&plan.description));
        assert!(text.contains("Day 2 (Lower Body)"));
        assert!(text.contains("Lunges - 3 sets × 10 each leg, 60s rest"));
        assert!(text.contains("💡 Squeeze at the top"));
        assert!(!text.contains("Day 3"));
    }
}
