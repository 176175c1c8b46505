//! Day templates - fixed home workout catalogs per equipment type

use serde::Serialize;

use super::EquipmentType;

/// Single exercise inside a day template
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str, // "8-12", "30-60s", "10 each leg"
    pub rest: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

/// One training session
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WorkoutDay {
    pub name: &'static str,
    pub focus: &'static str,
    pub exercises: &'static [Exercise],
}

const fn ex(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
    notes: &'static str,
) -> Exercise {
    Exercise { name, sets, reps, rest, notes: Some(notes) }
}

/// Без оборудования
pub const BODYWEIGHT_DAYS: &[WorkoutDay] = &[
    WorkoutDay {
        name: "Day 1",
        focus: "Upper Body Push",
        exercises: &[
            ex("Push-ups", 3, "8-12", "60s", "Modify on knees if needed"),
            ex("Pike Push-ups", 3, "6-10", "60s", "Targets shoulders"),
            ex("Tricep Dips", 3, "8-12", "60s", "Use a chair or bench"),
            ex("Plank", 3, "30-60s", "45s", "Keep core tight"),
        ],
    },
    WorkoutDay {
        name: "Day 2",
        focus: "Lower Body",
        exercises: &[
            ex("Bodyweight Squats", 3, "12-15", "60s", "Keep chest up"),
            ex("Lunges", 3, "10 each leg", "60s", "Alternate legs"),
            ex("Glute Bridges", 3, "12-15", "45s", "Squeeze at the top"),
            ex("Calf Raises", 3, "15-20", "45s", "Use a step for range"),
        ],
    },
    WorkoutDay {
        name: "Day 3",
        focus: "Upper Body Pull & Core",
        exercises: &[
            ex("Inverted Rows", 3, "8-12", "60s", "Use a table or bar"),
            ex("Superman Holds", 3, "20-30s", "45s", "Strengthen lower back"),
            ex("Bicycle Crunches", 3, "15 each side", "45s", "Slow and controlled"),
            ex("Mountain Climbers", 3, "20 total", "45s", "Keep hips low"),
        ],
    },
];

/// Домашний зал: гантели, блоки, тренажёры
pub const GYM_DAYS: &[WorkoutDay] = &[
    WorkoutDay {
        name: "Day 1",
        focus: "Upper Body Push",
        exercises: &[
            ex("Dumbbell Bench Press", 3, "10-12", "75s", "Start with light weight"),
            ex("Incline Dumbbell Press", 3, "10-12", "75s", "Upper chest focus"),
            ex("Dumbbell Shoulder Press", 3, "10-12", "60s", "Seated or standing"),
            ex("Tricep Pushdowns (Cable)", 3, "12-15", "60s", "Keep elbows stable"),
            ex("Plank", 3, "30-60s", "45s", "Core stability"),
        ],
    },
    WorkoutDay {
        name: "Day 2",
        focus: "Lower Body",
        exercises: &[
            ex("Goblet Squats", 3, "12-15", "75s", "Hold dumbbell at chest"),
            ex("Dumbbell Lunges", 3, "10 each leg", "60s", "Alternate legs"),
            ex("Leg Press (Machine)", 3, "12-15", "75s", "Moderate weight"),
            ex("Leg Curls (Machine)", 3, "12-15", "60s", "Controlled tempo"),
            ex("Calf Raises", 3, "15-20", "60s", "Pause at top"),
        ],
    },
    WorkoutDay {
        name: "Day 3",
        focus: "Upper Body Pull",
        exercises: &[
            ex("Lat Pulldowns", 3, "10-12", "75s", "Pull to upper chest"),
            ex("Seated Cable Rows", 3, "10-12", "75s", "Squeeze shoulder blades"),
            ex("Dumbbell Rows", 3, "10-12 each", "60s", "One arm at a time"),
            ex("Dumbbell Curls", 3, "10-12", "60s", "No swinging"),
            ex("Face Pulls (Cable)", 3, "15-20", "60s", "Rear delt focus"),
        ],
    },
    WorkoutDay {
        name: "Day 4",
        focus: "Full Body",
        exercises: &[
            ex("Dumbbell Thrusters", 3, "10-12", "75s", "Squat to press"),
            ex("Dumbbell RDLs", 3, "12-15", "60s", "Hinge at hips"),
            ex("Push-ups", 3, "10-15", "60s", "Bodyweight finisher"),
            ex("Plank to Downward Dog", 3, "10-12", "45s", "Core and mobility"),
        ],
    },
];

/// Лёгкие гантели и резинки
pub const MINIMAL_DAYS: &[WorkoutDay] = &[
    WorkoutDay {
        name: "Day 1",
        focus: "Upper Body",
        exercises: &[
            ex("Dumbbell Bench Press", 3, "10-12", "75s", "On floor or bench"),
            ex("Dumbbell Rows", 3, "10-12 each", "60s", "One arm at a time"),
            ex("Dumbbell Shoulder Press", 3, "10-12", "60s", "Seated or standing"),
            ex("Band Pull-aparts", 3, "15-20", "45s", "Rear delts"),
        ],
    },
    WorkoutDay {
        name: "Day 2",
        focus: "Lower Body",
        exercises: &[
            ex("Goblet Squats", 3, "12-15", "75s", "Hold dumbbell at chest"),
            ex("Dumbbell Lunges", 3, "10 each leg", "60s", "Dumbbells at sides"),
            ex("Dumbbell RDLs", 3, "12-15", "60s", "Hinge at hips"),
            ex("Band Glute Bridges", 3, "15-20", "45s", "Band above knees"),
        ],
    },
    WorkoutDay {
        name: "Day 3",
        focus: "Full Body",
        exercises: &[
            ex("Dumbbell Thrusters", 3, "10-12", "75s", "Squat to press"),
            ex("Renegade Rows", 3, "8 each side", "60s", "In plank position"),
            ex("Band Chest Press", 3, "12-15", "60s", "Anchor band behind"),
            ex("Dumbbell Curls to Press", 3, "10-12", "60s", "Combo movement"),
        ],
    },
];

pub fn catalog_for(equipment: EquipmentType) -> &'static [WorkoutDay] {
    match equipment {
        EquipmentType::Bodyweight => BODYWEIGHT_DAYS,
        EquipmentType::Gym => GYM_DAYS,
        EquipmentType::Minimal => MINIMAL_DAYS,
    }
}
