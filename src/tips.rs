//! Safety notes shown alongside every generated workout plan

use rand::seq::SliceRandom;

/// Banner shown above the preferences form
pub const AGE_NOTICE: &str = "For ages 13+: These workouts are designed for teens and beginners. \
    Always focus on proper form first, stop if you feel pain, and consider working with a parent, \
    coach, or trainer when starting out.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyCategory {
    Preparation,
    Technique,
    Recovery,
    Supervision,
    Medical,
}

impl SafetyCategory {
    pub fn emoji(&self) -> &'static str {
        match self {
            SafetyCategory::Preparation => "🔥",
            SafetyCategory::Technique => "📐",
            SafetyCategory::Recovery => "😴",
            SafetyCategory::Supervision => "🧑‍🏫",
            SafetyCategory::Medical => "⚕️",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SafetyCategory::Preparation => "Preparation",
            SafetyCategory::Technique => "Technique",
            SafetyCategory::Recovery => "Recovery",
            SafetyCategory::Supervision => "Supervision",
            SafetyCategory::Medical => "Medical",
        }
    }

    pub fn all() -> &'static [SafetyCategory] {
        &[
            SafetyCategory::Preparation,
            SafetyCategory::Technique,
            SafetyCategory::Recovery,
            SafetyCategory::Supervision,
            SafetyCategory::Medical,
        ]
    }
}

pub struct SafetyNote {
    pub category: SafetyCategory,
    pub text: &'static str,
}

/// Important safety notes (ages 13+), in display order
pub const SAFETY_NOTES: &[SafetyNote] = &[
    SafetyNote {
        category: SafetyCategory::Preparation,
        text: "Always warm up for 5-10 minutes before starting (light cardio, dynamic stretches)",
    },
    SafetyNote {
        category: SafetyCategory::Technique,
        text: "Focus on proper form over speed or heavy weights - quality beats quantity",
    },
    SafetyNote {
        category: SafetyCategory::Technique,
        text: "Stop immediately if you feel sharp pain or discomfort",
    },
    SafetyNote {
        category: SafetyCategory::Preparation,
        text: "Stay hydrated throughout your workout",
    },
    SafetyNote {
        category: SafetyCategory::Recovery,
        text: "Rest at least one day between intense sessions to allow recovery",
    },
    SafetyNote {
        category: SafetyCategory::Supervision,
        text: "Consider working with a parent, coach, or certified trainer when starting out",
    },
    SafetyNote {
        category: SafetyCategory::Medical,
        text: "This is not medical advice - consult a healthcare professional before starting any new exercise program",
    },
];

pub fn safety_notes() -> &'static [SafetyNote] {
    SAFETY_NOTES
}

pub fn get_random_note() -> &'static SafetyNote {
    SAFETY_NOTES.choose(&mut rand::thread_rng()).unwrap_or(&SAFETY_NOTES[0])
}

pub fn get_random_note_by_category(category: SafetyCategory) -> Option<&'static SafetyNote> {
    let filtered: Vec<_> = SAFETY_NOTES.iter().filter(|n| n.category == category).collect();
    filtered.choose(&mut rand::thread_rng()).copied()
}

pub fn format_note(note: &SafetyNote) -> String {
    format!("{} {}: {}", note.category.emoji(), note.category.name(), note.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_notes_count() {
        assert_eq!(SAFETY_NOTES.len(), 7);
        assert_eq!(safety_notes().len(), 7);
    }

    #[test]
    fn test_first_and_last_note_order() {
        assert!(SAFETY_NOTES[0].text.starts_with("Always warm up"));
        assert!(SAFETY_NOTES[6].text.starts_with("This is not medical advice"));
    }

    #[test]
    fn test_category_emoji_all_categories() {
        for category in SafetyCategory::all() {
            assert!(!category.emoji().is_empty());
            assert!(!category.name().is_empty());
        }
    }

    #[test]
    fn test_every_category_has_a_note() {
        for category in SafetyCategory::all() {
            let note = get_random_note_by_category(*category);
            assert!(note.is_some(), "Category {:?} should have notes", category);
            assert_eq!(note.unwrap().category, *category);
        }
    }

    #[test]
    fn test_get_random_note_never_panics() {
        for _ in 0..10 {
            assert!(!get_random_note().text.is_empty());
        }
    }

    #[test]
    fn test_format_note() {
        let note = &SAFETY_NOTES[4];
        let formatted = format_note(note);
        assert!(formatted.contains(note.category.emoji()));
        assert!(formatted.contains("Recovery"));
        assert!(formatted.contains(note.text));
    }

    #[test]
    fn test_age_notice_mentions_age() {
        assert!(AGE_NOTICE.starts_with("For ages 13+"));
        assert!(AGE_NOTICE.contains("stop if you feel pain"));
    }
}
