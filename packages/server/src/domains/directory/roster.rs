//! Hardcoded roster data.
//!
//! The roster and the interest catalog are process configuration, not
//! runtime state: edit here and redeploy. Every phone listed must
//! normalize, or startup fails.

use std::collections::BTreeMap;

/// Interest catalog grouped by category, in display order. The
/// directory view renders these as filter groups.
pub const INTEREST_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Outdoors",
        &[
            "Go on a neighborhood walk",
            "Walk to get boba or coffee",
            "Go on an easy hike",
        ],
    ),
    (
        "Games",
        &[
            "Play a board game",
            "Do a jigsaw puzzle",
            "Play trivia at a bar",
        ],
    ),
    (
        "Everyday",
        &[
            "Cook a simple dinner",
            "Do some gardening or plant potting",
            "Do a Costco run",
        ],
    ),
    ("Explore", &["Visit a museum", "Explore a neighborhood in SF"]),
    ("Creative", &["Do a craft", "Bake something"]),
];

/// The catalog in category order, flattened for the filter dropdown.
pub fn interest_categories() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    INTEREST_CATEGORIES.iter().copied()
}

/// One configured roster line, raw phone as written by whoever
/// maintains the list.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub phone: String,
    pub name: String,
    pub interests: BTreeMap<String, bool>,
}

fn entry(phone: &str, name: &str, interested_in: &[&str]) -> RosterEntry {
    let interests = INTEREST_CATEGORIES
        .iter()
        .flat_map(|(_, interests)| interests.iter())
        .map(|&i| (i.to_string(), interested_in.contains(&i)))
        .collect();
    RosterEntry {
        phone: phone.to_string(),
        name: name.to_string(),
        interests,
    }
}

/// The attendee roster compiled into the binary.
pub fn builtin_roster() -> Vec<RosterEntry> {
    vec![
        entry(
            "555-201-4477",
            "Maya Lindqvist",
            &[
                "Go on a neighborhood walk",
                "Go on an easy hike",
                "Play a board game",
                "Cook a simple dinner",
                "Visit a museum",
            ],
        ),
        entry(
            "555-318-9062",
            "Devon Okafor",
            &[
                "Walk to get boba or coffee",
                "Play trivia at a bar",
                "Do a Costco run",
                "Explore a neighborhood in SF",
            ],
        ),
        entry(
            "555-745-2210",
            "Priya Raman",
            &[
                "Go on a neighborhood walk",
                "Walk to get boba or coffee",
                "Do a jigsaw puzzle",
                "Do some gardening or plant potting",
                "Do a craft",
                "Bake something",
            ],
        ),
        entry(
            "555-662-8304",
            "Sam Whitfield",
            &[
                "Go on an easy hike",
                "Play a board game",
                "Play trivia at a bar",
                "Cook a simple dinner",
                "Explore a neighborhood in SF",
            ],
        ),
        entry(
            "555-904-1158",
            "Elena Petrova",
            &[
                "Visit a museum",
                "Explore a neighborhood in SF",
                "Do a craft",
                "Bake something",
                "Do a jigsaw puzzle",
            ],
        ),
        entry(
            "555-437-7691",
            "Jordan Mercer",
            &[
                "Go on a neighborhood walk",
                "Do a Costco run",
                "Cook a simple dinner",
                "Play a board game",
            ],
        ),
    ]
}
