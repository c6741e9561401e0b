//! Built-in default taxonomy, substituted when no usable snapshot exists
//! and used by board resets.

use std::collections::BTreeMap;

use crate::domain::{BoardEntry, Taxonomy};

/// Flat board defaults: (group, subjects).
const WBBSE_CLASSES: &[(&str, &[&str])] = &[
  ("Class I", &["English", "Math"]),
  ("Class V", &["Bengali", "English", "Mathematics"]),
  ("Class VIII", &["Bengali", "English", "Mathematics", "Science"]),
];

const GRADUATION_GROUPS: &[(&str, &[&str])] = &[
  ("Burdwan University", &["English", "History", "Education"]),
  ("Calcutta University", &["Physics", "Chemistry", "Mathematics"]),
];

/// Stream-structured board defaults: (stream, [(class level, subjects)]).
const WBCHSE_STREAMS: &[(&str, &[(&str, &[&str])])] = &[
  (
    "Arts",
    &[
      ("Class XI", &["Bengali", "History", "Geography"]),
      ("Class XII", &["Bengali", "History", "Political Science"]),
    ],
  ),
  (
    "Science",
    &[
      ("Class XI", &["Physics", "Chemistry", "Mathematics"]),
      ("Class XII", &["Physics", "Chemistry", "Biology"]),
    ],
  ),
];

fn flat_entry(groups: &[(&str, &[&str])]) -> BoardEntry {
  let mut map = BTreeMap::new();
  for (group, subjects) in groups {
    map.insert(
      group.to_string(),
      subjects.iter().map(|s| s.to_string()).collect(),
    );
  }
  BoardEntry::Flat(map)
}

fn nested_entry(streams: &[(&str, &[(&str, &[&str])])]) -> BoardEntry {
  let mut map = BTreeMap::new();
  for (stream, classes) in streams {
    let mut class_map = BTreeMap::new();
    for (class, subjects) in *classes {
      class_map.insert(
        class.to_string(),
        subjects.iter().map(|s| s.to_string()).collect(),
      );
    }
    map.insert(stream.to_string(), class_map);
  }
  BoardEntry::Nested(map)
}

/// Default subtree for one board, if it has one.
pub fn default_board(board: &str) -> Option<BoardEntry> {
  match board {
    "WBBSE" => Some(flat_entry(WBBSE_CLASSES)),
    "WBCHSE" => Some(nested_entry(WBCHSE_STREAMS)),
    "Graduation" => Some(flat_entry(GRADUATION_GROUPS)),
    _ => None,
  }
}

/// The full default taxonomy.
pub fn default_taxonomy() -> Taxonomy {
  let mut tax = Taxonomy::new();
  for board in ["WBBSE", "WBCHSE", "Graduation"] {
    if let Some(entry) = default_board(board) {
      tax.set_board(board, entry);
    }
  }
  tax
}
