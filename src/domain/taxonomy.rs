//! The curriculum taxonomy: boards, their streams/groups, and subject lists.
//!
//! Persisted shape (no version field, no type tag):
//! `{ "<board>": { "<group>": ["<subject>", ...] } |
//!    { "<stream>": { "<class>": ["<subject>", ...] } } }`
//!
//! Within one address, subject names are unique and keep insertion order.
//! Containers emptied by a removal are pruned transitively in the same
//! operation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::address::SubjectAddress;

/// Ordered subject list at one taxonomy leaf.
pub type SubjectList = Vec<String>;

/// One board's subtree.
///
/// Serialized untagged so the wire shape stays the raw nested map; the two
/// variants are distinguished structurally on deserialize. An empty object
/// resolves to an empty `Flat` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardEntry {
  /// Graduation-style board: group (e.g. a university) -> subjects.
  Flat(BTreeMap<String, SubjectList>),
  /// Stream-structured board: stream -> class level -> subjects.
  Nested(BTreeMap<String, BTreeMap<String, SubjectList>>),
}

impl BoardEntry {
  pub fn is_flat(&self) -> bool {
    matches!(self, BoardEntry::Flat(_))
  }

  pub fn is_empty(&self) -> bool {
    match self {
      BoardEntry::Flat(groups) => groups.is_empty(),
      BoardEntry::Nested(streams) => streams.is_empty(),
    }
  }
}

/// Addressing a board whose stored entry has the other shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
  pub board: String,
  /// True when the caller addressed the board flat but it is stream-structured.
  pub addressed_flat: bool,
}

impl std::fmt::Display for ShapeMismatch {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.addressed_flat {
      write!(f, "board '{}' is stream-structured, not flat", self.board)
    } else {
      write!(f, "board '{}' is flat, not stream-structured", self.board)
    }
  }
}

impl std::error::Error for ShapeMismatch {}

/// The full board -> ... -> subject-list mapping.
///
/// All query methods resolve missing path segments (and shape mismatches) to
/// empty results; they never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
  boards: BTreeMap<String, BoardEntry>,
}

impl Taxonomy {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a subject, creating missing intermediate containers. Returns
  /// `Ok(false)` when the subject is already present (idempotent).
  pub fn insert_subject(
    &mut self,
    address: &SubjectAddress,
    subject: &str,
  ) -> Result<bool, ShapeMismatch> {
    let list = match address {
      SubjectAddress::Flat { board, group } => {
        let entry = self
          .boards
          .entry(board.clone())
          .or_insert_with(|| BoardEntry::Flat(BTreeMap::new()));
        match entry {
          BoardEntry::Flat(groups) => groups.entry(group.clone()).or_default(),
          BoardEntry::Nested(_) => {
            return Err(ShapeMismatch {
              board: board.clone(),
              addressed_flat: true,
            });
          }
        }
      }
      SubjectAddress::Nested {
        board,
        stream,
        class_level,
      } => {
        let entry = self
          .boards
          .entry(board.clone())
          .or_insert_with(|| BoardEntry::Nested(BTreeMap::new()));
        match entry {
          BoardEntry::Nested(streams) => streams
            .entry(stream.clone())
            .or_default()
            .entry(class_level.clone())
            .or_default(),
          BoardEntry::Flat(_) => {
            return Err(ShapeMismatch {
              board: board.clone(),
              addressed_flat: false,
            });
          }
        }
      }
    };

    if list.iter().any(|s| s == subject) {
      return Ok(false);
    }
    list.push(subject.to_string());
    Ok(true)
  }

  /// Remove the first subject matching `name`. Missing paths and absent
  /// names are no-ops. Returns whether anything was removed.
  pub fn remove_subject_by_name(&mut self, address: &SubjectAddress, name: &str) -> bool {
    self.remove_with(address, |list| {
      if let Some(pos) = list.iter().position(|s| s == name) {
        list.remove(pos);
        true
      } else {
        false
      }
    })
  }

  /// Remove the subject at `index`. Out-of-range indexes and missing paths
  /// are no-ops. Returns whether anything was removed.
  pub fn remove_subject_at_index(&mut self, address: &SubjectAddress, index: usize) -> bool {
    self.remove_with(address, |list| {
      if index < list.len() {
        list.remove(index);
        true
      } else {
        false
      }
    })
  }

  /// Locate the list at `address`, apply `op`, and prune emptied containers
  /// transitively when `op` removed something.
  fn remove_with(
    &mut self,
    address: &SubjectAddress,
    op: impl FnOnce(&mut SubjectList) -> bool,
  ) -> bool {
    match address {
      SubjectAddress::Flat { board, group } => {
        let Some(BoardEntry::Flat(groups)) = self.boards.get_mut(board) else {
          return false;
        };
        let Some(list) = groups.get_mut(group) else {
          return false;
        };
        let removed = op(list);
        if removed && list.is_empty() {
          groups.remove(group);
          if groups.is_empty() {
            self.boards.remove(board);
          }
        }
        removed
      }
      SubjectAddress::Nested {
        board,
        stream,
        class_level,
      } => {
        let Some(BoardEntry::Nested(streams)) = self.boards.get_mut(board) else {
          return false;
        };
        let Some(classes) = streams.get_mut(stream) else {
          return false;
        };
        let Some(list) = classes.get_mut(class_level) else {
          return false;
        };
        let removed = op(list);
        if removed && list.is_empty() {
          classes.remove(class_level);
          if classes.is_empty() {
            streams.remove(stream);
            if streams.is_empty() {
              self.boards.remove(board);
            }
          }
        }
        removed
      }
    }
  }

  /// Defensive copy of the subject list at `address`; empty when any path
  /// segment is missing or the board has the other shape.
  pub fn subjects(&self, address: &SubjectAddress) -> SubjectList {
    match address {
      SubjectAddress::Flat { board, group } => self.subjects_flat(board, group),
      SubjectAddress::Nested {
        board,
        stream,
        class_level,
      } => self.subjects_nested(board, stream, class_level),
    }
  }

  /// Two-level lookup: board -> group -> subjects.
  pub fn subjects_flat(&self, board: &str, group: &str) -> SubjectList {
    match self.boards.get(board) {
      Some(BoardEntry::Flat(groups)) => groups.get(group).cloned().unwrap_or_default(),
      _ => Vec::new(),
    }
  }

  /// Three-level lookup: board -> stream -> class level -> subjects.
  pub fn subjects_nested(&self, board: &str, stream: &str, class_level: &str) -> SubjectList {
    match self.boards.get(board) {
      Some(BoardEntry::Nested(streams)) => streams
        .get(stream)
        .and_then(|classes| classes.get(class_level))
        .cloned()
        .unwrap_or_default(),
      _ => Vec::new(),
    }
  }

  pub fn boards(&self) -> Vec<String> {
    self.boards.keys().cloned().collect()
  }

  /// Group keys for flat boards, stream keys for stream-structured ones.
  pub fn streams_or_groups(&self, board: &str) -> Vec<String> {
    match self.boards.get(board) {
      Some(BoardEntry::Flat(groups)) => groups.keys().cloned().collect(),
      Some(BoardEntry::Nested(streams)) => streams.keys().cloned().collect(),
      None => Vec::new(),
    }
  }

  /// Class-level keys under a stream. Empty for flat boards: this is the
  /// runtime probe consumers use to tell the two shapes apart.
  pub fn class_levels(&self, board: &str, stream_or_group: &str) -> Vec<String> {
    match self.boards.get(board) {
      Some(BoardEntry::Nested(streams)) => streams
        .get(stream_or_group)
        .map(|classes| classes.keys().cloned().collect())
        .unwrap_or_default(),
      _ => Vec::new(),
    }
  }

  pub fn board_exists(&self, board: &str) -> bool {
    self.boards.contains_key(board)
  }

  pub fn stream_or_group_exists(&self, board: &str, stream_or_group: &str) -> bool {
    match self.boards.get(board) {
      Some(BoardEntry::Flat(groups)) => groups.contains_key(stream_or_group),
      Some(BoardEntry::Nested(streams)) => streams.contains_key(stream_or_group),
      None => false,
    }
  }

  pub fn class_level_exists(&self, board: &str, stream: &str, class_level: &str) -> bool {
    match self.boards.get(board) {
      Some(BoardEntry::Nested(streams)) => streams
        .get(stream)
        .is_some_and(|classes| classes.contains_key(class_level)),
      _ => false,
    }
  }

  pub fn get_board(&self, board: &str) -> Option<&BoardEntry> {
    self.boards.get(board)
  }

  /// Replace (or create) a board's entire subtree.
  pub fn set_board(&mut self, board: &str, entry: BoardEntry) {
    self.boards.insert(board.to_string(), entry);
  }

  pub fn remove_board(&mut self, board: &str) -> bool {
    self.boards.remove(board).is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn flat(board: &str, group: &str) -> SubjectAddress {
    SubjectAddress::from_parts(board, group, None).unwrap()
  }

  fn nested(board: &str, stream: &str, class: &str) -> SubjectAddress {
    SubjectAddress::from_parts(board, stream, Some(class)).unwrap()
  }

  #[test]
  fn test_insert_creates_intermediate_containers() {
    let mut tax = Taxonomy::new();
    let addr = nested("WBCHSE", "Science", "Class XI");
    assert!(tax.insert_subject(&addr, "Physics").unwrap());
    assert!(tax.board_exists("WBCHSE"));
    assert!(tax.stream_or_group_exists("WBCHSE", "Science"));
    assert!(tax.class_level_exists("WBCHSE", "Science", "Class XI"));
    assert_eq!(tax.subjects(&addr), vec!["Physics"]);
  }

  #[test]
  fn test_insert_is_idempotent() {
    let mut tax = Taxonomy::new();
    let addr = flat("Graduation", "Calcutta University");
    assert!(tax.insert_subject(&addr, "Physics").unwrap());
    assert!(!tax.insert_subject(&addr, "Physics").unwrap());
    assert_eq!(tax.subjects(&addr), vec!["Physics"]);
  }

  #[test]
  fn test_insert_preserves_call_order() {
    let mut tax = Taxonomy::new();
    let addr = flat("WBBSE", "Class I");
    for subject in ["Zoology", "Algebra", "Music"] {
      tax.insert_subject(&addr, subject).unwrap();
    }
    assert_eq!(tax.subjects(&addr), vec!["Zoology", "Algebra", "Music"]);
  }

  #[test]
  fn test_insert_shape_mismatch() {
    let mut tax = Taxonomy::new();
    tax
      .insert_subject(&nested("WBCHSE", "Science", "Class XI"), "Physics")
      .unwrap();
    let err = tax
      .insert_subject(&flat("WBCHSE", "Science"), "History")
      .unwrap_err();
    assert!(err.addressed_flat);

    tax
      .insert_subject(&flat("Graduation", "Calcutta University"), "Physics")
      .unwrap();
    let err = tax
      .insert_subject(&nested("Graduation", "Arts", "Year I"), "History")
      .unwrap_err();
    assert!(!err.addressed_flat);
  }

  #[test]
  fn test_remove_by_name() {
    let mut tax = Taxonomy::new();
    let addr = flat("WBBSE", "Class I");
    for subject in ["English", "Math", "Science"] {
      tax.insert_subject(&addr, subject).unwrap();
    }
    assert!(tax.remove_subject_by_name(&addr, "Math"));
    assert_eq!(tax.subjects(&addr), vec!["English", "Science"]);
    assert!(!tax.remove_subject_by_name(&addr, "Math"));
  }

  #[test]
  fn test_remove_at_index() {
    let mut tax = Taxonomy::new();
    let addr = flat("WBBSE", "Class I");
    for subject in ["English", "Math", "Science"] {
      tax.insert_subject(&addr, subject).unwrap();
    }
    // Positional removal takes whatever occupies the slot, by name or not.
    assert!(tax.remove_subject_at_index(&addr, 0));
    assert_eq!(tax.subjects(&addr), vec!["Math", "Science"]);
    assert!(!tax.remove_subject_at_index(&addr, 5));
    assert_eq!(tax.subjects(&addr), vec!["Math", "Science"]);
  }

  #[test]
  fn test_remove_missing_path_is_noop() {
    let mut tax = Taxonomy::new();
    assert!(!tax.remove_subject_by_name(&flat("Nowhere", "Group"), "English"));
    assert!(!tax.remove_subject_at_index(&nested("Nowhere", "Stream", "Class"), 0));
  }

  #[test]
  fn test_prune_flat_leaf_and_board() {
    let mut tax = Taxonomy::new();
    let addr = flat("WBBSE", "Class I");
    tax.insert_subject(&addr, "English").unwrap();
    assert!(tax.remove_subject_by_name(&addr, "English"));
    assert!(!tax.stream_or_group_exists("WBBSE", "Class I"));
    assert!(!tax.board_exists("WBBSE"));
  }

  #[test]
  fn test_prune_spares_siblings() {
    let mut tax = Taxonomy::new();
    tax
      .insert_subject(&nested("WBCHSE", "Science", "Class XI"), "Physics")
      .unwrap();
    tax
      .insert_subject(&nested("WBCHSE", "Science", "Class XII"), "Biology")
      .unwrap();
    tax
      .insert_subject(&nested("WBCHSE", "Arts", "Class XI"), "History")
      .unwrap();

    assert!(tax.remove_subject_by_name(&nested("WBCHSE", "Science", "Class XI"), "Physics"));
    // Class XI under Science is gone, but its siblings survive.
    assert!(!tax.class_level_exists("WBCHSE", "Science", "Class XI"));
    assert!(tax.class_level_exists("WBCHSE", "Science", "Class XII"));
    assert!(tax.class_level_exists("WBCHSE", "Arts", "Class XI"));

    assert!(tax.remove_subject_by_name(&nested("WBCHSE", "Science", "Class XII"), "Biology"));
    // Science stream is now empty and pruned; Arts keeps the board alive.
    assert!(!tax.stream_or_group_exists("WBCHSE", "Science"));
    assert!(tax.board_exists("WBCHSE"));

    assert!(tax.remove_subject_by_name(&nested("WBCHSE", "Arts", "Class XI"), "History"));
    assert!(!tax.board_exists("WBCHSE"));
  }

  #[test]
  fn test_class_levels_probe_is_shape_driven() {
    let mut tax = Taxonomy::new();
    tax
      .insert_subject(&flat("Graduation", "Calcutta University"), "Physics")
      .unwrap();
    tax
      .insert_subject(&nested("WBCHSE", "Science", "Class XI"), "Physics")
      .unwrap();

    assert!(tax.class_levels("Graduation", "Calcutta University").is_empty());
    assert_eq!(
      tax.class_levels("WBCHSE", "Science"),
      vec!["Class XI".to_string()]
    );
    assert!(tax.class_levels("Missing", "Anything").is_empty());
  }

  #[test]
  fn test_queries_never_fail_on_shape_mismatch() {
    let mut tax = Taxonomy::new();
    tax
      .insert_subject(&nested("WBCHSE", "Science", "Class XI"), "Physics")
      .unwrap();
    // Flat addressing of a stream-structured board reads as empty.
    assert!(tax.subjects(&flat("WBCHSE", "Science")).is_empty());
    assert!(tax.subjects_flat("WBCHSE", "Science").is_empty());
  }

  #[test]
  fn test_subjects_returns_defensive_copy() {
    let mut tax = Taxonomy::new();
    let addr = flat("WBBSE", "Class I");
    tax.insert_subject(&addr, "English").unwrap();
    let mut copy = tax.subjects(&addr);
    copy.push("Forged".to_string());
    assert_eq!(tax.subjects(&addr), vec!["English"]);
  }

  #[test]
  fn test_wire_shape_flat() {
    let mut tax = Taxonomy::new();
    let addr = flat("Graduation", "Calcutta University");
    tax.insert_subject(&addr, "Physics").unwrap();
    tax.insert_subject(&addr, "Chemistry").unwrap();

    let value = serde_json::to_value(&tax).unwrap();
    assert_eq!(
      value,
      json!({ "Graduation": { "Calcutta University": ["Physics", "Chemistry"] } })
    );
  }

  #[test]
  fn test_wire_shape_nested() {
    let mut tax = Taxonomy::new();
    tax
      .insert_subject(&nested("WBCHSE", "Science", "Class XI"), "Physics")
      .unwrap();

    let value = serde_json::to_value(&tax).unwrap();
    assert_eq!(
      value,
      json!({ "WBCHSE": { "Science": { "Class XI": ["Physics"] } } })
    );
  }

  #[test]
  fn test_round_trip_mixed_shapes() {
    let mut tax = Taxonomy::new();
    tax
      .insert_subject(&flat("Graduation", "Calcutta University"), "Physics")
      .unwrap();
    tax
      .insert_subject(&nested("WBCHSE", "Arts", "Class XII"), "History")
      .unwrap();

    let raw = serde_json::to_string(&tax).unwrap();
    let reloaded: Taxonomy = serde_json::from_str(&raw).unwrap();
    assert_eq!(reloaded, tax);
    assert!(reloaded.get_board("Graduation").unwrap().is_flat());
    assert!(!reloaded.get_board("WBCHSE").unwrap().is_flat());
  }
}
