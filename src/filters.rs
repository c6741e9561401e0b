//! Dependent-dropdown resolution for the admin screens
//! (level -> board -> stream -> class -> subject).
//!
//! A board is treated as stream-bearing only when its name is on the fixed
//! allow-list AND the selected education level is Higher Secondary. That UI
//! classification is independent of the stored shape: a stream-structured
//! board missing from the allow-list gets addressed flat and yields empty
//! option lists. `classify` answers "how does the screen address this
//! board"; `shape_mode` answers "how is this board actually stored". The
//! two can disagree, and callers that care must check both.

use crate::domain::Taxonomy;

/// Education level driving the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
  Madhyamik,
  HigherSecondary,
  Graduation,
}

impl EducationLevel {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "madhyamik" => Some(Self::Madhyamik),
      "higher_secondary" => Some(Self::HigherSecondary),
      "graduation" => Some(Self::Graduation),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Madhyamik => "madhyamik",
      Self::HigherSecondary => "higher_secondary",
      Self::Graduation => "graduation",
    }
  }
}

/// Boards the screens recognize as stream-bearing at Higher Secondary level.
pub const STREAM_BOARDS: &[&str] = &["WBCHSE", "CBSE", "ISC"];

/// How a screen addresses a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMode {
  /// Two-part addressing: board -> group.
  Flat,
  /// Three-part addressing: board -> stream -> class level.
  StreamBearing,
}

/// The UI classification: allow-listed name AND Higher Secondary level.
pub fn classify(level: EducationLevel, board: &str) -> BoardMode {
  if level == EducationLevel::HigherSecondary && STREAM_BOARDS.contains(&board) {
    BoardMode::StreamBearing
  } else {
    BoardMode::Flat
  }
}

/// The data-level classification: the `class_levels` probe. Empty class
/// levels under `stream_or_group` read as flat, whatever the screens think.
pub fn shape_mode(taxonomy: &Taxonomy, board: &str, stream_or_group: &str) -> BoardMode {
  if taxonomy.class_levels(board, stream_or_group).is_empty() {
    BoardMode::Flat
  } else {
    BoardMode::StreamBearing
  }
}

/// All board names, the first dropdown of every cascade.
pub fn board_options(taxonomy: &Taxonomy) -> Vec<String> {
  taxonomy.boards()
}

/// Second dropdown: streams for stream-bearing boards, groups otherwise.
pub fn stream_or_group_options(taxonomy: &Taxonomy, board: &str) -> Vec<String> {
  taxonomy.streams_or_groups(board)
}

/// Third dropdown. Flat-classified boards have no class dropdown.
pub fn class_level_options(
  taxonomy: &Taxonomy,
  level: EducationLevel,
  board: &str,
  stream_or_group: &str,
) -> Vec<String> {
  match classify(level, board) {
    BoardMode::StreamBearing => taxonomy.class_levels(board, stream_or_group),
    BoardMode::Flat => Vec::new(),
  }
}

/// Final dropdown. Addresses the taxonomy per the UI classification, not
/// the stored shape; when the two disagree the result is silently empty.
pub fn subject_options(
  taxonomy: &Taxonomy,
  level: EducationLevel,
  board: &str,
  stream_or_group: &str,
  class_level: Option<&str>,
) -> Vec<String> {
  match classify(level, board) {
    BoardMode::StreamBearing => match class_level {
      Some(class) => taxonomy.subjects_nested(board, stream_or_group, class),
      // Class not chosen yet; nothing to offer.
      None => Vec::new(),
    },
    BoardMode::Flat => taxonomy.subjects_flat(board, stream_or_group),
  }
}
