use serde::{Deserialize, Serialize};

/// The currently selected taxonomy path.
///
/// Stored verbatim and never validated against the taxonomy: a selection may
/// reference a path that has since been deleted. That is accepted stale
/// state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
  pub board: String,
  pub stream_or_group: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub class_level: Option<String>,
  pub subject: String,
}

impl Selection {
  pub fn new(
    board: &str,
    stream_or_group: &str,
    class_level: Option<&str>,
    subject: &str,
  ) -> Self {
    Self {
      board: board.to_string(),
      stream_or_group: stream_or_group.to_string(),
      class_level: class_level.map(|c| c.to_string()),
      subject: subject.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_flat_selection_omits_class_level() {
    let sel = Selection::new("WBBSE", "Class I", None, "English");
    let raw = serde_json::to_string(&sel).unwrap();
    assert!(!raw.contains("class_level"));

    let back: Selection = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, sel);
  }

  #[test]
  fn test_nested_selection_round_trip() {
    let sel = Selection::new("WBCHSE", "Science", Some("Class XI"), "Physics");
    let raw = serde_json::to_string(&sel).unwrap();
    let back: Selection = serde_json::from_str(&raw).unwrap();
    assert_eq!(back.class_level.as_deref(), Some("Class XI"));
    assert_eq!(back, sel);
  }
}
