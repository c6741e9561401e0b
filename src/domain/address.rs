use serde::{Deserialize, Serialize};

/// Resolved address of one subject list in the taxonomy.
///
/// The legacy call convention passes `(board, stream_or_group, class_level?)`
/// and lets the presence of the third component pick the interpretation;
/// `from_parts` maps that triple onto an explicit variant so the rest of the
/// crate never shape-sniffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectAddress {
  /// Two-level address: board -> group (e.g. a university) -> subjects.
  Flat { board: String, group: String },
  /// Three-level address: board -> stream -> class level -> subjects.
  Nested {
    board: String,
    stream: String,
    class_level: String,
  },
}

impl SubjectAddress {
  /// Build from the legacy triple. An absent `class_level` selects the flat
  /// interpretation; a present one selects the nested interpretation.
  pub fn from_parts(
    board: &str,
    stream_or_group: &str,
    class_level: Option<&str>,
  ) -> Result<Self, AddressError> {
    let board = board.trim();
    let stream_or_group = stream_or_group.trim();
    if board.is_empty() {
      return Err(AddressError::EmptyBoard);
    }
    if stream_or_group.is_empty() {
      return Err(AddressError::EmptyStreamOrGroup);
    }
    match class_level {
      None => Ok(SubjectAddress::Flat {
        board: board.to_string(),
        group: stream_or_group.to_string(),
      }),
      Some(class) => {
        let class = class.trim();
        if class.is_empty() {
          return Err(AddressError::EmptyClassLevel);
        }
        Ok(SubjectAddress::Nested {
          board: board.to_string(),
          stream: stream_or_group.to_string(),
          class_level: class.to_string(),
        })
      }
    }
  }

  pub fn board(&self) -> &str {
    match self {
      SubjectAddress::Flat { board, .. } => board,
      SubjectAddress::Nested { board, .. } => board,
    }
  }

  pub fn is_flat(&self) -> bool {
    matches!(self, SubjectAddress::Flat { .. })
  }

  /// Re-check the invariants `from_parts` establishes, for addresses that
  /// were constructed directly.
  pub fn validate(&self) -> Result<(), AddressError> {
    match self {
      SubjectAddress::Flat { board, group } => {
        if board.trim().is_empty() {
          Err(AddressError::EmptyBoard)
        } else if group.trim().is_empty() {
          Err(AddressError::EmptyStreamOrGroup)
        } else {
          Ok(())
        }
      }
      SubjectAddress::Nested {
        board,
        stream,
        class_level,
      } => {
        if board.trim().is_empty() {
          Err(AddressError::EmptyBoard)
        } else if stream.trim().is_empty() {
          Err(AddressError::EmptyStreamOrGroup)
        } else if class_level.trim().is_empty() {
          Err(AddressError::EmptyClassLevel)
        } else {
          Ok(())
        }
      }
    }
  }
}

/// Malformed address component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
  EmptyBoard,
  EmptyStreamOrGroup,
  EmptyClassLevel,
}

impl std::fmt::Display for AddressError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AddressError::EmptyBoard => write!(f, "board name is empty"),
      AddressError::EmptyStreamOrGroup => write!(f, "stream or group name is empty"),
      AddressError::EmptyClassLevel => write!(f, "class level name is empty"),
    }
  }
}

impl std::error::Error for AddressError {}
