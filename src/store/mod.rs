//! The taxonomy store: owns the curriculum taxonomy and the current
//! selection, persisting both through an injected blob port.
//!
//! Mutations update in-memory state first and persist second. A failed save
//! is reported but never rolled back: the change holds for the session and
//! may not survive a restart. Reads never fail; missing paths resolve empty.

use crate::domain::{Selection, SubjectAddress, Taxonomy};
use crate::persist::{BlobError, BlobStore, SELECTION_KEY, TAXONOMY_KEY};
use crate::seed;

/// Store operation failure.
#[derive(Debug)]
pub enum StoreError {
  /// Bad input shape or value; the taxonomy was left untouched.
  Validation(String),
  /// The blob write failed; the in-memory change was kept.
  Persistence(BlobError),
}

impl std::fmt::Display for StoreError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      StoreError::Validation(msg) => write!(f, "validation error: {}", msg),
      StoreError::Persistence(e) => write!(f, "persistence error: {}", e),
    }
  }
}

impl std::error::Error for StoreError {}

/// Curriculum taxonomy store over a blob-store backend.
pub struct TaxonomyStore<B: BlobStore> {
  taxonomy: Taxonomy,
  selection: Option<Selection>,
  blob: B,
}

impl<B: BlobStore> TaxonomyStore<B> {
  /// Load the persisted snapshot. An absent or corrupt taxonomy blob is
  /// replaced by the built-in defaults; neither is fatal. A selection that
  /// fails to load is simply dropped (stale selections carry no guarantees
  /// to begin with).
  pub fn load(blob: B) -> Self {
    let taxonomy = match blob.get(TAXONOMY_KEY) {
      Ok(Some(raw)) => match serde_json::from_str(&raw) {
        Ok(taxonomy) => taxonomy,
        Err(e) => {
          tracing::warn!("Stored taxonomy is corrupt, substituting defaults: {}", e);
          seed::default_taxonomy()
        }
      },
      Ok(None) => {
        tracing::info!("No stored taxonomy found, seeding defaults");
        seed::default_taxonomy()
      }
      Err(e) => {
        tracing::warn!("Failed to read stored taxonomy, substituting defaults: {}", e);
        seed::default_taxonomy()
      }
    };

    let selection = match blob.get(SELECTION_KEY) {
      Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
      _ => None,
    };

    Self {
      taxonomy,
      selection,
      blob,
    }
  }

  /// Insert a subject at `address`, creating missing intermediate
  /// containers. Inserting an already-present subject is a no-op.
  pub fn add_subject(
    &mut self,
    address: &SubjectAddress,
    subject: &str,
  ) -> Result<(), StoreError> {
    address
      .validate()
      .map_err(|e| StoreError::Validation(e.to_string()))?;
    let subject = subject.trim();
    if subject.is_empty() {
      return Err(StoreError::Validation("subject name is empty".to_string()));
    }

    let inserted = self
      .taxonomy
      .insert_subject(address, subject)
      .map_err(|e| StoreError::Validation(e.to_string()))?;
    if inserted {
      self.persist_taxonomy()?;
    }
    Ok(())
  }

  /// Remove the first subject matching `name`. Missing paths and absent
  /// names are no-ops; returns whether anything was removed.
  pub fn remove_subject_by_name(
    &mut self,
    address: &SubjectAddress,
    name: &str,
  ) -> Result<bool, StoreError> {
    let removed = self.taxonomy.remove_subject_by_name(address, name);
    if removed {
      self.persist_taxonomy()?;
    }
    Ok(removed)
  }

  /// Remove the subject at `index`. Out-of-range indexes and missing paths
  /// are no-ops; returns whether anything was removed.
  pub fn remove_subject_at_index(
    &mut self,
    address: &SubjectAddress,
    index: usize,
  ) -> Result<bool, StoreError> {
    let removed = self.taxonomy.remove_subject_at_index(address, index);
    if removed {
      self.persist_taxonomy()?;
    }
    Ok(removed)
  }

  /// Defensive copy of the subject list at `address`; empty on any missing
  /// path segment.
  pub fn subjects(&self, address: &SubjectAddress) -> Vec<String> {
    self.taxonomy.subjects(address)
  }

  /// Two-level lookup: board -> group -> subjects.
  pub fn subjects_flat(&self, board: &str, group: &str) -> Vec<String> {
    self.taxonomy.subjects_flat(board, group)
  }

  /// Three-level lookup: board -> stream -> class level -> subjects.
  pub fn subjects_nested(&self, board: &str, stream: &str, class_level: &str) -> Vec<String> {
    self.taxonomy.subjects_nested(board, stream, class_level)
  }

  pub fn boards(&self) -> Vec<String> {
    self.taxonomy.boards()
  }

  pub fn streams_or_groups(&self, board: &str) -> Vec<String> {
    self.taxonomy.streams_or_groups(board)
  }

  /// Empty for flat boards; the runtime probe for the board's shape.
  pub fn class_levels(&self, board: &str, stream_or_group: &str) -> Vec<String> {
    self.taxonomy.class_levels(board, stream_or_group)
  }

  pub fn board_exists(&self, board: &str) -> bool {
    self.taxonomy.board_exists(board)
  }

  pub fn stream_or_group_exists(&self, board: &str, stream_or_group: &str) -> bool {
    self.taxonomy.stream_or_group_exists(board, stream_or_group)
  }

  pub fn class_level_exists(&self, board: &str, stream: &str, class_level: &str) -> bool {
    self.taxonomy.class_level_exists(board, stream, class_level)
  }

  /// Set the current selection verbatim. The selection is not checked
  /// against the taxonomy; pointing at a deleted path is accepted state.
  pub fn select_subject(&mut self, selection: Selection) -> Result<(), StoreError> {
    self.selection = Some(selection);
    self.persist_selection()
  }

  pub fn selection(&self) -> Option<&Selection> {
    self.selection.as_ref()
  }

  /// Replace the board's subtree with its built-in default, or with an
  /// empty flat mapping when no default exists for that name.
  pub fn reset_board(&mut self, board: &str) -> Result<(), StoreError> {
    let board = board.trim();
    if board.is_empty() {
      return Err(StoreError::Validation("board name is empty".to_string()));
    }
    let entry = seed::default_board(board)
      .unwrap_or_else(|| crate::domain::BoardEntry::Flat(Default::default()));
    self.taxonomy.set_board(board, entry);
    self.persist_taxonomy()
  }

  pub fn taxonomy(&self) -> &Taxonomy {
    &self.taxonomy
  }

  pub fn blob(&self) -> &B {
    &self.blob
  }

  fn persist_taxonomy(&mut self) -> Result<(), StoreError> {
    let raw = serde_json::to_string(&self.taxonomy)
      .map_err(|e| StoreError::Persistence(BlobError::Encode(e)))?;
    self
      .blob
      .set(TAXONOMY_KEY, &raw)
      .map_err(StoreError::Persistence)
  }

  fn persist_selection(&mut self) -> Result<(), StoreError> {
    let Some(selection) = &self.selection else {
      return Ok(());
    };
    let raw = serde_json::to_string(selection)
      .map_err(|e| StoreError::Persistence(BlobError::Encode(e)))?;
    self
      .blob
      .set(SELECTION_KEY, &raw)
      .map_err(StoreError::Persistence)
  }
}
