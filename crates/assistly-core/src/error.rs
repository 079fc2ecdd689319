//! Error types for `assistly-core`.

use thiserror::Error;

use crate::entity::EntityKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{kind} record has no `{field}` field to display")]
  MissingDisplayField {
    kind:  EntityKind,
    field: &'static str,
  },

  #[error("unknown case status: {0:?}")]
  UnknownStatus(String),

  #[error("record nesting exceeds {limit} levels")]
  DepthExceeded { limit: usize },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
