//! Case status identifiers.
//!
//! The API filters and updates cases by numeric status-type id while
//! responses and callers use the status name. The mapping is fixed and
//! process-wide: new=10, open=30, pending=50, resolved=70.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Error, Result};

/// The four case statuses.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CaseStatus {
  New,
  Open,
  Pending,
  Resolved,
}

impl CaseStatus {
  /// The numeric status-type id used in case filter and update requests.
  pub fn status_type_id(self) -> u32 {
    match self {
      Self::New => 10,
      Self::Open => 30,
      Self::Pending => 50,
      Self::Resolved => 70,
    }
  }

  /// Parse a status name. There is no default: anything outside the four
  /// fixed names is a lookup failure.
  pub fn from_name(name: &str) -> Result<Self> {
    Self::from_str(name).map_err(|_| Error::UnknownStatus(name.to_string()))
  }
}

/// Look up the status-type id for `name`.
pub fn status_id_for(name: &str) -> Result<u32> {
  Ok(CaseStatus::from_name(name)?.status_type_id())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn ids_match_the_fixed_table() {
    assert_eq!(status_id_for("new").unwrap(), 10);
    assert_eq!(status_id_for("open").unwrap(), 30);
    assert_eq!(status_id_for("pending").unwrap(), 50);
    assert_eq!(status_id_for("resolved").unwrap(), 70);
  }

  #[test]
  fn unknown_names_fail_without_a_default() {
    for name in ["archived", "Pending", "OPEN", "", "closed"] {
      let err = status_id_for(name).unwrap_err();
      assert!(matches!(err, Error::UnknownStatus(n) if n == name));
    }
  }

  #[test]
  fn names_round_trip_through_display() {
    for status in CaseStatus::iter() {
      assert_eq!(
        CaseStatus::from_name(&status.to_string()).unwrap(),
        status
      );
    }
  }
}
