//! Core data-modeling types for the Assistly customer-support API.
//!
//! This crate is deliberately free of HTTP and transport dependencies.
//! An upstream client decodes wire payloads into [`Record`] trees;
//! [`hydrate`] turns those into typed [`Entity`] objects for the seven
//! modeled kinds.
//!
//! # Quick start
//!
//! ```
//! use assistly_core::{EntityKind, Record, hydrate};
//!
//! let record = Record::from_json(serde_json::json!({
//!   "subject": "Billing issue",
//!   "user": { "name": "Alice" },
//! }))
//! .unwrap();
//!
//! let case = hydrate(EntityKind::Case, record).unwrap();
//! assert_eq!(case.display_value().unwrap(), "Billing issue");
//! assert_eq!(case.entity("user").unwrap().display_value().unwrap(), "Alice");
//! ```

pub mod entity;
pub mod error;
pub mod hydrate;
pub mod record;
pub mod status;


pub use entity::{AttrValue, Entity, EntityKind};
pub use error::{Error, Result};
pub use hydrate::{MAX_HYDRATION_DEPTH, hydrate, hydrate_with_depth};
pub use record::{FieldValue, Record};
pub use status::{CaseStatus, status_id_for};
