//! Entity kinds and hydrated entity objects.
//!
//! [`EntityKind`] is the closed set of types the Assistly API models. A
//! hydrated [`Entity`] mirrors its source record field-for-field; nested
//! records that matched a known entity tag are entities themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use strum::{Display, EnumIter, EnumString};

use crate::{
  error::{Error, Result},
  record::FieldValue,
};

// ─── EntityKind ──────────────────────────────────────────────────────────────

/// The kinds of entity the Assistly API models.
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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum EntityKind {
  User,
  Case,
  Topic,
  Interaction,
  Customer,
  CustomerEmail,
  Group,
}

impl EntityKind {
  /// The field that carries the entity's textual representation.
  pub fn display_field(self) -> &'static str {
    match self {
      Self::User
      | Self::Topic
      | Self::Interaction
      | Self::Customer
      | Self::Group => "name",
      Self::Case => "subject",
      Self::CustomerEmail => "email",
    }
  }

  /// The key under which a nested record of this kind appears in a
  /// response payload. Inverse of [`EntityKind::from_field_tag`].
  pub fn field_tag(self) -> &'static str {
    match self {
      Self::User => "user",
      Self::Case => "case",
      Self::Topic => "topic",
      Self::Interaction => "interaction",
      Self::Customer => "customer",
      Self::CustomerEmail => "email",
      Self::Group => "group",
    }
  }

  /// Dispatch from a response field key to the kind it embeds.
  /// Returns `None` for keys that do not tag an entity.
  pub fn from_field_tag(tag: &str) -> Option<Self> {
    match tag {
      "user" => Some(Self::User),
      "group" => Some(Self::Group),
      "case" => Some(Self::Case),
      "topic" => Some(Self::Topic),
      "interaction" => Some(Self::Interaction),
      "customer" => Some(Self::Customer),
      "email" => Some(Self::CustomerEmail),
      _ => None,
    }
  }
}

// ─── AttrValue ───────────────────────────────────────────────────────────────

/// The value of a single attribute on a hydrated entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
  /// Stored exactly as it appeared in the source record.
  Raw(FieldValue),
  /// A nested record that matched a known entity tag and was hydrated.
  Entity(Entity),
}

impl AttrValue {
  pub fn as_raw(&self) -> Option<&FieldValue> {
    match self {
      Self::Raw(v) => Some(v),
      Self::Entity(_) => None,
    }
  }

  pub fn as_entity(&self) -> Option<&Entity> {
    match self {
      Self::Entity(e) => Some(e),
      Self::Raw(_) => None,
    }
  }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A hydrated entity: one attribute per field of the source record.
///
/// Attributes are read by name; there is no query surface beyond direct
/// access and [`Entity::display_value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
  kind:  EntityKind,
  attrs: BTreeMap<String, AttrValue>,
}

impl Entity {
  pub(crate) fn new(kind: EntityKind, attrs: BTreeMap<String, AttrValue>) -> Self {
    Self { kind, attrs }
  }

  pub fn kind(&self) -> EntityKind { self.kind }

  pub fn get(&self, field: &str) -> Option<&AttrValue> {
    self.attrs.get(field)
  }

  /// The attribute's raw value, if it was not hydrated into an entity.
  pub fn raw(&self, field: &str) -> Option<&FieldValue> {
    self.get(field).and_then(AttrValue::as_raw)
  }

  pub fn text(&self, field: &str) -> Option<&str> {
    self.raw(field).and_then(FieldValue::as_text)
  }

  pub fn number(&self, field: &str) -> Option<&Number> {
    self.raw(field).and_then(FieldValue::as_number)
  }

  pub fn integer(&self, field: &str) -> Option<i64> {
    self.raw(field).and_then(FieldValue::as_i64)
  }

  pub fn boolean(&self, field: &str) -> Option<bool> {
    self.raw(field).and_then(FieldValue::as_bool)
  }

  /// The nested hydrated entity stored under `field`, if any.
  pub fn entity(&self, field: &str) -> Option<&Entity> {
    self.get(field).and_then(AttrValue::as_entity)
  }

  pub fn fields(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
    self.attrs.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn contains(&self, field: &str) -> bool {
    self.attrs.contains_key(field)
  }

  pub fn len(&self) -> usize { self.attrs.len() }

  pub fn is_empty(&self) -> bool { self.attrs.is_empty() }

  /// The entity's textual representation: the value of its designated
  /// display field (`name`, `subject`, or `email` depending on kind).
  ///
  /// Fails if the field is absent from the source record or is not text.
  pub fn display_value(&self) -> Result<&str> {
    let field = self.kind.display_field();
    self.text(field).ok_or(Error::MissingDisplayField {
      kind: self.kind,
      field,
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
