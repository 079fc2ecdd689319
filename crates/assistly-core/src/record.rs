//! Raw response records and their field values.
//!
//! A [`Record`] is the parsed-but-untyped shape of an API response: a map
//! from field name to [`FieldValue`]. The upstream transport decodes the
//! wire payload and hands the tree here; nothing in this module performs
//! I/O or knows about entity kinds.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::Result;

// ─── FieldValue ──────────────────────────────────────────────────────────────

/// A raw value as it appears in a decoded response payload.
///
/// `Null` must stay the first variant: the union is `untagged`, and serde
/// tries variants in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Null,
  Bool(bool),
  Number(Number),
  Text(String),
  List(Vec<FieldValue>),
  Record(Record),
}

impl FieldValue {
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_number(&self) -> Option<&Number> {
    match self {
      Self::Number(n) => Some(n),
      _ => None,
    }
  }

  pub fn as_i64(&self) -> Option<i64> {
    self.as_number().and_then(Number::as_i64)
  }

  pub fn as_list(&self) -> Option<&[FieldValue]> {
    match self {
      Self::List(items) => Some(items),
      _ => None,
    }
  }

  pub fn as_record(&self) -> Option<&Record> {
    match self {
      Self::Record(r) => Some(r),
      _ => None,
    }
  }

  pub fn is_null(&self) -> bool { matches!(self, Self::Null) }
}

impl From<&str> for FieldValue {
  fn from(value: &str) -> Self { Self::Text(value.to_string()) }
}

impl From<String> for FieldValue {
  fn from(value: String) -> Self { Self::Text(value) }
}

impl From<bool> for FieldValue {
  fn from(value: bool) -> Self { Self::Bool(value) }
}

impl From<i64> for FieldValue {
  fn from(value: i64) -> Self { Self::Number(value.into()) }
}

impl From<Record> for FieldValue {
  fn from(value: Record) -> Self { Self::Record(value) }
}

impl From<Value> for FieldValue {
  fn from(value: Value) -> Self {
    match value {
      Value::Null => Self::Null,
      Value::Bool(b) => Self::Bool(b),
      Value::Number(n) => Self::Number(n),
      Value::String(s) => Self::Text(s),
      Value::Array(items) => {
        Self::List(items.into_iter().map(Into::into).collect())
      }
      Value::Object(map) => Self::Record(
        map.into_iter().map(|(k, v)| (k, v.into())).collect(),
      ),
    }
  }
}

impl From<FieldValue> for Value {
  fn from(value: FieldValue) -> Self {
    match value {
      FieldValue::Null => Self::Null,
      FieldValue::Bool(b) => Self::Bool(b),
      FieldValue::Number(n) => Self::Number(n),
      FieldValue::Text(s) => Self::String(s),
      FieldValue::List(items) => {
        Self::Array(items.into_iter().map(Into::into).collect())
      }
      FieldValue::Record(r) => Self::Object(
        r.into_iter().map(|(k, v)| (k, v.into())).collect(),
      ),
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A raw record: field names to raw values, order-irrelevant.
///
/// May be empty and may carry arbitrary extra fields; the hydrator stores
/// anything it does not recognize unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, FieldValue>);

impl Record {
  pub fn new() -> Self { Self::default() }

  /// Convert a decoded JSON payload into a record.
  /// Fails unless `value` is a JSON object.
  pub fn from_json(value: Value) -> Result<Self> {
    Ok(serde_json::from_value(value)?)
  }

  /// The record as a `serde_json::Value` object tree.
  pub fn to_json(&self) -> Value {
    Value::Object(
      self
        .0
        .iter()
        .map(|(k, v)| (k.clone(), v.clone().into()))
        .collect(),
    )
  }

  pub fn insert(
    &mut self,
    field: impl Into<String>,
    value: impl Into<FieldValue>,
  ) -> Option<FieldValue> {
    self.0.insert(field.into(), value.into())
  }

  pub fn get(&self, field: &str) -> Option<&FieldValue> { self.0.get(field) }

  pub fn contains(&self, field: &str) -> bool { self.0.contains_key(field) }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v))
  }
}

impl FromIterator<(String, FieldValue)> for Record {
  fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl IntoIterator for Record {
  type Item = (String, FieldValue);
  type IntoIter = btree_map::IntoIter<String, FieldValue>;

  fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
