//! Recursive record hydration.
//!
//! Hydration turns a [`Record`] into a typed [`Entity`]: every field of the
//! record becomes an attribute, and a nested record stored under a known
//! entity tag (`user`, `case`, `customer`, ...) is hydrated into an entity
//! of that kind. Everything else, unknown fields included, passes through
//! untouched. Pure and synchronous; each call owns its input and produces
//! an independent output, so concurrent calls need no coordination.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::{
  entity::{AttrValue, Entity, EntityKind},
  error::{Error, Result},
  record::{FieldValue, Record},
};

/// Default nesting cap for [`hydrate`].
///
/// Owned records cannot be cyclic, so the cap only guards stack depth on
/// pathologically deep payloads.
pub const MAX_HYDRATION_DEPTH: usize = 128;

/// Hydrate `record` into an entity of `kind`.
pub fn hydrate(kind: EntityKind, record: Record) -> Result<Entity> {
  hydrate_with_depth(kind, record, MAX_HYDRATION_DEPTH)
}

/// Hydrate with a caller-chosen nesting cap.
///
/// Fails with [`Error::DepthExceeded`] once `max_depth` levels of entity
/// nesting are crossed.
pub fn hydrate_with_depth(
  kind: EntityKind,
  record: Record,
  max_depth: usize,
) -> Result<Entity> {
  hydrate_at(kind, record, max_depth, 0)
}

fn hydrate_at(
  kind: EntityKind,
  record: Record,
  max_depth: usize,
  depth: usize,
) -> Result<Entity> {
  if depth >= max_depth {
    return Err(Error::DepthExceeded { limit: max_depth });
  }

  let mut attrs = BTreeMap::new();
  for (field, value) in record {
    let attr = match (EntityKind::from_field_tag(&field), value) {
      (Some(nested), FieldValue::Record(inner)) => {
        AttrValue::Entity(hydrate_at(nested, inner, max_depth, depth + 1)?)
      }
      (Some(_), other) => {
        // An entity tag over a non-record value (a bare id, a list of
        // wrapped records) is stored as-is, like any other field.
        debug!(%field, "entity-tagged field is not a record, stored raw");
        AttrValue::Raw(other)
      }
      (None, other) => AttrValue::Raw(other),
    };
    attrs.insert(field, attr);
  }

  trace!(%kind, fields = attrs.len(), depth, "hydrated record");
  Ok(Entity::new(kind, attrs))
}
