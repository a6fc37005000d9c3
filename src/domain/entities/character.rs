//! The validated character record owned by the pipeline for one run

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::value_objects::{AttributeSet, PoolInput};

/// The six identity fields of the character block, coerced to display
/// strings for the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: String,
    pub occupation: String,
    pub residence: String,
    pub birthplace: String,
    pub age: String,
    pub gender: String,
}

/// Raw optional resource values as recorded in the input.
///
/// Presence semantics are enforced during derivation: a wholly absent
/// resource is defaulted, a partially specified pool is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceInputs {
    pub luck: Option<i64>,
    pub sanity: Option<PoolInput>,
    pub hit_points: Option<PoolInput>,
    pub magic_points: Option<PoolInput>,
}

/// A character record that has passed schema validation.
///
/// Immutable once built; derivation and skill resolution read it and
/// produce new values rather than annotating it in place.
#[derive(Debug, Clone)]
pub struct CharacterRecord {
    pub identity: Identity,
    pub attributes: AttributeSet,
    pub resources: ResourceInputs,
    /// Skill overrides exactly as recorded; normalization is the skill
    /// resolver's business
    pub skill_overrides: BTreeMap<String, Value>,
}
