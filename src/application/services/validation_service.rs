//! Record validation - schema checks and the attribute allocation check
//!
//! Confirms the fixed required-key path (game marker, character block,
//! identity fields, the eight primary attributes) and the allocation of
//! attribute values against the allowed multiset. Fails fast: the first
//! missing or malformed field aborts the pipeline with no output produced.
//! The optional resource and skill groups are extracted structurally here;
//! their presence semantics are enforced downstream.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::entities::{CharacterRecord, Identity, ResourceInputs};
use crate::domain::value_objects::{AttributeKey, AttributeSet, Points, PoolInput};

/// Exact game marker the record must carry
pub const EXPECTED_GAME_NAME: &str = "Call of Cthulhu 7th Ed";

const IDENTITY_FIELDS: [&str; 6] = [
    "name",
    "occupation",
    "residence",
    "birthplace",
    "age",
    "gender",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("key '{key}' missing from '{parent}'")]
    MissingKey { key: String, parent: String },

    #[error("'{key}' must be a mapping")]
    ExpectedMapping { key: String },

    #[error("game name must be 'Call of Cthulhu 7th Ed', found '{found}'")]
    WrongGame { found: String },

    #[error("field '{key}' must be a scalar value")]
    ExpectedScalar { key: String },

    #[error("stat '{key}' must be an integer")]
    ExpectedInteger { key: String },

    #[error("value '{key}' must be an integer or '-'")]
    ExpectedPoints { key: String },

    #[error("stats don't match the allowed values (missing {missing:?}, surplus {surplus:?})")]
    Allocation {
        missing: Vec<i64>,
        surplus: Vec<i64>,
    },
}

/// Validates a raw record tree into a `CharacterRecord`
#[derive(Debug, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, record: &Value) -> Result<CharacterRecord, ValidationError> {
        let game = require_mapping(record, "record", "game")?;

        let name = require_key(game, "game", "name")?;
        match name.as_str() {
            Some(s) if s == EXPECTED_GAME_NAME => {}
            Some(s) => {
                return Err(ValidationError::WrongGame {
                    found: s.to_string(),
                })
            }
            None => {
                return Err(ValidationError::WrongGame {
                    found: name.to_string(),
                })
            }
        }

        let character = require_mapping(game, "game", "character")?;
        let identity = Self::identity(character)?;

        let stats = require_mapping(character, "character", "stats")?;
        let attributes = Self::attributes(stats)?;
        Self::check_allocation(&attributes)?;

        let resources = Self::resources(stats)?;
        let skill_overrides = Self::skill_overrides(character)?;

        Ok(CharacterRecord {
            identity,
            attributes,
            resources,
            skill_overrides,
        })
    }

    fn identity(character: &Value) -> Result<Identity, ValidationError> {
        let field = |key: &str| -> Result<String, ValidationError> {
            let value = require_key(character, "character", key)?;
            let value = scalar_to_string(value).ok_or_else(|| ValidationError::ExpectedScalar {
                key: key.to_string(),
            })?;
            debug!("{}: {}", key, value);
            Ok(value)
        };

        // Checked in the order the sheet lists them, first failure wins
        Ok(Identity {
            name: field(IDENTITY_FIELDS[0])?,
            occupation: field(IDENTITY_FIELDS[1])?,
            residence: field(IDENTITY_FIELDS[2])?,
            birthplace: field(IDENTITY_FIELDS[3])?,
            age: field(IDENTITY_FIELDS[4])?,
            gender: field(IDENTITY_FIELDS[5])?,
        })
    }

    fn attributes(stats: &Value) -> Result<AttributeSet, ValidationError> {
        let mut set = AttributeSet::new();
        for key in AttributeKey::ALL {
            let value = require_key(stats, "stats", key.as_str())?;
            let value = value
                .as_i64()
                .ok_or_else(|| ValidationError::ExpectedInteger {
                    key: key.as_str().to_string(),
                })?;
            debug!("{}: {}", key, value);
            set.set(key, value);
        }
        Ok(set)
    }

    fn check_allocation(attributes: &AttributeSet) -> Result<(), ValidationError> {
        let diff = attributes.allocation_diff();
        if diff.is_empty() {
            return Ok(());
        }
        let mut missing = Vec::new();
        let mut surplus = Vec::new();
        for (value, delta) in diff {
            for _ in 0..delta.abs() {
                if delta > 0 {
                    missing.push(value);
                } else {
                    surplus.push(value);
                }
            }
        }
        Err(ValidationError::Allocation { missing, surplus })
    }

    fn resources(stats: &Value) -> Result<ResourceInputs, ValidationError> {
        let luck = match stats.get("LUCK") {
            None => None,
            Some(value) => Some(value.as_i64().ok_or_else(|| {
                ValidationError::ExpectedInteger {
                    key: "LUCK".to_string(),
                }
            })?),
        };

        Ok(ResourceInputs {
            luck,
            sanity: Self::pool(stats, "SAN")?,
            hit_points: Self::pool(stats, "HP")?,
            magic_points: Self::pool(stats, "MP")?,
        })
    }

    fn pool(stats: &Value, key: &str) -> Result<Option<PoolInput>, ValidationError> {
        let Some(raw) = stats.get(key) else {
            return Ok(None);
        };
        if !raw.is_object() {
            return Err(ValidationError::ExpectedMapping {
                key: key.to_string(),
            });
        }
        Ok(Some(PoolInput {
            current: Self::points(raw, key, "CUR")?,
            maximum: Self::points(raw, key, "MAX")?,
        }))
    }

    fn points(
        pool: &Value,
        resource: &str,
        field: &str,
    ) -> Result<Option<Points>, ValidationError> {
        match pool.get(field) {
            None => Ok(None),
            Some(value) => Points::from_scalar(value)
                .ok_or_else(|| ValidationError::ExpectedPoints {
                    key: format!("{}.{}", resource, field),
                })
                .map(Some),
        }
    }

    fn skill_overrides(character: &Value) -> Result<BTreeMap<String, Value>, ValidationError> {
        match character.get("skills") {
            None => Ok(BTreeMap::new()),
            Some(raw) => {
                let map = raw
                    .as_object()
                    .ok_or_else(|| ValidationError::ExpectedMapping {
                        key: "skills".to_string(),
                    })?;
                Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
        }
    }
}

fn require_key<'a>(value: &'a Value, parent: &str, key: &str) -> Result<&'a Value, ValidationError> {
    value.get(key).ok_or_else(|| ValidationError::MissingKey {
        key: key.to_string(),
        parent: parent.to_string(),
    })
}

fn require_mapping<'a>(
    value: &'a Value,
    parent: &str,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    let inner = require_key(value, parent, key)?;
    if !inner.is_object() {
        return Err(ValidationError::ExpectedMapping {
            key: key.to_string(),
        });
    }
    Ok(inner)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
