//! Derived resource pools (Sanity, Hit Points, Magic Points) and Luck

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// A pool value: a concrete number, or the explicit unset placeholder.
///
/// The placeholder appears on printed sheets as `-` and survives a round
/// trip through an already-populated record (defaulted Magic Point current
/// values are intentionally non-numeric).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Points {
    Value(i64),
    Unset,
}

impl Points {
    /// Parse a scalar from the raw record: an integer, or `"-"` for unset.
    pub fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Value),
            Value::String(s) if s == "-" => Some(Self::Unset),
            _ => None,
        }
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(n) => write!(f, "{}", n),
            Self::Unset => f.write_str("-"),
        }
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(n) => serializer.serialize_i64(*n),
            Self::Unset => serializer.serialize_str("-"),
        }
    }
}

/// A complete {CUR, MAX} resource pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    pub current: Points,
    pub maximum: Points,
}

impl Pool {
    pub fn filled(value: i64) -> Self {
        Self {
            current: Points::Value(value),
            maximum: Points::Value(value),
        }
    }
}

impl Serialize for Pool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Pool", 2)?;
        state.serialize_field("CUR", &self.current)?;
        state.serialize_field("MAX", &self.maximum)?;
        state.end()
    }
}

/// A pool as it appears in the raw record, before presence checks.
///
/// Defaulting only applies when the whole pool is absent; a pool that is
/// present but missing one of its two fields is rejected downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolInput {
    pub current: Option<Points>,
    pub maximum: Option<Points>,
}
