//! Primary attribute keys and the per-character attribute set

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight primary attributes of a 7th Edition investigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    #[serde(rename = "SIZ")]
    Size,
    #[serde(rename = "STR")]
    Strength,
    #[serde(rename = "CON")]
    Constitution,
    #[serde(rename = "DEX")]
    Dexterity,
    #[serde(rename = "APP")]
    Appearance,
    #[serde(rename = "EDU")]
    Education,
    #[serde(rename = "INT")]
    Intelligence,
    #[serde(rename = "POW")]
    Power,
}

impl AttributeKey {
    /// All keys, in the order the sheet lists them
    pub const ALL: [AttributeKey; 8] = [
        Self::Size,
        Self::Strength,
        Self::Constitution,
        Self::Dexterity,
        Self::Appearance,
        Self::Education,
        Self::Intelligence,
        Self::Power,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Size => "SIZ",
            Self::Strength => "STR",
            Self::Constitution => "CON",
            Self::Dexterity => "DEX",
            Self::Appearance => "APP",
            Self::Education => "EDU",
            Self::Intelligence => "INT",
            Self::Power => "POW",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The values a character may distribute over the eight attributes.
/// Validation requires the recorded values to equal this multiset exactly.
pub const ALLOWED_ATTRIBUTE_VALUES: [i64; 8] = [40, 50, 50, 50, 60, 60, 70, 80];

/// A complete assignment of values to the eight primary attributes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeSet {
    values: [i64; 8],
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: AttributeKey, value: i64) {
        self.values[Self::index(key)] = value;
    }

    pub fn get(&self, key: AttributeKey) -> i64 {
        self.values[Self::index(key)]
    }

    /// Values in sheet order (SIZ, STR, CON, DEX, APP, EDU, INT, POW)
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Multiset difference between the allowed values and the recorded ones.
    ///
    /// Maps each value to `allowed count - recorded count`; entries with a
    /// delta of zero are omitted, so an empty map means the allocation is
    /// valid. Positive deltas are values the record is missing, negative
    /// deltas are surplus.
    pub fn allocation_diff(&self) -> BTreeMap<i64, i64> {
        let mut diff: BTreeMap<i64, i64> = BTreeMap::new();
        for allowed in ALLOWED_ATTRIBUTE_VALUES {
            *diff.entry(allowed).or_insert(0) += 1;
        }
        for value in self.values() {
            *diff.entry(value).or_insert(0) -= 1;
        }
        diff.retain(|_, delta| *delta != 0);
        diff
    }

    fn index(key: AttributeKey) -> usize {
        match key {
            AttributeKey::Size => 0,
            AttributeKey::Strength => 1,
            AttributeKey::Constitution => 2,
            AttributeKey::Dexterity => 3,
            AttributeKey::Appearance => 4,
            AttributeKey::Education => 5,
            AttributeKey::Intelligence => 6,
            AttributeKey::Power => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_from(values: [i64; 8]) -> AttributeSet {
        let mut set = AttributeSet::new();
        for (key, value) in AttributeKey::ALL.into_iter().zip(values) {
            set.set(key, value);
        }
        set
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in AttributeKey::ALL {
            assert_eq!(AttributeKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(AttributeKey::from_name("LUCK"), None);
    }

    #[test]
    fn test_valid_allocation_has_empty_diff() {
        let set = set_from([40, 50, 50, 50, 60, 60, 70, 80]);
        assert!(set.allocation_diff().is_empty());
    }

    #[test]
    fn test_any_permutation_of_allowed_values_is_valid() {
        // Order-independence: the same multiset under a different assignment
        let set = set_from([80, 70, 60, 60, 50, 50, 50, 40]);
        assert!(set.allocation_diff().is_empty());
    }

    #[test]
    fn test_mismatched_allocation_reports_difference() {
        // One 50 swapped for a 90: 50 is missing once, 90 is surplus once
        let set = set_from([40, 90, 50, 50, 60, 60, 70, 80]);
        let diff = set.allocation_diff();
        assert_eq!(diff.get(&50), Some(&1));
        assert_eq!(diff.get(&90), Some(&-1));
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn test_duplicate_counts_must_match_exactly() {
        // Right membership, wrong counts: four 50s and one 60
        let set = set_from([40, 50, 50, 50, 50, 60, 70, 80]);
        let diff = set.allocation_diff();
        assert_eq!(diff.get(&50), Some(&-1));
        assert_eq!(diff.get(&60), Some(&1));
    }

    #[test]
    fn test_get_returns_assigned_value() {
        let set = set_from([40, 50, 50, 50, 60, 60, 70, 80]);
        assert_eq!(set.get(AttributeKey::Size), 40);
        assert_eq!(set.get(AttributeKey::Power), 80);
    }
}
