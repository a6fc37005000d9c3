//! Skill resolution - catalog merge, categorization and value evaluation
//!
//! Reconciles the character's recorded skill overrides against the built-in
//! reference catalog: overrides are normalized and vetted, every catalog
//! skill missing from the record is injected with its default definition,
//! the merged set is partitioned by category, and each entry's current value
//! is resolved exactly once (explicit value, flat base, or formula).

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entities::{
    catalog_definition, reference_catalog, CharacterRecord, SkillCatalog, SkillCategory,
    SkillEntry, SkillValue, SKILL_POINT_ALLOCATION,
};
use crate::domain::value_objects::{evaluate, AttributeSet, FormulaError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillError {
    #[error("skill '{0}' has an invalid override value")]
    InvalidOverride(String),

    #[error("skill '{0}' is not in the reference catalog and declares no category")]
    UnrecognizedSkill(String),

    #[error("skill '{0}' resolves to no value")]
    Unresolvable(String),

    #[error("skill '{name}': {source}")]
    Formula {
        name: String,
        #[source]
        source: FormulaError,
    },
}

/// One skill as recorded or injected, before value resolution
#[derive(Debug, Clone, Default)]
struct PendingSkill {
    current: Option<i64>,
    category: Option<String>,
    base: Option<i64>,
    formula: Option<String>,
}

/// Resolves the full skill set for one character
#[derive(Debug, Default)]
pub struct SkillResolutionService;

impl SkillResolutionService {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, record: &CharacterRecord) -> Result<SkillCatalog, SkillError> {
        let mut merged: BTreeMap<String, PendingSkill> = BTreeMap::new();

        // Normalize overrides and vet skills the catalog does not know.
        // An unknown skill must declare a category; an unknown category is
        // only worth a warning.
        for (name, raw) in &record.skill_overrides {
            let pending = normalize_override(name, raw)?;
            if catalog_definition(name).is_none() {
                match &pending.category {
                    Some(category) => {
                        if SkillCategory::from_name(category).is_none() {
                            warn!("{}: category {} unknown", name, category);
                        }
                    }
                    None => return Err(SkillError::UnrecognizedSkill(name.clone())),
                }
            }
            debug!("{}: override {:?}", name, pending.current);
            merged.insert(name.clone(), pending);
        }

        // Inject every catalog skill the record does not override
        for def in reference_catalog() {
            if merged.contains_key(def.name) {
                continue;
            }
            let pending = PendingSkill {
                current: None,
                category: def.category.map(|c| c.as_str().to_string()),
                base: match def.value {
                    SkillValue::Base(value) => Some(value),
                    SkillValue::Formula(_) => None,
                },
                formula: match def.value {
                    SkillValue::Formula(expr) => Some(expr.to_string()),
                    SkillValue::Base(_) => None,
                },
            };
            debug!("{}: added from catalog", def.name);
            merged.insert(def.name.to_string(), pending);
        }

        report_partition_sizes(&merged);

        // Resolve every value exactly once and partition by category
        let mut catalog = SkillCatalog::new();
        for (name, pending) in merged {
            let value = resolve_value(&name, &pending, &record.attributes)?;
            catalog.insert(SkillEntry {
                name,
                category: pending.category,
                value,
            });
        }
        debug!("{} skills resolved", catalog.len());
        Ok(catalog)
    }
}

fn normalize_override(name: &str, raw: &Value) -> Result<PendingSkill, SkillError> {
    let invalid = || SkillError::InvalidOverride(name.to_string());
    match raw {
        // A bare number is shorthand for { cur: ... }
        Value::Number(n) => Ok(PendingSkill {
            current: Some(n.as_i64().ok_or_else(invalid)?),
            ..PendingSkill::default()
        }),
        Value::Object(map) => {
            let mut pending = PendingSkill::default();
            if let Some(cur) = map.get("cur") {
                pending.current = Some(cur.as_i64().ok_or_else(invalid)?);
            }
            if let Some(category) = map.get("category") {
                pending.category = Some(category.as_str().ok_or_else(invalid)?.to_string());
            }
            if let Some(base) = map.get("base") {
                pending.base = Some(base.as_i64().ok_or_else(invalid)?);
            }
            if let Some(formula) = map.get("eval") {
                pending.formula = Some(formula.as_str().ok_or_else(invalid)?.to_string());
            }
            Ok(pending)
        }
        _ => Err(invalid()),
    }
}

fn resolve_value(
    name: &str,
    pending: &PendingSkill,
    attributes: &AttributeSet,
) -> Result<i64, SkillError> {
    if let Some(current) = pending.current {
        return Ok(current);
    }
    if let Some(base) = pending.base {
        return Ok(base);
    }
    if let Some(formula) = &pending.formula {
        return evaluate(formula, attributes).map_err(|source| SkillError::Formula {
            name: name.to_string(),
            source,
        });
    }
    Err(SkillError::Unresolvable(name.to_string()))
}

/// Allocation-by-category bookkeeping: partition sizes are reported next to
/// the allowed-points table but never enforced.
fn report_partition_sizes(merged: &BTreeMap<String, PendingSkill>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for pending in merged.values() {
        *counts
            .entry(pending.category.as_deref().unwrap_or("_base_"))
            .or_insert(0) += 1;
    }
    for (category, count) in &counts {
        debug!("{}: {}", category, count);
    }
    debug!("allowed skill points: {:?}", SKILL_POINT_ALLOCATION);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::entities::{Identity, ResourceInputs};
    use crate::domain::value_objects::AttributeKey;

    fn record(skills: &[(&str, Value)]) -> CharacterRecord {
        let mut attributes = AttributeSet::new();
        for (key, value) in AttributeKey::ALL
            .into_iter()
            .zip([50, 40, 60, 60, 50, 70, 80, 65])
        {
            attributes.set(key, value);
        }
        CharacterRecord {
            identity: Identity {
                name: "Harvey Walters".to_string(),
                occupation: "Journalist".to_string(),
                residence: "Arkham".to_string(),
                birthplace: "Boston".to_string(),
                age: "42".to_string(),
                gender: "Male".to_string(),
            },
            attributes,
            resources: ResourceInputs::default(),
            skill_overrides: skills
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_catalog_skills_materialize_without_overrides() {
        let catalog = SkillResolutionService::new().resolve(&record(&[])).unwrap();
        assert_eq!(catalog.len(), reference_catalog().len());
        // Dodge comes from its formula: DEX 60 / 2
        assert_eq!(catalog.base()["Dodge"], 30);
        // Language (Own) evaluates EDU
        assert_eq!(catalog.categories()["Language"]["Language (Own)"], 70);
        // Flat bases carry over
        assert_eq!(catalog.categories()["Firearms"]["Handgun"], 20);
    }

    #[test]
    fn test_override_beats_formula() {
        let catalog = SkillResolutionService::new()
            .resolve(&record(&[("Dodge", json!(45))]))
            .unwrap();
        assert_eq!(catalog.base()["Dodge"], 45);
    }

    #[test]
    fn test_merged_size_grows_with_extra_skills() {
        let catalog = SkillResolutionService::new()
            .resolve(&record(&[(
                "Axe",
                json!({ "cur": 30, "category": "Fighting" }),
            )]))
            .unwrap();
        assert_eq!(catalog.len(), reference_catalog().len() + 1);
        assert_eq!(catalog.categories()["Fighting"]["Axe"], 30);
    }

    #[test]
    fn test_bare_override_of_categorized_skill_lands_in_base() {
        // A bare number normalizes to { cur } with no category, so the
        // catalog's Fighting grouping for Brawl is not reattached
        let catalog = SkillResolutionService::new()
            .resolve(&record(&[("Brawl", json!(50))]))
            .unwrap();
        assert_eq!(catalog.base()["Brawl"], 50);
        assert!(!catalog.categories().contains_key("Fighting") || !catalog.categories()["Fighting"].contains_key("Brawl"));
    }

    #[test]
    fn test_unknown_skill_without_category_is_fatal() {
        let err = SkillResolutionService::new()
            .resolve(&record(&[("Basket Weaving", json!(25))]))
            .unwrap_err();
        assert_eq!(
            err,
            SkillError::UnrecognizedSkill("Basket Weaving".to_string())
        );
    }

    #[test]
    fn test_unknown_category_is_only_a_warning() {
        let catalog = SkillResolutionService::new()
            .resolve(&record(&[(
                "Dreaming",
                json!({ "cur": 40, "category": "Oneiromancy" }),
            )]))
            .unwrap();
        assert_eq!(catalog.categories()["Oneiromancy"]["Dreaming"], 40);
    }

    #[test]
    fn test_skill_with_no_value_at_all_is_fatal() {
        let err = SkillResolutionService::new()
            .resolve(&record(&[("Axe", json!({ "category": "Fighting" }))]))
            .unwrap_err();
        assert_eq!(err, SkillError::Unresolvable("Axe".to_string()));
    }

    #[test]
    fn test_malformed_override_is_fatal() {
        let err = SkillResolutionService::new()
            .resolve(&record(&[("Dodge", json!("forty-five"))]))
            .unwrap_err();
        assert_eq!(err, SkillError::InvalidOverride("Dodge".to_string()));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let rec = record(&[("Dodge", json!(45)), ("Listen", json!(60))]);
        let service = SkillResolutionService::new();
        let first = service.resolve(&rec).unwrap();
        let second = service.resolve(&rec).unwrap();
        assert_eq!(first.base(), second.base());
        assert_eq!(first.categories(), second.categories());
    }
}
