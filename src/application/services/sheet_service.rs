//! Sheet assembly - orchestrates the validation-and-derivation pipeline
//!
//! One pass per invocation: validate the raw record, derive the stats
//! block, resolve the skill set, arrange the layout. Any fatal error aborts
//! the run before a render context exists.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::application::dto::SheetContext;
use crate::application::ports::outbound::DiceRollerPort;
use crate::application::services::{
    DerivationService, LayoutService, SkillResolutionService, ValidationService,
};

pub struct SheetAssemblyService {
    validation: ValidationService,
    derivation: DerivationService,
    skills: SkillResolutionService,
    layout: LayoutService,
}

impl SheetAssemblyService {
    pub fn new(dice: Box<dyn DiceRollerPort>) -> Self {
        Self {
            validation: ValidationService::new(),
            derivation: DerivationService::new(dice),
            skills: SkillResolutionService::new(),
            layout: LayoutService::new(),
        }
    }

    /// Run the whole pipeline over a raw record tree
    pub fn assemble(&mut self, raw: &Value) -> Result<SheetContext> {
        let record = self
            .validation
            .validate(raw)
            .context("record validation failed")?;
        let stats = self
            .derivation
            .derive(&record)
            .context("derived resource computation failed")?;
        let catalog = self
            .skills
            .resolve(&record)
            .context("skill resolution failed")?;
        let skills = self.layout.build(&catalog);

        info!("Assembled sheet for {}", record.identity.name);
        Ok(SheetContext {
            base: record.identity,
            stats,
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedDice(Vec<i64>, usize);

    impl DiceRollerPort for FixedDice {
        fn roll(&mut self, _sides: u32) -> i64 {
            let roll = self.0[self.1 % self.0.len()];
            self.1 += 1;
            roll
        }
    }

    struct NoDice;

    impl DiceRollerPort for NoDice {
        fn roll(&mut self, _sides: u32) -> i64 {
            panic!("dice must not be consulted");
        }
    }

    fn record() -> Value {
        json!({
            "game": {
                "name": "Call of Cthulhu 7th Ed",
                "character": {
                    "name": "Harvey Walters",
                    "occupation": "Journalist",
                    "residence": "Arkham",
                    "birthplace": "Boston",
                    "age": 42,
                    "gender": "Male",
                    "stats": {
                        "SIZ": 50, "STR": 40, "CON": 60, "DEX": 60,
                        "APP": 50, "EDU": 70, "INT": 80, "POW": 50
                    },
                    "skills": { "Dodge": 45 }
                }
            }
        })
    }

    #[test]
    fn test_assemble_produces_render_context() {
        let mut service = SheetAssemblyService::new(Box::new(FixedDice(vec![3, 4, 5], 0)));
        let context = service.assemble(&record()).unwrap();

        assert_eq!(context.base.name, "Harvey Walters");
        assert_eq!(context.stats.luck, 60);
        assert_eq!(context.stats.hit_points.current.to_string(), "11");

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["base"]["occupation"], json!("Journalist"));
        assert_eq!(value["stats"]["DEX"]["value_50"], json!(30));
        assert_eq!(value["stats"]["MP"]["CUR"], json!("-"));
        // Three layout sections, Dodge override visible in the base columns
        assert_eq!(value["skills"].as_array().unwrap().len(), 3);
        let first = value["skills"][0].as_array().unwrap();
        assert!(first
            .iter()
            .any(|row| row["skill"] == json!("Dodge") && row["value"] == json!(45)));
    }

    #[test]
    fn test_validation_failure_precedes_derivation() {
        // The dice panic if consulted, so an error here proves no resource
        // defaulting happened for the invalid record
        let mut raw = record();
        raw["game"].as_object_mut().unwrap().remove("character");
        let mut service = SheetAssemblyService::new(Box::new(NoDice));
        let err = service.assemble(&raw).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_defaulting_is_idempotent_on_populated_records() {
        // A record that already carries every derived value must come out
        // identical on every run, with no dice involved
        let mut raw = record();
        let stats = raw["game"]["character"]["stats"].as_object_mut().unwrap();
        stats.insert("LUCK".to_string(), json!(60));
        stats.insert("SAN".to_string(), json!({ "CUR": 50, "MAX": 50 }));
        stats.insert("HP".to_string(), json!({ "CUR": 11, "MAX": 11 }));
        stats.insert("MP".to_string(), json!({ "CUR": "-", "MAX": 10 }));

        let mut service = SheetAssemblyService::new(Box::new(NoDice));
        let first = serde_json::to_value(service.assemble(&raw).unwrap()).unwrap();
        let second = serde_json::to_value(service.assemble(&raw).unwrap()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first["stats"]["LUCK"], json!(60));
        assert_eq!(first["stats"]["MP"]["CUR"], json!("-"));
    }
}
