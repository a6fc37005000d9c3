//! Attribute derivation - presentation aids and derived resource defaults
//!
//! Computes the half and fifth presentation values for every primary
//! attribute and fills Luck, Sanity, Hit Points and Magic Points with their
//! default formulas when the record omits them entirely. A pool that is
//! present but missing CUR or MAX is a hard error; defaulting never applies
//! to partially specified resources. The record itself is never mutated.

use thiserror::Error;
use tracing::{debug, info};

use crate::application::dto::{StatView, StatsContext};
use crate::application::ports::outbound::DiceRollerPort;
use crate::domain::entities::CharacterRecord;
use crate::domain::value_objects::{AttributeKey, Points, Pool, PoolInput};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("value '{field}' missing from '{resource}'")]
    PartialResource { resource: String, field: String },
}

/// Derives the fully populated stats block from a validated record
pub struct DerivationService {
    dice: Box<dyn DiceRollerPort>,
}

impl DerivationService {
    pub fn new(dice: Box<dyn DiceRollerPort>) -> Self {
        Self { dice }
    }

    pub fn derive(&mut self, record: &CharacterRecord) -> Result<StatsContext, DerivationError> {
        let attrs = &record.attributes;
        let view = |key: AttributeKey| {
            let view = StatView::from_value(attrs.get(key));
            debug!("{}: {} {} {}", key, view.value, view.value_50, view.value_20);
            view
        };

        let luck = match record.resources.luck {
            Some(luck) => luck,
            None => {
                let rolled = (self.dice.roll(6) + self.dice.roll(6) + self.dice.roll(6)) * 5;
                info!("LUCK missing from stats, rolled {}", rolled);
                rolled
            }
        };
        debug!("LUCK: {}", luck);

        let pow = attrs.get(AttributeKey::Power);
        let sanity = complete_pool("SAN", record.resources.sanity, Pool::filled(pow))?;
        debug!("SAN: {}/{}", sanity.current, sanity.maximum);

        let hp = (attrs.get(AttributeKey::Constitution) + attrs.get(AttributeKey::Size)) / 10;
        let hit_points = complete_pool("HP", record.resources.hit_points, Pool::filled(hp))?;
        debug!("HP: {}/{}", hit_points.current, hit_points.maximum);

        let magic_default = Pool {
            current: Points::Unset,
            maximum: Points::Value(pow * 20 / 100),
        };
        let magic_points = complete_pool("MP", record.resources.magic_points, magic_default)?;
        debug!("MP: {}/{}", magic_points.current, magic_points.maximum);

        Ok(StatsContext {
            size: view(AttributeKey::Size),
            strength: view(AttributeKey::Strength),
            constitution: view(AttributeKey::Constitution),
            dexterity: view(AttributeKey::Dexterity),
            appearance: view(AttributeKey::Appearance),
            education: view(AttributeKey::Education),
            intelligence: view(AttributeKey::Intelligence),
            power: view(AttributeKey::Power),
            luck,
            sanity,
            hit_points,
            magic_points,
        })
    }
}

/// Use the recorded pool if present (both fields required), else the default
fn complete_pool(
    resource: &str,
    input: Option<PoolInput>,
    default: Pool,
) -> Result<Pool, DerivationError> {
    let Some(input) = input else {
        info!("{} missing from stats, using default", resource);
        return Ok(default);
    };
    let current = input
        .current
        .ok_or_else(|| DerivationError::PartialResource {
            resource: resource.to_string(),
            field: "CUR".to_string(),
        })?;
    let maximum = input
        .maximum
        .ok_or_else(|| DerivationError::PartialResource {
            resource: resource.to_string(),
            field: "MAX".to_string(),
        })?;
    Ok(Pool { current, maximum })
}
