//! Domain entities - Core business objects with identity

mod character;
mod skill;

pub use character::{CharacterRecord, Identity, ResourceInputs};
pub use skill::{
    catalog_definition, reference_catalog, SkillCatalog, SkillCategory, SkillEntry, SkillValue,
    SKILL_POINT_ALLOCATION,
};
