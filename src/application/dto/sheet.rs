//! Render context assembled from the validated record
//!
//! `SheetContext` serializes to the tree the template substitutes from:
//! `base` carries the identity fields, `stats` the attribute views and
//! derived resources, `skills` the three layout sections.

use serde::Serialize;

use crate::application::dto::LayoutModel;
use crate::domain::entities::Identity;
use crate::domain::value_objects::Pool;

/// Presentation view of one primary attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub value: i64,
    pub value_50: i64,
    pub value_20: i64,
}

impl StatView {
    /// Half and fifth values, truncated toward zero
    pub fn from_value(value: i64) -> Self {
        Self {
            value,
            value_50: value * 50 / 100,
            value_20: value * 20 / 100,
        }
    }
}

/// The stats block of the render context
#[derive(Debug, Clone, Serialize)]
pub struct StatsContext {
    #[serde(rename = "SIZ")]
    pub size: StatView,
    #[serde(rename = "STR")]
    pub strength: StatView,
    #[serde(rename = "CON")]
    pub constitution: StatView,
    #[serde(rename = "DEX")]
    pub dexterity: StatView,
    #[serde(rename = "APP")]
    pub appearance: StatView,
    #[serde(rename = "EDU")]
    pub education: StatView,
    #[serde(rename = "INT")]
    pub intelligence: StatView,
    #[serde(rename = "POW")]
    pub power: StatView,
    #[serde(rename = "LUCK")]
    pub luck: i64,
    #[serde(rename = "SAN")]
    pub sanity: Pool,
    #[serde(rename = "HP")]
    pub hit_points: Pool,
    #[serde(rename = "MP")]
    pub magic_points: Pool,
}

/// The full presentation model handed to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct SheetContext {
    pub base: Identity,
    pub stats: StatsContext,
    pub skills: LayoutModel,
}
