//! Layout building - the fixed three-section skill arrangement
//!
//! Splits the base partition over two display columns (the first column
//! takes the ceiling half) and lists each named category as a header row
//! followed by its members. Pure arrangement; no further computation.

use crate::application::dto::{LayoutModel, LayoutRow};
use crate::domain::entities::SkillCatalog;

#[derive(Debug, Default)]
pub struct LayoutService;

impl LayoutService {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, catalog: &SkillCatalog) -> LayoutModel {
        let base: Vec<LayoutRow> = catalog
            .base()
            .iter()
            .map(|(name, value)| LayoutRow::Entry {
                skill: name.clone(),
                value: *value,
            })
            .collect();

        let half = (base.len() + 1) / 2;
        let mut first = base;
        let second = first.split_off(half);

        let mut categories = Vec::new();
        let mut index = 1;
        for (category, members) in catalog.categories() {
            categories.push(LayoutRow::Header {
                skill: category.clone(),
                index,
            });
            index += 1;
            for (name, value) in members {
                categories.push(LayoutRow::Entry {
                    skill: name.clone(),
                    value: *value,
                });
                index += 1;
            }
        }

        LayoutModel {
            sections: [first, second, categories],
        }
    }
}
