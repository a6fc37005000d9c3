//! Built-in reference skill catalog and resolved skill entries

use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of categories grouping skills that require specialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillCategory {
    ArtsCraft,
    Firearms,
    Fighting,
    Language,
    Pilot,
    Science,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        Self::ArtsCraft,
        Self::Firearms,
        Self::Fighting,
        Self::Language,
        Self::Pilot,
        Self::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArtsCraft => "Arts/Craft",
            Self::Firearms => "Firearms",
            Self::Fighting => "Fighting",
            Self::Language => "Language",
            Self::Pilot => "Pilot",
            Self::Science => "Science",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a catalog skill derives its starting value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillValue {
    /// Flat starting percentage
    Base(i64),
    /// Attribute expression, e.g. `DEX/2`
    Formula(&'static str),
}

/// One entry of the built-in reference catalog
#[derive(Debug, Clone, Copy)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub category: Option<SkillCategory>,
    pub value: SkillValue,
}

const fn base(name: &'static str, value: i64) -> SkillDefinition {
    SkillDefinition {
        name,
        category: None,
        value: SkillValue::Base(value),
    }
}

const fn formula(name: &'static str, expr: &'static str) -> SkillDefinition {
    SkillDefinition {
        name,
        category: None,
        value: SkillValue::Formula(expr),
    }
}

const fn grouped(name: &'static str, category: SkillCategory, value: i64) -> SkillDefinition {
    SkillDefinition {
        name,
        category: Some(category),
        value: SkillValue::Base(value),
    }
}

const fn grouped_formula(
    name: &'static str,
    category: SkillCategory,
    expr: &'static str,
) -> SkillDefinition {
    SkillDefinition {
        name,
        category: Some(category),
        value: SkillValue::Formula(expr),
    }
}

// Skill names are lookup keys for existing character files and are kept
// exactly as recorded, including their historical spellings.
const CATALOG: &[SkillDefinition] = &[
    base("Accounting", 5),
    base("Anthropology", 1),
    base("Appraise", 5),
    base("Archaeology", 1),
    base("Charm", 5),
    base("Climb", 20),
    base("Credit Rating", 0),
    base("Cthulhu Mythos", 0),
    base("Disguise", 5),
    formula("Dodge", "DEX/2"),
    base("Drive Auto", 20),
    base("Elec. Repair", 10),
    base("Fast Talk", 5),
    grouped("Brawl", SkillCategory::Fighting, 25),
    grouped("Handgun", SkillCategory::Firearms, 20),
    grouped("Rifle/Shotgun", SkillCategory::Firearms, 25),
    base("First Aid", 30),
    base("History", 5),
    base("Intimidate", 15),
    base("Jump", 20),
    grouped_formula("Language (Own)", SkillCategory::Language, "EDU"),
    base("Law", 5),
    base("Library Use", 20),
    base("Listen", 20),
    base("Locksmith", 1),
    base("Mech. Repair", 10),
    base("Medicine", 1),
    base("Natual World", 10),
    base("Navigate", 10),
    base("Occult", 5),
    base("Op. Heavy Machinary", 1),
    base("Persuade", 10),
    base("Psychoanalysis", 1),
    base("Psychology", 10),
    base("Ride", 5),
    base("Sleight of Hand", 10),
    base("Spot Hidden", 25),
    base("Stealth", 20),
    base("Swim", 20),
    base("Throw", 20),
    base("Track", 10),
];

/// The built-in reference skill catalog
pub fn reference_catalog() -> &'static [SkillDefinition] {
    CATALOG
}

/// Look up a catalog definition by skill name
pub fn catalog_definition(name: &str) -> Option<&'static SkillDefinition> {
    CATALOG.iter().find(|def| def.name == name)
}

/// Starting percentages an investigator may allocate across skills.
/// Reported next to partition sizes for bookkeeping; never enforced.
pub const SKILL_POINT_ALLOCATION: [i64; 9] = [70, 60, 60, 50, 50, 50, 40, 40, 40];

/// A fully resolved skill on the final sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    /// Category as recorded; unknown categories survive with a warning and
    /// partition under their own name
    pub category: Option<String>,
    pub value: i64,
}

/// The resolved skill set, partitioned into the base section and the
/// named-category sections
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    base: BTreeMap<String, i64>,
    categories: BTreeMap<String, BTreeMap<String, i64>>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: SkillEntry) {
        match entry.category {
            Some(category) => {
                self.categories
                    .entry(category)
                    .or_default()
                    .insert(entry.name, entry.value);
            }
            None => {
                self.base.insert(entry.name, entry.value);
            }
        }
    }

    /// Skills with no category, ordered by name
    pub fn base(&self) -> &BTreeMap<String, i64> {
        &self.base
    }

    /// Named-category partitions, ordered by category then name
    pub fn categories(&self) -> &BTreeMap<String, BTreeMap<String, i64>> {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.base.len() + self.categories.values().map(BTreeMap::len).sum::<usize>()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
