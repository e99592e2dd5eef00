use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RockCategory {
    Sedimentary,
    Metamorphic,
    IgneousExtrusive,
    IgneousIntrusive,
}

impl RockCategory {
    pub const ALL: [RockCategory; 4] = [
        RockCategory::Sedimentary,
        RockCategory::Metamorphic,
        RockCategory::IgneousExtrusive,
        RockCategory::IgneousIntrusive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RockCategory::Sedimentary => "sedimentary",
            RockCategory::Metamorphic => "metamorphic",
            RockCategory::IgneousExtrusive => "igneous_extrusive",
            RockCategory::IgneousIntrusive => "igneous_intrusive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rock {
    pub name: &'static str,
    pub category: RockCategory,
    pub sand: &'static str,
}

const fn rock(name: &'static str, category: RockCategory, sand: &'static str) -> Rock {
    Rock {
        name,
        category,
        sand,
    }
}

// Declaration order is the category expansion order.
pub const ROCKS: [Rock; 20] = [
    rock("granite", RockCategory::IgneousIntrusive, "white"),
    rock("diorite", RockCategory::IgneousIntrusive, "white"),
    rock("gabbro", RockCategory::IgneousIntrusive, "black"),
    rock("shale", RockCategory::Sedimentary, "black"),
    rock("claystone", RockCategory::Sedimentary, "brown"),
    rock("limestone", RockCategory::Sedimentary, "white"),
    rock("conglomerate", RockCategory::Sedimentary, "green"),
    rock("dolomite", RockCategory::Sedimentary, "black"),
    rock("chert", RockCategory::Sedimentary, "yellow"),
    rock("chalk", RockCategory::Sedimentary, "white"),
    rock("rhyolite", RockCategory::IgneousExtrusive, "red"),
    rock("basalt", RockCategory::IgneousExtrusive, "red"),
    rock("andesite", RockCategory::IgneousExtrusive, "red"),
    rock("dacite", RockCategory::IgneousExtrusive, "yellow"),
    rock("quartzite", RockCategory::Metamorphic, "white"),
    rock("slate", RockCategory::Metamorphic, "yellow"),
    rock("phyllite", RockCategory::Metamorphic, "brown"),
    rock("schist", RockCategory::Metamorphic, "green"),
    rock("gneiss", RockCategory::Metamorphic, "green"),
    rock("marble", RockCategory::Metamorphic, "yellow"),
];

/// Replaces every category entry with all rocks of that category, in
/// declaration order. Concrete names pass through unchanged and duplicates
/// are kept.
pub fn expand_rocks<'a, S: AsRef<str>>(rocks: &'a [Rock], entries: &[S]) -> Result<Vec<&'a str>> {
    let mut expanded = Vec::new();
    for entry in entries {
        let entry = entry.as_ref();
        if let Some(rock) = rocks.iter().find(|r| r.name == entry) {
            expanded.push(rock.name);
        } else if let Some(category) = RockCategory::from_name(entry) {
            expanded.extend(
                rocks
                    .iter()
                    .filter(|r| r.category == category)
                    .map(|r| r.name),
            );
        } else {
            return Err(GenError::UnknownRock(entry.to_string()));
        }
    }
    Ok(expanded)
}
