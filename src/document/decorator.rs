use serde::Serialize;

use crate::catalog::flora::{Climate, ForestType};

use super::block::BlockState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Heightmap {
    OceanFloorWg,
    WorldSurfaceWg,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum BlockPredicate {
    #[serde(rename = "matching_blocks")]
    MatchingBlocks { blocks: Vec<String> },
    #[serde(rename = "would_survive")]
    WouldSurvive { state: BlockState },
    #[serde(rename = "tfc:would_survive_with_fluid")]
    WouldSurviveWithFluid { state: BlockState },
    #[serde(rename = "tfc:replaceable")]
    Replaceable,
    #[serde(rename = "tfc:air_or_empty_fluid")]
    AirOrEmptyFluid,
}

/// Climate envelope filter. Unset bounds are left out of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClimateFilter {
    #[serde(rename = "min_temperature", skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<f64>,
    #[serde(rename = "max_temperature", skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<f64>,
    #[serde(rename = "min_rainfall", skip_serializing_if = "Option::is_none")]
    pub min_rain: Option<f64>,
    #[serde(rename = "max_rainfall", skip_serializing_if = "Option::is_none")]
    pub max_rain: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_forest: Option<ForestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_forest: Option<ForestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<bool>,
}

impl ClimateFilter {
    pub fn forest(mut self, min: Option<ForestType>, max: Option<ForestType>) -> Self {
        self.min_forest = min;
        self.max_forest = max;
        self
    }
}

impl From<Climate> for ClimateFilter {
    fn from(c: Climate) -> Self {
        Self {
            min_temp: Some(c.min_temp),
            max_temp: Some(c.max_temp),
            min_rain: Some(c.min_rain),
            max_rain: Some(c.max_rain),
            ..Self::default()
        }
    }
}

/// One step of a placed feature's placement chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Decorator {
    #[serde(rename = "minecraft:in_square")]
    InSquare,
    #[serde(rename = "tfc:biome")]
    Biome,
    #[serde(rename = "minecraft:rarity_filter")]
    RarityFilter { chance: u32 },
    #[serde(rename = "tfc:shallow_water")]
    ShallowWater {
        max_depth: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_depth: Option<u32>,
    },
    #[serde(rename = "minecraft:heightmap")]
    Heightmap { heightmap: Heightmap },
    #[serde(rename = "tfc:climate")]
    Climate(ClimateFilter),
    #[serde(rename = "tfc:no_solid_neighbors")]
    NoSolidNeighbors,
    #[serde(rename = "block_predicate_filter")]
    BlockPredicate { predicate: BlockPredicate },
}

impl Decorator {
    pub fn chance(rarity: u32) -> Self {
        Decorator::RarityFilter { chance: rarity }
    }

    pub fn heightmap(heightmap: Heightmap) -> Self {
        Decorator::Heightmap { heightmap }
    }

    pub fn climate(filter: impl Into<ClimateFilter>) -> Self {
        Decorator::Climate(filter.into())
    }

    pub fn shallow_water(max_depth: u32, min_depth: Option<u32>) -> Self {
        Decorator::ShallowWater { max_depth, min_depth }
    }

    pub fn predicate(predicate: BlockPredicate) -> Self {
        Decorator::BlockPredicate { predicate }
    }

    pub fn replaceable() -> Self {
        Self::predicate(BlockPredicate::Replaceable)
    }

    pub fn air_or_empty_fluid() -> Self {
        Self::predicate(BlockPredicate::AirOrEmptyFluid)
    }

    pub fn matching_blocks<S: Into<String>>(blocks: impl IntoIterator<Item = S>) -> Self {
        Self::predicate(BlockPredicate::MatchingBlocks {
            blocks: blocks.into_iter().map(Into::into).collect(),
        })
    }

    pub fn would_survive(state: BlockState) -> Self {
        Self::predicate(BlockPredicate::WouldSurvive { state })
    }

    pub fn would_survive_with_fluid(state: BlockState) -> Self {
        Self::predicate(BlockPredicate::WouldSurviveWithFluid { state })
    }
}
