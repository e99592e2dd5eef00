use serde::Serialize;

use super::block::BlockState;
use super::vein::BlockEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestClimate {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub min_rainfall: f64,
    pub max_rainfall: f64,
}

/// Config of a `tfc:forest_entry` feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestEntryConfig {
    pub climate: ForestClimate,
    pub groundcover: Vec<BlockEntry>,
    pub normal_tree: String,
    pub dead_tree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub krummholz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_growth_chance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler_old_growth_chance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallen_log: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallen_leaves: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallen_tree_chance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bush_log: Option<BlockState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bush_leaves: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_growth_tree: Option<String>,
    #[serde(flatten)]
    pub dead: Option<DeadEntry>,
}

/// Fields only a dead forest entry carries. They trail the live fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeadEntry {
    pub dead_chance: u32,
    /// Only when the live entry has no fallen tree chance of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallen_tree_chance: Option<u32>,
}
