use serde::Serialize;

/// One entry of a weighted block table. Minerals carry no weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    pub block: String,
}

impl WeightedBlock {
    pub fn weighted(weight: u32, block: impl Into<String>) -> Self {
        Self {
            weight: Some(weight),
            block: block.into(),
        }
    }

    pub fn single(block: impl Into<String>) -> Self {
        Self {
            weight: None,
            block: block.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReplacement {
    pub replace: Vec<String>,
    pub with: Vec<WeightedBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockEntry {
    pub block: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorConfig {
    pub rarity: u32,
    pub depth: u32,
    pub underground_rarity: u32,
    pub underground_count: u32,
    pub blocks: Vec<BlockEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VeinShapeConfig {
    Cluster {
        size: u32,
    },
    Disc {
        size: u32,
        height: u32,
    },
    Pipe {
        min_skew: u32,
        max_skew: u32,
        min_slant: u32,
        max_slant: u32,
        sign: u32,
        height: u32,
        radius: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VeinConfig {
    pub rarity: u32,
    pub density: f64,
    pub min_y: i32,
    pub max_y: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_offset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biomes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near_lava: Option<bool>,
    #[serde(flatten)]
    pub shape: VeinShapeConfig,
    pub random_name: String,
    pub blocks: Vec<BlockReplacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<IndicatorConfig>,
}

#[cfg(test)]
mod tests {
    use super::{VeinConfig, VeinShapeConfig, WeightedBlock};
    use serde_json::json;

    #[test]
    fn mineral_entry_has_no_weight_field() {
        assert_eq!(
            serde_json::to_value(WeightedBlock::single("tfc:ore/graphite/gneiss")).unwrap(),
            json!({"block": "tfc:ore/graphite/gneiss"})
        );
    }

    #[test]
    fn shape_fields_flatten_after_common_fields() {
        let config = VeinConfig {
            rarity: 60,
            density: 0.4,
            min_y: -64,
            max_y: 0,
            project: None,
            project_offset: None,
            biomes: None,
            near_lava: None,
            shape: VeinShapeConfig::Disc { size: 20, height: 4 },
            random_name: "graphite".to_string(),
            blocks: vec![],
            indicator: None,
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(
            text,
            r#"{"rarity":60,"density":0.4,"min_y":-64,"max_y":0,"size":20,"height":4,"random_name":"graphite","blocks":[]}"#
        );
    }
}
