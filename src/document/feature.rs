use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::block::BlockState;
use super::decorator::Decorator;
use super::forest::ForestEntryConfig;
use super::ident::ResourceLocation;
use super::vein::VeinConfig;

/// What to place: `{type, config}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredFeature {
    pub id: ResourceLocation,
    pub feature: ResourceLocation,
    pub config: FeatureConfig,
}

impl ConfiguredFeature {
    /// `feature` may be bare, in which case it resolves to the `minecraft` domain.
    pub fn new(id: ResourceLocation, feature: &str, config: FeatureConfig) -> Self {
        Self {
            id,
            feature: ResourceLocation::parse(feature, "minecraft"),
            config,
        }
    }
}

/// Where and how often to place it: `{feature, placement}`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFeature {
    pub id: ResourceLocation,
    pub feature: ResourceLocation,
    pub placement: Vec<Decorator>,
}

impl PlacedFeature {
    /// A placed feature sharing the identifier of the configured feature it places.
    pub fn of(id: &ResourceLocation, placement: Vec<Decorator>) -> Self {
        Self {
            id: id.clone(),
            feature: id.clone(),
            placement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureConfig {
    RandomPatch(RandomPatchConfig),
    SimpleBlock { to_place: StateProvider },
    Block { block: String },
    State { state: BlockState },
    FruitTree { leaves: BlockState, branch: BlockState },
    Vein(Box<VeinConfig>),
    ForestEntry(Box<ForestEntryConfig>),
    Custom(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomPatchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tries: Option<u32>,
    pub xz_spread: u32,
    pub y_spread: u32,
    pub feature: ResourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum StateProvider {
    #[serde(rename = "minecraft:simple_state_provider")]
    Simple { state: BlockState },
    #[serde(rename = "tfc:random_property")]
    RandomProperty { state: BlockState, property: String },
    /// Writes its own `type`, after the noise fields.
    #[serde(untagged)]
    DualNoise(DualNoiseProvider),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalNoise {
    #[serde(rename = "firstOctave")]
    pub first_octave: i32,
    pub amplitudes: Vec<f64>,
}

impl NormalNoise {
    pub fn new(first_octave: i32, amplitude: f64) -> Self {
        Self {
            first_octave,
            amplitudes: vec![amplitude],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DualNoiseProvider {
    pub seed: i64,
    pub noise: NormalNoise,
    pub scale: f64,
    pub states: Vec<BlockState>,
    pub variety: [u32; 2],
    pub slow_noise: NormalNoise,
    pub slow_scale: f64,
}

impl Serialize for DualNoiseProvider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DualNoiseProvider", 8)?;
        state.serialize_field("seed", &self.seed)?;
        state.serialize_field("noise", &self.noise)?;
        state.serialize_field("scale", &self.scale)?;
        state.serialize_field("states", &self.states)?;
        state.serialize_field("variety", &self.variety)?;
        state.serialize_field("slow_noise", &self.slow_noise)?;
        state.serialize_field("slow_scale", &self.slow_scale)?;
        state.serialize_field("type", "minecraft:dual_noise_provider")?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfiguredFeature, FeatureConfig, RandomPatchConfig, StateProvider};
    use crate::document::block::BlockState;
    use crate::document::ident::ResourceLocation;
    use serde_json::json;

    #[test]
    fn bare_feature_type_resolves_to_minecraft() {
        let id = ResourceLocation::new("tfc", "plant/moss");
        let feature = ConfiguredFeature::new(
            id,
            "simple_block",
            FeatureConfig::SimpleBlock {
                to_place: StateProvider::Simple {
                    state: BlockState::new("tfc:plant/moss"),
                },
            },
        );
        assert_eq!(feature.feature.to_string(), "minecraft:simple_block");
    }

    #[test]
    fn random_patch_omits_unset_tries() {
        let config = FeatureConfig::RandomPatch(RandomPatchConfig {
            tries: None,
            xz_spread: 10,
            y_spread: 1,
            feature: ResourceLocation::new("tfc", "plant/moss"),
        });
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"xz_spread": 10, "y_spread": 1, "feature": "tfc:plant/moss"})
        );
    }

    #[test]
    fn random_property_provider_names_its_property() {
        let provider = StateProvider::RandomProperty {
            state: BlockState::new("tfc:plant/canna"),
            property: "age".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&provider).unwrap(),
            json!({"type": "tfc:random_property", "state": {"Name": "tfc:plant/canna"}, "property": "age"})
        );
    }
}
