use serde_json::json;

use crate::catalog::flora::{Berry, BushType, Crop, Fruit};
use crate::document::block::BlockState;
use crate::document::decorator::{ClimateFilter, Decorator, Heightmap};
use crate::document::feature::{ConfiguredFeature, FeatureConfig, PlacedFeature, RandomPatchConfig, StateProvider};
use crate::document::ident::ResourceLocation;
use crate::document::{feature_id, FeatureRole, TagKind};
use crate::error::Result;

use super::plant::{assemble_patch_feature, PatchConfig, WaterMode};
use super::{FeatureBundle, Layer};

/// Wild crop patches, tagged into `feature/crops`.
pub struct CropLayer<'a> {
    ns: &'a str,
}

impl<'a> CropLayer<'a> {
    pub fn new(ns: &'a str) -> Self {
        Self { ns }
    }
}

impl Layer<&Crop, Result<FeatureBundle>> for CropLayer<'_> {
    fn generate(&self, crop: &Crop) -> Result<FeatureBundle> {
        let ns = self.ns;
        let id = ResourceLocation::new(ns, format!("crop/wild_crop/{}", crop.name));
        let patch = feature_id(&id, FeatureRole::Patch);
        let singular = feature_id(&id, FeatureRole::Singular);
        let block = format!("{ns}:wild_crop/{}", crop.name);

        let climate = ClimateFilter::from(crop.climate).forest(crop.min_forest, crop.max_forest);

        let mut bundle = FeatureBundle::default();
        bundle.push(ConfiguredFeature::new(
            patch.clone(),
            "minecraft:random_patch",
            FeatureConfig::RandomPatch(RandomPatchConfig {
                tries: Some(6),
                xz_spread: 5,
                y_spread: 1,
                feature: singular.clone(),
            }),
        ));
        bundle.push(ConfiguredFeature::new(
            singular.clone(),
            "simple_block",
            FeatureConfig::SimpleBlock {
                to_place: StateProvider::Simple {
                    state: BlockState::new(block.clone()),
                },
            },
        ));
        bundle.push(PlacedFeature::of(
            &patch,
            vec![Decorator::chance(80), Decorator::InSquare, Decorator::climate(climate)],
        ));
        bundle.push(PlacedFeature::of(
            &singular,
            vec![
                Decorator::heightmap(Heightmap::WorldSurfaceWg),
                Decorator::replaceable(),
                Decorator::would_survive(BlockState::new(block)),
            ],
        ));
        bundle.tag(
            TagKind::PlacedFeature,
            ResourceLocation::new(ns, "feature/crops"),
            vec![patch.to_string()],
        );
        Ok(bundle)
    }
}

/// Berry bush patches, tagged into `feature/berry_bushes`.
pub struct BerryLayer<'a> {
    ns: &'a str,
}

impl<'a> BerryLayer<'a> {
    pub fn new(ns: &'a str) -> Self {
        Self { ns }
    }
}

impl Layer<&Berry, Result<FeatureBundle>> for BerryLayer<'_> {
    fn generate(&self, berry: &Berry) -> Result<FeatureBundle> {
        let ns = self.ns;
        let id = ResourceLocation::new(ns, format!("plant/{}_bush", berry.name));
        let block = format!("{ns}:plant/{}_bush", berry.name);

        let patch = match berry.kind {
            BushType::Stationary => PatchConfig::new(format!("{block}[lifecycle=healthy,stage=0]"), 1, 15).tries(4),
            BushType::Waterlogged => PatchConfig::new(format!("{block}[lifecycle=healthy,stage=0]"), 1, 15)
                .tries(4)
                .water(WaterMode::Fresh),
            BushType::Spreading => PatchConfig::new(block.clone(), 1, 15)
                .tries(4)
                .custom("tfc:spreading_bush", json!({"block": block})),
        };
        let climate = ClimateFilter {
            fuzzy: Some(true),
            ..ClimateFilter::from(berry.climate)
        }
        .forest(Some(berry.min_forest), Some(berry.max_forest));

        let mut bundle = assemble_patch_feature(
            &id,
            &patch,
            vec![Decorator::chance(20), Decorator::InSquare, Decorator::climate(climate)],
            vec![],
            true,
        )?;
        bundle.tag(
            TagKind::PlacedFeature,
            ResourceLocation::new(ns, "feature/berry_bushes"),
            vec![feature_id(&id, FeatureRole::Patch).to_string()],
        );
        Ok(bundle)
    }
}

/// Fruit trees, one configured and placed feature each, tagged into
/// `feature/fruit_trees`.
pub struct FruitTreeLayer<'a> {
    ns: &'a str,
}

impl<'a> FruitTreeLayer<'a> {
    pub fn new(ns: &'a str) -> Self {
        Self { ns }
    }
}

impl Layer<&Fruit, Result<FeatureBundle>> for FruitTreeLayer<'_> {
    fn generate(&self, fruit: &Fruit) -> Result<FeatureBundle> {
        let ns = self.ns;
        let name = fruit.name;
        let id = ResourceLocation::new(ns, format!("plant/{name}_tree"));

        let configured = if name == "banana" {
            ConfiguredFeature::new(
                id.clone(),
                "tfc:bananas",
                FeatureConfig::State {
                    state: BlockState::parse(&format!("{ns}:plant/banana_plant[stage=0]"))?,
                },
            )
        } else {
            ConfiguredFeature::new(
                id.clone(),
                "tfc:fruit_trees",
                FeatureConfig::FruitTree {
                    leaves: BlockState::parse(&format!("{ns}:plant/{name}_leaves[lifecycle=healthy]"))?,
                    branch: BlockState::parse(&format!("{ns}:plant/{name}_growing_branch"))?,
                },
            )
        };

        let mut bundle = FeatureBundle::default();
        bundle.push(configured);
        bundle.push(PlacedFeature::of(
            &id,
            vec![
                Decorator::chance(200),
                Decorator::InSquare,
                Decorator::climate(fruit.climate),
                Decorator::heightmap(Heightmap::WorldSurfaceWg),
            ],
        ));
        bundle.tag(
            TagKind::PlacedFeature,
            ResourceLocation::new(ns, "feature/fruit_trees"),
            vec![id.to_string()],
        );
        Ok(bundle)
    }
}
