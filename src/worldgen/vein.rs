use crate::catalog::vein::{Projection, Vein, VeinShape};
use crate::catalog::Catalog;
use crate::document::feature::{ConfiguredFeature, FeatureConfig, PlacedFeature};
use crate::document::ident::ResourceLocation;
use crate::document::vein::{BlockEntry, BlockReplacement, IndicatorConfig, VeinConfig, VeinShapeConfig};
use crate::document::TagKind;
use crate::error::{GenError, Result};

use super::distribution::build_ore_blocks;
use super::{FeatureBundle, Layer};

const INDICATOR_DEPTH: u32 = 35;

pub struct VeinLayer<'a> {
    catalog: &'a Catalog,
    ns: &'a str,
}

impl<'a> VeinLayer<'a> {
    pub fn new(catalog: &'a Catalog, ns: &'a str) -> Self {
        Self { catalog, ns }
    }

    fn shape(vein: &Vein) -> VeinShapeConfig {
        match vein.shape {
            VeinShape::Cluster => VeinShapeConfig::Cluster { size: vein.size },
            VeinShape::Disc => VeinShapeConfig::Disc {
                size: vein.size,
                height: vein.height,
            },
            VeinShape::Pipe => VeinShapeConfig::Pipe {
                min_skew: 5,
                max_skew: 13,
                min_slant: 0,
                max_slant: 2,
                sign: 0,
                height: vein.size,
                radius: vein.radius,
            },
        }
    }

    fn config(&self, vein: &Vein) -> Result<VeinConfig> {
        let ns = self.ns;
        let ore = self.catalog.ore(&vein.ore)?;
        let rocks = self.catalog.expand_rocks(&vein.rocks)?;

        let blocks = rocks
            .iter()
            .map(|rock| {
                Ok(BlockReplacement {
                    replace: vec![format!("{ns}:rock/raw/{rock}")],
                    with: build_ore_blocks(ns, vein, ore, rock)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let indicator = if vein.has_indicator() {
            let block = if ore.graded {
                format!("{ns}:ore/small_{}", ore.name)
            } else {
                let rock = rocks
                    .first()
                    .ok_or_else(|| GenError::NoRocks(vein.name.clone()))?;
                format!("{ns}:ore/{}/{rock}", ore.name)
            };
            Some(IndicatorConfig {
                rarity: vein.indicator_rarity,
                depth: INDICATOR_DEPTH,
                underground_rarity: vein.underground_rarity,
                underground_count: vein.underground_count,
                blocks: vec![BlockEntry { block }],
            })
        } else {
            None
        };

        let (project, project_offset) = match vein.projection {
            Projection::None => (None, None),
            Projection::Surface => (Some(true), None),
            Projection::Offset => (Some(true), Some(true)),
        };

        Ok(VeinConfig {
            rarity: vein.rarity,
            density: vein.density,
            min_y: vein.min_y,
            max_y: vein.max_y,
            project,
            project_offset,
            biomes: vein.biomes.clone(),
            near_lava: vein.near_lava.then_some(true),
            shape: Self::shape(vein),
            random_name: vein.name.clone(),
            blocks,
            indicator,
        })
    }
}

impl Layer<&Vein, Result<FeatureBundle>> for VeinLayer<'_> {
    fn generate(&self, vein: &Vein) -> Result<FeatureBundle> {
        let id = ResourceLocation::new(self.ns, format!("vein/{}", vein.name));
        let config = self.config(vein)?;

        let mut bundle = FeatureBundle::default();
        bundle.push(ConfiguredFeature::new(
            id.clone(),
            vein.shape.feature_type(),
            FeatureConfig::Vein(Box::new(config)),
        ));
        bundle.push(PlacedFeature::of(&id, vec![]));
        bundle.tag(
            TagKind::PlacedFeature,
            ResourceLocation::new(self.ns, "in_biome/veins"),
            vec![id.to_string()],
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::VeinLayer;
    use crate::catalog::vein::{Grade, Projection, Vein, VeinShape};
    use crate::catalog::Catalog;
    use crate::document::ident::ResourceLocation;
    use crate::document::Document;
    use crate::worldgen::Layer;
    use serde_json::json;

    fn vein_json(catalog: &Catalog, vein: &Vein) -> serde_json::Value {
        let bundle = VeinLayer::new(catalog, "tfc").generate(vein).unwrap();
        let id = ResourceLocation::new("tfc", format!("vein/{}", vein.name));
        Document::from(bundle.configured(&id).unwrap().clone())
            .to_json()
            .unwrap()
    }

    #[test]
    fn cluster_vein_document() {
        let catalog = Catalog::builtin().unwrap();
        let vein = Vein::builder("test_copper", "native_copper", 24, 20, 40, 130, 0.25, &["granite"])
            .grade(Grade::POOR)
            .deposits()
            .build()
            .unwrap();

        assert_eq!(
            vein_json(&catalog, &vein),
            json!({
                "type": "tfc:cluster_vein",
                "config": {
                    "rarity": 24,
                    "density": 0.25,
                    "min_y": 40,
                    "max_y": 130,
                    "size": 20,
                    "random_name": "test_copper",
                    "blocks": [{
                        "replace": ["tfc:rock/raw/granite"],
                        "with": [
                            {"weight": 70, "block": "tfc:ore/poor_native_copper/granite"},
                            {"weight": 25, "block": "tfc:ore/normal_native_copper/granite"},
                            {"weight": 5, "block": "tfc:ore/rich_native_copper/granite"},
                            {"weight": 10, "block": "tfc:deposit/native_copper/granite"}
                        ]
                    }],
                    "indicator": {
                        "rarity": 12,
                        "depth": 35,
                        "underground_rarity": 1,
                        "underground_count": 0,
                        "blocks": [{"block": "tfc:ore/small_native_copper"}]
                    }
                }
            })
        );
    }

    #[test]
    fn pipe_vein_uses_size_as_height() {
        let catalog = Catalog::builtin().unwrap();
        let diamond = catalog.veins.iter().find(|v| v.name == "diamond").unwrap();
        assert_eq!(diamond.shape, VeinShape::Pipe);
        let config = &vein_json(&catalog, diamond)["config"];
        assert_eq!(config["height"], json!(60));
        assert_eq!(config["radius"], json!(5));
        assert_eq!(config["max_skew"], json!(13));
        assert!(config.get("size").is_none());
    }

    #[test]
    fn projection_and_lava_flags() {
        let catalog = Catalog::builtin().unwrap();
        let halite = catalog.veins.iter().find(|v| v.name == "halite").unwrap();
        assert_eq!(halite.projection, Projection::Offset);
        let config = &vein_json(&catalog, halite)["config"];
        assert_eq!(config["project"], json!(true));
        assert_eq!(config["project_offset"], json!(true));
        assert!(config.get("near_lava").is_none());

        let sulfur = catalog.veins.iter().find(|v| v.name == "sulfur").unwrap();
        let config = &vein_json(&catalog, sulfur)["config"];
        assert_eq!(config["near_lava"], json!(true));
        assert!(config.get("project").is_none());
    }

    #[test]
    fn mineral_indicator_uses_first_rock() {
        let catalog = Catalog::builtin().unwrap();
        let graphite = catalog.veins.iter().find(|v| v.name == "graphite").unwrap();
        let config = &vein_json(&catalog, graphite)["config"];
        assert_eq!(config["indicator"]["blocks"], json!([{"block": "tfc:ore/graphite/gneiss"}]));
        assert_eq!(config["blocks"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn vein_joins_the_veins_tag() {
        let catalog = Catalog::builtin().unwrap();
        let vein = &catalog.veins[0];
        let bundle = VeinLayer::new(&catalog, "tfc").generate(vein).unwrap();
        assert_eq!(bundle.tags.len(), 1);
        assert_eq!(bundle.tags[0].tag.path(), "in_biome/veins");
        assert_eq!(bundle.tags[0].members, vec![format!("tfc:vein/{}", vein.name)]);
        let placed = bundle
            .placed(&ResourceLocation::new("tfc", format!("vein/{}", vein.name)))
            .unwrap();
        assert!(placed.placement.is_empty());
    }
}
