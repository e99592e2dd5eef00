use crate::catalog::flora::Forest;
use crate::catalog::Catalog;
use crate::document::block::BlockState;
use crate::document::feature::{ConfiguredFeature, FeatureConfig};
use crate::document::forest::{DeadEntry, ForestClimate, ForestEntryConfig};
use crate::document::ident::ResourceLocation;
use crate::document::vein::BlockEntry;
use crate::document::{feature_id, FeatureRole};
use crate::error::Result;

use super::{FeatureBundle, Layer};

const FOREST_ENTRY: &str = "tfc:forest_entry";
const DEAD_FALLEN_TREE_CHANCE: u32 = 8;

/// Live and dead forest entries for one tree.
pub struct ForestLayer<'a> {
    catalog: &'a Catalog,
    ns: &'a str,
}

impl<'a> ForestLayer<'a> {
    pub fn new(catalog: &'a Catalog, ns: &'a str) -> Self {
        Self { catalog, ns }
    }

    fn entry(&self, forest: &Forest) -> Result<ForestEntryConfig> {
        let ns = self.ns;
        let tree = self.catalog.wood(forest.tree)?.name;
        let c = forest.climate;

        let mut groundcover = vec![BlockEntry {
            block: format!("{ns}:wood/twig/{tree}"),
        }];
        if tree != "palm" {
            groundcover.push(BlockEntry {
                block: format!("{ns}:wood/fallen_leaves/{tree}"),
            });
        }
        if tree == "pine" {
            groundcover.push(BlockEntry {
                block: format!("{ns}:groundcover/pinecone"),
            });
        }

        let falls = !matches!(tree, "acacia" | "willow");
        let bush = !matches!(tree, "palm" | "rosewood" | "sycamore");

        Ok(ForestEntryConfig {
            climate: ForestClimate {
                min_temperature: c.min_temp,
                max_temperature: c.max_temp,
                min_rainfall: c.min_rain,
                max_rainfall: c.max_rain,
            },
            groundcover,
            normal_tree: format!("{ns}:tree/{tree}"),
            dead_tree: format!("{ns}:tree/{tree}_dead"),
            krummholz: forest.krummholz.then(|| format!("{ns}:tree/{tree}_krummholz")),
            old_growth_chance: forest.old_growth_chance,
            spoiler_old_growth_chance: forest.spoiler_chance,
            floating: forest.floating,
            fallen_log: falls.then(|| format!("{ns}:wood/log/{tree}")),
            fallen_leaves: falls.then(|| format!("{ns}:wood/fallen_leaves/{tree}")),
            fallen_tree_chance: (!falls).then_some(0),
            bush_log: if bush {
                Some(BlockState::parse(&format!(
                    "{ns}:wood/wood/{tree}[branch_direction=down,axis=y]"
                ))?)
            } else {
                None
            },
            bush_leaves: bush.then(|| format!("{ns}:wood/leaves/{tree}")),
            old_growth_tree: forest.old_growth.then(|| format!("{ns}:tree/{tree}_large")),
            dead: None,
        })
    }
}

impl Layer<&Forest, Result<FeatureBundle>> for ForestLayer<'_> {
    fn generate(&self, forest: &Forest) -> Result<FeatureBundle> {
        let base = ResourceLocation::new(self.ns, format!("tree/{}", forest.tree));
        let live = self.entry(forest)?;
        let mut dead = ForestEntryConfig {
            floating: None,
            ..live.clone()
        };
        let trailing_chance = match dead.fallen_tree_chance {
            Some(_) => {
                dead.fallen_tree_chance = Some(DEAD_FALLEN_TREE_CHANCE);
                None
            }
            None => Some(DEAD_FALLEN_TREE_CHANCE),
        };
        dead.dead = Some(DeadEntry {
            dead_chance: 1,
            fallen_tree_chance: trailing_chance,
        });

        let mut bundle = FeatureBundle::default();
        bundle.push(ConfiguredFeature::new(
            feature_id(&base, FeatureRole::Entry),
            FOREST_ENTRY,
            FeatureConfig::ForestEntry(Box::new(live)),
        ));
        bundle.push(ConfiguredFeature::new(
            feature_id(&base, FeatureRole::DeadEntry),
            FOREST_ENTRY,
            FeatureConfig::ForestEntry(Box::new(dead)),
        ));
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::ForestLayer;
    use crate::catalog::Catalog;
    use crate::document::ident::ResourceLocation;
    use crate::document::Document;
    use crate::worldgen::Layer;
    use serde_json::{json, Value};

    fn entries(tree: &str) -> (Value, Value) {
        let catalog = Catalog::builtin().unwrap();
        let forest = catalog.forests.iter().find(|f| f.tree == tree).unwrap();
        let bundle = ForestLayer::new(&catalog, "tfc").generate(forest).unwrap();
        let get = |path: &str| {
            Document::from(bundle.configured(&ResourceLocation::new("tfc", path)).unwrap().clone())
                .to_json()
                .unwrap()
        };
        (
            get(&format!("tree/{tree}_entry")),
            get(&format!("tree/dead_{tree}_entry")),
        )
    }

    #[test]
    fn oak_entry_document() {
        let (live, _) = entries("oak");
        assert_eq!(
            live,
            json!({
                "type": "tfc:forest_entry",
                "config": {
                    "climate": {
                        "min_temperature": -7.0,
                        "max_temperature": 12.0,
                        "min_rainfall": 180.0,
                        "max_rainfall": 430.0
                    },
                    "groundcover": [
                        {"block": "tfc:wood/twig/oak"},
                        {"block": "tfc:wood/fallen_leaves/oak"}
                    ],
                    "normal_tree": "tfc:tree/oak",
                    "dead_tree": "tfc:tree/oak_dead",
                    "fallen_log": "tfc:wood/log/oak",
                    "fallen_leaves": "tfc:wood/fallen_leaves/oak",
                    "bush_log": {
                        "Name": "tfc:wood/wood/oak",
                        "Properties": {"branch_direction": "down", "axis": "y"}
                    },
                    "bush_leaves": "tfc:wood/leaves/oak",
                    "old_growth_tree": "tfc:tree/oak_large"
                }
            })
        );
    }

    #[test]
    fn dead_entry_overrides_chances_and_drops_floating() {
        let (live, dead) = entries("mangrove");
        assert_eq!(live["config"]["floating"], json!(true));
        assert!(dead["config"].get("floating").is_none());
        assert_eq!(dead["config"]["dead_chance"], json!(1));
        assert_eq!(dead["config"]["fallen_tree_chance"], json!(8));
    }

    fn keys(entry: &Value) -> Vec<String> {
        entry["config"].as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn dead_entry_appends_chances_after_live_fields() {
        let (_, dead) = entries("oak");
        let oak_keys = keys(&dead);
        assert_eq!(&oak_keys[oak_keys.len() - 3..], ["old_growth_tree", "dead_chance", "fallen_tree_chance"]);

        let (live, dead) = entries("acacia");
        let dead_keys = keys(&dead);
        assert_eq!(dead_keys.last().unwrap(), "dead_chance");
        assert_eq!(
            dead_keys.iter().position(|k| k == "fallen_tree_chance"),
            keys(&live).iter().position(|k| k == "fallen_tree_chance")
        );
        assert_eq!(dead["config"]["fallen_tree_chance"], json!(8));
    }

    #[test]
    fn tree_specific_groundcover_and_falls() {
        let (pine, _) = entries("pine");
        let cover = pine["config"]["groundcover"].as_array().unwrap();
        assert_eq!(cover.last().unwrap(), &json!({"block": "tfc:groundcover/pinecone"}));
        assert_eq!(pine["config"]["krummholz"], json!("tfc:tree/pine_krummholz"));

        let (acacia, _) = entries("acacia");
        assert_eq!(acacia["config"]["fallen_tree_chance"], json!(0));
        assert!(acacia["config"].get("fallen_log").is_none());

        let (palm, _) = entries("palm");
        assert_eq!(palm["config"]["groundcover"].as_array().unwrap().len(), 1);
        assert!(palm["config"].get("bush_log").is_none());
    }
}
