use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::biome::{
    BiomeCategory, BiomeDocument, BiomeEffects, Carvers, SpawnCategory, SpawnCost, Spawners,
};
use crate::document::emitter::lang;
use crate::document::ident::ResourceLocation;
use crate::document::{Document, TagKind};

use super::spawner::{
    spawners, LAKE_AMBIENT, LAKE_CREATURES, LAND_CREATURES, OCEAN_AMBIENT, OCEAN_CREATURES, RIVER_AMBIENT,
    SALT_MARSH_AMBIENT, SHORE_CREATURES, UNDERGROUND_WATER_CREATURES, VANILLA_MONSTERS,
};
use super::{FeatureBundle, Layer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OceanMode {
    #[default]
    No,
    Yes,
    /// Ocean and land features together.
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LakeMode {
    /// Lakes everywhere except oceans.
    #[default]
    Default,
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotSpring {
    #[default]
    Off,
    Empty,
    Active,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiomeFlags {
    pub name: String,
    pub category: BiomeCategory,
    #[serde(default)]
    pub boulders: bool,
    #[serde(default = "default_true")]
    pub spawnable: bool,
    #[serde(default)]
    pub ocean: OceanMode,
    #[serde(default)]
    pub lake: LakeMode,
    #[serde(default)]
    pub volcano: bool,
    #[serde(default)]
    pub reef: bool,
    #[serde(default)]
    pub hot_spring: HotSpring,
}

impl BiomeFlags {
    pub fn new(name: &str, category: BiomeCategory) -> Self {
        Self {
            name: name.to_string(),
            category,
            boulders: false,
            spawnable: true,
            ocean: OceanMode::No,
            lake: LakeMode::Default,
            volcano: false,
            reef: false,
            hot_spring: HotSpring::Off,
        }
    }

    pub fn boulders(mut self) -> Self {
        self.boulders = true;
        self
    }

    pub fn unspawnable(mut self) -> Self {
        self.spawnable = false;
        self
    }

    pub fn ocean(mut self, ocean: OceanMode) -> Self {
        self.ocean = ocean;
        self
    }

    pub fn lake(mut self, lake: LakeMode) -> Self {
        self.lake = lake;
        self
    }

    pub fn volcano(mut self) -> Self {
        self.volcano = true;
        self
    }

    pub fn reef(mut self) -> Self {
        self.reef = true;
        self
    }

    pub fn hot_spring(mut self, hot_spring: HotSpring) -> Self {
        self.hot_spring = hot_spring;
        self
    }
}

/// A composed biome: the derived land/ocean/lake switches and everything
/// emitted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeComposition {
    pub land: bool,
    pub ocean: bool,
    pub lake: bool,
    pub bundle: FeatureBundle,
}

impl BiomeComposition {
    pub fn biome(&self) -> Option<&BiomeDocument> {
        self.bundle.documents.iter().find_map(|d| match d {
            Document::Biome { biome, .. } => Some(biome.as_ref()),
            _ => None,
        })
    }
}

pub struct BiomeLayer<'a> {
    ns: &'a str,
}

impl<'a> BiomeLayer<'a> {
    pub fn new(ns: &'a str) -> Self {
        Self { ns }
    }

    fn id(&self, path: &str) -> ResourceLocation {
        ResourceLocation::new(self.ns, path)
    }

    fn feature_tag(&self, path: &str) -> String {
        self.id(path).tag_ref()
    }

    fn feature(&self, path: &str) -> String {
        self.id(path).to_string()
    }
}

impl Layer<&BiomeFlags, BiomeComposition> for BiomeLayer<'_> {
    fn generate(&self, flags: &BiomeFlags) -> BiomeComposition {
        let ns = self.ns;
        let name = flags.name.as_str();
        let category = flags.category;

        let mut spawns = Spawners::default();
        let mut soil_discs = Vec::new();
        let mut large_features = Vec::new();
        let mut surface_decorations = Vec::new();
        let mut costs = BTreeMap::new();

        let (land, ocean) = match flags.ocean {
            OceanMode::Both => (true, true),
            OceanMode::Yes => (false, true),
            OceanMode::No => (true, false),
        };
        let lake = match flags.lake {
            LakeMode::Default => !ocean,
            LakeMode::Yes => true,
            LakeMode::No => false,
        };

        if flags.boulders {
            large_features.push(self.feature_tag("feature/boulders"));
        }

        if ocean {
            large_features.push(self.feature_tag("feature/icebergs"));
            if name != "tidal_flats" {
                surface_decorations.push(self.feature_tag("feature/ocean_plants"));
            }
            if name == "shore" {
                surface_decorations.push(self.feature("plant/beachgrass_patch"));
                surface_decorations.push(self.feature("plant/sea_palm_patch"));
            }
            if category == BiomeCategory::Beach {
                surface_decorations.push(self.feature_tag("feature/shore_decorations"));
                spawns.set(SpawnCategory::Creature, spawners(ns, SHORE_CREATURES));
            } else {
                surface_decorations.push(self.feature_tag("feature/ocean_decorations"));
            }
            spawns.set(SpawnCategory::WaterAmbient, spawners(ns, OCEAN_AMBIENT));
            spawns.set(SpawnCategory::WaterCreature, spawners(ns, OCEAN_CREATURES));
            spawns.set(
                SpawnCategory::UndergroundWaterCreature,
                spawners(ns, UNDERGROUND_WATER_CREATURES),
            );
            costs.insert(
                self.feature("octopoteuthis"),
                SpawnCost {
                    energy_budget: 0.12,
                    charge: 1.0,
                },
            );
        }

        if matches!(category, BiomeCategory::River | BiomeCategory::Lake) {
            soil_discs.push(self.feature_tag("feature/ore_deposits"));
        }
        if matches!(category, BiomeCategory::Lake | BiomeCategory::Swamp | BiomeCategory::River) {
            surface_decorations.push(self.feature("plant/dry_phragmite"));
        }
        if category == BiomeCategory::River {
            spawns.set(SpawnCategory::WaterAmbient, spawners(ns, RIVER_AMBIENT));
        }

        if name == "deep_ocean_trench" {
            large_features.push(self.feature("lava_hot_spring"));
        }

        // Water ambient is a single slot; the last matching rule wins.
        if name.contains("lake") {
            spawns.set(SpawnCategory::WaterAmbient, spawners(ns, LAKE_AMBIENT));
            spawns.set(SpawnCategory::WaterCreature, spawners(ns, LAKE_CREATURES));
        }
        if category == BiomeCategory::Swamp {
            spawns.set(SpawnCategory::WaterAmbient, spawners(ns, LAKE_AMBIENT));
        }
        if name == "salt_marsh" {
            spawns.set(SpawnCategory::WaterAmbient, spawners(ns, SALT_MARSH_AMBIENT));
        }
        spawns.set(SpawnCategory::Monster, spawners(ns, VANILLA_MONSTERS));

        if flags.reef {
            large_features.push(self.feature("coral_reef"));
        }

        if land {
            soil_discs.push(self.feature_tag("feature/soil_discs"));
            if name.contains("salt_marsh") {
                large_features.push(self.feature("mangrove_forest"));
                surface_decorations.push(self.feature("plant/marsh_jungle_vines"));
            } else {
                large_features.push(self.feature("forest"));
            }
            if name.contains("lowlands") {
                large_features.push(self.feature("dead_forest"));
            }
            for feature in ["rare_bamboo", "bamboo", "cave_vegetation"] {
                large_features.push(self.feature(feature));
            }
            surface_decorations.push(self.feature_tag("feature/land_plants"));
            spawns.extend(SpawnCategory::Creature, spawners(ns, LAND_CREATURES));
        }

        if flags.volcano {
            large_features.push(self.feature_tag("feature/volcanoes"));
        }
        match flags.hot_spring {
            HotSpring::Off => {}
            HotSpring::Empty => large_features.push(self.feature("random_empty_hot_spring")),
            HotSpring::Active => large_features.push(self.feature("random_active_hot_spring")),
        }

        // Stage order mirrors the engine's generation steps.
        let features = vec![
            self.feature_tag("in_biome/erosion"),
            self.feature_tag(if lake {
                "in_biome/all_lakes"
            } else {
                "in_biome/underground_lakes"
            }),
            self.feature_tag(&format!("in_biome/soil_discs/{name}")),
            self.feature_tag("in_biome/underground_structures"),
            self.feature_tag("in_biome/surface_structures"),
            self.feature_tag("in_biome/strongholds"),
            self.feature_tag("in_biome/veins"),
            self.feature_tag("in_biome/underground_decoration"),
            self.feature_tag(&format!("in_biome/large_features/{name}")),
            self.feature_tag(&format!("in_biome/surface_decoration/{name}")),
            self.feature_tag("in_biome/top_layer_modification"),
        ];

        let biome_id = self.id(name);
        let mut bundle = FeatureBundle::default();
        for (stage, members) in [
            ("soil_discs", soil_discs),
            ("large_features", large_features),
            ("surface_decoration", surface_decorations),
        ] {
            bundle.tag(
                TagKind::PlacedFeature,
                self.id(&format!("in_biome/{stage}/{name}")),
                members,
            );
        }

        let biome_tags = [
            ("is_volcanic", flags.volcano),
            ("is_lake", name.contains("lake")),
            ("is_river", name.contains("river")),
            ("is_ocean", name.contains("ocean") && !name.contains("mountain")),
        ];
        for (tag, applies) in biome_tags {
            if applies {
                bundle.tag(TagKind::Biome, self.id(tag), vec![biome_id.to_string()]);
            }
        }

        bundle.lang.push((format!("biome.{ns}.{name}"), lang(name)));
        bundle.push(Document::Biome {
            id: biome_id,
            biome: Box::new(BiomeDocument {
                has_precipitation: true,
                category,
                temperature: 0.5,
                temperature_modifier: "none".to_string(),
                downfall: 0.5,
                effects: BiomeEffects::default(),
                carvers: Carvers {
                    air: vec![self.feature("cave"), self.feature("canyon")],
                    liquid: vec![],
                },
                features,
                starts: vec![],
                spawners: spawns,
                player_spawn_friendly: flags.spawnable,
                creature_spawn_probability: 0.08,
                parent: None,
                spawn_costs: costs,
            }),
        });

        BiomeComposition {
            land,
            ocean,
            lake,
            bundle,
        }
    }
}

pub fn compose_biome(ns: &str, flags: &BiomeFlags) -> BiomeComposition {
    BiomeLayer::new(ns).generate(flags)
}

pub fn builtin_biomes() -> Vec<BiomeFlags> {
    use BiomeCategory::*;

    let river = |name: &str| BiomeFlags::new(name, River).unspawnable();
    let lake = |name: &str| BiomeFlags::new(name, Lake).unspawnable();

    vec![
        BiomeFlags::new("badlands", Mesa),
        BiomeFlags::new("inverted_badlands", Mesa),
        BiomeFlags::new("canyons", Plains)
            .boulders()
            .volcano()
            .hot_spring(HotSpring::Active),
        BiomeFlags::new("low_canyons", Swamp)
            .boulders()
            .hot_spring(HotSpring::Empty),
        BiomeFlags::new("plains", Plains),
        BiomeFlags::new("plateau", ExtremeHills)
            .boulders()
            .hot_spring(HotSpring::Empty),
        BiomeFlags::new("hills", Plains),
        BiomeFlags::new("rolling_hills", Plains)
            .boulders()
            .hot_spring(HotSpring::Empty),
        lake("lake"),
        BiomeFlags::new("lowlands", Swamp).lake(LakeMode::No),
        BiomeFlags::new("salt_marsh", Swamp).lake(LakeMode::No),
        BiomeFlags::new("mountains", ExtremeHills),
        BiomeFlags::new("volcanic_mountains", ExtremeHills)
            .volcano()
            .hot_spring(HotSpring::Active),
        BiomeFlags::new("old_mountains", ExtremeHills).hot_spring(HotSpring::Active),
        BiomeFlags::new("oceanic_mountains", ExtremeHills).ocean(OceanMode::Both),
        BiomeFlags::new("volcanic_oceanic_mountains", ExtremeHills)
            .unspawnable()
            .ocean(OceanMode::Both)
            .volcano(),
        BiomeFlags::new("ocean", Ocean).unspawnable().ocean(OceanMode::Yes),
        BiomeFlags::new("ocean_reef", Ocean)
            .unspawnable()
            .ocean(OceanMode::Yes)
            .reef(),
        BiomeFlags::new("deep_ocean", Ocean).unspawnable().ocean(OceanMode::Yes),
        BiomeFlags::new("deep_ocean_trench", Ocean)
            .unspawnable()
            .ocean(OceanMode::Yes),
        river("river"),
        BiomeFlags::new("shore", Beach).ocean(OceanMode::Both),
        BiomeFlags::new("tidal_shore", Beach).ocean(OceanMode::Both),
        river("mountain_river"),
        river("volcanic_mountain_river").volcano(),
        river("old_mountain_river"),
        river("oceanic_mountain_river"),
        river("volcanic_oceanic_mountain_river").volcano(),
        lake("mountain_lake"),
        lake("volcanic_mountain_lake").volcano(),
        lake("old_mountain_lake"),
        lake("oceanic_mountain_lake"),
        lake("volcanic_oceanic_mountain_lake").volcano(),
        lake("plateau_lake"),
    ]
}
