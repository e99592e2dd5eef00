use serde_json::Value;

use crate::catalog::flora::{Plant, PlantType};
use crate::document::block::BlockState;
use crate::document::decorator::{Decorator, Heightmap};
use crate::document::feature::{
    ConfiguredFeature, DualNoiseProvider, FeatureConfig, NormalNoise, PlacedFeature, RandomPatchConfig,
    StateProvider,
};
use crate::document::ident::ResourceLocation;
use crate::document::{feature_id, FeatureRole, TagKind};
use crate::error::{GenError, Result};

use super::{FeatureBundle, Layer};

/// Placement of a single plant block plus the patch that scatters it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantConfig {
    pub block: String,
    pub y_spread: u32,
    pub xz_spread: u32,
    pub tries: Option<u32>,
    pub requires_clay: bool,
    pub water_plant: bool,
    pub emergent_plant: bool,
    pub tall_plant: bool,
    pub epiphyte_plant: bool,
    pub limit_density: bool,
    pub no_solid_neighbors: bool,
    pub tall_water_plant: bool,
}

impl PlantConfig {
    pub fn new(block: impl Into<String>, y_spread: u32, xz_spread: u32) -> Self {
        Self {
            block: block.into(),
            y_spread,
            xz_spread,
            tries: None,
            requires_clay: false,
            water_plant: false,
            emergent_plant: false,
            tall_plant: false,
            epiphyte_plant: false,
            limit_density: false,
            no_solid_neighbors: false,
            tall_water_plant: false,
        }
    }

    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Picks the single feature kind. Flags are checked in a fixed order and
    /// the first one set wins.
    pub fn kind(&self) -> PlantKind {
        if self.water_plant {
            PlantKind::Water
        } else if self.emergent_plant {
            PlantKind::Emergent
        } else if self.tall_plant {
            PlantKind::Tall
        } else if self.epiphyte_plant {
            PlantKind::Epiphyte
        } else if self.tall_water_plant {
            PlantKind::SubmergedTall
        } else {
            PlantKind::Simple
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantKind {
    Water,
    Emergent,
    Tall,
    Epiphyte,
    SubmergedTall,
    Simple,
}

impl PlantKind {
    pub fn feature_type(self) -> &'static str {
        match self {
            PlantKind::Water => "tfc:block_with_fluid",
            PlantKind::Emergent => "tfc:emergent_plant",
            PlantKind::Tall => "tfc:tall_plant",
            PlantKind::Epiphyte => "tfc:epiphyte_plant",
            PlantKind::SubmergedTall => "tfc:submerged_tall_plant",
            PlantKind::Simple => "simple_block",
        }
    }

    /// Kinds placed on the floor of a body of water.
    pub fn is_aquatic(self) -> bool {
        matches!(self, PlantKind::Water | PlantKind::Emergent | PlantKind::SubmergedTall)
    }

    pub fn heightmap(self) -> Heightmap {
        if self.is_aquatic() {
            Heightmap::OceanFloorWg
        } else {
            Heightmap::WorldSurfaceWg
        }
    }

    fn survives(self, state: BlockState) -> Decorator {
        if self.is_aquatic() {
            Decorator::would_survive_with_fluid(state)
        } else {
            Decorator::would_survive(state)
        }
    }
}

fn random_patch(tries: Option<u32>, xz_spread: u32, y_spread: u32, feature: &ResourceLocation) -> FeatureConfig {
    FeatureConfig::RandomPatch(RandomPatchConfig {
        tries,
        xz_spread,
        y_spread,
        feature: feature.clone(),
    })
}

pub fn assemble_plant_feature(
    id: &ResourceLocation,
    config: &PlantConfig,
    patch_decorators: Vec<Decorator>,
) -> Result<FeatureBundle> {
    let state = BlockState::parse(&config.block)?;
    let kind = config.kind();

    let feature_config = match kind {
        PlantKind::Simple | PlantKind::Water => FeatureConfig::SimpleBlock {
            to_place: StateProvider::RandomProperty {
                state: state.clone(),
                property: "age".to_string(),
            },
        },
        _ => FeatureConfig::Block {
            block: state.name.clone(),
        },
    };

    let patch = feature_id(id, FeatureRole::Patch);
    let singular = feature_id(id, FeatureRole::Singular);
    let patch_type = if config.limit_density {
        "tfc:dynamic_random_patch"
    } else {
        "minecraft:random_patch"
    };
    let predicate = if config.requires_clay {
        Decorator::replaceable()
    } else {
        Decorator::air_or_empty_fluid()
    };

    let mut singular_decorators = vec![Decorator::heightmap(kind.heightmap()), predicate, kind.survives(state)];
    if config.no_solid_neighbors {
        singular_decorators.push(Decorator::NoSolidNeighbors);
    }

    let mut bundle = FeatureBundle::default();
    bundle.push(ConfiguredFeature::new(
        patch.clone(),
        patch_type,
        random_patch(config.tries, config.xz_spread, config.y_spread, &singular),
    ));
    bundle.push(ConfiguredFeature::new(singular.clone(), kind.feature_type(), feature_config));
    bundle.push(PlacedFeature::of(&patch, patch_decorators));
    bundle.push(PlacedFeature::of(&singular, singular_decorators));
    Ok(bundle)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WaterMode {
    #[default]
    Dry,
    Any,
    Salt,
    Fresh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchConfig {
    pub block: String,
    pub y_spread: u32,
    pub xz_spread: u32,
    pub tries: u32,
    pub water: WaterMode,
    pub custom_feature: Option<String>,
    pub custom_config: Option<Value>,
}

impl PatchConfig {
    pub fn new(block: impl Into<String>, y_spread: u32, xz_spread: u32) -> Self {
        Self {
            block: block.into(),
            y_spread,
            xz_spread,
            tries: 64,
            water: WaterMode::Dry,
            custom_feature: None,
            custom_config: None,
        }
    }

    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    pub fn water(mut self, water: WaterMode) -> Self {
        self.water = water;
        self
    }

    pub fn custom(mut self, feature: impl Into<String>, config: Value) -> Self {
        self.custom_feature = Some(feature.into());
        self.custom_config = Some(config);
        self
    }
}

fn is_empty_config(config: &Value) -> bool {
    match config {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

pub fn assemble_patch_feature(
    id: &ResourceLocation,
    patch: &PatchConfig,
    mut patch_decorators: Vec<Decorator>,
    extra_singular: Vec<Decorator>,
    biome_check: bool,
) -> Result<FeatureBundle> {
    let state = BlockState::parse(&patch.block)?;
    let aquatic = patch.water != WaterMode::Dry;

    let (feature, config) = match (&patch.custom_feature, &patch.custom_config) {
        (Some(feature), Some(config)) if !is_empty_config(config) => {
            (feature.as_str(), FeatureConfig::Custom(config.clone()))
        }
        (None, None) => {
            let feature = if aquatic {
                "tfc:block_with_fluid"
            } else {
                "minecraft:simple_block"
            };
            let to_place = StateProvider::Simple { state: state.clone() };
            (feature, FeatureConfig::SimpleBlock { to_place })
        }
        _ => return Err(GenError::CustomFeatureConfig(id.to_string())),
    };

    let (heightmap, mut singular_decorators) = match patch.water {
        WaterMode::Dry => (
            Heightmap::WorldSurfaceWg,
            vec![Decorator::replaceable(), Decorator::would_survive(state)],
        ),
        mode => {
            let fluid = match mode {
                WaterMode::Salt => Decorator::matching_blocks(["tfc:fluid/salt_water"]),
                WaterMode::Fresh => Decorator::matching_blocks(["minecraft:water"]),
                _ => Decorator::air_or_empty_fluid(),
            };
            (
                Heightmap::OceanFloorWg,
                vec![fluid, Decorator::would_survive_with_fluid(state)],
            )
        }
    };
    singular_decorators.extend(extra_singular);
    singular_decorators.insert(0, Decorator::heightmap(heightmap));
    if biome_check {
        patch_decorators.push(Decorator::Biome);
    }

    let patch_id = feature_id(id, FeatureRole::Patch);
    let singular = feature_id(id, FeatureRole::Singular);

    let mut bundle = FeatureBundle::default();
    bundle.push(ConfiguredFeature::new(
        patch_id.clone(),
        "minecraft:random_patch",
        random_patch(Some(patch.tries), patch.xz_spread, patch.y_spread, &singular),
    ));
    bundle.push(ConfiguredFeature::new(singular.clone(), feature, config));
    bundle.push(PlacedFeature::of(&patch_id, patch_decorators));
    bundle.push(PlacedFeature::of(&singular, singular_decorators));
    Ok(bundle)
}

/// Depth limits for plants that must sit under shallow water.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shallow {
    pub max_depth: u32,
    pub min_depth: Option<u32>,
}

impl Default for Shallow {
    fn default() -> Self {
        Self {
            max_depth: 5,
            min_depth: None,
        }
    }
}

pub fn assemble_noise_plant_feature(
    id: &ResourceLocation,
    config: &PlantConfig,
    patch_decorators: Vec<Decorator>,
    water: Option<Shallow>,
) -> Result<FeatureBundle> {
    let state = BlockState::parse(&config.block)?;
    let patch = feature_id(id, FeatureRole::Patch);
    let singular = feature_id(id, FeatureRole::Singular);

    let mut placed = vec![
        Decorator::heightmap(Heightmap::WorldSurfaceWg),
        Decorator::air_or_empty_fluid(),
        Decorator::would_survive(state.clone()),
    ];
    if let Some(shallow) = water {
        placed.push(Decorator::shallow_water(shallow.max_depth, shallow.min_depth));
    }

    let provider = DualNoiseProvider {
        seed: 2345,
        noise: NormalNoise::new(-3, 1.0),
        scale: 1.0,
        states: vec![state],
        variety: [1, 1],
        slow_noise: NormalNoise::new(-10, 1.0),
        slow_scale: 1.0,
    };

    let mut bundle = FeatureBundle::default();
    bundle.push(ConfiguredFeature::new(
        singular.clone(),
        "minecraft:simple_block",
        FeatureConfig::SimpleBlock {
            to_place: StateProvider::DualNoise(provider),
        },
    ));
    bundle.push(ConfiguredFeature::new(
        patch.clone(),
        "minecraft:random_patch",
        random_patch(config.tries, config.xz_spread, config.y_spread, &singular),
    ));
    bundle.push(PlacedFeature::of(&patch, patch_decorators));
    bundle.push(PlacedFeature::of(&singular, placed));
    Ok(bundle)
}

/// Expands catalog plants into patches tagged into the land or ocean plant lists.
pub struct PlantLayer<'a> {
    ns: &'a str,
}

impl<'a> PlantLayer<'a> {
    pub fn new(ns: &'a str) -> Self {
        Self { ns }
    }

    fn config(&self, plant: &Plant) -> PlantConfig {
        let block = format!("{}:plant/{}[age=1,stage=1]", self.ns, plant.name);
        let mut config = PlantConfig::new(block, 1, 10).tries(10);
        config.requires_clay = plant.clay;
        match plant.kind {
            PlantType::Standard | PlantType::Cactus | PlantType::Creeping => {}
            PlantType::Dry => config.limit_density = true,
            PlantType::TallPlant => config.tall_plant = true,
            PlantType::Epiphyte => config.epiphyte_plant = true,
            PlantType::Water => config.water_plant = true,
            PlantType::Emergent => config.emergent_plant = true,
            PlantType::TallWater => config.tall_water_plant = true,
        }
        config
    }
}

impl Layer<&Plant, Result<FeatureBundle>> for PlantLayer<'_> {
    fn generate(&self, plant: &Plant) -> Result<FeatureBundle> {
        let id = ResourceLocation::new(self.ns, format!("plant/{}", plant.name));
        let config = self.config(plant);
        let rarity = if config.kind().is_aquatic() { 2 } else { 5 };
        let decorators = vec![
            Decorator::chance(rarity),
            Decorator::InSquare,
            Decorator::climate(plant.climate),
        ];

        let mut bundle = if plant.kind == PlantType::Creeping {
            assemble_noise_plant_feature(&id, &config, decorators, None)?
        } else {
            assemble_plant_feature(&id, &config, decorators)?
        };

        let list = if plant.kind == PlantType::TallWater {
            "feature/ocean_plants"
        } else {
            "feature/land_plants"
        };
        bundle.tag(
            TagKind::PlacedFeature,
            ResourceLocation::new(self.ns, list),
            vec![feature_id(&id, FeatureRole::Patch).to_string()],
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        assemble_noise_plant_feature, assemble_patch_feature, assemble_plant_feature, PatchConfig, PlantConfig,
        PlantKind, PlantLayer, Shallow, WaterMode,
    };
    use crate::catalog::flora::PLANTS;
    use crate::document::decorator::{Decorator, Heightmap};
    use crate::document::ident::ResourceLocation;
    use crate::document::Document;
    use crate::error::GenError;
    use crate::worldgen::Layer;
    use serde_json::json;

    fn id(path: &str) -> ResourceLocation {
        ResourceLocation::new("tfc", path)
    }

    fn json_of(doc: impl Into<Document>) -> serde_json::Value {
        doc.into().to_json().unwrap()
    }

    #[test]
    fn water_flag_beats_tall_flag() {
        let mut config = PlantConfig::new("tfc:plant/coontail[age=1]", 1, 10);
        config.water_plant = true;
        config.tall_plant = true;
        assert_eq!(config.kind(), PlantKind::Water);

        let bundle = assemble_plant_feature(&id("plant/coontail"), &config, vec![]).unwrap();
        let singular = bundle.configured(&id("plant/coontail")).unwrap();
        assert_eq!(singular.feature.to_string(), "tfc:block_with_fluid");
    }

    #[test]
    fn kind_priority_order() {
        let mut config = PlantConfig::new("tfc:plant/x", 1, 1);
        config.tall_water_plant = true;
        assert_eq!(config.kind(), PlantKind::SubmergedTall);
        config.epiphyte_plant = true;
        assert_eq!(config.kind(), PlantKind::Epiphyte);
        config.tall_plant = true;
        assert_eq!(config.kind(), PlantKind::Tall);
        config.emergent_plant = true;
        assert_eq!(config.kind(), PlantKind::Emergent);
    }

    #[test]
    fn heightmap_tracks_kind() {
        let mut config = PlantConfig::new("tfc:plant/cattail[age=1]", 1, 10);
        config.emergent_plant = true;
        let bundle = assemble_plant_feature(&id("plant/cattail"), &config, vec![]).unwrap();
        let placed = bundle.placed(&id("plant/cattail")).unwrap();
        assert_eq!(placed.placement[0], Decorator::heightmap(Heightmap::OceanFloorWg));
        assert_eq!(
            json_of(bundle.configured(&id("plant/cattail")).unwrap().clone())["config"],
            json!({"block": "tfc:plant/cattail"})
        );

        let config = PlantConfig::new("tfc:plant/canna[age=1]", 1, 10);
        let bundle = assemble_plant_feature(&id("plant/canna"), &config, vec![]).unwrap();
        let placed = bundle.placed(&id("plant/canna")).unwrap();
        assert_eq!(placed.placement[0], Decorator::heightmap(Heightmap::WorldSurfaceWg));
    }

    #[test]
    fn simple_plant_documents() {
        let mut config = PlantConfig::new("tfc:plant/canna[age=1,stage=1]", 1, 10).tries(10);
        config.requires_clay = true;
        let decorators = vec![Decorator::chance(5), Decorator::InSquare];
        let bundle = assemble_plant_feature(&id("plant/canna"), &config, decorators).unwrap();
        assert_eq!(bundle.documents.len(), 4);

        assert_eq!(
            json_of(bundle.configured(&id("plant/canna_patch")).unwrap().clone()),
            json!({
                "type": "minecraft:random_patch",
                "config": {"tries": 10, "xz_spread": 10, "y_spread": 1, "feature": "tfc:plant/canna"}
            })
        );
        assert_eq!(
            json_of(bundle.configured(&id("plant/canna")).unwrap().clone()),
            json!({
                "type": "minecraft:simple_block",
                "config": {"to_place": {
                    "type": "tfc:random_property",
                    "state": {"Name": "tfc:plant/canna", "Properties": {"age": "1", "stage": "1"}},
                    "property": "age"
                }}
            })
        );
        assert_eq!(
            json_of(bundle.placed(&id("plant/canna_patch")).unwrap().clone()),
            json!({
                "feature": "tfc:plant/canna_patch",
                "placement": [{"type": "minecraft:rarity_filter", "chance": 5}, {"type": "minecraft:in_square"}]
            })
        );
        let singular = bundle.placed(&id("plant/canna")).unwrap();
        assert_eq!(singular.placement[1], Decorator::replaceable());
        assert_eq!(singular.placement.len(), 3);
    }

    #[test]
    fn no_solid_neighbors_only_on_singular() {
        let mut config = PlantConfig::new("tfc:plant/moss", 1, 10);
        config.no_solid_neighbors = true;
        config.limit_density = true;
        let bundle = assemble_plant_feature(&id("plant/moss"), &config, vec![Decorator::InSquare]).unwrap();

        let patch = bundle.placed(&id("plant/moss_patch")).unwrap();
        assert!(!patch.placement.contains(&Decorator::NoSolidNeighbors));
        let singular = bundle.placed(&id("plant/moss")).unwrap();
        assert_eq!(singular.placement.last(), Some(&Decorator::NoSolidNeighbors));
        let outer = bundle.configured(&id("plant/moss_patch")).unwrap();
        assert_eq!(outer.feature.to_string(), "tfc:dynamic_random_patch");
    }

    #[test]
    fn assembly_is_idempotent() {
        let mut config = PlantConfig::new("tfc:plant/goldenrod[age=1,stage=1]", 1, 10).tries(10);
        config.requires_clay = true;
        let render = || {
            assemble_plant_feature(&id("plant/goldenrod"), &config, vec![Decorator::InSquare])
                .unwrap()
                .documents
                .iter()
                .map(|d| serde_json::to_string(&d.to_json().unwrap()).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn dry_patch_uses_replaceable_and_biome_check() {
        let patch = PatchConfig::new("tfc:groundcover/rock", 2, 8).tries(16);
        let bundle =
            assemble_patch_feature(&id("groundcover/rock"), &patch, vec![Decorator::InSquare], vec![], true).unwrap();
        let outer = bundle.placed(&id("groundcover/rock_patch")).unwrap();
        assert_eq!(outer.placement, vec![Decorator::InSquare, Decorator::Biome]);
        let inner = bundle.placed(&id("groundcover/rock")).unwrap();
        assert_eq!(inner.placement[0], Decorator::heightmap(Heightmap::WorldSurfaceWg));
        assert_eq!(inner.placement[1], Decorator::replaceable());
        assert_eq!(
            json_of(bundle.configured(&id("groundcover/rock")).unwrap().clone())["type"],
            json!("minecraft:simple_block")
        );
    }

    #[test]
    fn salt_water_patch_matches_salt_water() {
        let patch = PatchConfig::new("tfc:plant/sea_grass", 1, 6).water(WaterMode::Salt);
        let bundle = assemble_patch_feature(&id("plant/sea_grass"), &patch, vec![], vec![], false).unwrap();
        let inner = bundle.placed(&id("plant/sea_grass")).unwrap();
        assert_eq!(inner.placement[0], Decorator::heightmap(Heightmap::OceanFloorWg));
        assert_eq!(inner.placement[1], Decorator::matching_blocks(["tfc:fluid/salt_water"]));
        let outer = bundle.placed(&id("plant/sea_grass_patch")).unwrap();
        assert!(outer.placement.is_empty());
        assert_eq!(
            bundle.configured(&id("plant/sea_grass")).unwrap().feature.to_string(),
            "tfc:block_with_fluid"
        );
    }

    #[test]
    fn extra_singular_decorators_follow_survival_check() {
        let patch = PatchConfig::new("tfc:plant/fern", 1, 4);
        let bundle = assemble_patch_feature(
            &id("plant/fern"),
            &patch,
            vec![],
            vec![Decorator::NoSolidNeighbors],
            true,
        )
        .unwrap();
        let inner = bundle.placed(&id("plant/fern")).unwrap();
        assert_eq!(inner.placement.len(), 4);
        assert_eq!(inner.placement[3], Decorator::NoSolidNeighbors);
    }

    #[test]
    fn custom_feature_needs_a_config() {
        let mut patch = PatchConfig::new("tfc:plant/bush", 1, 4);
        patch.custom_feature = Some("tfc:spreading_bush".to_string());
        let err = assemble_patch_feature(&id("plant/bush"), &patch, vec![], vec![], true).unwrap_err();
        assert!(matches!(err, GenError::CustomFeatureConfig(_)));

        let patch = PatchConfig::new("tfc:plant/bush", 1, 4).custom("tfc:spreading_bush", json!({}));
        assert!(assemble_patch_feature(&id("plant/bush"), &patch, vec![], vec![], true).is_err());

        let patch = PatchConfig::new("tfc:plant/bush", 1, 4).custom("tfc:spreading_bush", json!({"block": "tfc:plant/bush"}));
        let bundle = assemble_patch_feature(&id("plant/bush"), &patch, vec![], vec![], true).unwrap();
        assert_eq!(
            json_of(bundle.configured(&id("plant/bush")).unwrap().clone()),
            json!({"type": "tfc:spreading_bush", "config": {"block": "tfc:plant/bush"}})
        );
    }

    #[test]
    fn noise_plant_adds_shallow_water_when_requested() {
        let config = PlantConfig::new("tfc:plant/duckweed", 1, 6).tries(32);
        let bundle =
            assemble_noise_plant_feature(&id("plant/duckweed"), &config, vec![], Some(Shallow::default())).unwrap();
        let inner = bundle.placed(&id("plant/duckweed")).unwrap();
        assert_eq!(inner.placement.last(), Some(&Decorator::shallow_water(5, None)));

        let provider = &json_of(bundle.configured(&id("plant/duckweed")).unwrap().clone())["config"]["to_place"];
        assert_eq!(provider["type"], json!("minecraft:dual_noise_provider"));
        let keys: Vec<_> = provider.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["seed", "noise", "scale", "states", "variety", "slow_noise", "slow_scale", "type"]
        );
        assert_eq!(provider["seed"], json!(2345));
        assert_eq!(provider["noise"], json!({"firstOctave": -3, "amplitudes": [1.0]}));

        let dry = assemble_noise_plant_feature(&id("plant/moss"), &config, vec![], None).unwrap();
        assert_eq!(dry.placed(&id("plant/moss")).unwrap().placement.len(), 3);
    }

    #[test]
    fn catalog_plants_are_tagged_by_habitat() {
        let layer = PlantLayer::new("tfc");
        let kelp = PLANTS.iter().find(|p| p.name == "leafy_kelp").unwrap();
        let bundle = layer.generate(kelp).unwrap();
        assert_eq!(bundle.tags[0].tag.path(), "feature/ocean_plants");
        assert_eq!(bundle.tags[0].members, vec!["tfc:plant/leafy_kelp_patch".to_string()]);
        assert_eq!(
            bundle.configured(&id("plant/leafy_kelp")).unwrap().feature.to_string(),
            "tfc:submerged_tall_plant"
        );

        let canna = PLANTS.iter().find(|p| p.name == "canna").unwrap();
        let bundle = layer.generate(canna).unwrap();
        assert_eq!(bundle.tags[0].tag.path(), "feature/land_plants");
        let inner = bundle.placed(&id("plant/canna")).unwrap();
        assert_eq!(inner.placement[1], Decorator::replaceable());
    }
}
