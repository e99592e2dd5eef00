use serde::{Deserialize, Serialize};

/// Forest density bands understood by the climate placement filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForestType {
    None,
    Sparse,
    Edge,
    Normal,
    OldGrowth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Climate {
    pub min_temp: f64,
    pub max_temp: f64,
    pub min_rain: f64,
    pub max_rain: f64,
}

const fn climate(min_temp: f64, max_temp: f64, min_rain: f64, max_rain: f64) -> Climate {
    Climate {
        min_temp,
        max_temp,
        min_rain,
        max_rain,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantType {
    Standard,
    Cactus,
    Dry,
    Creeping,
    TallPlant,
    Epiphyte,
    Water,
    Emergent,
    TallWater,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plant {
    pub name: &'static str,
    pub clay: bool,
    pub climate: Climate,
    pub kind: PlantType,
    pub worldgen: bool,
}

const fn plant(name: &'static str, clay: bool, climate: Climate, kind: PlantType) -> Plant {
    Plant {
        name,
        clay,
        climate,
        kind,
        worldgen: true,
    }
}

pub const PLANTS: [Plant; 12] = [
    plant("athyrium_fern", false, climate(-3.5, 16.0, 270.0, 500.0), PlantType::Standard),
    plant("canna", true, climate(13.0, 36.0, 270.0, 500.0), PlantType::Standard),
    plant("goldenrod", true, climate(-13.0, 22.0, 75.0, 310.0), PlantType::Standard),
    plant("barrel_cactus", false, climate(6.5, 18.0, 0.0, 85.0), PlantType::Cactus),
    plant("dead_bush", false, climate(-7.5, 40.0, 0.0, 120.0), PlantType::Dry),
    plant("moss", false, climate(-7.5, 36.0, 250.0, 500.0), PlantType::Creeping),
    plant("ostrich_fern", false, climate(-10.0, 14.0, 290.0, 500.0), PlantType::TallPlant),
    plant("licorice_fern", false, climate(2.0, 10.0, 300.0, 400.0), PlantType::Epiphyte),
    plant("coontail", false, climate(2.0, 18.0, 250.0, 500.0), PlantType::Water),
    plant("cattail", false, climate(-11.0, 22.0, 150.0, 500.0), PlantType::Emergent),
    plant("leafy_kelp", false, climate(-2.0, 18.0, 0.0, 500.0), PlantType::TallWater),
    Plant {
        worldgen: false,
        ..plant("hanging_vines", false, climate(13.0, 36.0, 150.0, 470.0), PlantType::Epiphyte)
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropType {
    Default,
    Spreading,
    Double,
    Pickable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crop {
    pub name: &'static str,
    pub kind: CropType,
    pub stages: u32,
    pub nutrient: &'static str,
    pub climate: Climate,
    pub min_hydration: u32,
    pub max_hydration: u32,
    pub min_forest: Option<ForestType>,
    pub max_forest: Option<ForestType>,
}

pub const CROPS: [Crop; 4] = [
    Crop {
        name: "hemlock",
        kind: CropType::Default,
        stages: 5,
        nutrient: "potassium",
        climate: climate(3.0, 30.0, 100.0, 400.0),
        min_hydration: 25,
        max_hydration: 100,
        min_forest: None,
        max_forest: None,
    },
    Crop {
        name: "barley",
        kind: CropType::Default,
        stages: 8,
        nutrient: "nitrogen",
        climate: climate(-8.0, 26.0, 70.0, 310.0),
        min_hydration: 18,
        max_hydration: 75,
        min_forest: None,
        max_forest: Some(ForestType::Edge),
    },
    Crop {
        name: "pumpkin",
        kind: CropType::Spreading,
        stages: 8,
        nutrient: "phosphorus",
        climate: climate(0.0, 30.0, 120.0, 390.0),
        min_hydration: 30,
        max_hydration: 80,
        min_forest: None,
        max_forest: Some(ForestType::Normal),
    },
    Crop {
        name: "tomato",
        kind: CropType::Double,
        stages: 8,
        nutrient: "potassium",
        climate: climate(0.0, 36.0, 130.0, 390.0),
        min_hydration: 30,
        max_hydration: 95,
        min_forest: Some(ForestType::Sparse),
        max_forest: Some(ForestType::Normal),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BushType {
    Stationary,
    Spreading,
    Waterlogged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Berry {
    pub name: &'static str,
    pub climate: Climate,
    pub kind: BushType,
    pub min_forest: ForestType,
    pub max_forest: ForestType,
}

const fn berry(
    name: &'static str,
    climate: Climate,
    kind: BushType,
    min_forest: ForestType,
    max_forest: ForestType,
) -> Berry {
    Berry {
        name,
        climate,
        kind,
        min_forest,
        max_forest,
    }
}

pub const BERRIES: [Berry; 11] = [
    berry("blackberry", climate(7.0, 24.0, 200.0, 500.0), BushType::Spreading, ForestType::None, ForestType::Edge),
    berry("blueberry", climate(7.0, 29.0, 100.0, 400.0), BushType::Spreading, ForestType::None, ForestType::Edge),
    berry("bunchberry", climate(15.0, 35.0, 200.0, 500.0), BushType::Stationary, ForestType::Edge, ForestType::OldGrowth),
    berry("cloudberry", climate(-2.0, 17.0, 80.0, 370.0), BushType::Stationary, ForestType::Normal, ForestType::OldGrowth),
    berry("cranberry", climate(-5.0, 17.0, 250.0, 500.0), BushType::Waterlogged, ForestType::Edge, ForestType::OldGrowth),
    berry("elderberry", climate(10.0, 29.0, 100.0, 400.0), BushType::Spreading, ForestType::Edge, ForestType::Edge),
    berry("gooseberry", climate(5.0, 27.0, 200.0, 500.0), BushType::Stationary, ForestType::None, ForestType::Normal),
    berry("raspberry", climate(5.0, 25.0, 200.0, 500.0), BushType::Spreading, ForestType::Edge, ForestType::OldGrowth),
    berry("snowberry", climate(-7.0, 18.0, 200.0, 500.0), BushType::Stationary, ForestType::Normal, ForestType::OldGrowth),
    berry("strawberry", climate(5.0, 28.0, 100.0, 400.0), BushType::Stationary, ForestType::None, ForestType::Edge),
    berry("wintergreen", climate(-6.0, 17.0, 100.0, 400.0), BushType::Stationary, ForestType::Normal, ForestType::OldGrowth),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fruit {
    pub name: &'static str,
    pub climate: Climate,
}

pub const FRUITS: [Fruit; 9] = [
    Fruit { name: "banana", climate: climate(17.0, 35.0, 280.0, 500.0) },
    Fruit { name: "cherry", climate: climate(5.0, 25.0, 100.0, 350.0) },
    Fruit { name: "green_apple", climate: climate(1.0, 25.0, 110.0, 280.0) },
    Fruit { name: "lemon", climate: climate(10.0, 30.0, 180.0, 470.0) },
    Fruit { name: "olive", climate: climate(5.5, 29.0, 150.0, 500.0) },
    Fruit { name: "orange", climate: climate(23.0, 36.0, 250.0, 480.0) },
    Fruit { name: "peach", climate: climate(9.0, 35.0, 60.0, 230.0) },
    Fruit { name: "plum", climate: climate(15.0, 31.0, 250.0, 400.0) },
    Fruit { name: "red_apple", climate: climate(1.0, 25.0, 100.0, 280.0) },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wood {
    pub name: &'static str,
    pub temp: f64,
    pub duration: u32,
}

pub const WOODS: [Wood; 20] = [
    Wood { name: "acacia", temp: 650.0, duration: 1000 },
    Wood { name: "ash", temp: 696.0, duration: 1250 },
    Wood { name: "aspen", temp: 611.0, duration: 1000 },
    Wood { name: "birch", temp: 652.0, duration: 1750 },
    Wood { name: "blackwood", temp: 720.0, duration: 1750 },
    Wood { name: "chestnut", temp: 651.0, duration: 1500 },
    Wood { name: "douglas_fir", temp: 707.0, duration: 1500 },
    Wood { name: "hickory", temp: 762.0, duration: 2000 },
    Wood { name: "kapok", temp: 645.0, duration: 1000 },
    Wood { name: "mangrove", temp: 655.0, duration: 1000 },
    Wood { name: "maple", temp: 745.0, duration: 2000 },
    Wood { name: "oak", temp: 728.0, duration: 2250 },
    Wood { name: "palm", temp: 730.0, duration: 1250 },
    Wood { name: "pine", temp: 627.0, duration: 1250 },
    Wood { name: "rosewood", temp: 640.0, duration: 1500 },
    Wood { name: "sequoia", temp: 612.0, duration: 1750 },
    Wood { name: "spruce", temp: 608.0, duration: 1500 },
    Wood { name: "sycamore", temp: 653.0, duration: 1750 },
    Wood { name: "white_cedar", temp: 625.0, duration: 1500 },
    Wood { name: "willow", temp: 603.0, duration: 1000 },
];

/// One entry of the forest table: which tree grows under which climate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forest {
    pub tree: &'static str,
    pub climate: Climate,
    pub old_growth: bool,
    pub old_growth_chance: Option<u32>,
    pub spoiler_chance: Option<u32>,
    pub krummholz: bool,
    pub floating: Option<bool>,
}

const fn forest(tree: &'static str, climate: Climate, old_growth: bool) -> Forest {
    Forest {
        tree,
        climate,
        old_growth,
        old_growth_chance: None,
        spoiler_chance: None,
        krummholz: false,
        floating: None,
    }
}

// Climate here is (min_temp, max_temp, min_rain, max_rain).
pub const FORESTS: [Forest; 20] = [
    forest("acacia", climate(17.0, 40.0, 30.0, 210.0), true),
    forest("ash", climate(1.0, 15.0, 60.0, 240.0), true),
    Forest { old_growth_chance: Some(1), ..forest("aspen", climate(-18.0, 1.0, 160.0, 400.0), false) },
    Forest { old_growth_chance: Some(1), ..forest("birch", climate(-11.0, 7.0, 90.0, 300.0), false) },
    forest("blackwood", climate(12.0, 35.0, 0.0, 120.0), true),
    forest("chestnut", climate(11.0, 35.0, 160.0, 320.0), false),
    forest("douglas_fir", climate(-10.0, 17.0, 220.0, 400.0), true),
    forest("hickory", climate(7.0, 29.0, 140.0, 310.0), true),
    forest("kapok", climate(15.0, 35.0, 270.0, 500.0), false),
    Forest { floating: Some(true), ..forest("mangrove", climate(15.0, 30.0, 200.0, 500.0), false) },
    Forest { spoiler_chance: Some(200), ..forest("maple", climate(-2.0, 13.0, 140.0, 360.0), true) },
    forest("oak", climate(-7.0, 12.0, 180.0, 430.0), true),
    forest("palm", climate(18.0, 40.0, 0.0, 260.0), false),
    Forest { krummholz: true, ..forest("pine", climate(-18.0, -1.0, 60.0, 270.0), true) },
    forest("rosewood", climate(17.0, 40.0, 260.0, 500.0), false),
    Forest { old_growth_chance: Some(1), ..forest("sequoia", climate(-13.0, 6.0, 250.0, 500.0), true) },
    Forest { krummholz: true, ..forest("spruce", climate(-18.0, 6.0, 120.0, 400.0), true) },
    forest("sycamore", climate(2.0, 27.0, 120.0, 330.0), true),
    forest("white_cedar", climate(-16.0, 0.0, 10.0, 230.0), true),
    forest("willow", climate(0.0, 30.0, 330.0, 500.0), true),
];

#[cfg(test)]
mod tests {
    use super::{BERRIES, CROPS, FORESTS, FRUITS, PLANTS, WOODS};

    #[test]
    fn climate_ranges_are_ordered() {
        let climates = PLANTS
            .iter()
            .map(|p| p.climate)
            .chain(CROPS.iter().map(|c| c.climate))
            .chain(BERRIES.iter().map(|b| b.climate))
            .chain(FRUITS.iter().map(|f| f.climate))
            .chain(FORESTS.iter().map(|f| f.climate));
        for c in climates {
            assert!(c.min_temp <= c.max_temp, "{c:?}");
            assert!(c.min_rain <= c.max_rain, "{c:?}");
        }
    }

    #[test]
    fn every_forest_tree_is_a_wood() {
        for forest in FORESTS {
            assert!(WOODS.iter().any(|w| w.name == forest.tree), "{}", forest.tree);
        }
    }

    #[test]
    fn crops_have_hydration_window() {
        for crop in CROPS {
            assert!(crop.min_hydration < crop.max_hydration);
            assert!(crop.stages > 1);
        }
    }
}
