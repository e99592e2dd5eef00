#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metal {
    pub name: &'static str,
    pub tier: u8,
    /// The metal this one melts into, when it is not itself.
    pub melt_metal: Option<&'static str>,
}

const fn metal(name: &'static str, tier: u8, melt_metal: Option<&'static str>) -> Metal {
    Metal {
        name,
        tier,
        melt_metal,
    }
}

pub const METALS: [Metal; 28] = [
    metal("bismuth", 1, None),
    metal("bismuth_bronze", 2, None),
    metal("black_bronze", 2, None),
    metal("bronze", 2, None),
    metal("brass", 2, None),
    metal("copper", 1, None),
    metal("gold", 1, None),
    metal("nickel", 1, None),
    metal("rose_gold", 1, None),
    metal("silver", 1, None),
    metal("tin", 1, None),
    metal("zinc", 1, None),
    metal("sterling_silver", 1, None),
    metal("wrought_iron", 3, Some("cast_iron")),
    metal("cast_iron", 1, None),
    metal("pig_iron", 3, None),
    metal("steel", 4, None),
    metal("black_steel", 5, None),
    metal("blue_steel", 6, None),
    metal("red_steel", 6, None),
    metal("weak_steel", 4, None),
    metal("weak_blue_steel", 5, None),
    metal("weak_red_steel", 5, None),
    metal("high_carbon_steel", 3, Some("pig_iron")),
    metal("high_carbon_black_steel", 4, Some("weak_steel")),
    metal("high_carbon_blue_steel", 5, Some("weak_blue_steel")),
    metal("high_carbon_red_steel", 5, Some("weak_red_steel")),
    metal("unknown", 0, None),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ore {
    pub name: &'static str,
    pub metal: Option<&'static str>,
    pub graded: bool,
}

impl Ore {
    pub fn is_mineral(&self) -> bool {
        !self.graded
    }
}

const fn graded(name: &'static str, metal: &'static str) -> Ore {
    Ore {
        name,
        metal: Some(metal),
        graded: true,
    }
}

const fn mineral(name: &'static str) -> Ore {
    Ore {
        name,
        metal: None,
        graded: false,
    }
}

pub const ORES: [Ore; 32] = [
    graded("native_copper", "copper"),
    graded("native_gold", "gold"),
    graded("hematite", "cast_iron"),
    graded("native_silver", "silver"),
    graded("cassiterite", "tin"),
    graded("bismuthinite", "bismuth"),
    graded("garnierite", "nickel"),
    graded("malachite", "copper"),
    graded("magnetite", "cast_iron"),
    graded("limonite", "cast_iron"),
    graded("sphalerite", "zinc"),
    graded("tetrahedrite", "copper"),
    mineral("bituminous_coal"),
    mineral("lignite"),
    mineral("gypsum"),
    mineral("graphite"),
    mineral("sulfur"),
    mineral("cinnabar"),
    mineral("cryolite"),
    mineral("saltpeter"),
    mineral("sylvite"),
    mineral("borax"),
    mineral("halite"),
    mineral("amethyst"),
    mineral("diamond"),
    mineral("emerald"),
    mineral("lapis_lazuli"),
    mineral("opal"),
    mineral("pyrite"),
    mineral("ruby"),
    mineral("sapphire"),
    mineral("topaz"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OreGrade {
    Poor,
    Normal,
    Rich,
}

impl OreGrade {
    pub const ALL: [OreGrade; 3] = [OreGrade::Poor, OreGrade::Normal, OreGrade::Rich];

    pub fn name(self) -> &'static str {
        match self {
            OreGrade::Poor => "poor",
            OreGrade::Normal => "normal",
            OreGrade::Rich => "rich",
        }
    }
}
