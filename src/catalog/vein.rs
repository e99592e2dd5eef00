use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VeinShape {
    Cluster,
    Disc,
    Pipe,
}

impl VeinShape {
    pub fn feature_type(self) -> &'static str {
        match self {
            VeinShape::Cluster => "tfc:cluster_vein",
            VeinShape::Disc => "tfc:disc_vein",
            VeinShape::Pipe => "tfc:pipe_vein",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    #[default]
    None,
    Surface,
    Offset,
}

/// Relative weights of the poor, normal and rich ore blocks in a vein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub poor: u32,
    pub normal: u32,
    pub rich: u32,
}

impl Grade {
    pub const POOR: Grade = Grade::new(70, 25, 5);
    pub const NORMAL: Grade = Grade::new(35, 40, 25);
    pub const RICH: Grade = Grade::new(15, 25, 60);

    pub const fn new(poor: u32, normal: u32, rich: u32) -> Self {
        Self { poor, normal, rich }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vein {
    pub name: String,
    pub ore: String,
    pub shape: VeinShape,
    pub rarity: u32,
    pub size: u32,
    pub min_y: i32,
    pub max_y: i32,
    pub density: f64,
    pub grade: Option<Grade>,
    pub rocks: Vec<String>,
    pub biomes: Option<String>,
    pub height: u32,
    pub radius: u32,
    pub deposits: bool,
    pub indicator_rarity: u32,
    pub underground_rarity: u32,
    pub underground_count: u32,
    pub projection: Projection,
    pub near_lava: bool,
}

impl Vein {
    #[allow(clippy::too_many_arguments)]
    pub fn builder(
        name: &str,
        ore: &str,
        rarity: u32,
        size: u32,
        min_y: i32,
        max_y: i32,
        density: f64,
        rocks: &[&str],
    ) -> VeinBuilder {
        VeinBuilder {
            vein: Vein {
                name: name.to_string(),
                ore: ore.to_string(),
                shape: VeinShape::Cluster,
                rarity,
                size,
                min_y,
                max_y,
                density,
                grade: None,
                rocks: rocks.iter().map(|r| r.to_string()).collect(),
                biomes: None,
                height: 2,
                radius: 5,
                deposits: false,
                indicator_rarity: 12,
                underground_rarity: 1,
                underground_count: 0,
                projection: Projection::None,
                near_lava: false,
            },
        }
    }

    pub fn has_indicator(&self) -> bool {
        self.indicator_rarity > 0 || self.underground_rarity > 0
    }
}

pub struct VeinBuilder {
    vein: Vein,
}

impl VeinBuilder {
    pub fn shape(mut self, shape: VeinShape) -> Self {
        self.vein.shape = shape;
        self
    }

    pub fn grade(mut self, grade: Grade) -> Self {
        self.vein.grade = Some(grade);
        self
    }

    pub fn biomes(mut self, biomes: &str) -> Self {
        self.vein.biomes = Some(biomes.to_string());
        self
    }

    /// Disc thickness. Ignored by the other shapes.
    pub fn height(mut self, height: u32) -> Self {
        self.vein.height = height;
        self
    }

    /// Pipe radius. Ignored by the other shapes.
    pub fn radius(mut self, radius: u32) -> Self {
        self.vein.radius = radius;
        self
    }

    pub fn deposits(mut self) -> Self {
        self.vein.deposits = true;
        self
    }

    pub fn indicator(mut self, rarity: u32) -> Self {
        self.vein.indicator_rarity = rarity;
        self
    }

    pub fn deep_indicator(mut self, rarity: u32, count: u32) -> Self {
        self.vein.underground_rarity = rarity;
        self.vein.underground_count = count;
        self
    }

    pub fn project(mut self, projection: Projection) -> Self {
        self.vein.projection = projection;
        self
    }

    pub fn near_lava(mut self) -> Self {
        self.vein.near_lava = true;
        self
    }

    pub fn build(self) -> Result<Vein> {
        let vein = self.vein;
        if !(vein.density > 0.0 && vein.density < 1.0) {
            return Err(GenError::VeinDensity {
                vein: vein.name,
                density: vein.density,
            });
        }
        if vein.rocks.is_empty() {
            return Err(GenError::NoRocks(vein.name));
        }
        Ok(vein)
    }
}

pub fn builtin_veins() -> Result<Vec<Vein>> {
    use Projection::Offset;
    use VeinShape::{Disc, Pipe};

    const CARBONATE_HOSTS: &[&str] = &["marble", "limestone", "chalk", "dolomite"];
    const GOLD_HOSTS: &[&str] = &["igneous_extrusive", "igneous_intrusive"];

    [
        // Copper
        Vein::builder("surface_native_copper", "native_copper", 24, 20, 40, 130, 0.25, &["igneous_extrusive"])
            .grade(Grade::POOR)
            .deposits()
            .indicator(14),
        Vein::builder("surface_malachite", "malachite", 32, 20, 40, 130, 0.25, CARBONATE_HOSTS)
            .grade(Grade::POOR)
            .indicator(14),
        Vein::builder("surface_tetrahedrite", "tetrahedrite", 7, 20, 90, 170, 0.25, &["metamorphic"])
            .grade(Grade::POOR)
            .indicator(8),
        Vein::builder("normal_malachite", "malachite", 45, 30, -30, 70, 0.5, CARBONATE_HOSTS)
            .grade(Grade::NORMAL)
            .indicator(25),
        Vein::builder("normal_tetrahedrite", "tetrahedrite", 40, 30, -30, 70, 0.5, &["metamorphic"])
            .grade(Grade::NORMAL)
            .indicator(25),
        // Gold, and the pyrite decoys that share its host rocks
        Vein::builder("normal_native_gold", "native_gold", 90, 15, 0, 70, 0.25, GOLD_HOSTS)
            .grade(Grade::NORMAL)
            .indicator(40),
        Vein::builder("rich_native_gold", "native_gold", 50, 40, -80, 20, 0.5, &["igneous_intrusive"])
            .grade(Grade::RICH)
            .indicator(0)
            .deep_indicator(1, 4),
        Vein::builder("fake_native_gold", "pyrite", 16, 15, -50, 70, 0.35, GOLD_HOSTS).indicator(0),
        // Silver
        Vein::builder("surface_native_silver", "native_silver", 15, 10, 90, 180, 0.2, &["granite", "diorite"])
            .grade(Grade::POOR),
        Vein::builder("normal_native_silver", "native_silver", 25, 25, -80, 20, 0.6, &["granite", "diorite", "gneiss", "schist"])
            .grade(Grade::RICH)
            .indicator(0)
            .deep_indicator(1, 9),
        // Tin
        Vein::builder("surface_cassiterite", "cassiterite", 5, 15, 80, 180, 0.4, &["igneous_intrusive"])
            .grade(Grade::NORMAL)
            .deposits(),
        // Bismuth
        Vein::builder("surface_bismuthinite", "bismuthinite", 32, 20, 40, 130, 0.3, &["sedimentary"])
            .grade(Grade::POOR)
            .indicator(14),
        Vein::builder("normal_bismuthinite", "bismuthinite", 45, 40, -80, 20, 0.6, &["igneous_intrusive"])
            .grade(Grade::RICH)
            .indicator(0)
            .deep_indicator(1, 4),
        // Zinc
        Vein::builder("surface_sphalerite", "sphalerite", 30, 20, 40, 130, 0.3, &["igneous_extrusive"])
            .grade(Grade::POOR),
        Vein::builder("normal_sphalerite", "sphalerite", 45, 40, -80, 20, 0.6, &["igneous_intrusive"])
            .grade(Grade::RICH)
            .indicator(0)
            .deep_indicator(1, 5),
        // Iron
        Vein::builder("surface_hematite", "hematite", 45, 20, 10, 90, 0.4, &["igneous_extrusive"])
            .grade(Grade::NORMAL)
            .indicator(24),
        Vein::builder("surface_magnetite", "magnetite", 90, 20, 10, 90, 0.4, &["sedimentary"])
            .grade(Grade::NORMAL)
            .indicator(24),
        Vein::builder("surface_limonite", "limonite", 90, 20, 10, 90, 0.4, &["sedimentary"])
            .grade(Grade::NORMAL)
            .indicator(24),
        // Nickel
        Vein::builder("normal_garnierite", "garnierite", 25, 18, -80, 0, 0.3, &["igneous_intrusive"])
            .grade(Grade::NORMAL),
        Vein::builder("gabbro_garnierite", "garnierite", 20, 30, -80, 0, 0.6, &["gabbro"])
            .grade(Grade::RICH)
            .indicator(0)
            .deep_indicator(1, 7),
        // Minerals
        Vein::builder("graphite", "graphite", 20, 20, -30, 60, 0.4, &["gneiss", "marble", "quartzite", "schist"]),
        Vein::builder("lignite", "lignite", 160, 40, -20, -8, 0.85, &["sedimentary"])
            .shape(Disc)
            .height(2)
            .project(Offset),
        Vein::builder("bituminous_coal", "bituminous_coal", 210, 50, -35, -12, 0.9, &["sedimentary"])
            .shape(Disc)
            .height(3)
            .project(Offset),
        Vein::builder("sulfur", "sulfur", 4, 18, -64, -45, 0.25, &["igneous_intrusive", "metamorphic"])
            .shape(Disc)
            .height(5)
            .near_lava(),
        Vein::builder("cryolite", "cryolite", 16, 18, -70, -10, 0.7, &["granite", "diorite"]),
        Vein::builder("cinnabar", "cinnabar", 14, 18, -70, 10, 0.6, &["quartzite", "phyllite", "gneiss", "schist"]),
        Vein::builder("saltpeter", "saltpeter", 110, 35, 40, 100, 0.4, &["sedimentary"])
            .shape(Disc)
            .height(5),
        Vein::builder("sylvite", "sylvite", 60, 35, 40, 100, 0.35, &["shale", "claystone", "chert"])
            .shape(Disc)
            .height(5),
        Vein::builder("borax", "borax", 40, 23, 40, 100, 0.2, &["claystone", "limestone", "shale"])
            .shape(Disc)
            .height(3),
        Vein::builder("gypsum", "gypsum", 70, 25, 40, 100, 0.3, &["sedimentary"])
            .shape(Disc)
            .height(5),
        Vein::builder("halite", "halite", 110, 35, -45, -12, 0.85, &["sedimentary"])
            .shape(Disc)
            .height(4)
            .project(Offset),
        // Gems
        Vein::builder("lapis_lazuli", "lapis_lazuli", 30, 30, -20, 80, 0.12, &["limestone", "marble"]),
        Vein::builder("diamond", "diamond", 30, 60, -64, 100, 0.15, &["gabbro"])
            .shape(Pipe)
            .radius(5),
        Vein::builder("emerald", "emerald", 80, 60, -64, 100, 0.15, &["igneous_intrusive"])
            .shape(Pipe)
            .radius(5),
        Vein::builder("amethyst", "amethyst", 25, 8, 40, 60, 0.2, &["sedimentary", "metamorphic"])
            .shape(Disc)
            .biomes("#tfc:is_river")
            .height(4),
        Vein::builder("opal", "opal", 25, 8, 40, 60, 0.2, &["sedimentary", "igneous_extrusive"])
            .shape(Disc)
            .biomes("#tfc:is_river")
            .height(4),
    ]
    .into_iter()
    .map(VeinBuilder::build)
    .collect()
}
