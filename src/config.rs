use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::vein::{Grade, Projection, Vein, VeinShape};
use crate::error::Result;
use crate::worldgen::biome::BiomeFlags;
use crate::worldgen::distribution::vein_density;

pub const CONFIG_FILE: &str = "datagen.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub namespace: String,
    pub output: PathBuf,
    pub pretty: bool,
    pub sections: Sections,
    pub extra_veins: Vec<VeinEntry>,
    pub extra_biomes: Vec<BiomeFlags>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            namespace: "tfc".to_string(),
            output: PathBuf::from("generated"),
            pretty: true,
            sections: Sections::default(),
            extra_veins: Vec::new(),
            extra_biomes: Vec::new(),
        }
    }
}

impl GenConfig {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Reads `path`. A missing file gives the defaults; a file that cannot be
    /// read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::read(path)?;
        log::info!("loaded {}", path.display());
        Ok(config)
    }

    pub fn extra_veins(&self) -> Result<Vec<Vein>> {
        self.extra_veins.iter().map(VeinEntry::to_vein).collect()
    }
}

/// Which assembler stages run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub veins: bool,
    pub plants: bool,
    pub crops: bool,
    pub berries: bool,
    pub fruit_trees: bool,
    pub forests: bool,
    pub biomes: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            veins: true,
            plants: true,
            crops: true,
            berries: true,
            fruit_trees: true,
            forests: true,
            biomes: true,
        }
    }
}

fn cluster() -> VeinShape {
    VeinShape::Cluster
}

/// A user vein. Density is a percentage here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VeinEntry {
    pub name: String,
    pub ore: String,
    #[serde(default = "cluster")]
    pub shape: VeinShape,
    pub rarity: u32,
    pub size: u32,
    pub min_y: i32,
    pub max_y: i32,
    pub density_percent: f64,
    pub rocks: Vec<String>,
    #[serde(default)]
    pub grade: Option<Grade>,
    #[serde(default)]
    pub biomes: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub radius: Option<u32>,
    #[serde(default)]
    pub deposits: bool,
    #[serde(default)]
    pub indicator_rarity: Option<u32>,
    #[serde(default)]
    pub underground_rarity: Option<u32>,
    #[serde(default)]
    pub underground_count: Option<u32>,
    #[serde(default)]
    pub project: Projection,
    #[serde(default)]
    pub near_lava: bool,
}

impl VeinEntry {
    pub fn to_vein(&self) -> Result<Vein> {
        let density = vein_density(self.density_percent)?;
        let rocks: Vec<&str> = self.rocks.iter().map(String::as_str).collect();
        let mut builder = Vein::builder(
            &self.name,
            &self.ore,
            self.rarity,
            self.size,
            self.min_y,
            self.max_y,
            density,
            &rocks,
        )
        .shape(self.shape)
        .project(self.project);

        if let Some(grade) = self.grade {
            builder = builder.grade(grade);
        }
        if let Some(biomes) = &self.biomes {
            builder = builder.biomes(biomes);
        }
        if let Some(height) = self.height {
            builder = builder.height(height);
        }
        if let Some(radius) = self.radius {
            builder = builder.radius(radius);
        }
        if self.deposits {
            builder = builder.deposits();
        }
        if let Some(rarity) = self.indicator_rarity {
            builder = builder.indicator(rarity);
        }
        if self.underground_rarity.is_some() || self.underground_count.is_some() {
            builder = builder.deep_indicator(
                self.underground_rarity.unwrap_or(1),
                self.underground_count.unwrap_or(0),
            );
        }
        if self.near_lava {
            builder = builder.near_lava();
        }
        builder.build()
    }
}
