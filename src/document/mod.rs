//! Typed worldgen documents and the sink they are written to.

pub mod biome;
pub mod block;
pub mod decorator;
pub mod emitter;
pub mod feature;
pub mod forest;
pub mod ident;
pub mod vein;

use std::path::PathBuf;

use serde_json::{json, Value};

use crate::error::Result;

use self::biome::BiomeDocument;
use self::feature::{ConfiguredFeature, PlacedFeature};
use self::ident::ResourceLocation;

pub use self::emitter::{DocumentSink, ResourceTree};
pub use self::ident::{feature_id, FeatureRole};

#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    ConfiguredFeature(ConfiguredFeature),
    PlacedFeature(PlacedFeature),
    Biome {
        id: ResourceLocation,
        biome: Box<BiomeDocument>,
    },
}

impl Document {
    pub fn id(&self) -> &ResourceLocation {
        match self {
            Document::ConfiguredFeature(f) => &f.id,
            Document::PlacedFeature(f) => &f.id,
            Document::Biome { id, .. } => id,
        }
    }

    /// Path relative to the resource root, e.g.
    /// `data/tfc/worldgen/placed_feature/plant/moss.json`.
    pub fn path(&self) -> PathBuf {
        let dir = match self {
            Document::ConfiguredFeature(_) => "worldgen/configured_feature",
            Document::PlacedFeature(_) => "worldgen/placed_feature",
            Document::Biome { .. } => "worldgen/biome",
        };
        data_path(self.id(), dir)
    }

    pub fn to_json(&self) -> Result<Value> {
        let value = match self {
            Document::ConfiguredFeature(f) => json!({
                "type": f.feature,
                "config": serde_json::to_value(&f.config)?,
            }),
            Document::PlacedFeature(f) => json!({
                "feature": f.feature,
                "placement": serde_json::to_value(&f.placement)?,
            }),
            Document::Biome { biome, .. } => serde_json::to_value(biome)?,
        };
        Ok(value)
    }
}

impl From<ConfiguredFeature> for Document {
    fn from(f: ConfiguredFeature) -> Self {
        Document::ConfiguredFeature(f)
    }
}

impl From<PlacedFeature> for Document {
    fn from(f: PlacedFeature) -> Self {
        Document::PlacedFeature(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    PlacedFeature,
    Biome,
}

impl TagKind {
    fn dir(self) -> &'static str {
        match self {
            TagKind::PlacedFeature => "tags/worldgen/placed_feature",
            TagKind::Biome => "tags/biome",
        }
    }

    pub fn path(self, tag: &ResourceLocation) -> PathBuf {
        data_path(tag, self.dir())
    }
}

fn data_path(id: &ResourceLocation, dir: &str) -> PathBuf {
    let mut path = PathBuf::from("data");
    path.push(id.domain());
    path.push(dir);
    path.push(format!("{}.json", id.path()));
    path
}
