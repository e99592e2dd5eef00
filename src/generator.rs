use std::collections::HashSet;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::GenConfig;
use crate::document::DocumentSink;
use crate::error::{GenError, Result};
use crate::worldgen::biome::{builtin_biomes, BiomeLayer};
use crate::worldgen::crop::{BerryLayer, CropLayer, FruitTreeLayer};
use crate::worldgen::forest::ForestLayer;
use crate::worldgen::plant::PlantLayer;
use crate::worldgen::vein::VeinLayer;
use crate::worldgen::{FeatureBundle, Layer};

/// Runs every enabled assembler over the catalog and the biome table.
pub struct Generator<'a> {
    catalog: &'a Catalog,
    config: &'a GenConfig,
}

struct Run<'s, S> {
    sink: &'s mut S,
    seen: HashSet<PathBuf>,
    documents: usize,
}

impl<S: DocumentSink> Run<'_, S> {
    fn accept(&mut self, bundle: FeatureBundle) -> Result<usize> {
        for document in &bundle.documents {
            if !self.seen.insert(document.path()) {
                return Err(GenError::DuplicateFeature(document.id().to_string()));
            }
        }
        let written = bundle.emit(&mut *self.sink)?;
        self.documents += written;
        Ok(written)
    }

    fn stage<T>(
        &mut self,
        name: &str,
        items: impl IntoIterator<Item = T>,
        assemble: impl Fn(T) -> Result<FeatureBundle>,
    ) -> Result<()> {
        let mut written = 0;
        for item in items {
            written += self.accept(assemble(item)?)?;
        }
        log::info!("{name}: {written} documents");
        Ok(())
    }
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a GenConfig) -> Self {
        Self { catalog, config }
    }

    /// Emits everything into `sink`. Returns the number of documents.
    pub fn generate<S: DocumentSink>(&self, sink: &mut S) -> Result<usize> {
        let ns = self.config.namespace.as_str();
        let sections = &self.config.sections;
        let catalog = self.catalog;
        let mut run = Run {
            sink,
            seen: HashSet::new(),
            documents: 0,
        };

        if sections.veins {
            let layer = VeinLayer::new(catalog, ns);
            run.stage("veins", &catalog.veins, |v| layer.generate(v))?;
        }
        if sections.plants {
            let layer = PlantLayer::new(ns);
            let plants = catalog.plants.iter().filter(|p| p.worldgen);
            run.stage("plants", plants, |p| layer.generate(p))?;
        }
        if sections.crops {
            let layer = CropLayer::new(ns);
            run.stage("crops", &catalog.crops, |c| layer.generate(c))?;
        }
        if sections.berries {
            let layer = BerryLayer::new(ns);
            run.stage("berries", &catalog.berries, |b| layer.generate(b))?;
        }
        if sections.fruit_trees {
            let layer = FruitTreeLayer::new(ns);
            run.stage("fruit trees", &catalog.fruits, |f| layer.generate(f))?;
        }
        if sections.forests {
            let layer = ForestLayer::new(catalog, ns);
            run.stage("forests", &catalog.forests, |f| layer.generate(f))?;
        }
        if sections.biomes {
            let layer = BiomeLayer::new(ns);
            let biomes = builtin_biomes()
                .into_iter()
                .chain(self.config.extra_biomes.iter().cloned());
            run.stage("biomes", biomes, |b| Ok(layer.generate(&b).bundle))?;
        }

        log::info!("generated {} documents", run.documents);
        Ok(run.documents)
    }
}
