//! Assemblers that expand catalog entries into document graphs.

pub mod biome;
pub mod crop;
pub mod distribution;
pub mod forest;
pub mod plant;
pub mod spawner;
pub mod vein;

use crate::document::feature::{ConfiguredFeature, PlacedFeature};
use crate::document::ident::ResourceLocation;
use crate::document::{Document, DocumentSink, TagKind};
use crate::error::Result;

pub trait Layer<I, O> {
    fn generate(&self, input: I) -> O;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagEntry {
    pub kind: TagKind,
    pub tag: ResourceLocation,
    pub members: Vec<String>,
}

/// Documents, tag memberships and lang entries produced by one assembly step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureBundle {
    pub documents: Vec<Document>,
    pub tags: Vec<TagEntry>,
    pub lang: Vec<(String, String)>,
}

impl FeatureBundle {
    pub fn push(&mut self, document: impl Into<Document>) {
        self.documents.push(document.into());
    }

    pub fn tag(&mut self, kind: TagKind, tag: ResourceLocation, members: Vec<String>) {
        self.tags.push(TagEntry { kind, tag, members });
    }

    pub fn configured(&self, id: &ResourceLocation) -> Option<&ConfiguredFeature> {
        self.documents.iter().find_map(|d| match d {
            Document::ConfiguredFeature(f) if &f.id == id => Some(f),
            _ => None,
        })
    }

    pub fn placed(&self, id: &ResourceLocation) -> Option<&PlacedFeature> {
        self.documents.iter().find_map(|d| match d {
            Document::PlacedFeature(f) if &f.id == id => Some(f),
            _ => None,
        })
    }

    /// Sends everything to `sink`. Returns the number of documents written.
    pub fn emit(&self, sink: &mut impl DocumentSink) -> Result<usize> {
        for document in &self.documents {
            sink.emit(document)?;
        }
        for entry in &self.tags {
            sink.declare_tag(entry.kind, &entry.tag, &entry.members);
        }
        for (key, value) in &self.lang {
            sink.declare_lang(key, value);
        }
        Ok(self.documents.len())
    }
}
