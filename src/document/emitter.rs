use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{json, Map, Value};

use crate::error::Result;

use super::ident::ResourceLocation;
use super::{Document, TagKind};

/// Where assembled documents go.
pub trait DocumentSink {
    /// Stores `value` at `path`, replacing anything already there.
    fn write(&mut self, path: PathBuf, value: Value);

    /// Adds `members` to `tag`, skipping members it already lists.
    fn declare_tag(&mut self, kind: TagKind, tag: &ResourceLocation, members: &[String]);

    fn declare_lang(&mut self, key: &str, value: &str);

    fn emit(&mut self, document: &Document) -> Result<()> {
        let value = document.to_json()?;
        log::debug!("emit {}", document.id());
        self.write(document.path(), value);
        Ok(())
    }
}

/// In-memory resource tree, flushed to disk once at the end of a run.
#[derive(Debug, Default)]
pub struct ResourceTree {
    domain: String,
    files: BTreeMap<PathBuf, Value>,
    tags: BTreeMap<(TagKind, ResourceLocation), Vec<String>>,
    lang: Map<String, Value>,
}

impl ResourceTree {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        self.files.get(path.as_ref())
    }

    pub fn tag(&self, kind: TagKind, tag: &ResourceLocation) -> Option<&[String]> {
        self.tags.get(&(kind, tag.clone())).map(Vec::as_slice)
    }

    pub fn lang(&self, key: &str) -> Option<&str> {
        self.lang.get(key).and_then(Value::as_str)
    }

    /// Number of files a flush would write.
    pub fn len(&self) -> usize {
        self.files.len() + self.tags.len() + usize::from(!self.lang.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All files as `(relative path, contents)`, in path order for documents
    /// followed by tags and the lang table.
    pub fn entries(&self) -> Vec<(PathBuf, Value)> {
        let mut entries: Vec<_> = self
            .files
            .iter()
            .map(|(path, value)| (path.clone(), value.clone()))
            .collect();
        for ((kind, tag), values) in &self.tags {
            entries.push((kind.path(tag), json!({"replace": false, "values": values})));
        }
        if !self.lang.is_empty() {
            let path: PathBuf = ["assets", &self.domain, "lang", "en_us.json"].iter().collect();
            entries.push((path, Value::Object(self.lang.clone())));
        }
        entries
    }

    /// Writes every file under `root`. Returns the number of files written.
    pub fn flush(&self, root: &Path, pretty: bool) -> anyhow::Result<usize> {
        let entries = self.entries();
        for (path, value) in &entries {
            let path = root.join(path);
            write_json(&path, value, pretty).with_context(|| format!("writing {}", path.display()))?;
        }
        log::info!("wrote {} files to {}", entries.len(), root.display());
        Ok(entries.len())
    }
}

fn write_json(path: &Path, value: &Value, pretty: bool) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.flush()?;
    Ok(())
}

impl DocumentSink for ResourceTree {
    fn write(&mut self, path: PathBuf, value: Value) {
        if self.files.insert(path.clone(), value).is_some() {
            log::debug!("overwrote {}", path.display());
        }
    }

    fn declare_tag(&mut self, kind: TagKind, tag: &ResourceLocation, members: &[String]) {
        let values = self.tags.entry((kind, tag.clone())).or_default();
        for member in members {
            if !values.contains(member) {
                values.push(member.clone());
            }
        }
    }

    fn declare_lang(&mut self, key: &str, value: &str) {
        self.lang.insert(key.to_string(), Value::String(value.to_string()));
    }
}

/// Title-cases an identifier for display: `salt_marsh` becomes `Salt Marsh`.
pub fn lang(key: &str) -> String {
    key.replace(['_', '/'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
