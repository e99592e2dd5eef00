use std::fmt;

use serde::{Serialize, Serializer};

/// A namespaced identifier, `domain:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    domain: String,
    path: String,
}

impl ResourceLocation {
    pub fn new(domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
        }
    }

    /// Parses `domain:path`, falling back to `default_domain` when the
    /// string carries no domain.
    pub fn parse(value: &str, default_domain: &str) -> Self {
        match value.split_once(':') {
            Some((domain, path)) => Self::new(domain, path),
            None => Self::new(default_domain, value),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reference to the tag with this identifier, `#domain:path`.
    pub fn tag_ref(&self) -> String {
        format!("#{self}")
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.domain, self.path)
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The role a generated document plays relative to the base identifier it
/// was assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureRole {
    /// The feature that places a single block or structure: `<base>`.
    Singular,
    /// The random patch wrapping the singular feature: `<base>_patch`.
    Patch,
    /// A forest entry: `<dir>/<name>_entry`.
    Entry,
    /// The dead variant of a forest entry: `<dir>/dead_<name>_entry`.
    DeadEntry,
}

pub fn feature_id(base: &ResourceLocation, role: FeatureRole) -> ResourceLocation {
    let path = match role {
        FeatureRole::Singular => base.path.clone(),
        FeatureRole::Patch => format!("{}_patch", base.path),
        FeatureRole::Entry => format!("{}_entry", base.path),
        FeatureRole::DeadEntry => match base.path.rsplit_once('/') {
            Some((dir, name)) => format!("{dir}/dead_{name}_entry"),
            None => format!("dead_{}_entry", base.path),
        },
    };
    ResourceLocation::new(base.domain.clone(), path)
}
