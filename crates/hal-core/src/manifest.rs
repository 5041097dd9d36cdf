//! Resource manifests: a document tree described in YAML or JSON.
//!
//! Format:
//! ```yaml
//! data:
//!   key1: val1
//! links:
//!   self: /orders/1             # href shorthand
//!   prev: { href: "/orders?page=1" }
//!   item:
//!     - { href: /a, name: first }
//!     - { href: /b }
//! embedded:
//!   detail:                     # a sequence is always rendered as an array
//!     - data: { id: 1 }
//!   owner:                      # a single mapping keeps single multiplicity
//!     data: { id: 7 }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::{HalError, Result};
use crate::link::Link;

/// Deepest `embedded` nesting a manifest may describe. Every level is
/// string-encoded into its parent, so output size doubles per level.
pub const MAX_EMBED_DEPTH: usize = 16;

/// A document tree before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceManifest {
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub links: IndexMap<String, OneOrMany<LinkManifest>>,
    #[serde(default)]
    pub embedded: IndexMap<String, OneOrMany<ResourceManifest>>,
}

/// Either a single entry or a sequence of entries under one relation name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// A link as written in a manifest. `href` is optional here so that a
/// missing target surfaces as [`HalError::InvalidLink`] rather than a
/// parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkManifest {
    Href(String),
    Full(LinkFields),
}

/// The long form of a manifest link.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkFields {
    pub href: Option<String>,
    #[serde(default)]
    pub templated: bool,
    pub name: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
}

impl LinkManifest {
    /// Validate into a [`Link`].
    ///
    /// # Errors
    ///
    /// Returns [`HalError::InvalidLink`] if `href` is missing or empty.
    pub fn into_link(self) -> Result<Link> {
        match self {
            Self::Href(href) => Link::new(href),
            Self::Full(fields) => Link::from_parts(
                fields.href,
                fields.templated,
                fields.name,
                fields.hreflang,
                fields.title,
            ),
        }
    }
}

impl ResourceManifest {
    /// Parse a manifest from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Manifest`] if the YAML is malformed or does not
    /// match the manifest shape.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| HalError::Manifest(e.to_string()))
    }

    /// Parse a manifest from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Manifest`] if the JSON is malformed or does not
    /// match the manifest shape.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| HalError::Manifest(e.to_string()))
    }

    /// Read a manifest file, as JSON when the extension is `.json` and as
    /// YAML otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Io`] if the file cannot be read and
    /// [`HalError::Manifest`] if its content does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        tracing::debug!(path = %path.display(), is_json, "loading manifest");

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Build the [`Document`] tree this manifest describes.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::InvalidLink`] for any link, at any depth, without
    /// a usable `href`, and [`HalError::Manifest`] when embedded documents
    /// nest deeper than [`MAX_EMBED_DEPTH`].
    pub fn into_document(self) -> Result<Document> {
        self.build(0)
    }

    fn build(self, depth: usize) -> Result<Document> {
        if depth > MAX_EMBED_DEPTH {
            return Err(HalError::Manifest(format!(
                "embedded documents nest deeper than {MAX_EMBED_DEPTH} levels"
            )));
        }

        let mut document = Document::new(self.data);

        for (rel, links) in self.links {
            match links {
                OneOrMany::One(link) => document.add_link(&rel, link.into_link()?),
                OneOrMany::Many(links) => {
                    let links = links
                        .into_iter()
                        .map(LinkManifest::into_link)
                        .collect::<Result<Vec<_>>>()?;
                    document.add_links(&rel, links);
                }
            }
        }

        for (rel, embedded) in self.embedded {
            match embedded {
                OneOrMany::One(child) => document.add_embedded(&rel, child.build(depth + 1)?, true),
                OneOrMany::Many(children) => {
                    for child in children {
                        document.add_embedded(&rel, child.build(depth + 1)?, false);
                    }
                }
            }
        }

        Ok(document)
    }
}
