//! HAL+JSON rendering.
//!
//! Output shape:
//! ```text
//! {"_links":{...},"_embedded":{"<rel>":["<json string>",...]},"_list":{...}}
//! ```
//! Embedded documents are rendered to a string first and that string is
//! stored as a JSON string value, so each embedded resource appears
//! double-encoded. `_embedded` is left out when there is nothing embedded.

use serde_json::{Map, Value};

use hal_core::error::Result;
use hal_core::{Document, Link, Relation};

/// Rendering switches shared by a document and everything embedded in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indented multi-line output.
    pub pretty: bool,
    /// Write `/` as `\/`.
    pub escape_slashes: bool,
}

/// Renders one [`Document`] as HAL+JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer<'a> {
    document: &'a Document,
    options: RenderOptions,
}

impl<'a> JsonRenderer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self::with_options(document, RenderOptions::default())
    }

    pub fn with_options(document: &'a Document, options: RenderOptions) -> Self {
        Self { document, options }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render the document to its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`hal_core::HalError::Serialization`] if JSON encoding fails.
    pub fn render(&self) -> Result<String> {
        let value = Value::Object(self.to_object()?);
        let output = if self.options.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };

        // `/` can only occur inside string literals, so a plain replace is exact.
        if self.options.escape_slashes {
            Ok(output.replace('/', "\\/"))
        } else {
            Ok(output)
        }
    }

    /// Build the top-level HAL object: `_links`, then `_embedded` when
    /// present, then `_list`.
    ///
    /// # Errors
    ///
    /// Propagates failures from rendering embedded documents.
    pub fn to_object(&self) -> Result<Map<String, Value>> {
        let document = self.document;
        tracing::debug!(
            links = document.links().len(),
            embedded = document.embedded().len(),
            "rendering HAL document"
        );

        let mut object = Map::new();

        let mut links = Map::new();
        for (rel, relation) in document.links().iter() {
            let value = match relation {
                Relation::Single(link) => Value::Object(link_object(link)),
                Relation::Many(items) => Value::Array(
                    items
                        .iter()
                        .map(|link| Value::Object(link_object(link)))
                        .collect(),
                ),
            };
            links.insert(rel.to_string(), value);
        }
        object.insert("_links".to_string(), Value::Object(links));

        if !document.embedded().is_empty() {
            let mut embedded = Map::new();
            for (rel, relation) in document.embedded().iter() {
                let rendered = relation
                    .items()
                    .iter()
                    .map(|child| {
                        tracing::trace!(rel, "rendering embedded document");
                        Self::with_options(child, self.options)
                            .render()
                            .map(Value::String)
                    })
                    .collect::<Result<Vec<_>>>()?;
                embedded.insert(rel.to_string(), Value::Array(rendered));
            }
            object.insert("_embedded".to_string(), Value::Object(embedded));
        }

        object.insert("_list".to_string(), Value::Object(document.data().clone()));

        Ok(object)
    }
}

/// The wire object for one link. `href` is always present; `templated`
/// only when true and then as the string `"true"`; the text fields only
/// when non-empty.
pub fn link_object(link: &Link) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("href".to_string(), Value::String(link.href().to_string()));

    if link.is_templated() {
        object.insert("templated".to_string(), Value::String("true".to_string()));
    }

    let optional = [
        ("name", link.name()),
        ("hreflang", link.hreflang()),
        ("title", link.title()),
    ];
    for (key, value) in optional {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            object.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    object
}
