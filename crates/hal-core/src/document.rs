//! Document type — a HAL resource representation.

use serde_json::{Map, Value};

use crate::link::Link;
use crate::relation::{Relation, Relations};

/// A HAL resource: its own state (`data`), links by relation name, and
/// embedded sub-resources by relation name.
///
/// Links and embedded documents are only ever added through the `add_*`
/// methods, which apply the single-to-sequence multiplicity rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    links: Relations<Link>,
    embedded: Relations<Document>,
    data: Map<String, Value>,
}

impl Document {
    /// Create a document with the given state and no links or embedded resources.
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            links: Relations::new(),
            embedded: Relations::new(),
            data,
        }
    }

    /// Add a link under `rel`. The first link is stored singly; further
    /// links turn the relation into an ordered sequence.
    pub fn add_link(&mut self, rel: &str, link: Link) {
        tracing::debug!(rel, href = link.href(), "adding link");
        self.links.insert(rel, link);
    }

    /// Add several links under `rel`, in order.
    pub fn add_links(&mut self, rel: &str, links: impl IntoIterator<Item = Link>) {
        for link in links {
            self.add_link(rel, link);
        }
    }

    /// Make `link` the only link under `rel`.
    pub fn replace_link(&mut self, rel: &str, link: Link) {
        tracing::debug!(rel, href = link.href(), "replacing link");
        self.links.replace(rel, link);
    }

    /// Embed `document` under `rel`.
    ///
    /// With `as_single` the usual multiplicity rule applies. Without it the
    /// relation is a sequence from the first document on.
    pub fn add_embedded(&mut self, rel: &str, document: Document, as_single: bool) {
        tracing::debug!(rel, as_single, "embedding document");
        if as_single {
            self.embedded.insert(rel, document);
        } else {
            self.embedded.insert_many(rel, document);
        }
    }

    /// Drop every embedded document.
    pub fn clear_embedded(&mut self) {
        self.embedded.clear();
    }

    /// Set the resource state. With `overwrite` the payload is replaced;
    /// otherwise keys are merged in, later values winning.
    pub fn add_data(&mut self, data: Map<String, Value>, overwrite: bool) {
        if overwrite {
            self.data = data;
        } else {
            self.data.extend(data);
        }
    }

    pub fn links(&self) -> &Relations<Link> {
        &self.links
    }

    pub fn link(&self, rel: &str) -> Option<&Relation<Link>> {
        self.links.get(rel)
    }

    pub fn embedded(&self) -> &Relations<Document> {
        &self.embedded
    }

    pub fn embedded_relation(&self, rel: &str) -> Option<&Relation<Document>> {
        self.embedded.get(rel)
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn link(href: &str) -> Link {
        Link::new(href).unwrap()
    }

    #[test]
    fn new_document_has_only_data() {
        let doc = Document::new(data(json!({"key1": "val1", "key2": "val2"})));
        assert!(doc.links().is_empty());
        assert!(doc.embedded().is_empty());
        let keys: Vec<&String> = doc.data().keys().collect();
        assert_eq!(keys, ["key1", "key2"]);
    }

    #[test]
    fn adding_links_converts_single_to_sequence() {
        let mut doc = Document::default();
        let first = link("http://www.example.com/a.json");
        let second = link("http://www.example.com/b.json");
        let third = link("http://www.example.com/c.json");

        doc.add_link("item", first.clone());
        assert_eq!(doc.link("item"), Some(&Relation::Single(first.clone())));

        doc.add_link("item", second.clone());
        assert_eq!(
            doc.link("item"),
            Some(&Relation::Many(vec![first.clone(), second.clone()]))
        );

        doc.add_link("item", third.clone());
        assert_eq!(
            doc.link("item"),
            Some(&Relation::Many(vec![first, second, third]))
        );
    }

    #[test]
    fn add_links_applies_multiplicity_in_order() {
        let mut doc = Document::default();
        doc.add_links("item", [link("/1"), link("/2")]);
        let hrefs: Vec<&str> = doc
            .link("item")
            .map(|rel| rel.items().iter().map(Link::href).collect())
            .unwrap_or_default();
        assert_eq!(hrefs, ["/1", "/2"]);
    }

    #[test]
    fn replace_link_discards_previous_links() {
        let mut doc = Document::default();
        doc.add_link("foo", link("/foo?arg=1"));
        doc.add_link("foo", link("/foo?arg=2"));
        doc.replace_link("foo", link("/foo?arg=3"));
        assert_eq!(doc.link("foo"), Some(&Relation::Single(link("/foo?arg=3"))));
    }

    #[test]
    fn embedded_without_as_single_is_always_a_sequence() {
        let mut doc = Document::default();
        let child = Document::new(data(json!({"id": 1})));
        doc.add_embedded("detail", child.clone(), false);
        assert_eq!(
            doc.embedded_relation("detail"),
            Some(&Relation::Many(vec![child]))
        );
    }

    #[test]
    fn embedded_as_single_follows_link_multiplicity() {
        let mut doc = Document::default();
        let first = Document::new(data(json!({"id": 1})));
        let second = Document::new(data(json!({"id": 2})));

        doc.add_embedded("owner", first.clone(), true);
        assert_eq!(
            doc.embedded_relation("owner"),
            Some(&Relation::Single(first.clone()))
        );

        doc.add_embedded("owner", second.clone(), true);
        assert_eq!(
            doc.embedded_relation("owner"),
            Some(&Relation::Many(vec![first, second]))
        );
    }

    #[test]
    fn clear_embedded_leaves_links_and_data() {
        let mut doc = Document::new(data(json!({"a": 1})));
        doc.add_link("self", link("/a"));
        doc.add_embedded("detail", Document::default(), false);
        doc.clear_embedded();
        assert!(doc.embedded().is_empty());
        assert!(doc.link("self").is_some());
        assert_eq!(doc.data().get("a"), Some(&json!(1)));
    }

    #[test]
    fn add_data_overwrites_or_merges() {
        let mut doc = Document::new(data(json!({"a": 1, "b": 2})));
        doc.add_data(data(json!({"b": 3, "c": 4})), false);
        assert_eq!(Value::Object(doc.data().clone()), json!({"a": 1, "b": 3, "c": 4}));
        let keys: Vec<&String> = doc.data().keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);

        doc.add_data(data(json!({"z": 0})), true);
        assert_eq!(Value::Object(doc.data().clone()), json!({"z": 0}));
    }

    proptest! {
        #[test]
        fn every_added_link_is_kept_in_order(count in 1usize..8) {
            let mut doc = Document::default();
            let links: Vec<Link> = (0..count).map(|i| link(&format!("/page/{i}"))).collect();
            for l in &links {
                doc.add_link("page", l.clone());
            }
            let relation = doc.link("page").unwrap();
            prop_assert_eq!(relation.items(), links.as_slice());
            prop_assert_eq!(relation.is_many(), count > 1);
        }
    }
}
