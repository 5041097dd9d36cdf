//! Link type — a single hypermedia link of a HAL resource.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{HalError, Result};

/// A hypermedia link.
///
/// The `href` is never empty: construction rejects an empty target and
/// [`Link::set_href`] ignores empty assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    href: String,
    /// True when `href` is a URI Template (RFC 6570).
    templated: bool,
    name: Option<String>,
    hreflang: Option<String>,
    title: Option<String>,
    /// Attributes set under names that are not one of the five link fields.
    /// Kept for lookup only; renderers ignore them.
    extensions: IndexMap<String, Value>,
}

impl Link {
    /// Create an untemplated link pointing at `href`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::InvalidLink`] if `href` is empty.
    pub fn new(href: impl Into<String>) -> Result<Self> {
        let href = href.into();
        if href.is_empty() {
            return Err(HalError::InvalidLink);
        }

        Ok(Self {
            href,
            templated: false,
            name: None,
            hreflang: None,
            title: None,
            extensions: IndexMap::new(),
        })
    }

    /// Create a link from all five fields at once. An absent `href` is
    /// treated the same as an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::InvalidLink`] if `href` is absent or empty.
    pub fn from_parts(
        href: Option<String>,
        templated: bool,
        name: Option<String>,
        hreflang: Option<String>,
        title: Option<String>,
    ) -> Result<Self> {
        let mut link = Self::new(href.unwrap_or_default())?;
        link.templated = templated;
        link.name = name;
        link.hreflang = hreflang;
        link.title = title;
        Ok(link)
    }

    #[must_use]
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn is_templated(&self) -> bool {
        self.templated
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    /// Replace the link target. Empty values are ignored and the previous
    /// `href` is kept; returns whether the new value was applied.
    pub fn set_href(&mut self, href: impl Into<String>) -> bool {
        let href = href.into();
        if href.is_empty() {
            return false;
        }
        self.href = href;
        true
    }

    pub fn set_templated(&mut self, templated: bool) {
        self.templated = templated;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_hreflang(&mut self, hreflang: Option<String>) {
        self.hreflang = hreflang;
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// True iff the link has a non-empty `href`.
    pub fn check(&self) -> bool {
        !self.href.is_empty()
    }

    /// Look up a property by name.
    ///
    /// The five link fields are returned as JSON values (`templated` as a
    /// boolean); unset optional fields and unknown names that were never
    /// set return `None`.
    pub fn get(&self, property: &str) -> Option<Value> {
        match property {
            "href" => Some(Value::String(self.href.clone())),
            "templated" => Some(Value::Bool(self.templated)),
            "name" => self.name.clone().map(Value::String),
            "hreflang" => self.hreflang.clone().map(Value::String),
            "title" => self.title.clone().map(Value::String),
            other => self.extensions.get(other).cloned(),
        }
    }

    /// Set a property by name.
    ///
    /// `href` ignores empty strings and `null`. The optional text fields
    /// accept a string or `null` (which clears them). Any other name is
    /// stored as an extension attribute.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::InvalidProperty`] when a known property is given
    /// a value of the wrong JSON type.
    pub fn set(&mut self, property: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match property {
            "href" => match value {
                Value::String(href) => {
                    self.set_href(href);
                }
                Value::Null => {}
                _ => return Err(invalid_property(property, "a string")),
            },
            "templated" => match value {
                Value::Bool(templated) => self.templated = templated,
                _ => return Err(invalid_property(property, "a boolean")),
            },
            "name" => self.name = optional_text(property, value)?,
            "hreflang" => self.hreflang = optional_text(property, value)?,
            "title" => self.title = optional_text(property, value)?,
            other => {
                self.extensions.insert(other.to_string(), value);
            }
        }
        Ok(())
    }
}

fn invalid_property(property: &str, expected: &'static str) -> HalError {
    HalError::InvalidProperty {
        property: property.to_string(),
        expected,
    }
}

fn optional_text(property: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::String(text) => Ok(Some(text)),
        Value::Null => Ok(None),
        _ => Err(invalid_property(property, "a string or null")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn sample() -> Link {
        Link::new("http://www.example.com/nada.json")
            .unwrap()
            .with_name("My name")
            .with_hreflang("en-GB")
            .with_title("My title")
    }

    #[test]
    fn creates_links_with_every_field_combination() {
        let cases = [
            ("http://www.example.com/nada.json", false, None, None, None),
            ("http://www.example.com/nada{?id}.json", true, None, None, None),
            ("http://www.example.com/nada.json", false, Some("Test name"), None, None),
            ("http://www.example.com/nada{?id}.json", true, Some("Test name"), Some("en-GB"), None),
            (
                "http://www.example.com/nada{?id}.json",
                true,
                Some("Test name"),
                Some("en-GB"),
                Some("My title"),
            ),
        ];

        for (href, templated, name, hreflang, title) in cases {
            let link = Link::from_parts(
                Some(href.to_string()),
                templated,
                name.map(str::to_string),
                hreflang.map(str::to_string),
                title.map(str::to_string),
            )
            .unwrap();
            assert_eq!(link.href(), href);
            assert_eq!(link.is_templated(), templated);
            assert_eq!(link.name(), name);
            assert_eq!(link.hreflang(), hreflang);
            assert_eq!(link.title(), title);
        }
    }

    #[test]
    fn rejects_empty_or_absent_href() {
        let err = Link::new("").unwrap_err();
        assert_eq!(err.to_string(), "HAL_ERR_INVALIDLINK");

        let err = Link::from_parts(None, false, None, None, None).unwrap_err();
        assert!(matches!(err, HalError::InvalidLink));
    }

    #[test]
    fn check_accepts_absolute_relative_and_templated_hrefs() {
        for href in [
            "http://www.example.com/nada.json",
            "nada.json",
            "http://www.example.com/nada{?id}.json",
            "nada{?id}.json",
        ] {
            assert!(Link::new(href).unwrap().check(), "{href}");
        }
    }

    #[test]
    fn get_returns_known_properties() {
        let link = sample();
        assert_eq!(link.get("href"), Some(json!("http://www.example.com/nada.json")));
        assert_eq!(link.get("templated"), Some(json!(false)));
        assert_eq!(link.get("name"), Some(json!("My name")));
        assert_eq!(link.get("hreflang"), Some(json!("en-GB")));
        assert_eq!(link.get("title"), Some(json!("My title")));
        assert_eq!(link.get("invalidwhatever"), None);
    }

    #[test]
    fn set_updates_known_properties_and_keeps_extensions() {
        let cases = [
            ("href", json!("http://www.example.com/lol.json")),
            ("templated", json!(true)),
            ("name", json!("My new name")),
            ("hreflang", json!("el-CY")),
            ("title", json!("My new title")),
            ("invalidwhatever", json!(123)),
        ];

        for (property, value) in cases {
            let mut link = sample();
            link.set(property, value.clone()).unwrap();
            assert_eq!(link.get(property), Some(value), "{property}");
        }
    }

    #[test]
    fn set_ignores_empty_href() {
        let mut link = sample();
        link.set("href", "").unwrap();
        assert_eq!(link.href(), "http://www.example.com/nada.json");

        link.set("href", Value::Null).unwrap();
        assert_eq!(link.href(), "http://www.example.com/nada.json");

        assert!(!link.set_href(""));
        assert!(link.check());
    }

    #[test]
    fn set_rejects_wrong_value_types() {
        let mut link = sample();
        let err = link.set("templated", "yes").unwrap_err();
        assert_eq!(err.code(), "HAL_ERR_INVALIDPROPERTY");
        assert!(!link.is_templated());

        assert!(link.set("href", 42).is_err());
        assert!(link.set("title", json!(["a"])).is_err());
    }

    #[test]
    fn set_null_clears_optional_text() {
        let mut link = sample();
        link.set("name", Value::Null).unwrap();
        assert_eq!(link.name(), None);
        assert_eq!(link.get("name"), None);
    }

    proptest! {
        #[test]
        fn fields_round_trip(
            href in "[a-z0-9:/.?={}]{1,40}",
            templated in any::<bool>(),
            name in proptest::option::of("[A-Za-z ]{0,12}"),
            hreflang in proptest::option::of("[a-z]{2}-[A-Z]{2}"),
            title in proptest::option::of(".{0,20}"),
        ) {
            let link = Link::from_parts(
                Some(href.clone()),
                templated,
                name.clone(),
                hreflang.clone(),
                title.clone(),
            ).unwrap();
            prop_assert_eq!(link.href(), href.as_str());
            prop_assert_eq!(link.is_templated(), templated);
            prop_assert_eq!(link.name(), name.as_deref());
            prop_assert_eq!(link.hreflang(), hreflang.as_deref());
            prop_assert_eq!(link.title(), title.as_deref());
        }

        #[test]
        fn empty_href_assignment_keeps_previous(href in "[a-z0-9/.]{1,30}") {
            let mut link = Link::new(href.clone()).unwrap();
            link.set("href", "").unwrap();
            prop_assert_eq!(link.href(), href.as_str());
            prop_assert!(link.check());
        }
    }
}
