//! # hal-core
//!
//! Core types for HAL (Hypertext Application Language) resources.
//!
//! This crate defines the data model rendered by `hal-render`:
//! - [`Link`] — a single hypermedia link
//! - [`Relation`] / [`Relations`] — one-or-many items per relation name
//! - [`Document`] — a resource with links, embedded resources and state
//! - [`ResourceManifest`] — a document tree described in YAML or JSON
//! - Error hierarchy ([`HalError`])

pub mod document;
pub mod error;
pub mod link;
pub mod manifest;
pub mod relation;

pub use document::Document;
pub use error::{HalError, Result};
pub use link::Link;
pub use manifest::ResourceManifest;
pub use relation::{Relation, Relations};
