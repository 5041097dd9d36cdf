//! # hal-render
//!
//! Serializes `hal-core` documents to the HAL+JSON wire format.
//!
//! Includes:
//! - [`JsonRenderer`] with recursive, double-encoded embedding
//! - [`link_object`] for a single link's wire object
//! - [`RenderOptions`] (pretty printing, slash escaping)
//! - [`RenderFormat`] and [`render`] for format dispatch

pub mod format;
pub mod json;

pub use format::{render, RenderFormat};
pub use json::{link_object, JsonRenderer, RenderOptions};
