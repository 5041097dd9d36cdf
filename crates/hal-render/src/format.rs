//! Render format selection.

use std::fmt;
use std::str::FromStr;

use hal_core::error::{HalError, Result};
use hal_core::Document;

use crate::json::{JsonRenderer, RenderOptions};

/// Output format for a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Json,
}

impl FromStr for RenderFormat {
    type Err = HalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            _ => Err(HalError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
        }
    }
}

/// Render `document` in the requested format.
///
/// # Errors
///
/// Returns [`HalError::Serialization`] if encoding fails.
pub fn render(document: &Document, format: RenderFormat, options: RenderOptions) -> Result<String> {
    match format {
        RenderFormat::Json => JsonRenderer::with_options(document, options).render(),
    }
}
