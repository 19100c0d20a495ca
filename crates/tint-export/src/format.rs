//! Output format selection and the single export entry point.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tint_palette::{BasePalette, ProjectColors};
use tracing::debug;

use crate::{css, figma, react_native, scss, tailwind};

/// Errors raised while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Target format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Css,
    Tailwind,
    Scss,
    Figma,
    ReactNative,
}

impl OutputFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Scss => "scss",
            Self::Figma => "figma",
            Self::ReactNative => "react-native",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Tailwind, Self::Scss, Self::Figma, Self::ReactNative]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `palette` plus any project colors in `format`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if a JSON-based format fails to encode.
pub fn export(
    format: OutputFormat,
    palette: &BasePalette,
    extras: &ProjectColors,
) -> Result<String, ExportError> {
    debug!(%format, extras = extras.len(), "exporting palette");
    Ok(match format {
        OutputFormat::Css => css::export_css(palette, extras),
        OutputFormat::Tailwind => tailwind::export_tailwind(palette, extras)?,
        OutputFormat::Scss => scss::export_scss(palette, extras),
        OutputFormat::Figma => figma::export_figma(palette, extras)?,
        OutputFormat::ReactNative => react_native::export_react_native(palette, extras),
    })
}

/// Render only `colors`, with no base palette, in `format`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if a JSON-based format fails to encode.
pub fn export_colors(format: OutputFormat, colors: &ProjectColors) -> Result<String, ExportError> {
    debug!(%format, colors = colors.len(), "exporting standalone colors");
    Ok(match format {
        OutputFormat::Css => css::export_css_colors(colors),
        OutputFormat::Tailwind => tailwind::export_tailwind_colors(colors)?,
        OutputFormat::Scss => scss::export_scss_colors(colors),
        OutputFormat::Figma => figma::export_figma_colors(colors)?,
        OutputFormat::ReactNative => react_native::export_react_native_colors(colors),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
