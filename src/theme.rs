//! JSON board themes.
//!
//! A theme file is a flat object, every field optional:
//!
//! ```json
//! { "light": "#f0d9b5", "dark": "#b58863", "square_size": 60, "mark_color": "#ffff00" }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use chess_svg_core::types::{Rgb, MAX_SQUARE_SIZE};
use chess_svg_core::{square_colors, square_size, RenderOption};

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid color for `{field}`: {value:?} (expected #rrggbb)")]
    Color { field: &'static str, value: String },
    #[error("square_size must be between 1 and {max}, got {0}", max = MAX_SQUARE_SIZE)]
    SquareSize(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
    #[serde(default)]
    pub square_size: Option<u32>,
    #[serde(default)]
    pub mark_color: Option<String>,
}

fn color(field: &'static str, value: &Option<String>) -> Result<Option<Rgb>, ThemeError> {
    match value {
        None => Ok(None),
        Some(v) => Rgb::from_hex(v).map(Some).ok_or_else(|| ThemeError::Color {
            field,
            value: v.clone(),
        }),
    }
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let theme = Self::from_json(&json)?;
        debug!(path = %path.display(), ?theme, "theme loaded");
        Ok(theme)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        color("light", &self.light)?;
        color("dark", &self.dark)?;
        color("mark_color", &self.mark_color)?;
        match self.square_size {
            Some(size) if size == 0 || size > MAX_SQUARE_SIZE => {
                return Err(ThemeError::SquareSize(size))
            }
            _ => {}
        }
        Ok(())
    }

    /// Highlight color for marked squares, if the theme sets one.
    pub fn mark_color(&self) -> Result<Option<Rgb>, ThemeError> {
        color("mark_color", &self.mark_color)
    }

    /// Render options for the fields this theme sets.
    ///
    /// A theme giving only one of `light`/`dark` keeps the default for the
    /// other.
    pub fn options(&self, defaults: (Rgb, Rgb)) -> Result<Vec<RenderOption>, ThemeError> {
        let mut opts = Vec::new();
        let light = color("light", &self.light)?;
        let dark = color("dark", &self.dark)?;
        if light.is_some() || dark.is_some() {
            opts.push(square_colors(
                light.unwrap_or(defaults.0),
                dark.unwrap_or(defaults.1),
            ));
        }
        if let Some(size) = self.square_size {
            opts.push(square_size(size, size));
        }
        Ok(opts)
    }
}
