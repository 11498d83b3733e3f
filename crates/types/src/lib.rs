//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every rendering crate.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (configuration, SVG output, terminal output).
//!
//! # Board Geometry
//!
//! A chess board is always an 8x8 grid of squares:
//!
//! - **Files**: 8 columns, `a`-`h` (indexed 0-7)
//! - **Ranks**: 8 rows, `1`-`8` (indexed 0-7)
//! - **Board size**: exactly 8 x the configured square size in each axis
//!
//! # Rendering Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SQUARE_SIZE` | 45 | Square width and height in SVG units |
//! | `MAX_SQUARE_SIZE` | 65536 | Upper bound on square width and height |
//! | `DEFAULT_LIGHT` | `#ebd1a6` | Light square fill |
//! | `DEFAULT_DARK` | `#a57551` | Dark square fill |
//! | `MARK_OPACITY` | 0.2 | Opacity of highlight overlays |
//! | `LABEL_FONT_SIZE` | 11 | Rank/file label font size (px) |
//! | `GLYPH_SIZE` | 45 | Native size of the bundled piece glyphs |
//!
//! # Examples
//!
//! ```
//! use chess_svg_types::{Rgb, DEFAULT_DARK, DEFAULT_LIGHT, BOARD_SQUARES};
//!
//! // Hex conversion
//! assert_eq!(DEFAULT_LIGHT.to_hex(), "#ebd1a6");
//! assert_eq!(DEFAULT_DARK.to_hex(), "#a57551");
//!
//! // Parse from hex (leading '#' optional, case-insensitive)
//! assert_eq!(Rgb::from_hex("#FF0000"), Some(Rgb::new(255, 0, 0)));
//! assert_eq!(Rgb::from_hex("zz0000"), None);
//!
//! assert_eq!(BOARD_SQUARES, 8);
//! ```

use std::fmt;

/// Number of squares along each board edge
pub const BOARD_SQUARES: u32 = 8;

/// Default square width and height in SVG units
pub const DEFAULT_SQUARE_SIZE: u32 = 45;

/// Largest accepted square width or height; larger sizes are clamped.
///
/// Keeps every label and board coordinate well inside `u32`.
pub const MAX_SQUARE_SIZE: u32 = 1 << 16;

/// Default light square fill, RGB(235, 209, 166)
pub const DEFAULT_LIGHT: Rgb = Rgb::new(235, 209, 166);

/// Default dark square fill, RGB(165, 117, 81)
pub const DEFAULT_DARK: Rgb = Rgb::new(165, 117, 81);

/// Opacity of the highlight overlay drawn over marked squares
pub const MARK_OPACITY: f32 = 0.2;

/// Font size of the rank and file labels (px)
pub const LABEL_FONT_SIZE: u32 = 11;

/// Native width and height of the bundled piece glyphs
pub const GLYPH_SIZE: u32 = 45;

/// 24-bit RGB color.
///
/// There is no alpha channel: fills are always opaque and overlay
/// translucency is a separate opacity style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_svg_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(255, 0, 16).to_hex(), "#ff0010");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` or `rrggbb` string (case-insensitive)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Blend `over` onto `self` with the given opacity (0.0 - 1.0)
    ///
    /// Used by backends that cannot express translucency directly.
    pub fn blend(&self, over: Rgb, opacity: f32) -> Rgb {
        let a = opacity.clamp(0.0, 1.0);
        let mix = |base: u8, top: u8| -> u8 {
            (base as f32 * (1.0 - a) + top as f32 * a).round() as u8
        };
        Rgb::new(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
