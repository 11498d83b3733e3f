//! Configuration resolver - render options folded into immutable settings
//!
//! Options are applied once each, left to right, over a fixed baseline:
//!
//! - Scalar fields (`flip`, colors, square size) are last-write-wins
//! - Marks accumulate; a later mark for the same square replaces the earlier one
//! - Square sizes are clamped to [`MAX_SQUARE_SIZE`]; nothing else is validated
//!   and nothing can fail

use chess_svg_types::{
    Rgb, BOARD_SQUARES, DEFAULT_DARK, DEFAULT_LIGHT, DEFAULT_SQUARE_SIZE, MAX_SQUARE_SIZE,
};
use shakmaty::Square;

/// Static parameters describing how the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub square_width: u32,
    pub square_height: u32,
    /// Rotate the board 180 degrees (black at the bottom).
    pub flip: bool,
    pub light: Rgb,
    pub dark: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            square_width: DEFAULT_SQUARE_SIZE,
            square_height: DEFAULT_SQUARE_SIZE,
            flip: false,
            light: DEFAULT_LIGHT,
            dark: DEFAULT_DARK,
        }
    }
}

impl RenderConfig {
    /// Full board size: always 8x the square size.
    pub fn board_size(&self) -> (u32, u32) {
        (
            self.square_width * BOARD_SQUARES,
            self.square_height * BOARD_SQUARES,
        )
    }
}

/// Sparse square -> highlight color mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSet {
    slots: [Option<Rgb>; 64],
}

impl Default for MarkSet {
    fn default() -> Self {
        Self { slots: [None; 64] }
    }
}

impl MarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a square, replacing any earlier color for it.
    pub fn insert(&mut self, sq: Square, color: Rgb) {
        self.slots[usize::from(sq)] = Some(color);
    }

    pub fn get(&self, sq: Square) -> Option<Rgb> {
        self.slots[usize::from(sq)]
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marked squares in ascending square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Rgb)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|c| (Square::new(i as u32), c)))
    }
}

/// A single render option.
///
/// Build these with [`flip`], [`square_colors`], [`mark_squares`] and
/// [`square_size`], then pass a slice of them to [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOption {
    Flip,
    SquareColors { light: Rgb, dark: Rgb },
    MarkSquares { color: Rgb, squares: Vec<Square> },
    SquareSize { width: u32, height: u32 },
}

impl RenderOption {
    fn apply(&self, settings: &mut RenderSettings) {
        match self {
            RenderOption::Flip => settings.config.flip = true,
            RenderOption::SquareColors { light, dark } => {
                settings.config.light = *light;
                settings.config.dark = *dark;
            }
            RenderOption::MarkSquares { color, squares } => {
                for &sq in squares {
                    settings.marks.insert(sq, *color);
                }
            }
            RenderOption::SquareSize { width, height } => {
                settings.config.square_width = (*width).min(MAX_SQUARE_SIZE);
                settings.config.square_height = (*height).min(MAX_SQUARE_SIZE);
            }
        }
    }
}

/// Rotate the board 180 degrees, placing black at the bottom.
pub fn flip() -> RenderOption {
    RenderOption::Flip
}

/// Replace the light and dark square colors.
pub fn square_colors(light: Rgb, dark: Rgb) -> RenderOption {
    RenderOption::SquareColors { light, dark }
}

/// Highlight the given squares with `color`, e.g. the previous move.
pub fn mark_squares(color: Rgb, squares: impl IntoIterator<Item = Square>) -> RenderOption {
    RenderOption::MarkSquares {
        color,
        squares: squares.into_iter().collect(),
    }
}

/// Change the size of one square; the board is always 8x this.
///
/// Each dimension is clamped to [`MAX_SQUARE_SIZE`] when resolved.
pub fn square_size(width: u32, height: u32) -> RenderOption {
    RenderOption::SquareSize { width, height }
}

/// Fully resolved configuration for one encode call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSettings {
    pub config: RenderConfig,
    pub marks: MarkSet,
}

/// Fold `options` over the defaults, in order, exactly once each.
pub fn resolve(options: &[RenderOption]) -> RenderSettings {
    options
        .iter()
        .fold(RenderSettings::default(), |mut settings, op| {
            op.apply(&mut settings);
            settings
        })
}
