//! Output format contract.
//!
//! The encoder programs against [`Format`]; each backend (SVG markup,
//! terminal framebuffer, ...) decides how a draw call becomes output.
//! Coordinates are grid cells, `(0, 0)` at the top-left.

use std::io;

use chess_svg_types::Rgb;
use shakmaty::Piece;
use thiserror::Error;

/// Error raised by an output backend.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Backend(String),
}

/// Edge label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Rank digit, drawn near the left edge of the cell.
    Rank(char),
    /// File letter, drawn near the bottom-right of the cell.
    File(char),
}

impl Label {
    pub fn text(&self) -> char {
        match self {
            Label::Rank(c) | Label::File(c) => *c,
        }
    }
}

/// A drawing backend driven by the board encoder.
///
/// Call order per encode: `init` once, then per square `draw_square`,
/// optional `draw_mark`, optional `draw_piece`, optional labels, and
/// finally `finish` once.
pub trait Format {
    /// Prepare a canvas of `width` x `height` board units.
    fn init(&mut self, width: u32, height: u32) -> Result<(), FormatError>;

    /// Paint the background fill of one cell.
    fn draw_square(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError>;

    /// Paint a translucent highlight over one cell.
    fn draw_mark(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError>;

    /// Paint a piece glyph exactly covering one cell.
    fn draw_piece(&mut self, x: u8, y: u8, piece: Piece) -> Result<(), FormatError>;

    /// Paint a rank or file label inside one cell.
    fn draw_label(&mut self, x: u8, y: u8, label: Label, color: Rgb) -> Result<(), FormatError>;

    /// Flush any trailing output.
    fn finish(&mut self) -> Result<(), FormatError>;
}

impl<F: Format + ?Sized> Format for &mut F {
    fn init(&mut self, width: u32, height: u32) -> Result<(), FormatError> {
        (**self).init(width, height)
    }

    fn draw_square(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
        (**self).draw_square(x, y, color)
    }

    fn draw_mark(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
        (**self).draw_mark(x, y, color)
    }

    fn draw_piece(&mut self, x: u8, y: u8, piece: Piece) -> Result<(), FormatError> {
        (**self).draw_piece(x, y, piece)
    }

    fn draw_label(&mut self, x: u8, y: u8, label: Label, color: Rgb) -> Result<(), FormatError> {
        (**self).draw_label(x, y, label, color)
    }

    fn finish(&mut self) -> Result<(), FormatError> {
        (**self).finish()
    }
}
