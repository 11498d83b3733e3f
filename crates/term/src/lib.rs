//! Terminal board output.
//!
//! The board is drawn into a simple framebuffer by [`TermFormat`] and then
//! flushed as crossterm escape sequences. No widgets or layout engine.
//!
//! - [`fb`]: framebuffer and styles
//! - [`format`]: the encoder backend
//! - [`renderer`]: framebuffer to escape sequences

pub mod fb;
pub mod format;
pub mod renderer;

pub use chess_svg_core as core;
pub use chess_svg_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use format::{piece_symbol, TermFormat};
pub use renderer::{encode_full_into, print_frame};

use chess_svg_core::chess::Board;
use chess_svg_core::{encode, EncodeError, RenderOption};

/// Encode `board` into a fresh framebuffer with the default 3x1 cells.
pub fn render_frame(board: &Board, options: &[RenderOption]) -> Result<FrameBuffer, EncodeError> {
    let mut format = TermFormat::default();
    encode(board, &mut format, options)?;
    Ok(format.into_frame())
}
