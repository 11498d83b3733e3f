//! SVG output for chess boards.
//!
//! [`SvgFormat`] implements the core [`Format`](chess_svg_core::Format)
//! contract by writing markup. [`render`] and [`render_to_string`] are the
//! usual entry points: resolve options, encode the board, write one complete
//! document.
//!
//! ```
//! use chess_svg_core::chess::Board;
//! use chess_svg_writer::render_to_string;
//!
//! let svg = render_to_string(&Board::new(), &[]).unwrap();
//! assert!(svg.starts_with("<?xml"));
//! assert_eq!(svg.matches("<rect").count(), 65);
//! ```

pub mod canvas;
pub mod format;

use std::io::{BufWriter, Write};

use chess_svg_core::chess::Board;
use chess_svg_core::{EncodeError, Encoder, FormatError, RenderOption};
use tracing::debug;

pub use canvas::SvgCanvas;
pub use format::SvgFormat;

/// Write `board` as an SVG document to `writer`.
///
/// Output is buffered and flushed once the document is closed. On error,
/// whatever was written before the failure is left in `writer`.
pub fn render<W: Write>(
    writer: W,
    board: &Board,
    options: &[RenderOption],
) -> Result<(), EncodeError> {
    let encoder = Encoder::from_options(options);
    let mut format = SvgFormat::new(BufWriter::new(writer));
    encoder.encode(board, &mut format)
}

/// Render `board` into an in-memory SVG string.
pub fn render_to_string(board: &Board, options: &[RenderOption]) -> Result<String, EncodeError> {
    let mut out = Vec::with_capacity(64 * 1024);
    render(&mut out, board, options)?;
    let svg = String::from_utf8(out).map_err(|e| {
        EncodeError::Finish(FormatError::Backend(format!("non utf-8 output: {e}")))
    })?;
    debug!(bytes = svg.len(), "svg rendered");
    Ok(svg)
}
