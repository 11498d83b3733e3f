//! Core rendering logic - pure, deterministic, and testable
//!
//! This crate turns a chess position into an ordered stream of draw calls.
//! It knows nothing about any concrete output format, making it:
//!
//! - **Deterministic**: Same board and options produce identical draw calls
//! - **Testable**: Backends can be replaced by a recorder in tests
//! - **Portable**: The same encoder feeds SVG, terminal, or any other sink
//!
//! # Module Structure
//!
//! - [`config`]: Render options folded into immutable [`RenderSettings`]
//! - [`geometry`]: Square -> grid cell and square -> color mapping
//! - [`format`]: The [`Format`] backend contract and its error type
//! - [`encoder`]: The per-square encoding loop
//!
//! # Rendering Rules
//!
//! - **Order**: Squares are visited a1, b1, ..., h8, each exactly once
//! - **Colors**: Even (file + rank) is dark, odd is light; labels use the opposite
//! - **Layering**: Fill, then highlight, then piece, then labels
//! - **Orientation**: White at the bottom; `flip` rotates the board 180 degrees
//!
//! # Example
//!
//! ```
//! use chess_svg_core::{encode, flip, Format, FormatError, Label};
//! use chess_svg_core::chess::{Board, Piece};
//! use chess_svg_core::types::Rgb;
//!
//! #[derive(Default)]
//! struct CountPieces(usize);
//!
//! impl Format for CountPieces {
//!     fn init(&mut self, _: u32, _: u32) -> Result<(), FormatError> { Ok(()) }
//!     fn draw_square(&mut self, _: u8, _: u8, _: Rgb) -> Result<(), FormatError> { Ok(()) }
//!     fn draw_mark(&mut self, _: u8, _: u8, _: Rgb) -> Result<(), FormatError> { Ok(()) }
//!     fn draw_piece(&mut self, _: u8, _: u8, _: Piece) -> Result<(), FormatError> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//!     fn draw_label(&mut self, _: u8, _: u8, _: Label, _: Rgb) -> Result<(), FormatError> { Ok(()) }
//!     fn finish(&mut self) -> Result<(), FormatError> { Ok(()) }
//! }
//!
//! let mut counter = CountPieces::default();
//! encode(&Board::new(), &mut counter, &[flip()]).unwrap();
//! assert_eq!(counter.0, 32);
//! ```

pub mod config;
pub mod encoder;
pub mod format;
pub mod geometry;

pub use chess_svg_types as types;
pub use shakmaty as chess;

// Re-export commonly used types for convenience
pub use config::{
    flip, mark_squares, resolve, square_colors, square_size, MarkSet, RenderConfig, RenderOption,
    RenderSettings,
};
pub use encoder::{encode, EncodeError, Encoder};
pub use format::{Format, FormatError, Label};
pub use geometry::{cell_for_square, square_color, text_color, Cell};
