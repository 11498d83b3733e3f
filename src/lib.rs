//! Chess board rendering (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them under one name and adds theme loading for the CLI.
//!
//! ```
//! use chess_svg::chess::{Board, Square};
//! use chess_svg::types::Rgb;
//! use chess_svg::{flip, mark_squares, render_to_string};
//!
//! let svg = render_to_string(
//!     &Board::new(),
//!     &[flip(), mark_squares(Rgb::new(255, 255, 0), [Square::E2, Square::E4])],
//! )
//! .unwrap();
//! assert!(svg.ends_with("</svg>\n"));
//! ```

pub mod theme;

pub use chess_svg_core as core;
pub use chess_svg_glyphs as glyphs;
pub use chess_svg_term as term;
pub use chess_svg_types as types;
pub use chess_svg_writer as svg;

pub use chess_svg_core::chess;
pub use chess_svg_core::{
    encode, flip, mark_squares, square_colors, square_size, EncodeError, Format, FormatError,
    RenderOption,
};
pub use chess_svg_writer::{render, render_to_string, SvgFormat};
pub use theme::{Theme, ThemeError};
