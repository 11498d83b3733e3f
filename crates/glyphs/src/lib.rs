//! Bundled piece glyphs.
//!
//! Twelve 45x45 SVG documents, one per (color, role), compiled into the
//! binary. Each is addressed by a two-character code: color letter (`w`/`b`)
//! followed by the role letter (`K`, `Q`, `R`, `B`, `N`, `P`).
//!
//! The key set is closed, so [`glyph`] can never miss. Every asset starts
//! with [`GLYPH_ROOT`]; an asset that does not is a build defect and
//! [`Glyph::body`] panics on it.

use shakmaty::{Color, Piece, Role};

/// Root element every bundled glyph document starts with.
pub const GLYPH_ROOT: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="45" height="45">"#;

/// One embedded piece glyph.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    code: &'static str,
    svg: &'static str,
}

impl Glyph {
    /// Two-character asset code, e.g. `"wK"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The complete SVG document.
    pub fn svg(&self) -> &'static str {
        self.svg
    }

    /// Markup between the root element and its closing tag.
    pub fn body(&self) -> &'static str {
        match self
            .svg
            .strip_prefix(GLYPH_ROOT)
            .and_then(|rest| rest.trim_end().strip_suffix("</svg>"))
        {
            Some(body) => body.trim(),
            None => panic!("glyph {} is not a {} document", self.code, GLYPH_ROOT),
        }
    }
}

macro_rules! glyph {
    ($code:literal) => {
        Glyph {
            code: $code,
            svg: include_str!(concat!("../pieces/", $code, ".svg")),
        }
    };
}

static GLYPHS: [Glyph; 12] = [
    glyph!("wK"),
    glyph!("wQ"),
    glyph!("wR"),
    glyph!("wB"),
    glyph!("wN"),
    glyph!("wP"),
    glyph!("bK"),
    glyph!("bQ"),
    glyph!("bR"),
    glyph!("bB"),
    glyph!("bN"),
    glyph!("bP"),
];

fn slot(piece: Piece) -> usize {
    let color = match piece.color {
        Color::White => 0,
        Color::Black => 6,
    };
    let role = match piece.role {
        Role::King => 0,
        Role::Queen => 1,
        Role::Rook => 2,
        Role::Bishop => 3,
        Role::Knight => 4,
        Role::Pawn => 5,
    };
    color + role
}

/// Glyph for a piece.
pub fn glyph(piece: Piece) -> &'static Glyph {
    &GLYPHS[slot(piece)]
}

/// Glyph for a two-character code such as `"bN"`.
pub fn by_code(code: &str) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|g| g.code == code)
}

/// All bundled glyphs.
pub fn all() -> &'static [Glyph] {
    &GLYPHS
}
