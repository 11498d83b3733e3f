//! TermFormat: draws a board into a [`FrameBuffer`].
//!
//! Each square is `cell_w` x `cell_h` characters. The pixel size handed to
//! `init` is ignored; terminal cells have their own fixed geometry.

use chess_svg_core::chess::{Color as Side, Piece, Role};
use chess_svg_core::types::{Rgb, BOARD_SQUARES, MARK_OPACITY};
use chess_svg_core::{Format, FormatError, Label};

use crate::fb::{CellStyle, FrameBuffer};

const WHITE_PIECE: Rgb = Rgb::new(255, 255, 255);
const BLACK_PIECE: Rgb = Rgb::new(0, 0, 0);

/// Largest cell width or height, in characters.
pub const MAX_CELL: u16 = u16::MAX / BOARD_SQUARES as u16;

/// Framebuffer backend for the board encoder.
#[derive(Debug, Clone)]
pub struct TermFormat {
    fb: FrameBuffer,
    cell_w: u16,
    cell_h: u16,
}

impl Default for TermFormat {
    fn default() -> Self {
        Self::new(3, 1)
    }
}

impl TermFormat {
    /// `cell_w` x `cell_h` characters per square, each clamped to
    /// `1..=MAX_CELL` so the whole board fits in `u16` coordinates.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            fb: FrameBuffer::new(0, 0),
            cell_w: cell_w.clamp(1, MAX_CELL),
            cell_h: cell_h.clamp(1, MAX_CELL),
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn into_frame(self) -> FrameBuffer {
        self.fb
    }

    fn origin(&self, x: u8, y: u8) -> (u16, u16) {
        (x as u16 * self.cell_w, y as u16 * self.cell_h)
    }

    fn bg_at(&self, x: u16, y: u16) -> Rgb {
        self.fb.get(x, y).map(|c| c.style.bg).unwrap_or_default()
    }
}

/// Solid chess symbol for a role; color comes from the foreground.
pub fn piece_symbol(role: Role) -> char {
    match role {
        Role::King => '♚',
        Role::Queen => '♛',
        Role::Rook => '♜',
        Role::Bishop => '♝',
        Role::Knight => '♞',
        Role::Pawn => '♟',
    }
}

impl Format for TermFormat {
    fn init(&mut self, _width: u32, _height: u32) -> Result<(), FormatError> {
        let n = BOARD_SQUARES as u16;
        self.fb.reset(self.cell_w * n, self.cell_h * n);
        Ok(())
    }

    fn draw_square(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
        let (cx, cy) = self.origin(x, y);
        self.fb
            .fill_rect(cx, cy, self.cell_w, self.cell_h, ' ', CellStyle::on(color));
        Ok(())
    }

    fn draw_mark(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
        let (cx, cy) = self.origin(x, y);
        self.fb.tint_rect(cx, cy, self.cell_w, self.cell_h, |bg| {
            bg.blend(color, MARK_OPACITY)
        });
        Ok(())
    }

    fn draw_piece(&mut self, x: u8, y: u8, piece: Piece) -> Result<(), FormatError> {
        let (cx, cy) = self.origin(x, y);
        let (px, py) = (cx + self.cell_w / 2, cy + self.cell_h / 2);
        let style = CellStyle {
            fg: match piece.color {
                Side::White => WHITE_PIECE,
                Side::Black => BLACK_PIECE,
            },
            bg: self.bg_at(px, py),
            bold: true,
        };
        self.fb.put_char(px, py, piece_symbol(piece.role), style);
        Ok(())
    }

    fn draw_label(&mut self, x: u8, y: u8, label: Label, color: Rgb) -> Result<(), FormatError> {
        let (cx, cy) = self.origin(x, y);
        // Rank top-left, file bottom-right, mirroring the SVG layout.
        let (lx, ly) = match label {
            Label::Rank(_) => (cx, cy),
            Label::File(_) => (cx + self.cell_w - 1, cy + self.cell_h - 1),
        };
        let style = CellStyle {
            fg: color,
            bg: self.bg_at(lx, ly),
            bold: false,
        };
        self.fb.put_char(lx, ly, label.text(), style);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), FormatError> {
        Ok(())
    }
}
