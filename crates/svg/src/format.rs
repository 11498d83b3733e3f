//! SvgFormat: the markup backend for the board encoder.

use std::io::Write;

use chess_svg_core::chess::Piece;
use chess_svg_core::types::{
    Rgb, BOARD_SQUARES, GLYPH_SIZE, LABEL_FONT_SIZE, MARK_OPACITY, MAX_SQUARE_SIZE,
};
use chess_svg_core::{Format, FormatError, Label};
use chess_svg_glyphs::{glyph, GLYPH_ROOT};

use crate::canvas::SvgCanvas;

/// Writes each draw call as SVG markup.
///
/// The square size is derived from the board size given to `init`.
pub struct SvgFormat<W: Write> {
    canvas: SvgCanvas<W>,
    width: u32,
    height: u32,
    square_width: u32,
    square_height: u32,
}

impl<W: Write> SvgFormat<W> {
    pub fn new(out: W) -> Self {
        Self {
            canvas: SvgCanvas::new(out),
            width: 0,
            height: 0,
            square_width: 0,
            square_height: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.canvas.into_inner()
    }

    fn origin(&self, x: u8, y: u8) -> (u32, u32) {
        (
            x as u32 * self.square_width,
            y as u32 * self.square_height,
        )
    }
}

impl<W: Write> Format for SvgFormat<W> {
    fn init(&mut self, width: u32, height: u32) -> Result<(), FormatError> {
        self.width = width;
        self.height = height;
        self.square_width = (width / BOARD_SQUARES).min(MAX_SQUARE_SIZE);
        self.square_height = (height / BOARD_SQUARES).min(MAX_SQUARE_SIZE);
        self.canvas.start(width, height)?;
        self.canvas.rect(0, 0, width, height, None)?;
        // A dead writer must fail here, not at the end of the document.
        self.canvas.flush()?;
        Ok(())
    }

    fn draw_square(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
        let (px, py) = self.origin(x, y);
        let style = format!("fill: {}", color.to_hex());
        self.canvas.rect(
            px,
            py,
            self.square_width,
            self.square_height,
            Some(&style),
        )?;
        Ok(())
    }

    fn draw_mark(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
        let (px, py) = self.origin(x, y);
        let style = format!("fill-opacity:{};fill: {}", MARK_OPACITY, color.to_hex());
        self.canvas.rect(
            px,
            py,
            self.square_width,
            self.square_height,
            Some(&style),
        )?;
        Ok(())
    }

    fn draw_piece(&mut self, x: u8, y: u8, piece: Piece) -> Result<(), FormatError> {
        let (px, py) = self.origin(x, y);
        let markup = piece_markup(
            piece,
            (px, py),
            (self.width, self.height),
            (self.square_width, self.square_height),
        );
        self.canvas.raw(&markup)?;
        Ok(())
    }

    fn draw_label(&mut self, x: u8, y: u8, label: Label, color: Rgb) -> Result<(), FormatError> {
        let (px, py) = self.origin(x, y);
        let (sw, sh) = (self.square_width, self.square_height);
        let text = label.text().to_string();
        match label {
            Label::Rank(_) => {
                let style = format!("font-size:{}px;fill: {}", LABEL_FONT_SIZE, color.to_hex());
                self.canvas.text(px + sw / 20, py + sh * 5 / 20, &text, &style)?;
            }
            Label::File(_) => {
                let style = format!(
                    "text-anchor:end;font-size:{}px;fill: {}",
                    LABEL_FONT_SIZE,
                    color.to_hex()
                );
                self.canvas
                    .text(px + sw * 19 / 20, py + sh - sh / 15, &text, &style)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), FormatError> {
        self.canvas.end()?;
        Ok(())
    }
}

/// Embed a glyph so it covers the cell at `origin`.
///
/// The glyph keeps its native coordinates; the nested viewport spans the
/// whole board and its viewBox is shifted by the negated cell origin. Non
/// native square sizes add a scale group around the glyph body.
pub(crate) fn piece_markup(
    piece: Piece,
    origin: (u32, u32),
    board: (u32, u32),
    square: (u32, u32),
) -> String {
    let g = glyph(piece);
    let (px, py) = (-(origin.0 as i64), -(origin.1 as i64));
    let (w, h) = board;
    let root = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="{px} {py} {w} {h}">"#
    );
    if square == (GLYPH_SIZE, GLYPH_SIZE) {
        return g.svg().replacen(GLYPH_ROOT, &root, 1);
    }
    let sx = square.0 as f64 / GLYPH_SIZE as f64;
    let sy = square.1 as f64 / GLYPH_SIZE as f64;
    format!(
        "{root}\n<g transform=\"scale({sx} {sy})\">\n{}\n</g>\n</svg>\n",
        g.body()
    )
}
