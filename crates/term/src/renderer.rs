//! Flushes a framebuffer to a terminal as crossterm commands.
//!
//! A board is drawn once, so there is no diffing or alternate screen: the
//! frame is printed inline at the cursor and the colors are reset after.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Encode every row of `fb` into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Style changes are only emitted when the style differs from the previous
/// cell.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        // Reset before the newline so the fill does not bleed to the edge.
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print("\r\n"))?;
        current_style = None;
    }
    Ok(())
}

/// Write `fb` to `writer` and flush.
pub fn print_frame<W: Write>(mut writer: W, fb: &FrameBuffer) -> Result<()> {
    let mut buf = Vec::with_capacity(fb.cells().len() * 24);
    encode_full_into(fb, &mut buf)?;
    writer.write_all(&buf)?;
    writer.flush()?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn style_conversion_keeps_channels() {
        let style = CellStyle::on(Rgb::new(1, 2, 3));
        assert_eq!(rgb_to_color(style.bg), Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn one_line_per_row_with_characters_in_order() {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });
        fb.set(0, 1, Cell { ch: 'C', style });
        fb.set(1, 1, Cell { ch: 'D', style });

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 2);
        let a = text.find('A').unwrap();
        let b = text.find('B').unwrap();
        let c = text.find('C').unwrap();
        assert!(a < b && b < c);
        assert!(text.contains("\x1b[38;2;"));
    }

    #[test]
    fn unchanged_style_is_not_reemitted_within_a_row() {
        let fb = FrameBuffer::new(4, 1);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[48;2;").count(), 1);
    }

    #[test]
    fn print_frame_writes_everything() {
        let fb = FrameBuffer::new(3, 1);
        let mut sink = Vec::new();
        print_frame(&mut sink, &fb).unwrap();
        let mut direct = Vec::new();
        encode_full_into(&fb, &mut direct).unwrap();
        assert_eq!(sink, direct);
    }
}
