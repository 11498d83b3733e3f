//! SvgCanvas: minimal SVG primitive writer over any `io::Write`.
//!
//! Only the handful of primitives the board needs: document start/end,
//! rectangles, text and pre-built markup. Attributes are written in a fixed
//! order so output is stable byte-for-byte.

use std::io::{self, Write};

pub struct SvgCanvas<W: Write> {
    out: W,
}

impl<W: Write> SvgCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the XML prolog and open the root `<svg>` element.
    pub fn start(&mut self, width: u32, height: u32) -> io::Result<()> {
        writeln!(self.out, r#"<?xml version="1.0"?>"#)?;
        writeln!(
            self.out,
            r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#
        )
    }

    pub fn rect(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        style: Option<&str>,
    ) -> io::Result<()> {
        write!(
            self.out,
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}""#
        )?;
        if let Some(style) = style {
            write!(self.out, r#" style="{style}""#)?;
        }
        writeln!(self.out, "/>")
    }

    pub fn text(&mut self, x: u32, y: u32, text: &str, style: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"<text x="{x}" y="{y}" style="{style}">{}</text>"#,
            escape(text)
        )
    }

    /// Write markup verbatim.
    pub fn raw(&mut self, markup: &str) -> io::Result<()> {
        self.out.write_all(markup.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Close the root element and flush.
    pub fn end(&mut self) -> io::Result<()> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut SvgCanvas<Vec<u8>>) -> io::Result<()>) -> String {
        let mut canvas = SvgCanvas::new(Vec::new());
        f(&mut canvas).unwrap();
        String::from_utf8(canvas.into_inner()).unwrap()
    }

    #[test]
    fn rect_with_and_without_style() {
        assert_eq!(
            written(|c| c.rect(0, 0, 360, 360, None)),
            "<rect x=\"0\" y=\"0\" width=\"360\" height=\"360\"/>\n"
        );
        assert_eq!(
            written(|c| c.rect(45, 90, 45, 45, Some("fill: #ffffff"))),
            "<rect x=\"45\" y=\"90\" width=\"45\" height=\"45\" style=\"fill: #ffffff\"/>\n"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            written(|c| c.text(1, 2, "a<b&c", "font-size:11px")),
            "<text x=\"1\" y=\"2\" style=\"font-size:11px\">a&lt;b&amp;c</text>\n"
        );
    }

    #[test]
    fn document_is_opened_and_closed() {
        let doc = written(|c| {
            c.start(8, 16)?;
            c.end()
        });
        assert!(doc.starts_with("<?xml version=\"1.0\"?>\n<svg width=\"8\" height=\"16\""));
        assert!(doc.ends_with("</svg>\n"));
    }
}
