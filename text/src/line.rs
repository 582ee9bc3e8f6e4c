//! Module that contains a simple single line text shaping and outlining engine

use chartive_base::geom;
use ttf_parser as ttf;

use crate::font::{Font, ScaledMetrics};
use crate::Error;

/// A single line of shaped text.
///
/// Glyph positions are relative to the left end of the baseline, Y going up.
#[derive(Debug, Clone)]
pub struct LineText {
    text: String,
    font: Font,
    px_size: f32,
    metrics: ScaledMetrics,
    glyphs: Vec<Glyph>,
    width: f32,
}

#[derive(Debug, Clone, Copy)]
struct Glyph {
    id: ttf::GlyphId,
    x: f32,
    y: f32,
}

impl LineText {
    /// Shape `text` with `font` at a size of `px_size` pixels per em.
    ///
    /// Script and direction are guessed from the text.
    pub fn new(text: &str, font: &Font, px_size: f32) -> Result<Self, Error> {
        let face = font.face()?;
        let metrics = ScaledMetrics::new(&face, px_size);

        let mut glyphs = Vec::new();
        let mut x = 0.0;

        if !text.is_empty() {
            let mut buffer = rustybuzz::UnicodeBuffer::new();
            buffer.push_str(text);
            buffer.guess_segment_properties();

            let hbface = rustybuzz::Face::from_face(face);
            let shape = rustybuzz::shape(&hbface, &[], buffer);

            glyphs.reserve(shape.len());
            let mut y = 0.0;
            for (i, p) in shape.glyph_infos().iter().zip(shape.glyph_positions()) {
                glyphs.push(Glyph {
                    id: ttf::GlyphId(i.glyph_id as u16),
                    x: x + p.x_offset as f32 * metrics.scale,
                    y: y + p.y_offset as f32 * metrics.scale,
                });
                x += p.x_advance as f32 * metrics.scale;
                y += p.y_advance as f32 * metrics.scale;
            }
        }

        Ok(LineText {
            text: text.to_string(),
            font: font.clone(),
            px_size,
            metrics,
            glyphs,
            width: x,
        })
    }

    /// The shaped text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The pixel size the text was shaped at
    pub fn px_size(&self) -> f32 {
        self.px_size
    }

    /// The font metrics at the shaping size
    pub fn metrics(&self) -> ScaledMetrics {
        self.metrics
    }

    /// The advance width of the line
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The height of the line, from descender to ascender
    #[inline]
    pub fn height(&self) -> f32 {
        self.metrics.height()
    }

    /// Outline the glyphs into a single path, in a Y-down space,
    /// with the left end of the baseline placed at `(x, y)`.
    ///
    /// Returns `None` when no glyph has an outline (e.g. empty or blank text).
    pub fn outline(&self, x: f32, y: f32) -> Result<Option<geom::Path>, Error> {
        let face = self.font.face()?;
        let scale = self.metrics.scale;

        // the path builder for the entire string
        let mut str_pb = geom::PathBuilder::new();
        // the path builder for each glyph
        let mut gl_pb = geom::PathBuilder::new();

        for gl in &self.glyphs {
            {
                let mut builder = crate::Outliner(&mut gl_pb);
                face.outline_glyph(gl.id, &mut builder);
            }

            gl_pb = match gl_pb.finish() {
                Some(path) => {
                    let ts = geom::Transform::from_row(scale, 0.0, 0.0, -scale, x + gl.x, y - gl.y);
                    match path.transform(ts) {
                        Some(path) => {
                            str_pb.push_path(&path);
                            path.clear()
                        }
                        None => geom::PathBuilder::new(),
                    }
                }
                None => geom::PathBuilder::new(),
            };
        }

        Ok(str_pb.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_font;

    #[test]
    fn empty_line() {
        let Ok(font) = default_font() else {
            eprintln!("no system font, skipping");
            return;
        };
        let line = LineText::new("", &font, 12.0).unwrap();
        assert_eq!(line.width(), 0.0);
        assert!(line.height() > 0.0);
        assert!(line.outline(0.0, 0.0).unwrap().is_none());
    }

    #[test]
    fn width_grows_with_text() {
        let Ok(font) = default_font() else {
            eprintln!("no system font, skipping");
            return;
        };
        let short = LineText::new("12", &font, 12.0).unwrap();
        let long = LineText::new("1234", &font, 12.0).unwrap();
        assert!(short.width() > 0.0);
        assert!(long.width() > short.width());

        let bigger = LineText::new("12", &font, 24.0).unwrap();
        assert!((bigger.width() - 2.0 * short.width()).abs() < 0.01);
    }

    #[test]
    fn outline_sits_on_baseline() {
        let Ok(font) = default_font() else {
            eprintln!("no system font, skipping");
            return;
        };
        let line = LineText::new("Hx", &font, 20.0).unwrap();
        let path = line.outline(100.0, 50.0).unwrap().unwrap();
        let bounds = path.bounds();
        assert!(bounds.left() >= 99.0);
        assert!(bounds.right() <= 100.0 + line.width() + 1.0);
        // glyphs are drawn above the baseline in Y-down space
        assert!(bounds.top() < 50.0);
        assert!(bounds.bottom() <= 50.5);
    }
}
