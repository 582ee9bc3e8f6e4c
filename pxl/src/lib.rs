//! PNG renderer for chartive, rasterizing with tiny-skia.
//!
//! Use [`png`] as renderer provider:
//! ```no_run
//! use chartive::{Render, des};
//!
//! let chart = des::StackedBarChart::new(vec![des::StackedBarValue::new(
//!     "Blue",
//!     vec![des::Value::new(2.0), des::Value::new(3.0)],
//! )]);
//! let mut out = Vec::new();
//! chart.render(chartive_pxl::png, &mut out).unwrap();
//! ```
use std::io;

use chartive::{ColorU8, color, geom, render};
use chartive_text::{Font, LineText};
use log::{debug, trace};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

const DEFAULT_DPI: f32 = 92.0;

/// Creates a PNG renderer of `width` x `height` pixels.
///
/// This function is a [`render::RendererProvider`].
pub fn png(width: u32, height: u32) -> Result<PngRenderer, render::Error> {
    PngRenderer::new(width, height)
}

/// A renderer drawing into a pixmap, saved as PNG
#[derive(Debug, Clone)]
pub struct PngRenderer {
    pixmap: Pixmap,
    dpi: f32,
    font: Option<Font>,
    font_size: f32,
    font_color: ColorU8,
    stroke_color: ColorU8,
    stroke_width: f32,
    fill_color: ColorU8,
    path: PathBuilder,
}

impl PngRenderer {
    /// Creates a renderer over a transparent pixmap
    pub fn new(width: u32, height: u32) -> Result<Self, render::Error> {
        let pixmap = Pixmap::new(width, height).ok_or(render::Error::InvalidSize(width, height))?;
        debug!("created {}x{} pixmap", width, height);
        Ok(PngRenderer {
            pixmap,
            dpi: DEFAULT_DPI,
            font: None,
            font_size: 10.0,
            font_color: color::BLACK,
            stroke_color: color::TRANSPARENT,
            stroke_width: 0.0,
            fill_color: color::TRANSPARENT,
            path: PathBuilder::new(),
        })
    }

    /// The pixels drawn so far
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consumes the renderer and returns its pixels
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn px_size(&self) -> f32 {
        self.font_size * self.dpi / 72.0
    }

    fn line(&self, body: &str) -> Result<LineText, render::Error> {
        let font = self.font.as_ref().ok_or(render::Error::NoFont)?;
        Ok(LineText::new(body, font, self.px_size())?)
    }

    fn take_path(&mut self) -> Option<tiny_skia::Path> {
        std::mem::replace(&mut self.path, PathBuilder::new()).finish()
    }

    fn fill_path(&mut self, path: &tiny_skia::Path) {
        if self.fill_color.is_transparent() {
            return;
        }
        let paint = ts_paint(self.fill_color);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_path(&mut self, path: &tiny_skia::Path) {
        if self.stroke_width <= 0.0 || self.stroke_color.is_transparent() {
            return;
        }
        let paint = ts_paint(self.stroke_color);
        let stroke = Stroke {
            width: self.stroke_width,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }
}

impl render::Renderer for PngRenderer {
    fn set_dpi(&mut self, dpi: f32) {
        self.dpi = if dpi > 0.0 { dpi } else { DEFAULT_DPI };
    }

    fn dpi(&self) -> f32 {
        self.dpi
    }

    fn set_font(&mut self, font: &Font) {
        self.font = Some(font.clone());
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_font_color(&mut self, color: ColorU8) {
        self.font_color = color;
    }

    fn set_stroke_color(&mut self, color: ColorU8) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn set_fill_color(&mut self, color: ColorU8) {
        self.fill_color = color;
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.path.move_to(x as f32, y as f32);
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.path.line_to(x as f32, y as f32);
    }

    fn close(&mut self) {
        self.path.close();
    }

    fn circle(&mut self, radius: f32, x: i32, y: i32) {
        if radius > 0.0 {
            self.path.push_circle(x as f32, y as f32, radius);
        }
    }

    fn stroke(&mut self) {
        if let Some(path) = self.take_path() {
            self.stroke_path(&path);
        }
    }

    fn fill(&mut self) {
        if let Some(path) = self.take_path() {
            self.fill_path(&path);
        }
    }

    fn fill_stroke(&mut self) {
        if let Some(path) = self.take_path() {
            self.fill_path(&path);
            self.stroke_path(&path);
        }
    }

    fn text(&mut self, body: &str, x: i32, y: i32) -> Result<(), render::Error> {
        let line = self.line(body)?;
        let Some(path) = line.outline(x as f32, y as f32)? else {
            return Ok(());
        };
        let paint = ts_paint(self.font_color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    fn measure_text(&mut self, body: &str) -> Result<geom::Rect, render::Error> {
        let line = self.line(body)?;
        Ok(geom::Rect::from_xywh(
            0,
            0,
            line.width().round() as i32,
            line.height().round() as i32,
        ))
    }

    fn save(&mut self, w: &mut dyn io::Write) -> Result<(), render::Error> {
        let data = self
            .pixmap
            .encode_png()
            .map_err(|err| render::Error::Encode(err.to_string()))?;
        trace!("encoded {} bytes of PNG", data.len());
        w.write_all(&data)?;
        Ok(())
    }
}

fn ts_paint(color: ColorU8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red(), color.green(), color.blue(), color.alpha());
    paint.force_hq_pipeline = true;
    paint
}

#[cfg(test)]
mod tests {
    use chartive::render::Renderer;

    use super::*;

    fn pixel(r: &PngRenderer, x: u32, y: u32) -> [u8; 4] {
        let px = r.pixmap().pixel(x, y).unwrap().demultiply();
        [px.red(), px.green(), px.blue(), px.alpha()]
    }

    #[test]
    fn invalid_size() {
        assert!(matches!(
            png(0, 10),
            Err(render::Error::InvalidSize(0, 10))
        ));
        assert!(matches!(
            png(u32::MAX, 400),
            Err(render::Error::InvalidSize(_, 400))
        ));
    }

    #[test]
    fn fill_box() {
        let mut r = png(20, 20).unwrap();
        r.set_fill_color(ColorU8::from_rgb(255, 0, 0));
        r.move_to(0, 0);
        r.line_to(10, 0);
        r.line_to(10, 10);
        r.line_to(0, 10);
        r.close();
        r.fill_stroke();
        assert_eq!(pixel(&r, 5, 5), [255, 0, 0, 255]);
        assert_eq!(pixel(&r, 15, 15), [0, 0, 0, 0]);
    }

    #[test]
    fn transparent_stroke_is_skipped() {
        let mut r = png(20, 20).unwrap();
        r.set_stroke_width(4.0);
        r.move_to(0, 10);
        r.line_to(20, 10);
        r.stroke();
        assert_eq!(pixel(&r, 10, 10), [0, 0, 0, 0]);

        r.set_stroke_color(ColorU8::from_rgb(0, 0, 255));
        r.set_stroke_width(0.0);
        r.move_to(0, 10);
        r.line_to(20, 10);
        r.stroke();
        assert_eq!(pixel(&r, 10, 10), [0, 0, 0, 0]);
    }

    #[test]
    fn circle_filled() {
        let mut r = png(40, 40).unwrap();
        r.set_fill_color(ColorU8::from_rgb(0, 255, 0));
        r.circle(10.0, 20, 20);
        r.fill();
        assert_eq!(pixel(&r, 20, 20), [0, 255, 0, 255]);
        assert_eq!(pixel(&r, 2, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn text_needs_font() {
        let mut r = png(20, 20).unwrap();
        assert!(matches!(
            r.measure_text("abc"),
            Err(render::Error::NoFont)
        ));
    }

    #[test]
    fn text_scales_with_dpi() {
        let Ok(font) = chartive_text::default_font() else {
            eprintln!("no system font, skipping");
            return;
        };
        let mut r = png(200, 100).unwrap();
        r.set_font(&font);
        r.set_font_size(10.0);
        r.set_dpi(72.0);
        let small = r.measure_text("12345").unwrap();
        r.set_dpi(144.0);
        let large = r.measure_text("12345").unwrap();
        assert!(large.width() > small.width());
        assert!((large.width() - 2 * small.width()).abs() <= 1);
    }

    #[test]
    fn save_writes_png() {
        let mut r = png(4, 3).unwrap();
        let mut out = Vec::new();
        r.save(&mut out).unwrap();
        assert_eq!(&out[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = Pixmap::decode_png(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }
}
