#![cfg(test)]

use std::io;

use chartive::{ColorU8, Render};

mod tests;

/// Returns early from a test when the system has no usable font
macro_rules! require_font {
    () => {
        if chartive::text::default_font().is_err() {
            eprintln!("no system font, skipping");
            return;
        }
    };
}

pub(crate) use require_font;

/// Renders a chart to PNG bytes
fn render_png<C: Render>(chart: &C) -> Result<Vec<u8>, chartive::Error> {
    let mut out = Vec::new();
    chart.render(chartive_pxl::png, &mut out)?;
    Ok(out)
}

fn decode(png: &[u8]) -> tiny_skia::Pixmap {
    tiny_skia::Pixmap::decode_png(png).unwrap()
}

fn pixel(pixmap: &tiny_skia::Pixmap, x: u32, y: u32) -> ColorU8 {
    let px = pixmap.pixel(x, y).unwrap().demultiply();
    ColorU8::from_rgba(px.red(), px.green(), px.blue(), px.alpha())
}

fn contains_color(pixmap: &tiny_skia::Pixmap, color: ColorU8) -> bool {
    let [r, g, b, a] = color.rgba();
    pixmap
        .pixels()
        .iter()
        .map(|px| px.demultiply())
        .any(|px| px.red() == r && px.green() == g && px.blue() == b && px.alpha() == a)
}

/// Output sink that refuses every write
struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
