//! Drawing module
//!
//! This module contains all the logic to convert a design chart into rendering commands
//! for a given renderer.
//! It is the bridge between the [`des`] module and the [`render`] module.
//!
//! Layout happens on the pixel grid: the value ranges are mapped onto the canvas
//! with [`Range`], ticks are generated in [`ticks`], and the canvas is carved out of
//! the chart so that the axes fit in [`layout`].
use std::{fmt, io};

use log::debug;

use crate::render::{self, Renderer, RendererProvider};
use crate::style::{ColorPalette, defaults};
use crate::{Style, des, geom};

pub mod bubble;
mod figure;
pub mod layout;
pub mod range;
pub mod stacked_bar;
pub mod text;
pub mod ticks;

pub use range::Range;

/// Errors that can occur during chart drawing
#[derive(Debug)]
pub enum Error {
    /// The chart has nothing to draw. Holds the kind of the missing marks.
    Empty(&'static str),
    /// The renderer could not be created or failed to draw or save
    Render(render::Error),
    /// Font or text related error, e.g. no default font could be found
    Font(crate::text::Error),
}

impl From<render::Error> for Error {
    fn from(err: render::Error) -> Self {
        Error::Render(err)
    }
}

impl From<crate::text::Error> for Error {
    fn from(err: crate::text::Error) -> Self {
        Error::Font(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Render(render::Error::Io(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty(what) => write!(f, "Please provide at least one {}", what),
            Error::Render(err) => err.fmt(f),
            Error::Font(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Empty(_) => None,
            Error::Render(err) => Some(err),
            Error::Font(err) => Some(err),
        }
    }
}

/// Extension trait to render a design chart
pub trait Render {
    /// Render the chart with a renderer created by `provider`, and write the result to `sink`.
    ///
    /// The sink is written only once the whole chart is drawn.
    /// On error, nothing is written, except for a failure during the final write itself.
    fn render<P>(&self, provider: P, sink: &mut dyn io::Write) -> Result<(), Error>
    where
        P: RendererProvider;
}

/// Drawing context of one render call
struct Ctx<'a> {
    frame: &'a des::Frame,
    font: crate::text::Font,
}

impl<'a> Ctx<'a> {
    /// Creates the context, resolving the font of the chart
    fn new(frame: &'a des::Frame) -> Result<Self, Error> {
        let font = match frame.font() {
            Some(font) => font.clone(),
            None => crate::text::default_font()?,
        };
        debug!(
            "drawing chart of {}x{} px with font '{}'",
            frame.width(),
            frame.height(),
            font.family()
        );
        Ok(Ctx { frame, font })
    }

    fn palette(&self) -> &dyn ColorPalette {
        self.frame.palette()
    }

    /// Default style of axis lines and labels
    fn axes_style(&self) -> Style {
        let palette = self.palette();
        Style {
            stroke_color: Some(palette.axis_stroke()),
            stroke_width: Some(defaults::AXIS_LINE_WIDTH),
            font: Some(self.font.clone()),
            font_size: Some(defaults::AXIS_FONT_SIZE),
            font_color: Some(palette.text()),
            text_align: Some(crate::style::TextAlign::Center),
            text_ver_align: Some(crate::style::TextVerAlign::Top),
            text_wrap: Some(crate::style::TextWrap::Word),
            ..Default::default()
        }
    }

    /// Default style of the mark drawn at `index`
    fn mark_style(&self, index: usize) -> Style {
        let color = self.palette().series_color(index);
        Style {
            stroke_color: Some(color),
            stroke_width: Some(defaults::MARK_STROKE_WIDTH),
            fill_color: Some(color),
            ..Default::default()
        }
    }

    /// Default style given to overlay elements
    fn elements_style(&self) -> Style {
        Style {
            font: Some(self.font.clone()),
            ..Default::default()
        }
    }

    /// Set up a fresh renderer for this chart
    fn setup_renderer(&self, r: &mut dyn Renderer) {
        r.set_dpi(self.frame.dpi());
        r.set_font(&self.font);
    }
}

/// Creates the renderer of a chart, before any font is resolved
fn create_renderer<P>(provider: &P, frame: &des::Frame) -> Result<P::Renderer, Error>
where
    P: RendererProvider,
{
    let size = frame.size();
    Ok(provider.create(size.width(), size.height())?)
}

/// Strokes and fills the outline of `rect`
fn draw_box(r: &mut dyn Renderer, rect: &geom::Rect, style: &Style) {
    style.write_stroke(r);
    style.write_fill(r);
    r.move_to(rect.left, rect.top);
    r.line_to(rect.right, rect.top);
    r.line_to(rect.right, rect.bottom);
    r.line_to(rect.left, rect.bottom);
    r.close();
    r.fill_stroke();
}

fn draw_circle(r: &mut dyn Renderer, radius: f64, cx: i32, cy: i32, style: &Style) {
    style.write_stroke(r);
    style.write_fill(r);
    r.circle(radius as f32, cx, cy);
    r.fill_stroke();
}

fn draw_line(r: &mut dyn Renderer, x1: i32, y1: i32, x2: i32, y2: i32) {
    r.move_to(x1, y1);
    r.line_to(x2, y2);
    r.stroke();
}

fn draw_text(
    r: &mut dyn Renderer,
    body: &str,
    x: i32,
    y: i32,
    style: &Style,
) -> Result<(), Error> {
    style.write_text(r);
    r.text(body, x, y)?;
    Ok(())
}

/// Finishes the drawing: encodes it and writes it to the sink
fn save(r: &mut dyn Renderer, sink: &mut dyn io::Write) -> Result<(), Error> {
    r.save(sink)?;
    debug!("chart saved");
    Ok(())
}
