//! Render module: provides the abstraction over rendering surfaces.
//!
//! A [`Renderer`] is stateful, like a pen: colors, stroke width and font are set
//! first, then paths are built with [`Renderer::move_to`], [`Renderer::line_to`]
//! and [`Renderer::circle`], and finally stroked and/or filled.
//! Text is placed by the left end of its baseline.
//! See the `chartive-pxl` crate for a PNG renderer.

use std::{fmt, io};

use crate::{ColorU8, geom, text};

/// Renderer trait: defines the rendering surface API used by the chart drawing code.
/// All coordinates are in pixels, Y going down.
pub trait Renderer {
    /// Set the resolution used to convert font sizes from points to pixels
    fn set_dpi(&mut self, dpi: f32);

    /// The current resolution
    fn dpi(&self) -> f32;

    /// Set the font used by subsequent text operations
    fn set_font(&mut self, font: &text::Font);

    /// Set the font size, in points
    fn set_font_size(&mut self, size: f32);

    /// Set the text color
    fn set_font_color(&mut self, color: ColorU8);

    /// Set the stroke color
    fn set_stroke_color(&mut self, color: ColorU8);

    /// Set the stroke width. A width of zero disables stroking.
    fn set_stroke_width(&mut self, width: f32);

    /// Set the fill color
    fn set_fill_color(&mut self, color: ColorU8);

    /// Start a new sub-path at (x, y)
    fn move_to(&mut self, x: i32, y: i32);

    /// Add a line from the current point to (x, y)
    fn line_to(&mut self, x: i32, y: i32);

    /// Close the current sub-path
    fn close(&mut self);

    /// Add a circle centered on (x, y) to the current path
    fn circle(&mut self, radius: f32, x: i32, y: i32);

    /// Stroke the current path with the stroke state, then discard it
    fn stroke(&mut self);

    /// Fill the current path with the fill color, then discard it
    fn fill(&mut self);

    /// Fill then stroke the current path, then discard it
    fn fill_stroke(&mut self);

    /// Draw text with the left end of its baseline at (x, y)
    fn text(&mut self, body: &str, x: i32, y: i32) -> Result<(), Error>;

    /// Measure text with the current font state.
    /// The box is anchored at the origin: its width and height are the text extent.
    fn measure_text(&mut self, body: &str) -> Result<geom::Rect, Error>;

    /// Encode the drawing and write it to `w`
    fn save(&mut self, w: &mut dyn io::Write) -> Result<(), Error>;
}

/// Creates a renderer for a chart of the given pixel size
pub trait RendererProvider {
    /// The provided renderer type
    type Renderer: Renderer;

    /// Create a renderer of `width` x `height` pixels
    fn create(&self, width: u32, height: u32) -> Result<Self::Renderer, Error>;
}

impl<F, R> RendererProvider for F
where
    F: Fn(u32, u32) -> Result<R, Error>,
    R: Renderer,
{
    type Renderer = R;

    fn create(&self, width: u32, height: u32) -> Result<R, Error> {
        self(width, height)
    }
}

/// Errors raised by renderers
#[derive(Debug)]
pub enum Error {
    /// The surface can't be created with this size
    InvalidSize(u32, u32),
    /// Text was drawn or measured before any font was set
    NoFont,
    /// Font or text related error
    Font(text::Error),
    /// The image could not be encoded
    Encode(String),
    /// Writing to the output sink failed
    Io(io::Error),
}

impl From<text::Error> for Error {
    fn from(err: text::Error) -> Self {
        Error::Font(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize(w, h) => write!(f, "Invalid surface size: {}x{}", w, h),
            Error::NoFont => write!(f, "No font set on the renderer"),
            Error::Font(err) => err.fmt(f),
            Error::Encode(reason) => write!(f, "Could not encode image: {}", reason),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Font(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}
