//! Font loading, single line text shaping and glyph outlining for chartive.
//!
//! Text is shaped with `rustybuzz` and outlined to [`geom::Path`] so that
//! rendering surfaces only ever deal with paths.

use std::fmt;

use chartive_base::geom;
use ttf_parser as ttf;

pub mod font;
pub mod line;

pub use font::{Font, ScaledMetrics, default_font};
pub use line::LineText;

/// Errors related to fonts and text
#[derive(Debug, Clone)]
pub enum Error {
    /// No usable face was found in the system font database
    NoDefaultFont,
    /// Font data could not be parsed
    FaceParsingError(ttf::FaceParsingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoDefaultFont => write!(f, "Could not find a default font on this system"),
            Error::FaceParsingError(err) => err.fmt(f),
        }
    }
}

impl From<ttf::FaceParsingError> for Error {
    fn from(err: ttf::FaceParsingError) -> Self {
        Error::FaceParsingError(err)
    }
}

impl std::error::Error for Error {}

struct Outliner<'a>(&'a mut geom::PathBuilder);

impl ttf::OutlineBuilder for Outliner<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}
