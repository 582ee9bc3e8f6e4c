/*!
 * # Declarative design module for chartive
 *
 * This module contains the data structures describing charts: the values to plot,
 * the axes and the decoration of the chart frame.
 * Structures are built with `with_*` methods and read back with getters that
 * apply the defaults.
 */
use std::fmt;
use std::sync::Arc;

use crate::render::Renderer;
use crate::style::{ColorPalette, defaults, palette};
use crate::{Style, drawing, geom, text};

pub mod axis;
pub mod bubble;
pub mod format;
pub mod stacked_bar;
pub mod value;

pub use axis::{Axis, Tick};
pub use bubble::BubbleChart;
pub use format::{LabelFormatter, PercentFormat, PrecFormat, ShortestFormat};
pub use stacked_bar::StackedBarChart;
pub use value::{BubbleValue, StackedBarValue, Value};

/// Signature of the callables drawn over a chart
pub type ElementFn =
    dyn Fn(&mut dyn Renderer, &geom::Rect, &Style) -> Result<(), drawing::Error> + Send + Sync;

/// A caller supplied overlay, drawn after everything else.
///
/// The callable receives the final canvas box and a default style carrying the chart font.
#[derive(Clone)]
pub struct Element(Arc<ElementFn>);

impl Element {
    /// Build an element from a drawing callable
    pub fn new<F>(draw: F) -> Self
    where
        F: Fn(&mut dyn Renderer, &geom::Rect, &Style) -> Result<(), drawing::Error>
            + Send
            + Sync
            + 'static,
    {
        Element(Arc::new(draw))
    }

    pub(crate) fn draw(
        &self,
        renderer: &mut dyn Renderer,
        canvas: &geom::Rect,
        style: &Style,
    ) -> Result<(), drawing::Error> {
        (self.0)(renderer, canvas, style)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Element(..)")
    }
}

/// Decoration and surface settings shared by all chart types
#[derive(Debug, Clone, Default)]
pub struct Frame {
    title: String,
    title_style: Style,
    palette: Option<Arc<dyn ColorPalette + Send + Sync>>,
    width: Option<u32>,
    height: Option<u32>,
    dpi: Option<f32>,
    background: Style,
    canvas: Style,
    font: Option<text::Font>,
    elements: Vec<Element>,
}

static DEFAULT_PALETTE: palette::Builtin = palette::Builtin::Alternate;

impl Frame {
    /// The chart title. Empty when no title is drawn.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title style
    pub fn title_style(&self) -> &Style {
        &self.title_style
    }

    /// The color palette, [`palette::Builtin::Alternate`] by default
    pub fn palette(&self) -> &dyn ColorPalette {
        match self.palette.as_deref() {
            Some(p) => p,
            None => &DEFAULT_PALETTE,
        }
    }

    /// The chart width in pixels. Zero falls back to the default.
    pub fn width(&self) -> u32 {
        self.width
            .filter(|w| *w > 0)
            .unwrap_or(defaults::CHART_WIDTH)
    }

    /// The chart height in pixels. Zero falls back to the default.
    pub fn height(&self) -> u32 {
        self.height
            .filter(|h| *h > 0)
            .unwrap_or(defaults::CHART_HEIGHT)
    }

    /// The chart size in pixels
    pub fn size(&self) -> geom::Size {
        geom::Size::new(self.width(), self.height())
    }

    /// The resolution used to scale fonts
    pub fn dpi(&self) -> f32 {
        self.dpi
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(defaults::DPI)
    }

    /// The style of the whole chart area. Its padding defines the room around the canvas.
    pub fn background(&self) -> &Style {
        &self.background
    }

    /// The style of the plotting area
    pub fn canvas(&self) -> &Style {
        &self.canvas
    }

    /// The explicit chart font, if any
    pub fn font(&self) -> Option<&text::Font> {
        self.font.as_ref()
    }

    /// The overlay elements
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// Implements the [`Frame`] builders and getters on a chart struct with a `frame` field
macro_rules! impl_frame_builders {
    ($chart:ident) => {
        impl $chart {
            /// The frame settings of the chart
            pub fn frame(&self) -> &$crate::des::Frame {
                &self.frame
            }

            /// Set the title
            pub fn with_title(mut self, title: impl Into<String>) -> Self {
                self.frame.title = title.into();
                self
            }

            /// Set the title style
            pub fn with_title_style(mut self, style: $crate::Style) -> Self {
                self.frame.title_style = style;
                self
            }

            /// Set the color palette
            pub fn with_palette<P>(mut self, palette: P) -> Self
            where
                P: $crate::style::ColorPalette + Send + Sync + 'static,
            {
                self.frame.palette = Some(std::sync::Arc::new(palette));
                self
            }

            /// Set the chart width in pixels
            pub fn with_width(mut self, width: u32) -> Self {
                self.frame.width = Some(width);
                self
            }

            /// Set the chart height in pixels
            pub fn with_height(mut self, height: u32) -> Self {
                self.frame.height = Some(height);
                self
            }

            /// Set the resolution used to scale fonts
            pub fn with_dpi(mut self, dpi: f32) -> Self {
                self.frame.dpi = Some(dpi);
                self
            }

            /// Set the background style
            pub fn with_background(mut self, style: $crate::Style) -> Self {
                self.frame.background = style;
                self
            }

            /// Set the canvas style
            pub fn with_canvas(mut self, style: $crate::Style) -> Self {
                self.frame.canvas = style;
                self
            }

            /// Set the font. The system default font is used otherwise.
            pub fn with_font(mut self, font: $crate::text::Font) -> Self {
                self.frame.font = Some(font);
                self
            }

            /// Add an overlay element
            pub fn with_element(mut self, element: $crate::des::Element) -> Self {
                self.frame.elements.push(element);
                self
            }
        }
    };
}

pub(crate) use impl_frame_builders;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_defaults() {
        let frame = Frame::default();
        assert_eq!(frame.size(), geom::Size::new(1024, 400));
        assert_eq!(frame.dpi(), 92.0);
        assert_eq!(frame.palette().canvas_stroke(), palette::LIGHT_GRAY);
        assert!(frame.font().is_none());
        assert!(frame.title().is_empty());
    }

    #[test]
    fn zero_size_falls_back() {
        let chart = BubbleChart::new(vec![])
            .with_width(0)
            .with_height(800)
            .with_dpi(0.0);
        assert_eq!(chart.frame().width(), 1024);
        assert_eq!(chart.frame().height(), 800);
        assert_eq!(chart.frame().dpi(), 92.0);
    }

    #[test]
    fn custom_palette() {
        let chart = BubbleChart::new(vec![]).with_palette(palette::Builtin::Default);
        assert_eq!(chart.frame().palette().series_color(0), palette::BLUE);
    }
}
