#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
/*!
 * # chartive
 * Bubble and stacked bar charts, laid out on the pixel grid and rendered to images.
 *
 * Chartive computes everything in pixel space: the value ranges of the axes,
 * the ticks and their labels, the plotting area (canvas) carved out of the chart
 * so that the axis labels fit, and the geometry of each mark.
 * The result is a sequence of drawing commands issued to a [`render::Renderer`].
 *
 * ## Supported chart types
 *  - Bubble charts: circles placed by (x, y) with a radius proportional to their value
 *  - Stacked bar charts: bars made of stacked segments, with bar width and spacing
 *    negotiated to fit the canvas width
 *
 * ## Get started
 *
 * ```no_run
 * use chartive::{Render, des};
 *
 * let chart = des::BubbleChart::new(vec![
 *     des::BubbleValue::new(1.0, 1.0, 2.55),
 *     des::BubbleValue::new(2.0, 4.0, 1.0),
 *     des::BubbleValue::new(3.0, 5.0, 4.2),
 * ])
 * .with_title("Bubbles")
 * .with_x_axis(des::Axis::visible())
 * .with_y_axis(des::Axis::visible());
 *
 * let mut file = std::fs::File::create("bubbles.png").unwrap();
 * // any `Fn(u32, u32) -> Result<R, render::Error>` provides renderers
 * chart.render(chartive_pxl::png, &mut file).unwrap();
 * ```
 *
 * ## Notes about chartive's design
 *
 * The chart configuration lies in the [`des`] module. It is plain data with builders
 * and getters that apply defaults.
 *
 * [`des`] and [`render`] are bridged by the [`drawing`] module, which resolves
 * ranges, ticks and the canvas box, places the marks and issues the drawing commands.
 * The renderers themselves ignore everything about charts.
 * (see `chartive-pxl` for a PNG renderer)
 *
 * Styles are plain values with optional fields, combined with [`style::merge`].
 */
// Chartive is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

pub mod des;
pub mod drawing;
pub mod render;
pub mod style;

pub use drawing::{Error, Render};
pub use style::Style;

/// Rexports of [`chartive_base::color`]` items
pub mod color {
    pub use chartive_base::color::*;
}
pub use color::ColorU8;

/// Rexports of [`chartive_base::geom`]` items
pub mod geom {
    pub use chartive_base::geom::*;
}

/// Rexports of [`chartive_text`]` items
pub mod text {
    pub use chartive_text::*;
}
