//! Bubble chart layout and rendering
use std::io;

use log::{debug, warn};

use crate::des::{self, BubbleValue, LabelFormatter, ShortestFormat};
use crate::drawing::layout::{self, AxisLayout};
use crate::drawing::text::{measure_lines, wrap_fit};
use crate::drawing::{
    Ctx, Error, Range, Render, create_renderer, draw_circle, draw_text, figure, range, save,
};
use crate::render::{Renderer, RendererProvider};
use crate::style::defaults;
use crate::{Style, geom};

/// A bubble resolved on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    /// Center X
    pub cx: i32,
    /// Center Y
    pub cy: i32,
    /// Radius in pixels, never negative
    pub radius: f64,
    /// Whether position and value are finite
    pub valid: bool,
}

/// Radius of a bubble of `value`: proportional to the value, never negative
pub fn radius(value: f64, scale: f64) -> f64 {
    (value * scale).max(0.0)
}

/// Places a bubble on the canvas. Y goes up from the canvas bottom.
///
/// Values outside of the ranges are placed off the canvas, saturating at the
/// bounds of the pixel grid.
pub fn place(canvas: &geom::Rect, x: &Range, y: &Range, bubble: &BubbleValue, scale: f64) -> Bubble {
    let value = bubble.value().value();
    let valid = bubble.x().is_finite() && bubble.y().is_finite() && value.is_finite();
    Bubble {
        cx: canvas.left.saturating_add(x.translate(bubble.x())),
        cy: canvas.bottom.saturating_sub(y.translate(bubble.y())),
        radius: if value.is_finite() { radius(value, scale) } else { 0.0 },
        valid,
    }
}

/// Anchor of the value label: centered below the bubble, pushed down by its radius
pub fn label_anchor(bubble: &Bubble, label: &geom::Rect) -> geom::Point {
    // the radius cast saturates for huge values
    geom::Point::new(
        bubble.cx.saturating_sub(label.width() / 2),
        bubble
            .cy
            .saturating_add(label.height())
            .saturating_add(bubble.radius as i32),
    )
}

/// Width of the X axis footprint: the largest `y + value` over the bubbles
pub fn total_width(bubbles: &[BubbleValue]) -> i32 {
    bubbles
        .iter()
        .map(|b| b.y() + b.value().value())
        .filter(|w| w.is_finite())
        .fold(0.0, f64::max) as i32
}

/// Height of the X axis footprint.
///
/// Starts at the tick height and shrinks to the tightest labeled bubble,
/// measuring its label wrapped to a fixed width.
pub fn x_axis_height(
    r: &mut dyn Renderer,
    bubbles: &[BubbleValue],
    style: &Style,
) -> Result<i32, Error> {
    style.write_to_renderer(r);
    let mut height = defaults::VERTICAL_TICK_HEIGHT;
    for bubble in bubbles {
        let label = bubble.value().label();
        if label.is_empty() {
            continue;
        }
        let lines = wrap_fit(r, label, defaults::BUBBLE_LABEL_WIDTH, style)?;
        let bx = measure_lines(r, &lines, style)?;
        height = height.min(bx.height() + 2 * defaults::X_AXIS_MARGIN);
    }
    Ok(height)
}

impl Render for des::BubbleChart {
    fn render<P>(&self, provider: P, sink: &mut dyn io::Write) -> Result<(), Error>
    where
        P: RendererProvider,
    {
        if self.bubbles().is_empty() {
            return Err(Error::Empty("bubble"));
        }

        let mut renderer = create_renderer(&provider, self.frame())?;
        let r: &mut dyn Renderer = &mut renderer;
        let ctx = Ctx::new(self.frame())?;
        ctx.setup_renderer(r);

        ctx.draw_background(r);

        let base = layout::base_box(self.frame());
        let axes_style = ctx.axes_style();
        let x_style = self.x_axis().style().inherit_from(&axes_style);
        let y_style = self.y_axis().style().inherit_from(&axes_style);

        let x_range = range::resolve(self.x_axis(), self.bubbles().iter().map(|b| b.x()));
        let y_range = range::resolve(self.y_axis(), self.bubbles().iter().map(|b| b.y()));
        debug!(
            "bubble ranges: x [{}, {}], y [{}, {}]",
            x_range.min(),
            x_range.max(),
            y_range.min(),
            y_range.max()
        );

        let axes = layout::Axes {
            x: Some((self.x_axis(), x_range)),
            x_shown: self.x_axis().is_shown(),
            y: (self.y_axis(), y_range),
            style: &axes_style,
        };
        let chart_height = self.frame().height() as i32;
        let mut x_footprint =
            |r: &mut dyn Renderer, canvas: &geom::Rect| -> Result<Option<geom::Rect>, Error> {
                let height = x_axis_height(r, self.bubbles(), &x_style)?;
                let width = total_width(self.bubbles());
                Ok(Some(layout::x_axis_box(canvas, width, chart_height, height)))
            };
        let laid = layout::resolve_canvas(r, &base, axes, &mut x_footprint)?;
        let canvas = laid.canvas;
        let x = laid.x.unwrap_or_else(|| AxisLayout {
            range: x_range.with_domain(canvas.width()),
            ticks: Vec::new(),
        });
        let y = laid.y;

        ctx.draw_canvas(r, &canvas);

        let scale = self.bubble_scale();
        for (index, bubble) in self.bubbles().iter().enumerate() {
            let b = place(&canvas, &x.range, &y.range, bubble, scale);
            if !b.valid {
                warn!("skipping bubble #{} with non finite position or value", index);
                continue;
            }

            let value = bubble.value();
            let style = value.style().inherit_from(&ctx.mark_style(index));
            draw_circle(r, b.radius, b.cx, b.cy, &style);

            let label = ShortestFormat.format(value.value());
            let label_style = value.style().inherit_from(&axes_style);
            label_style.write_text(r);
            let tb = r.measure_text(&label)?;
            let at = label_anchor(&b, &tb);
            draw_text(r, &label, at.x, at.y, &label_style)?;
        }

        if self.x_axis().is_shown() {
            figure::draw_x_axis_line(r, &canvas, &x_style);
            figure::draw_x_ticks(r, &canvas, &x.range, &x.ticks, &x_style)?;
        }
        if self.y_axis().is_shown() {
            figure::draw_y_axis(r, &canvas, &y.range, &y.ticks, &y_style)?;
        }

        ctx.draw_title(r)?;
        ctx.draw_elements(r, &canvas)?;

        save(r, sink)
    }
}
