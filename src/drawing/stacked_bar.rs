//! Stacked bar chart layout and rendering.
//!
//! Bars are laid from the canvas left side, each in a slot of the negotiated width.
//! Bar width and spacing are nominal values that shrink when the bars
//! don't fit the canvas width (see [`negotiate`]).
use std::io;

use log::{debug, trace, warn};

use crate::des::{self, StackedBarValue, Value};
use crate::drawing::layout::{self, AxisLayout};
use crate::drawing::text::{measure_lines, text_within, wrap_fit};
use crate::drawing::{
    Ctx, Error, Range, Render, create_renderer, draw_box, draw_line, figure, range, save,
};
use crate::render::{Renderer, RendererProvider};
use crate::style::{TextAlign, defaults};
use crate::{Style, geom};

/// Bar width and spacing resolved against a canvas width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarMetrics {
    /// Width of a bar slot
    pub width: i32,
    /// Spacing after each bar
    pub spacing: i32,
    /// Width taken by all the bars: `(width * segments + spacing) * bars`
    pub total: i32,
    /// Whether the nominal width or spacing had to shrink
    pub negotiated: bool,
}

fn total_width(bars: i32, segments: i32, width: i32, spacing: i32) -> i32 {
    width
        .saturating_mul(segments)
        .saturating_add(spacing)
        .saturating_mul(bars)
}

fn ceil_div(num: i32, den: i32) -> i32 {
    num / den + i32::from(num % den != 0)
}

fn to_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Fits `bars` bars of up to `segments` segments in `canvas_width`.
///
/// The nominal spacing shrinks first, then the nominal width, each time only if
/// the bars overflow the canvas.
/// Once shrunk, `width * segments * bars + spacing * bars` never exceeds the
/// canvas width, and neither width nor spacing is negative.
pub fn negotiate(
    canvas_width: i32,
    bars: usize,
    segments: usize,
    bar_width: i32,
    bar_spacing: i32,
) -> BarMetrics {
    let n = to_i32(bars.max(1));
    let m = to_i32(segments.max(1));
    let nm = n.saturating_mul(m);
    let cw = canvas_width.max(0);

    let mut negotiated = false;

    let mut spacing = bar_spacing.max(0);
    if total_width(n, m, bar_width, spacing) > cw {
        negotiated = true;
        let rem = cw.saturating_sub(nm.saturating_mul(bar_width));
        spacing = if rem > 0 { ceil_div(rem, nm) } else { 0 };
    }

    let mut width = bar_width.max(0);
    if total_width(n, m, width, spacing) > cw {
        negotiated = true;
        let rem = cw.saturating_sub(n.saturating_add(spacing));
        width = if rem > 0 { ceil_div(rem, nm) } else { 0 };
    }

    if negotiated {
        trace!(
            "bars overflow {} px: width {} -> {}, spacing {} -> {}",
            cw, bar_width, width, bar_spacing, spacing
        );
        // rounding up may overshoot by a few pixels
        spacing = spacing.min(cw / n);
        let used = width
            .saturating_mul(nm)
            .saturating_add(spacing.saturating_mul(n));
        if used > cw {
            width = (cw.saturating_sub(spacing.saturating_mul(n)) / nm).max(0);
        }
        if width == 0 {
            warn!(
                "{} bars of {} segments can't fit {} px: bar width collapsed to zero",
                n, m, cw
            );
        }
    }

    BarMetrics {
        width,
        spacing,
        total: total_width(n, m, width, spacing),
        negotiated,
    }
}

/// Horizontal extent of a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSlot {
    /// Left side
    pub left: i32,
    /// Right side
    pub right: i32,
}

/// Lays the bar slots from `left`.
///
/// After each bar, the cursor advances by the slot width, the spacing,
/// and half the bar's segment count times the configured bar width.
pub fn slots(
    left: i32,
    bars: &[StackedBarValue],
    metrics: &BarMetrics,
    configured_bar_width: i32,
) -> Vec<BarSlot> {
    let mut cursor = left;
    bars.iter()
        .map(|bar| {
            let slot = BarSlot {
                left: cursor,
                right: cursor.saturating_add(metrics.width),
            };
            let bias = to_i32(bar.values().len() / 2).saturating_mul(configured_bar_width);
            cursor = cursor
                .saturating_add(metrics.width)
                .saturating_add(metrics.spacing)
                .saturating_add(bias);
            slot
        })
        .collect()
}

/// Stacks the segments of a bar bottom-up over the canvas bottom.
/// Each segment is as tall as its translated value and never rises above the canvas top.
pub fn segments(
    canvas: &geom::Rect,
    slot: &BarSlot,
    values: &[Value],
    y: &Range,
) -> Vec<geom::Rect> {
    let mut bottom = canvas.bottom.saturating_sub(defaults::STROKE_WIDTH as i32);
    values
        .iter()
        .map(|v| {
            let height = y.translate(v.value()).max(0);
            let top = bottom.saturating_sub(height).max(canvas.top);
            let rect = geom::Rect::from_trbl(top, slot.right, bottom, slot.left);
            bottom = top;
            rect
        })
        .collect()
}

/// Box of a bar name: `label_width` wide, centered on the slot,
/// from `top` down to `bottom`
pub fn name_box(slot: &BarSlot, label_width: i32, top: i32, bottom: i32) -> geom::Rect {
    let center = slot.left.saturating_add(slot.right.saturating_sub(slot.left) / 2);
    let left = center.saturating_sub(label_width / 2);
    geom::Rect::from_trbl(top, left.saturating_add(label_width), bottom, left)
}

/// Height of the X axis footprint: at least the tick height,
/// grown to the tallest bar name wrapped to `label_width`, with its margins
pub fn x_axis_height(
    r: &mut dyn Renderer,
    chart: &des::StackedBarChart,
    label_width: i32,
    style: &Style,
) -> Result<i32, Error> {
    style.write_to_renderer(r);
    let mut height = defaults::VERTICAL_TICK_HEIGHT;
    for bar in chart.bars() {
        if bar.name().is_empty() {
            continue;
        }
        let lines = wrap_fit(r, bar.name(), label_width, style)?;
        let bx = measure_lines(r, &lines, style)?;
        height = height.max(bx.height() + 2 * defaults::X_AXIS_MARGIN);
    }
    Ok(height)
}

fn metrics_for(chart: &des::StackedBarChart, canvas_width: i32) -> BarMetrics {
    negotiate(
        canvas_width,
        chart.bars().len(),
        chart.max_segments(),
        chart.bar_width(),
        chart.bar_spacing(),
    )
}

/// Draws the X axis line, the bar names wrapped to `label_width` and centered
/// below their slot, and a tick at the right of each slot
fn draw_x_axis(
    r: &mut dyn Renderer,
    chart: &des::StackedBarChart,
    canvas: &geom::Rect,
    slots: &[BarSlot],
    label_width: i32,
    style: &Style,
) -> Result<(), Error> {
    let style = style.clone().with_text_align(TextAlign::Center);
    figure::draw_x_axis_line(r, canvas, &style);

    let chart_height = chart.frame().height() as i32;
    for (bar, slot) in chart.bars().iter().zip(slots) {
        let label_box = name_box(
            slot,
            label_width,
            canvas.bottom + defaults::X_AXIS_MARGIN,
            chart_height,
        );
        if !bar.name().is_empty() {
            text_within(r, bar.name(), &label_box, &style)?;
        }
        style.write_to_renderer(r);
        draw_line(
            r,
            slot.right,
            canvas.bottom,
            slot.right,
            canvas.bottom + defaults::VERTICAL_TICK_HEIGHT,
        );
    }
    Ok(())
}

impl Render for des::StackedBarChart {
    fn render<P>(&self, provider: P, sink: &mut dyn io::Write) -> Result<(), Error>
    where
        P: RendererProvider,
    {
        if self.bars().is_empty() {
            return Err(Error::Empty("bar"));
        }

        let mut renderer = create_renderer(&provider, self.frame())?;
        let r: &mut dyn Renderer = &mut renderer;
        let ctx = Ctx::new(self.frame())?;
        ctx.setup_renderer(r);

        ctx.draw_background(r);

        let base = layout::base_box(self.frame());
        let axes_style = ctx.axes_style();
        let x_style = self.x_axis().inherit_from(&axes_style);
        let y_style = self.y_axis().style().inherit_from(&axes_style);

        let y_range = range::resolve(
            self.y_axis(),
            self.bars()
                .iter()
                .flat_map(|b| b.values().iter().map(|v| v.value())),
        );
        debug!("stacked bar range: y [{}, {}]", y_range.min(), y_range.max());

        let axes = layout::Axes {
            x: None,
            x_shown: self.x_axis().is_shown(),
            y: (self.y_axis(), y_range),
            style: &axes_style,
        };
        let chart_height = self.frame().height() as i32;
        // names are measured and drawn at the width of the bars over the provisional canvas
        let label_width = metrics_for(self, base.width()).width;
        let mut x_footprint =
            |r: &mut dyn Renderer, canvas: &geom::Rect| -> Result<Option<geom::Rect>, Error> {
                let height = x_axis_height(r, self, label_width, &x_style)?;
                let metrics = metrics_for(self, canvas.width());
                Ok(Some(layout::x_axis_box(canvas, metrics.total, chart_height, height)))
            };
        let laid = layout::resolve_canvas(r, &base, axes, &mut x_footprint)?;
        let canvas = laid.canvas;
        let AxisLayout { range: y_range, ticks: y_ticks } = laid.y;

        ctx.draw_canvas(r, &canvas);

        let metrics = metrics_for(self, canvas.width());
        debug!(
            "bars over {} px: width {}, spacing {}, total {}",
            canvas.width(),
            metrics.width,
            metrics.spacing,
            metrics.total
        );
        let slots = slots(
            canvas.left,
            self.bars(),
            &metrics,
            self.configured_bar_width(),
        );
        for (bar, slot) in self.bars().iter().zip(&slots) {
            let rects = segments(&canvas, slot, bar.values(), &y_range);
            for (index, (value, rect)) in bar.values().iter().zip(&rects).enumerate() {
                let style = value.style().inherit_from(&ctx.mark_style(index));
                draw_box(r, rect, &style);
            }
        }

        if self.x_axis().is_shown() {
            draw_x_axis(r, self, &canvas, &slots, label_width, &x_style)?;
        }
        if self.y_axis().is_shown() {
            figure::draw_y_axis(r, &canvas, &y_range, &y_ticks, &y_style)?;
        }

        ctx.draw_title(r)?;
        ctx.draw_elements(r, &canvas)?;

        save(r, sink)
    }
}
