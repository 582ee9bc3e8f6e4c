//! Canvas box resolution.
//!
//! The canvas starts as the chart area minus the background padding. The footprints
//! of the shown axes (lines, tick marks and labels) are measured around it, and
//! the canvas shrinks by the amount they overflow the chart area.
//! This is done in two passes: [`first_pass`] computes ticks over provisional domains
//! and shrinks the canvas, [`second_pass`] maps the ranges onto the final canvas.
//! Ticks are not recomputed by the second pass.
use log::debug;

use crate::des::{Axis, Frame, Tick};
use crate::drawing::ticks::{self, Orientation};
use crate::drawing::{Error, Range};
use crate::render::Renderer;
use crate::style::defaults;
use crate::{Style, geom};

/// The chart area available to the canvas and the axes
pub fn base_box(frame: &Frame) -> geom::Rect {
    let pad = frame
        .background()
        .padding
        .resolve(defaults::BACKGROUND_PADDING);
    geom::Rect::from_trbl(
        pad.top,
        frame.width() as i32 - pad.right,
        frame.height() as i32 - pad.bottom,
        pad.left,
    )
}

/// Footprint of a Y axis on the right side of `canvas`.
///
/// The footprint spans from the canvas right side to the end of the widest label,
/// and vertically over the labels centered on their tick.
/// Returns `None` without ticks.
pub fn measure_y_axis(
    r: &mut dyn Renderer,
    canvas: &geom::Rect,
    range: &Range,
    style: &Style,
    ticks: &[Tick],
) -> Result<Option<geom::Rect>, Error> {
    if ticks.is_empty() {
        return Ok(None);
    }
    style.write_to_renderer(r);

    let tx = canvas.right + defaults::Y_AXIS_MARGIN;
    let mut bx = geom::Rect::from_trbl(i32::MAX, canvas.right, i32::MIN, canvas.right);
    for tick in ticks {
        let ly = canvas.bottom - range.translate(tick.value);
        let tb = r.measure_text(&tick.label)?;
        let half = tb.height() / 2;
        bx.right = bx.right.max(tx + tb.width());
        bx.top = bx.top.min(ly - half);
        bx.bottom = bx.bottom.max(ly + half);
    }
    Ok(Some(bx))
}

/// Footprint of an X axis below `canvas`: from the canvas top down to
/// `axis_height` pixels above the chart bottom, and `width` pixels wide.
pub fn x_axis_box(canvas: &geom::Rect, width: i32, chart_height: i32, axis_height: i32) -> geom::Rect {
    geom::Rect::from_trbl(
        canvas.top,
        canvas.left.saturating_add(width),
        chart_height.saturating_sub(axis_height),
        canvas.left,
    )
}

/// Shrinks `canvas` so that the axes footprints laid around it fit in `base`
pub fn adjusted_canvas(
    base: &geom::Rect,
    canvas: &geom::Rect,
    x_box: Option<geom::Rect>,
    y_box: Option<geom::Rect>,
) -> geom::Rect {
    let mut outer = *canvas;
    if let Some(x_box) = x_box {
        outer = outer.grow(&x_box);
    }
    if let Some(y_box) = y_box {
        outer = outer.grow(&y_box);
    }
    canvas.outer_constrain(base, &outer).normalized()
}

/// Axes taking part in the layout
#[derive(Debug, Clone, Copy)]
pub struct Axes<'a> {
    /// Continuous X axis and its range, if the chart has one
    pub x: Option<(&'a Axis, Range)>,
    /// Whether something is drawn along the X side
    pub x_shown: bool,
    /// Y axis and its range
    pub y: (&'a Axis, Range),
    /// Default style of the axes
    pub style: &'a Style,
}

/// Range and ticks of a resolved axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    /// Range mapped onto the canvas
    pub range: Range,
    /// Ticks, empty for a hidden axis
    pub ticks: Vec<Tick>,
}

/// Resolved canvas and axes
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// The plotting area
    pub canvas: geom::Rect,
    /// X axis, if the chart has a continuous one
    pub x: Option<AxisLayout>,
    /// Y axis
    pub y: AxisLayout,
}

/// Measures the footprint of the X side of a chart around a canvas
pub type XFootprint<'f> =
    dyn FnMut(&mut dyn Renderer, &geom::Rect) -> Result<Option<geom::Rect>, Error> + 'f;

/// Resolves the canvas and the axes in two passes
pub fn resolve_canvas(
    r: &mut dyn Renderer,
    base: &geom::Rect,
    axes: Axes<'_>,
    x_footprint: &mut XFootprint<'_>,
) -> Result<Layout, Error> {
    let layout = first_pass(r, base, axes, x_footprint)?;
    Ok(second_pass(layout))
}

/// Maps the ranges onto `base`, generates the ticks of the shown axes
/// and shrinks the canvas to fit their footprint
pub fn first_pass(
    r: &mut dyn Renderer,
    base: &geom::Rect,
    axes: Axes<'_>,
    x_footprint: &mut XFootprint<'_>,
) -> Result<Layout, Error> {
    let canvas = *base;
    let (y_axis, y_range) = axes.y;

    let mut x = axes.x.map(|(_, range)| AxisLayout {
        range: range.with_domain(canvas.width()),
        ticks: Vec::new(),
    });
    let mut y = AxisLayout {
        range: y_range.with_domain(canvas.height()),
        ticks: Vec::new(),
    };

    if !axes.x_shown && !y_axis.is_shown() {
        return Ok(Layout { canvas, x, y });
    }

    if let (Some((x_axis, _)), Some(x)) = (axes.x, x.as_mut()) {
        if x_axis.is_shown() {
            let style = x_axis.style().inherit_from(axes.style);
            x.ticks = ticks::generate(r, x_axis, &x.range, &style, Orientation::Horizontal)?;
        }
    }

    let y_style = y_axis.style().inherit_from(axes.style);
    if y_axis.is_shown() {
        y.ticks = ticks::generate(r, y_axis, &y.range, &y_style, Orientation::Vertical)?;
    }

    let x_box = if axes.x_shown {
        x_footprint(r, &canvas)?
    } else {
        None
    };
    let y_box = if y_axis.is_shown() {
        measure_y_axis(r, &canvas, &y.range, &y_style, &y.ticks)?
    } else {
        None
    };

    let canvas = adjusted_canvas(base, &canvas, x_box, y_box);
    debug!(
        "canvas adjusted from {:?} to {:?} (x footprint {:?}, y footprint {:?})",
        base, canvas, x_box, y_box
    );
    Ok(Layout { canvas, x, y })
}

/// Maps the ranges onto the canvas resolved by [`first_pass`]
pub fn second_pass(layout: Layout) -> Layout {
    let Layout { canvas, x, y } = layout;
    Layout {
        canvas,
        x: x.map(|x| AxisLayout {
            range: x.range.with_domain(canvas.width()),
            ..x
        }),
        y: AxisLayout {
            range: y.range.with_domain(canvas.height()),
            ..y
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::BubbleChart;
    use crate::style::Insets;
    use crate::tests::Recorder;

    fn axes_style() -> Style {
        Style::default().with_font_size(10.0)
    }

    #[test]
    fn base_box_defaults() {
        let chart = BubbleChart::new(vec![]);
        assert_eq!(
            base_box(chart.frame()),
            geom::Rect::from_trbl(20, 1014, 350, 20)
        );

        let chart = chart
            .with_height(800)
            .with_background(Style::default().with_padding(Insets::default().with_top(40)));
        assert_eq!(
            base_box(chart.frame()),
            geom::Rect::from_trbl(40, 1014, 750, 20)
        );
    }

    #[test]
    fn y_axis_footprint() {
        let mut r = Recorder::new(400, 300);
        let canvas = geom::Rect::from_trbl(20, 300, 220, 20);
        let range = Range::new(0.0, 10.0).with_domain(canvas.height());
        let ticks = vec![Tick::new(0.0, "0.00"), Tick::new(10.0, "10.00")];
        let bx = measure_y_axis(&mut r, &canvas, &range, &axes_style(), &ticks)
            .unwrap()
            .unwrap();
        // "10.00" is 30 px wide, labels are 10 px high
        assert_eq!(bx, geom::Rect::from_trbl(15, 340, 225, 300));

        assert!(
            measure_y_axis(&mut r, &canvas, &range, &axes_style(), &[])
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn canvas_shrinks_to_fit() {
        let base = geom::Rect::from_trbl(20, 1014, 350, 20);
        let x_box = x_axis_box(&base, 100, 400, 30);
        let y_box = geom::Rect::from_trbl(15, 1060, 355, 1014);
        let canvas = adjusted_canvas(&base, &base, Some(x_box), Some(y_box));
        assert_eq!(canvas, geom::Rect::from_trbl(25, 968, 330, 20));
    }

    #[test]
    fn canvas_without_axes() {
        let mut r = Recorder::new(1024, 400);
        let base = geom::Rect::from_trbl(20, 1014, 350, 20);
        let y_axis = Axis::new();
        let style = axes_style();
        let axes = Axes {
            x: None,
            x_shown: false,
            y: (&y_axis, Range::new(0.0, 5.0)),
            style: &style,
        };
        let layout = resolve_canvas(&mut r, &base, axes, &mut |_, _| Ok(None)).unwrap();
        assert_eq!(layout.canvas, base);
        assert!(layout.y.ticks.is_empty());
        assert_eq!(layout.y.range.domain(), 330);
        assert!(r.ops.is_empty());
    }

    #[test]
    fn two_passes_remap_domains() {
        let mut r = Recorder::new(1024, 400);
        let base = geom::Rect::from_trbl(20, 1014, 350, 20);
        let y_axis = Axis::visible();
        let x_axis = Axis::visible();
        let style = axes_style();
        let axes = Axes {
            x: Some((&x_axis, Range::new(1.0, 3.0))),
            x_shown: true,
            y: (&y_axis, Range::new(1.0, 5.0)),
            style: &style,
        };
        let mut footprint = |_: &mut dyn Renderer,
                             canvas: &geom::Rect|
         -> Result<Option<geom::Rect>, Error> {
            Ok(Some(x_axis_box(canvas, 10, 400, 25)))
        };

        let first = first_pass(&mut r, &base, axes, &mut footprint).unwrap();
        // provisional domains over the base box
        assert_eq!(first.y.range.domain(), base.height());
        assert_eq!(first.x.as_ref().unwrap().range.domain(), base.width());
        assert!(!first.y.ticks.is_empty());
        assert!(!first.x.as_ref().unwrap().ticks.is_empty());
        assert!(first.canvas.right < base.right);
        assert_eq!(first.canvas.bottom, 350 - 25);

        let second = second_pass(first.clone());
        assert_eq!(second.canvas, first.canvas);
        assert_eq!(second.y.range.domain(), first.canvas.height());
        assert_eq!(
            second.x.as_ref().unwrap().range.domain(),
            first.canvas.width()
        );
        assert_eq!(second.y.ticks, first.y.ticks);
    }
}
