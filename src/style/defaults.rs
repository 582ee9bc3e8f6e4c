//! Default values of the chart configuration and layout constants.
//! All distances are in pixels.
use crate::geom;

pub const CHART_WIDTH: u32 = 1024;
pub const CHART_HEIGHT: u32 = 400;
pub const DPI: f32 = 92.0;

/// Padding between the chart bounds and the area available to the canvas and axes
pub const BACKGROUND_PADDING: geom::Padding = geom::Padding::from_trbl(20, 10, 50, 20);

pub const FONT_SIZE: f32 = 10.0;
pub const AXIS_FONT_SIZE: f32 = 10.0;
pub const TITLE_TOP: i32 = 10;
pub const LINE_SPACING: i32 = 5;

pub const STROKE_WIDTH: f32 = 1.0;
pub const CANVAS_STROKE_WIDTH: f32 = 1.0;
pub const AXIS_LINE_WIDTH: f32 = 1.0;
pub const MARK_STROKE_WIDTH: f32 = 3.0;

pub const Y_AXIS_MARGIN: i32 = 10;
pub const X_AXIS_MARGIN: i32 = 10;
pub const VERTICAL_TICK_HEIGHT: i32 = 5;
pub const HORIZONTAL_TICK_WIDTH: i32 = 5;
/// Gap between a Y tick mark and its label, on top of [`Y_AXIS_MARGIN`]
pub const Y_TICK_LABEL_GAP: i32 = 5;
/// Gap between the X axis area and continuous tick labels, on top of [`X_AXIS_MARGIN`]
pub const X_TICK_LABEL_GAP: i32 = 10;

pub const MIN_TICK_VERTICAL_SPACING: i32 = 20;
pub const MIN_TICK_HORIZONTAL_SPACING: i32 = 20;
pub const TICK_COUNT_SANITY_CHECK: usize = 1 << 10;

pub const LABEL_PRECISION: usize = 2;

pub const BUBBLE_SCALE: f64 = 1.0;
/// Width available to a bubble label when measuring the X axis footprint
pub const BUBBLE_LABEL_WIDTH: i32 = 50;

pub const BAR_WIDTH: i32 = 50;
pub const BAR_SPACING: i32 = 50;

/// Title font size, growing with the smallest dimension of the chart
pub const fn title_font_size(size: geom::Size) -> f32 {
    let dim = size.min_dim();
    if dim >= 2048 {
        48.0
    } else if dim >= 1024 {
        24.0
    } else if dim >= 512 {
        18.0
    } else if dim >= 256 {
        12.0
    } else {
        10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_font_size_steps() {
        assert_eq!(title_font_size(geom::Size::new(1024, 400)), 12.0);
        assert_eq!(title_font_size(geom::Size::new(1024, 800)), 18.0);
        assert_eq!(title_font_size(geom::Size::new(4096, 2048)), 48.0);
        assert_eq!(title_font_size(geom::Size::new(1500, 1024)), 24.0);
        assert_eq!(title_font_size(geom::Size::new(200, 800)), 10.0);
    }
}
