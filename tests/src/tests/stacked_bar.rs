use chartive::drawing::stacked_bar::{BarMetrics, negotiate};
use chartive::render::Error as RenderError;
use chartive::style::palette;
use chartive::{Error, Render, Style, des};

use super::bars;
use crate::{FailingSink, contains_color, decode, pixel, render_png, require_font};

fn chart() -> des::StackedBarChart {
    des::StackedBarChart::new(bars())
        .with_title("Stacked")
        .with_x_axis(Style::shown())
        .with_y_axis(des::Axis::visible())
}

#[test]
fn stacked_bar_negotiation_keeps_nominal() {
    let m = negotiate(400, 2, 3, 50, 50);
    assert_eq!(
        m,
        BarMetrics {
            width: 50,
            spacing: 50,
            total: 400,
            negotiated: false,
        }
    );
}

#[test]
fn stacked_bar_negotiation_shrinks() {
    let m = negotiate(200, 2, 3, 50, 50);
    assert!(m.negotiated);
    assert!(m.width >= 0 && m.spacing >= 0);
    assert!(m.width * 3 * 2 + m.spacing * 2 <= 200);
}

#[test]
fn stacked_bar_default_size() {
    require_font!();

    let pixmap = decode(&render_png(&chart()).unwrap());
    assert_eq!((pixmap.width(), pixmap.height()), (1024, 400));
    assert_eq!(pixel(&pixmap, 5, 5), palette::WHITE);
    assert!(contains_color(&pixmap, palette::ALT_BLUE));
    assert!(contains_color(&pixmap, palette::ALT_GREEN));
}

#[test]
fn stacked_bar_narrow_chart() {
    require_font!();

    // the canvas is narrower than the nominal bars
    let chart = chart().with_width(260);
    let pixmap = decode(&render_png(&chart).unwrap());
    assert_eq!((pixmap.width(), pixmap.height()), (260, 400));
}

#[test]
fn stacked_bar_idempotent() {
    require_font!();

    let chart = chart().with_bar_width(30).with_bar_spacing(20);
    assert_eq!(render_png(&chart).unwrap(), render_png(&chart).unwrap());
}

#[test]
fn stacked_bar_empty() {
    let mut out = Vec::new();
    let res = des::StackedBarChart::new(vec![]).render(chartive_pxl::png, &mut out);
    assert!(matches!(res, Err(Error::Empty(_))));
    assert!(out.is_empty());
}

#[test]
fn stacked_bar_failing_sink() {
    require_font!();

    let res = chart().render(chartive_pxl::png, &mut FailingSink);
    assert!(matches!(res, Err(Error::Render(RenderError::Io(_)))));
}
