use chartive::render::Error as RenderError;
use chartive::style::palette;
use chartive::{Error, Render, des};

use super::bubbles;
use crate::{FailingSink, contains_color, decode, pixel, render_png, require_font};

fn scenario_a() -> des::BubbleChart {
    des::BubbleChart::new(bubbles())
        .with_title("Bubbles")
        .with_x_axis(des::Axis::visible())
        .with_y_axis(des::Axis::visible())
}

#[test]
fn bubble_default_size() {
    require_font!();

    let png = render_png(&scenario_a()).unwrap();
    let pixmap = decode(&png);
    assert_eq!((pixmap.width(), pixmap.height()), (1024, 400));
}

#[test]
fn bubble_custom_size() {
    require_font!();

    let chart = scenario_a().with_width(600).with_height(450);
    let pixmap = decode(&render_png(&chart).unwrap());
    assert_eq!((pixmap.width(), pixmap.height()), (600, 450));
}

#[test]
fn bubble_idempotent() {
    require_font!();

    let chart = scenario_a();
    let first = render_png(&chart).unwrap();
    let second = render_png(&chart).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bubble_colors() {
    require_font!();

    let pixmap = decode(&render_png(&scenario_a()).unwrap());
    assert_eq!(pixel(&pixmap, 5, 5), palette::WHITE);
    assert!(contains_color(&pixmap, palette::ALT_BLUE));
}

#[test]
fn bubble_value_style_override() {
    require_font!();

    let red = chartive::ColorU8::from_rgb(200, 10, 10);
    let chart = des::BubbleChart::new(vec![
        des::BubbleValue::new(1.0, 1.0, 4.0),
        des::BubbleValue::new(
            2.0,
            2.0,
            des::Value::new(8.0).with_style(
                chartive::Style::default()
                    .with_fill_color(red)
                    .with_stroke_color(red),
            ),
        ),
    ]);
    let pixmap = decode(&render_png(&chart).unwrap());
    assert!(contains_color(&pixmap, red));
}

#[test]
fn bubble_empty() {
    let mut out = Vec::new();
    let res = des::BubbleChart::new(vec![]).render(chartive_pxl::png, &mut out);
    assert!(matches!(res, Err(Error::Empty(_))));
    assert!(out.is_empty());
}

#[test]
fn bubble_invalid_size() {
    let mut out = Vec::new();
    let res = scenario_a()
        .with_width(u32::MAX)
        .render(chartive_pxl::png, &mut out);
    assert!(matches!(res, Err(Error::Render(RenderError::InvalidSize(..)))));
    assert!(out.is_empty());
}

#[test]
fn bubble_failing_sink() {
    require_font!();

    let res = scenario_a().render(chartive_pxl::png, &mut FailingSink);
    assert!(matches!(res, Err(Error::Render(RenderError::Io(_)))));
}
