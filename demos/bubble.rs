use chartive::{Style, des, style};

mod common;

fn main() {
    let bubbles = vec![
        des::BubbleValue::new(1.0, 1.0, des::Value::new(2.55).with_label("Blue")),
        des::BubbleValue::new(2.0, 4.0, des::Value::new(1.0).with_label("Blue")),
        des::BubbleValue::new(3.0, 5.0, des::Value::new(4.2).with_label("Blue")),
        des::BubbleValue::new(1.0, 1.0, des::Value::new(3.2).with_label("Blue")),
        des::BubbleValue::new(1.6, 1.5, des::Value::new(5.5).with_label("Blue")),
    ];

    let mut chart = des::BubbleChart::new(bubbles)
        .with_title("Test Bubble Chart")
        .with_title_style(Style::shown())
        .with_height(800)
        .with_background(Style::default().with_padding(style::Insets::default().with_top(40)))
        .with_x_axis(des::Axis::visible())
        .with_y_axis(des::Axis::visible().with_formatter(des::PrecFormat(1)))
        .with_bubble_scale(4.0);

    if let Some(palette) = common::palette() {
        chart = chart.with_palette(palette);
    }

    common::save_chart(&chart, "bubble");
}
