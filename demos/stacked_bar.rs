use chartive::{Style, des};

mod common;

fn main() {
    let bars = vec![
        des::StackedBarValue::new(
            "Stocks 2023",
            vec![
                des::Value::new(50.0).with_label("apple"),
                des::Value::new(30.0).with_label("banana"),
                des::Value::new(20.0).with_label("cherry"),
            ],
        ),
        des::StackedBarValue::new(
            "Stocks 2024",
            vec![
                des::Value::new(60.0).with_label("apple"),
                des::Value::new(40.0).with_label("banana"),
            ],
        ),
        des::StackedBarValue::new("Stocks 2025", vec![des::Value::new(55.0)]).with_width(30),
    ];

    let mut chart = des::StackedBarChart::new(bars)
        .with_title("Fruit stocks")
        .with_x_axis(Style::shown())
        .with_y_axis(des::Axis::visible().with_range(0.0, 120.0))
        .with_bar_width(40)
        .with_bar_spacing(60);

    if let Some(palette) = common::palette() {
        chart = chart.with_palette(palette);
    }

    common::save_chart(&chart, "stacked_bar");
}
