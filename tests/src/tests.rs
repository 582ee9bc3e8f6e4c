use chartive::des;

mod bubble;
mod stacked_bar;

fn bubbles() -> Vec<des::BubbleValue> {
    vec![
        des::BubbleValue::new(1.0, 1.0, 2.55),
        des::BubbleValue::new(2.0, 4.0, 1.0),
        des::BubbleValue::new(3.0, 5.0, 4.2),
        des::BubbleValue::new(1.0, 1.0, 3.2),
        des::BubbleValue::new(1.6, 1.5, 5.5),
    ]
}

fn bars() -> Vec<des::StackedBarValue> {
    vec![
        des::StackedBarValue::new(
            "Blue",
            vec![
                des::Value::new(2.0),
                des::Value::new(3.0),
                des::Value::new(1.0),
            ],
        ),
        des::StackedBarValue::new("Green", vec![des::Value::new(4.0)]),
    ]
}
