//! Values plotted by the charts

use crate::Style;
use crate::style::defaults;

/// A magnitude with a label and a presentation style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    value: f64,
    label: String,
    style: Style,
}

impl Value {
    /// Build a value without label
    pub fn new(value: f64) -> Self {
        Value {
            value,
            ..Default::default()
        }
    }

    /// Set the label
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..self
        }
    }

    /// Set the style. Unset properties fall back on the series style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    /// The magnitude
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The style
    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}

/// A bubble: a value placed at (x, y)
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleValue {
    value: Value,
    x: f64,
    y: f64,
}

impl BubbleValue {
    /// Build a bubble at (x, y)
    pub fn new(x: f64, y: f64, value: impl Into<Value>) -> Self {
        BubbleValue {
            value: value.into(),
            x,
            y,
        }
    }

    /// The bubble value, which drives its radius
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// X position in data space
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y position in data space
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// A bar made of stacked segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackedBarValue {
    name: String,
    width: Option<i32>,
    values: Vec<Value>,
}

impl StackedBarValue {
    /// Build a bar from its segments, stacked bottom-up in order
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        StackedBarValue {
            name: name.into(),
            width: None,
            values,
        }
    }

    /// Set the nominal width in pixels
    pub fn with_width(self, width: i32) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    /// The name displayed under the bar
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nominal width in pixels, 50 by default
    pub fn width(&self) -> i32 {
        self.width
            .filter(|w| *w != 0)
            .unwrap_or(defaults::BAR_WIDTH)
    }

    /// The segments
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}
