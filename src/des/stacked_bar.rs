//! Stacked bar chart design
use crate::Style;
use crate::des::{Axis, Frame, StackedBarValue, impl_frame_builders};
use crate::style::defaults;

/// A chart of bars made of stacked segments.
///
/// Bar width and spacing are nominal: they shrink when the bars
/// don't fit the canvas width.
#[derive(Debug, Clone, Default)]
pub struct StackedBarChart {
    frame: Frame,
    x_axis: Style,
    y_axis: Axis,
    bar_width: Option<i32>,
    bar_spacing: Option<i32>,
    bars: Vec<StackedBarValue>,
}

impl StackedBarChart {
    /// Build a chart of the given bars, drawn from left to right
    pub fn new(bars: Vec<StackedBarValue>) -> Self {
        StackedBarChart {
            bars,
            ..Default::default()
        }
    }

    /// Set the style of the X axis, which shows the bar names
    pub fn with_x_axis(self, x_axis: Style) -> Self {
        Self { x_axis, ..self }
    }

    /// Set the Y axis
    pub fn with_y_axis(self, y_axis: Axis) -> Self {
        Self { y_axis, ..self }
    }

    /// Set the nominal bar width in pixels
    pub fn with_bar_width(self, width: i32) -> Self {
        Self {
            bar_width: Some(width),
            ..self
        }
    }

    /// Set the nominal spacing between bars in pixels
    pub fn with_bar_spacing(self, spacing: i32) -> Self {
        Self {
            bar_spacing: Some(spacing),
            ..self
        }
    }

    /// The bars
    pub fn bars(&self) -> &[StackedBarValue] {
        &self.bars
    }

    /// The X axis style
    pub fn x_axis(&self) -> &Style {
        &self.x_axis
    }

    /// The Y axis
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// The nominal bar width, 50 by default
    pub fn bar_width(&self) -> i32 {
        self.bar_width
            .filter(|w| *w != 0)
            .unwrap_or(defaults::BAR_WIDTH)
    }

    /// The bar width as configured, zero when unset.
    /// Used to bias the advance between bars of several segments.
    pub fn configured_bar_width(&self) -> i32 {
        self.bar_width.unwrap_or(0)
    }

    /// The nominal spacing between bars, 50 by default
    pub fn bar_spacing(&self) -> i32 {
        self.bar_spacing
            .filter(|s| *s != 0)
            .unwrap_or(defaults::BAR_SPACING)
    }

    /// The largest number of segments in a bar
    pub fn max_segments(&self) -> usize {
        self.bars.iter().map(|b| b.values().len()).max().unwrap_or(0)
    }
}

impl_frame_builders!(StackedBarChart);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::Value;

    #[test]
    fn bar_defaults() {
        let chart = StackedBarChart::new(vec![]);
        assert_eq!(chart.bar_width(), 50);
        assert_eq!(chart.bar_spacing(), 50);
        assert_eq!(chart.configured_bar_width(), 0);
        assert_eq!(chart.max_segments(), 0);
        assert_eq!(chart.frame().height(), 400);
    }

    #[test]
    fn max_segments() {
        let chart = StackedBarChart::new(vec![
            StackedBarValue::new("a", vec![Value::new(1.0); 3]),
            StackedBarValue::new("b", vec![Value::new(2.0)]),
        ])
        .with_bar_width(20);
        assert_eq!(chart.max_segments(), 3);
        assert_eq!(chart.bar_width(), 20);
        assert_eq!(chart.configured_bar_width(), 20);
    }
}
