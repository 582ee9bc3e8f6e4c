//! Bubble chart design
use crate::des::{Axis, BubbleValue, Frame, impl_frame_builders};
use crate::style::defaults;

/// A chart of circles placed by (x, y), with a radius proportional to their value
#[derive(Debug, Clone, Default)]
pub struct BubbleChart {
    frame: Frame,
    x_axis: Axis,
    y_axis: Axis,
    bubble_scale: Option<f64>,
    bubbles: Vec<BubbleValue>,
}

impl BubbleChart {
    /// Build a chart of the given bubbles, drawn in order
    pub fn new(bubbles: Vec<BubbleValue>) -> Self {
        BubbleChart {
            bubbles,
            ..Default::default()
        }
    }

    /// Set the X axis
    pub fn with_x_axis(self, x_axis: Axis) -> Self {
        Self { x_axis, ..self }
    }

    /// Set the Y axis
    pub fn with_y_axis(self, y_axis: Axis) -> Self {
        Self { y_axis, ..self }
    }

    /// Set the factor converting a value into a radius in pixels
    pub fn with_bubble_scale(self, scale: f64) -> Self {
        Self {
            bubble_scale: Some(scale),
            ..self
        }
    }

    /// The bubbles
    pub fn bubbles(&self) -> &[BubbleValue] {
        &self.bubbles
    }

    /// The X axis
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// The Y axis
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// The radius scale. Zero, unset or non-finite scales fall back to 1.
    pub fn bubble_scale(&self) -> f64 {
        self.bubble_scale
            .filter(|s| s.is_finite() && *s != 0.0)
            .unwrap_or(defaults::BUBBLE_SCALE)
    }
}

impl_frame_builders!(BubbleChart);
