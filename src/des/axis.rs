//! Design structures for the chart axes
use std::fmt;
use std::sync::Arc;

use crate::Style;
use crate::des::format::{LabelFormatter, PrecFormat};

/// A labeled reference point on an axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position in data space
    pub value: f64,
    /// Displayed label
    pub label: String,
}

impl Tick {
    /// Build a tick
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Tick {
            value,
            label: label.into(),
        }
    }
}

/// A value axis.
///
/// Axes are hidden unless their style is explicitly shown.
/// The range of the axis is resolved in this order: explicit range,
/// bounds of the explicit ticks, bounds of the data.
#[derive(Clone, Default)]
pub struct Axis {
    style: Style,
    range: Option<(f64, f64)>,
    ticks: Vec<Tick>,
    formatter: Option<Arc<dyn LabelFormatter + Send + Sync>>,
}

static DEFAULT_FORMATTER: PrecFormat = PrecFormat(crate::style::defaults::LABEL_PRECISION);

impl Axis {
    /// A hidden axis
    pub fn new() -> Self {
        Axis::default()
    }

    /// A shown axis
    pub fn visible() -> Self {
        Axis {
            style: Style::shown(),
            ..Default::default()
        }
    }

    /// Set the style
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    /// Set an explicit range.
    /// It is ignored when not finite or when `min == max`.
    pub fn with_range(self, min: f64, max: f64) -> Self {
        Self {
            range: Some((min, max)),
            ..self
        }
    }

    /// Set explicit ticks
    pub fn with_ticks(self, ticks: Vec<Tick>) -> Self {
        Self { ticks, ..self }
    }

    /// Set the formatter of the generated tick labels
    pub fn with_formatter<F>(self, formatter: F) -> Self
    where
        F: LabelFormatter + Send + Sync + 'static,
    {
        Self {
            formatter: Some(Arc::new(formatter)),
            ..self
        }
    }

    /// The style
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The explicit range
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// The explicit ticks
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// The tick label formatter, 2 decimals by default
    pub fn formatter(&self) -> &dyn LabelFormatter {
        match self.formatter.as_deref() {
            Some(f) => f,
            None => &DEFAULT_FORMATTER,
        }
    }

    /// Whether the axis is drawn
    pub fn is_shown(&self) -> bool {
        self.style.is_shown()
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("style", &self.style)
            .field("range", &self.range)
            .field("ticks", &self.ticks)
            .field("formatter", &self.formatter.as_ref().map(|_| ".."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_hidden_by_default() {
        assert!(!Axis::new().is_shown());
        assert!(!Axis::new().with_style(Style::default()).is_shown());
        assert!(Axis::visible().is_shown());
        assert!(!Axis::visible().with_style(Style::hidden()).is_shown());
    }

    #[test]
    fn axis_formatter() {
        let axis = Axis::new();
        assert_eq!(axis.formatter().format(1.0), "1.00");
        let axis = axis.with_formatter(PrecFormat(1));
        assert_eq!(axis.formatter().format(1.0), "1.0");
        let axis = axis.with_formatter(|v: f64| format!("{}x", v));
        assert_eq!(axis.formatter().format(2.0), "2x");
    }
}
