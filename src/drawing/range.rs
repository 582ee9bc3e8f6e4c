//! Mapping of data values onto a pixel span
use log::trace;

use crate::des;

/// A linear mapping from `[min, max]` onto `[0, domain]` pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    domain: i32,
}

impl Range {
    /// Build a range with an empty domain
    pub const fn new(min: f64, max: f64) -> Self {
        Range {
            min,
            max,
            domain: 0,
        }
    }

    /// Lower bound
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Length of the pixel span
    pub const fn domain(&self) -> i32 {
        self.domain
    }

    /// `max - min`
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether min and max are equal
    pub fn is_zero(&self) -> bool {
        self.min == self.max
    }

    /// The same bounds over another pixel span
    pub const fn with_domain(self, domain: i32) -> Self {
        Range { domain, ..self }
    }

    /// Pixel offset of `value` from the start of the domain, rounded up.
    /// Returns zero when the range or the domain is empty.
    pub fn translate(&self, value: f64) -> i32 {
        let span = self.span();
        if self.domain == 0 || span == 0.0 || !span.is_finite() {
            return 0;
        }
        let offset = ((value - self.min) / span * self.domain as f64).ceil();
        if offset.is_finite() { offset as i32 } else { 0 }
    }

    /// Gives a single valued range a visible span:
    /// `[0, v]` for a positive value, `[v, 0]` for a negative one and `[0, 0.5]` for zero.
    pub fn fix_degenerate(self) -> Self {
        if !self.is_zero() {
            return self;
        }
        let v = self.max;
        let (min, max) = if v > 0.0 {
            (0.0, v)
        } else if v < 0.0 {
            (v, 0.0)
        } else {
            (0.0, 0.5)
        };
        trace!("degenerate range at {} widened to [{}, {}]", v, min, max);
        Range { min, max, ..self }
    }
}

/// Resolves the range of an axis.
///
/// An explicit finite range with distinct bounds wins. Otherwise the bounds of the
/// explicit ticks are used, and otherwise the bounds of the finite `values`.
/// Ranges computed from ticks or data are widened when degenerate.
pub fn resolve<I>(axis: &des::Axis, values: I) -> Range
where
    I: IntoIterator<Item = f64>,
{
    if let Some((a, b)) = axis.range() {
        if a.is_finite() && b.is_finite() && a != b {
            return Range::new(a.min(b), a.max(b));
        }
    }

    if !axis.ticks().is_empty() {
        if let Some(r) = bounds(axis.ticks().iter().map(|t| t.value)) {
            return r.fix_degenerate();
        }
    }

    bounds(values)
        .unwrap_or(Range::new(0.0, 0.0))
        .fix_degenerate()
}

fn bounds<I>(values: I) -> Option<Range>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
        .map(|(min, max)| Range::new(min, max))
}
