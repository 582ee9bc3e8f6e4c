//! Formatting of numeric values into labels

/// Converts a value into a display label
pub trait LabelFormatter {
    /// Format `value`
    fn format(&self, value: f64) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// Fixed precision decimal formatting. Axes use 2 decimals by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecFormat(pub usize);

impl Default for PrecFormat {
    fn default() -> Self {
        PrecFormat(crate::style::defaults::LABEL_PRECISION)
    }
}

impl LabelFormatter for PrecFormat {
    fn format(&self, value: f64) -> String {
        format!("{:.*}", self.0, value)
    }
}

/// Shortest representation that reads back to the same value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestFormat;

impl LabelFormatter for ShortestFormat {
    fn format(&self, value: f64) -> String {
        format!("{}", value)
    }
}

/// Ratio displayed as a percentage with a fixed precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentFormat(pub usize);

impl LabelFormatter for PercentFormat {
    fn format(&self, value: f64) -> String {
        format!("{:.*}%", self.0, value * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prec_format() {
        assert_eq!(PrecFormat::default().format(1.0), "1.00");
        assert_eq!(PrecFormat(0).format(2.6), "3");
        assert_eq!(PrecFormat(3).format(-0.5), "-0.500");
    }

    #[test]
    fn shortest_format() {
        assert_eq!(ShortestFormat.format(2.55), "2.55");
        assert_eq!(ShortestFormat.format(1.0), "1");
        assert_eq!(ShortestFormat.format(5.5), "5.5");
    }

    #[test]
    fn percent_format() {
        assert_eq!(PercentFormat(0).format(0.25), "25%");
        assert_eq!(PercentFormat(1).format(0.5), "50.0%");
    }

    #[test]
    fn closure_format() {
        let f = |v: f64| format!("<{}>", v);
        assert_eq!(LabelFormatter::format(&f, 3.0), "<3>");
    }
}
