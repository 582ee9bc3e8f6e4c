//! Tick generation for continuous axes
use log::trace;

use crate::des::{Axis, LabelFormatter, Tick};
use crate::drawing::{Error, Range};
use crate::render::Renderer;
use crate::style::defaults;
use crate::Style;

/// Direction along which the ticks are spread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Ticks along an X axis
    Horizontal,
    /// Ticks along a Y axis
    Vertical,
}

/// Produces the ticks of an axis over `range`.
///
/// Explicit ticks of the axis are used as given, sorted and limited to the range.
/// Otherwise ticks are generated with [`continuous`] and the axis formatter.
pub fn generate(
    r: &mut dyn Renderer,
    axis: &Axis,
    range: &Range,
    style: &Style,
    orientation: Orientation,
) -> Result<Vec<Tick>, Error> {
    if !axis.ticks().is_empty() {
        let mut ticks: Vec<Tick> = axis
            .ticks()
            .iter()
            .filter(|t| t.value >= range.min() && t.value <= range.max())
            .cloned()
            .collect();
        ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
        return Ok(ticks);
    }
    continuous(r, range, style, axis.formatter(), orientation)
}

/// Generates ticks spaced according to the size of the labels.
///
/// The first tick is at the range min, the last at the range max.
/// The intermediate ones are spread so that each tick takes at least the size of
/// the min label plus a spacing, with values rounded up to a step that depends on
/// the magnitude of the range.
pub fn continuous(
    r: &mut dyn Renderer,
    range: &Range,
    style: &Style,
    formatter: &dyn LabelFormatter,
    orientation: Orientation,
) -> Result<Vec<Tick>, Error> {
    let (min, max) = (range.min(), range.max());

    let min_label = formatter.format(min);
    style.write_text(r);
    let label_box = r.measure_text(&min_label)?;

    let tick_size = match orientation {
        Orientation::Vertical => label_box.height() + defaults::MIN_TICK_VERTICAL_SPACING,
        Orientation::Horizontal => label_box.width() + defaults::MIN_TICK_HORIZONTAL_SPACING,
    } as f64;

    let domain = range.domain() as f64;
    let count = ((domain - 2.0 * tick_size) / tick_size).floor();
    let count = if count.is_finite() && count > 0.0 {
        (count as usize).min(defaults::TICK_COUNT_SANITY_CHECK)
    } else {
        0
    };

    let delta = (max - min).abs();
    let step = delta / count as f64;
    let round_to = round_to_for_delta(delta) / 10.0;

    trace!(
        "ticks over [{}, {}]: {} intermediates, step {}, rounded to {}",
        min, max, count, step, round_to
    );

    let mut ticks = Vec::with_capacity(count + 1);
    ticks.push(Tick::new(min, min_label));
    for x in 1..count {
        let value = min + round_up(step * x as f64, round_to);
        let last = ticks.last().map(|t| t.value).unwrap_or(min);
        if value > last && value < max {
            ticks.push(Tick::new(value, formatter.format(value)));
        }
    }
    if max > min {
        ticks.push(Tick::new(max, formatter.format(max)));
    }
    Ok(ticks)
}

/// A tenth of the largest power of ten, up to 1e10, that is below `delta`.
/// Zero when no such power exists.
pub fn round_to_for_delta(delta: f64) -> f64 {
    let mut cursor = 1e10;
    while cursor > 0.0 {
        if delta > cursor {
            return cursor / 10.0;
        }
        cursor /= 10.0;
    }
    0.0
}

/// Rounds `value` up to a multiple of `to`. Tiny steps leave the value as is.
pub fn round_up(value: f64, to: f64) -> f64 {
    if to < 1e-15 {
        return value;
    }
    (value / to).ceil() * to
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::PrecFormat;
    use crate::tests::{Near, Recorder, assert_near};

    fn style() -> Style {
        Style::default().with_font_size(10.0)
    }

    #[test]
    fn round_to() {
        assert_near!(abs, round_to_for_delta(4.0), 0.1);
        assert_near!(abs, round_to_for_delta(45.0), 1.0);
        assert_near!(abs, round_to_for_delta(0.5), 0.01);
        assert_eq!(round_to_for_delta(0.0), 0.0);
    }

    #[test]
    fn round_up_to_step() {
        assert_near!(abs, round_up(0.33, 0.1), 0.4);
        assert_near!(abs, round_up(1.2, 1.0), 2.0);
        assert_eq!(round_up(0.123, 0.0), 0.123);
    }

    #[test]
    fn vertical_ticks() {
        // label "1.00" is 10 px high: ticks take 30 px each
        let mut r = Recorder::new(500, 500);
        let range = Range::new(1.0, 5.0).with_domain(300);
        let ticks = continuous(
            &mut r,
            &range,
            &style(),
            &PrecFormat::default(),
            Orientation::Vertical,
        )
        .unwrap();

        // 8 intermediate slots, 7 of them drawn between min and max
        assert_eq!(ticks.len(), 9);
        assert_eq!(ticks[0].value, 1.0);
        assert_eq!(ticks[0].label, "1.00");
        assert_eq!(ticks[8].value, 5.0);
        assert_eq!(ticks[8].label, "5.00");
        assert_near!(abs, ticks[1].value, 1.5);
        assert_eq!(ticks[1].label, "1.50");
        for w in ticks.windows(2) {
            assert!(w[0].value < w[1].value);
        }
    }

    #[test]
    fn horizontal_ticks_use_label_width() {
        // label "1.00" is 24 px wide: ticks take 44 px each
        let mut r = Recorder::new(500, 500);
        let range = Range::new(1.0, 3.0).with_domain(220);
        let ticks = continuous(
            &mut r,
            &range,
            &style(),
            &PrecFormat::default(),
            Orientation::Horizontal,
        )
        .unwrap();
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], 1.0);
        assert_near!(abs, values[1], 1.67);
        assert_near!(abs, values[2], 2.34);
        assert_eq!(values[3], 3.0);
    }

    #[test]
    fn small_domain_keeps_bounds() {
        let mut r = Recorder::new(10, 10);
        let range = Range::new(0.0, 2.0).with_domain(20);
        let ticks = continuous(
            &mut r,
            &range,
            &style(),
            &PrecFormat::default(),
            Orientation::Vertical,
        )
        .unwrap();
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 2.0]);
    }

    #[test]
    fn explicit_ticks_sorted_and_filtered() {
        let mut r = Recorder::new(10, 10);
        let axis = Axis::new().with_ticks(vec![
            Tick::new(3.0, "three"),
            Tick::new(9.0, "nine"),
            Tick::new(1.0, "one"),
        ]);
        let range = Range::new(0.0, 5.0).with_domain(100);
        let ticks = generate(&mut r, &axis, &range, &style(), Orientation::Vertical).unwrap();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["one", "three"]);
    }
}
