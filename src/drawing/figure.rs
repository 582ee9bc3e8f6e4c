//! Chart decoration shared by all chart types:
//! background, canvas, title, axes lines and tick labels, overlay elements.
use crate::des::Tick;
use crate::drawing::{Ctx, Error, Range, draw_box, draw_line, draw_text};
use crate::render::Renderer;
use crate::style::defaults;
use crate::{Style, geom};

impl Ctx<'_> {
    pub(super) fn background_style(&self) -> Style {
        let palette = self.palette();
        self.frame.background().inherit_from(&Style {
            fill_color: Some(palette.background()),
            stroke_color: Some(palette.background_stroke()),
            stroke_width: Some(defaults::STROKE_WIDTH),
            ..Default::default()
        })
    }

    pub(super) fn canvas_style(&self) -> Style {
        let palette = self.palette();
        self.frame.canvas().inherit_from(&Style {
            fill_color: Some(palette.canvas()),
            stroke_color: Some(palette.canvas_stroke()),
            stroke_width: Some(defaults::CANVAS_STROKE_WIDTH),
            ..Default::default()
        })
    }

    pub(super) fn draw_background(&self, r: &mut dyn Renderer) {
        let rect = geom::Rect::from_size(self.frame.size());
        draw_box(r, &rect, &self.background_style());
    }

    pub(super) fn draw_canvas(&self, r: &mut dyn Renderer, canvas: &geom::Rect) {
        draw_box(r, canvas, &self.canvas_style());
    }

    /// Draws the title centered at the top of the chart.
    /// Nothing is drawn without title or with a hidden title style.
    pub(super) fn draw_title(&self, r: &mut dyn Renderer) -> Result<(), Error> {
        let title = self.frame.title();
        let style = self.frame.title_style();
        if title.is_empty() || style.show == Some(false) {
            return Ok(());
        }

        let font = style.font.as_ref().unwrap_or(&self.font);
        r.set_font(font);
        r.set_font_color(style.font_color.unwrap_or(self.palette().text()));
        r.set_font_size(
            style
                .font_size
                .unwrap_or(defaults::title_font_size(self.frame.size())),
        );

        let bx = r.measure_text(title)?;
        let x = self.frame.width() as i32 / 2 - bx.width() / 2;
        let y = style.padding.top.unwrap_or(defaults::TITLE_TOP) + bx.height();
        r.text(title, x, y)?;
        Ok(())
    }

    /// Draws the overlay elements over the final canvas
    pub(super) fn draw_elements(
        &self,
        r: &mut dyn Renderer,
        canvas: &geom::Rect,
    ) -> Result<(), Error> {
        let style = self.elements_style();
        for element in self.frame.elements() {
            element.draw(r, canvas, &style)?;
        }
        Ok(())
    }
}

/// Draws a Y axis on the right side of the canvas, with its ticks and labels
pub(super) fn draw_y_axis(
    r: &mut dyn Renderer,
    canvas: &geom::Rect,
    range: &Range,
    ticks: &[Tick],
    style: &Style,
) -> Result<(), Error> {
    style.write_to_renderer(r);
    draw_line(r, canvas.right, canvas.top, canvas.right, canvas.bottom);
    draw_line(
        r,
        canvas.right,
        canvas.bottom,
        canvas.right + defaults::HORIZONTAL_TICK_WIDTH,
        canvas.bottom,
    );

    let tx = canvas.right + defaults::Y_AXIS_MARGIN + defaults::Y_TICK_LABEL_GAP;
    for tick in ticks {
        let ty = canvas.bottom - range.translate(tick.value);

        style.write_stroke(r);
        draw_line(
            r,
            canvas.right,
            ty,
            canvas.right + defaults::HORIZONTAL_TICK_WIDTH,
            ty,
        );

        style.write_text(r);
        let tb = r.measure_text(&tick.label)?;
        draw_text(r, &tick.label, tx, ty + tb.height() / 2, style)?;
    }
    Ok(())
}

/// Draws the X axis line along the canvas bottom, with a tick at the left end
pub(super) fn draw_x_axis_line(r: &mut dyn Renderer, canvas: &geom::Rect, style: &Style) {
    style.write_to_renderer(r);
    draw_line(r, canvas.left, canvas.bottom, canvas.right, canvas.bottom);
    draw_line(
        r,
        canvas.left,
        canvas.bottom,
        canvas.left,
        canvas.bottom + defaults::VERTICAL_TICK_HEIGHT,
    );
}

/// Draws the ticks of a continuous X axis with their labels centered below
pub(super) fn draw_x_ticks(
    r: &mut dyn Renderer,
    canvas: &geom::Rect,
    range: &Range,
    ticks: &[Tick],
    style: &Style,
) -> Result<(), Error> {
    let ty = canvas.bottom + defaults::X_AXIS_MARGIN + defaults::X_TICK_LABEL_GAP;
    for tick in ticks {
        let tx = canvas.left + range.translate(tick.value);

        style.write_stroke(r);
        draw_line(
            r,
            tx,
            canvas.bottom,
            tx,
            canvas.bottom + defaults::VERTICAL_TICK_HEIGHT,
        );

        style.write_text(r);
        let tb = r.measure_text(&tick.label)?;
        draw_text(r, &tick.label, tx - tb.width() / 2, ty, style)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::BubbleChart;
    use crate::tests::{Op, Recorder};

    fn font() -> Option<crate::text::Font> {
        crate::text::default_font().ok()
    }

    #[test]
    fn y_axis_labels() {
        let mut r = Recorder::new(400, 300);
        let canvas = geom::Rect::from_trbl(20, 300, 220, 20);
        let range = Range::new(0.0, 10.0).with_domain(canvas.height());
        let ticks = vec![Tick::new(0.0, "0.00"), Tick::new(5.0, "5.00")];
        let style = Style::default().with_font_size(10.0);
        draw_y_axis(&mut r, &canvas, &range, &ticks, &style).unwrap();
        assert_eq!(
            r.texts(),
            vec![
                ("0.00".to_string(), 315, 225),
                ("5.00".to_string(), 315, 125),
            ]
        );
        assert!(r.ops.contains(&Op::MoveTo(300, 120)));
        assert!(r.ops.contains(&Op::LineTo(305, 120)));
    }

    #[test]
    fn x_tick_labels_centered() {
        let mut r = Recorder::new(400, 300);
        let canvas = geom::Rect::from_trbl(20, 300, 220, 20);
        let range = Range::new(1.0, 3.0).with_domain(canvas.width());
        let ticks = vec![Tick::new(1.0, "1.00"), Tick::new(2.0, "2.00")];
        let style = Style::default().with_font_size(10.0);
        draw_x_ticks(&mut r, &canvas, &range, &ticks, &style).unwrap();
        assert_eq!(
            r.texts(),
            vec![
                ("1.00".to_string(), 8, 240),
                ("2.00".to_string(), 148, 240),
            ]
        );
    }

    #[test]
    fn title_centered() {
        let Some(font) = font() else {
            return;
        };
        let chart = BubbleChart::new(vec![]).with_title("Title");
        let ctx = Ctx {
            frame: chart.frame(),
            font,
        };
        let mut r = Recorder::new(1024, 400);
        ctx.draw_title(&mut r).unwrap();
        // size 12 for a 1024x400 chart: 7 px per char, 12 px high
        assert!(r.ops.contains(&Op::FontSize(12.0)));
        assert_eq!(r.texts(), vec![("Title".to_string(), 512 - 17, 22)]);
    }

    #[test]
    fn title_hidden() {
        let Some(font) = font() else {
            return;
        };
        let chart = BubbleChart::new(vec![])
            .with_title("Title")
            .with_title_style(Style::hidden());
        let ctx = Ctx {
            frame: chart.frame(),
            font,
        };
        let mut r = Recorder::new(1024, 400);
        ctx.draw_title(&mut r).unwrap();
        assert!(r.texts().is_empty());
    }
}
