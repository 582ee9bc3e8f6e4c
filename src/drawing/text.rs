//! Multi-line text: wrapping to a width, measurement and placement within a box.
//!
//! All measures go through [`Renderer::measure_text`] with the text properties
//! of the style written to the renderer.
use crate::drawing::Error;
use crate::render::Renderer;
use crate::style::{TextAlign, TextVerAlign, TextWrap};
use crate::{Style, geom};

/// Splits `body` in lines that fit `width` according to the wrapping mode of `style`.
/// Without wrapping mode, the text stays on a single line.
pub fn wrap_fit(
    r: &mut dyn Renderer,
    body: &str,
    width: i32,
    style: &Style,
) -> Result<Vec<String>, Error> {
    match style.text_wrap.unwrap_or_default() {
        TextWrap::None => Ok(vec![body.to_string()]),
        TextWrap::Word => {
            style.write_text(r);
            wrap_fit_word(r, body, width)
        }
        TextWrap::Rune => {
            style.write_text(r);
            wrap_fit_rune(r, body, width)
        }
    }
}

fn text_width(r: &mut dyn Renderer, body: &str) -> Result<i32, Error> {
    Ok(r.measure_text(body)?.width())
}

fn push_line(lines: &mut Vec<String>, line: &str) {
    let line = line.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
}

/// Breaks between words. A word that overflows the width is moved to the next line.
fn wrap_fit_word(r: &mut dyn Renderer, body: &str, width: i32) -> Result<Vec<String>, Error> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut word = String::new();

    for c in body.chars() {
        if c == '\n' {
            line.push_str(&word);
            push_line(&mut lines, &line);
            line.clear();
            word.clear();
            continue;
        }

        let candidate = format!("{}{}{}", line, word, c);
        if text_width(r, &candidate)? >= width {
            push_line(&mut lines, &line);
            line = std::mem::take(&mut word);
            word.push(c);
            continue;
        }

        if c == ' ' || c == '\t' {
            line.push_str(&word);
            line.push(c);
            word.clear();
            continue;
        }
        word.push(c);
    }

    line.push_str(&word);
    push_line(&mut lines, &line);
    Ok(lines)
}

/// Breaks between any characters
fn wrap_fit_rune(r: &mut dyn Renderer, body: &str, width: i32) -> Result<Vec<String>, Error> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for c in body.chars() {
        if c == '\n' {
            lines.push(std::mem::take(&mut line));
            continue;
        }

        let candidate = format!("{}{}", line, c);
        if !line.is_empty() && text_width(r, &candidate)? >= width {
            lines.push(std::mem::take(&mut line));
        }
        line.push(c);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    Ok(lines)
}

/// Bounding box of `lines` stacked with the line spacing of `style`, anchored at the origin
pub fn measure_lines(
    r: &mut dyn Renderer,
    lines: &[String],
    style: &Style,
) -> Result<geom::Rect, Error> {
    style.write_text(r);
    let spacing = style.line_spacing();

    let mut width = 0;
    let mut height = 0;
    for (i, line) in lines.iter().enumerate() {
        let bx = r.measure_text(line)?;
        width = width.max(bx.width());
        height += bx.height();
        if i + 1 < lines.len() {
            height += spacing;
        }
    }
    Ok(geom::Rect::from_xywh(0, 0, width, height))
}

/// Draws `body` wrapped to the width of `bx`, with the alignment of `style`
pub fn text_within(
    r: &mut dyn Renderer,
    body: &str,
    bx: &geom::Rect,
    style: &Style,
) -> Result<(), Error> {
    style.write_to_renderer(r);
    let lines = wrap_fit(r, body, bx.width(), style)?;
    let lines_box = measure_lines(r, &lines, style)?;

    let mut y = match style.text_ver_align.unwrap_or_default() {
        TextVerAlign::Top => bx.top,
        TextVerAlign::Middle => bx.top + bx.height() / 2 - lines_box.height() / 2,
        TextVerAlign::Bottom => bx.bottom - lines_box.height(),
    };

    let spacing = style.line_spacing();
    for line in &lines {
        let line_box = r.measure_text(line)?;
        let x = match style.text_align.unwrap_or_default() {
            TextAlign::Left => bx.left,
            TextAlign::Center => bx.left + (bx.width() - line_box.width()) / 2,
            TextAlign::Right => bx.right - line_box.width(),
        };
        r.text(line, x, y + line_box.height())?;
        y += line_box.height() + spacing;
    }
    Ok(())
}
