//! Style definitions for strokes, fills and text, and the color palettes.
//!
//! A [`Style`] is a set of optional properties. Any unset property of a specific
//! style falls back to the property of a more general style with [`merge`].
pub(crate) mod defaults;
pub mod palette;

pub use palette::ColorPalette;

use crate::render::Renderer;
use crate::{ColorU8, color, geom, text};

/// Horizontal text alignment within a box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Align on the left side
    #[default]
    Left,
    /// Center horizontally
    Center,
    /// Align on the right side
    Right,
}

/// Vertical text alignment within a box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextVerAlign {
    /// Text goes down from the top side
    #[default]
    Top,
    /// Center vertically
    Middle,
    /// Text ends at the bottom side
    Bottom,
}

/// How text is wrapped to fit a width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextWrap {
    /// No wrapping, text stays on its lines
    #[default]
    None,
    /// Break lines between words
    Word,
    /// Break lines between any characters
    Rune,
}

/// Optional padding on the four sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    /// Top padding
    pub top: Option<i32>,
    /// Right padding
    pub right: Option<i32>,
    /// Bottom padding
    pub bottom: Option<i32>,
    /// Left padding
    pub left: Option<i32>,
}

impl Insets {
    /// Set the top padding
    pub fn with_top(self, top: i32) -> Self {
        Self {
            top: Some(top),
            ..self
        }
    }

    /// Set the right padding
    pub fn with_right(self, right: i32) -> Self {
        Self {
            right: Some(right),
            ..self
        }
    }

    /// Set the bottom padding
    pub fn with_bottom(self, bottom: i32) -> Self {
        Self {
            bottom: Some(bottom),
            ..self
        }
    }

    /// Set the left padding
    pub fn with_left(self, left: i32) -> Self {
        Self {
            left: Some(left),
            ..self
        }
    }

    /// Side by side fallback on `defaults`
    pub fn merge(&self, defaults: &Insets) -> Insets {
        Insets {
            top: self.top.or(defaults.top),
            right: self.right.or(defaults.right),
            bottom: self.bottom.or(defaults.bottom),
            left: self.left.or(defaults.left),
        }
    }

    /// Resolve the unset sides with `defaults`
    pub fn resolve(&self, defaults: geom::Padding) -> geom::Padding {
        geom::Padding {
            top: self.top.unwrap_or(defaults.top),
            right: self.right.unwrap_or(defaults.right),
            bottom: self.bottom.unwrap_or(defaults.bottom),
            left: self.left.unwrap_or(defaults.left),
        }
    }
}

/// Visual properties of a chart element.
///
/// All properties are optional: unset properties are taken from the default
/// style of the element with [`Style::inherit_from`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Whether the element is drawn. Axes are hidden unless this is `Some(true)`.
    pub show: Option<bool>,
    /// Line color
    pub stroke_color: Option<ColorU8>,
    /// Line width
    pub stroke_width: Option<f32>,
    /// Fill color
    pub fill_color: Option<ColorU8>,
    /// Text font
    pub font: Option<text::Font>,
    /// Text size in points
    pub font_size: Option<f32>,
    /// Text color
    pub font_color: Option<ColorU8>,
    /// Horizontal text alignment
    pub text_align: Option<TextAlign>,
    /// Vertical text alignment
    pub text_ver_align: Option<TextVerAlign>,
    /// Text wrapping
    pub text_wrap: Option<TextWrap>,
    /// Spacing between text lines in pixels
    pub line_spacing: Option<i32>,
    /// Padding around the element
    pub padding: Insets,
}

impl Style {
    /// A style that only sets the element visible
    pub fn shown() -> Self {
        Style {
            show: Some(true),
            ..Default::default()
        }
    }

    /// A style that only sets the element hidden
    pub fn hidden() -> Self {
        Style {
            show: Some(false),
            ..Default::default()
        }
    }

    /// Set the visibility
    pub fn with_show(self, show: bool) -> Self {
        Self {
            show: Some(show),
            ..self
        }
    }

    /// Set the line color
    pub fn with_stroke_color(self, color: ColorU8) -> Self {
        Self {
            stroke_color: Some(color),
            ..self
        }
    }

    /// Set the line width
    pub fn with_stroke_width(self, width: f32) -> Self {
        Self {
            stroke_width: Some(width),
            ..self
        }
    }

    /// Set the fill color
    pub fn with_fill_color(self, color: ColorU8) -> Self {
        Self {
            fill_color: Some(color),
            ..self
        }
    }

    /// Set the font
    pub fn with_font(self, font: text::Font) -> Self {
        Self {
            font: Some(font),
            ..self
        }
    }

    /// Set the font size in points
    pub fn with_font_size(self, size: f32) -> Self {
        Self {
            font_size: Some(size),
            ..self
        }
    }

    /// Set the text color
    pub fn with_font_color(self, color: ColorU8) -> Self {
        Self {
            font_color: Some(color),
            ..self
        }
    }

    /// Set the horizontal text alignment
    pub fn with_text_align(self, align: TextAlign) -> Self {
        Self {
            text_align: Some(align),
            ..self
        }
    }

    /// Set the vertical text alignment
    pub fn with_text_ver_align(self, align: TextVerAlign) -> Self {
        Self {
            text_ver_align: Some(align),
            ..self
        }
    }

    /// Set the text wrapping
    pub fn with_text_wrap(self, wrap: TextWrap) -> Self {
        Self {
            text_wrap: Some(wrap),
            ..self
        }
    }

    /// Set the spacing between text lines
    pub fn with_line_spacing(self, spacing: i32) -> Self {
        Self {
            line_spacing: Some(spacing),
            ..self
        }
    }

    /// Set the padding
    pub fn with_padding(self, padding: Insets) -> Self {
        Self { padding, ..self }
    }

    /// A style with the properties of `self`, falling back on `defaults` for unset ones
    pub fn inherit_from(&self, defaults: &Style) -> Style {
        merge(self, defaults)
    }

    /// Whether the element is explicitly shown
    pub fn is_shown(&self) -> bool {
        self.show.unwrap_or(false)
    }

    /// The vertical spacing between text lines
    pub fn line_spacing(&self) -> i32 {
        self.line_spacing.unwrap_or(defaults::LINE_SPACING)
    }

    /// Write the stroke properties to the renderer
    pub fn write_stroke(&self, r: &mut dyn Renderer) {
        r.set_stroke_color(self.stroke_color.unwrap_or(color::TRANSPARENT));
        r.set_stroke_width(self.stroke_width.unwrap_or(0.0));
    }

    /// Write the fill properties to the renderer
    pub fn write_fill(&self, r: &mut dyn Renderer) {
        r.set_fill_color(self.fill_color.unwrap_or(color::TRANSPARENT));
    }

    /// Write the text properties to the renderer.
    /// The font of the renderer is left untouched when the style has none.
    pub fn write_text(&self, r: &mut dyn Renderer) {
        if let Some(font) = self.font.as_ref() {
            r.set_font(font);
        }
        r.set_font_color(self.font_color.unwrap_or(color::TRANSPARENT));
        r.set_font_size(self.font_size.unwrap_or(defaults::FONT_SIZE));
    }

    /// Write all properties to the renderer
    pub fn write_to_renderer(&self, r: &mut dyn Renderer) {
        self.write_stroke(r);
        self.write_fill(r);
        self.write_text(r);
    }
}

/// Field by field merge: every property set in `specific` is kept,
/// the unset ones are taken from `defaults`.
pub fn merge(specific: &Style, defaults: &Style) -> Style {
    Style {
        show: specific.show.or(defaults.show),
        stroke_color: specific.stroke_color.or(defaults.stroke_color),
        stroke_width: specific.stroke_width.or(defaults.stroke_width),
        fill_color: specific.fill_color.or(defaults.fill_color),
        font: specific.font.clone().or_else(|| defaults.font.clone()),
        font_size: specific.font_size.or(defaults.font_size),
        font_color: specific.font_color.or(defaults.font_color),
        text_align: specific.text_align.or(defaults.text_align),
        text_ver_align: specific.text_ver_align.or(defaults.text_ver_align),
        text_wrap: specific.text_wrap.or(defaults.text_wrap),
        line_spacing: specific.line_spacing.or(defaults.line_spacing),
        padding: specific.padding.merge(&defaults.padding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Op, Recorder};

    #[test]
    fn merge_keeps_specific_fields() {
        let red = ColorU8::from_rgb(255, 0, 0);
        let blue = ColorU8::from_rgb(0, 0, 255);
        let specific = Style::default().with_fill_color(red);
        let defaults = Style::default()
            .with_fill_color(blue)
            .with_stroke_color(blue)
            .with_stroke_width(3.0);

        let merged = merge(&specific, &defaults);
        assert_eq!(merged.fill_color, Some(red));
        assert_eq!(merged.stroke_color, Some(blue));
        assert_eq!(merged.stroke_width, Some(3.0));
        assert_eq!(merged.font_size, None);
    }

    #[test]
    fn merge_padding_per_side() {
        let specific = Style::default().with_padding(Insets::default().with_top(40));
        let defaults =
            Style::default().with_padding(Insets::default().with_top(20).with_left(20));
        let merged = specific.inherit_from(&defaults);
        assert_eq!(merged.padding.top, Some(40));
        assert_eq!(merged.padding.left, Some(20));
        assert_eq!(merged.padding.right, None);

        let pad = merged.padding.resolve(geom::Padding::even(7));
        assert_eq!(pad, geom::Padding::from_trbl(40, 7, 7, 20));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let style = Style::shown()
            .with_stroke_width(2.0)
            .with_text_wrap(TextWrap::Word);
        assert_eq!(merge(&style, &Style::default()), style);
        assert_eq!(merge(&Style::default(), &style), style);
    }

    #[test]
    fn write_text_uses_default_size() {
        let mut r = Recorder::new(10, 10);
        Style::default().write_text(&mut r);
        assert!(r.ops.contains(&Op::FontSize(defaults::FONT_SIZE)));
        assert!(r.ops.contains(&Op::FontColor(color::TRANSPARENT)));
    }
}
