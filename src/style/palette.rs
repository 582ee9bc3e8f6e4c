/*!
 * Color palettes: role colors of the chart elements and series colors.
 *
 * Series colors are picked by the draw order index of a mark with
 * [`series_slot`], which wraps around the palette.
 */
use crate::ColorU8;
use crate::color;

/// A source of chart colors
pub trait ColorPalette: std::fmt::Debug {
    /// Fill of the whole chart
    fn background(&self) -> ColorU8;
    /// Outline of the whole chart
    fn background_stroke(&self) -> ColorU8;
    /// Fill of the plotting area
    fn canvas(&self) -> ColorU8;
    /// Outline of the plotting area
    fn canvas_stroke(&self) -> ColorU8;
    /// Axis lines and tick marks
    fn axis_stroke(&self) -> ColorU8;
    /// Title, tick labels and mark labels
    fn text(&self) -> ColorU8;
    /// The series colors, in order
    fn series(&self) -> &[ColorU8];

    /// The color of the mark drawn at `index`
    fn series_color(&self, index: usize) -> ColorU8 {
        let series = self.series();
        if series.is_empty() {
            return color::BLACK;
        }
        series[series_slot(index, series.len())]
    }
}

/// Position of the series `index` within a palette of `len` colors.
/// Returns zero for an empty palette.
pub const fn series_slot(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index % len }
}

/// White
pub const WHITE: ColorU8 = color::WHITE;
/// Blue, first color of the default series
pub const BLUE: ColorU8 = ColorU8::from_html(b"#0074d9");
/// Cyan
pub const CYAN: ColorU8 = ColorU8::from_html(b"#00d9d2");
/// Green
pub const GREEN: ColorU8 = ColorU8::from_html(b"#00d965");
/// Red
pub const RED: ColorU8 = ColorU8::from_html(b"#d90074");
/// Orange
pub const ORANGE: ColorU8 = ColorU8::from_html(b"#d96500");
/// Yellow
pub const YELLOW: ColorU8 = ColorU8::from_html(b"#d9d200");
/// Dark gray used for text and axes
pub const DARK: ColorU8 = ColorU8::from_html(b"#333333");
/// Light gray
pub const LIGHT_GRAY: ColorU8 = ColorU8::from_html(b"#efefef");

/// Alternate blue, first color of the alternate series
pub const ALT_BLUE: ColorU8 = ColorU8::from_html(b"#6ac3cb");
/// Alternate green
pub const ALT_GREEN: ColorU8 = ColorU8::from_html(b"#2abe89");
/// Alternate gray
pub const ALT_GRAY: ColorU8 = ColorU8::from_html(b"#6e808b");
/// Alternate yellow
pub const ALT_YELLOW: ColorU8 = ColorU8::from_html(b"#f0ae5a");
/// Alternate light gray
pub const ALT_LIGHT_GRAY: ColorU8 = ColorU8::from_html(b"#bbbebf");

const DEFAULT_SERIES: &[ColorU8] = &[BLUE, GREEN, RED, CYAN, ORANGE];
const ALTERNATE_SERIES: &[ColorU8] = &[
    ALT_BLUE,
    ALT_GREEN,
    ALT_GRAY,
    ALT_YELLOW,
    BLUE,
    GREEN,
    RED,
    CYAN,
    ORANGE,
];

/// Role colors of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    /// Fill of the whole chart
    pub background: ColorU8,
    /// Outline of the whole chart
    pub background_stroke: ColorU8,
    /// Fill of the plotting area
    pub canvas: ColorU8,
    /// Outline of the plotting area
    pub canvas_stroke: ColorU8,
    /// Axis lines and tick marks
    pub axis_stroke: ColorU8,
    /// Text
    pub text: ColorU8,
}

impl Roles {
    /// Roles of the default palette
    pub const DEFAULT: Roles = Roles {
        background: WHITE,
        background_stroke: WHITE,
        canvas: WHITE,
        canvas_stroke: WHITE,
        axis_stroke: DARK,
        text: DARK,
    };

    /// Roles of the alternate palette
    pub const ALTERNATE: Roles = Roles {
        background: WHITE,
        background_stroke: WHITE,
        canvas: WHITE,
        canvas_stroke: LIGHT_GRAY,
        axis_stroke: DARK,
        text: DARK,
    };
}

/// Built-in palettes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Builtin {
    /// White surfaces and saturated series colors
    Default,
    /// Light gray canvas outline and softer leading series colors
    #[default]
    Alternate,
}

impl Builtin {
    /// The role colors of this palette
    pub const fn roles(&self) -> &'static Roles {
        match self {
            Builtin::Default => &Roles::DEFAULT,
            Builtin::Alternate => &Roles::ALTERNATE,
        }
    }
}

impl ColorPalette for Builtin {
    fn background(&self) -> ColorU8 {
        self.roles().background
    }
    fn background_stroke(&self) -> ColorU8 {
        self.roles().background_stroke
    }
    fn canvas(&self) -> ColorU8 {
        self.roles().canvas
    }
    fn canvas_stroke(&self) -> ColorU8 {
        self.roles().canvas_stroke
    }
    fn axis_stroke(&self) -> ColorU8 {
        self.roles().axis_stroke
    }
    fn text(&self) -> ColorU8 {
        self.roles().text
    }
    fn series(&self) -> &[ColorU8] {
        match self {
            Builtin::Default => DEFAULT_SERIES,
            Builtin::Alternate => ALTERNATE_SERIES,
        }
    }
}

/// A custom palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custom {
    /// Role colors
    pub roles: Roles,
    /// Series colors. An empty list draws every series in black.
    pub series: Vec<ColorU8>,
}

impl Custom {
    /// A palette with the roles of `base` and the given series colors
    pub fn with_series(base: Builtin, series: Vec<ColorU8>) -> Self {
        Custom {
            roles: *base.roles(),
            series,
        }
    }
}

impl ColorPalette for Custom {
    fn background(&self) -> ColorU8 {
        self.roles.background
    }
    fn background_stroke(&self) -> ColorU8 {
        self.roles.background_stroke
    }
    fn canvas(&self) -> ColorU8 {
        self.roles.canvas
    }
    fn canvas_stroke(&self) -> ColorU8 {
        self.roles.canvas_stroke
    }
    fn axis_stroke(&self) -> ColorU8 {
        self.roles.axis_stroke
    }
    fn text(&self) -> ColorU8 {
        self.roles.text
    }
    fn series(&self) -> &[ColorU8] {
        &self.series
    }
}
