//! Font handles and the process-wide default font.

use std::fmt;
use std::sync::{Arc, OnceLock};

use ttf_parser as ttf;

use crate::Error;

/// Families tried when the generic sans-serif family has no face installed
const FALLBACK_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Helvetica",
    "Arial",
];

/// A font face, sharing its data.
///
/// The face data is validated at construction, so that shaping and outlining
/// never fail on a `Font`.
#[derive(Clone)]
pub struct Font {
    data: Arc<Vec<u8>>,
    index: u32,
    family: Arc<str>,
}

impl Font {
    /// Build a font from the content of a TrueType or OpenType file.
    /// `index` selects the face in a font collection; use 0 otherwise.
    pub fn from_data(data: Vec<u8>, index: u32) -> Result<Self, Error> {
        let family = {
            let face = ttf::Face::parse(&data, index)?;
            family_name(&face).unwrap_or_else(|| String::from("unnamed"))
        };
        Ok(Font {
            data: Arc::new(data),
            index,
            family: family.into(),
        })
    }

    /// The family name of the face
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The face index in the font data
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Parse the face
    pub fn face(&self) -> Result<ttf::Face<'_>, Error> {
        Ok(ttf::Face::parse(&self.data, self.index)?)
    }

    /// Metrics of the face scaled to a pixel size
    pub fn metrics(&self, px_size: f32) -> Result<ScaledMetrics, Error> {
        Ok(ScaledMetrics::new(&self.face()?, px_size))
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family)
            .field("index", &self.index)
            .finish()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) && self.index == other.index
    }
}

fn family_name(face: &ttf::Face) -> Option<String> {
    let find = |id: u16| {
        face.names()
            .into_iter()
            .filter(|n| n.name_id == id)
            .find_map(|n| n.to_string())
    };
    find(ttf::name_id::TYPOGRAPHIC_FAMILY).or_else(|| find(ttf::name_id::FAMILY))
}

/// Vertical metrics of a face, in pixels.
/// Y goes up: `ascent` is positive and `descent` is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetrics {
    /// Font units to pixels factor
    pub scale: f32,
    /// Height of the ascender above the baseline
    pub ascent: f32,
    /// Depth of the descender, negative below the baseline
    pub descent: f32,
    /// Recommended gap between lines
    pub line_gap: f32,
}

impl ScaledMetrics {
    pub(crate) fn new(face: &ttf::Face, px_size: f32) -> Self {
        let scale = px_size / face.units_per_em() as f32;
        ScaledMetrics {
            scale,
            ascent: face.ascender() as f32 * scale,
            descent: face.descender() as f32 * scale,
            line_gap: face.line_gap() as f32 * scale,
        }
    }

    /// Height from descender to ascender
    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}

static DEFAULT_FONT: OnceLock<Result<Font, Error>> = OnceLock::new();

/// The default sans-serif font of the system.
///
/// The system font database is scanned on first call only,
/// and the result is shared by all subsequent calls.
pub fn default_font() -> Result<Font, Error> {
    DEFAULT_FONT.get_or_init(load_default_font).clone()
}

fn load_default_font() -> Result<Font, Error> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    log::debug!("Scanned {} system font faces", db.len());

    let id = select_default_face(&db).ok_or(Error::NoDefaultFont)?;
    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or(Error::NoDefaultFont)?;
    let font = Font::from_data(data, index)?;
    log::debug!("Default font: {:?}", font);
    Ok(font)
}

fn select_default_face(db: &fontdb::Database) -> Option<fontdb::ID> {
    let mut families = vec![fontdb::Family::SansSerif];
    families.extend(FALLBACK_FAMILIES.iter().map(|f| fontdb::Family::Name(*f)));
    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };
    db.query(&query).or_else(|| {
        log::warn!("No sans-serif face found, falling back to the first system face");
        db.faces().next().map(|face| face.id)
    })
}
