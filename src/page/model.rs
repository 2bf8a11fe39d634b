//! In-memory model of a parsed PAGE-XML document.
//!
//! This is the read-only source side of the conversion. The reader fills it
//! in; the converter only ever borrows it. Geometry stays as the raw polygon
//! point sequence from `Coords/@points`; bounding boxes are derived later by
//! [`crate::convert::geometry`].

/// A closed polygon as an ordered sequence of (x, y) pixel coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon(pub Vec<(i64, i64)>);

impl Polygon {
    /// Renders the points in PAGE/ALTO `POINTS` syntax: `"x1,y1 x2,y2 ..."`.
    pub fn points_str(&self) -> String {
        self.0
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One parsed PAGE-XML document (`PcGts` root).
#[derive(Clone, Debug, Default)]
pub struct PageDocument {
    pub pcgts_id: Option<String>,
    pub metadata: Option<Metadata>,
    pub page: Page,
}

/// The single `Page` of a PAGE document.
#[derive(Clone, Debug, Default)]
pub struct Page {
    pub image_filename: String,
    pub image_width: i64,
    pub image_height: i64,
    /// `Page/@type`, e.g. "content" or "cover".
    pub page_type: Option<String>,
    pub border: Option<Polygon>,
    pub print_space: Option<Polygon>,
    /// Region ids referenced by `ReadingOrder`, sorted by `@index`.
    pub reading_order: Vec<String>,
    pub regions: Vec<Region>,
}

/// The closed set of PAGE region kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Text,
    Table,
    Image,
    Graphic,
    LineDrawing,
    Chart,
    Separator,
    Maths,
    Chem,
    Music,
    Advert,
    Noise,
    Unknown,
    Custom,
}

impl RegionKind {
    /// The PAGE element name prefix, i.e. `TextRegion` without the suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Text => "Text",
            RegionKind::Table => "Table",
            RegionKind::Image => "Image",
            RegionKind::Graphic => "Graphic",
            RegionKind::LineDrawing => "LineDrawing",
            RegionKind::Chart => "Chart",
            RegionKind::Separator => "Separator",
            RegionKind::Maths => "Maths",
            RegionKind::Chem => "Chem",
            RegionKind::Music => "Music",
            RegionKind::Advert => "Advert",
            RegionKind::Noise => "Noise",
            RegionKind::Unknown => "Unknown",
            RegionKind::Custom => "Custom",
        }
    }
}

/// A layout region. Table regions nest further regions; text regions carry
/// lines. Everything else is geometry plus attributes.
#[derive(Clone, Debug)]
pub struct Region {
    pub id: String,
    pub kind: RegionKind,
    pub coords: Polygon,
    pub primary_language: Option<String>,
    pub secondary_language: Option<String>,
    pub language: Option<String>,
    /// `@type`, e.g. "paragraph" or "heading" on text regions.
    pub region_type: Option<String>,
    /// `@align` on text regions: left | right | centre | justify.
    pub align: Option<String>,
    pub text_style: Option<TextStyle>,
    pub text_equivs: Vec<TextEquiv>,
    pub lines: Vec<TextLine>,
    /// Nested regions (tables).
    pub nested: Vec<Region>,
}

impl Region {
    /// First non-empty of primary, secondary, generic language.
    pub fn effective_language(&self) -> Option<&str> {
        first_language(&[
            self.primary_language.as_deref(),
            self.secondary_language.as_deref(),
            self.language.as_deref(),
        ])
    }

    /// Nested child regions of kind Text (table cells).
    pub fn nested_text_regions(&self) -> impl Iterator<Item = &Region> {
        self.nested.iter().filter(|r| r.kind == RegionKind::Text)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextLine {
    pub id: String,
    pub coords: Polygon,
    /// `@index`, used by the `textline_order=index` option.
    pub index: Option<i64>,
    pub primary_language: Option<String>,
    pub language: Option<String>,
    pub text_style: Option<TextStyle>,
    pub text_equivs: Vec<TextEquiv>,
    pub words: Vec<Word>,
}

impl TextLine {
    pub fn effective_language(&self) -> Option<&str> {
        first_language(&[self.primary_language.as_deref(), self.language.as_deref()])
    }
}

#[derive(Clone, Debug, Default)]
pub struct Word {
    pub id: String,
    pub coords: Polygon,
    pub language: Option<String>,
    pub text_style: Option<TextStyle>,
    pub text_equivs: Vec<TextEquiv>,
}

impl Word {
    pub fn effective_language(&self) -> Option<&str> {
        first_language(&[self.language.as_deref()])
    }
}

/// One transcription alternative. The `@index` is explicit and not
/// necessarily sequential across alternatives.
#[derive(Clone, Debug, Default)]
pub struct TextEquiv {
    pub index: Option<u32>,
    pub unicode: String,
}

/// True if any alternative carries non-empty text.
pub fn has_text(equivs: &[TextEquiv]) -> bool {
    equivs.iter().any(|te| !te.unicode.is_empty())
}

/// Formatting attributes of a PAGE `TextStyle` element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub serif: bool,
    pub monospace: bool,
    pub font_size: Option<f32>,
    /// Named color from the PAGE enumeration ("red", "turquoise", ...).
    pub text_colour: Option<String>,
    /// Packed as red + 256*green + 65536*blue.
    pub text_colour_rgb: Option<u32>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub subscript: bool,
    pub superscript: bool,
    pub strikethrough: bool,
    pub small_caps: bool,
}

/// Document metadata: timestamps plus processing steps.
#[derive(Clone, Debug, Default)]
pub struct Metadata {
    pub created: Option<String>,
    pub last_change: Option<String>,
    pub steps: Vec<ProcessingStep>,
}

/// A `MetadataItem` of type "processingStep".
#[derive(Clone, Debug, Default)]
pub struct ProcessingStep {
    /// `@value`: the software that performed the step.
    pub value: String,
    /// `@name`: a human-readable description of the step.
    pub name: String,
    /// `Labels/Label` key/value pairs (parameter settings).
    pub labels: Vec<(String, String)>,
}

fn first_language<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|lang| !lang.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_points_roundtrip_syntax() {
        let poly = Polygon(vec![(0, 0), (100, 0), (100, 50), (0, 50)]);
        assert_eq!(poly.points_str(), "0,0 100,0 100,50 0,50");
    }

    #[test]
    fn effective_language_priority() {
        let mut region = Region {
            id: "r1".into(),
            kind: RegionKind::Text,
            coords: Polygon::default(),
            primary_language: None,
            secondary_language: Some("Esperanto".into()),
            language: Some("German".into()),
            region_type: None,
            align: None,
            text_style: None,
            text_equivs: vec![],
            lines: vec![],
            nested: vec![],
        };
        assert_eq!(region.effective_language(), Some("Esperanto"));
        region.primary_language = Some("Volapük".into());
        assert_eq!(region.effective_language(), Some("Volapük"));
    }

    #[test]
    fn has_text_ignores_empty_alternatives() {
        let equivs = vec![
            TextEquiv {
                index: Some(0),
                unicode: String::new(),
            },
            TextEquiv {
                index: Some(1),
                unicode: "foo".into(),
            },
        ];
        assert!(has_text(&equivs));
        assert!(!has_text(&equivs[..1]));
    }
}
