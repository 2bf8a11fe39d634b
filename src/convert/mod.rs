//! The conversion engine: PAGE document tree in, ALTO document string out.
//!
//! One [`Converter`] is scoped to one source document. Its style and tag
//! catalogs accumulate while the region tree is walked and are flushed into
//! the `Styles`/`Tags` elements once, at the end. Nothing survives past the
//! call that produced the serialized result, so converting documents
//! concurrently only requires one converter each.

pub mod geometry;
pub mod language;
pub mod styles;
pub mod text;

use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::alto::{AltoVersion, NodeId, XmlTree};
use crate::error::ConvertError;
use crate::page::{
    has_text, Page, PageDocument, Polygon, Region, RegionKind, TextLine, Word,
};
use geometry::{bbox, edge_margins, margins, BBox};
use styles::{LayoutTags, ParagraphStyles, TextStyles};
use text::{resolve_text_equiv, split_trailing_hyphen};

pub use text::TextEquivFallback;

/// The order in which top-level regions are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionOrder {
    /// Document order.
    #[default]
    Document,
    /// Explicit reading order first, unreferenced regions after in document
    /// order.
    ReadingOrder,
    /// Only regions referenced by the explicit reading order.
    ReadingOrderOnly,
}

impl FromStr for RegionOrder {
    type Err = ConvertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "document" => Ok(RegionOrder::Document),
            "reading-order" => Ok(RegionOrder::ReadingOrder),
            "reading-order-only" => Ok(RegionOrder::ReadingOrderOnly),
            other => Err(ConvertError::InvalidOption {
                option: "region_order",
                value: other.to_string(),
            }),
        }
    }
}

/// The order in which a region's text lines are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextLineOrder {
    #[default]
    Document,
    /// Stable sort by the explicit `@index`; lines without one sort as 0.
    Index,
}

impl FromStr for TextLineOrder {
    type Err = ConvertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "document" => Ok(TextLineOrder::Document),
            "index" => Ok(TextLineOrder::Index),
            other => Err(ConvertError::InvalidOption {
                option: "textline_order",
                value: other.to_string(),
            }),
        }
    }
}

/// Which PAGE metadata timestamp feeds `processingDateTime`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampSource {
    #[serde(rename = "Created")]
    Created,
    #[default]
    #[serde(rename = "LastChange")]
    LastChange,
    #[serde(rename = "none")]
    None,
}

impl FromStr for TimestampSource {
    type Err = ConvertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "Created" => Ok(TimestampSource::Created),
            "LastChange" => Ok(TimestampSource::LastChange),
            "none" => Ok(TimestampSource::None),
            other => Err(ConvertError::InvalidOption {
                option: "timestamp_src",
                value: other.to_string(),
            }),
        }
    }
}

/// Conversion configuration. The defaults match a faithful, checked
/// conversion to the newest schema.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Target ALTO schema revision.
    pub alto_version: AltoVersion,
    /// Fail when a line carries text but no words (data-loss prevention).
    pub check_words: bool,
    /// Fail when the page has neither Border nor PrintSpace.
    pub check_border: bool,
    /// Omit empty lines entirely instead of emitting a placeholder String.
    pub skip_empty_lines: bool,
    /// Split a trailing dash off the last word of a line into a `HYP`.
    pub trailing_dash_to_hyp: bool,
    /// Synthesize a TextLine for regions that carry text but no lines.
    pub dummy_textline: bool,
    /// Synthesize a Word for lines that carry text but no words.
    pub dummy_word: bool,
    /// `@index` of the TextEquiv alternative to select.
    pub textequiv_index: u32,
    pub textequiv_fallback_strategy: TextEquivFallback,
    pub region_order: RegionOrder,
    pub textline_order: TextLineOrder,
    pub timestamp_src: TimestampSource,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            alto_version: AltoVersion::V4_2,
            check_words: true,
            check_border: true,
            skip_empty_lines: false,
            trailing_dash_to_hyp: false,
            dummy_textline: true,
            dummy_word: true,
            textequiv_index: 0,
            textequiv_fallback_strategy: TextEquivFallback::Last,
            region_order: RegionOrder::Document,
            textline_order: TextLineOrder::Document,
            timestamp_src: TimestampSource::LastChange,
        }
    }
}

/// Parse a PAGE-XML string and convert it to an ALTO-XML string.
pub fn convert_page_str(xml: &str, opts: ConvertOptions) -> Result<String, ConvertError> {
    let doc = crate::page::from_page_xml_str(xml)?;
    Converter::new(&doc, opts)?.convert()
}

/// Read a PAGE-XML file and convert it to an ALTO-XML string.
pub fn convert_page_file(path: &Path, opts: ConvertOptions) -> Result<String, ConvertError> {
    let doc = crate::page::read_page_file(path)?;
    Converter::new(&doc, opts)?.convert()
}

/// Converts one PAGE document to one ALTO document.
pub struct Converter<'a> {
    doc: &'a PageDocument,
    opts: ConvertOptions,
    version: AltoVersion,
    tree: XmlTree,
    description: NodeId,
    styles: NodeId,
    tags: Option<NodeId>,
    page: NodeId,
    print_space: NodeId,
    print_space_bbox: BBox,
    /// Containment check order: Left, Right, Top, Bottom.
    margin_boxes: Vec<(NodeId, BBox)>,
    text_styles: TextStyles,
    para_styles: ParagraphStyles,
    layout_tags: LayoutTags,
}

impl<'a> Converter<'a> {
    /// Runs the precondition checks and builds the output skeleton (root,
    /// description, catalogs, page, print space and margins).
    pub fn new(doc: &'a PageDocument, opts: ConvertOptions) -> Result<Self, ConvertError> {
        if opts.check_words {
            check_words(doc)?;
        }
        if opts.check_border && doc.page.border.is_none() && doc.page.print_space.is_none() {
            return Err(ConvertError::BorderMissing);
        }

        let version = opts.alto_version;
        let mut tree = XmlTree::new("alto");
        let root = tree.root();
        tree.set_attr(root, "xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance");
        tree.set_attr(root, "xmlns", version.namespace());
        tree.set_attr(
            root,
            "xsi:schemaLocation",
            format!("{} {}", version.namespace(), version.xsd_url()),
        );
        if version.has_schema_version_attribute() {
            tree.set_attr(root, "SCHEMAVERSION", version.as_str());
        }

        let description = tree.add_element(root, "Description");
        let styles = tree.add_element(root, "Styles");
        let tags = version
            .has_tags_catalog()
            .then(|| tree.add_element(root, "Tags"));
        let layout = tree.add_element(root, "Layout");

        let page = tree.add_element(layout, "Page");
        tree.set_attr(page, "ID", doc.pcgts_id.as_deref().unwrap_or("page0"));
        tree.set_attr(page, "PHYSICAL_IMG_NR", 0);
        if let Some(page_type) = &doc.page.page_type {
            tree.set_attr(page, "PAGECLASS", page_type);
        }
        tree.set_attr(page, "WIDTH", doc.page.image_width);
        tree.set_attr(page, "HEIGHT", doc.page.image_height);

        let (print_space, print_space_bbox, margin_boxes) =
            convert_border(&mut tree, page, version, &doc.page);

        Ok(Self {
            doc,
            opts,
            version,
            tree,
            description,
            styles,
            tags,
            page,
            print_space,
            print_space_bbox,
            margin_boxes,
            text_styles: TextStyles::new(version),
            para_styles: ParagraphStyles::new(),
            layout_tags: LayoutTags::new(),
        })
    }

    /// Runs the full conversion and serializes the result.
    pub fn convert(mut self) -> Result<String, ConvertError> {
        self.convert_metadata();
        self.convert_text()?;
        self.convert_reading_order();
        self.flush_styles();
        Ok(self.tree.to_xml_string())
    }

    fn convert_metadata(&mut self) {
        let unit = self.tree.add_element(self.description, "MeasurementUnit");
        self.tree.add_text(unit, "pixel");
        let source_info = self
            .tree
            .add_element(self.description, "sourceImageInformation");
        let filename = self.tree.add_element(source_info, "fileName");
        self.tree.add_text(filename, &self.doc.page.image_filename);

        let Some(metadata) = &self.doc.metadata else {
            return;
        };
        let timestamp = match self.opts.timestamp_src {
            TimestampSource::Created => metadata.created.as_deref(),
            TimestampSource::LastChange => metadata.last_change.as_deref(),
            TimestampSource::None => None,
        };

        for (idx, step) in metadata.steps.iter().enumerate() {
            let step_el = if self.version.has_processing_element() {
                self.tree.add_element(self.description, "Processing")
            } else {
                let wrapper = self.tree.add_element(self.description, "OCRProcessing");
                self.tree.add_element(wrapper, "ocrProcessingStep")
            };
            self.tree
                .set_attr(step_el, "ID", format!("{}-{idx}", step.value));

            let step_description = self.tree.add_element(step_el, "processingStepDescription");
            self.tree.add_text(step_description, &step.name);

            if !step.labels.is_empty() {
                let settings = self.tree.add_element(step_el, "processingStepSettings");
                let mut map = serde_json::Map::new();
                for (key, value) in &step.labels {
                    map.insert(key.clone(), serde_json::Value::String(value.clone()));
                }
                self.tree
                    .add_text(settings, &serde_json::Value::Object(map).to_string());
            }
            if let Some(timestamp) = timestamp {
                let date_time = self.tree.add_element(step_el, "processingDateTime");
                self.tree.add_text(date_time, timestamp);
            }
            let software = self.tree.add_element(step_el, "processingSoftware");
            let software_name = self.tree.add_element(software, "softwareName");
            self.tree.add_text(software_name, &step.value);
        }
    }

    /// Walks the top-level regions in the configured order.
    fn convert_text(&mut self) -> Result<(), ConvertError> {
        for region in self.ordered_regions() {
            let block_name = block_element(region.kind).ok_or_else(|| {
                ConvertError::UnmappedRegionKind {
                    region_id: region.id.clone(),
                    kind: region.kind.as_str().to_string(),
                }
            })?;

            let region_bbox = bbox(&region.coords);
            let parent = self.assign_parent(&region_bbox, &region.id);

            let el = self.tree.add_element(parent, block_name);
            self.tree.set_attr(el, "ID", &region.id);
            set_xywh(&mut self.tree, el, &region_bbox);
            if self.version.has_shape_element() {
                set_shape(&mut self.tree, el, &region.coords);
            }
            if self.version.has_lang_attribute() {
                self.set_lang(el, region.effective_language(), "LANG");
            }
            self.text_styles
                .apply(&mut self.tree, el, region.text_style.as_ref());
            self.para_styles
                .apply(&mut self.tree, el, region.align.as_deref());
            if self.version.has_tags_catalog() {
                self.layout_tags
                    .apply(&mut self.tree, el, block_name, region.region_type.as_deref());
            }

            match region.kind {
                RegionKind::Text => self.convert_textlines(el, region)?,
                RegionKind::Table => self.convert_table(el, region)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn ordered_regions(&self) -> Vec<&'a Region> {
        let regions = &self.doc.page.regions;
        let order = &self.doc.page.reading_order;
        match self.opts.region_order {
            RegionOrder::Document => regions.iter().collect(),
            RegionOrder::ReadingOrderOnly => order
                .iter()
                .filter_map(|id| regions.iter().find(|r| &r.id == id))
                .collect(),
            RegionOrder::ReadingOrder => {
                let mut out: Vec<&Region> = order
                    .iter()
                    .filter_map(|id| regions.iter().find(|r| &r.id == id))
                    .collect();
                out.extend(regions.iter().filter(|r| !order.contains(&r.id)));
                out
            }
        }
    }

    /// Best-effort placement: print space if contained, else the first
    /// containing margin, else print space with a warning.
    fn assign_parent(&self, region_bbox: &BBox, region_id: &str) -> NodeId {
        if self.print_space_bbox.contains(region_bbox) {
            return self.print_space;
        }
        for (el, margin_bbox) in &self.margin_boxes {
            if margin_bbox.contains(region_bbox) {
                return *el;
            }
        }
        warn!("region '{region_id}' not properly contained in PrintSpace or Margins");
        self.print_space
    }

    fn convert_textlines(&mut self, parent: NodeId, region: &Region) -> Result<(), ConvertError> {
        let dummy_line = (self.opts.dummy_textline
            && region.lines.is_empty()
            && has_text(&region.text_equivs))
        .then(|| {
            let id = format!("{}-dummy-TextLine", region.id);
            info!(
                "TextRegion '{}' has no TextLine but carries text, creating dummy TextLine '{id}'",
                region.id
            );
            TextLine {
                id,
                coords: region.coords.clone(),
                text_equivs: region.text_equivs.clone(),
                ..Default::default()
            }
        });

        let mut lines: Vec<&TextLine> = match &dummy_line {
            Some(line) => vec![line],
            None => region.lines.iter().collect(),
        };
        if self.opts.textline_order == TextLineOrder::Index {
            lines.sort_by_key(|line| line.index.unwrap_or(0));
        }

        for line in lines {
            self.convert_line(parent, line)?;
        }
        Ok(())
    }

    fn convert_line(&mut self, parent: NodeId, line: &TextLine) -> Result<(), ConvertError> {
        let is_empty = line.words.is_empty()
            && !line
                .text_equivs
                .first()
                .map_or(false, |te| !te.unicode.is_empty());
        if is_empty && self.opts.skip_empty_lines {
            debug!("skipping empty line '{}'", line.id);
            return Ok(());
        }

        let line_el = self.tree.add_element(parent, "TextLine");
        self.tree.set_attr(line_el, "ID", &line.id);
        set_xywh(&mut self.tree, line_el, &bbox(&line.coords));
        if self.version.has_shape_element() {
            set_shape(&mut self.tree, line_el, &line.coords);
        }
        if self.version.has_lang_attribute() {
            self.set_lang(line_el, line.effective_language(), "LANG");
        }
        self.text_styles
            .apply(&mut self.tree, line_el, line.text_style.as_ref());

        // ALTO requires at least one content-bearing child per line.
        if is_empty {
            let placeholder = self.tree.add_element(line_el, "String");
            self.tree
                .set_attr(placeholder, "ID", format!("{}-word0", line.id));
            self.tree.set_attr(placeholder, "CONTENT", "");
        }

        let dummy_word = (self.opts.dummy_word
            && line.words.is_empty()
            && has_text(&line.text_equivs))
        .then(|| {
            let id = format!("{}-dummy-Word", line.id);
            info!(
                "TextLine '{}' has no Word but carries text, creating dummy Word '{id}'",
                line.id
            );
            Word {
                id,
                coords: line.coords.clone(),
                text_equivs: line.text_equivs.clone(),
                ..Default::default()
            }
        });
        let words: Vec<&Word> = match &dummy_word {
            Some(word) => vec![word],
            None => line.words.iter().collect(),
        };

        let count = words.len();
        for (idx, word) in words.into_iter().enumerate() {
            let is_last = idx + 1 == count;
            let word_el = self.tree.add_element(line_el, "String");
            self.tree.set_attr(word_el, "ID", &word.id);
            set_xywh(&mut self.tree, word_el, &bbox(&word.coords));
            if self.version.has_shape_element() {
                set_shape(&mut self.tree, word_el, &word.coords);
            }
            if self.version.has_lang_attribute() {
                self.set_lang(word_el, word.effective_language(), "LANG");
            }
            self.text_styles
                .apply(&mut self.tree, word_el, word.text_style.as_ref());

            let mut content = resolve_text_equiv(
                &word.id,
                &word.text_equivs,
                self.opts.textequiv_index,
                self.opts.textequiv_fallback_strategy,
            )?
            .to_string();

            if !is_last {
                // Exactly one space marker between consecutive words.
                self.tree.add_element(line_el, "SP");
            } else if self.opts.trailing_dash_to_hyp {
                if let Some((rest, hyphen)) = split_trailing_hyphen(&content) {
                    let rest = rest.to_string();
                    let hyp = self.tree.add_element(line_el, "HYP");
                    self.tree.set_attr(hyp, "CONTENT", hyphen);
                    content = rest;
                }
            }
            self.tree.set_attr(word_el, "CONTENT", content);
        }
        Ok(())
    }

    /// Recursive table flattening: a cell with nested text regions becomes a
    /// ComposedBlock, a leaf cell an ordinary TextBlock.
    fn convert_table(&mut self, parent: NodeId, table: &'a Region) -> Result<(), ConvertError> {
        for cell in table.nested_text_regions() {
            self.convert_table_cell(parent, cell)?;
        }
        Ok(())
    }

    fn convert_table_cell(&mut self, parent: NodeId, region: &'a Region) -> Result<(), ConvertError> {
        if region.nested_text_regions().next().is_some() {
            let el = self.tree.add_element(parent, "ComposedBlock");
            self.tree.set_attr(el, "ID", &region.id);
            if self.version.has_lang_attribute() {
                self.set_lang(el, region.effective_language(), "LANG");
            }
            for child in region.nested_text_regions() {
                self.convert_table_cell(el, child)?;
            }
        } else {
            let el = self.tree.add_element(parent, "TextBlock");
            self.tree.set_attr(el, "ID", &region.id);
            // Pre-2.1 schemas spell the attribute "language".
            let attr = if self.version.has_lang_attribute() {
                "LANG"
            } else {
                "language"
            };
            self.set_lang(el, region.effective_language(), attr);
            self.convert_textlines(el, region)?;
        }
        Ok(())
    }

    /// Materializes the explicit reading order as `IDNEXT` pointers.
    fn convert_reading_order(&mut self) {
        let order = &self.doc.page.reading_order;
        for pair in order.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if let Some(el) = self.tree.find_by_attr(self.page, "ID", current) {
                self.tree.set_attr(el, "IDNEXT", next);
            } else {
                debug!("reading order references region '{current}' absent from output");
            }
        }
    }

    fn flush_styles(&mut self) {
        self.text_styles.flush(&mut self.tree, self.styles);
        self.para_styles.flush(&mut self.tree, self.styles);
        if let Some(tags) = self.tags {
            self.layout_tags.flush(&mut self.tree, tags);
        }
    }

    fn set_lang(&mut self, el: NodeId, language: Option<&str>, attr: &str) {
        if let Some(code) = language.and_then(language::to_alpha3) {
            self.tree.set_attr(el, attr, code);
        }
    }
}

/// Fixed mapping from PAGE region kind to ALTO block element.
fn block_element(kind: RegionKind) -> Option<&'static str> {
    match kind {
        RegionKind::Text => Some("TextBlock"),
        RegionKind::Separator => Some("GraphicalElement"),
        RegionKind::Graphic
        | RegionKind::LineDrawing
        | RegionKind::Chart
        | RegionKind::Image => Some("Illustration"),
        RegionKind::Table => Some("ComposedBlock"),
        RegionKind::Maths
        | RegionKind::Chem
        | RegionKind::Music
        | RegionKind::Advert
        | RegionKind::Noise
        | RegionKind::Unknown
        | RegionKind::Custom => None,
    }
}

fn set_xywh(tree: &mut XmlTree, el: NodeId, bbox: &BBox) {
    tree.set_attr(el, "HEIGHT", bbox.height());
    tree.set_attr(el, "WIDTH", bbox.width());
    tree.set_attr(el, "HPOS", bbox.min_x);
    tree.set_attr(el, "VPOS", bbox.min_y);
}

fn set_shape(tree: &mut XmlTree, el: NodeId, polygon: &Polygon) {
    let shape = tree.add_element(el, "Shape");
    let poly = tree.add_element(shape, "Polygon");
    tree.set_attr(poly, "POINTS", polygon.points_str());
}

fn set_margin(tree: &mut XmlTree, page: NodeId, name: &str, rect: &geometry::MarginRect) -> NodeId {
    let el = tree.add_element(page, name);
    tree.set_attr(el, "VPOS", rect.vpos);
    tree.set_attr(el, "HPOS", rect.hpos);
    tree.set_attr(el, "HEIGHT", rect.height);
    tree.set_attr(el, "WIDTH", rect.width);
    el
}

/// Builds the print space and the four margins. Returns the print space
/// element and bbox plus the margins in containment check order (Left,
/// Right, Top, Bottom).
fn convert_border(
    tree: &mut XmlTree,
    page_el: NodeId,
    version: AltoVersion,
    page: &Page,
) -> (NodeId, BBox, Vec<(NodeId, BBox)>) {
    let (print_space_poly, margin_rects) = match (&page.border, &page.print_space) {
        (Some(border), Some(print_space)) => {
            let rects = margins(&bbox(border), &bbox(print_space));
            (print_space.clone(), rects)
        }
        (Some(border), None) => {
            warn!("PAGE-XML has Border but no PrintSpace - Margins will be empty");
            (border.clone(), edge_margins(page.image_width, page.image_height))
        }
        (None, Some(print_space)) => {
            warn!("PAGE-XML has PrintSpace but no Border - Margins will be empty");
            (
                print_space.clone(),
                edge_margins(page.image_width, page.image_height),
            )
        }
        (None, None) => {
            warn!("PAGE-XML has neither Border nor PrintSpace - PrintSpace will fill the image");
            // Synthesize a full-page print space; the only case where
            // geometry is not derived from source polygons.
            (
                Polygon(vec![
                    (0, 0),
                    (page.image_width, 0),
                    (page.image_width, page.image_height),
                    (0, page.image_height),
                ]),
                edge_margins(page.image_width, page.image_height),
            )
        }
    };

    let synthesized = page.border.is_none() && page.print_space.is_none();
    let print_space_bbox = bbox(&print_space_poly);
    let print_space = tree.add_element(page_el, "PrintSpace");
    set_xywh(tree, print_space, &print_space_bbox);
    if version.has_shape_element() && !synthesized {
        set_shape(tree, print_space, &print_space_poly);
    }

    // Emitted in document order Top/Left/Right/Bottom, checked in the fixed
    // order Left/Right/Top/Bottom.
    let top = set_margin(tree, page_el, "TopMargin", &margin_rects.top);
    let left = set_margin(tree, page_el, "LeftMargin", &margin_rects.left);
    let right = set_margin(tree, page_el, "RightMargin", &margin_rects.right);
    let bottom = set_margin(tree, page_el, "BottomMargin", &margin_rects.bottom);
    let margin_boxes = vec![
        (left, margin_rects.left.bbox()),
        (right, margin_rects.right.bbox()),
        (top, margin_rects.top.bbox()),
        (bottom, margin_rects.bottom.bbox()),
    ];

    (print_space, print_space_bbox, margin_boxes)
}

/// Data-loss check: a line with transcription text but no words cannot be
/// converted faithfully.
fn check_words(doc: &PageDocument) -> Result<(), ConvertError> {
    fn walk(regions: &[Region]) -> Result<(), ConvertError> {
        for region in regions {
            if region.kind == RegionKind::Text {
                for line in &region.lines {
                    if has_text(&line.text_equivs) && line.words.is_empty() {
                        return Err(ConvertError::WordsMissing {
                            line_id: line.id.clone(),
                        });
                    }
                }
            }
            walk(&region.nested)?;
        }
        Ok(())
    }
    walk(&doc.page.regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_kind_mapping_is_closed() {
        assert_eq!(block_element(RegionKind::Text), Some("TextBlock"));
        assert_eq!(block_element(RegionKind::Separator), Some("GraphicalElement"));
        assert_eq!(block_element(RegionKind::Chart), Some("Illustration"));
        assert_eq!(block_element(RegionKind::Table), Some("ComposedBlock"));
        assert_eq!(block_element(RegionKind::Maths), None);
        assert_eq!(block_element(RegionKind::Custom), None);
    }

    #[test]
    fn option_enums_parse() {
        assert_eq!(
            "reading-order-only".parse::<RegionOrder>().unwrap(),
            RegionOrder::ReadingOrderOnly
        );
        assert_eq!("index".parse::<TextLineOrder>().unwrap(), TextLineOrder::Index);
        assert_eq!(
            "none".parse::<TimestampSource>().unwrap(),
            TimestampSource::None
        );
        assert!("backwards".parse::<RegionOrder>().is_err());
    }

    #[test]
    fn default_options_match_documented_defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.alto_version, AltoVersion::V4_2);
        assert!(opts.check_words);
        assert!(opts.dummy_textline);
        assert!(!opts.skip_empty_lines);
        assert_eq!(opts.textequiv_fallback_strategy, TextEquivFallback::Last);
    }
}
