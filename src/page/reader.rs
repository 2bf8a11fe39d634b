//! PAGE-XML reader.
//!
//! Parses a PAGE-XML document into the [`super::model`] tree. The parser is
//! namespace-agnostic (matches on local element names), so it accepts any of
//! the PAGE namespace revisions. It validates only what the converter needs:
//! required attributes, numeric values and non-empty `Coords/@points`.
//! Schema validation of the input is out of scope.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use super::model::{
    Metadata, Page, PageDocument, Polygon, ProcessingStep, Region, RegionKind, TextEquiv, TextLine,
    TextStyle, Word,
};
use crate::error::ConvertError;

/// Read a PAGE-XML file into the document model.
pub fn read_page_file(path: &Path) -> Result<PageDocument, ConvertError> {
    let xml = fs::read_to_string(path).map_err(ConvertError::Io)?;
    parse_page_xml_str(&xml, path)
}

/// Parse PAGE-XML from a string.
pub fn from_page_xml_str(xml: &str) -> Result<PageDocument, ConvertError> {
    parse_page_xml_str(xml, Path::new("<string>"))
}

fn parse_page_xml_str(xml: &str, path: &Path) -> Result<PageDocument, ConvertError> {
    let document = Document::parse(xml).map_err(|source| ConvertError::PageParse {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;

    let root = document.root_element();
    if root.tag_name().name() != "PcGts" {
        return Err(parse_err(path, "missing <PcGts> root element"));
    }

    let pcgts_id = non_empty_attr(root, "pcGtsId");

    let metadata = child_element(root, "Metadata")
        .map(|node| parse_metadata(node, path))
        .transpose()?;

    let page_node =
        child_element(root, "Page").ok_or_else(|| parse_err(path, "missing <Page> element"))?;
    let page = parse_page(page_node, path)?;

    Ok(PageDocument {
        pcgts_id,
        metadata,
        page,
    })
}

fn parse_page(node: Node<'_, '_>, path: &Path) -> Result<Page, ConvertError> {
    let image_filename = required_attr(node, "imageFilename", path, "<Page>")?.to_string();
    let image_width = parse_required_i64_attr(node, "imageWidth", path, "<Page>")?;
    let image_height = parse_required_i64_attr(node, "imageHeight", path, "<Page>")?;
    let page_type = non_empty_attr(node, "type");

    let border = child_element(node, "Border")
        .map(|n| parse_coords(n, path, "<Border>"))
        .transpose()?;
    let print_space = child_element(node, "PrintSpace")
        .map(|n| parse_coords(n, path, "<PrintSpace>"))
        .transpose()?;

    let reading_order = match child_element(node, "ReadingOrder") {
        Some(ro) => parse_reading_order(ro, path)?,
        None => Vec::new(),
    };

    let mut regions = Vec::new();
    for child in node.children().filter(|n| n.is_element()) {
        if child.tag_name().name().ends_with("Region") {
            regions.push(parse_region(child, path)?);
        }
    }

    Ok(Page {
        image_filename,
        image_width,
        image_height,
        page_type,
        border,
        print_space,
        reading_order,
        regions,
    })
}

/// Collect `RegionRefIndexed` entries (at any group nesting depth) sorted by
/// their explicit `@index`.
fn parse_reading_order(node: Node<'_, '_>, path: &Path) -> Result<Vec<String>, ConvertError> {
    let mut entries = Vec::new();
    for descendant in node.descendants().filter(|n| n.is_element()) {
        if descendant.tag_name().name() != "RegionRefIndexed" {
            continue;
        }
        let region_ref =
            required_attr(descendant, "regionRef", path, "<RegionRefIndexed>")?.to_string();
        let index = parse_required_i64_attr(descendant, "index", path, "<RegionRefIndexed>")?;
        entries.push((index, region_ref));
    }
    entries.sort_by_key(|(index, _)| *index);
    Ok(entries.into_iter().map(|(_, id)| id).collect())
}

fn parse_region(node: Node<'_, '_>, path: &Path) -> Result<Region, ConvertError> {
    let tag = node.tag_name().name();
    let kind = region_kind_from_tag(tag)
        .ok_or_else(|| parse_err(path, format!("unsupported region element <{tag}>")))?;
    let id = required_attr(node, "id", path, &format!("<{tag}>"))?.to_string();
    let context = format!("<{tag} id=\"{id}\">");
    let coords = parse_coords(node, path, &context)?;

    let mut lines = Vec::new();
    let mut nested = Vec::new();
    for child in node.children().filter(|n| n.is_element()) {
        let child_tag = child.tag_name().name();
        if child_tag == "TextLine" {
            lines.push(parse_text_line(child, path)?);
        } else if child_tag.ends_with("Region") {
            nested.push(parse_region(child, path)?);
        }
    }

    Ok(Region {
        id,
        kind,
        coords,
        primary_language: non_empty_attr(node, "primaryLanguage"),
        secondary_language: non_empty_attr(node, "secondaryLanguage"),
        language: non_empty_attr(node, "language"),
        region_type: non_empty_attr(node, "type"),
        align: non_empty_attr(node, "align"),
        text_style: parse_text_style(node),
        text_equivs: parse_text_equivs(node),
        lines,
        nested,
    })
}

fn region_kind_from_tag(tag: &str) -> Option<RegionKind> {
    let kind = match tag.strip_suffix("Region")? {
        "Text" => RegionKind::Text,
        "Table" => RegionKind::Table,
        "Image" => RegionKind::Image,
        "Graphic" => RegionKind::Graphic,
        "LineDrawing" => RegionKind::LineDrawing,
        "Chart" => RegionKind::Chart,
        "Separator" => RegionKind::Separator,
        "Maths" => RegionKind::Maths,
        "Chem" => RegionKind::Chem,
        "Music" => RegionKind::Music,
        "Advert" => RegionKind::Advert,
        "Noise" => RegionKind::Noise,
        "Unknown" => RegionKind::Unknown,
        "Custom" => RegionKind::Custom,
        _ => return None,
    };
    Some(kind)
}

fn parse_text_line(node: Node<'_, '_>, path: &Path) -> Result<TextLine, ConvertError> {
    let id = required_attr(node, "id", path, "<TextLine>")?.to_string();
    let context = format!("<TextLine id=\"{id}\">");
    let coords = parse_coords(node, path, &context)?;

    let index = node
        .attribute("index")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|raw| {
            raw.parse::<i64>().map_err(|_| {
                parse_err(
                    path,
                    format!("invalid 'index' value '{raw}' in {context}; expected integer"),
                )
            })
        })
        .transpose()?;

    let mut words = Vec::new();
    for child in node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Word")
    {
        words.push(parse_word(child, path)?);
    }

    Ok(TextLine {
        id,
        coords,
        index,
        primary_language: non_empty_attr(node, "primaryLanguage"),
        language: non_empty_attr(node, "language"),
        text_style: parse_text_style(node),
        text_equivs: parse_text_equivs(node),
        words,
    })
}

fn parse_word(node: Node<'_, '_>, path: &Path) -> Result<Word, ConvertError> {
    let id = required_attr(node, "id", path, "<Word>")?.to_string();
    let context = format!("<Word id=\"{id}\">");
    let coords = parse_coords(node, path, &context)?;

    Ok(Word {
        id,
        coords,
        language: non_empty_attr(node, "language"),
        text_style: parse_text_style(node),
        text_equivs: parse_text_equivs(node),
    })
}

fn parse_text_equivs(node: Node<'_, '_>) -> Vec<TextEquiv> {
    let mut equivs = Vec::new();
    for child in node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "TextEquiv")
    {
        let index = child
            .attribute("index")
            .map(str::trim)
            .and_then(|raw| raw.parse::<u32>().ok());
        let unicode = child_element(child, "Unicode")
            .and_then(|u| u.text())
            .unwrap_or("")
            .to_string();
        equivs.push(TextEquiv { index, unicode });
    }
    equivs
}

fn parse_text_style(node: Node<'_, '_>) -> Option<TextStyle> {
    let style_node = child_element(node, "TextStyle")?;
    Some(TextStyle {
        font_family: non_empty_attr(style_node, "fontFamily"),
        serif: bool_attr(style_node, "serif"),
        monospace: bool_attr(style_node, "monospace"),
        font_size: style_node
            .attribute("fontSize")
            .and_then(|raw| raw.trim().parse::<f32>().ok()),
        text_colour: non_empty_attr(style_node, "textColour"),
        text_colour_rgb: style_node
            .attribute("textColourRgb")
            .and_then(|raw| raw.trim().parse::<u32>().ok()),
        bold: bool_attr(style_node, "bold"),
        italic: bool_attr(style_node, "italic"),
        underlined: bool_attr(style_node, "underlined"),
        subscript: bool_attr(style_node, "subscript"),
        superscript: bool_attr(style_node, "superscript"),
        strikethrough: bool_attr(style_node, "strikethrough"),
        small_caps: bool_attr(style_node, "smallCaps"),
    })
}

fn parse_metadata(node: Node<'_, '_>, path: &Path) -> Result<Metadata, ConvertError> {
    let created = optional_child_text(node, "Created");
    let last_change = optional_child_text(node, "LastChange");

    let mut steps = Vec::new();
    for item in node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "MetadataItem")
    {
        if item.attribute("type") != Some("processingStep") {
            continue;
        }
        let value = required_attr(item, "value", path, "<MetadataItem>")?.to_string();
        let name = item.attribute("name").unwrap_or("").to_string();

        let mut labels = Vec::new();
        // Only the first Labels group carries the step settings.
        if let Some(labels_node) = child_element(item, "Labels") {
            for label in labels_node
                .children()
                .filter(|n| n.is_element() && n.tag_name().name() == "Label")
            {
                let key = label.attribute("type").unwrap_or("").to_string();
                let val = label.attribute("value").unwrap_or("").to_string();
                labels.push((key, val));
            }
        }

        steps.push(ProcessingStep {
            value,
            name,
            labels,
        });
    }

    Ok(Metadata {
        created,
        last_change,
        steps,
    })
}

/// Parse the `Coords/@points` polygon of an element.
fn parse_coords(node: Node<'_, '_>, path: &Path, context: &str) -> Result<Polygon, ConvertError> {
    let coords =
        child_element(node, "Coords").ok_or_else(|| {
            parse_err(path, format!("missing <Coords> in {context}"))
        })?;
    let points = required_attr(coords, "points", path, context)?;
    parse_points(points)
        .map(Polygon)
        .map_err(|message| parse_err(path, format!("{message} in {context}")))
}

fn parse_points(raw: &str) -> Result<Vec<(i64, i64)>, String> {
    let mut points = Vec::new();
    for pair in raw.split_whitespace() {
        let (x, y) = pair
            .split_once(',')
            .ok_or_else(|| format!("invalid point '{pair}'; expected 'x,y'"))?;
        let x = x
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid x coordinate '{x}'"))?;
        let y = y
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid y coordinate '{y}'"))?;
        points.push((x, y));
    }
    if points.is_empty() {
        return Err("empty 'points' attribute".to_string());
    }
    Ok(points)
}

fn parse_err(path: &Path, message: impl Into<String>) -> ConvertError {
    ConvertError::PageParse {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

fn optional_child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child_element(node, tag)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

fn non_empty_attr(node: Node<'_, '_>, attr: &str) -> Option<String> {
    node.attribute(attr)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

fn bool_attr(node: Node<'_, '_>, attr: &str) -> bool {
    matches!(
        node.attribute(attr).map(str::trim),
        Some("true") | Some("1")
    )
}

fn required_attr<'a>(
    node: Node<'a, '_>,
    attr: &str,
    path: &Path,
    context: &str,
) -> Result<&'a str, ConvertError> {
    node.attribute(attr)
        .ok_or_else(|| parse_err(path, format!("missing '{attr}' attribute in {context}")))
}

fn parse_required_i64_attr(
    node: Node<'_, '_>,
    attr: &str,
    path: &Path,
    context: &str,
) -> Result<i64, ConvertError> {
    let raw = required_attr(node, attr, path, context)?;
    raw.trim().parse::<i64>().map_err(|_| {
        parse_err(
            path,
            format!("invalid '{attr}' value '{raw}' in {context}; expected integer"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<PcGts xmlns="http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15" pcGtsId="pc1">
  <Metadata>
    <Creator>test</Creator>
    <Created>2020-01-01T00:00:00</Created>
    <LastChange>2020-01-02T00:00:00</LastChange>
    <MetadataItem type="processingStep" name="binarize" value="some-binarizer">
      <Labels>
        <Label type="threshold" value="0.5"/>
      </Labels>
    </MetadataItem>
  </Metadata>
  <Page imageFilename="img.png" imageWidth="1000" imageHeight="800" type="content">
    <Border><Coords points="0,0 1000,0 1000,800 0,800"/></Border>
    <PrintSpace><Coords points="50,50 950,50 950,750 50,750"/></PrintSpace>
    <ReadingOrder>
      <OrderedGroup id="g1">
        <RegionRefIndexed index="1" regionRef="r2"/>
        <RegionRefIndexed index="0" regionRef="r1"/>
      </OrderedGroup>
    </ReadingOrder>
    <TextRegion id="r1" type="paragraph" primaryLanguage="German">
      <Coords points="60,60 400,60 400,200 60,200"/>
      <TextLine id="r1-l1" index="2">
        <Coords points="60,60 400,60 400,100 60,100"/>
        <Word id="r1-l1-w1">
          <Coords points="60,60 200,60 200,100 60,100"/>
          <TextEquiv index="0"><Unicode>Hallo</Unicode></TextEquiv>
        </Word>
        <TextEquiv index="0"><Unicode>Hallo</Unicode></TextEquiv>
      </TextLine>
    </TextRegion>
    <TableRegion id="r2">
      <Coords points="60,300 400,300 400,500 60,500"/>
      <TextRegion id="r2-cell1">
        <Coords points="60,300 200,300 200,400 60,400"/>
      </TextRegion>
    </TableRegion>
  </Page>
</PcGts>"#;

    #[test]
    fn parse_minimal_document() {
        let doc = from_page_xml_str(MINIMAL).expect("parse");
        assert_eq!(doc.pcgts_id.as_deref(), Some("pc1"));
        assert_eq!(doc.page.image_width, 1000);
        assert_eq!(doc.page.regions.len(), 2);
        assert_eq!(doc.page.reading_order, vec!["r1", "r2"]);

        let region = &doc.page.regions[0];
        assert_eq!(region.kind, RegionKind::Text);
        assert_eq!(region.primary_language.as_deref(), Some("German"));
        assert_eq!(region.lines.len(), 1);
        assert_eq!(region.lines[0].index, Some(2));
        assert_eq!(region.lines[0].words[0].text_equivs[0].unicode, "Hallo");

        let table = &doc.page.regions[1];
        assert_eq!(table.kind, RegionKind::Table);
        assert_eq!(table.nested.len(), 1);

        let metadata = doc.metadata.expect("metadata");
        assert_eq!(metadata.created.as_deref(), Some("2020-01-01T00:00:00"));
        assert_eq!(metadata.steps.len(), 1);
        assert_eq!(metadata.steps[0].value, "some-binarizer");
        assert_eq!(metadata.steps[0].labels[0], ("threshold".into(), "0.5".into()));
    }

    #[test]
    fn parse_rejects_invalid_root() {
        let err = from_page_xml_str("<Page/>").unwrap_err();
        match err {
            ConvertError::PageParse { message, .. } => assert!(message.contains("<PcGts>")),
            other => panic!("expected PageParse, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_bad_points() {
        let xml = r#"<PcGts><Page imageFilename="x" imageWidth="1" imageHeight="1">
            <TextRegion id="r1"><Coords points="1,2 banana"/></TextRegion>
        </Page></PcGts>"#;
        let err = from_page_xml_str(xml).unwrap_err();
        match err {
            ConvertError::PageParse { message, .. } => {
                assert!(message.contains("invalid point"), "message: {message}")
            }
            other => panic!("expected PageParse, got {other:?}"),
        }
    }
}
