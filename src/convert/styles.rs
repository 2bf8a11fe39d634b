//! Style and tag catalogs.
//!
//! ALTO references formatting through `Styles`/`Tags` catalogs instead of
//! inline attributes. Each catalog entry id is a pure function of its
//! attribute tuple: the prefix plus the stringified fields joined by `---`,
//! spaces escaped as `%20` and absent fields rendered as a literal `None`.
//! Identical tuples therefore always share one entry, no matter how many
//! elements reference it.

use std::collections::BTreeSet;

use log::warn;

use crate::alto::{AltoVersion, NodeId, XmlTree};
use crate::page::TextStyle;

const FIELD_SEPARATOR: &str = "---";
const ABSENT: &str = "None";

/// A generic deduplicating catalog, parameterized by field list, id prefix
/// and output element name. Instantiated three ways below.
#[derive(Clone, Debug)]
pub struct StyleCatalog {
    prefix: &'static str,
    fields: &'static [&'static str],
    output_element: &'static str,
    entries: BTreeSet<String>,
}

impl StyleCatalog {
    fn new(
        prefix: &'static str,
        fields: &'static [&'static str],
        output_element: &'static str,
    ) -> Self {
        Self {
            prefix,
            fields,
            output_element,
            entries: BTreeSet::new(),
        }
    }

    /// Builds the canonical key for a field tuple and records it. Idempotent:
    /// the same values always yield the same id.
    fn get_id(&mut self, values: &[Option<String>]) -> String {
        debug_assert_eq!(values.len(), self.fields.len());
        let joined = values
            .iter()
            .map(|value| match value {
                Some(v) => v.replace(' ', "%20"),
                None => ABSENT.to_string(),
            })
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR);
        let key = format!("{}{}", self.prefix, joined);
        self.entries.insert(key.clone());
        key
    }

    /// Emits one element per recorded entry. Field names are upper-cased with
    /// underscores stripped; absent fields emit no attribute.
    fn flush(&self, tree: &mut XmlTree, parent: NodeId) {
        for key in &self.entries {
            let el = tree.add_element(parent, self.output_element);
            tree.set_attr(el, "ID", key);
            let raw = &key[self.prefix.len()..];
            for (field, value) in self.fields.iter().zip(raw.split(FIELD_SEPARATOR)) {
                if value == ABSENT {
                    continue;
                }
                let attr = field.replace('_', "").to_uppercase();
                tree.set_attr(el, &attr, value.replace("%20", " "));
            }
        }
    }
}

/// Appends a catalog id to an element's `STYLEREFS` list.
fn append_styleref(tree: &mut XmlTree, el: NodeId, id: &str) {
    tree.append_attr_token(el, "STYLEREFS", id);
}

/// Catalog of `TextStyle` entries (font attributes).
#[derive(Clone, Debug)]
pub struct TextStyles {
    version: AltoVersion,
    catalog: StyleCatalog,
}

impl TextStyles {
    const FIELDS: &'static [&'static str] = &[
        "font_family",
        "font_type",
        "font_width",
        "font_size",
        "font_color",
        "font_style",
    ];

    pub fn new(version: AltoVersion) -> Self {
        Self {
            version,
            catalog: StyleCatalog::new("textstyle-", Self::FIELDS, "TextStyle"),
        }
    }

    /// Records the style and appends its id to the element's `STYLEREFS`.
    pub fn apply(&mut self, tree: &mut XmlTree, el: NodeId, style: Option<&TextStyle>) {
        if let Some(style) = style {
            let id = self.id_for(style);
            append_styleref(tree, el, &id);
        }
    }

    pub fn id_for(&mut self, style: &TextStyle) -> String {
        let font_type = if style.serif { "serif" } else { "sans-serif" };
        let font_width = if style.monospace { "fixed" } else { "proportional" };
        self.catalog.get_id(&[
            style.font_family.clone(),
            Some(font_type.to_string()),
            Some(font_width.to_string()),
            style.font_size.map(|size| format!("{size}")),
            font_color(style),
            font_style_flags(style, self.version),
        ])
    }

    pub fn flush(&self, tree: &mut XmlTree, parent: NodeId) {
        self.catalog.flush(tree, parent);
    }
}

/// Resolves the style color to an `rrggbb` hex triplet. An explicit packed
/// RGB value wins unless a recognized named color overrides it; an unknown
/// name yields no color at all.
fn font_color(style: &TextStyle) -> Option<String> {
    let mut color = style.text_colour_rgb.map(|packed| {
        // PAGE packs textColourRgb as red + 256*green + 65536*blue.
        let r = packed & 0xff;
        let g = (packed >> 8) & 0xff;
        let b = (packed >> 16) & 0xff;
        format!("{r:02x}{g:02x}{b:02x}")
    });
    if let Some(name) = style.text_colour.as_deref() {
        if let Some(hex) = named_color(name) {
            color = Some(hex.to_string());
        }
    }
    color
}

/// Web-color hex values for the PAGE color name enumeration.
fn named_color(name: &str) -> Option<&'static str> {
    Some(match name {
        "white" => "ffffff",
        "black" => "000000",
        "red" => "ff0000",
        "brown" => "800000",
        "cyan" => "00ffff",
        "green" => "00ff00",
        "grey" => "999999",
        "indigo" => "4b0082",
        "magenta" => "ff00ff",
        "orange" => "ffa500",
        "pink" => "ff00cb",
        "turquoise" => "40e0d0",
        "violet" => "ee82ee",
        "yellow" => "ffff00",
        _ => return None,
    })
}

/// Space-joined `FONTSTYLE` flag list; strikethrough only exists from 4.2.
fn font_style_flags(style: &TextStyle, version: AltoVersion) -> Option<String> {
    let mut flags = Vec::new();
    if style.italic {
        flags.push("italics");
    }
    if style.underlined {
        flags.push("underline");
    }
    if style.bold {
        flags.push("bold");
    }
    if style.small_caps {
        flags.push("smallcaps");
    }
    if style.subscript {
        flags.push("subscript");
    }
    if style.superscript {
        flags.push("superscript");
    }
    if style.strikethrough && version.has_strikethrough_style() {
        flags.push("strikethrough");
    }
    if flags.is_empty() {
        None
    } else {
        Some(flags.join(" "))
    }
}

/// Catalog of `ParagraphStyle` entries. Only alignment is derivable from
/// PAGE; the remaining fields stay absent.
#[derive(Clone, Debug)]
pub struct ParagraphStyles {
    catalog: StyleCatalog,
}

impl ParagraphStyles {
    const FIELDS: &'static [&'static str] = &["align", "left", "right", "line_space", "first_line"];

    pub fn new() -> Self {
        Self {
            catalog: StyleCatalog::new("parastyle-", Self::FIELDS, "ParagraphStyle"),
        }
    }

    /// Records the region's alignment and appends the id to `STYLEREFS`.
    pub fn apply(&mut self, tree: &mut XmlTree, el: NodeId, align: Option<&str>) {
        let Some(align) = align else {
            return;
        };
        let mapped = match align {
            "left" => "Left",
            "right" => "Right",
            "centre" => "center",
            "justify" => "Block",
            other => {
                warn!("unrecognized alignment '{other}', skipping paragraph style");
                return;
            }
        };
        let id = self
            .catalog
            .get_id(&[Some(mapped.to_string()), None, None, None, None]);
        append_styleref(tree, el, &id);
    }

    pub fn flush(&self, tree: &mut XmlTree, parent: NodeId) {
        self.catalog.flush(tree, parent);
    }
}

impl Default for ParagraphStyles {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog of `LayoutTag` entries, fed by the PAGE region `@type` label.
#[derive(Clone, Debug)]
pub struct LayoutTags {
    catalog: StyleCatalog,
}

impl LayoutTags {
    const FIELDS: &'static [&'static str] = &["label"];

    pub fn new() -> Self {
        Self {
            catalog: StyleCatalog::new("layouttag-", Self::FIELDS, "LayoutTag"),
        }
    }

    /// Records the label and sets `TAGREFS`. Composed blocks and
    /// illustrations additionally carry the label as an explicit `TYPE`.
    pub fn apply(&mut self, tree: &mut XmlTree, el: NodeId, block_name: &str, label: Option<&str>) {
        let Some(label) = label else {
            return;
        };
        if matches!(block_name, "ComposedBlock" | "Illustration") {
            tree.set_attr(el, "TYPE", label);
        }
        let id = self.catalog.get_id(&[Some(label.to_string())]);
        tree.set_attr(el, "TAGREFS", id);
    }

    pub fn flush(&self, tree: &mut XmlTree, parent: NodeId) {
        self.catalog.flush(tree, parent);
    }
}

impl Default for LayoutTags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> TextStyle {
        TextStyle {
            font_family: Some("Times New Roman".into()),
            serif: true,
            font_size: Some(10.0),
            italic: true,
            bold: true,
            ..Default::default()
        }
    }

    #[test]
    fn identical_tuples_share_one_entry() {
        let mut styles = TextStyles::new(AltoVersion::V4_2);
        let id1 = styles.id_for(&style());
        let id2 = styles.id_for(&style());
        assert_eq!(id1, id2);
        assert_eq!(styles.catalog.entries.len(), 1);
    }

    #[test]
    fn key_escapes_spaces_and_marks_absent_fields() {
        let mut styles = TextStyles::new(AltoVersion::V4_2);
        let id = styles.id_for(&style());
        assert_eq!(
            id,
            "textstyle-Times%20New%20Roman---serif---proportional---10---None---italics%20bold"
        );
    }

    #[test]
    fn flush_emits_upper_cased_attributes() {
        let mut styles = TextStyles::new(AltoVersion::V4_2);
        styles.id_for(&style());

        let mut tree = XmlTree::new("Styles");
        let root = tree.root();
        styles.flush(&mut tree, root);
        let out = tree.to_xml_string();
        assert!(out.contains("FONTFAMILY=\"Times New Roman\""));
        assert!(out.contains("FONTTYPE=\"serif\""));
        assert!(out.contains("FONTSIZE=\"10\""));
        assert!(out.contains("FONTSTYLE=\"italics bold\""));
        assert!(!out.contains("FONTCOLOR"));
    }

    #[test]
    fn strikethrough_is_version_gated() {
        let strike = TextStyle {
            strikethrough: true,
            ..Default::default()
        };
        let mut v42 = TextStyles::new(AltoVersion::V4_2);
        assert!(v42.id_for(&strike).contains("strikethrough"));
        let mut v41 = TextStyles::new(AltoVersion::V4_1);
        assert!(!v41.id_for(&strike).contains("strikethrough"));
    }

    #[test]
    fn packed_rgb_becomes_hex_triplet() {
        // red=18, green=52, blue=86 -> 123456
        let style = TextStyle {
            text_colour_rgb: Some(0x12 + 256 * 0x34 + 65536 * 0x56),
            ..Default::default()
        };
        assert_eq!(font_color(&style).as_deref(), Some("123456"));
    }

    #[test]
    fn named_color_overrides_rgb_and_unknown_is_dropped() {
        let named = TextStyle {
            text_colour: Some("turquoise".into()),
            text_colour_rgb: Some(255),
            ..Default::default()
        };
        assert_eq!(font_color(&named).as_deref(), Some("40e0d0"));

        let unknown = TextStyle {
            text_colour: Some("blurple".into()),
            ..Default::default()
        };
        assert_eq!(font_color(&unknown), None);
    }

    #[test]
    fn styleref_list_is_append_only() {
        let mut tree = XmlTree::new("TextBlock");
        let el = tree.root();
        let mut text_styles = TextStyles::new(AltoVersion::V4_2);
        let mut para_styles = ParagraphStyles::new();

        text_styles.apply(&mut tree, el, Some(&style()));
        para_styles.apply(&mut tree, el, Some("justify"));

        let refs = tree.attr(el, "STYLEREFS").expect("STYLEREFS");
        let tokens: Vec<&str> = refs.split(' ').collect();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].starts_with("textstyle-"));
        assert_eq!(tokens[1], "parastyle-Block---None---None---None---None");
    }

    #[test]
    fn layout_tag_sets_type_on_composed_blocks_only() {
        let mut tags = LayoutTags::new();
        let mut tree = XmlTree::new("Page");
        let text_block = tree.add_element(tree.root(), "TextBlock");
        let composed = tree.add_element(tree.root(), "ComposedBlock");

        tags.apply(&mut tree, text_block, "TextBlock", Some("paragraph"));
        tags.apply(&mut tree, composed, "ComposedBlock", Some("table"));

        assert_eq!(tree.attr(text_block, "TYPE"), None);
        assert_eq!(tree.attr(text_block, "TAGREFS"), Some("layouttag-paragraph"));
        assert_eq!(tree.attr(composed, "TYPE"), Some("table"));

        let mut out = XmlTree::new("Tags");
        let out_root = out.root();
        tags.flush(&mut out, out_root);
        let xml = out.to_xml_string();
        assert!(xml.contains("<LayoutTag ID=\"layouttag-paragraph\" LABEL=\"paragraph\"/>"));
        assert!(xml.contains("<LayoutTag ID=\"layouttag-table\" LABEL=\"table\"/>"));
    }
}
