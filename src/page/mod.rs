//! Source side of the conversion: the PAGE-XML data model and reader.

mod model;
pub mod reader;

pub use model::{
    has_text, Metadata, Page, PageDocument, Polygon, ProcessingStep, Region, RegionKind,
    TextEquiv, TextLine, TextStyle, Word,
};
pub use reader::{from_page_xml_str, read_page_file};
