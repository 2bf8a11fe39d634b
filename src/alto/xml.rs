//! A small mutable XML element tree for building the ALTO output.
//!
//! Conversion needs to touch elements after they were created (append
//! `STYLEREFS` tokens, set `IDNEXT` during reading-order linkage, fill the
//! style catalogs at the very end), so the writer builds an arena of elements
//! addressed by [`NodeId`] and serializes once at the end.

use std::fmt::Write as _;

/// Index of an element in an [`XmlTree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Clone, Debug)]
struct ElementData {
    name: String,
    // Attribute order is emission order, so keep a Vec instead of a map.
    attrs: Vec<(String, String)>,
    children: Vec<Content>,
}

/// An XML document under construction.
#[derive(Clone, Debug)]
pub struct XmlTree {
    elements: Vec<ElementData>,
}

impl XmlTree {
    /// Creates a tree with a root element of the given name.
    pub fn new(root_name: &str) -> Self {
        Self {
            elements: vec![ElementData {
                name: root_name.to_string(),
                attrs: Vec::new(),
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a child element and returns its id.
    pub fn add_element(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(ElementData {
            name: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        });
        self.elements[parent.0].children.push(Content::Element(id));
        id
    }

    /// Appends a text node to an element.
    pub fn add_text(&mut self, parent: NodeId, text: &str) {
        self.elements[parent.0]
            .children
            .push(Content::Text(text.to_string()));
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attr(&mut self, el: NodeId, name: &str, value: impl ToString) {
        let value = value.to_string();
        let attrs = &mut self.elements[el.0].attrs;
        if let Some(existing) = attrs.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value;
        } else {
            attrs.push((name.to_string(), value));
        }
    }

    pub fn attr(&self, el: NodeId, name: &str) -> Option<&str> {
        self.elements[el.0]
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a token to a space-separated list attribute (`STYLEREFS`).
    pub fn append_attr_token(&mut self, el: NodeId, name: &str, token: &str) {
        let value = match self.attr(el, name) {
            Some(existing) if !existing.is_empty() => format!("{existing} {token}"),
            _ => token.to_string(),
        };
        self.set_attr(el, name, value);
    }

    /// Depth-first search below `start` (inclusive) for an element whose
    /// attribute `name` equals `value`.
    pub fn find_by_attr(&self, start: NodeId, name: &str, value: &str) -> Option<NodeId> {
        if self.attr(start, name) == Some(value) {
            return Some(start);
        }
        for child in &self.elements[start.0].children {
            if let Content::Element(id) = child {
                if let Some(found) = self.find_by_attr(*id, name, value) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Serializes the document with an XML declaration and 2-space indent.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>")
            .expect("write to string");
        self.write_element(&mut out, self.root(), 0);
        out
    }

    fn write_element(&self, out: &mut String, el: NodeId, depth: usize) {
        let data = &self.elements[el.0];
        let indent = "  ".repeat(depth);

        write!(out, "{indent}<{}", data.name).expect("write to string");
        for (name, value) in &data.attrs {
            write!(out, " {name}=\"{}\"", xml_escape(value)).expect("write to string");
        }

        if data.children.is_empty() {
            writeln!(out, "/>").expect("write to string");
            return;
        }

        // Text-only elements stay on one line; mixed content is not produced
        // by the converter.
        if data
            .children
            .iter()
            .all(|c| matches!(c, Content::Text(_)))
        {
            write!(out, ">").expect("write to string");
            for child in &data.children {
                if let Content::Text(text) = child {
                    write!(out, "{}", xml_escape(text)).expect("write to string");
                }
            }
            writeln!(out, "</{}>", data.name).expect("write to string");
            return;
        }

        writeln!(out, ">").expect("write to string");
        for child in &data.children {
            match child {
                Content::Element(id) => self.write_element(out, *id, depth + 1),
                Content::Text(text) => {
                    writeln!(out, "{indent}  {}", xml_escape(text)).expect("write to string")
                }
            }
        }
        writeln!(out, "{indent}</{}>", data.name).expect("write to string");
    }
}

pub fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
