//! Geometry mapping: polygons to bounding boxes, margin computation and
//! containment tests.
//!
//! ALTO positions everything with axis-aligned `HPOS`/`VPOS`/`WIDTH`/`HEIGHT`
//! rectangles, so PAGE polygons collapse to their bounding box here. The raw
//! point sequence survives separately as `Shape/Polygon` on versions that
//! support it.

use crate::page::Polygon;

/// An axis-aligned bounding box in pixel coordinates (min/max corners).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BBox {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl BBox {
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// True iff `other` lies fully inside `self` on all four edges. Touching
    /// edges count as contained; partial overlap does not.
    pub fn contains(&self, other: &BBox) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }
}

/// Bounding box of a polygon. Degenerate polygons (single point, collinear)
/// simply yield zero-width or zero-height boxes; an empty polygon yields the
/// zero box (the reader never produces one).
pub fn bbox(polygon: &Polygon) -> BBox {
    let mut points = polygon.0.iter();
    let Some(&(x, y)) = points.next() else {
        return BBox::default();
    };
    let mut bbox = BBox {
        min_x: x,
        min_y: y,
        max_x: x,
        max_y: y,
    };
    for &(x, y) in points {
        bbox.min_x = bbox.min_x.min(x);
        bbox.min_y = bbox.min_y.min(y);
        bbox.max_x = bbox.max_x.max(x);
        bbox.max_y = bbox.max_y.max(y);
    }
    bbox
}

/// One ALTO margin rectangle in attribute terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarginRect {
    pub vpos: i64,
    pub hpos: i64,
    pub height: i64,
    pub width: i64,
}

impl MarginRect {
    pub fn bbox(&self) -> BBox {
        BBox {
            min_x: self.hpos,
            min_y: self.vpos,
            max_x: self.hpos + self.width,
            max_y: self.vpos + self.height,
        }
    }
}

/// The four margins in document order: Top, Left, Right, Bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub top: MarginRect,
    pub left: MarginRect,
    pub right: MarginRect,
    pub bottom: MarginRect,
}

/// Margins carved out of the border around the print space:
///
/// ```text
///  ╔═══════╗   ╔═══════╗   ╔╗   ╔══╗
///  ║┌───┐  ║   ╚═══════╝   ║║   ║  ║              ┌───┐
///  ║│   │  ║ →           + ║║   ║  ║ (margins) +  │   │ (print space)
///  ║└───┘  ║   ╔═══════╗   ║║   ║  ║              └───┘
///  ║       ║   ║       ║   ║║   ║  ║
///  ╚═══════╝   ╚═══════╝   ╚╝   ╚══╝
/// ```
///
/// Top and bottom span the full border width, left and right the full border
/// height.
pub fn margins(border: &BBox, print_space: &BBox) -> Margins {
    Margins {
        top: MarginRect {
            vpos: border.min_y,
            hpos: border.min_x,
            height: print_space.min_y - border.min_y,
            width: border.width(),
        },
        left: MarginRect {
            vpos: border.min_y,
            hpos: border.min_x,
            height: border.height(),
            width: print_space.min_x - border.min_x,
        },
        right: MarginRect {
            vpos: border.min_y,
            hpos: print_space.max_x,
            height: border.height(),
            width: border.max_x - print_space.max_x,
        },
        bottom: MarginRect {
            vpos: print_space.max_y,
            hpos: border.min_x,
            height: border.max_y - print_space.max_y,
            width: border.width(),
        },
    }
}

/// Zero-size margins pinned to the page edges, for the data-loss fallbacks
/// where border and print space cannot be told apart.
pub fn edge_margins(page_width: i64, page_height: i64) -> Margins {
    Margins {
        top: MarginRect {
            vpos: 0,
            hpos: 0,
            height: 0,
            width: page_width,
        },
        left: MarginRect {
            vpos: 0,
            hpos: 0,
            height: page_height,
            width: 0,
        },
        right: MarginRect {
            vpos: 0,
            hpos: page_width,
            height: page_height,
            width: 0,
        },
        bottom: MarginRect {
            vpos: page_height,
            hpos: 0,
            height: 0,
            width: page_width,
        },
    }
}
