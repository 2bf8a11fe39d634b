//! Target side of the conversion: ALTO schema versions and XML building.

mod version;
pub mod xml;

pub use version::AltoVersion;
pub use xml::{NodeId, XmlTree};
