//! Target schema versions and their feature gates.
//!
//! The converter itself stays version-agnostic: wherever ALTO grew an
//! optional element or attribute over time, conversion code asks this policy
//! instead of comparing version numbers inline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// The supported ALTO schema revisions, oldest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AltoVersion {
    #[serde(rename = "2.0")]
    V2_0,
    #[serde(rename = "2.1")]
    V2_1,
    #[serde(rename = "3.0")]
    V3_0,
    #[serde(rename = "3.1")]
    V3_1,
    #[serde(rename = "4.0")]
    V4_0,
    #[serde(rename = "4.1")]
    V4_1,
    #[serde(rename = "4.2")]
    V4_2,
}

impl AltoVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            AltoVersion::V2_0 => "2.0",
            AltoVersion::V2_1 => "2.1",
            AltoVersion::V3_0 => "3.0",
            AltoVersion::V3_1 => "3.1",
            AltoVersion::V4_0 => "4.0",
            AltoVersion::V4_1 => "4.1",
            AltoVersion::V4_2 => "4.2",
        }
    }

    /// The major digit used in the namespace URI (`ns-v2#`, `ns-v3#`, ...).
    pub fn major(&self) -> u8 {
        match self {
            AltoVersion::V2_0 | AltoVersion::V2_1 => 2,
            AltoVersion::V3_0 | AltoVersion::V3_1 => 3,
            AltoVersion::V4_0 | AltoVersion::V4_1 | AltoVersion::V4_2 => 4,
        }
    }

    pub fn namespace(&self) -> String {
        format!("http://www.loc.gov/standards/alto/ns-v{}#", self.major())
    }

    pub fn xsd_url(&self) -> &'static str {
        match self {
            AltoVersion::V2_0 => "http://www.loc.gov/standards/alto/v2/alto-2-0.xsd",
            AltoVersion::V2_1 => "http://www.loc.gov/standards/alto/alto.xsd",
            AltoVersion::V3_0 => "http://www.loc.gov/standards/alto/v3/alto-3-0.xsd",
            AltoVersion::V3_1 => "http://www.loc.gov/standards/alto/v3/alto-3-1.xsd",
            AltoVersion::V4_0 => "http://www.loc.gov/standards/alto/v4/alto-4-0.xsd",
            AltoVersion::V4_1 => "http://www.loc.gov/standards/alto/v4/alto-4-1.xsd",
            AltoVersion::V4_2 => "http://www.loc.gov/standards/alto/v4/alto-4-2.xsd",
        }
    }

    /// `Tags` catalog and `TAGREFS` exist from 2.1 on.
    pub fn has_tags_catalog(&self) -> bool {
        *self >= AltoVersion::V2_1
    }

    /// The `LANG` attribute exists from 2.1 on.
    pub fn has_lang_attribute(&self) -> bool {
        *self >= AltoVersion::V2_1
    }

    /// The `SCHEMAVERSION` root attribute exists from 3.0 on.
    pub fn has_schema_version_attribute(&self) -> bool {
        *self >= AltoVersion::V3_0
    }

    /// `Shape/Polygon` exists from 3.1 on.
    pub fn has_shape_element(&self) -> bool {
        *self >= AltoVersion::V3_1
    }

    /// From 4.0 on processing steps are flat `Processing` elements; older
    /// versions nest an `ocrProcessingStep` inside `OCRProcessing`.
    pub fn has_processing_element(&self) -> bool {
        *self >= AltoVersion::V4_0
    }

    /// The `strikethrough` font style flag exists from 4.2 on.
    pub fn has_strikethrough_style(&self) -> bool {
        *self >= AltoVersion::V4_2
    }
}

impl FromStr for AltoVersion {
    type Err = ConvertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "2.0" => Ok(AltoVersion::V2_0),
            "2.1" => Ok(AltoVersion::V2_1),
            "3.0" => Ok(AltoVersion::V3_0),
            "3.1" => Ok(AltoVersion::V3_1),
            "4.0" => Ok(AltoVersion::V4_0),
            "4.1" => Ok(AltoVersion::V4_1),
            "4.2" => Ok(AltoVersion::V4_2),
            other => Err(ConvertError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl fmt::Display for AltoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_ordered() {
        assert!(AltoVersion::V2_0 < AltoVersion::V2_1);
        assert!(AltoVersion::V3_1 < AltoVersion::V4_0);
        assert!(AltoVersion::V4_2 > AltoVersion::V4_1);
    }

    #[test]
    fn feature_gates() {
        assert!(!AltoVersion::V2_0.has_tags_catalog());
        assert!(AltoVersion::V2_1.has_tags_catalog());
        assert!(!AltoVersion::V3_0.has_shape_element());
        assert!(AltoVersion::V3_1.has_shape_element());
        assert!(!AltoVersion::V3_1.has_processing_element());
        assert!(AltoVersion::V4_0.has_processing_element());
        assert!(!AltoVersion::V4_1.has_strikethrough_style());
        assert!(AltoVersion::V4_2.has_strikethrough_style());
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("4.2".parse::<AltoVersion>().is_ok());
        let err = "5.0".parse::<AltoVersion>().unwrap_err();
        match err {
            ConvertError::UnsupportedVersion(v) => assert_eq!(v, "5.0"),
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn namespace_uses_major_digit() {
        assert_eq!(
            AltoVersion::V4_2.namespace(),
            "http://www.loc.gov/standards/alto/ns-v4#"
        );
        assert_eq!(
            AltoVersion::V2_0.namespace(),
            "http://www.loc.gov/standards/alto/ns-v2#"
        );
    }
}
