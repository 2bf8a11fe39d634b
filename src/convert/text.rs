//! Text content resolution: transcription alternative selection and
//! hyphenation splitting.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::page::TextEquiv;

/// What to do when no alternative carries the requested index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEquivFallback {
    /// Fail, naming the element and the missing index.
    Raise,
    /// Use the first alternative in document order.
    First,
    /// Use the last alternative in document order.
    #[default]
    Last,
}

impl FromStr for TextEquivFallback {
    type Err = ConvertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "raise" => Ok(TextEquivFallback::Raise),
            "first" => Ok(TextEquivFallback::First),
            "last" => Ok(TextEquivFallback::Last),
            other => Err(ConvertError::InvalidOption {
                option: "textequiv_fallback_strategy",
                value: other.to_string(),
            }),
        }
    }
}

/// Characters a line-final word may end in that become a `HYP` marker.
pub const HYPHEN_CHARS: [char; 5] = ['-', '⸗', '=', '¬', '\u{00ad}'];

/// Selects the transcription alternative with the requested explicit index,
/// falling back per strategy. An empty alternative list yields an empty
/// string unless the strategy is `raise`.
pub fn resolve_text_equiv<'a>(
    element_id: &str,
    equivs: &'a [TextEquiv],
    index: u32,
    fallback: TextEquivFallback,
) -> Result<&'a str, ConvertError> {
    if equivs.is_empty() {
        if fallback == TextEquivFallback::Raise {
            return Err(ConvertError::NoTextEquiv {
                element_id: element_id.to_string(),
            });
        }
        return Ok("");
    }
    if let Some(hit) = equivs.iter().find(|te| te.index == Some(index)) {
        return Ok(&hit.unicode);
    }
    match fallback {
        TextEquivFallback::Raise => Err(ConvertError::TextEquivIndexMissing {
            element_id: element_id.to_string(),
            index,
        }),
        TextEquivFallback::First => Ok(&equivs[0].unicode),
        TextEquivFallback::Last => Ok(&equivs[equivs.len() - 1].unicode),
    }
}

/// If the content ends in a recognized hyphen/dash character, returns the
/// truncated content and the split-off hyphen. Applied only to a line's
/// final word.
pub fn split_trailing_hyphen(content: &str) -> Option<(&str, char)> {
    let last = content.chars().last()?;
    if !HYPHEN_CHARS.contains(&last) {
        return None;
    }
    Some((&content[..content.len() - last.len_utf8()], last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equiv(index: Option<u32>, text: &str) -> TextEquiv {
        TextEquiv {
            index,
            unicode: text.into(),
        }
    }

    #[test]
    fn exact_index_wins() {
        let equivs = vec![equiv(Some(0), "a"), equiv(Some(1), "b")];
        let text =
            resolve_text_equiv("w1", &equivs, 1, TextEquivFallback::Raise).expect("resolve");
        assert_eq!(text, "b");
    }

    #[test]
    fn last_fallback_for_missing_index() {
        let equivs = vec![equiv(Some(0), "a"), equiv(Some(2), "c")];
        let text = resolve_text_equiv("w1", &equivs, 1, TextEquivFallback::Last).expect("resolve");
        assert_eq!(text, "c");
        let text =
            resolve_text_equiv("w1", &equivs, 1, TextEquivFallback::First).expect("resolve");
        assert_eq!(text, "a");
    }

    #[test]
    fn raise_fallback_names_element_and_index() {
        let equivs = vec![equiv(Some(0), "a")];
        let err = resolve_text_equiv("r1-l1-w1", &equivs, 3, TextEquivFallback::Raise).unwrap_err();
        match err {
            ConvertError::TextEquivIndexMissing { element_id, index } => {
                assert_eq!(element_id, "r1-l1-w1");
                assert_eq!(index, 3);
            }
            other => panic!("expected TextEquivIndexMissing, got {other:?}"),
        }
    }

    #[test]
    fn empty_alternatives() {
        let err = resolve_text_equiv("w1", &[], 0, TextEquivFallback::Raise).unwrap_err();
        assert!(matches!(err, ConvertError::NoTextEquiv { .. }));
        let text = resolve_text_equiv("w1", &[], 0, TextEquivFallback::Last).expect("resolve");
        assert_eq!(text, "");
    }

    #[test]
    fn hyphen_split_recognizes_dash_set() {
        assert_eq!(split_trailing_hyphen("bar-"), Some(("bar", '-')));
        assert_eq!(split_trailing_hyphen("Zei⸗"), Some(("Zei", '⸗')));
        assert_eq!(split_trailing_hyphen("foo"), None);
        assert_eq!(split_trailing_hyphen(""), None);
    }

    #[test]
    fn fallback_from_str() {
        assert_eq!(
            "raise".parse::<TextEquivFallback>().unwrap(),
            TextEquivFallback::Raise
        );
        assert!("best".parse::<TextEquivFallback>().is_err());
    }
}
