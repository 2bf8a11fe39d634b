//! Language name resolution.
//!
//! PAGE carries languages as names from a closed schema enumeration
//! ("German", "Esperanto", ...); ALTO's `LANG` attribute wants an ISO 639-2/T
//! alpha-3 code. The table below covers the PAGE enumeration; unknown names
//! resolve to nothing, which means no attribute is emitted.

/// Resolve a PAGE language name to an alpha-3 code. Already-valid alpha-3
/// codes pass through unchanged.
pub fn to_alpha3(name: &str) -> Option<&'static str> {
    let code = match name {
        "Abkhaz" => "abk",
        "Afrikaans" => "afr",
        "Albanian" => "sqi",
        "Amharic" => "amh",
        "Arabic" => "ara",
        "Armenian" => "hye",
        "Azerbaijani" => "aze",
        "Basque" => "eus",
        "Belarusian" => "bel",
        "Bengali" => "ben",
        "Bosnian" => "bos",
        "Bulgarian" => "bul",
        "Burmese" => "mya",
        "Catalan" => "cat",
        "Chechen" => "che",
        "Chinese" => "zho",
        "Croatian" => "hrv",
        "Czech" => "ces",
        "Danish" => "dan",
        "Dutch" => "nld",
        "English" => "eng",
        "Esperanto" => "epo",
        "Estonian" => "est",
        "Finnish" => "fin",
        "French" => "fra",
        "Galician" => "glg",
        "Georgian" => "kat",
        "German" => "deu",
        "Greek" => "ell",
        "Gujarati" => "guj",
        "Hebrew" => "heb",
        "Hindi" => "hin",
        "Hungarian" => "hun",
        "Icelandic" => "isl",
        "Indonesian" => "ind",
        "Irish" => "gle",
        "Italian" => "ita",
        "Japanese" => "jpn",
        "Javanese" => "jav",
        "Kannada" => "kan",
        "Kazakh" => "kaz",
        "Khmer" => "khm",
        "Korean" => "kor",
        "Kurdish" => "kur",
        "Kyrgyz" => "kir",
        "Lao" => "lao",
        "Latin" => "lat",
        "Latvian" => "lav",
        "Lithuanian" => "lit",
        "Macedonian" => "mkd",
        "Malay" => "msa",
        "Malayalam" => "mal",
        "Maltese" => "mlt",
        "Marathi" => "mar",
        "Mongolian" => "mon",
        "Nepali" => "nep",
        "Norwegian" => "nor",
        "Norwegian Bokmål" => "nob",
        "Norwegian Nynorsk" => "nno",
        "Pashto" => "pus",
        "Persian" => "fas",
        "Polish" => "pol",
        "Portuguese" => "por",
        "Punjabi" => "pan",
        "Romanian" => "ron",
        "Russian" => "rus",
        "Sanskrit" => "san",
        "Serbian" => "srp",
        "Sinhala" => "sin",
        "Slovak" => "slk",
        "Slovenian" => "slv",
        "Somali" => "som",
        "Spanish" => "spa",
        "Swahili" => "swa",
        "Swedish" => "swe",
        "Tajik" => "tgk",
        "Tamil" => "tam",
        "Telugu" => "tel",
        "Thai" => "tha",
        "Tibetan" => "bod",
        "Turkish" => "tur",
        "Turkmen" => "tuk",
        "Ukrainian" => "ukr",
        "Urdu" => "urd",
        "Uzbek" => "uzb",
        "Vietnamese" => "vie",
        "Volapük" => "vol",
        "Welsh" => "cym",
        "Yiddish" => "yid",
        other => {
            // Tolerate documents that already carry alpha-3 codes.
            if other.len() == 3 && other.chars().all(|c| c.is_ascii_lowercase()) {
                return ALPHA3_PASSTHROUGH
                    .iter()
                    .copied()
                    .find(|code| *code == other);
            }
            return None;
        }
    };
    Some(code)
}

/// Alpha-3 codes accepted verbatim (the values of the name table above).
const ALPHA3_PASSTHROUGH: &[&str] = &[
    "abk", "afr", "sqi", "amh", "ara", "hye", "aze", "eus", "bel", "ben", "bos", "bul", "mya",
    "cat", "che", "zho", "hrv", "ces", "dan", "nld", "eng", "epo", "est", "fin", "fra", "glg",
    "kat", "deu", "ell", "guj", "heb", "hin", "hun", "isl", "ind", "gle", "ita", "jpn", "jav",
    "kan", "kaz", "khm", "kor", "kur", "kir", "lao", "lat", "lav", "lit", "mkd", "msa", "mal",
    "mlt", "mar", "mon", "nep", "nor", "nob", "nno", "pus", "fas", "pol", "por", "pan", "ron",
    "rus", "san", "srp", "sin", "slk", "slv", "som", "spa", "swa", "swe", "tgk", "tam", "tel",
    "tha", "bod", "tur", "tuk", "ukr", "urd", "uzb", "vie", "vol", "cym", "yid",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_page_enumeration_names() {
        assert_eq!(to_alpha3("German"), Some("deu"));
        assert_eq!(to_alpha3("Volapük"), Some("vol"));
        assert_eq!(to_alpha3("Norwegian Bokmål"), Some("nob"));
        assert_eq!(to_alpha3("Esperanto"), Some("epo"));
    }

    #[test]
    fn passes_alpha3_codes_through() {
        assert_eq!(to_alpha3("deu"), Some("deu"));
        assert_eq!(to_alpha3("xyz"), None);
    }

    #[test]
    fn unknown_names_resolve_to_nothing() {
        assert_eq!(to_alpha3("Klingon"), None);
        assert_eq!(to_alpha3(""), None);
    }
}
