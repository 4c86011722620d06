//! Name-table scanning and encoding selection.
//!
//! Font naming entries come in many platform/language/encoding variants.
//! Only English entries encoded as ASCII (Macintosh Roman) or UTF-16BE
//! (Unicode and Microsoft platforms) are considered; everything else is
//! skipped.

use log::debug;
use read_fonts::{FontRef, TableProvider};

// 'name' table platform IDs
const PLATFORM_UNICODE: u16 = 0;
const PLATFORM_MACINTOSH: u16 = 1;
const PLATFORM_MICROSOFT: u16 = 3;

// Encoding IDs, per platform
const MAC_ENCODING_ROMAN: u16 = 0;
const MS_ENCODING_UNICODE_BMP: u16 = 1;

// Language IDs
const MAC_LANGUAGE_ENGLISH: u16 = 0;
const MS_LANGUAGE_ENGLISH_US: u16 = 0x0409;

// Name table IDs
const NAME_ID_FAMILY: u16 = 1;
const NAME_ID_SUBFAMILY: u16 = 2;
const NAME_ID_VERSION: u16 = 5;
const NAME_ID_POSTSCRIPT: u16 = 6;

/// Text encoding of an accepted name record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameEncoding {
    /// Single-byte payload (Macintosh Roman, English subset).
    Ascii,
    /// Big-endian UTF-16 payload.
    Utf16Be,
}

/// Classifies a name record by platform, encoding and language IDs.
///
/// The language gate comes first: anything that is not Macintosh English
/// or Windows US English is rejected regardless of platform. Returns
/// `None` for rejected records.
fn classify(platform_id: u16, encoding_id: u16, language_id: u16) -> Option<NameEncoding> {
    if language_id != MAC_LANGUAGE_ENGLISH && language_id != MS_LANGUAGE_ENGLISH_US {
        return None;
    }
    match (platform_id, encoding_id) {
        (PLATFORM_UNICODE, _) => Some(NameEncoding::Utf16Be),
        (PLATFORM_MACINTOSH, MAC_ENCODING_ROMAN) => Some(NameEncoding::Ascii),
        (PLATFORM_MICROSOFT, MS_ENCODING_UNICODE_BMP) => Some(NameEncoding::Utf16Be),
        _ => None,
    }
}

/// Converts a raw payload to UTF-8, or `None` if conversion fails.
fn decode(encoding: NameEncoding, raw: &[u8]) -> Option<String> {
    match encoding {
        NameEncoding::Ascii => std::str::from_utf8(raw).ok().map(str::to_owned),
        NameEncoding::Utf16Be => {
            if raw.len() % 2 != 0 {
                return None;
            }
            let units = raw
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
            char::decode_utf16(units).collect::<Result<String, _>>().ok()
        }
    }
}

/// English naming metadata collected from a font's 'name' table.
///
/// Fields the font does not carry stay `None`; many fonts omit some of
/// them, so absent fields are not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontMetadata {
    /// Font family name (name ID 1).
    pub family: Option<String>,
    /// Subfamily / face name (name ID 2).
    pub subfamily: Option<String>,
    /// Version string (name ID 5).
    pub version: Option<String>,
    /// PostScript name (name ID 6).
    pub postscript_name: Option<String>,
}

impl FontMetadata {
    /// Returns `true` if no field was populated.
    pub fn is_empty(&self) -> bool {
        self.family.is_none()
            && self.subfamily.is_none()
            && self.version.is_none()
            && self.postscript_name.is_none()
    }
}

/// Scans the 'name' table of an opened face.
///
/// Records are visited in the order the engine stores them and the first
/// accepted English record wins for each field; later duplicates are
/// ignored. A record that cannot be read or converted is skipped without
/// aborting the scan, so one bad entry never empties the whole result.
pub(crate) fn scan(font: &FontRef) -> FontMetadata {
    let mut metadata = FontMetadata::default();
    let Ok(name) = font.name() else {
        return metadata;
    };
    let storage = name.string_data();
    for (index, record) in name.name_record().iter().enumerate() {
        let encoding = match classify(
            record.platform_id(),
            record.encoding_id(),
            record.language_id(),
        ) {
            Some(encoding) => encoding,
            None => continue,
        };
        let slot = match record.name_id().to_u16() {
            NAME_ID_FAMILY => &mut metadata.family,
            NAME_ID_SUBFAMILY => &mut metadata.subfamily,
            NAME_ID_VERSION => &mut metadata.version,
            NAME_ID_POSTSCRIPT => &mut metadata.postscript_name,
            _ => continue,
        };
        if slot.is_some() {
            continue;
        }
        let start = record.string_offset().to_u32() as usize;
        let end = start + record.length() as usize;
        let Some(raw) = storage.as_bytes().get(start..end) else {
            debug!("name record {index} points outside string storage, skipping");
            continue;
        };
        *slot = decode(encoding, raw);
    }
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unicode_platform() {
        // Encoding ID is irrelevant on the Unicode platform.
        assert_eq!(
            classify(PLATFORM_UNICODE, 3, MAC_LANGUAGE_ENGLISH),
            Some(NameEncoding::Utf16Be)
        );
        assert_eq!(
            classify(PLATFORM_UNICODE, 0, MS_LANGUAGE_ENGLISH_US),
            Some(NameEncoding::Utf16Be)
        );
    }

    #[test]
    fn test_classify_mac_roman() {
        assert_eq!(
            classify(PLATFORM_MACINTOSH, MAC_ENCODING_ROMAN, MAC_LANGUAGE_ENGLISH),
            Some(NameEncoding::Ascii)
        );
    }

    #[test]
    fn test_classify_microsoft_unicode() {
        assert_eq!(
            classify(PLATFORM_MICROSOFT, MS_ENCODING_UNICODE_BMP, MS_LANGUAGE_ENGLISH_US),
            Some(NameEncoding::Utf16Be)
        );
    }

    #[test]
    fn test_classify_rejects_other_languages() {
        // Windows German
        assert_eq!(classify(PLATFORM_MICROSOFT, MS_ENCODING_UNICODE_BMP, 0x0407), None);
        // Macintosh French
        assert_eq!(classify(PLATFORM_MACINTOSH, MAC_ENCODING_ROMAN, 1), None);
        // Even on the Unicode platform
        assert_eq!(classify(PLATFORM_UNICODE, 3, 0x0411), None);
    }

    #[test]
    fn test_classify_rejects_other_encodings() {
        // Macintosh Japanese encoding, English language
        assert_eq!(classify(PLATFORM_MACINTOSH, 1, MAC_LANGUAGE_ENGLISH), None);
        // Microsoft Symbol encoding
        assert_eq!(classify(PLATFORM_MICROSOFT, 0, MS_LANGUAGE_ENGLISH_US), None);
        // ISO platform
        assert_eq!(classify(2, 0, MAC_LANGUAGE_ENGLISH), None);
    }

    #[test]
    fn test_decode_ascii() {
        assert_eq!(decode(NameEncoding::Ascii, b"Sans"), Some("Sans".to_string()));
        assert_eq!(decode(NameEncoding::Ascii, b""), Some(String::new()));
    }

    #[test]
    fn test_decode_ascii_rejects_invalid_bytes() {
        // 0xA5 is a Mac Roman bullet, not valid UTF-8 on its own.
        assert_eq!(decode(NameEncoding::Ascii, &[0x53, 0xA5, 0x6E]), None);
    }

    #[test]
    fn test_decode_utf16be() {
        let raw = [0x00, 0x53, 0x00, 0x61, 0x00, 0x6E, 0x00, 0x73];
        assert_eq!(decode(NameEncoding::Utf16Be, &raw), Some("Sans".to_string()));
    }

    #[test]
    fn test_decode_utf16be_surrogate_pair() {
        // U+1D54A (double-struck S) as a surrogate pair
        let raw = [0xD8, 0x35, 0xDD, 0x4A];
        assert_eq!(decode(NameEncoding::Utf16Be, &raw), Some("\u{1D54A}".to_string()));
    }

    #[test]
    fn test_decode_utf16be_odd_length() {
        assert_eq!(decode(NameEncoding::Utf16Be, &[0x00, 0x53, 0x00]), None);
    }

    #[test]
    fn test_decode_utf16be_unpaired_surrogate() {
        assert_eq!(decode(NameEncoding::Utf16Be, &[0xD8, 0x00]), None);
    }

    #[test]
    fn test_empty_metadata() {
        let metadata = FontMetadata::default();
        assert!(metadata.is_empty());

        let metadata = FontMetadata {
            version: Some("Version 1.0".to_string()),
            ..Default::default()
        };
        assert!(!metadata.is_empty());
    }
}
