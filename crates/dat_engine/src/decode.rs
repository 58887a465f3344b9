use std::sync::LazyLock;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, SHIFT_JIS};
use regex::Regex;

use dat_logging::dat_debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDat {
    pub text: String,
    pub encoding_label: String,
    /// Some input bytes were invalid and replaced with U+FFFD.
    pub had_replacements: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown encoding label {0:?}")]
    UnknownEncoding(String),
}

/// Decode a dat file into text using: BOM -> explicit label -> Shift_JIS
/// when it decodes cleanly -> chardetng guess. Invalid bytes never fail the
/// decode; they are replaced.
pub fn decode_dat(bytes: &[u8], encoding_label: Option<&str>) -> Result<DecodedDat, DecodeError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return Ok(decode_with(&bytes[bom_len..], encoding));
    }

    if let Some(label) = encoding_label {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| DecodeError::UnknownEncoding(label.to_string()))?;
        return Ok(decode_with(bytes, encoding));
    }

    if let Some(text) = SHIFT_JIS.decode_without_bom_handling_and_without_replacement(bytes) {
        return Ok(DecodedDat {
            text: text.into_owned(),
            encoding_label: SHIFT_JIS.name().to_string(),
            had_replacements: false,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guessed = detector.guess(None, true);
    dat_debug!("bytes are not clean Shift_JIS, detector guessed {}", guessed.name());
    Ok(decode_with(bytes, guessed))
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedDat {
    let (text, had_replacements) = encoding.decode_without_bom_handling(bytes);
    DecodedDat {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
        had_replacements,
    }
}

static LINE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line boundary pattern")
});

/// Split decoded text into post lines. Besides `\n` and `\r\n`, a lone
/// `\r`, the vertical tab, form feed, the separators U+001C..=U+001E, NEL,
/// and U+2028/U+2029 end a line. The final line break does not produce an
/// empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BOUNDARY.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
