//! HTML character reference decoding, with the same leniency browsers
//! apply to legacy markup.
//!
//! Named references resolve through the HTML5 entity table. The trailing
//! `;` may be omitted for numeric references and for the legacy names
//! that HTML allows without it; such a legacy name also matches as the
//! longest prefix of a longer run (`&ltb` is `<b`). References that do not
//! resolve are kept as literal text.

use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};

static CHAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]+);?|#[xX]([0-9a-fA-F]+);?|([^\t\n\x0C <&#;]{1,32};?))")
        .expect("character reference pattern")
});

/// Names that resolve without a terminating `;`.
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg",
    "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt",
    "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    CHAR_REF.replace_all(text, |caps: &Captures| {
        if let Some(decimal) = caps.get(1) {
            return numeric_reference(decimal.as_str(), 10);
        }
        if let Some(hex) = caps.get(2) {
            return numeric_reference(hex.as_str(), 16);
        }
        named_reference(&caps[3])
    })
}

fn resolve_legacy(name: &str) -> Option<&'static str> {
    if LEGACY_NAMES.contains(&name) {
        resolve_html5_entity(name)
    } else {
        None
    }
}

/// `run` is the text after `&`, possibly ending in `;`.
fn named_reference(run: &str) -> String {
    let exact = match run.strip_suffix(';') {
        Some(name) => resolve_html5_entity(name),
        None => resolve_legacy(run),
    };
    if let Some(resolved) = exact {
        return resolved.to_string();
    }

    // Longest legacy name that prefixes the run, at least two characters.
    let bounds: Vec<usize> = run.char_indices().map(|(idx, _)| idx).skip(2).collect();
    for &end in bounds.iter().rev() {
        if let Some(resolved) = resolve_legacy(&run[..end]) {
            return format!("{resolved}{}", &run[end..]);
        }
    }
    format!("&{run}")
}

fn numeric_reference(digits: &str, radix: u32) -> String {
    let code = u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);
    match code {
        0 => char::REPLACEMENT_CHARACTER.to_string(),
        0x0D => "\r".to_string(),
        // C1 range: legacy pages meant windows-1252 here.
        0x80..=0x9F => {
            let byte = [code as u8];
            let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(&byte);
            decoded.into_owned()
        }
        0xD800..=0xDFFF | 0x11_0000..=u32::MAX => char::REPLACEMENT_CHARACTER.to_string(),
        _ if is_dropped_code_point(code) => String::new(),
        _ => char::from_u32(code)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
    }
}

/// Controls and noncharacters that decode to nothing.
fn is_dropped_code_point(code: u32) -> bool {
    matches!(code, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF)
        || code & 0xFFFE == 0xFFFE
}
