//! Character classes shared by the field parsers.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("decimal digit pattern"));

/// Whitespace as legacy tooling strips it: Unicode `White_Space` plus the
/// information separators U+001C..=U+001F.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub(crate) fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit (`\p{Nd}`).
///
/// Decimal digits are encoded in contiguous runs that start at zero and
/// ascend to nine, so the value is the distance to the start of the run,
/// modulo ten.
pub(crate) fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0u32;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// Parses a run of Unicode decimal digits. `None` on a non-digit or when
/// the value does not fit in `u64`.
pub(crate) fn parse_decimal(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        let digit = decimal_digit_value(c)?;
        acc.checked_mul(10)?.checked_add(u64::from(digit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_count_as_space() {
        assert_eq!(trim_space("\u{1c} a \u{1f}"), "a");
        assert_eq!(trim_space("\u{3000}全角\u{3000}"), "全角");
    }

    #[test]
    fn fullwidth_and_other_script_digits() {
        assert_eq!(decimal_digit_value('７'), Some(7));
        assert_eq!(decimal_digit_value('０'), Some(0));
        assert_eq!(decimal_digit_value('٣'), Some(3));
        assert_eq!(decimal_digit_value('𝟗'), Some(9));
        assert_eq!(decimal_digit_value('x'), None);
    }

    #[test]
    fn parse_mixed_width_run() {
        assert_eq!(parse_decimal("１2３"), Some(123));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("99999999999999999999999"), None);
    }
}
