//! Parse command-line tokens into 8-bit values.
//!
//! A token that starts with a digit is read in the caller's default base. A token that starts
//! with one of the prefix letters (followed by at least one more character) picks its own
//! notation instead:
//!
//! | Prefix | Notation      | Example | Value  |
//! |--------|---------------|---------|--------|
//! | `b`    | binary        | `b101`  | `5`    |
//! | `d`    | decimal       | `d12`   | `12`   |
//! | `x`    | hexadecimal   | `xFF`   | `255`  |
//! | `p`    | pixel number  | `p0`    | `0x80` |
//!
//! Pixel notation produces a one-bit mask with logical pixel 0 as the most-significant bit.
//!
//! ```
//! use blinkt::number::{is_numeric_token, parse_number};
//!
//! assert_eq!(parse_number("p0", 10), 0x80);
//! assert_eq!(parse_number("b10", 10), 2);
//! assert!(is_numeric_token("x1f"));
//! assert!(!is_numeric_token("bright"));
//! ```

/// Whether [`parse_number`] understands `token`.
///
/// Used to tell a leading selection argument apart from a directive name such as `blue` or
/// `delay`, which also begin with prefix letters.
#[must_use]
pub fn is_numeric_token(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return true;
    }
    let Some(second) = chars.next() else {
        return false;
    };
    match first {
        'b' => matches!(second, '0' | '1'),
        'd' => second.is_ascii_digit(),
        'x' => second.is_ascii_hexdigit(),
        'p' => matches!(second, '0'..='7'),
        _ => false,
    }
}

/// Parse `token` into a byte, reading bare numbers in `default_base`.
///
/// Digits are consumed up to the first character that is not valid in the base, so trailing
/// garbage is ignored and a token with no digits is `0`. Negative values clamp to `0`, and the
/// result wraps to 8 bits. A pixel number outside `0..=7` yields an empty mask.
#[must_use]
pub fn parse_number(token: &str, default_base: u32) -> u8 {
    let (notation, digits) = split_notation(token, default_base);
    let value = parse_prefix(digits, notation.base()).max(0);

    match notation {
        Notation::Pixel => u32::try_from(value)
            .ok()
            .and_then(|index| 7u32.checked_sub(index))
            .map_or(0, |shift| 1u8 << shift),
        Notation::Base(_) => truncate(value),
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Notation {
    Base(u32),
    Pixel,
}

impl Notation {
    const fn base(self) -> u32 {
        match self {
            Self::Base(base) => base,
            Self::Pixel => 10,
        }
    }
}

fn split_notation(token: &str, default_base: u32) -> (Notation, &str) {
    let mut chars = token.chars();
    let first = chars.next();
    let rest = chars.as_str();
    if rest.is_empty() {
        return (Notation::Base(default_base), token);
    }
    match first {
        Some('b') => (Notation::Base(2), rest),
        Some('d') => (Notation::Base(10), rest),
        Some('x') => (Notation::Base(16), rest),
        Some('p') => (Notation::Pixel, rest),
        _ => (Notation::Base(default_base), token),
    }
}

// Longest-prefix integer parse with optional whitespace, sign, and (base 16) `0x`.
fn parse_prefix(text: &str, base: u32) -> i64 {
    let text = text.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, text.get(1..).unwrap_or_default()),
        Some(b'+') => (false, text.get(1..).unwrap_or_default()),
        _ => (false, text),
    };
    let text = if base == 16 {
        strip_hex_prefix(text)
    } else {
        text
    };

    let magnitude = text
        .chars()
        .map_while(|digit| digit.to_digit(base))
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(i64::from(base))
                .saturating_add(i64::from(digit))
        });

    if negative { -magnitude } else { magnitude }
}

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|digit: char| digit.is_ascii_hexdigit()))
        .unwrap_or(text)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "wrapping to 8 bits is the documented behavior"
)]
const fn truncate(value: i64) -> u8 {
    value as u8
}
