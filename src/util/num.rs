/// Returns the value of a hexadecimal digit (`0`-`9`, `a`-`f`).
///
/// Upper case letters are variable names in this language, not digits.
///
/// ## Example
/// ```
/// use monoglyph::util::num::hex_digit_value;
///
/// assert_eq!(hex_digit_value('7'), Some(7));
/// assert_eq!(hex_digit_value('a'), Some(10));
/// assert_eq!(hex_digit_value('F'), None);
/// assert_eq!(hex_digit_value('g'), None);
/// ```
#[must_use]
pub const fn hex_digit_value(digit: char) -> Option<i64> {
    match digit {
        '0'..='9' => Some(digit as i64 - '0' as i64),
        'a'..='f' => Some(digit as i64 - 'a' as i64 + 10),
        _ => None,
    }
}

/// Combines two hexadecimal digit values into a byte, `high` first.
///
/// ## Example
/// ```
/// use monoglyph::util::num::combine_hex;
///
/// assert_eq!(combine_hex(4, 1), 65);
/// assert_eq!(combine_hex(15, 15), 255);
/// ```
#[must_use]
pub const fn combine_hex(high: i64, low: i64) -> i64 {
    (high << 4) | low
}

/// Converts a character code to a `char`.
///
/// Returns `None` for negative codes, codes beyond `u32` and surrogates.
///
/// ## Example
/// ```
/// use monoglyph::util::num::char_from_code;
///
/// assert_eq!(char_from_code(65), Some('A'));
/// assert_eq!(char_from_code(-1), None);
/// assert_eq!(char_from_code(0xD800), None);
/// ```
#[must_use]
pub fn char_from_code(code: i64) -> Option<char> {
    u32::try_from(code).ok().and_then(char::from_u32)
}
