//! Byte-level classification of version identifiers. Everything here is ASCII-only: a non-ASCII
//! byte is never a digit nor an identifier character.

/// Returns true if every byte of `s` is an ASCII digit. The empty string is all digits.
pub fn is_num(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is a digit string with a superfluous leading zero, like `01` or `000`.
///
/// Strings that contain a non-digit are not "bad numbers", they are not numbers at all, so this
/// returns false for them.
pub fn is_bad_num(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0') && is_num(s)
}

/// Returns true if `s` is a non-empty digit string without a superfluous leading zero. `0` is a
/// numeric identifier, `00` is not.
pub fn is_numeric_ident(s: &str) -> bool {
    !s.is_empty() && is_num(s) && !is_bad_num(s)
}

/// Returns true if `c` may appear in a pre-release or build identifier (`[0-9A-Za-z-]`).
pub fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

/// Splits `s` after its maximal leading run of ASCII digits. The run may be empty.
pub fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    // digits are single-byte, so `len` is always a char boundary
    s.split_at(len)
}
