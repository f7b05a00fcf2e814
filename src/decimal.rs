//! Arithmetic and ordering over non-negative integers written as decimal text.
//!
//! Version segments are kept as strings so that no segment has an upper bound. The two
//! operations here are all the numeric work the crate needs: [`add`] for bumping and [`cmp`] for
//! precedence.

use crate::ident;
use core::cmp::Ordering;

/// Adds two decimal strings and returns the sum as a decimal string.
///
/// This is a total function with an *unchanged-on-reject* convention: if either operand is not
/// made only of ASCII digits, or has a superfluous leading zero (like `007`), `source` is
/// returned as-is. There is no error channel, so callers that care must compare the result to
/// `source`. The empty string is accepted and behaves like zero, except that `add("", "")` is
/// `""`.
///
/// # Examples
///
/// ```
/// use vergram::decimal::add;
///
/// assert_eq!("1000", add("999", "1"));
/// assert_eq!("12345678901234567890", add("12345678901234567889", "1"));
///
/// // rejected operands leave the source untouched
/// assert_eq!("001", add("001", "002"));
/// assert_eq!("abc", add("abc", "1"));
/// assert_eq!("7", add("7", "x"));
/// ```
pub fn add(source: &str, extra: &str) -> String {
    if !ident::is_num(source) || !ident::is_num(extra) {
        return source.to_owned();
    }
    if ident::is_bad_num(source) || ident::is_bad_num(extra) {
        return source.to_owned();
    }

    let mut lhs = source.bytes().rev();
    let mut rhs = extra.bytes().rev();
    let mut digits = Vec::with_capacity(source.len().max(extra.len()) + 1);
    let mut carry = 0u8;

    loop {
        let (a, b) = (lhs.next(), rhs.next());
        if a.is_none() && b.is_none() && carry == 0 {
            break;
        }
        let sum = a.map_or(0, |d| d - b'0') + b.map_or(0, |d| d - b'0') + carry;
        carry = sum / 10;
        digits.push(b'0' + sum % 10);
    }

    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Compares two decimal strings numerically.
///
/// Both must be free of superfluous leading zeros (the parsers guarantee this for every stored
/// segment): a shorter string is then always the smaller number, and strings of equal length
/// order like their bytes. The empty string sorts below every number.
pub fn cmp(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
