//! Percent-decoding.
//!
//! Decoding here is forgiving in one specific way: a malformed
//! percent-encoded octet does not produce an error. Instead, decoding
//! stops right before the offending `%` and everything decoded so far
//! is returned.
//!
//! ```
//! use lenient_uri::pct_enc::decode;
//!
//! assert_eq!(&*decode("a%20b"), b"a b");
//! assert_eq!(&*decode("abc%2g-rest"), b"abc");
//! ```

pub(crate) mod table;

use crate::log::debug;
use alloc::{borrow::Cow, string::String, vec::Vec};

/// Percent-decodes a string slice.
///
/// Every `%` must be followed by two hexadecimal digits of either case.
/// On the first `%` that isn't, decoding stops and the bytes decoded
/// before it are returned. Other bytes are copied verbatim.
///
/// Returns a borrowed slice when the input contains no `%`.
#[must_use]
pub fn decode(s: &str) -> Cow<'_, [u8]> {
    decode_impl(s, false)
}

/// Percent-decodes a string slice into a string.
///
/// Behaves like [`decode`], and then replaces invalid UTF-8 sequences
/// produced by decoding with `U+FFFD REPLACEMENT CHARACTER`.
///
/// ```
/// use lenient_uri::pct_enc::decode_lossy;
///
/// assert_eq!(decode_lossy("%E6%B5%8B%E8%AF%95"), "测试");
/// assert_eq!(decode_lossy("%FFok"), "\u{FFFD}ok");
/// assert_eq!(decode_lossy("100%"), "100");
/// ```
#[must_use]
pub fn decode_lossy(s: &str) -> Cow<'_, str> {
    into_string_lossy(decode_impl(s, false))
}

/// Decodes a query parameter name or value: `+` becomes a space first,
/// then the result is percent-decoded.
pub(crate) fn decode_form_lossy(s: &str) -> Cow<'_, str> {
    into_string_lossy(decode_impl(s, true))
}

fn into_string_lossy(bytes: Cow<'_, [u8]>) -> Cow<'_, str> {
    match bytes {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(s) => Cow::Owned(s),
            Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        },
    }
}

fn decode_impl(s: &str, plus_as_space: bool) -> Cow<'_, [u8]> {
    let bytes = s.as_bytes();
    let Some(first) = bytes
        .iter()
        .position(|&x| x == b'%' || (plus_as_space && x == b'+'))
    else {
        return Cow::Borrowed(bytes);
    };

    let mut buf = Vec::with_capacity(bytes.len());
    buf.extend_from_slice(&bytes[..first]);

    let mut i = first;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let octet = match bytes[i + 1..] {
                    [hi, lo, ..] => table::decode_octet(hi, lo),
                    _ => None,
                };
                let Some(octet) = octet else {
                    debug!("malformed percent-encoded octet at index {i}, truncating");
                    break;
                };
                buf.push(octet);
                i += 3;
            }
            b'+' if plus_as_space => {
                buf.push(b' ');
                i += 1;
            }
            x => {
                buf.push(x);
                i += 1;
            }
        }
    }
    Cow::Owned(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_without_escapes() {
        assert!(matches!(decode("plain/path"), Cow::Borrowed(s) if s == b"plain/path"));
        assert!(matches!(decode_form_lossy("a+b"), Cow::Owned(_)));
        assert!(matches!(decode_lossy("a+b"), Cow::Borrowed("a+b")));
    }

    #[test]
    fn plus_before_decoding() {
        assert_eq!(decode_form_lossy("a+b%2Bc"), "a b+c");
        assert_eq!(decode_form_lossy("++"), "  ");
        assert_eq!(decode_form_lossy("x+%"), "x ");
    }
}
