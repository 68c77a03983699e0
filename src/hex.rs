//! Conversion between bytes and hexadecimal strings.
//!
//! Handy for credentials and tokens that travel inside URIs.
//!
//! ```
//! use lenient_uri::hex;
//!
//! let token = hex::encode(b"\x01\xab\xff");
//! assert_eq!(token, "01abff");
//! assert_eq!(hex::decode("01ABff")?, b"\x01\xab\xff");
//! # Ok::<_, lenient_uri::hex::HexError>(())
//! ```

use crate::pct_enc::table::{self, HEX_DIGITS_LOWER};
use alloc::{string::String, vec::Vec};

/// An error occurred when decoding a hexadecimal string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HexError {
    /// The input has an odd number of bytes.
    OddLength,
    /// The input contains a byte that is not a hexadecimal digit.
    InvalidDigit {
        /// The index of the first such byte.
        index: usize,
    },
    /// The output buffer cannot hold the decoded bytes.
    BufferTooSmall {
        /// The number of bytes needed.
        needed: usize,
    },
}

#[cfg(feature = "impl-error")]
impl core::error::Error for HexError {}

/// Encodes bytes as a lowercase hexadecimal string, two digits per byte.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut buf = String::with_capacity(bytes.len() * 2);
    encode_to(bytes, &mut buf);
    buf
}

/// Encodes bytes as lowercase hexadecimal and appends the result to a string.
pub fn encode_to(bytes: &[u8], buf: &mut String) {
    buf.reserve(bytes.len() * 2);
    for &x in bytes {
        buf.push(HEX_DIGITS_LOWER[(x >> 4) as usize] as char);
        buf.push(HEX_DIGITS_LOWER[(x & 0x0f) as usize] as char);
    }
}

/// Decodes a hexadecimal string of either case into bytes.
///
/// # Errors
///
/// Returns `Err` if the input has an odd length or contains
/// a byte that is not a hexadecimal digit.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let mut buf = alloc::vec![0; s.len() / 2];
    decode_to(s, &mut buf)?;
    Ok(buf)
}

/// Decodes a hexadecimal string of either case into the front of a buffer,
/// returning the number of bytes written.
///
/// ```
/// use lenient_uri::hex::{self, HexError};
///
/// let mut key = [0u8; 4];
/// assert_eq!(hex::decode_to("c0ffee", &mut key), Ok(3));
/// assert_eq!(key, [0xc0, 0xff, 0xee, 0]);
/// assert_eq!(hex::decode_to("c0ffee00ff", &mut key), Err(HexError::BufferTooSmall { needed: 5 }));
/// ```
///
/// # Errors
///
/// Returns `Err` if the input has an odd length, if the buffer is
/// too small, or if the input contains a byte that is not a hexadecimal digit.
/// The buffer is left untouched in the first two cases, but may have been
/// partially written in the last one.
pub fn decode_to(s: &str, buf: &mut [u8]) -> Result<usize, HexError> {
    let bytes = s.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    let len = bytes.len() / 2;
    if buf.len() < len {
        return Err(HexError::BufferTooSmall { needed: len });
    }

    for (i, (pair, out)) in bytes.chunks_exact(2).zip(buf.iter_mut()).enumerate() {
        *out = match table::decode_octet(pair[0], pair[1]) {
            Some(x) => x,
            None => {
                let index = if table::is_hexdig(pair[0]) { 2 * i + 1 } else { 2 * i };
                return Err(HexError::InvalidDigit { index });
            }
        };
    }
    Ok(len)
}
