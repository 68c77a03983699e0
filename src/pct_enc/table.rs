//! Hexadecimal digit tables shared by percent-decoding and the hex codec.

const INVALID: u8 = 0xff;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [INVALID; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

pub(crate) const HEX_DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Returns `true` if the byte is a hexadecimal digit of either case.
#[inline]
pub(crate) const fn is_hexdig(x: u8) -> bool {
    OCTET_TABLE_LO[x as usize] != INVALID
}

/// Decodes a pair of hexadecimal digits into an octet,
/// returning `None` if either of them is not a hexadecimal digit.
#[inline]
pub(crate) const fn decode_octet(hi: u8, lo: u8) -> Option<u8> {
    if is_hexdig(hi) && is_hexdig(lo) {
        Some(OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize])
    } else {
        None
    }
}
