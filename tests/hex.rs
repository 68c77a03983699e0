use lenient_uri::hex::{self, HexError};

#[test]
fn encode() {
    assert_eq!(hex::encode(b""), "");
    assert_eq!(hex::encode(b"\x00\x01\x7f\x80\xff"), "00017f80ff");
    assert_eq!(hex::encode(b"\xab\xcd\xef"), "abcdef");

    let mut buf = String::from("key=");
    hex::encode_to(b"\xde\xad", &mut buf);
    assert_eq!(buf, "key=dead");
}

#[test]
fn decode() {
    assert_eq!(hex::decode(""), Ok(vec![]));
    assert_eq!(hex::decode("00017f80ff"), Ok(b"\x00\x01\x7f\x80\xff".to_vec()));
    assert_eq!(hex::decode("ABCDEF"), Ok(b"\xab\xcd\xef".to_vec()));
    assert_eq!(hex::decode("aBcD"), Ok(b"\xab\xcd".to_vec()));

    let bytes: Vec<u8> = (0..=255).collect();
    assert_eq!(hex::decode(&hex::encode(&bytes)), Ok(bytes));
}

#[test]
fn decode_error() {
    assert_eq!(hex::decode("abc"), Err(HexError::OddLength));
    assert_eq!(hex::decode("g0"), Err(HexError::InvalidDigit { index: 0 }));
    assert_eq!(hex::decode("0g"), Err(HexError::InvalidDigit { index: 1 }));
    assert_eq!(hex::decode("00zz"), Err(HexError::InvalidDigit { index: 2 }));
    assert_eq!(hex::decode("0x12"), Err(HexError::InvalidDigit { index: 1 }));
    assert_eq!(hex::decode("é"), Err(HexError::InvalidDigit { index: 0 }));

    assert_eq!(
        HexError::InvalidDigit { index: 3 }.to_string(),
        "invalid hexadecimal digit at index 3"
    );
    assert_eq!(
        HexError::OddLength.to_string(),
        "hexadecimal string has an odd length"
    );
}

#[test]
fn decode_to_buffer() {
    let mut buf = [0u8; 4];
    assert_eq!(hex::decode_to("c0ffee", &mut buf), Ok(3));
    assert_eq!(buf, [0xc0, 0xff, 0xee, 0]);

    assert_eq!(hex::decode_to("", &mut buf), Ok(0));

    let mut buf = [0u8; 2];
    assert_eq!(
        hex::decode_to("c0ffee", &mut buf),
        Err(HexError::BufferTooSmall { needed: 3 })
    );
    assert_eq!(buf, [0, 0]);
    assert_eq!(hex::decode_to("c0f", &mut buf), Err(HexError::OddLength));
    assert_eq!(
        HexError::BufferTooSmall { needed: 3 }.to_string(),
        "output buffer too small, 3 bytes needed"
    );
}
