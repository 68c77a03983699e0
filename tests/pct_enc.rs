use lenient_uri::pct_enc::*;

#[test]
fn decode_valid() {
    assert_eq!(&*decode("a%20b"), b"a b");
    assert_eq!(&*decode("%2D%E6%B5"), b"\x2d\xe6\xb5");
    assert_eq!(&*decode("%ff%00"), b"\xff\x00");
    assert_eq!(&*decode("%41%4a%4A%6f"), b"AJJo");
    assert_eq!(&*decode("%25%32%30"), b"%20");
    // "+" is left alone outside of query parameters.
    assert_eq!(&*decode("a+b"), b"a+b");
}

#[test]
fn decode_truncated() {
    assert_eq!(&*decode("abc%"), b"abc");
    assert_eq!(&*decode("abc%2"), b"abc");
    assert_eq!(&*decode("abc%2g"), b"abc");
    assert_eq!(&*decode("abc%g2"), b"abc");
    assert_eq!(&*decode("%"), b"");
    assert_eq!(&*decode("%%41"), b"");
    // The rest is dropped, valid escapes included.
    assert_eq!(&*decode("a%20b%zzc%20d"), b"a b");
}

#[test]
fn decode_unchanged() {
    for s in ["", "abc", "/a/b?c=d#e", "测试+~!$&'()*", "already decoded"] {
        assert_eq!(&*decode(s), s.as_bytes());
        assert_eq!(decode_lossy(s), s);
    }
}

#[test]
fn decode_to_string() {
    assert_eq!(decode_lossy("%E6%B5%8B%E8%AF%95"), "测试");
    assert_eq!(decode_lossy("%E6%B5"), "\u{FFFD}");
    assert_eq!(decode_lossy("%FFok"), "\u{FFFD}ok");
    assert_eq!(decode_lossy("100%"), "100");
}
