#![no_main]
use libfuzzer_sys::fuzz_target;
use lenient_uri::pct_enc::decode;

fuzz_target!(|data: &str| {
    let decoded = decode(data);
    let prefix = data.find('%').unwrap_or(data.len());
    assert_eq!(&decoded[..prefix.min(decoded.len())], &data.as_bytes()[..prefix]);
    assert!(decoded.len() <= data.len());
});
