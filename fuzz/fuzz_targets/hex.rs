#![no_main]
use libfuzzer_sys::fuzz_target;
use lenient_uri::hex;

fuzz_target!(|data: &[u8]| {
    let encoded = hex::encode(data);
    assert_eq!(encoded.len(), data.len() * 2);
    assert_eq!(hex::decode(&encoded).as_deref(), Ok(data));
    assert_eq!(hex::decode(&encoded.to_ascii_uppercase()).as_deref(), Ok(data));
});
