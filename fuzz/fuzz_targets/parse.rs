#![no_main]
use libfuzzer_sys::fuzz_target;
use lenient_uri::Uri;

fuzz_target!(|data: &str| {
    let Ok(u) = Uri::parse(data) else {
        return;
    };
    assert_eq!(u.as_str(), data);

    let scheme = u.scheme().as_str();
    assert_eq!(scheme, scheme.to_ascii_lowercase());
    assert_eq!(u.host(), u.host().to_ascii_lowercase());
    assert!(!scheme.contains([':', '/', '?', '#']));
    assert!(!u.host().contains(['/', '?', '#']));
    assert!(!u.userinfo().contains(['@', '/', '?', '#']));
    assert!(!u.query().as_str().contains('#'));
    if scheme.is_empty() && u.host().is_empty() && u.port() != 0 {
        panic!("port {} without scheme or host", u.port());
    }

    let _ = u.query_params();
});
