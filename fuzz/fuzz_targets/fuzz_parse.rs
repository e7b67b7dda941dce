#![no_main]
use accept_codings::CodingsParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = std::str::from_utf8(data) else {
        return;
    };

    let (codings, _) = CodingsParser::parse_partial(value);
    for coding in &codings {
        assert!(!coding.name.is_empty());
        assert!((0.0..=1.0).contains(&coding.quality));
        assert!(!coding.attributes.contains_key("q"));
    }
});
