#![no_main]
use accept_codings::Codings;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut codings) = Codings::parse(value) else {
        return;
    };

    // Sorting is stable, so a second pass must not move anything
    let once = codings.sorted().names().join(",");
    let twice = codings.sorted().names().join(",");
    assert_eq!(once, twice);

    for coding in codings.like("") {
        assert!(coding.is_accepted());
    }
});
