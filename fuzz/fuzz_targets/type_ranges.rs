#![no_main]

use libfuzzer_sys::fuzz_target;
use typeskip::{LineIndex, TypeskipError, type_ranges, validate_ranges};

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep the fuzzer fast and avoid OOM in pathological cases.
    let data = if data.len() > 256 * 1024 {
        &data[..256 * 1024]
    } else {
        data
    };

    // First half is the original, second half the "blanked" text. Lengths often differ, which
    // must surface as an error and never as a panic.
    let (a, b) = data.split_at(data.len() / 2);
    let original = String::from_utf8_lossy(a);
    let blanked = String::from_utf8_lossy(b);

    let len_a = original.encode_utf16().count();
    let len_b = blanked.encode_utf16().count();

    match type_ranges(&original, &blanked) {
        Ok(ranges) => {
            assert_eq!(len_a, len_b);
            validate_ranges(len_a, &ranges).expect("extractor output must be valid");
            for w in ranges.windows(2) {
                assert!(w[0].end < w[1].start, "ranges must be maximally merged");
            }

            let index = LineIndex::new(&original);
            for r in &ranges {
                let p = index.range_at(*r);
                assert!(p.start <= p.end);
            }
        }
        Err(TypeskipError::LengthMismatch {
            original,
            transformed,
        }) => {
            assert_eq!((original, transformed), (len_a, len_b));
            assert_ne!(len_a, len_b);
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
