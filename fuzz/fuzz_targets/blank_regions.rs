#![no_main]

use libfuzzer_sys::fuzz_target;
use typeskip::{BlankConfig, OffsetRange, blank_regions, type_ranges};

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 64 * 1024 {
        &data[..64 * 1024]
    } else {
        data
    };

    // Leading bytes pick region boundaries; the rest is the source text.
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = usize::from(count % 16) * 2;
    if rest.len() < count {
        return;
    }
    let (cuts, text) = rest.split_at(count);
    let source = String::from_utf8_lossy(text);

    let mut bounds: Vec<usize> = cuts.iter().map(|&b| usize::from(b)).collect();
    bounds.sort_unstable();
    let regions: Vec<OffsetRange> = bounds
        .chunks_exact(2)
        .map(|c| OffsetRange::new(c[0], c[1]))
        .collect();

    for blank_line_breaks in [false, true] {
        let config = BlankConfig { blank_line_breaks };
        // Invalid region lists (empty, out of bounds, splitting a surrogate pair) are expected
        // errors and must never crash.
        let Ok(blanked) = blank_regions(&source, &regions, &config) else {
            continue;
        };

        let ranges = type_ranges(&source, &blanked).expect("blanking must preserve length");
        for r in &ranges {
            assert!(
                (r.start..r.end).all(|i| regions.iter().any(|g| g.contains(i))),
                "range {r} escapes the blanked regions"
            );
        }
    }
});
