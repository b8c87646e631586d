#![no_main]

use libfuzzer_sys::fuzz_target;
use retrolz::Format;

const FORMATS: [Format; 6] =
    [Format::Lz10, Format::Lz11, Format::Cxlz, Format::Lzss, Format::Lz01, Format::Prs];

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes may fail with a typed error - that's OK.
    // We're looking for panics, hangs, and runaway allocations.
    let _ = retrolz::decompress(data);
    for format in FORMATS {
        let _ = retrolz::decompress_as(data, format);
    }
});
