#![no_main]

use libfuzzer_sys::fuzz_target;
use retrolz::Format;

const ENCODE_FORMATS: [Format; 5] =
    [Format::Lz10, Format::Cxlz, Format::Lzss, Format::Lz01, Format::Prs];

fuzz_target!(|data: &[u8]| {
    // Stay inside the 24-bit size fields so compress cannot legitimately fail
    if data.len() > 0xFF_FFFF {
        return;
    }

    // Within size limits, every encode-capable format must reproduce the
    // input exactly
    for format in ENCODE_FORMATS {
        let compressed = retrolz::compress(data, format).expect("input is within limits");
        let plain = retrolz::decompress_as(&compressed, format).expect("own output decodes");
        assert_eq!(plain, data);
    }
});
