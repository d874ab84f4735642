#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = huffpack::decompress(data);
    let _ = huffpack::decompress_text(data);
});
