#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Adapter parsers must accept arbitrary bytes without panicking.
    let _ = esagram::sequence::word::read_words(data);
    let _ = esagram::sequence::int::read_ints(data);
});
