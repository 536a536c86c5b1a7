#![no_main]
use libfuzzer_sys::fuzz_target;
use tpcfix::driver::NoProgress;
use tpcfix::{convert_stream, VarFraming};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, padded to whole blocks the way a real container is.
    // Err results are expected; what we verify is no panics.
    let mut input = data.to_vec();
    let rem = input.len() % 512;
    if rem != 0 {
        input.resize(input.len() + 512 - rem, 0);
    }

    let mut out = Vec::new();
    if let Ok(summary) = convert_stream(input.as_slice(), &mut out, VarFraming::Counted, NoProgress) {
        assert!(summary.bytes_consumed <= input.len() as u64);
        assert!(out.len() as u64 <= summary.bytes_consumed);
    }

    // Unpadded input exercises the short final block path.
    let _ = convert_stream(data, std::io::sink(), VarFraming::WordAligned, NoProgress);
});
