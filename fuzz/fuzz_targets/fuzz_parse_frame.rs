#![no_main]

use libfuzzer_sys::fuzz_target;
use mbus_rs::decode_frame;

fuzz_target!(|data: &[u8]| {
    let _ = decode_frame(data);

    if data.len() > 10 {
        let mut corrupted = data.to_vec();
        if let Some(last) = corrupted.last_mut() {
            *last = last.wrapping_add(1);
            let _ = decode_frame(&corrupted);
        }
    }
});
