#![no_main]

use libfuzzer_sys::fuzz_target;
use mbus_rs::payload::value::{decode_bcd, decode_real32, decode_signed, decode_unsigned};

fuzz_target!(|data: &[u8]| {
    for len in 1..=8 {
        if data.len() >= len {
            let _ = decode_bcd(&data[..len]);
            let _ = decode_signed(&data[..len]);
            let _ = decode_unsigned(&data[..len]);
        }
    }

    if data.len() >= 4 {
        let bytes: [u8; 4] = data[..4].try_into().unwrap();
        let _ = decode_real32(bytes);
    }

    let _: Result<u64, _> = decode_bcd(&[]);
    let _ = decode_signed(&[]);
    let _ = decode_unsigned(&[]);
});
