//! Integration tests for Data Link frame recognition.

use mbus_rs::{decode_frame, Frame};

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex.split_whitespace()
        .map(|byte| u8::from_str_radix(byte, 16).unwrap())
        .collect()
}

#[test]
fn ack_frame_is_a_single_byte() {
    assert_eq!(decode_frame(&[0xE5]).unwrap(), Frame::Ack);
}

#[test]
fn short_frame_round_trips_control_and_address() {
    let bytes = hex_to_bytes("10 7B 10 8B 16");
    match decode_frame(&bytes).unwrap() {
        Frame::Short { control, address } => {
            assert_eq!(control, 0x7B);
            assert_eq!(address, 0x10);
        }
        other => panic!("expected a short frame, got {other:?}"),
    }
}

#[test]
fn long_frame_exposes_the_inner_payload() {
    // EN 13757-3 Annex A basic long frame.
    let bytes = hex_to_bytes(
        "68 13 13 68 08 05 73 78 56 34 12 0A 00 E9 7E 01 00 00 00 35 01 00 00 3C 16",
    );
    match decode_frame(&bytes).unwrap() {
        Frame::Long {
            control,
            address,
            control_information,
            payload,
        } => {
            assert_eq!(control, 0x08);
            assert_eq!(address, 0x05);
            assert_eq!(control_information, 0x73);
            assert_eq!(payload, hex_to_bytes("78 56 34 12 0A 00 E9 7E 01 00 00 00 35 01 00 00"));
        }
        other => panic!("expected a long frame, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_after_a_frame_are_left_unconsumed() {
    // decode_frame only recognizes one frame; a caller streaming multiple
    // frames must re-invoke on the remainder itself.
    let ack_then_more = [0xE5, 0x10, 0x40, 0x01, 0x41, 0x16];
    assert_eq!(decode_frame(&ack_then_more).unwrap(), Frame::Ack);
}

#[test]
fn malformed_frames_are_rejected() {
    assert!(decode_frame(&[]).is_err());
    assert!(decode_frame(&[0x00]).is_err());
    assert!(decode_frame(&hex_to_bytes("10 7B 10 00 16")).is_err());
    assert!(decode_frame(&hex_to_bytes("68 05 06 68 00 00 00 00 00 16")).is_err());
}
