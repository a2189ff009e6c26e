//! Data Link frame recognition (EN 13757-2): ACK, Short Frame, and the
//! Long/Control Frame envelope. Checksum and start/stop validation happen
//! here; the inner payload of a Long/Control frame is handed back as an
//! opaque slice for the record assembler to walk.

use crate::constants::{FRAME_ACK, FRAME_LONG_START, FRAME_SHORT_START, FRAME_STOP};
use crate::error::MBusError;

/// A recognized Data Link frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Ack,
    Short {
        control: u8,
        address: u8,
    },
    Long {
        control: u8,
        address: u8,
        control_information: u8,
        payload: Vec<u8>,
    },
}

/// Decodes one frame from the start of `input`. Does not consume trailing
/// bytes beyond the frame; callers that stream multiple frames should
/// re-invoke on the remainder.
pub fn decode_frame(input: &[u8]) -> Result<Frame, MBusError> {
    let start = *input
        .first()
        .ok_or_else(|| MBusError::unexpected_end(0, 1))?;

    match start {
        FRAME_ACK => Ok(Frame::Ack),
        FRAME_SHORT_START => decode_short_frame(input),
        FRAME_LONG_START => decode_long_frame(input),
        other => Err(MBusError::decode(0, format!("invalid frame start byte 0x{other:02X}"))),
    }
}

fn decode_short_frame(input: &[u8]) -> Result<Frame, MBusError> {
    if input.len() < 5 {
        return Err(MBusError::unexpected_end(input.len(), 5 - input.len()));
    }
    let control = input[1];
    let address = input[2];
    let checksum = input[3];
    let stop = input[4];

    if stop != FRAME_STOP {
        return Err(MBusError::decode(4, "invalid short frame stop byte"));
    }
    let calculated = control.wrapping_add(address);
    if checksum != calculated {
        return Err(MBusError::decode(
            3,
            format!("invalid checksum: expected {checksum:#04x}, calculated {calculated:#04x}"),
        ));
    }
    Ok(Frame::Short { control, address })
}

fn decode_long_frame(input: &[u8]) -> Result<Frame, MBusError> {
    if input.len() < 4 {
        return Err(MBusError::unexpected_end(input.len(), 4 - input.len()));
    }
    let len1 = input[1];
    let len2 = input[2];
    if len1 != len2 {
        return Err(MBusError::decode(1, "long frame length bytes disagree"));
    }
    if input[3] != FRAME_LONG_START {
        return Err(MBusError::decode(3, "invalid long frame second start byte"));
    }

    let len1 = len1 as usize;
    if len1 < 3 {
        return Err(MBusError::decode(1, "long frame length shorter than control+address+ci"));
    }
    let frame_len = 4 + len1 + 2; // header(4) + payload(len1) + checksum + stop
    if input.len() < frame_len {
        return Err(MBusError::unexpected_end(input.len(), frame_len - input.len()));
    }

    let payload_start = 4;
    let payload_end = payload_start + len1;
    let payload_bytes = &input[payload_start..payload_end];
    let checksum = input[payload_end];
    let stop = input[payload_end + 1];

    if stop != FRAME_STOP {
        return Err(MBusError::decode(payload_end + 1, "invalid long frame stop byte"));
    }
    let calculated = payload_bytes
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b));
    if checksum != calculated {
        return Err(MBusError::decode(
            payload_end,
            format!("invalid checksum: expected {checksum:#04x}, calculated {calculated:#04x}"),
        ));
    }

    let control = payload_bytes[0];
    let address = payload_bytes[1];
    let control_information = payload_bytes[2];
    let payload = payload_bytes[3..].to_vec();

    Ok(Frame::Long {
        control,
        address,
        control_information,
        payload,
    })
}
