//! Data Record assembler: given a cursor positioned at the start of a
//! record, walks the DIB, the VIB, takes the payload bytes the DIF's
//! data-field code calls for, and decodes the payload into a typed value.

use crate::bitfields::{Dif, Dife, Vif, Vife};
use crate::constants::{
    DATETIME_SELECTOR_DATETIME_BIT, DATETIME_SELECTOR_MASK, DIF_DATA_VARLEN, DIF_FUNCTION_ERROR,
};
use crate::cursor::Cursor;
use crate::error::MBusError;
use crate::payload::chain::parse_chain;
use crate::payload::value::{
    decode_bcd, decode_boolean, decode_date, decode_datetime32, decode_datetime40, decode_real32,
    decode_signed, Date, DateTime,
};

/// DIF data-field code (bits 0..3), naming the payload's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFieldCode {
    NoData,
    Int8,
    Int16,
    Int24,
    Int32,
    Real32,
    Int48,
    Int64,
    Readout,
    Bcd2,
    Bcd4,
    Bcd6,
    Bcd8,
    Varlen,
    Bcd12,
    SpecialFunction,
}

impl DataFieldCode {
    pub fn from_code(code: u8) -> Self {
        match code & 0x0F {
            0b0000 => DataFieldCode::NoData,
            0b0001 => DataFieldCode::Int8,
            0b0010 => DataFieldCode::Int16,
            0b0011 => DataFieldCode::Int24,
            0b0100 => DataFieldCode::Int32,
            0b0101 => DataFieldCode::Real32,
            0b0110 => DataFieldCode::Int48,
            0b0111 => DataFieldCode::Int64,
            0b1000 => DataFieldCode::Readout,
            0b1001 => DataFieldCode::Bcd2,
            0b1010 => DataFieldCode::Bcd4,
            0b1011 => DataFieldCode::Bcd6,
            0b1100 => DataFieldCode::Bcd8,
            DIF_DATA_VARLEN => DataFieldCode::Varlen,
            0b1110 => DataFieldCode::Bcd12,
            _ => DataFieldCode::SpecialFunction,
        }
    }

    /// Fixed payload width in bytes, or `None` for the length-prefixed
    /// `Varlen` shape.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            DataFieldCode::NoData => Some(0),
            DataFieldCode::Int8 => Some(1),
            DataFieldCode::Int16 => Some(2),
            DataFieldCode::Int24 => Some(3),
            DataFieldCode::Int32 => Some(4),
            DataFieldCode::Real32 => Some(4),
            DataFieldCode::Int48 => Some(6),
            DataFieldCode::Int64 => Some(8),
            DataFieldCode::Readout => Some(0),
            DataFieldCode::Bcd2 => Some(1),
            DataFieldCode::Bcd4 => Some(2),
            DataFieldCode::Bcd6 => Some(3),
            DataFieldCode::Bcd8 => Some(4),
            DataFieldCode::Varlen => None,
            DataFieldCode::Bcd12 => Some(6),
            DataFieldCode::SpecialFunction => Some(0),
        }
    }
}

/// A fully decoded Data Record value.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    NoData,
    Int { width: u8, value: i64 },
    Real32(f32),
    Bcd { digits: u8, value: u64 },
    Boolean(bool),
    ReadoutSelector,
    SpecialFunction,
    Date(Date),
    DateTime(DateTime),
    VariableLengthBytes(Vec<u8>),
}

/// A decoded Data Record: the DIB, the VIB, the raw payload bytes, and
/// the payload decoded according to the DIF data-field code (subject to
/// a trailing date/time VIFE selector or an error-function-field selector
/// overriding the integer shape).
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord {
    pub dif: Dif,
    pub difes: Vec<Dife>,
    pub vif: Vif,
    pub vifes: Vec<Vife>,
    pub payload: Vec<u8>,
    pub value: DecodedValue,
}

/// `true` selects the date-time reinterpretation, `false` the date-only
/// one, when the trailing VIB byte matches the date/time selector
/// pattern; `None` means no selector applies and the DIF-driven decode
/// stands.
fn datetime_selector(vif: Vif, vifes: &[Vife]) -> Option<bool> {
    let last_code = vifes.last().map(|v| v.code()).unwrap_or_else(|| vif.code());
    if last_code & DATETIME_SELECTOR_MASK == DATETIME_SELECTOR_MASK {
        Some(last_code & DATETIME_SELECTOR_DATETIME_BIT != 0)
    } else {
        None
    }
}

fn take_payload(cursor: &mut Cursor<'_>, code: DataFieldCode) -> Result<Vec<u8>, MBusError> {
    match code.fixed_width() {
        Some(width) => Ok(cursor.take(width)?.to_vec()),
        None => {
            let n = cursor.take_one()? as usize;
            Ok(cursor.take(n)?.to_vec())
        }
    }
}

/// DIF data-field codes whose fixed-width payload is plain binary
/// integer, and therefore eligible for the error-function boolean
/// reinterpretation below.
fn is_integer_shaped(code: DataFieldCode) -> bool {
    matches!(
        code,
        DataFieldCode::Int8
            | DataFieldCode::Int16
            | DataFieldCode::Int24
            | DataFieldCode::Int32
            | DataFieldCode::Int48
            | DataFieldCode::Int64
    )
}

fn decode_payload(
    dif: Dif,
    code: DataFieldCode,
    vif: Vif,
    vifes: &[Vife],
    payload: &[u8],
) -> Result<DecodedValue, MBusError> {
    if let Some(is_datetime) = datetime_selector(vif, vifes) {
        return decode_selected_datetime(is_datetime, payload);
    }

    // An error-function DIF reports a status/alarm bitmask rather than a
    // signed reading: Type D (boolean) per aiombus's parse_boolean, built
    // on Type C's big-endian unsigned accumulation rather than Type B's
    // little-endian signed one.
    if dif.function() == DIF_FUNCTION_ERROR && is_integer_shaped(code) {
        return Ok(DecodedValue::Boolean(decode_boolean(payload)));
    }

    match code {
        DataFieldCode::NoData => Ok(DecodedValue::NoData),
        DataFieldCode::Int8 => Ok(DecodedValue::Int {
            width: 1,
            value: decode_signed(payload),
        }),
        DataFieldCode::Int16 => Ok(DecodedValue::Int {
            width: 2,
            value: decode_signed(payload),
        }),
        DataFieldCode::Int24 => Ok(DecodedValue::Int {
            width: 3,
            value: decode_signed(payload),
        }),
        DataFieldCode::Int32 => Ok(DecodedValue::Int {
            width: 4,
            value: decode_signed(payload),
        }),
        DataFieldCode::Real32 => {
            let bytes: [u8; 4] = payload
                .try_into()
                .map_err(|_| MBusError::decode(0, "real32 payload must be 4 bytes"))?;
            Ok(DecodedValue::Real32(decode_real32(bytes)))
        }
        DataFieldCode::Int48 => Ok(DecodedValue::Int {
            width: 6,
            value: decode_signed(payload),
        }),
        DataFieldCode::Int64 => Ok(DecodedValue::Int {
            width: 8,
            value: decode_signed(payload),
        }),
        DataFieldCode::Readout => Ok(DecodedValue::ReadoutSelector),
        DataFieldCode::Bcd2 => Ok(DecodedValue::Bcd {
            digits: 2,
            value: decode_bcd(payload)?,
        }),
        DataFieldCode::Bcd4 => Ok(DecodedValue::Bcd {
            digits: 4,
            value: decode_bcd(payload)?,
        }),
        DataFieldCode::Bcd6 => Ok(DecodedValue::Bcd {
            digits: 6,
            value: decode_bcd(payload)?,
        }),
        DataFieldCode::Bcd8 => Ok(DecodedValue::Bcd {
            digits: 8,
            value: decode_bcd(payload)?,
        }),
        DataFieldCode::Varlen => Ok(DecodedValue::VariableLengthBytes(payload.to_vec())),
        DataFieldCode::Bcd12 => Ok(DecodedValue::Bcd {
            digits: 12,
            value: decode_bcd(payload)?,
        }),
        DataFieldCode::SpecialFunction => Ok(DecodedValue::SpecialFunction),
    }
}

fn decode_selected_datetime(is_datetime: bool, payload: &[u8]) -> Result<DecodedValue, MBusError> {
    if is_datetime {
        match payload.len() {
            4 => {
                let b: [u8; 4] = payload.try_into().unwrap();
                Ok(DecodedValue::DateTime(decode_datetime32(b)?))
            }
            5 => {
                let b: [u8; 5] = payload.try_into().unwrap();
                Ok(DecodedValue::DateTime(decode_datetime40(b)?))
            }
            other => Err(MBusError::decode(
                0,
                format!("date-time selector needs 4 or 5 payload bytes, got {other}"),
            )),
        }
    } else {
        match payload.len() {
            2 => {
                let b: [u8; 2] = payload.try_into().unwrap();
                Ok(DecodedValue::Date(decode_date(b)?))
            }
            other => Err(MBusError::decode(
                0,
                format!("date selector needs 2 payload bytes, got {other}"),
            )),
        }
    }
}

/// Consumes one Data Record from `cursor`: DIB, VIB, payload, decoded
/// value, in that order. Any sub-parser failure is terminal: partial
/// records are never returned.
pub fn decode_record(cursor: &mut Cursor<'_>) -> Result<DataRecord, MBusError> {
    let (dif, difes) = parse_chain::<Dif, Dife>(cursor)?;
    let (vif, vifes) = parse_chain::<Vif, Vife>(cursor)?;

    let code = DataFieldCode::from_code(dif.data_field_code());
    let payload = take_payload(cursor, code)?;
    let value = decode_payload(dif, code, vif, &vifes, &payload)?;

    Ok(DataRecord {
        dif,
        difes,
        vif,
        vifes,
        payload,
        value,
    })
}

/// Decodes a payload directly from a DIF data-field code, VIF/VIFE
/// chain, and raw bytes, bypassing framing — used by test harnesses.
pub fn decode_value(
    dif: Dif,
    vif: Vif,
    vifes: &[Vife],
    payload: &[u8],
) -> Result<DecodedValue, MBusError> {
    let code = DataFieldCode::from_code(dif.data_field_code());
    decode_payload(dif, code, vif, vifes, payload)
}
