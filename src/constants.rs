//! M-Bus Protocol Constants
//!
//! This module defines the bit masks and fixed byte values used throughout
//! the decoder, based on the EN 13757-2/3 standard.

/// DIF mask for the data-field code (bits 0..3).
pub const DIF_MASK_DATA: u8 = 0x0F;
/// DIF mask for the function field (bits 4..5).
pub const DIF_MASK_FUNCTION: u8 = 0x30;
/// DIF function-field value marking an error/status class record, the
/// fourth of {instantaneous, maximum, minimum, error}.
pub const DIF_FUNCTION_ERROR: u8 = 0b11;
/// DIF mask for the storage-number LSB (bit 6).
pub const DIF_MASK_STORAGE_LSB: u8 = 0x40;
/// DIF/DIFE/VIF/VIFE extension bit (bit 7).
pub const EXTENSION_BIT: u8 = 0x80;

/// DIFE mask for the storage-number nibble (bits 0..3).
pub const DIFE_MASK_STORAGE: u8 = 0x0F;
/// DIFE mask for the tariff (bits 4..5).
pub const DIFE_MASK_TARIFF: u8 = 0x30;
/// DIFE mask for the device/unit bit (bit 6).
pub const DIFE_MASK_DEVICE: u8 = 0x40;

/// VIF/VIFE mask for the 7-bit value-info code.
pub const VIF_MASK_CODE: u8 = 0x7F;

/// Maximum number of DIFE or VIFE extension bytes permitted on one chain.
pub const MAX_EXTENSIONS: usize = 10;

/// The data-field code (DIF bits 0..3) marking a length-prefixed payload.
pub const DIF_DATA_VARLEN: u8 = 0b1101;

/// Century rollover constant for CP16/CP32 year decoding (EN 13757-3 default).
/// Years below this roll over into the 2000s; at or above, into the 1900s.
pub const CENTURY_ROLLOVER: u8 = 81;

/// A VIFE byte acts as a date/time selector when these bits are all set.
pub const DATETIME_SELECTOR_MASK: u8 = 0b0110_1100;
/// Bit distinguishing date-time (set) from date-only (clear) selectors.
pub const DATETIME_SELECTOR_DATETIME_BIT: u8 = 0b0000_0001;

// ----------------------------------------------------------------------------
// Data Link frame constants (EN 13757-2)
// ----------------------------------------------------------------------------

pub const FRAME_ACK: u8 = 0xE5;
pub const FRAME_SHORT_START: u8 = 0x10;
pub const FRAME_LONG_START: u8 = 0x68;
pub const FRAME_STOP: u8 = 0x16;

// ----------------------------------------------------------------------------
// Address field ranges (EN 13757-2 §5.4)
// ----------------------------------------------------------------------------

pub const ADDRESS_UNCONFIGURED: u8 = 0x00;
pub const ADDRESS_CONFIGURED_MIN: u8 = 0x01;
pub const ADDRESS_CONFIGURED_MAX: u8 = 0xFA;
pub const ADDRESS_RESERVED_MIN: u8 = 0xFB;
pub const ADDRESS_RESERVED_MAX: u8 = 0xFC;
pub const ADDRESS_NETWORK_LAYER: u8 = 0xFD;
pub const ADDRESS_BROADCAST_REPLY: u8 = 0xFE;
pub const ADDRESS_BROADCAST_NO_REPLY: u8 = 0xFF;

// ----------------------------------------------------------------------------
// Control field bits (EN 13757-2 §5.5)
// ----------------------------------------------------------------------------

pub const CONTROL_MASK_FUNCTION: u8 = 0x0F;
pub const CONTROL_MASK_FCV: u8 = 0x10;
pub const CONTROL_MASK_FCB: u8 = 0x20;
pub const CONTROL_MASK_DIRECTION: u8 = 0x40;
pub const CONTROL_MASK_RESERVED: u8 = 0x80;
