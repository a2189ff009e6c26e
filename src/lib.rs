//! # mbus-core — a wired M-Bus (Meter-Bus, EN 13757-3) application-layer decoder
//!
//! Parses the Data Link frame envelope (ACK, Short Frame, Long/Control
//! Frame) and the variable-length Data Record header (DIB + VIB) and
//! payload carried inside it. The crate is pure: every entry point is a
//! blocking function from a byte slice to a decoded value, with no I/O,
//! no transport, and no concurrency of its own.
//!
//! ```
//! use mbus_rs::{decode_frame, Frame};
//!
//! let ack = [0xE5];
//! assert_eq!(decode_frame(&ack).unwrap(), Frame::Ack);
//! ```

pub mod bitfields;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod logging;
pub mod mbus;
pub mod payload;

pub use bitfields::{classify_address, classify_medium, AddressClass, ControlField, Medium};
pub use cursor::Cursor;
pub use error::MBusError;
pub use logging::{init_logger, log_debug, log_error, log_info, log_warn};
pub use mbus::{decode_frame, Frame};
pub use payload::{decode_record, decode_value, DataFieldCode, DataRecord, DecodedValue};
