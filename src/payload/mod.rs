//! Data Record decoding: the DIB/VIB extension-bit chain parser, the
//! primary VIF code table, the typed payload value decoders, and the
//! record assembler that ties them together.

pub mod chain;
pub mod record;
pub mod value;
pub mod vif_table;

pub use record::{decode_record, decode_value, DataFieldCode, DataRecord, DecodedValue};
pub use vif_table::{match_primary_vif, Quantity, VifMatch};
