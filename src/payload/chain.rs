//! Generic extension-bit chain parser shared by the DIB (DIF + DIFEs) and
//! VIB (VIF + VIFEs) blocks: consume one primary field, then up to
//! [`crate::constants::MAX_EXTENSIONS`] extension fields as long as each
//! one's extension bit is set.

use crate::bitfields::ExtensionField;
use crate::constants::MAX_EXTENSIONS;
use crate::cursor::Cursor;
use crate::error::MBusError;

/// Parses a primary field followed by its extension-bit chain.
pub fn parse_chain<P, E>(cursor: &mut Cursor<'_>) -> Result<(P, Vec<E>), MBusError>
where
    P: ExtensionField,
    E: ExtensionField,
{
    let start = cursor.offset();
    let primary_byte = cursor
        .take_one()
        .map_err(|_| MBusError::decode(start, "unexpected end in DIB/VIB"))?;
    let primary = P::from_byte(primary_byte);

    let mut extensions = Vec::new();
    if !primary.extension() {
        return Ok((primary, extensions));
    }

    for _ in 0..MAX_EXTENSIONS {
        let offset = cursor.offset();
        let byte = cursor
            .take_one()
            .map_err(|_| MBusError::decode(offset, "unexpected end in DIB/VIB"))?;
        let ext = E::from_byte(byte);
        let more = ext.extension();
        extensions.push(ext);
        if !more {
            return Ok((primary, extensions));
        }
    }

    Err(MBusError::decode(
        cursor.offset(),
        "extension bit set past max",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfields::{Dif, Dife, Vif, Vife};

    #[test]
    fn single_byte_chain_with_no_extension() {
        let mut c = Cursor::new(&[0x04]);
        let (dif, difes) = parse_chain::<Dif, Dife>(&mut c).unwrap();
        assert_eq!(dif.data_field_code(), 0x04);
        assert!(difes.is_empty());
    }

    #[test]
    fn chain_collects_extensions_until_bit_clear() {
        let mut c = Cursor::new(&[0x84, 0x81, 0x00]);
        let (dif, difes) = parse_chain::<Dif, Dife>(&mut c).unwrap();
        assert_eq!(dif.data_field_code(), 0x04);
        assert_eq!(difes.len(), 2);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn chain_fails_past_ten_extensions() {
        let bytes = [0x80u8; 11];
        let mut c = Cursor::new(&bytes);
        let err = parse_chain::<Dif, Dife>(&mut c).unwrap_err();
        assert!(matches!(err, MBusError::Decode { .. }));
    }

    #[test]
    fn chain_reports_unexpected_end() {
        let mut c = Cursor::new(&[0x80]);
        let err = parse_chain::<Vif, Vife>(&mut c).unwrap_err();
        assert!(matches!(err, MBusError::Decode { .. }));
    }

    #[test]
    fn empty_input_fails() {
        let mut c = Cursor::new(&[]);
        let err = parse_chain::<Dif, Dife>(&mut c).unwrap_err();
        assert!(matches!(err, MBusError::Decode { .. }));
    }
}
