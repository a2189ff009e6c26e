//! Primary VIF code decoder.
//!
//! The low 7 bits of a VIF select a row of the primary table. Each row is
//! defined by a constant code mask (`cmask`) and an exponent mask
//! (`emask`) carving out the sub-bits that parameterize the row's
//! multiplier. A byte matches a row when, with the exponent bits
//! stripped out, what remains equals the row's `cmask`.

/// The physical quantity a matched VIF row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Energy,
    Volume,
    Mass,
    OnTime,
    OperatingTime,
    Power,
}

/// A row of the primary VIF table once decoded for a specific code byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VifMatch {
    pub quantity: Quantity,
    pub base_unit: &'static str,
    /// Decimal multiplier to apply to the raw payload value, or `None`
    /// when the unit itself (not a multiplier) is selected by `e` (the
    /// on-time/operating-time rows).
    pub multiplier: Option<f64>,
    /// Exponent sub-field extracted from the code byte.
    pub e: u8,
}

struct Row {
    cmask: u8,
    emask: u8,
    quantity: Quantity,
    base_unit: &'static str,
    multiplier: fn(u8) -> Option<f64>,
}

const ROWS: &[Row] = &[
    Row {
        cmask: 0b0000000,
        emask: 0b0000111,
        quantity: Quantity::Energy,
        base_unit: "Wh",
        multiplier: |e| Some(10f64.powi(e as i32 - 3)),
    },
    Row {
        cmask: 0b0001000,
        emask: 0b0000111,
        quantity: Quantity::Energy,
        base_unit: "J",
        multiplier: |e| Some(10f64.powi(e as i32)),
    },
    Row {
        cmask: 0b0010000,
        emask: 0b0000111,
        quantity: Quantity::Volume,
        base_unit: "m3",
        multiplier: |e| Some(10f64.powi(e as i32 - 6)),
    },
    Row {
        cmask: 0b0011000,
        emask: 0b0000111,
        quantity: Quantity::Mass,
        base_unit: "kg",
        multiplier: |e| Some(10f64.powi(e as i32 - 3)),
    },
    Row {
        cmask: 0b0100000,
        emask: 0b0000011,
        quantity: Quantity::OnTime,
        base_unit: "s/min/h/day",
        multiplier: |_| None,
    },
    Row {
        cmask: 0b0100100,
        emask: 0b0000011,
        quantity: Quantity::OperatingTime,
        base_unit: "s/min/h/day",
        multiplier: |_| None,
    },
    Row {
        cmask: 0b0101000,
        emask: 0b0000111,
        quantity: Quantity::Power,
        base_unit: "W",
        multiplier: |e| Some(10f64.powi(e as i32 - 3)),
    },
];

/// Matches a VIF 7-bit code against the primary table. Rows are disjoint
/// by construction; the first (only) match is returned. Returns `None`
/// when no row applies — callers must treat this as a carried "unknown
/// primary code" value, not as an error.
pub fn match_primary_vif(code: u8) -> Option<VifMatch> {
    let code = code & 0x7F;
    for row in ROWS {
        let masked = code & !row.emask & 0x7F;
        if masked == row.cmask {
            let e = code & row.emask;
            return Some(VifMatch {
                quantity: row.quantity,
                base_unit: row.base_unit,
                multiplier: (row.multiplier)(e),
                e,
            });
        }
    }
    None
}
