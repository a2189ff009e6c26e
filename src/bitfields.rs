//! Single-byte bit-field primitives: typed wrappers over the raw DIF,
//! DIFE, VIF, VIFE, Address, and Control bytes with documented, normative
//! bit masks (EN 13757-2/3).

use crate::constants::*;

/// Marker trait implemented by every chainable extension-bit field
/// (DIF/DIFE, VIF/VIFE) so the DIB/VIB walker can be generic over them.
pub trait ExtensionField {
    fn from_byte(byte: u8) -> Self;
    fn extension(&self) -> bool;
    fn raw(&self) -> u8;
}

/// Data Information Field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dif(u8);

impl Dif {
    pub fn new(byte: u8) -> Self {
        Dif(byte)
    }

    pub fn data_field_code(&self) -> u8 {
        self.0 & DIF_MASK_DATA
    }

    pub fn function(&self) -> u8 {
        (self.0 & DIF_MASK_FUNCTION) >> 4
    }

    pub fn storage_lsb(&self) -> bool {
        self.0 & DIF_MASK_STORAGE_LSB != 0
    }
}

impl ExtensionField for Dif {
    fn from_byte(byte: u8) -> Self {
        Dif(byte)
    }

    fn extension(&self) -> bool {
        self.0 & EXTENSION_BIT != 0
    }

    fn raw(&self) -> u8 {
        self.0
    }
}

/// Data Information Field Extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dife(u8);

impl Dife {
    pub fn new(byte: u8) -> Self {
        Dife(byte)
    }

    pub fn storage(&self) -> u8 {
        self.0 & DIFE_MASK_STORAGE
    }

    pub fn tariff(&self) -> u8 {
        (self.0 & DIFE_MASK_TARIFF) >> 4
    }

    pub fn device(&self) -> bool {
        self.0 & DIFE_MASK_DEVICE != 0
    }
}

impl ExtensionField for Dife {
    fn from_byte(byte: u8) -> Self {
        Dife(byte)
    }

    fn extension(&self) -> bool {
        self.0 & EXTENSION_BIT != 0
    }

    fn raw(&self) -> u8 {
        self.0
    }
}

/// Value Information Field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vif(u8);

impl Vif {
    pub fn new(byte: u8) -> Self {
        Vif(byte)
    }

    pub fn code(&self) -> u8 {
        self.0 & VIF_MASK_CODE
    }
}

impl ExtensionField for Vif {
    fn from_byte(byte: u8) -> Self {
        Vif(byte)
    }

    fn extension(&self) -> bool {
        self.0 & EXTENSION_BIT != 0
    }

    fn raw(&self) -> u8 {
        self.0
    }
}

/// Value Information Field Extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vife(u8);

impl Vife {
    pub fn new(byte: u8) -> Self {
        Vife(byte)
    }

    pub fn code(&self) -> u8 {
        self.0 & VIF_MASK_CODE
    }
}

impl ExtensionField for Vife {
    fn from_byte(byte: u8) -> Self {
        Vife(byte)
    }

    fn extension(&self) -> bool {
        self.0 & EXTENSION_BIT != 0
    }

    fn raw(&self) -> u8 {
        self.0
    }
}

/// Classification of an Address Field byte (EN 13757-2 §5.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    UnconfiguredSlave,
    ConfiguredSlave(u8),
    Reserved(u8),
    NetworkLayer,
    BroadcastReply,
    BroadcastNoReply,
}

/// Classifies an address byte. Total over all 256 values.
pub fn classify_address(byte: u8) -> AddressClass {
    match byte {
        ADDRESS_UNCONFIGURED => AddressClass::UnconfiguredSlave,
        ADDRESS_CONFIGURED_MIN..=ADDRESS_CONFIGURED_MAX => AddressClass::ConfiguredSlave(byte),
        ADDRESS_RESERVED_MIN..=ADDRESS_RESERVED_MAX => AddressClass::Reserved(byte),
        ADDRESS_NETWORK_LAYER => AddressClass::NetworkLayer,
        ADDRESS_BROADCAST_REPLY => AddressClass::BroadcastReply,
        ADDRESS_BROADCAST_NO_REPLY => AddressClass::BroadcastNoReply,
    }
}

/// Control Field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlField(u8);

impl ControlField {
    pub fn new(byte: u8) -> Self {
        ControlField(byte)
    }

    pub fn function_code(&self) -> u8 {
        self.0 & CONTROL_MASK_FUNCTION
    }

    pub fn fcv(&self) -> bool {
        self.0 & CONTROL_MASK_FCV != 0
    }

    pub fn fcb(&self) -> bool {
        self.0 & CONTROL_MASK_FCB != 0
    }

    /// `true` for master→slave, `false` for slave→master.
    pub fn direction_master_to_slave(&self) -> bool {
        self.0 & CONTROL_MASK_DIRECTION != 0
    }

    pub fn raw(&self) -> u8 {
        self.0
    }
}

/// Medium nibble as used in EN 13757 device identification tables. The
/// core only classifies the nibble value; it never reads it out of a
/// particular frame location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    Other,
    Oil,
    Electricity,
    Gas,
    Heat,
    Steam,
    HotWater,
    Water,
    HeatCostAllocator,
    Reserved(u8),
    GasMode2,
    HeatMode2,
    HotWaterMode2,
    ReservedMode2,
}

/// Decodes a medium nibble (0x0..0xF). Total over all 16 values.
pub fn classify_medium(nibble: u8) -> Medium {
    match nibble & 0x0F {
        0x00 => Medium::Other,
        0x01 => Medium::Oil,
        0x02 => Medium::Electricity,
        0x03 => Medium::Gas,
        0x04 => Medium::Heat,
        0x05 => Medium::Steam,
        0x06 => Medium::HotWater,
        0x07 => Medium::Water,
        0x08 => Medium::HeatCostAllocator,
        0x09..=0x0B => Medium::Reserved(nibble),
        0x0C => Medium::GasMode2,
        0x0D => Medium::HeatMode2,
        0x0E => Medium::HotWaterMode2,
        _ => Medium::ReservedMode2,
    }
}
