//! Address and size of the pstore memory region.

use getset::CopyGetters;
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

use crate::constants::{PSTORE_ADDRESS, PSTORE_SIZE};

/// Newtype so we can parse and print hex literals.
///
/// Parsing accepts `0x`-prefixed hex digits in either case, or plain decimal.
/// Displaying always yields lowercase `0x`-prefixed hex, the form mtkclient is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexValue(pub u64);

impl FromStr for HexValue {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(digits) => (digits, 16),
            None => (s, 10),
        };
        u64::from_str_radix(digits, radix).map(HexValue)
    }
}

impl Display for HexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A complete pstore region, ready to be peeked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct PstoreConfig {
    /// Physical base address of the region.
    #[get_copy = "pub"]
    address: HexValue,
    /// Length of the region in bytes.
    #[get_copy = "pub"]
    size: HexValue,
}

impl PstoreConfig {
    pub fn new(address: HexValue, size: HexValue) -> Self {
        PstoreConfig { address, size }
    }

    /// Picks each field independently: the override if present, then the detected value,
    /// then the field of `defaults`.
    pub fn resolve(overrides: PstoreHints, detected: PstoreHints, defaults: PstoreConfig) -> Self {
        PstoreConfig {
            address: overrides
                .address
                .or(detected.address)
                .unwrap_or(defaults.address),
            size: overrides.size.or(detected.size).unwrap_or(defaults.size),
        }
    }
}

impl Default for PstoreConfig {
    fn default() -> Self {
        PstoreConfig::new(HexValue(PSTORE_ADDRESS), HexValue(PSTORE_SIZE))
    }
}

impl Display for PstoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemAddr: {}. Size: {}", self.address, self.size)
    }
}

/// A possibly incomplete pstore region, as given on the command line or found in `expdb`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PstoreHints {
    pub address: Option<HexValue>,
    pub size: Option<HexValue>,
}

impl PstoreHints {
    pub fn new(address: Option<HexValue>, size: Option<HexValue>) -> Self {
        PstoreHints { address, size }
    }

    /// Whether both the address and the size are known.
    pub fn is_complete(&self) -> bool {
        self.address.is_some() && self.size.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(v: u64) -> Option<HexValue> {
        Some(HexValue(v))
    }

    #[test]
    fn test_parse_hex_value() {
        assert_eq!("0x48090000".parse::<HexValue>().unwrap(), HexValue(0x4809_0000));
        assert_eq!("0XE0000".parse::<HexValue>().unwrap(), HexValue(0xe_0000));
        assert_eq!(" 0xAbC ".parse::<HexValue>().unwrap(), HexValue(0xabc));
        assert_eq!("4096".parse::<HexValue>().unwrap(), HexValue(4096));
    }

    #[test]
    fn test_parse_invalid_hex_value() {
        assert!("0x".parse::<HexValue>().is_err());
        assert!("0xzz".parse::<HexValue>().is_err());
        assert!("pstore".parse::<HexValue>().is_err());
        assert!("".parse::<HexValue>().is_err());
    }

    #[test]
    fn test_display_hex_value() {
        assert_eq!(HexValue(0xE0000).to_string(), "0xe0000");
        assert_eq!(HexValue(0).to_string(), "0x0");
    }

    #[test]
    fn test_default_region() {
        let region = PstoreConfig::default();
        assert_eq!(region.to_string(), "MemAddr: 0x48090000. Size: 0xe0000");
    }

    #[test]
    fn test_resolve_override_wins() {
        let defaults = PstoreConfig::new(HexValue(0x3000), HexValue(0x30));
        let region = PstoreConfig::resolve(
            PstoreHints::new(hex(0x1000), hex(0x10)),
            PstoreHints::new(hex(0x2000), hex(0x20)),
            defaults,
        );

        assert_eq!(region, PstoreConfig::new(HexValue(0x1000), HexValue(0x10)));
    }

    #[test]
    fn test_resolve_detected_over_default() {
        let defaults = PstoreConfig::new(HexValue(0x3000), HexValue(0x30));
        let region = PstoreConfig::resolve(
            PstoreHints::default(),
            PstoreHints::new(hex(0x2000), hex(0x20)),
            defaults,
        );

        assert_eq!(region, PstoreConfig::new(HexValue(0x2000), HexValue(0x20)));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let defaults = PstoreConfig::new(HexValue(0x3000), HexValue(0x30));
        let region =
            PstoreConfig::resolve(PstoreHints::default(), PstoreHints::default(), defaults);

        assert_eq!(region, defaults);
    }

    #[test]
    fn test_resolve_fields_independently() {
        let defaults = PstoreConfig::new(HexValue(0x3000), HexValue(0x30));

        let detected_addr_default_size = PstoreConfig::resolve(
            PstoreHints::default(),
            PstoreHints::new(hex(0x2000), None),
            defaults,
        );
        assert_eq!(
            detected_addr_default_size,
            PstoreConfig::new(HexValue(0x2000), HexValue(0x30))
        );

        let override_size_detected_addr = PstoreConfig::resolve(
            PstoreHints::new(None, hex(0x10)),
            PstoreHints::new(hex(0x2000), hex(0x20)),
            defaults,
        );
        assert_eq!(
            override_size_detected_addr,
            PstoreConfig::new(HexValue(0x2000), HexValue(0x10))
        );
    }

    #[test]
    fn test_hints_completeness() {
        assert!(PstoreHints::new(hex(1), hex(2)).is_complete());
        assert!(!PstoreHints::new(hex(1), None).is_complete());
        assert!(!PstoreHints::default().is_complete());
    }
}
