//! IPv4 address and prefix length value types.
//!
//! Provides [`Ipv4Address`] (an opaque 32-bit address) and [`PrefixLength`]
//! (a validated `0..=32` prefix), along with the mask helper every subnet
//! calculation builds on.

use crate::error::ParseError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a validated prefix length to a subnet mask as u32.
///
/// Shifting a u32 by 32 is an overflow, so the shift happens in u64.
///
/// # Examples
/// ```
/// use subnet_report::models::{get_cidr_mask, PrefixLength};
/// assert_eq!(get_cidr_mask(PrefixLength::new(24).unwrap()), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(PrefixLength::new(0).unwrap()), 0);
/// ```
pub fn get_cidr_mask(prefix: PrefixLength) -> u32 {
    let right_len = MAX_LENGTH - prefix.get();
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// IPv4 address stored as its 32-bit big-endian value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    pub const UNSPECIFIED: Ipv4Address = Ipv4Address(0);
    pub const BROADCAST: Ipv4Address = Ipv4Address(u32::MAX);

    /// Build an address from four octets, most significant first.
    pub const fn from_octets(o0: u8, o1: u8, o2: u8, o3: u8) -> Ipv4Address {
        Ipv4Address(u32::from_be_bytes([o0, o1, o2, o3]))
    }

    pub const fn from_bits(bits: u32) -> Ipv4Address {
        Ipv4Address(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Four 8-bit binary groups, e.g. `11000000.10101000.00000001.00000000`.
    pub fn to_dotted_binary(self) -> String {
        let [a, b, c, d] = self.octets();
        format!("{a:08b}.{b:08b}.{c:08b}.{d:08b}")
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(u32::from(addr))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4Address(u32::from_be_bytes(octets))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Network prefix length, always within `0..=32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Validate a prefix length. Values above 32 are rejected, never clamped.
    pub fn new(len: u8) -> Result<PrefixLength, ParseError> {
        if len > MAX_LENGTH {
            Err(ParseError::InvalidPrefix {
                prefix: len.to_string(),
            })
        } else {
            Ok(PrefixLength(len))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits (`32 - prefix`).
    pub const fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl TryFrom<u8> for PrefixLength {
    type Error = ParseError;

    fn try_from(len: u8) -> Result<Self, Self::Error> {
        PrefixLength::new(len)
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PrefixLength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}
