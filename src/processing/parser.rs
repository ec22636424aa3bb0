//! CIDR expression parsing and validation.
//!
//! Turns `A.B.C.D/P` text into a validated address and prefix. Each input
//! maps to exactly one outcome: success or a single [`ParseError`].

use crate::error::{AddressFault, ParseError, Result};
use crate::models::{Ipv4Address, PrefixLength, Subnet};
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

const SLASH: char = '/';
const DOT: char = '.';

/// Parse a CIDR expression such as `"192.168.1.0/24"`.
///
/// Surrounding whitespace is ignored. Octets with leading zeros are read as
/// decimal (`"010"` is 10).
pub fn parse_cidr(input: &str) -> Result<(Ipv4Address, PrefixLength)> {
    let input = input.trim();
    let parts: Vec<&str> = input.split(SLASH).collect();
    if parts.len() != 2 {
        log::debug!("parse_cidr({input}): expected exactly one '{SLASH}'");
        return Err(ParseError::InvalidCidrFormat {
            input: input.to_string(),
        });
    }

    let prefix = parse_prefix(parts[1])?;
    let address = parse_address(parts[0])?;
    log::debug!("parse_cidr({input}) -> {address}/{prefix}");
    Ok((address, prefix))
}

/// Parse a prefix length in `0..=32`.
pub fn parse_prefix(text: &str) -> Result<PrefixLength> {
    let text = text.trim();
    let invalid = || ParseError::InvalidPrefix {
        prefix: text.to_string(),
    };

    if !is_decimal(text) {
        log::debug!("parse_prefix({text}): not a decimal integer");
        return Err(invalid());
    }
    // Digits only, so a parse failure means the value overflowed u8.
    let len: u8 = text.parse().map_err(|_| invalid())?;
    PrefixLength::new(len).map_err(|_| invalid())
}

/// Parse a dotted-decimal IPv4 address.
pub fn parse_address(text: &str) -> Result<Ipv4Address> {
    let text = text.trim();
    let invalid = |reason: AddressFault| {
        log::debug!("parse_address({text}): {reason}");
        ParseError::InvalidAddress {
            address: text.to_string(),
            reason,
        }
    };

    let parts: Vec<&str> = text.split(DOT).collect();
    if parts.len() != 4 {
        return Err(invalid(AddressFault::OctetCount(parts.len())));
    }

    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        let position = i + 1;
        let octet = part.to_string();
        if !is_decimal(part) {
            return Err(invalid(AddressFault::NotANumber { position, octet }));
        }
        octets[i] = part
            .parse::<u8>()
            .map_err(|_| invalid(AddressFault::OutOfRange { position, octet }))?;
    }

    Ok(Ipv4Address::from(octets))
}

impl FromStr for Subnet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let (address, prefix) = parse_cidr(s)?;
        Ok(Subnet::from_parts(address, prefix))
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Non-empty run of ASCII digits. Rejects the sign prefixes `str::parse` allows.
fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
