//! Subnet value: an address together with its prefix length.

use super::{arithmetic, get_cidr_mask, Ipv4Address, PrefixLength};
use serde::{Serialize, Serializer};
use std::fmt;

/// An address with CIDR prefix. The address keeps its host bits; network,
/// broadcast and host range are derived on demand.
///
/// Text parsing (`FromStr`, `Deserialize`) lives with the parser in
/// [`crate::processing`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    /// The address as given, host bits included.
    pub address: Ipv4Address,
    /// The prefix length (0-32).
    pub prefix: PrefixLength,
}

impl Subnet {
    pub fn from_parts(address: Ipv4Address, prefix: PrefixLength) -> Subnet {
        Subnet { address, prefix }
    }

    pub fn mask(&self) -> Ipv4Address {
        Ipv4Address::from_bits(get_cidr_mask(self.prefix))
    }

    /// Lowest (network) address in the subnet.
    pub fn network(&self) -> Ipv4Address {
        arithmetic::network_addr(self.address, self.prefix)
    }

    /// Highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Address {
        arithmetic::broadcast_addr(self.address, self.prefix)
    }

    pub fn first_host(&self) -> Ipv4Address {
        arithmetic::first_host(self.address, self.prefix)
    }

    pub fn last_host(&self) -> Ipv4Address {
        arithmetic::last_host(self.address, self.prefix)
    }

    pub fn total_addresses(&self) -> u64 {
        arithmetic::num_addresses(self.prefix)
    }

    pub fn usable_hosts(&self) -> u64 {
        arithmetic::num_usable_hosts(self.prefix)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subnet(a: u8, b: u8, c: u8, d: u8, len: u8) -> Subnet {
        Subnet::from_parts(
            Ipv4Address::from_octets(a, b, c, d),
            PrefixLength::new(len).unwrap(),
        )
    }

    #[test]
    fn test_subnet_derived_addresses() {
        let subnet = subnet(192, 168, 1, 42, 24);
        assert_eq!(subnet.mask().to_string(), "255.255.255.0");
        assert_eq!(subnet.network().to_string(), "192.168.1.0");
        assert_eq!(subnet.broadcast().to_string(), "192.168.1.255");
        assert_eq!(subnet.first_host().to_string(), "192.168.1.1");
        assert_eq!(subnet.last_host().to_string(), "192.168.1.254");
        assert_eq!(subnet.total_addresses(), 256);
        assert_eq!(subnet.usable_hosts(), 254);
    }

    #[test]
    fn test_subnet_keeps_host_bits() {
        let subnet = subnet(10, 2, 3, 4, 16);
        assert_eq!(subnet.address, Ipv4Address::from_octets(10, 2, 3, 4));
        assert_eq!(subnet.network().to_string(), "10.2.0.0");
        assert_eq!(subnet.to_string(), "10.2.3.4/16");
    }

    #[test]
    fn test_serialize_as_cidr_string() {
        let json = serde_json::to_string(&subnet(172, 16, 0, 0, 12)).unwrap();
        assert_eq!(json, "\"172.16.0.0/12\"");
    }
}
