//! Full analysis of a subnet, ready for rendering.

use super::classify::{address_class, is_loopback, is_private};
use super::parser::parse_cidr;
use crate::error::Result;
use crate::models::{AddressClass, Ipv4Address, PrefixLength, Subnet};
use serde::Serialize;

/// Every derived attribute of a parsed CIDR expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    /// Address as given (host bits kept).
    pub address: Ipv4Address,
    pub prefix: PrefixLength,
    pub mask: Ipv4Address,
    pub network: Ipv4Address,
    pub broadcast: Ipv4Address,
    pub first_host: Ipv4Address,
    pub last_host: Ipv4Address,
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub class: AddressClass,
    pub is_private: bool,
    pub is_loopback: bool,
    pub address_binary: String,
    pub mask_binary: String,
    pub network_binary: String,
}

impl SubnetReport {
    /// Compute the report for an already validated subnet. Cannot fail.
    pub fn from_subnet(subnet: Subnet) -> SubnetReport {
        let mask = subnet.mask();
        let network = subnet.network();
        SubnetReport {
            address: subnet.address,
            prefix: subnet.prefix,
            mask,
            network,
            broadcast: subnet.broadcast(),
            first_host: subnet.first_host(),
            last_host: subnet.last_host(),
            total_addresses: subnet.total_addresses(),
            usable_hosts: subnet.usable_hosts(),
            class: address_class(subnet.address),
            is_private: is_private(subnet.address),
            is_loopback: is_loopback(subnet.address),
            address_binary: subnet.address.to_dotted_binary(),
            mask_binary: mask.to_dotted_binary(),
            network_binary: network.to_dotted_binary(),
        }
    }
}

/// Parse a CIDR expression and analyse it.
///
/// # Examples
/// ```
/// use subnet_report::parse_subnet;
/// let report = parse_subnet("192.168.1.0/24").unwrap();
/// assert_eq!(report.broadcast.to_string(), "192.168.1.255");
/// assert_eq!(report.usable_hosts, 254);
/// ```
pub fn parse_subnet(input: &str) -> Result<SubnetReport> {
    let (address, prefix) = parse_cidr(input)?;
    let subnet = Subnet::from_parts(address, prefix);
    log::debug!("parse_subnet({}) -> {subnet}", input.trim());
    Ok(SubnetReport::from_subnet(subnet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_report_class_c_private() {
        let report = parse_subnet("192.168.1.0/24").unwrap();
        assert_eq!(report.mask.to_string(), "255.255.255.0");
        assert_eq!(report.network.to_string(), "192.168.1.0");
        assert_eq!(report.broadcast.to_string(), "192.168.1.255");
        assert_eq!(report.first_host.to_string(), "192.168.1.1");
        assert_eq!(report.last_host.to_string(), "192.168.1.254");
        assert_eq!(report.usable_hosts, 254);
        assert_eq!(report.total_addresses, 256);
        assert!(report.is_private);
        assert!(!report.is_loopback);
        assert_eq!(report.class, AddressClass::C);
        assert_eq!(report.address_binary, "11000000.10101000.00000001.00000000");
        assert_eq!(report.mask_binary, "11111111.11111111.11111111.00000000");
        assert_eq!(report.network_binary, "11000000.10101000.00000001.00000000");
    }

    #[test]
    fn test_report_prefix_zero() {
        let report = parse_subnet("8.8.8.8/0").unwrap();
        assert_eq!(report.mask, Ipv4Address::UNSPECIFIED);
        assert_eq!(report.network.to_string(), "0.0.0.0");
        assert_eq!(report.broadcast.to_string(), "255.255.255.255");
        assert_eq!(report.total_addresses, 1u64 << 32);
        // /0 still reserves network and broadcast
        assert_eq!(report.usable_hosts, (1u64 << 32) - 2);
    }

    #[test]
    fn test_report_loopback() {
        let report = parse_subnet("127.0.0.1/8").unwrap();
        assert!(report.is_loopback);
        assert!(!report.is_private);
        assert_eq!(report.class, AddressClass::A);
    }

    #[test]
    fn test_classification_uses_address_not_network() {
        // network 128.0.0.0 is class B, the address itself is class C
        let report = parse_subnet("192.168.1.1/1").unwrap();
        assert_eq!(report.network.to_string(), "128.0.0.0");
        assert_eq!(report.class, AddressClass::C);
        assert!(report.is_private);
    }

    #[test]
    fn test_json_shape() {
        let report = parse_subnet("192.168.0.1/30").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["address"], "192.168.0.1");
        assert_eq!(json["prefix"], 30);
        assert_eq!(json["network"], "192.168.0.0");
        assert_eq!(json["broadcast"], "192.168.0.3");
        assert_eq!(json["usable_hosts"], 2);
        assert_eq!(json["class"], "C");
        assert_eq!(json["is_private"], true);
    }

    #[test]
    fn test_errors_pass_through() {
        assert!(matches!(
            parse_subnet("10.0.0.1"),
            Err(ParseError::InvalidCidrFormat { .. })
        ));
        assert!(matches!(
            parse_subnet("10.0.0.1/24/8"),
            Err(ParseError::InvalidCidrFormat { .. })
        ));
        let report = parse_subnet(" 10.0.0.1/24 ").unwrap();
        assert_eq!(report.address.to_string(), "10.0.0.1");
        assert_eq!(report.prefix.get(), 24);
    }
}
