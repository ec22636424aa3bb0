//! Subnet arithmetic on validated addresses.
//!
//! Everything here is unsigned 32-bit bit-twiddling, except the address
//! counts which need u64 to hold 2^32 for a /0.

use super::{get_cidr_mask, Ipv4Address, PrefixLength};

/// Largest prefix that still reserves a network and a broadcast address.
/// A /31 is point-to-point and a /32 is a single host.
pub const MAX_RESERVING_PREFIX: u8 = 30;

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Address, prefix: PrefixLength) -> Ipv4Address {
    Ipv4Address::from_bits(addr.to_bits() & get_cidr_mask(prefix))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Address, prefix: PrefixLength) -> Ipv4Address {
    let mask = get_cidr_mask(prefix);
    let network_bits = addr.to_bits() & mask;
    Ipv4Address::from_bits(network_bits | !mask)
}

fn reserves_edges(prefix: PrefixLength) -> bool {
    prefix.get() <= MAX_RESERVING_PREFIX
}

/// First usable host: the address after the network address, or the network
/// address itself for /31 and /32.
pub fn first_host(addr: Ipv4Address, prefix: PrefixLength) -> Ipv4Address {
    let network = network_addr(addr, prefix);
    if reserves_edges(prefix) {
        // network has at least two host bits clear, +1 cannot carry out
        Ipv4Address::from_bits(network.to_bits() + 1)
    } else {
        network
    }
}

/// Last usable host: the address before the broadcast address, or the
/// broadcast address itself for /31 and /32.
pub fn last_host(addr: Ipv4Address, prefix: PrefixLength) -> Ipv4Address {
    let broadcast = broadcast_addr(addr, prefix);
    if reserves_edges(prefix) {
        Ipv4Address::from_bits(broadcast.to_bits() - 1)
    } else {
        broadcast
    }
}

/// Number of addresses covered by a prefix: `2^(32 - prefix)`.
pub fn num_addresses(prefix: PrefixLength) -> u64 {
    1u64 << prefix.host_bits()
}

/// Number of assignable host addresses.
///
/// Network and broadcast are excluded up to /30; /31 and /32 have no
/// reserved addresses.
pub fn num_usable_hosts(prefix: PrefixLength) -> u64 {
    let total = num_addresses(prefix);
    if reserves_edges(prefix) {
        total - 2
    } else {
        total
    }
}
