//! Address classification: legacy class, RFC1918 private and loopback ranges.
//!
//! These look only at the address, never at the prefix.

use crate::models::{AddressClass, Ipv4Address};

/// Inclusive address interval.
type Span = (Ipv4Address, Ipv4Address);

const PRIVATE_RANGES: [Span; 3] = [
    (
        Ipv4Address::from_octets(10, 0, 0, 0),
        Ipv4Address::from_octets(10, 255, 255, 255),
    ),
    (
        Ipv4Address::from_octets(172, 16, 0, 0),
        Ipv4Address::from_octets(172, 31, 255, 255),
    ),
    (
        Ipv4Address::from_octets(192, 168, 0, 0),
        Ipv4Address::from_octets(192, 168, 255, 255),
    ),
];

const LOOPBACK_RANGE: Span = (
    Ipv4Address::from_octets(127, 0, 0, 0),
    Ipv4Address::from_octets(127, 255, 255, 255),
);

// Lower bound of each class, highest first.
const CLASS_FLOORS: [(Ipv4Address, AddressClass); 4] = [
    (Ipv4Address::from_octets(240, 0, 0, 0), AddressClass::E),
    (Ipv4Address::from_octets(224, 0, 0, 0), AddressClass::D),
    (Ipv4Address::from_octets(192, 0, 0, 0), AddressClass::C),
    (Ipv4Address::from_octets(128, 0, 0, 0), AddressClass::B),
];

fn in_span(addr: Ipv4Address, (lo, hi): Span) -> bool {
    lo <= addr && addr <= hi
}

/// Legacy class of an address. Anything below 128.0.0.0 is class A,
/// including 0.0.0.0/8 and the loopback block.
pub fn address_class(addr: Ipv4Address) -> AddressClass {
    CLASS_FLOORS
        .iter()
        .find(|(floor, _)| addr >= *floor)
        .map(|(_, class)| *class)
        .unwrap_or(AddressClass::A)
}

/// True for 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16.
pub fn is_private(addr: Ipv4Address) -> bool {
    PRIVATE_RANGES.iter().any(|span| in_span(addr, *span))
}

/// True for 127.0.0.0/8.
pub fn is_loopback(addr: Ipv4Address) -> bool {
    in_span(addr, LOOPBACK_RANGE)
}
