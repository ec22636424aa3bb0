//! Domain models for subnet analysis.
//!
//! This module contains the value types the pipeline passes around:
//! - [`Ipv4Address`] and [`PrefixLength`] - validated address and prefix
//! - [`Subnet`] - address with prefix, derived ranges computed on demand
//! - [`AddressClass`] - legacy address class A-E
//! - [`arithmetic`] - network, broadcast, host range and counts

pub mod arithmetic;
mod class;
mod ipv4;
mod subnet;

// Re-export public types
pub use class::AddressClass;
pub use ipv4::{get_cidr_mask, Ipv4Address, PrefixLength, MAX_LENGTH};
pub use subnet::Subnet;
