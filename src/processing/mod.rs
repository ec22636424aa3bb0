//! Subnet analysis pipeline.
//!
//! This module contains the parse → compute → classify steps:
//! - [`parser`] - CIDR text to validated address and prefix
//! - [`classify`] - legacy class, private and loopback ranges
//! - [`report`] - everything combined into a [`SubnetReport`]

pub mod classify;
mod parser;
mod report;

// Re-export public functions
pub use classify::{address_class, is_loopback, is_private};
pub use parser::{parse_address, parse_cidr, parse_prefix};
pub use report::{parse_subnet, SubnetReport};
