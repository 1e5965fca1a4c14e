//! Outbound adapters implementing the domain store ports.

pub mod memory;
