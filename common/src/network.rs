//! # Network Primitives
//!
//! Parsing of addresses, networks and MACs, plus live queries of the local
//! networking stack (interfaces and routing gateways).

pub mod gateway;
pub mod interface;
pub mod ip;
pub mod mac;
pub mod range;
