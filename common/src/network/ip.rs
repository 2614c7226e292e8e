//! # IP Address Parsing
//!
//! Addresses come in textual form (`127.0.0.1`, `fe00::`) or as integers,
//! either native or as decimal strings (`"12345"` is `0.0.48.57`).
//! Networks are written in CIDR notation; a bare address is a host network.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::IpNetwork;

use crate::value::Value;

/// Which address family a checker admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    Any,
    V4,
    V6,
}

impl IpFamily {
    pub fn admits(self, addr: IpAddr) -> bool {
        match self {
            IpFamily::Any => true,
            IpFamily::V4 => addr.is_ipv4(),
            IpFamily::V6 => addr.is_ipv6(),
        }
    }

    /// Human-readable noun used in error messages.
    pub fn noun(self) -> &'static str {
        match self {
            IpFamily::Any => "IP address",
            IpFamily::V4 => "IPv4 address",
            IpFamily::V6 => "IPv6 address",
        }
    }

    fn max_prefix(addr: IpAddr) -> u8 {
        if addr.is_ipv4() { 32 } else { 128 }
    }
}

/// Parses a single address of the given family.
pub fn parse_address(value: &Value, family: IpFamily) -> Option<IpAddr> {
    let addr = match value {
        Value::Int(n) => from_integer(u128::try_from(*n).ok()?, family)?,
        Value::Str(s) => parse_text(s.trim(), family)?,
        _ => return None,
    };
    family.admits(addr).then_some(addr)
}

/// Parses a CIDR network (or a bare address as its host network).
pub fn parse_network(value: &Value, family: IpFamily) -> Option<IpNetwork> {
    let Some((addr_str, prefix_str)) = value.as_str().and_then(|s| s.trim().split_once('/')) else {
        let addr = parse_address(value, family)?;
        return IpNetwork::new(addr, IpFamily::max_prefix(addr)).ok();
    };

    let addr = addr_str.parse::<IpAddr>().ok()?;
    if !family.admits(addr) {
        return None;
    }
    let prefix = prefix_str.parse::<u8>().ok()?;

    IpNetwork::new(addr, prefix).ok()
}

fn parse_text(s: &str, family: IpFamily) -> Option<IpAddr> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return from_integer(s.parse::<u128>().ok()?, family);
    }
    // Scoped link-local addresses ("fe80::1%eth0") keep only the address part.
    let s = s.split_once('%').map_or(s, |(addr, _)| addr);
    s.parse::<IpAddr>().ok()
}

/// Maps an integer to an address.
///
/// Anything that fits in 32 bits is IPv4 unless IPv6 is requested.
fn from_integer(n: u128, family: IpFamily) -> Option<IpAddr> {
    if family == IpFamily::V6 {
        return Some(IpAddr::V6(Ipv6Addr::from(n)));
    }
    match u32::try_from(n) {
        Ok(v4) => Some(IpAddr::V4(Ipv4Addr::from(v4))),
        Err(_) if family == IpFamily::Any => Some(IpAddr::V6(Ipv6Addr::from(n))),
        Err(_) => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
