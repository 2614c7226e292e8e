//! # Local Interfaces
//!
//! Live view of the interfaces known to the networking stack. Nothing is
//! cached: every call asks the OS again.

use std::fmt;
use std::net::IpAddr;

use pnet::datalink::{self, NetworkInterface};
use pnet::util::MacAddr;
use tracing::trace;

use crate::network::ip::{self, IpFamily};
use crate::network::mac;
use crate::utils::interface::NetworkInterfaceExtension;
use crate::value::Value;

/// An address bound to a local interface: one of its IPs or its MAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceAddress {
    Ip(IpAddr),
    Mac(MacAddr),
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceAddress::Ip(addr) => write!(f, "{addr}"),
            InterfaceAddress::Mac(mac) => write!(f, "{mac}"),
        }
    }
}

/// Queries the interfaces currently present on this host.
pub fn interfaces() -> Vec<NetworkInterface> {
    let interfaces = datalink::interfaces();
    trace!("Found {} network interface(s)", interfaces.len());
    interfaces
}

pub fn find_interface<'a>(
    interfaces: &'a [NetworkInterface],
    name: &str,
) -> Option<&'a NetworkInterface> {
    interfaces.iter().find(|iface| iface.name == name)
}

/// Looks up `value` among the addresses bound to `interfaces`.
///
/// IPs are tried first, then MACs.
pub fn find_address(interfaces: &[NetworkInterface], value: &Value) -> Option<InterfaceAddress> {
    if let Some(addr) = ip::parse_address(value, IpFamily::Any) {
        if interfaces.iter().any(|iface| iface.has_ip(addr)) {
            return Some(InterfaceAddress::Ip(addr));
        }
    }
    let mac = mac::parse_mac(value)?;
    interfaces
        .iter()
        .any(|iface| iface.has_mac(mac))
        .then_some(InterfaceAddress::Mac(mac))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
