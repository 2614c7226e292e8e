//! # Address Ranges
//!
//! [`Addresses`] walks a list of CIDR networks lazily, one
//! `pnet::ipnetwork` iterator at a time, so `::/0` costs nothing until
//! someone iterates it.

use std::net::{IpAddr, Ipv4Addr};
use std::vec;

use pnet::ipnetwork::{IpNetwork, IpNetworkIterator, Ipv4Network};

/// Splits `0.0.0.0/0` into its two /1 halves.
///
/// `Ipv4Network::iter` sizes the network as a `u32`, which a /0 overflows.
fn walkable(network: IpNetwork) -> Vec<IpNetwork> {
    match network {
        IpNetwork::V4(net) if net.prefix() == 0 => {
            [Ipv4Addr::UNSPECIFIED, Ipv4Addr::new(128, 0, 0, 0)]
                .into_iter()
                .filter_map(|half| Ipv4Network::new(half, 1).ok())
                .map(IpNetwork::V4)
                .collect()
        }
        _ => vec![network],
    }
}

/// Lazy sequence of every address in a list of networks, in order.
#[derive(Debug, Clone)]
pub struct Addresses {
    networks: vec::IntoIter<IpNetwork>,
    current: Option<IpNetworkIterator>,
}

impl Addresses {
    pub fn new(networks: Vec<IpNetwork>) -> Self {
        let networks: Vec<IpNetwork> = networks.into_iter().flat_map(walkable).collect();
        Self {
            networks: networks.into_iter(),
            current: None,
        }
    }
}

impl Iterator for Addresses {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        loop {
            if let Some(addr) = self.current.as_mut().and_then(Iterator::next) {
                return Some(addr);
            }
            self.current = Some(self.networks.next()?.iter());
        }
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
