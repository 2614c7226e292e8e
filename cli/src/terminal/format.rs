use crate::terminal::colors;
use argtype_core::{Converted, InterfaceAddress};
use colored::*;
use pnet::ipnetwork::IpNetwork;
use pnet::util::MacAddr;
use std::net::{IpAddr, Ipv6Addr};

/// Caps how many addresses of an expanded network get printed.
pub const MAX_LISTED: usize = 256;

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

pub fn ip_to_key_value_pair(ip: &IpAddr) -> (String, ColoredString) {
    match ip {
        IpAddr::V4(ipv4_addr) => {
            let value = ipv4_addr.to_string().color(colors::IPV4_ADDR);
            (String::from("IPv4"), value)
        }
        IpAddr::V6(ipv6_addr) => {
            let ipv6_type = ipv6_to_type_str(ipv6_addr);
            let value = ipv6_addr.to_string().color(colors::IPV6_ADDR);
            (String::from(ipv6_type), value)
        }
    }
}

pub fn mac_to_key_value_pair(mac: &MacAddr) -> (String, ColoredString) {
    ("MAC".to_string(), mac.to_string().color(colors::MAC_ADDR))
}

pub fn net_to_key_value_pair(ip_network: &IpNetwork) -> (String, ColoredString) {
    let (key, addr_color, prefix_color) = match ip_network {
        IpNetwork::V4(_) => ("IPv4", colors::IPV4_ADDR, colors::IPV4_PREFIX),
        IpNetwork::V6(net) => (ipv6_to_type_str(&net.ip()), colors::IPV6_ADDR, colors::IPV6_PREFIX),
    };
    let address: ColoredString = ip_network.ip().to_string().color(addr_color);
    let prefix: ColoredString = ip_network.prefix().to_string().color(prefix_color);
    let value: ColoredString = format!("{address}/{prefix}").color(colors::SEPARATOR);
    (key.to_string(), value)
}

fn interface_address_pair(addr: &InterfaceAddress) -> (String, ColoredString) {
    match addr {
        InterfaceAddress::Ip(ip) => ip_to_key_value_pair(ip),
        InterfaceAddress::Mac(mac) => mac_to_key_value_pair(mac),
    }
}

fn plain(key: &str, value: impl ToString) -> (String, ColoredString) {
    (key.to_string(), value.to_string().color(colors::TEXT_DEFAULT))
}

/// Lays out a converted value as tree rows.
pub fn converted_to_key_value_pairs(converted: &Converted) -> Vec<(String, ColoredString)> {
    match converted {
        Converted::Path(path) => vec![plain("Path", path.display())],
        Converted::Paths(paths) => paths.iter().map(|path| plain("Path", path.display())).collect(),
        Converted::Int(n) => vec![plain("Int", n)],
        Converted::Ints(ints) => ints.iter().map(|n| plain("Int", n)).collect(),
        Converted::Text(text) => vec![plain("Text", text)],
        Converted::Ip(ip) => vec![ip_to_key_value_pair(ip)],
        Converted::Addresses(addresses) => {
            let mut pairs: Vec<(String, ColoredString)> = addresses
                .clone()
                .take(MAX_LISTED + 1)
                .map(|ip| ip_to_key_value_pair(&ip))
                .collect();
            if pairs.len() > MAX_LISTED {
                pairs.truncate(MAX_LISTED);
                pairs.push(("...".to_string(), "more not shown".color(colors::SEPARATOR)));
            }
            pairs
        }
        Converted::Mac(mac) => vec![mac_to_key_value_pair(mac)],
        Converted::Port(port) => vec![plain("Port", port)],
        Converted::Ports(selection) => vec![plain("Ports", selection)],
        Converted::InterfaceAddress(addr) => vec![interface_address_pair(addr)],
        Converted::InterfaceAddresses(addrs) => addrs.iter().map(interface_address_pair).collect(),
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
