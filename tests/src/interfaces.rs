#![cfg(test)]
use argtype_common::network::gateway::{parse_ip_route, parse_netstat};
use argtype_common::network::interface::{self, InterfaceAddress};
use argtype_core::Value;
use pnet::datalink::{MacAddr, NetworkInterface};
use std::net::IpAddr;

use super::util::{ni, v4, v6};

/*************************************************************
                 Lookups on a fixed host layout
**************************************************************/

#[test]
fn finds_interfaces_by_exact_name() {
    let interfaces = iface_all();
    assert_eq!(interface::find_interface(&interfaces, "enp9s0"), Some(&enp9s0()));
    assert!(interface::find_interface(&interfaces, "enp9").is_none());
    assert!(interface::find_interface(&interfaces, "ENP9S0").is_none());
}

#[test]
fn finds_bound_ips_on_any_interface() {
    let interfaces = iface_all();
    let lookup = |raw: &str| interface::find_address(&interfaces, &Value::from(raw));

    let ula: IpAddr = "fd12:3456:789a::1".parse().unwrap();
    assert_eq!(lookup("192.168.0.32"), Some(InterfaceAddress::Ip("192.168.0.32".parse().unwrap())));
    assert_eq!(lookup("fd12:3456:789a::1"), Some(InterfaceAddress::Ip(ula)));
    assert_eq!(lookup("127.0.0.1"), Some(InterfaceAddress::Ip("127.0.0.1".parse().unwrap())));
    // Inside the subnet but not bound.
    assert_eq!(lookup("192.168.0.33"), None);
}

#[test]
fn finds_bound_macs_in_every_notation() {
    let interfaces = iface_all();
    let mac = InterfaceAddress::Mac(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46));
    for raw in ["a8:a1:59:13:41:46", "A8-A1-59-13-41-46", "a8a1.5913.4146", "a8a159134146"] {
        assert_eq!(interface::find_address(&interfaces, &Value::from(raw)), Some(mac), "{raw}");
    }
    assert_eq!(
        interface::find_address(&interfaces, &Value::from("de:ad:be:ef:00:01")),
        None
    );
}

#[test]
fn nothing_is_bound_without_interfaces() {
    assert_eq!(interface::find_address(&[], &Value::from("127.0.0.1")), None);
}

/*************************************************************
                      Routing table dumps
**************************************************************/

#[test]
fn linux_default_routes() {
    let table = "\
default via 192.168.0.1 dev enp9s0 proto dhcp src 192.168.0.32 metric 100
default via 10.0.0.1 dev wlan0 proto dhcp metric 600
10.8.0.0/24 via 10.8.0.1 dev tun0
192.168.0.0/24 dev enp9s0 proto kernel scope link src 192.168.0.32 metric 100
";
    let gateways = parse_ip_route(table);
    let defaults: Vec<String> = gateways
        .iter()
        .filter(|gw| gw.is_default)
        .map(|gw| gw.addr.to_string())
        .collect();

    assert_eq!(gateways.len(), 3);
    assert_eq!(defaults, vec!["192.168.0.1", "10.0.0.1"]);
}

#[test]
fn linux_multipath_default_route() {
    let table = "\
default proto static metric 100
	nexthop via 192.168.0.1 dev enp9s0 weight 1
	nexthop via 10.0.0.1 dev wlan0 weight 1
192.168.0.0/24 dev enp9s0 proto kernel scope link src 192.168.0.32 metric 100
";
    let gateways = parse_ip_route(table);
    let defaults: Vec<(String, Option<&str>)> = gateways
        .iter()
        .filter(|gw| gw.is_default)
        .map(|gw| (gw.addr.to_string(), gw.interface.as_deref()))
        .collect();

    assert_eq!(
        defaults,
        vec![
            ("192.168.0.1".to_string(), Some("enp9s0")),
            ("10.0.0.1".to_string(), Some("wlan0")),
        ]
    );
}

#[test]
fn macos_default_routes() {
    let table = "\
Routing tables

Internet:
Destination        Gateway            Flags        Netif Expire
default            192.168.1.1        UGScg          en0
127                127.0.0.1          UCS            lo0
192.168.1          link#6             UCS            en0      !
";
    let gateways = parse_netstat(table);
    assert_eq!(gateways.len(), 2);
    assert!(gateways[0].is_default);
    assert_eq!(gateways[0].interface.as_deref(), Some("en0"));
    assert!(!gateways[1].is_default);
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn iface_all() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), wlan0()]
}

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("2a02:908:8c1:b880::b054", 128),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
    )
}

fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x3c, 0x22, 0xfb, 0x10, 0x20, 0x30)),
        &[v4(10, 0, 0, 23, 24), v6("fd12:3456:789a::1", 64)],
    )
}
