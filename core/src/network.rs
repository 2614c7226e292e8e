//! Network-related predicates and coercers.
//!
//! Interface and gateway checks query the live networking stack on every
//! call, so their answers follow configuration changes.

use std::net::IpAddr;
use std::sync::LazyLock;

use argtype_common::Value;
use argtype_common::error::Result;
use argtype_common::network::gateway::{self, Gateway};
use argtype_common::network::interface::{self, InterfaceAddress};
use argtype_common::network::ip::{self, IpFamily};
use argtype_common::network::mac;
use argtype_common::network::range::Addresses;
use argtype_common::utils::list::to_elements;
use pnet::datalink::NetworkInterface;
use pnet::util::MacAddr;
use regex::Regex;

use crate::invalid;

const DOMAIN_MAX_LEN: usize = 253;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$").unwrap()
});
static EMAIL_LOCAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$").unwrap()
});

// ------------------------------------------------------------------------------------------------
// Domains and emails
// ------------------------------------------------------------------------------------------------

fn check_domain(s: &str) -> bool {
    s.len() <= DOMAIN_MAX_LEN && DOMAIN.is_match(s)
}

fn check_email(s: &str) -> bool {
    s.rsplit_once('@').is_some_and(|(local, domain)| {
        local.len() <= EMAIL_LOCAL_MAX_LEN && EMAIL_LOCAL.is_match(local) && check_domain(domain)
    })
}

pub fn is_domain(value: impl Into<Value>) -> bool {
    let value: Value = value.into();
    value.as_str().is_some_and(check_domain)
}

pub fn is_email(value: impl Into<Value>) -> bool {
    let value: Value = value.into();
    value.as_str().is_some_and(check_email)
}

pub fn domain_name(value: impl Into<Value>) -> Result<String> {
    let value: Value = value.into();
    match value.as_str() {
        Some(s) if check_domain(s) => Ok(s.to_string()),
        _ => Err(invalid("a domain name", &value)),
    }
}

/// `local@domain` where the domain part is a valid domain name.
pub fn email_address(value: impl Into<Value>) -> Result<String> {
    let value: Value = value.into();
    match value.as_str() {
        Some(s) if check_email(s) => Ok(s.to_string()),
        _ => Err(invalid("an email address", &value)),
    }
}

// ------------------------------------------------------------------------------------------------
// IP addresses
// ------------------------------------------------------------------------------------------------

fn address(value: impl Into<Value>, family: IpFamily) -> Result<IpAddr> {
    let value: Value = value.into();
    ip::parse_address(&value, family)
        .ok_or_else(|| invalid(&format!("an {}", family.noun()), &value))
}

pub fn is_ip(value: impl Into<Value>) -> bool {
    ip::parse_address(&value.into(), IpFamily::Any).is_some()
}

pub fn is_ipv4(value: impl Into<Value>) -> bool {
    ip::parse_address(&value.into(), IpFamily::V4).is_some()
}

pub fn is_ipv6(value: impl Into<Value>) -> bool {
    ip::parse_address(&value.into(), IpFamily::V6).is_some()
}

/// A textual or integer address; integers up to 2^32 - 1 are IPv4.
pub fn ip_address(value: impl Into<Value>) -> Result<IpAddr> {
    address(value, IpFamily::Any)
}

pub fn ipv4_address(value: impl Into<Value>) -> Result<IpAddr> {
    address(value, IpFamily::V4)
}

pub fn ipv6_address(value: impl Into<Value>) -> Result<IpAddr> {
    address(value, IpFamily::V6)
}

fn network(value: impl Into<Value>, family: IpFamily) -> Result<Addresses> {
    let value: Value = value.into();
    let network = ip::parse_network(&value, family)
        .ok_or_else(|| invalid(&format!("an {} network", family.noun()), &value))?;
    Ok(Addresses::new(vec![network]))
}

/// Expands a single CIDR network into its member addresses, lazily.
pub fn ip_address_network(value: impl Into<Value>) -> Result<Addresses> {
    network(value, IpFamily::Any)
}

pub fn ipv4_address_network(value: impl Into<Value>) -> Result<Addresses> {
    network(value, IpFamily::V4)
}

pub fn ipv6_address_network(value: impl Into<Value>) -> Result<Addresses> {
    network(value, IpFamily::V6)
}

fn address_list(value: impl Into<Value>, family: IpFamily, filtered: bool) -> Result<Addresses> {
    let value: Value = value.into();
    let expected = format!("a list of {}es or networks", family.noun());
    let elements = to_elements(&value).map_err(|_| invalid(&expected, &value))?;

    let mut networks = Vec::with_capacity(elements.len());
    for element in &elements {
        match ip::parse_network(element, family) {
            Some(network) => networks.push(network),
            None if filtered => continue,
            None => return Err(invalid(&expected, &value)),
        }
    }
    Ok(Addresses::new(networks))
}

/// Addresses and networks from a string, a list string or a collection.
///
/// Every element is parsed up front; networks are expanded lazily.
pub fn ip_address_list(value: impl Into<Value>) -> Result<Addresses> {
    address_list(value, IpFamily::Any, false)
}

pub fn ipv4_address_list(value: impl Into<Value>) -> Result<Addresses> {
    address_list(value, IpFamily::V4, false)
}

pub fn ipv6_address_list(value: impl Into<Value>) -> Result<Addresses> {
    address_list(value, IpFamily::V6, false)
}

/// Like [`ip_address_list`], but unparsable elements are dropped.
pub fn ip_address_filtered_list(value: impl Into<Value>) -> Result<Addresses> {
    address_list(value, IpFamily::Any, true)
}

pub fn ipv4_address_filtered_list(value: impl Into<Value>) -> Result<Addresses> {
    address_list(value, IpFamily::V4, true)
}

pub fn ipv6_address_filtered_list(value: impl Into<Value>) -> Result<Addresses> {
    address_list(value, IpFamily::V6, true)
}

// ------------------------------------------------------------------------------------------------
// MAC addresses
// ------------------------------------------------------------------------------------------------

pub fn is_mac(value: impl Into<Value>) -> bool {
    mac::parse_mac(&value.into()).is_some()
}

pub fn mac_address(value: impl Into<Value>) -> Result<MacAddr> {
    let value: Value = value.into();
    mac::parse_mac(&value).ok_or_else(|| invalid("a MAC address", &value))
}

// ------------------------------------------------------------------------------------------------
// Local interfaces
// ------------------------------------------------------------------------------------------------

fn lookup_interface(interfaces: &[NetworkInterface], value: &Value) -> Option<String> {
    let name = value.as_str()?;
    interface::find_interface(interfaces, name).map(|iface| iface.name.clone())
}

pub fn is_netif(value: impl Into<Value>) -> bool {
    lookup_interface(&interface::interfaces(), &value.into()).is_some()
}

/// The name of an interface present on this host.
pub fn network_interface(value: impl Into<Value>) -> Result<String> {
    let value: Value = value.into();
    lookup_interface(&interface::interfaces(), &value)
        .ok_or_else(|| invalid("a local network interface", &value))
}

pub fn is_ifaddr(value: impl Into<Value>) -> bool {
    interface::find_address(&interface::interfaces(), &value.into()).is_some()
}

/// An IP or MAC address currently bound to a local interface.
pub fn interface_address(value: impl Into<Value>) -> Result<InterfaceAddress> {
    let value: Value = value.into();
    interface::find_address(&interface::interfaces(), &value)
        .ok_or_else(|| invalid("an address of a local interface", &value))
}

fn interface_addresses(value: impl Into<Value>, filtered: bool) -> Result<Vec<InterfaceAddress>> {
    let value: Value = value.into();
    let expected = "a list of addresses of local interfaces";
    let elements = to_elements(&value).map_err(|_| invalid(expected, &value))?;
    let interfaces = interface::interfaces();

    let mut addresses = Vec::with_capacity(elements.len());
    for element in &elements {
        match interface::find_address(&interfaces, element) {
            Some(addr) => addresses.push(addr),
            None if filtered => continue,
            None => return Err(invalid(expected, &value)),
        }
    }
    Ok(addresses)
}

pub fn interface_address_list(value: impl Into<Value>) -> Result<Vec<InterfaceAddress>> {
    interface_addresses(value, false)
}

pub fn interface_address_filtered_list(value: impl Into<Value>) -> Result<Vec<InterfaceAddress>> {
    interface_addresses(value, true)
}

// ------------------------------------------------------------------------------------------------
// Gateways
// ------------------------------------------------------------------------------------------------

fn lookup_gateway(gateways: &[Gateway], value: &Value) -> Option<IpAddr> {
    let addr = ip::parse_address(value, IpFamily::Any)?;
    gateways.iter().any(|gw| gw.addr == addr).then_some(addr)
}

pub fn is_gwaddr(value: impl Into<Value>) -> bool {
    lookup_gateway(&gateway::gateways(), &value.into()).is_some()
}

pub fn is_defgw(value: impl Into<Value>) -> bool {
    lookup_gateway(&gateway::default_gateways(), &value.into()).is_some()
}

/// The address of a gateway of any route in the routing table.
pub fn gateway_address(value: impl Into<Value>) -> Result<IpAddr> {
    let value: Value = value.into();
    lookup_gateway(&gateway::gateways(), &value).ok_or_else(|| invalid("a gateway address", &value))
}

/// The address of a default-route gateway.
pub fn default_gateway_address(value: impl Into<Value>) -> Result<IpAddr> {
    let value: Value = value.into();
    lookup_gateway(&gateway::default_gateways(), &value)
        .ok_or_else(|| invalid("a default gateway address", &value))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use argtype_common::utils::interface::NetworkInterfaceExtension;
    use std::net::Ipv4Addr;

    const GOOD: [&str; 3] = ["1.2.3.4", "fe00::", "127.0.0.0/30"];
    const BAD1: [&str; 3] = ["1.2.3.300", "fe00::", "127.0.0.0/30"];
    const BAD2: [&str; 3] = ["1.2.3.4", "fe00::", "127.0.0.0/40"];

    #[test]
    fn domains() {
        assert_eq!(domain_name("example.com").unwrap(), "example.com");
        assert!(domain_name("sub-1.example.co.uk").is_ok());
        assert!(domain_name("bad_name").is_err());
        assert!(domain_name("-bad.com").is_err());
        assert!(domain_name("example.c0m").is_err());
        assert!(domain_name(format!("{}.com", "a".repeat(64))).is_err());
        assert!(is_domain("example.com"));
        assert!(!is_domain(1));
    }

    #[test]
    fn emails() {
        assert!(is_email("test@example.com"));
        assert!(is_email("first.last+tag@example.com"));
        assert!(!is_email("example.com"));
        assert!(email_address("bad_email").is_err());
        assert!(email_address("user@bad_name").is_err());
        assert!(email_address(".user@example.com").is_err());
        assert_eq!(email_address("test@example.com").unwrap(), "test@example.com");
    }

    #[test]
    fn single_addresses() {
        assert_eq!(ip_address("127.0.0.1").unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(ip_address("12345").unwrap().is_ipv4());
        assert!(ip_address("12345678900").unwrap().is_ipv6());
        assert!(ipv4_address("12345678900").is_err());
        assert!(ip_address("fe00::").unwrap().is_ipv6());
        assert!(ip_address("0.0.0.300").is_err());
        assert!(ipv4_address("0.0.0.300").is_err());
        assert!(ip_address("fe00:::").is_err());
        assert!(ipv6_address("fe00:::").is_err());
    }

    #[test]
    fn address_predicates() {
        assert!(is_ip("1234"));
        assert!(is_ipv4("1234"));
        assert!(is_ipv6("12345678900"));
        assert!(!is_ipv4("12345678900"));
        assert!(!is_ipv6("1234567890123456789012345678901234567890123"));
        assert!(is_ipv6("123456789012345678901234567890123456789"));
        assert!(is_ip("127.0.0.1"));
        assert!(is_ipv4("127.0.0.1"));
        assert!(is_ip("fe00::"));
        assert!(is_ipv6("fe00::"));
        assert!(!is_ip(vec!["127.0.0.1"]));
    }

    #[test]
    fn network_expansion() {
        let addresses: Vec<IpAddr> = ip_address_network("192.168.1.0/30").unwrap().collect();
        assert_eq!(addresses.len(), 4);
        assert_eq!(addresses[0], IpAddr::V4(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(addresses[3], IpAddr::V4(Ipv4Addr::new(192, 168, 1, 3)));
        assert!(addresses.iter().all(|addr| is_ip(addr.to_string())));

        assert!(ip_address_network("192.168.1.0.0/24").is_err());
        assert!(ipv6_address_network("192.168.1.0/30").is_err());
        assert_eq!(ipv4_address_network("10.0.0.7").unwrap().count(), 1);
    }

    #[test]
    fn huge_networks_are_lazy() {
        let mut addresses = ipv6_address_network("::/0").unwrap();
        assert_eq!(addresses.next(), "::".parse().ok());
    }

    #[test]
    fn address_lists() {
        let addresses: Vec<IpAddr> = ip_address_list(GOOD.to_vec()).unwrap().collect();
        assert_eq!(addresses.len(), 6);
        assert!(addresses.iter().all(|addr| is_ip(addr.to_string())));

        assert!(ip_address_list("192.168.1.0/30").is_ok());
        assert_eq!(ip_address_list("1.2.3.4, fe00::").unwrap().count(), 2);
        assert!(ip_address_list("192.168.1.0.0/24").is_err());
        assert!(ip_address_list(BAD1.to_vec()).is_err());
        assert!(ip_address_list(BAD2.to_vec()).is_err());
        assert!(ipv4_address_list(BAD1.to_vec()).is_err());
        assert!(ipv6_address_list(BAD2.to_vec()).is_err());
        assert!(ipv4_address_list(GOOD.to_vec()).is_err());
        assert!(ip_address_list(12345).is_err());
    }

    #[test]
    fn filtered_address_lists() {
        let kept: Vec<IpAddr> = ip_address_filtered_list(vec!["1.2.3.300", "fe00::"])
            .unwrap()
            .collect();
        assert_eq!(kept, vec!["fe00::".parse::<IpAddr>().unwrap()]);

        assert_eq!(ip_address_filtered_list(BAD1.to_vec()).unwrap().count(), 5);
        assert_eq!(ip_address_filtered_list(BAD2.to_vec()).unwrap().count(), 2);
        assert!(ipv4_address_filtered_list(BAD1.to_vec()).unwrap().all(|addr| addr.is_ipv4()));
        assert!(ipv6_address_filtered_list(BAD2.to_vec()).unwrap().all(|addr| addr.is_ipv6()));
        assert_eq!(ip_address_filtered_list("[1.2.3.300]").unwrap().count(), 0);
        assert!(ip_address_filtered_list(12345).is_err());
    }

    #[test]
    fn mac_addresses() {
        assert!(mac_address(12345).is_ok());
        assert_eq!(
            mac_address("01:02:03:04:05:06").unwrap(),
            MacAddr::new(1, 2, 3, 4, 5, 6)
        );
        assert!(mac_address("01:02:03-04:05:06").is_err());
        assert!(is_mac("12345"));
        assert!(is_mac("01-02-03-04-05-06"));
        assert!(!is_mac("01:02:03:04:05"));
        assert!(!is_mac("01|02|03|04|05|06"));
    }

    #[test]
    fn lookups_against_fixed_state() {
        let gateways = vec![Gateway {
            addr: "192.168.0.1".parse().unwrap(),
            interface: Some("eth0".to_string()),
            is_default: true,
        }];
        assert!(lookup_gateway(&gateways, &Value::from("192.168.0.1")).is_some());
        assert!(lookup_gateway(&gateways, &Value::from("192.168.0.2")).is_none());
        let bogus = Value::from("THIS_GATEWAY_ADDRESS_IS_NOT_VALID");
        assert!(lookup_gateway(&gateways, &bogus).is_none());
        assert!(lookup_interface(&[], &Value::from("eth0")).is_none());
    }

    #[test]
    fn live_interfaces() {
        let interfaces = interface::interfaces();
        let Some(good) = interfaces.first() else {
            eprintln!("WARNING: no network interface found, skipping");
            return;
        };
        let bad = "THIS_INTERFACE_DOES_NOT_EXIST";

        assert!(is_netif(good.name.as_str()));
        assert_eq!(network_interface(good.name.as_str()).unwrap(), good.name);
        assert!(!is_netif(bad));
        assert!(network_interface(bad).is_err());

        assert!(interface_address(bad).is_err());
        assert!(interface_address_list(vec![bad]).is_err());
        assert!(interface_address_filtered_list(vec![bad]).unwrap().is_empty());

        let bound = interfaces
            .iter()
            .flat_map(|iface| iface.ip_addrs())
            .next();
        if let Some(addr) = bound {
            assert!(is_ifaddr(addr.to_string()));
            assert_eq!(interface_address(addr.to_string()).unwrap(), InterfaceAddress::Ip(addr));
            assert_eq!(interface_address_list(vec![addr.to_string()]).unwrap().len(), 1);
        }
    }

    #[test]
    fn live_gateways() {
        let bad = "THIS_GATEWAY_ADDRESS_IS_NOT_VALID";
        assert!(gateway_address(bad).is_err());
        assert!(default_gateway_address(bad).is_err());

        if let Some(gw) = gateway::default_gateways().first() {
            let addr = gw.addr.to_string();
            assert!(gateway_address(addr.as_str()).is_ok());
            assert!(default_gateway_address(addr.as_str()).is_ok());
            assert!(is_defgw(addr.as_str()));
        }
    }
}
