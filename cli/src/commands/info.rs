use argtype_common::network::gateway::{self, Gateway};
use argtype_common::network::interface;
use colored::*;
use pnet::datalink::NetworkInterface;
use tracing::warn;

use crate::terminal::format::{mac_to_key_value_pair, net_to_key_value_pair};
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::colors;

pub fn info() -> anyhow::Result<()> {
    let interfaces = interface::interfaces();
    let gateways = gateway::gateways();

    print_network_interfaces(&interfaces);
    print_gateways(&gateways);

    print::end_of_program();
    Ok(())
}

fn print_interface(interface: &NetworkInterface, idx: usize) {
    print::tree_head(idx, &interface.name);
    let mut key_value_pair: Vec<(String, ColoredString)> =
        interface.ips.iter().map(net_to_key_value_pair).collect();
    if let Some(mac_addr) = interface.mac {
        key_value_pair.push(mac_to_key_value_pair(&mac_addr));
    }
    print::as_tree_one_level(key_value_pair);
}

fn print_network_interfaces(interfaces: &[NetworkInterface]) {
    print::header("network interfaces");
    if interfaces.is_empty() {
        warn!("No network interface found");
        return;
    }
    for (idx, intf) in interfaces.iter().enumerate() {
        print_interface(intf, idx);
        if idx + 1 != interfaces.len() {
            print::print("");
        }
    }
}

fn print_gateways(gateways: &[Gateway]) {
    print::header("gateways");
    if gateways.is_empty() {
        warn!("No gateway found in the routing table");
        return;
    }
    GLOBAL_KEY_WIDTH.set(gateways.iter().map(|gw| gw.addr.to_string().len()).max().unwrap_or(0));
    for gw in gateways {
        let mut details: ColoredString = gw
            .interface
            .as_deref()
            .unwrap_or("?")
            .color(colors::TEXT_DEFAULT);
        if gw.is_default {
            details = format!("{details} {}", "(default)".color(colors::ACCENT)).normal();
        }
        print::aligned_line(&gw.addr.to_string(), details);
    }
}
