//! # Routing Gateways
//!
//! Reads the gateways out of the host routing table. On Linux the table
//! comes from `ip route`, on macOS from `netstat -rn`. Failing to read it is
//! not an error for callers: they just see no gateways.

use std::net::IpAddr;
use std::process::Command;

use tracing::{debug, trace};

/// A next hop taken from the routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    pub addr: IpAddr,
    pub interface: Option<String>,
    /// The route this gateway serves is a default route.
    pub is_default: bool,
}

/// Queries every gateway of the host routing table, IPv4 and IPv6.
pub fn gateways() -> Vec<Gateway> {
    match route_table() {
        Ok(gateways) => {
            trace!("Found {} gateway(s)", gateways.len());
            gateways
        }
        Err(e) => {
            debug!("Could not read the routing table: {e}");
            Vec::new()
        }
    }
}

pub fn default_gateways() -> Vec<Gateway> {
    gateways().into_iter().filter(|gw| gw.is_default).collect()
}

fn run(program: &str, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new(program).args(args).output()?;
    if !output.status.success() {
        anyhow::bail!("{program} exited with {}", output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "linux")]
fn route_table() -> anyhow::Result<Vec<Gateway>> {
    let mut gateways = parse_ip_route(&run("ip", &["-4", "route", "show"])?);
    // IPv6 may be disabled entirely; keep whatever IPv4 gave us.
    match run("ip", &["-6", "route", "show"]) {
        Ok(table) => gateways.extend(parse_ip_route(&table)),
        Err(e) => debug!("Skipping IPv6 routes: {e}"),
    }
    Ok(gateways)
}

#[cfg(target_os = "macos")]
fn route_table() -> anyhow::Result<Vec<Gateway>> {
    Ok(parse_netstat(&run("netstat", &["-rn"])?))
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn route_table() -> anyhow::Result<Vec<Gateway>> {
    anyhow::bail!("reading the routing table is not supported on this platform")
}

fn parse_gateway_addr(s: &str) -> Option<IpAddr> {
    let s = s.split_once('%').map_or(s, |(addr, _)| addr);
    s.parse().ok()
}

/// Parses `ip route show` output.
///
/// Lines look like `default via 192.168.1.1 dev eth0 proto dhcp metric 100`.
/// Routes without a `via` hop are directly connected and carry no gateway.
/// Multipath routes list their hops on indented `nexthop` lines below the
/// destination line.
pub fn parse_ip_route(table: &str) -> Vec<Gateway> {
    let mut gateways = Vec::new();
    let mut destination = "";
    for line in table.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = tokens.first() else {
            continue;
        };
        if first != "nexthop" {
            destination = first;
        }
        let token_after = |key: &str| {
            tokens
                .iter()
                .position(|t| *t == key)
                .and_then(|idx| tokens.get(idx + 1))
                .copied()
        };
        let Some(addr) = token_after("via").and_then(parse_gateway_addr) else {
            continue;
        };
        gateways.push(Gateway {
            addr,
            interface: token_after("dev").map(str::to_string),
            is_default: destination == "default",
        });
    }
    gateways
}

/// Parses `netstat -rn` output.
///
/// Only rows whose gateway column is an IP address count; `link#4` and MAC
/// gateways are on-link routes.
pub fn parse_netstat(table: &str) -> Vec<Gateway> {
    table
        .lines()
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            let (destination, gateway) = (columns.first()?, columns.get(1)?);
            let addr = parse_gateway_addr(gateway)?;
            Some(Gateway {
                addr,
                interface: columns.get(3).map(|s| s.to_string()),
                is_default: *destination == "default" || *destination == "0.0.0.0",
            })
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
