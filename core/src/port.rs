//! Port numbers and `low-high` port ranges.

use std::fmt;

use argtype_common::Value;
use argtype_common::error::Result;

use crate::invalid;

/// What a port range argument resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSelection {
    Single(u16),
    /// Every port from low to high, inclusive and in order.
    Range(Vec<u16>),
}

impl PortSelection {
    pub fn ports(&self) -> &[u16] {
        match self {
            PortSelection::Single(port) => std::slice::from_ref(port),
            PortSelection::Range(ports) => ports,
        }
    }
}

impl fmt::Display for PortSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ports() {
            [] => Ok(()),
            [port] => write!(f, "{port}"),
            [first, .., last] => write!(f, "{first}-{last}"),
        }
    }
}

fn parse_port(value: &Value) -> Option<u16> {
    value.as_int().and_then(|n| u16::try_from(n).ok())
}

fn parse_range(value: &Value) -> Option<PortSelection> {
    if let Some(port) = parse_port(value) {
        return Some(PortSelection::Single(port));
    }
    let (low, high) = value.as_str()?.trim().split_once('-')?;
    let low = parse_port(&Value::from(low))?;
    let high = parse_port(&Value::from(high))?;
    (low <= high).then(|| PortSelection::Range((low..=high).collect()))
}

pub fn is_port(value: impl Into<Value>) -> bool {
    parse_port(&value.into()).is_some()
}

pub fn is_port_range(value: impl Into<Value>) -> bool {
    parse_range(&value.into()).is_some()
}

/// An integer in `[0, 65535]`.
pub fn port_number(value: impl Into<Value>) -> Result<u16> {
    let value: Value = value.into();
    parse_port(&value).ok_or_else(|| invalid("a port number in [0, 65535]", &value))
}

/// A single port, or a `low-high` range with `low <= high`.
pub fn port_number_range(value: impl Into<Value>) -> Result<PortSelection> {
    let value: Value = value.into();
    parse_range(&value).ok_or_else(|| invalid("a port number or a low-high port range", &value))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
