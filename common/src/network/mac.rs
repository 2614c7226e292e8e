use std::sync::LazyLock;

use pnet::util::MacAddr;
use regex::Regex;

use crate::value::Value;

const MAC_MAX: u64 = 0xFFFF_FFFF_FFFF;

static COLON_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}$").unwrap());
static DASH_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5}$").unwrap());
static CISCO_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{4}(?:\.[0-9A-Fa-f]{4}){2}$").unwrap());
static BARE_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{12}$").unwrap());

/// Parses a MAC address from its textual or integer form.
///
/// Accepted notations: `01:02:03:04:05:06`, `01-02-03-04-05-06`,
/// `0102.0304.0506`, `010203040506` (always read as hex), or a decimal
/// integer up to 2^48 - 1. Mixed separators are rejected.
pub fn parse_mac(value: &Value) -> Option<MacAddr> {
    match value {
        Value::Int(n) => from_integer(u64::try_from(*n).ok()?),
        Value::Str(s) => parse_text(s.trim()),
        _ => None,
    }
}

fn parse_text(s: &str) -> Option<MacAddr> {
    let is_notation = [&COLON_NOTATION, &DASH_NOTATION, &CISCO_NOTATION, &BARE_NOTATION]
        .iter()
        .any(|re| re.is_match(s));

    if is_notation {
        let digits: String = s.chars().filter(char::is_ascii_hexdigit).collect();
        return from_integer(u64::from_str_radix(&digits, 16).ok()?);
    }
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return from_integer(s.parse::<u64>().ok()?);
    }
    None
}

fn from_integer(n: u64) -> Option<MacAddr> {
    if n > MAC_MAX {
        return None;
    }
    let [_, _, a, b, c, d, e, f] = n.to_be_bytes();
    Some(MacAddr::new(a, b, c, d, e, f))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
