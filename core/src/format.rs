//! Data-format predicates on strings. Non-string values never match.

use std::sync::LazyLock;

use argtype_common::Value;
use regex::Regex;

static BIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[01]+$").unwrap());
static HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:[0-9A-Fa-f]{2})+$").unwrap());
static LONG_OPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--[A-Za-z0-9]+(?:[-_][A-Za-z0-9]+)*$").unwrap());
static SHORT_OPT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-[A-Za-z0-9]$").unwrap());

fn matches(re: &Regex, value: impl Into<Value>) -> bool {
    let value: Value = value.into();
    value.as_str().is_some_and(|s| re.is_match(s))
}

/// Only `0` and `1` characters.
pub fn is_bin(value: impl Into<Value>) -> bool {
    matches(&BIN, value)
}

/// Even-length hexadecimal string.
pub fn is_hex(value: impl Into<Value>) -> bool {
    matches(&HEX, value)
}

/// `--name` option syntax.
pub fn is_long_opt(value: impl Into<Value>) -> bool {
    matches(&LONG_OPT, value)
}

/// `-x` option syntax.
pub fn is_short_opt(value: impl Into<Value>) -> bool {
    matches(&SHORT_OPT, value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
