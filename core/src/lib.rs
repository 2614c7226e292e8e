//! # argtype
//!
//! Type checkers for command-line argument values, in two layers:
//!
//! * **Predicates** (`is_*`) classify a raw value and never fail.
//! * **Coercers** (same names without `is_`) validate a raw value and convert
//!   it into something richer, or return a [`ValidationError`].
//!
//! Collection coercers come with `*_filtered_list` variants that drop the
//! invalid elements instead of failing.
//!
//! Every coercer takes `impl Into<Value>`, so a closure is enough to turn one
//! into a clap value parser:
//!
//! ```
//! let parse_port = |s: &str| argtype_core::port_number(s);
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! ```
//!
//! ## Modules
//! * **[`types`]**: data-type predicates (`is_int`, `is_list`, `is_function`, ...).
//! * **[`format`]**: data-format predicates (`is_hex`, `is_long_opt`, ...).
//! * **[`general`]**: paths and integers.
//! * **[`hash`]**: hex digests.
//! * **[`network`]**: domains, emails, IPs, MACs, interfaces, gateways.
//! * **[`port`]**: port numbers and ranges.
//! * **[`kind`]**: every coercer by name.

pub mod format;
pub mod general;
pub mod hash;
pub mod kind;
pub mod network;
pub mod port;
pub mod types;

use tracing::debug;

pub use argtype_common::error::{Result, ValidationError};
pub use argtype_common::network::interface::InterfaceAddress;
pub use argtype_common::network::range::Addresses;
pub use argtype_common::{Callable, Value};

pub use format::{is_bin, is_hex, is_long_opt, is_short_opt};
pub use general::{
    file_exists, files_filtered_list, files_list, folder_exists, folder_exists_or_create, ints,
    neg_int, neg_ints, pos_int, pos_int_with, pos_ints, pos_ints_with,
};
pub use general::{
    neg_int as negative_int, neg_ints as negative_ints, pos_int as positive_int,
    pos_ints as positive_ints,
};
pub use hash::{
    HashAlgorithm, any_hash, is_hash, is_md5, is_sha1, is_sha224, is_sha256, is_sha512, md5_hash,
    sha1_hash, sha224_hash, sha256_hash, sha512_hash,
};
pub use kind::{Converted, Kind};
pub use network::{
    default_gateway_address, domain_name, email_address, gateway_address, interface_address,
    interface_address_filtered_list, interface_address_list, ip_address,
    ip_address_filtered_list, ip_address_list, ip_address_network, ipv4_address,
    ipv4_address_filtered_list, ipv4_address_list, ipv4_address_network, ipv6_address,
    ipv6_address_filtered_list, ipv6_address_list, ipv6_address_network, is_defgw, is_domain,
    is_email, is_gwaddr, is_ifaddr, is_ip, is_ipv4, is_ipv6, is_mac, is_netif, mac_address,
    network_interface,
};
pub use port::{PortSelection, is_port, is_port_range, port_number, port_number_range};
pub use types::{
    is_dict, is_function, is_int, is_lambda, is_list, is_neg_int, is_pos_int, is_str,
};

/// Logs the rejection and builds the error every coercer returns.
pub(crate) fn invalid(expected: &str, value: &Value) -> ValidationError {
    debug!("Rejected {value}: expected {expected}");
    ValidationError::expected(expected, value)
}
