//! # Checkers by Name
//!
//! [`Kind`] names every coercer so callers can pick one at runtime, like the
//! CLI does from its `<KIND>` argument. Names are the coercer names in
//! kebab-case (`ip-address-list`, `pos-int`, ...).

use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use argtype_common::Value;
use argtype_common::config::Config;
use argtype_common::error::{Result, ValidationError};
use argtype_common::network::interface::InterfaceAddress;
use argtype_common::network::range::Addresses;
use pnet::util::MacAddr;

use crate::port::PortSelection;
use crate::{general, hash, network, port};

macro_rules! kinds {
    ($($variant:ident => $name:literal,)+) => {
        /// A coercer, selectable by name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Kind {
            $($variant,)+
        }

        impl Kind {
            pub const ALL: &'static [Kind] = &[$(Kind::$variant,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Kind::$variant => $name,)+
                }
            }
        }
    };
}

kinds! {
    FileExists => "file-exists",
    FolderExists => "folder-exists",
    FolderExistsOrCreate => "folder-exists-or-create",
    FilesList => "files-list",
    FilesFilteredList => "files-filtered-list",
    PosInt => "pos-int",
    NegInt => "neg-int",
    Ints => "ints",
    PosInts => "pos-ints",
    NegInts => "neg-ints",
    Md5Hash => "md5-hash",
    Sha1Hash => "sha1-hash",
    Sha224Hash => "sha224-hash",
    Sha256Hash => "sha256-hash",
    Sha512Hash => "sha512-hash",
    AnyHash => "any-hash",
    DomainName => "domain-name",
    EmailAddress => "email-address",
    IpAddress => "ip-address",
    Ipv4Address => "ipv4-address",
    Ipv6Address => "ipv6-address",
    IpAddressNetwork => "ip-address-network",
    Ipv4AddressNetwork => "ipv4-address-network",
    Ipv6AddressNetwork => "ipv6-address-network",
    IpAddressList => "ip-address-list",
    Ipv4AddressList => "ipv4-address-list",
    Ipv6AddressList => "ipv6-address-list",
    IpAddressFilteredList => "ip-address-filtered-list",
    Ipv4AddressFilteredList => "ipv4-address-filtered-list",
    Ipv6AddressFilteredList => "ipv6-address-filtered-list",
    MacAddress => "mac-address",
    NetworkInterface => "network-interface",
    InterfaceAddress => "interface-address",
    InterfaceAddressList => "interface-address-list",
    InterfaceAddressFilteredList => "interface-address-filtered-list",
    GatewayAddress => "gateway-address",
    DefaultGatewayAddress => "default-gateway-address",
    PortNumber => "port-number",
    PortNumberRange => "port-number-range",
}

/// The result of a successful check.
#[derive(Debug, Clone)]
pub enum Converted {
    Path(PathBuf),
    Paths(Vec<PathBuf>),
    Int(i64),
    Ints(Vec<i64>),
    Text(String),
    Ip(IpAddr),
    Addresses(Addresses),
    Mac(MacAddr),
    Port(u16),
    Ports(PortSelection),
    InterfaceAddress(InterfaceAddress),
    InterfaceAddresses(Vec<InterfaceAddress>),
}

impl Kind {
    /// Runs the coercer this kind names.
    ///
    /// `config.zero_allowed` decides whether `pos-int` and `pos-ints` take 0.
    pub fn check(self, value: &Value, config: &Config) -> Result<Converted> {
        let value = value.clone();
        let converted = match self {
            Kind::FileExists => Converted::Path(general::file_exists(value)?),
            Kind::FolderExists => Converted::Path(general::folder_exists(value)?),
            Kind::FolderExistsOrCreate => Converted::Path(general::folder_exists_or_create(value)?),
            Kind::FilesList => Converted::Paths(general::files_list(value)?),
            Kind::FilesFilteredList => Converted::Paths(general::files_filtered_list(value)?),
            Kind::PosInt => Converted::Int(general::pos_int_with(value, config.zero_allowed)?),
            Kind::NegInt => Converted::Int(general::neg_int(value)?),
            Kind::Ints => Converted::Ints(general::ints(value)?),
            Kind::PosInts => Converted::Ints(general::pos_ints_with(value, config.zero_allowed)?),
            Kind::NegInts => Converted::Ints(general::neg_ints(value)?),
            Kind::Md5Hash => Converted::Text(hash::md5_hash(value)?),
            Kind::Sha1Hash => Converted::Text(hash::sha1_hash(value)?),
            Kind::Sha224Hash => Converted::Text(hash::sha224_hash(value)?),
            Kind::Sha256Hash => Converted::Text(hash::sha256_hash(value)?),
            Kind::Sha512Hash => Converted::Text(hash::sha512_hash(value)?),
            Kind::AnyHash => Converted::Text(hash::any_hash(value)?),
            Kind::DomainName => Converted::Text(network::domain_name(value)?),
            Kind::EmailAddress => Converted::Text(network::email_address(value)?),
            Kind::IpAddress => Converted::Ip(network::ip_address(value)?),
            Kind::Ipv4Address => Converted::Ip(network::ipv4_address(value)?),
            Kind::Ipv6Address => Converted::Ip(network::ipv6_address(value)?),
            Kind::IpAddressNetwork => Converted::Addresses(network::ip_address_network(value)?),
            Kind::Ipv4AddressNetwork => Converted::Addresses(network::ipv4_address_network(value)?),
            Kind::Ipv6AddressNetwork => Converted::Addresses(network::ipv6_address_network(value)?),
            Kind::IpAddressList => Converted::Addresses(network::ip_address_list(value)?),
            Kind::Ipv4AddressList => Converted::Addresses(network::ipv4_address_list(value)?),
            Kind::Ipv6AddressList => Converted::Addresses(network::ipv6_address_list(value)?),
            Kind::IpAddressFilteredList => {
                Converted::Addresses(network::ip_address_filtered_list(value)?)
            }
            Kind::Ipv4AddressFilteredList => {
                Converted::Addresses(network::ipv4_address_filtered_list(value)?)
            }
            Kind::Ipv6AddressFilteredList => {
                Converted::Addresses(network::ipv6_address_filtered_list(value)?)
            }
            Kind::MacAddress => Converted::Mac(network::mac_address(value)?),
            Kind::NetworkInterface => Converted::Text(network::network_interface(value)?),
            Kind::InterfaceAddress => {
                Converted::InterfaceAddress(network::interface_address(value)?)
            }
            Kind::InterfaceAddressList => {
                Converted::InterfaceAddresses(network::interface_address_list(value)?)
            }
            Kind::InterfaceAddressFilteredList => {
                Converted::InterfaceAddresses(network::interface_address_filtered_list(value)?)
            }
            Kind::GatewayAddress => Converted::Ip(network::gateway_address(value)?),
            Kind::DefaultGatewayAddress => Converted::Ip(network::default_gateway_address(value)?),
            Kind::PortNumber => Converted::Port(port::port_number(value)?),
            Kind::PortNumberRange => Converted::Ports(port::port_number_range(value)?),
        };
        Ok(converted)
    }

    /// Whether [`Kind::check`] would accept `value`, without side effects.
    ///
    /// `folder-exists-or-create` accepts a missing path here but never
    /// creates it. The nearest existing ancestor must be a directory.
    pub fn matches(self, value: &Value, config: &Config) -> bool {
        match self {
            Kind::FolderExistsOrCreate => value
                .as_str()
                .filter(|s| !s.is_empty())
                .map(Path::new)
                .is_some_and(creatable_folder),
            Kind::PosInt => crate::types::is_pos_int(value, config.zero_allowed),
            Kind::NegInt => crate::types::is_neg_int(value),
            Kind::Md5Hash => hash::is_md5(value),
            Kind::Sha1Hash => hash::is_sha1(value),
            Kind::Sha224Hash => hash::is_sha224(value),
            Kind::Sha256Hash => hash::is_sha256(value),
            Kind::Sha512Hash => hash::is_sha512(value),
            Kind::AnyHash => hash::is_hash(value),
            Kind::DomainName => network::is_domain(value),
            Kind::EmailAddress => network::is_email(value),
            Kind::IpAddress => network::is_ip(value),
            Kind::Ipv4Address => network::is_ipv4(value),
            Kind::Ipv6Address => network::is_ipv6(value),
            Kind::MacAddress => network::is_mac(value),
            Kind::NetworkInterface => network::is_netif(value),
            Kind::InterfaceAddress => network::is_ifaddr(value),
            Kind::GatewayAddress => network::is_gwaddr(value),
            Kind::DefaultGatewayAddress => network::is_defgw(value),
            Kind::PortNumber => port::is_port(value),
            Kind::PortNumberRange => port::is_port_range(value),
            _ => self.check(value, config).is_ok(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ValidationError;

    /// Accepts the kebab-case name, or the snake_case coercer name.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ValidationError::new(format!("unknown kind: {s}")))
    }
}

/// An existing directory, or a missing path that `create_dir_all` could build.
fn creatable_folder(path: &Path) -> bool {
    if path.exists() {
        return path.is_dir();
    }
    // A relative path with no existing component hangs off the working directory.
    path.ancestors()
        .find(|ancestor| ancestor.exists())
        .unwrap_or(Path::new("."))
        .is_dir()
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
    use tempfile::TempDir;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>().unwrap(), *kind);
        }
        assert_eq!("ip_address_list".parse::<Kind>().unwrap(), Kind::IpAddressList);
        assert_eq!("Port-Number".parse::<Kind>().unwrap(), Kind::PortNumber);
        assert!("nope".parse::<Kind>().is_err());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Kind::ALL.iter().map(|kind| kind.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Kind::ALL.len());
    }

    #[test]
    fn check_converts() {
        let config = Config::default();
        let converted = Kind::PortNumber.check(&Value::from("8080"), &config).unwrap();
        assert!(matches!(converted, Converted::Port(8080)));

        let converted = Kind::Ints.check(&Value::from("[1,-1]"), &config).unwrap();
        assert!(matches!(converted, Converted::Ints(ref ints) if ints == &[1, -1]));

        let Converted::Addresses(addresses) =
            Kind::Ipv4AddressNetwork.check(&Value::from("10.0.0.0/30"), &config).unwrap()
        else {
            panic!("expected addresses");
        };
        assert_eq!(addresses.count(), 4);
    }

    #[test]
    fn zero_policy_comes_from_config() {
        let lenient = Config::default();
        let strict = Config { zero_allowed: false, ..Config::default() };
        let zero = Value::from(0);

        assert!(Kind::PosInt.check(&zero, &lenient).is_ok());
        assert!(Kind::PosInt.check(&zero, &strict).is_err());
        assert!(Kind::PosInt.matches(&zero, &lenient));
        assert!(!Kind::PosInt.matches(&zero, &strict));
        assert!(Kind::PosInts.check(&Value::from("0,1"), &strict).is_err());
    }

    #[test]
    fn matching_a_missing_folder_does_not_create_it() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("later");
        let value = Value::from(&target);

        assert!(Kind::FolderExistsOrCreate.matches(&value, &Config::default()));
        assert!(!target.exists());
        assert!(Kind::FolderExistsOrCreate.check(&value, &Config::default()).is_ok());
        assert!(target.is_dir());
    }

    #[test]
    fn a_folder_cannot_be_created_under_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f");
        std::fs::File::create(&file).unwrap();
        let config = Config::default();

        for target in [file.join("sub"), file.join("sub").join("deeper")] {
            let value = Value::from(&target);
            assert!(!Kind::FolderExistsOrCreate.matches(&value, &config), "{}", target.display());
            assert!(Kind::FolderExistsOrCreate.check(&value, &config).is_err());
        }

        let nested = Value::from(dir.path().join("a").join("b"));
        assert!(Kind::FolderExistsOrCreate.matches(&nested, &config));
        assert!(Kind::FolderExistsOrCreate.check(&nested, &config).is_ok());
    }

    #[test]
    fn matches_agrees_with_check() {
        let config = Config::default();
        let inputs = [
            Value::from("8080"),
            Value::from("20-40"),
            Value::from("1.2.3.4"),
            Value::from("fe00::"),
            Value::from("10.0.0.0/30"),
            Value::from("example.com"),
            Value::from("a@example.com"),
            Value::from("01:02:03:04:05:06"),
            Value::from("0".repeat(32)),
            Value::from(-3),
            Value::from(0),
            Value::from("[1,2]"),
            Value::from("not valid"),
        ];
        for kind in Kind::ALL.iter().filter(|kind| **kind != Kind::FolderExistsOrCreate) {
            for value in &inputs {
                assert_eq!(
                    kind.matches(value, &config),
                    kind.check(value, &config).is_ok(),
                    "{kind} on {value}"
                );
            }
        }
    }
}
