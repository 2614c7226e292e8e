#![cfg(test)]
use argtype_common::config::Config;
use argtype_core::{self as argtype, Kind, Value};
use std::net::IpAddr;

type Check = fn(&Value) -> bool;

macro_rules! law {
    ($pred:ident, $coerce:ident) => {
        (
            stringify!($coerce),
            (|v: &Value| argtype::$pred(v)) as Check,
            (|v: &Value| argtype::$coerce(v).is_ok()) as Check,
        )
    };
}

/*************************************************************
                       Shared inputs
**************************************************************/

fn inputs() -> Vec<Value> {
    let mut inputs: Vec<Value> = [
        "", "0", "1", "-1", "1.5", "80", "65535", "65536", "20-40", "40-20", "12345",
        "12345678900", "127.0.0.1", "0.0.0.300", "1.2.3.4", "fe00::", "fe00:::", "::1",
        "fe80::1%eth0", "10.0.0.0/30", "01:02:03:04:05:06", "01-02-03-04-05-06",
        "0102.0304.0506", "010203040506", "01:02:03-04:05:06", "example.com", "bad_name",
        "test@example.com", "bad_email", "--test", "-t", "deadbeef", "[]", "[1,2]", "1,-1",
        "THIS_INTERFACE_DOES_NOT_EXIST", "lo",
    ]
    .into_iter()
    .map(Value::from)
    .collect();

    inputs.push(Value::from("0".repeat(32)));
    inputs.push(Value::from("a".repeat(40)));
    inputs.push(Value::from("b".repeat(56)));
    inputs.push(Value::from("c".repeat(64)));
    inputs.push(Value::from("d".repeat(128)));
    inputs.extend([Value::from(0), Value::from(1), Value::from(-1), Value::from(65536)]);
    inputs.extend([Value::from(2.0), Value::from(1.2), Value::from(true), Value::Null]);
    inputs.push(Value::from(vec!["1.2.3.4", "fe00::"]));
    inputs
}

/*************************************************************
              Predicates agree with their coercers
**************************************************************/

#[test]
fn predicate_is_true_exactly_when_coercer_succeeds() {
    let laws = [
        law!(is_ip, ip_address),
        law!(is_ipv4, ipv4_address),
        law!(is_ipv6, ipv6_address),
        law!(is_mac, mac_address),
        law!(is_domain, domain_name),
        law!(is_email, email_address),
        law!(is_md5, md5_hash),
        law!(is_sha1, sha1_hash),
        law!(is_sha224, sha224_hash),
        law!(is_sha256, sha256_hash),
        law!(is_sha512, sha512_hash),
        law!(is_hash, any_hash),
        law!(is_port, port_number),
        law!(is_port_range, port_number_range),
        law!(is_neg_int, neg_int),
        law!(is_netif, network_interface),
        law!(is_ifaddr, interface_address),
        law!(is_gwaddr, gateway_address),
        law!(is_defgw, default_gateway_address),
    ];

    for value in inputs() {
        for (name, predicate, coercer) in &laws {
            assert_eq!(predicate(&value), coercer(&value), "{name} on {value}");
        }
    }
}

#[test]
fn positive_integers_follow_the_zero_policy() {
    for value in inputs() {
        assert_eq!(argtype::is_pos_int(&value, true), argtype::pos_int(&value).is_ok(), "{value}");
        assert_eq!(
            argtype::is_pos_int(&value, false),
            argtype::pos_int_with(&value, false).is_ok(),
            "{value}"
        );
    }
}

#[test]
fn integers_are_positive_or_negative() {
    for value in inputs() {
        let signed = argtype::pos_int(&value).is_ok() || argtype::neg_int(&value).is_ok();
        assert_eq!(argtype::is_int(&value), signed, "{value}");
    }
}

#[test]
fn kinds_agree_with_themselves() {
    let config = Config::default();
    for value in inputs() {
        for kind in Kind::ALL.iter().filter(|kind| **kind != Kind::FolderExistsOrCreate) {
            assert_eq!(
                kind.matches(&value, &config),
                kind.check(&value, &config).is_ok(),
                "{kind} on {value}"
            );
        }
    }
}

/*************************************************************
               Filtered lists relax plain lists
**************************************************************/

#[test]
fn filtered_list_equals_list_when_everything_is_valid() {
    for value in inputs() {
        if let Ok(all) = argtype::ip_address_list(&value) {
            let filtered = argtype::ip_address_filtered_list(&value).unwrap();
            assert_eq!(
                all.take(64).collect::<Vec<IpAddr>>(),
                filtered.take(64).collect::<Vec<IpAddr>>(),
                "{value}"
            );
        }
        if let Ok(all) = argtype::ints(&value) {
            assert_eq!(argtype::pos_ints(&value).is_ok(), all.iter().all(|n| *n >= 0), "{value}");
            assert_eq!(argtype::neg_ints(&value).is_ok(), all.iter().all(|n| *n < 0), "{value}");
        }
    }
}

#[test]
fn filtered_list_only_keeps_valid_elements() {
    let mixed = vec!["1.2.3.300", "fe00::", "127.0.0.0/31", "not an address"];
    let kept: Vec<IpAddr> = argtype::ip_address_filtered_list(mixed.clone()).unwrap().collect();

    assert_eq!(kept.len(), 3);
    assert!(kept.iter().all(|addr| argtype::is_ip(addr.to_string())));
    assert!(argtype::ip_address_list(mixed).is_err());
}

/*************************************************************
                 Scenarios from the test suite
**************************************************************/

#[test]
fn option_syntax() {
    assert!(argtype::is_long_opt("--test"));
    assert!(!argtype::is_long_opt("-t"));
    assert!(argtype::is_short_opt("-t"));
    assert!(!argtype::is_short_opt("--test"));
}

#[test]
fn hash_lengths() {
    let md5 = "0".repeat(32);
    assert!(argtype::is_md5(&md5));
    assert!(argtype::is_hash(&md5));
    assert!(!argtype::is_sha1(&md5));
}

#[test]
fn ipv4_integers() {
    let addr = argtype::ip_address("12345").unwrap();
    assert_eq!(addr, "0.0.48.57".parse::<IpAddr>().unwrap());
    assert!(argtype::ipv6_address("12345").unwrap().is_ipv6());
}
