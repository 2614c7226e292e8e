//! Hex digests, recognised by their exact length.

use argtype_common::Value;
use argtype_common::error::Result;

use crate::format::is_hex;
use crate::invalid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    /// Length of the digest in hex characters.
    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha224 => 56,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|s| s.len() == self.hex_len() && is_hex(s))
    }

    /// The first algorithm whose digest length fits `value`.
    pub fn detect(value: &Value) -> Option<HashAlgorithm> {
        Self::ALL.into_iter().find(|algo| algo.matches(value))
    }
}

fn digest(value: impl Into<Value>, algo: HashAlgorithm) -> Result<String> {
    let value: Value = value.into();
    match value.as_str() {
        Some(s) if algo.matches(&value) => Ok(s.to_string()),
        _ => Err(invalid(&format!("a {} hash", algo.name()), &value)),
    }
}

pub fn is_md5(value: impl Into<Value>) -> bool {
    HashAlgorithm::Md5.matches(&value.into())
}

pub fn is_sha1(value: impl Into<Value>) -> bool {
    HashAlgorithm::Sha1.matches(&value.into())
}

pub fn is_sha224(value: impl Into<Value>) -> bool {
    HashAlgorithm::Sha224.matches(&value.into())
}

pub fn is_sha256(value: impl Into<Value>) -> bool {
    HashAlgorithm::Sha256.matches(&value.into())
}

pub fn is_sha512(value: impl Into<Value>) -> bool {
    HashAlgorithm::Sha512.matches(&value.into())
}

/// Matches any known digest length.
pub fn is_hash(value: impl Into<Value>) -> bool {
    HashAlgorithm::detect(&value.into()).is_some()
}

pub fn md5_hash(value: impl Into<Value>) -> Result<String> {
    digest(value, HashAlgorithm::Md5)
}

pub fn sha1_hash(value: impl Into<Value>) -> Result<String> {
    digest(value, HashAlgorithm::Sha1)
}

pub fn sha224_hash(value: impl Into<Value>) -> Result<String> {
    digest(value, HashAlgorithm::Sha224)
}

pub fn sha256_hash(value: impl Into<Value>) -> Result<String> {
    digest(value, HashAlgorithm::Sha256)
}

pub fn sha512_hash(value: impl Into<Value>) -> Result<String> {
    digest(value, HashAlgorithm::Sha512)
}

pub fn any_hash(value: impl Into<Value>) -> Result<String> {
    let value: Value = value.into();
    match (value.as_str(), HashAlgorithm::detect(&value)) {
        (Some(s), Some(_)) => Ok(s.to_string()),
        _ => Err(invalid("a hash", &value)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
