//! General-purpose coercers: filesystem paths and integers.

use std::fs;
use std::path::PathBuf;

use argtype_common::error::{Result, ValidationError};
use argtype_common::utils::list::to_elements;
use argtype_common::Value;
use tracing::debug;

use crate::invalid;

fn as_path(value: &Value, expected: &str) -> Result<PathBuf> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| invalid(expected, value))
}

/// Returns the path unchanged if it is an existing file.
pub fn file_exists(value: impl Into<Value>) -> Result<PathBuf> {
    let value: Value = value.into();
    let path = as_path(&value, "an existing file")?;
    if path.is_file() {
        Ok(path)
    } else {
        Err(invalid("an existing file", &value))
    }
}

/// Returns the path unchanged if it is an existing directory.
pub fn folder_exists(value: impl Into<Value>) -> Result<PathBuf> {
    let value: Value = value.into();
    let path = as_path(&value, "an existing folder")?;
    if path.is_dir() {
        Ok(path)
    } else {
        Err(invalid("an existing folder", &value))
    }
}

/// Returns the directory, creating it (and its parents) when missing.
///
/// Fails if the path exists but is not a directory.
pub fn folder_exists_or_create(value: impl Into<Value>) -> Result<PathBuf> {
    let value: Value = value.into();
    let path = as_path(&value, "a folder")?;
    if path.is_dir() {
        return Ok(path);
    }
    if path.exists() {
        return Err(invalid("a folder", &value));
    }
    fs::create_dir_all(&path).map_err(|e| {
        ValidationError::new(format!("could not create folder {}: {e}", path.display()))
    })?;
    debug!("Created folder {}", path.display());
    Ok(path)
}

/// Every element must be an existing file.
pub fn files_list(value: impl Into<Value>) -> Result<Vec<PathBuf>> {
    let value: Value = value.into();
    let elements = to_elements(&value).map_err(|_| invalid("a list of files", &value))?;
    elements.into_iter().map(file_exists).collect()
}

/// Keeps the elements that are existing files, in order.
pub fn files_filtered_list(value: impl Into<Value>) -> Result<Vec<PathBuf>> {
    let value: Value = value.into();
    let elements = to_elements(&value).map_err(|_| invalid("a list of files", &value))?;
    Ok(elements
        .into_iter()
        .filter_map(|element| file_exists(element).ok())
        .collect())
}

fn signed_int(value: Value, expected: &str, accept: impl Fn(i64) -> bool) -> Result<i64> {
    value
        .as_int()
        .filter(|n| accept(*n))
        .ok_or_else(|| invalid(expected, &value))
}

/// A positive integer; zero is allowed.
pub fn pos_int(value: impl Into<Value>) -> Result<i64> {
    pos_int_with(value, true)
}

pub fn pos_int_with(value: impl Into<Value>, zero_allowed: bool) -> Result<i64> {
    let expected = if zero_allowed { "a positive integer or zero" } else { "a positive integer" };
    signed_int(value.into(), expected, |n| n > 0 || (zero_allowed && n == 0))
}

/// A strictly negative integer.
pub fn neg_int(value: impl Into<Value>) -> Result<i64> {
    signed_int(value.into(), "a negative integer", |n| n < 0)
}

fn int_list(value: Value, expected: &str, accept: impl Fn(i64) -> bool) -> Result<Vec<i64>> {
    let elements = to_elements(&value).map_err(|_| invalid(expected, &value))?;
    elements
        .iter()
        .map(|element| {
            element
                .as_int()
                .filter(|n| accept(*n))
                .ok_or_else(|| invalid(expected, &value))
        })
        .collect()
}

/// A list of integers, from a collection or a `"1,2"` / `"[1,2]"` string.
pub fn ints(value: impl Into<Value>) -> Result<Vec<i64>> {
    int_list(value.into(), "a list of integers", |_| true)
}

pub fn pos_ints(value: impl Into<Value>) -> Result<Vec<i64>> {
    pos_ints_with(value, true)
}

pub fn pos_ints_with(value: impl Into<Value>, zero_allowed: bool) -> Result<Vec<i64>> {
    int_list(value.into(), "a list of positive integers", |n| {
        n > 0 || (zero_allowed && n == 0)
    })
}

pub fn neg_ints(value: impl Into<Value>) -> Result<Vec<i64>> {
    int_list(value.into(), "a list of negative integers", |n| n < 0)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
