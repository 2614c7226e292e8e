//! # List Inputs
//!
//! Collection checkers take either a native collection or its string form:
//! comma-separated elements, optionally enclosed in square brackets
//! (`"1,2"`, `"[1, 2]"`, `"['a.txt', 'b.txt']"`).

use crate::error::{Result, ValidationError};
use crate::value::Value;

/// Splits a list string into its trimmed, unquoted elements.
///
/// Brackets must be balanced. Empty elements make the whole string invalid,
/// `"[]"` is the empty list. Commas inside a quoted element belong to it.
pub fn split_list(s: &str) -> Option<Vec<&str>> {
    let s = s.trim();
    let (inner, bracketed) = match (s.strip_prefix('['), s.ends_with(']')) {
        (Some(rest), true) => (rest.strip_suffix(']')?, true),
        (None, false) => (s, false),
        _ => return None,
    };

    let inner = inner.trim();
    if inner.is_empty() {
        return bracketed.then(Vec::new);
    }

    let items: Vec<&str> = split_elements(inner)?
        .into_iter()
        .map(|item| unquote(item.trim()))
        .collect();
    if items.iter().any(|item| item.is_empty()) {
        return None;
    }
    Some(items)
}

/// Splits on the commas that sit outside quotes.
///
/// A quote only opens when it starts an element, so `O'Brien.txt` stays a
/// plain element. An element left open makes the whole string invalid.
fn split_elements(inner: &str) -> Option<Vec<&str>> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut at_element_start = true;

    for (idx, c) in inner.char_indices() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if c == ',' => {
                items.push(&inner[start..idx]);
                start = idx + 1;
                at_element_start = true;
                continue;
            }
            None if at_element_start && (c == '\'' || c == '"') => quote = Some(c),
            None => {}
        }
        if !c.is_whitespace() {
            at_element_start = false;
        }
    }
    if quote.is_some() {
        return None;
    }
    items.push(&inner[start..]);
    Some(items)
}

fn unquote(item: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = item
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    item
}

/// Returns the elements of a collection value or of a list string.
///
/// Anything else is not a list and fails.
pub fn to_elements(value: &Value) -> Result<Vec<Value>> {
    if let Some(items) = value.items() {
        return Ok(items.to_vec());
    }
    value
        .as_str()
        .and_then(split_list)
        .map(|items| items.into_iter().map(Value::from).collect())
        .ok_or_else(|| ValidationError::expected("a list", value))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
