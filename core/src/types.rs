//! Data-type predicates.
//!
//! These are capability checks on the shape of a [`Value`], not on any
//! concrete Rust type: a tuple and a set are both lists, a named function and
//! a lambda are both functions.

use argtype_common::Value;

/// Integer-valued input: an int, an integral float, or an integer string.
pub fn is_int(value: impl Into<Value>) -> bool {
    let value: Value = value.into();
    value.as_int().is_some()
}

pub fn is_pos_int(value: impl Into<Value>, zero_allowed: bool) -> bool {
    let value: Value = value.into();
    value
        .as_int()
        .is_some_and(|n| n > 0 || (zero_allowed && n == 0))
}

pub fn is_neg_int(value: impl Into<Value>) -> bool {
    let value: Value = value.into();
    value.as_int().is_some_and(|n| n < 0)
}

pub fn is_dict(value: impl Into<Value>) -> bool {
    matches!(Into::<Value>::into(value), Value::Map(_))
}

/// Any finite collection that is neither text nor a mapping.
pub fn is_list(value: impl Into<Value>) -> bool {
    let value: Value = value.into();
    value.items().is_some()
}

pub fn is_str(value: impl Into<Value>) -> bool {
    matches!(Into::<Value>::into(value), Value::Str(_))
}

/// An anonymous callable.
pub fn is_lambda(value: impl Into<Value>) -> bool {
    matches!(Into::<Value>::into(value), Value::Function(callable) if callable.is_anonymous())
}

/// Any callable, named or not.
pub fn is_function(value: impl Into<Value>) -> bool {
    matches!(Into::<Value>::into(value), Value::Function(_))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
