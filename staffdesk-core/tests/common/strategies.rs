// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;
use serde_json::Value;

/// Column names (lowercase, underscore-separated).
pub fn column_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// Opaque user identifiers.
pub fn user_id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}"
}

/// Scalar filter values as the backend stores them.
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ._@-]{0,20}".prop_map(Value::String),
    ]
}
