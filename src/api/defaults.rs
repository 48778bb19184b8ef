//! Per-operation default values for request bodies.
//!
//! Operations that fill an omitted field before sending declare it here
//! instead of patching their body inline.

#[cfg(test)]
#[path = "defaults_test.rs"]
mod tests;

use serde_json::Value;

use crate::http::RequestDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            Self::Bool(flag) => Value::Bool(flag),
            Self::Int(number) => Value::from(number),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRule {
    pub operation: &'static str,
    pub field: &'static str,
    pub value: DefaultValue,
}

pub const RESET_PASSWORD: &str = "reset_password";
pub const CREATE_SYSTEM_TAG: &str = "create_system_tag";

pub static DEFAULT_RULES: &[DefaultRule] = &[
    // The console only resets administrator passwords unless told otherwise.
    DefaultRule { operation: RESET_PASSWORD, field: "isAdmin", value: DefaultValue::Bool(true) },
    // Type 0 is a system tag.
    DefaultRule { operation: CREATE_SYSTEM_TAG, field: "type", value: DefaultValue::Int(0) },
];

/// Fill every field `operation` declares a default for and the body lacks.
/// Fields already present, including explicit `null`, are left alone.
pub fn apply_defaults(operation: &str, descriptor: &mut RequestDescriptor) {
    let Some(Value::Object(body)) = descriptor.body_mut() else {
        return;
    };
    for rule in DEFAULT_RULES.iter().filter(|rule| rule.operation == operation) {
        body.entry(rule.field).or_insert_with(|| rule.value.to_value());
    }
}
