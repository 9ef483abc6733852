//! Dialect-independent definitions
//!
//! A recursive JSON value shape shared by every dialect with JSON columns.
//! Dialects register these through
//! [`AdapterBuilder::json_definitions`](crate::AdapterBuilder::json_definitions)
//! instead of spelling them out, so the shape is identical everywhere.

use crate::ast::TypeNode;
use crate::union_of;

pub const JSON: &str = "Json";
pub const JSON_ARRAY: &str = "JsonArray";
pub const JSON_OBJECT: &str = "JsonObject";
pub const JSON_PRIMITIVE: &str = "JsonPrimitive";
pub const JSON_VALUE: &str = "JsonValue";

/// `JsonValue[]`
#[must_use]
pub fn json_array_definition() -> TypeNode {
    TypeNode::array(TypeNode::identifier(JSON_VALUE))
}

/// `{ [key: string]: JsonValue }`
#[must_use]
pub fn json_object_definition() -> TypeNode {
    TypeNode::record(TypeNode::identifier(JSON_VALUE))
}

/// `boolean | number | string | null`
#[must_use]
pub fn json_primitive_definition() -> TypeNode {
    union_of![
        TypeNode::identifier("boolean"),
        TypeNode::identifier("number"),
        TypeNode::identifier("string"),
        TypeNode::identifier("null"),
    ]
    .into()
}

/// `JsonArray | JsonObject | JsonPrimitive`
#[must_use]
pub fn json_value_definition() -> TypeNode {
    union_of![
        TypeNode::identifier(JSON_ARRAY),
        TypeNode::identifier(JSON_OBJECT),
        TypeNode::identifier(JSON_PRIMITIVE),
    ]
    .into()
}

/// Alias of `JsonValue`
#[must_use]
pub fn json_definition() -> TypeNode {
    TypeNode::identifier(JSON_VALUE)
}

/// All JSON definitions keyed by name
#[must_use]
pub fn json_definitions() -> [(&'static str, TypeNode); 5] {
    [
        (JSON, json_definition()),
        (JSON_ARRAY, json_array_definition()),
        (JSON_OBJECT, json_object_definition()),
        (JSON_PRIMITIVE, json_primitive_definition()),
        (JSON_VALUE, json_value_definition()),
    ]
}
