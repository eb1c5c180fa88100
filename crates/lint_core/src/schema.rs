//! A data-model subset of JSON-Schema draft-07 (spec §4.4 `jsonSchema(ctx)`
//! hook): "object, array, string+formats, enum, int/number, boolean, `$ref`,
//! and `allOf`/`anyOf`/`oneOf`". This is an in-memory value a rule builds to
//! describe its own opaque configuration to external tooling; the engine
//! itself never interprets it (spec: "the engine itself only reads the
//! runtime `severity` and an opaque per-rule configuration handle").

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// `$schema` is always `draft-07`, per spec §6 "JSON schema export".
pub const DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// A node in the schema tree. Variants are serialized by hand rather than
/// via `#[serde(untagged)]`: `AllOf`/`AnyOf`/`OneOf` all wrap the same
/// `Combinator` shape, and an untagged enum would erase which keyword
/// produced them.
#[derive(Debug, Clone)]
pub enum Schema {
    Object(ObjectSchema),
    Array(ArraySchema),
    String(StringSchema),
    Enum(EnumSchema),
    Integer(NumberSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Ref(RefSchema),
    AllOf(Combinator),
    AnyOf(Combinator),
    OneOf(Combinator),
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Schema::Object(s) => s.serialize(serializer),
            Schema::Array(s) => s.serialize(serializer),
            Schema::String(s) => s.serialize(serializer),
            Schema::Enum(s) => s.serialize(serializer),
            Schema::Integer(s) => {
                let mut s = s.clone();
                s.ty = "integer";
                s.serialize(serializer)
            }
            Schema::Number(s) => s.serialize(serializer),
            Schema::Boolean(s) => s.serialize(serializer),
            Schema::Ref(s) => s.serialize(serializer),
            Schema::AllOf(c) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("allOf", &c.schemas)?;
                map.end()
            }
            Schema::AnyOf(c) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("anyOf", &c.schemas)?;
                map.end()
            }
            Schema::OneOf(c) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("oneOf", &c.schemas)?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        ObjectSchema {
            ty: "object",
            properties: BTreeMap::new(),
            required: Vec::new(),
            additional_properties: Some(false),
        }
    }

    #[must_use]
    pub fn property(mut self, name: impl Into<String>, schema: Schema, required: bool) -> Self {
        let name = name.into();
        if required {
            self.required.push(name.clone());
        }
        self.properties.insert(name, schema);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArraySchema {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub items: Box<Schema>,
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StringSchema {
    #[serde(rename = "type")]
    pub ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

impl StringSchema {
    pub fn new() -> Self {
        StringSchema { ty: "string", format: None }
    }

    #[must_use]
    pub fn format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumSchema {
    #[serde(rename = "enum")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberSchema {
    #[serde(rename = "type")]
    pub ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BooleanSchema {
    #[serde(rename = "type")]
    pub ty: &'static str,
}

impl Default for BooleanSchema {
    fn default() -> Self {
        BooleanSchema { ty: "boolean" }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RefSchema {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl RefSchema {
    pub fn definition(name: impl std::fmt::Display) -> Self {
        RefSchema { reference: format!("#/definitions/{}", name) }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Combinator {
    pub schemas: Vec<Schema>,
}
