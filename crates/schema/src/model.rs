//! The typed schema model as deserialized from YAML/JSON schema sources.
//!
//! A schema node is either a `switch` (shape discriminated by a path
//! expression), a concrete value schema tagged by `type`, or a bare `ref`
//! (only before resolution, or as the degraded form of a broken reference).
//! Object members and switch cases are ordered lists, so declaration order
//! survives deserialization.

use mason_foreign_key::ForeignKeyConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Name of a reusable schema fragment, unique within one definitions table.
pub type SchemaId = String;

/// Registry of raw reusable fragments, built once per schema load and never
/// mutated by the resolvers.
pub type Definitions = HashMap<SchemaId, Value>;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Schema {
    Switch(SwitchSchema),
    Value(ValueSchema),
    /// A reference that resolution could not inline (unknown id or cycle).
    Ref(RefSchema),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValueSchema {
    Object(ObjectSchema),
    Array(ArraySchema),
    String(StringSchema),
    Enum(EnumSchema),
    Uuid(UuidSchema),
    Integer(IntegerSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Vector2(VectorSchema),
    Vector3(VectorSchema),
    Vector4(VectorSchema),
    Vector2Int(VectorIntSchema),
    Vector3Int(VectorIntSchema),
    Vector4Int(VectorIntSchema),
}

impl Schema {
    /// Whether a missing value for this node is acceptable.
    pub fn is_optional(&self) -> bool {
        match self {
            Schema::Switch(s) => s.optional,
            Schema::Value(v) => v.is_optional(),
            Schema::Ref(_) => true,
        }
    }
}

impl ValueSchema {
    pub fn is_optional(&self) -> bool {
        match self {
            ValueSchema::Object(s) => s.optional,
            ValueSchema::Array(s) => s.optional,
            ValueSchema::String(s) => s.optional,
            ValueSchema::Enum(s) => s.optional,
            ValueSchema::Uuid(s) => s.optional,
            ValueSchema::Integer(s) => s.optional,
            ValueSchema::Number(s) => s.optional,
            ValueSchema::Boolean(s) => s.optional,
            ValueSchema::Vector2(s)
            | ValueSchema::Vector3(s)
            | ValueSchema::Vector4(s) => s.optional,
            ValueSchema::Vector2Int(s)
            | ValueSchema::Vector3Int(s)
            | ValueSchema::Vector4Int(s) => s.optional,
        }
    }
}

/// One named, ordered member of an object schema.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    #[serde(flatten)]
    pub schema: Schema,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl ObjectSchema {
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.key == key)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArraySchema {
    pub items: Box<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnumSchema {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UuidSchema {
    /// Generate a fresh id when initializing a new record.
    #[serde(default, skip_serializing_if = "is_false")]
    pub auto_generated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKeyConfig>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntegerSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_increment: Option<AutoIncrement>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NumberSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_increment: Option<AutoIncrement>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BooleanSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

/// Fixed-arity float vector; the arity comes from the enclosing variant.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

/// Fixed-arity integer vector; the arity comes from the enclosing variant.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorIntSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

/// How a new numeric value is derived from the rows already present.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutoIncrement {
    pub direction: Direction,
    pub step: f64,
    pub start_with: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Asc,
    Desc,
}

/// A schema whose concrete shape depends on a value elsewhere in the data
/// tree, addressed by a path expression.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchSchema {
    /// Path expression locating the discriminant value.
    pub switch: String,
    #[serde(default)]
    pub cases: Vec<SwitchCase>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

/// One ordered case of a switch schema.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// The discriminant value this case matches, compared strictly.
    pub when: Value,
    #[serde(flatten)]
    pub schema: Schema,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RefSchema {
    #[serde(rename = "ref")]
    pub target: SchemaId,
}

/// Helper for serde to keep serialized schemas free of default flags.
fn is_false(flag: &bool) -> bool {
    !*flag
}
