use crate::naming::TypeNames;
use crate::tracker::TrackedIdentity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the schema graph.
///
/// Serialized with a `kind` discriminator; every inner enum adds a `type`
/// discriminator next to it:
///
/// ```json
/// { "kind": "common", "type": "number", "format": "int32" }
/// { "kind": "reference", "type": "struct", "id": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SchemaNode {
    Common(CommonType),
    Custom(CustomType),
    Reference(ReferenceType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StringFormat {
    PlainText,
    DateTime,
    Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberFormat {
    Int32,
    Int64,
    Float32,
    Float64,
}

/// Built-in shapes. Always inlined, never recorded under an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CommonType {
    String { format: StringFormat },
    Number { format: NumberFormat },
    Boolean,
    /// Untyped value.
    Dynamic,
    /// Homogeneous sequence; the element is itself inlined or a reference.
    Array { element: Box<SchemaNode> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub schema: SchemaNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructType {
    pub id: TrackedIdentity,
    pub names: TypeNames,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldSchema>,
}

/// An open generic definition such as `Pair<T, U>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericType {
    pub id: TrackedIdentity,
    pub names: TypeNames,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldSchema>,
    /// References to the definition's parameters, in declaration order.
    pub parameters: Vec<SchemaNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericParameterType {
    pub id: TrackedIdentity,
    pub name: String,
    /// Identity of the generic definition that declares this parameter.
    pub owner: TrackedIdentity,
    pub position: usize,
    pub constraints: Vec<SchemaNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberEnumType {
    pub id: TrackedIdentity,
    pub names: TypeNames,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub members: Vec<EnumValue>,
}

/// A named definition, recorded exactly once in the [`TypeGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CustomType {
    Struct(StructType),
    Generic(GenericType),
    GenericParameter(GenericParameterType),
    NumberEnum(NumberEnumType),
}

/// A pointer to a recorded definition. Never embeds the definition's body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReferenceType {
    Struct {
        id: TrackedIdentity,
    },
    Enum {
        id: TrackedIdentity,
    },
    /// A closed instantiation; `id` is the open definition.
    Generic {
        id: TrackedIdentity,
        arguments: Vec<SchemaNode>,
    },
    GenericParameter {
        id: TrackedIdentity,
    },
}

impl SchemaNode {
    pub fn string(format: StringFormat) -> Self {
        SchemaNode::Common(CommonType::String { format })
    }

    pub fn number(format: NumberFormat) -> Self {
        SchemaNode::Common(CommonType::Number { format })
    }

    pub fn boolean() -> Self {
        SchemaNode::Common(CommonType::Boolean)
    }

    pub fn dynamic() -> Self {
        SchemaNode::Common(CommonType::Dynamic)
    }

    pub fn array(element: SchemaNode) -> Self {
        SchemaNode::Common(CommonType::Array {
            element: Box::new(element),
        })
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, SchemaNode::Common(CommonType::Dynamic))
    }

    /// Identities this node points at, including those nested in arrays,
    /// generic arguments and definition bodies.
    pub fn referenced_ids(&self) -> Vec<TrackedIdentity> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids(&self, out: &mut Vec<TrackedIdentity>) {
        match self {
            SchemaNode::Common(CommonType::Array { element }) => element.collect_ids(out),
            SchemaNode::Common(_) => {}
            SchemaNode::Custom(custom) => custom.collect_ids(out),
            SchemaNode::Reference(reference) => match reference {
                ReferenceType::Struct { id }
                | ReferenceType::Enum { id }
                | ReferenceType::GenericParameter { id } => out.push(*id),
                ReferenceType::Generic { id, arguments } => {
                    out.push(*id);
                    for arg in arguments {
                        arg.collect_ids(out);
                    }
                }
            },
        }
    }
}

impl CustomType {
    pub fn id(&self) -> TrackedIdentity {
        match self {
            CustomType::Struct(s) => s.id,
            CustomType::Generic(g) => g.id,
            CustomType::GenericParameter(p) => p.id,
            CustomType::NumberEnum(e) => e.id,
        }
    }

    /// Names of the definition; generic parameters only carry a simple name.
    pub fn names(&self) -> Option<&TypeNames> {
        match self {
            CustomType::Struct(s) => Some(&s.names),
            CustomType::Generic(g) => Some(&g.names),
            CustomType::NumberEnum(e) => Some(&e.names),
            CustomType::GenericParameter(_) => None,
        }
    }

    fn collect_ids(&self, out: &mut Vec<TrackedIdentity>) {
        match self {
            CustomType::Struct(s) => {
                for field in &s.fields {
                    field.schema.collect_ids(out);
                }
            }
            CustomType::Generic(g) => {
                for field in &g.fields {
                    field.schema.collect_ids(out);
                }
                for param in &g.parameters {
                    param.collect_ids(out);
                }
            }
            CustomType::GenericParameter(p) => {
                out.push(p.owner);
                for constraint in &p.constraints {
                    constraint.collect_ids(out);
                }
            }
            CustomType::NumberEnum(_) => {}
        }
    }
}

impl From<CustomType> for SchemaNode {
    fn from(custom: CustomType) -> Self {
        SchemaNode::Custom(custom)
    }
}

impl From<ReferenceType> for SchemaNode {
    fn from(reference: ReferenceType) -> Self {
        SchemaNode::Reference(reference)
    }
}

/// Every recorded definition, keyed by identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeGraph {
    definitions: BTreeMap<TrackedIdentity, CustomType>,
}

impl TypeGraph {
    pub fn get(&self, id: TrackedIdentity) -> Option<&CustomType> {
        self.definitions.get(&id)
    }

    pub fn contains(&self, id: TrackedIdentity) -> bool {
        self.definitions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &CustomType> {
        self.definitions.values()
    }

    /// Referenced identities with no recorded definition, deduplicated and
    /// sorted. Empty for any graph the resolver returns.
    pub fn dangling_references(&self) -> Vec<TrackedIdentity> {
        let mut dangling: Vec<_> = self
            .definitions
            .values()
            .flat_map(|def| {
                let mut ids = Vec::new();
                def.collect_ids(&mut ids);
                ids
            })
            .filter(|id| !self.definitions.contains_key(id))
            .collect();
        dangling.sort();
        dangling.dedup();
        dangling
    }

    /// Consume the graph into `kind = custom` nodes, lowest identity first.
    pub fn into_nodes(self) -> Vec<SchemaNode> {
        self.definitions.into_values().map(SchemaNode::Custom).collect()
    }

    pub(crate) fn insert(&mut self, definition: CustomType) {
        self.definitions.insert(definition.id(), definition);
    }
}
