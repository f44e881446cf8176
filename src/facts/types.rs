use crate::api::HttpVerb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle naming one type as the facts provider sees it.
///
/// Keys are compared by value only. Closed generic instantiations, open
/// definitions and generic parameters each get a key of their own (for
/// example `` Box`1 ``, `` Box`1[int32] `` and `` Box`1.T ``).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeKey(String);

impl TypeKey {
    pub fn new(key: impl Into<String>) -> Self {
        TypeKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeKey {
    fn from(key: &str) -> Self {
        TypeKey(key.to_string())
    }
}

impl From<String> for TypeKey {
    fn from(key: String) -> Self {
        TypeKey(key)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Built-in value types that are always inlined in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveKind {
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
    String,
    Char,
    DateTime,
    Uuid,
    Object,
}

impl PrimitiveKind {
    /// Catalog keys under which [`TypeCatalog::new`](super::TypeCatalog::new)
    /// registers each primitive.
    pub const BUILTIN_KEYS: [(&'static str, PrimitiveKind); 11] = [
        ("bool", PrimitiveKind::Boolean),
        ("int32", PrimitiveKind::Int32),
        ("int64", PrimitiveKind::Int64),
        ("float32", PrimitiveKind::Float32),
        ("float64", PrimitiveKind::Float64),
        ("decimal", PrimitiveKind::Decimal),
        ("string", PrimitiveKind::String),
        ("char", PrimitiveKind::Char),
        ("datetime", PrimitiveKind::DateTime),
        ("uuid", PrimitiveKind::Uuid),
        ("object", PrimitiveKind::Object),
    ];
}

/// Storage used by an enum's members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnumBacking {
    #[default]
    Integer,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    #[serde(default)]
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        EnumMember {
            name: name.into(),
            value,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Declaration site of a generic parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenericOwner {
    /// Declared by an open generic type definition.
    Type { key: TypeKey },
    /// Declared by a generic method. Not representable in the schema.
    Method { name: String },
}

/// Structural category of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeShape {
    Primitive {
        primitive: PrimitiveKind,
    },
    /// Any sequence type; only the element type matters.
    Collection {
        element: TypeKey,
    },
    /// Task/future wrapper. `result` is absent for wrappers without a payload.
    Async {
        #[serde(default)]
        result: Option<TypeKey>,
    },
    Enum {
        #[serde(default)]
        backing: EnumBacking,
        #[serde(default)]
        members: Vec<EnumMember>,
    },
    Struct,
    GenericDefinition {
        parameters: Vec<TypeKey>,
    },
    GenericInstance {
        definition: TypeKey,
        arguments: Vec<TypeKey>,
    },
    GenericParameter {
        owner: GenericOwner,
        #[serde(default)]
        position: usize,
        #[serde(default)]
        constraints: Vec<TypeKey>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeKey,
}

/// Where a parameter's value is read from, when the member says so explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterSource {
    Route,
    Query,
    Body,
    Form,
    Header,
    /// Supplied by the host's dependency injection; not part of the wire surface.
    Services,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ParameterSource>,
}

/// An HTTP verb annotation on a member, with its optional route template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbAnnotation {
    pub verb: HttpVerb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

fn default_public() -> bool {
    true
}

/// A callable member declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescription {
    pub name: String,
    #[serde(default = "default_public")]
    pub public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub constructor: bool,
    /// Backs a property getter/setter.
    #[serde(default)]
    pub accessor: bool,
    /// Explicitly excluded from the API surface.
    #[serde(default)]
    pub non_action: bool,
    /// Declared return type; `None` for void members.
    #[serde(default)]
    pub returns: Option<TypeKey>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescription>,
    #[serde(default)]
    pub verbs: Vec<VerbAnnotation>,
    #[serde(default)]
    pub route: Option<String>,
}

impl MethodDescription {
    /// A public instance member with no annotations.
    pub fn action(name: impl Into<String>) -> Self {
        MethodDescription {
            name: name.into(),
            public: true,
            is_static: false,
            constructor: false,
            accessor: false,
            non_action: false,
            returns: None,
            parameters: Vec::new(),
            verbs: Vec::new(),
            route: None,
        }
    }

    pub fn returns(mut self, ty: impl Into<TypeKey>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<TypeKey>) -> Self {
        self.parameters.push(ParameterDescription {
            name: name.into(),
            ty: ty.into(),
            source: None,
        });
        self
    }

    pub fn param_from(
        mut self,
        name: impl Into<String>,
        ty: impl Into<TypeKey>,
        source: ParameterSource,
    ) -> Self {
        self.parameters.push(ParameterDescription {
            name: name.into(),
            ty: ty.into(),
            source: Some(source),
        });
        self
    }

    pub fn verb(mut self, verb: HttpVerb, template: Option<&str>) -> Self {
        self.verbs.push(VerbAnnotation {
            verb,
            template: template.map(str::to_string),
        });
        self
    }

    pub fn route(mut self, template: impl Into<String>) -> Self {
        self.route = Some(template.into());
        self
    }
}

/// Marks a type as a controller whose members form the API surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerFacts {
    /// Controller-level route template, e.g. `api/[controller]`.
    #[serde(default)]
    pub route: Option<String>,
}

/// Everything the inspection engine needs to know about one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    pub key: TypeKey,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Declaring module (assembly/crate). Scope decisions compare against this.
    pub module: String,
    pub shape: TypeShape,
    #[serde(default)]
    pub properties: Vec<PropertyDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<ControllerFacts>,
    #[serde(default)]
    pub methods: Vec<MethodDescription>,
}

impl TypeDescription {
    pub fn new(
        key: impl Into<TypeKey>,
        name: impl Into<String>,
        module: impl Into<String>,
        shape: TypeShape,
    ) -> Self {
        TypeDescription {
            key: key.into(),
            name: name.into(),
            namespace: None,
            module: module.into(),
            shape,
            properties: Vec::new(),
            description: None,
            controller: None,
            methods: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, ty: impl Into<TypeKey>) -> Self {
        self.properties.push(PropertyDescription {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn as_controller(mut self, route: Option<&str>) -> Self {
        self.controller = Some(ControllerFacts {
            route: route.map(str::to_string),
        });
        self
    }

    pub fn with_method(mut self, method: MethodDescription) -> Self {
        self.methods.push(method);
        self
    }

    pub fn is_controller(&self) -> bool {
        self.controller.is_some()
    }
}
