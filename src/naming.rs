//! # Naming Strategy
//!
//! Maps a type description to the names a client generator emits for it.
//! Strategies are pure and stateless; the resolver calls them once per
//! recorded definition.

use crate::facts::TypeDescription;
use serde::{Deserialize, Serialize};

/// Display names of one schema definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNames {
    /// Simple name, without any generic arity marker.
    pub name: String,
    /// Namespace-qualified name.
    pub full_name: String,
    /// Grouping used by generators to split output files.
    pub module: String,
}

impl TypeNames {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        TypeNames {
            name: name.into(),
            full_name: full_name.into(),
            module: module.into(),
        }
    }
}

pub trait NamingStrategy {
    fn names_for(&self, desc: &TypeDescription) -> TypeNames;
}

/// Strips the arity marker (`` Box`1 `` becomes `Box`) and qualifies the name
/// with its namespace. Types without a namespace are grouped by module.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl NamingStrategy for DefaultNaming {
    fn names_for(&self, desc: &TypeDescription) -> TypeNames {
        let name = strip_arity(&desc.name).to_string();
        match desc.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            Some(ns) => TypeNames {
                full_name: format!("{ns}.{name}"),
                module: ns.to_string(),
                name,
            },
            None => TypeNames {
                full_name: name.clone(),
                module: desc.module.clone(),
                name,
            },
        }
    }
}

/// `` Pair`2 `` → `Pair`. Names without a marker are returned unchanged.
pub fn strip_arity(name: &str) -> &str {
    name.split('`').next().unwrap_or(name)
}
