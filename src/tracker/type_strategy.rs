use super::TrackStrategy;
use crate::facts::{TypeDescription, TypeFacts, TypeKey, TypeShape};
use std::collections::BTreeSet;

/// The set of modules whose declared types are in scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleScope {
    modules: BTreeSet<String>,
}

impl ModuleScope {
    pub fn new<I, M>(modules: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        ModuleScope {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }
}

/// Scope and edges of the type graph.
///
/// Collections, generic parameters, generic definitions and generic instances
/// are always in scope; anything else only when declared in a searched module.
/// Async wrappers are never nodes themselves, their payload is.
#[derive(Clone, Copy)]
pub struct TypeTrackStrategy<'a> {
    facts: &'a dyn TypeFacts,
    scope: &'a ModuleScope,
}

impl<'a> TypeTrackStrategy<'a> {
    pub fn new(facts: &'a dyn TypeFacts, scope: &'a ModuleScope) -> Self {
        TypeTrackStrategy { facts, scope }
    }

    pub fn scope(&self) -> &'a ModuleScope {
        self.scope
    }

    /// Follow async wrappers down to their payload type.
    ///
    /// Returns `None` when a wrapper carries no payload. Keys the facts
    /// provider does not know are returned unchanged.
    pub fn unwrap_async(&self, key: &TypeKey) -> Option<TypeKey> {
        let mut current = key.clone();
        let mut seen = BTreeSet::new();
        while let Some(TypeShape::Async { result }) = self.facts.describe(&current).map(|d| &d.shape) {
            if !seen.insert(current.clone()) {
                return None;
            }
            current = result.clone()?;
        }
        Some(current)
    }

    fn definition_of(&self, key: &TypeKey) -> Option<&'a TypeDescription> {
        self.facts.describe(key)
    }
}

fn property_types(desc: &TypeDescription) -> impl Iterator<Item = TypeKey> + '_ {
    desc.properties.iter().map(|p| p.ty.clone())
}

impl TrackStrategy<TypeKey> for TypeTrackStrategy<'_> {
    fn should_track(&self, key: &TypeKey) -> bool {
        let Some(desc) = self.facts.describe(key) else {
            return false;
        };
        match &desc.shape {
            TypeShape::Async { .. } => false,
            TypeShape::Collection { .. }
            | TypeShape::GenericParameter { .. }
            | TypeShape::GenericDefinition { .. }
            | TypeShape::GenericInstance { .. } => true,
            _ => self.scope.contains(&desc.module),
        }
    }

    fn dependencies_of(&self, key: &TypeKey) -> Vec<TypeKey> {
        let Some(key) = self.unwrap_async(key) else {
            return Vec::new();
        };
        if !self.should_track(&key) {
            return Vec::new();
        }
        let Some(desc) = self.facts.describe(&key) else {
            return Vec::new();
        };

        match &desc.shape {
            TypeShape::Collection { element } => vec![element.clone()],
            TypeShape::GenericInstance {
                definition,
                arguments,
            } => {
                let mut deps = vec![definition.clone()];
                let def = self.definition_of(definition);
                if let Some(TypeShape::GenericDefinition { parameters }) = def.map(|d| &d.shape) {
                    deps.extend(parameters.iter().cloned());
                }
                deps.extend(arguments.iter().cloned());
                if let Some(def) = def {
                    deps.extend(property_types(def));
                }
                deps
            }
            TypeShape::Enum { .. } => Vec::new(),
            TypeShape::GenericDefinition { parameters } => property_types(desc)
                .chain(parameters.iter().cloned())
                .collect(),
            TypeShape::GenericParameter { constraints, .. } => property_types(desc)
                .chain(constraints.iter().cloned())
                .collect(),
            _ => property_types(desc).collect(),
        }
    }
}
