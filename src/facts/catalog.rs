use super::types::{
    GenericOwner, PrimitiveKind, TypeDescription, TypeKey, TypeShape,
};
use super::TypeFacts;
use crate::validator::ValidationIssue;
use std::collections::{HashMap, HashSet};

/// Module that owns the built-in primitives.
pub const SYSTEM_MODULE: &str = "System";

/// In-memory [`TypeFacts`] provider.
///
/// Types keep their insertion order; inserting a key twice replaces the
/// earlier description in place.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: Vec<TypeDescription>,
    index: HashMap<TypeKey, usize>,
    load_issues: Vec<ValidationIssue>,
}

impl TypeCatalog {
    /// A catalog pre-seeded with the built-in primitives.
    pub fn new() -> Self {
        let mut catalog = TypeCatalog::empty();
        for (key, primitive) in PrimitiveKind::BUILTIN_KEYS {
            catalog.insert(TypeDescription::new(
                key,
                key,
                SYSTEM_MODULE,
                TypeShape::Primitive { primitive },
            ));
        }
        catalog
    }

    pub fn empty() -> Self {
        TypeCatalog::default()
    }

    /// Build a catalog from a list of descriptions on top of the primitives.
    ///
    /// Keys declared more than once in `types` are recorded and reported by
    /// [`TypeCatalog::validate`]; the last declaration wins.
    pub fn from_descriptions(types: Vec<TypeDescription>) -> Self {
        let mut catalog = TypeCatalog::new();
        let mut seen = HashSet::new();
        for desc in types {
            if !seen.insert(desc.key.clone()) {
                catalog.load_issues.push(ValidationIssue::new(
                    location(&desc.key),
                    "DuplicateKey",
                    format!("type key `{}` is declared more than once", desc.key),
                ));
            }
            catalog.insert(desc);
        }
        catalog
    }

    pub fn insert(&mut self, desc: TypeDescription) {
        match self.index.get(&desc.key) {
            Some(&pos) => self.types[pos] = desc,
            None => {
                self.index.insert(desc.key.clone(), self.types.len());
                self.types.push(desc);
            }
        }
    }

    pub fn extend(&mut self, types: impl IntoIterator<Item = TypeDescription>) {
        for desc in types {
            self.insert(desc);
        }
    }

    pub fn get(&self, key: &TypeKey) -> Option<&TypeDescription> {
        self.index.get(key).map(|&pos| &self.types[pos])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Check that every key the catalog mentions is declared and that generic
    /// shapes are consistent.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.load_issues.clone();
        for desc in &self.types {
            self.validate_type(desc, &mut issues);
        }
        issues
    }

    fn validate_type(&self, desc: &TypeDescription, issues: &mut Vec<ValidationIssue>) {
        let loc = location(&desc.key);
        let require = |key: &TypeKey, what: &str, issues: &mut Vec<ValidationIssue>| {
            if self.get(key).is_none() {
                issues.push(ValidationIssue::new(
                    &loc,
                    "DanglingTypeKey",
                    format!("{what} refers to undeclared type `{key}`"),
                ));
            }
        };

        for prop in &desc.properties {
            require(&prop.ty, &format!("property `{}`", prop.name), issues);
        }

        match &desc.shape {
            TypeShape::Collection { element } => require(element, "collection element", issues),
            TypeShape::Async {
                result: Some(result),
            } => require(result, "async result", issues),
            TypeShape::GenericDefinition { parameters } => {
                for param in parameters {
                    match self.get(param).map(|p| &p.shape) {
                        None => require(param, "generic parameter", issues),
                        Some(TypeShape::GenericParameter { .. }) => {}
                        Some(_) => issues.push(ValidationIssue::new(
                            &loc,
                            "NotAGenericParameter",
                            format!("`{param}` is listed as a parameter but is not one"),
                        )),
                    }
                }
            }
            TypeShape::GenericInstance {
                definition,
                arguments,
            } => {
                for arg in arguments {
                    require(arg, "generic argument", issues);
                }
                match self.get(definition).map(|d| &d.shape) {
                    None => require(definition, "generic definition", issues),
                    Some(TypeShape::GenericDefinition { parameters }) => {
                        if parameters.len() != arguments.len() {
                            issues.push(ValidationIssue::new(
                                &loc,
                                "ArityMismatch",
                                format!(
                                    "`{definition}` declares {} parameter(s) but {} argument(s) were supplied",
                                    parameters.len(),
                                    arguments.len()
                                ),
                            ));
                        }
                    }
                    Some(_) => issues.push(ValidationIssue::new(
                        &loc,
                        "NotAGenericDefinition",
                        format!("`{definition}` is not an open generic definition"),
                    )),
                }
            }
            TypeShape::GenericParameter {
                owner, constraints, ..
            } => {
                if let GenericOwner::Type { key } = owner {
                    require(key, "generic parameter owner", issues);
                }
                for constraint in constraints {
                    require(constraint, "generic constraint", issues);
                }
            }
            _ => {}
        }

        for method in &desc.methods {
            if let Some(ret) = &method.returns {
                require(ret, &format!("return type of `{}`", method.name), issues);
            }
            for param in &method.parameters {
                require(
                    &param.ty,
                    &format!("parameter `{}` of `{}`", param.name, method.name),
                    issues,
                );
            }
        }
    }
}

impl TypeFacts for TypeCatalog {
    fn describe(&self, key: &TypeKey) -> Option<&TypeDescription> {
        self.get(key)
    }

    fn types(&self) -> Box<dyn Iterator<Item = &TypeDescription> + '_> {
        Box::new(self.types.iter())
    }
}

fn location(key: &TypeKey) -> String {
    format!("type:{key}")
}
