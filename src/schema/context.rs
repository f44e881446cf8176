use super::types::{NumberFormat, ReferenceType, SchemaNode, StringFormat};
use crate::error::{InspectError, Result};
use crate::facts::{PrimitiveKind, TypeDescription, TypeFacts, TypeKey, TypeShape};
use crate::tracker::{IdentityMap, TrackStrategy, TrackedIdentity, TypeTrackStrategy};

/// Deepest chain of inline nodes (arrays, generic arguments, async payloads)
/// a single reference may build before resolution gives up.
const MAX_REFERENCE_DEPTH: usize = 64;

/// Read-only view shared by the resolver, the strategies and the API
/// extractor once tracking has finished.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    facts: &'a dyn TypeFacts,
    strategy: TypeTrackStrategy<'a>,
    identities: &'a IdentityMap<TypeKey>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        facts: &'a dyn TypeFacts,
        strategy: TypeTrackStrategy<'a>,
        identities: &'a IdentityMap<TypeKey>,
    ) -> Self {
        ResolveContext {
            facts,
            strategy,
            identities,
        }
    }

    pub fn identities(&self) -> &'a IdentityMap<TypeKey> {
        self.identities
    }

    /// # Errors
    ///
    /// [`InspectError::UnknownType`] when the facts provider has no entry.
    pub fn describe(&self, key: &TypeKey) -> Result<&'a TypeDescription> {
        self.facts
            .describe(key)
            .ok_or_else(|| InspectError::UnknownType(key.clone()))
    }

    pub fn identity_of(&self, key: &TypeKey) -> Option<TrackedIdentity> {
        self.identities.identity_of(key)
    }

    pub fn is_common(&self, key: &TypeKey) -> bool {
        matches!(
            self.facts.describe(key).map(|d| &d.shape),
            Some(TypeShape::Primitive { .. })
        )
    }

    pub fn is_in_scope(&self, key: &TypeKey) -> bool {
        self.strategy.should_track(key)
    }

    /// Inline node for common and collection types, a reference carrying an
    /// identity for everything that is recorded.
    ///
    /// Known types that were never tracked resolve to a dynamic node. Nothing
    /// here recurses into a definition body, so cyclic graphs stay finite.
    ///
    /// # Errors
    ///
    /// - [`InspectError::UnknownType`] for keys the facts provider does not know
    /// - [`InspectError::UnsupportedShape`] when inline nesting runs away
    pub fn reference_for(&self, key: &TypeKey) -> Result<SchemaNode> {
        self.reference_at_depth(key, 0)
    }

    /// Like [`reference_for`](Self::reference_for) but never fails: missing
    /// return types and resolution errors both become a dynamic node.
    pub fn response_reference_for(&self, key: Option<&TypeKey>) -> SchemaNode {
        let Some(key) = key else {
            return SchemaNode::dynamic();
        };
        match self.reference_for(key) {
            Ok(node) => node,
            Err(err) => {
                tracing::warn!(ty = %key, error = %err, "response type degraded to dynamic");
                SchemaNode::dynamic()
            }
        }
    }

    fn reference_at_depth(&self, key: &TypeKey, depth: usize) -> Result<SchemaNode> {
        if depth > MAX_REFERENCE_DEPTH {
            return Err(InspectError::UnsupportedShape {
                ty: key.clone(),
                reason: format!("inline nesting deeper than {MAX_REFERENCE_DEPTH} levels"),
            });
        }
        let desc = self.describe(key)?;

        match &desc.shape {
            TypeShape::Primitive { primitive } => return Ok(primitive_schema(*primitive)),
            TypeShape::Async { result: None } => return Ok(SchemaNode::dynamic()),
            TypeShape::Async {
                result: Some(result),
            } => return self.reference_at_depth(result, depth + 1),
            TypeShape::Collection { element } => {
                return Ok(SchemaNode::array(self.reference_at_depth(element, depth + 1)?))
            }
            TypeShape::GenericInstance {
                definition,
                arguments,
            } => {
                let Some(id) = self.tracked(definition) else {
                    return Ok(SchemaNode::dynamic());
                };
                let arguments = arguments
                    .iter()
                    .map(|arg| self.reference_at_depth(arg, depth + 1))
                    .collect::<Result<Vec<_>>>()?;
                return Ok(ReferenceType::Generic { id, arguments }.into());
            }
            _ => {}
        }

        let Some(id) = self.tracked(key) else {
            return Ok(SchemaNode::dynamic());
        };
        let reference = match &desc.shape {
            TypeShape::Enum { .. } => ReferenceType::Enum { id },
            TypeShape::GenericParameter { .. } => ReferenceType::GenericParameter { id },
            TypeShape::GenericDefinition { parameters } => ReferenceType::Generic {
                id,
                arguments: parameters
                    .iter()
                    .map(|param| self.reference_at_depth(param, depth + 1))
                    .collect::<Result<Vec<_>>>()?,
            },
            _ => ReferenceType::Struct { id },
        };
        Ok(reference.into())
    }

    fn tracked(&self, key: &TypeKey) -> Option<TrackedIdentity> {
        let id = self.identity_of(key);
        if id.is_none() {
            tracing::debug!(ty = %key, "type was not tracked; using dynamic");
        }
        id
    }
}

/// Inline schema of a built-in primitive.
pub fn primitive_schema(primitive: PrimitiveKind) -> SchemaNode {
    match primitive {
        PrimitiveKind::String | PrimitiveKind::Char => SchemaNode::string(StringFormat::PlainText),
        PrimitiveKind::DateTime => SchemaNode::string(StringFormat::DateTime),
        PrimitiveKind::Uuid => SchemaNode::string(StringFormat::Uuid),
        PrimitiveKind::Int32 => SchemaNode::number(NumberFormat::Int32),
        PrimitiveKind::Int64 => SchemaNode::number(NumberFormat::Int64),
        PrimitiveKind::Float32 => SchemaNode::number(NumberFormat::Float32),
        PrimitiveKind::Float64 | PrimitiveKind::Decimal => SchemaNode::number(NumberFormat::Float64),
        PrimitiveKind::Boolean => SchemaNode::boolean(),
        PrimitiveKind::Object => SchemaNode::dynamic(),
    }
}
