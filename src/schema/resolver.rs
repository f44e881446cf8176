use super::context::ResolveContext;
use super::strategy::{EnumStrategy, PropertyStrategy};
use super::types::{
    CustomType, GenericParameterType, GenericType, NumberEnumType, StructType, TypeGraph,
};
use crate::error::{InspectError, Result};
use crate::facts::{GenericOwner, TypeKey, TypeShape};
use crate::naming::NamingStrategy;
use crate::tracker::TrackedIdentity;

/// Builds one schema definition per tracked type.
///
/// Runs after tracking has finished, so every reference it emits points at an
/// identity that already exists.
pub struct TypeDefinitionResolver<'a> {
    context: ResolveContext<'a>,
    naming: &'a dyn NamingStrategy,
    properties: &'a dyn PropertyStrategy,
    enums: &'a dyn EnumStrategy,
}

impl<'a> TypeDefinitionResolver<'a> {
    pub fn new(
        context: ResolveContext<'a>,
        naming: &'a dyn NamingStrategy,
        properties: &'a dyn PropertyStrategy,
        enums: &'a dyn EnumStrategy,
    ) -> Self {
        TypeDefinitionResolver {
            context,
            naming,
            properties,
            enums,
        }
    }

    pub fn context(&self) -> &ResolveContext<'a> {
        &self.context
    }

    /// Resolve every tracked identity, in identity order.
    ///
    /// # Errors
    ///
    /// The first definition error aborts the run. A reference left without a
    /// definition is reported as [`InspectError::DanglingReference`].
    pub fn generate_type_definitions(&self) -> Result<TypeGraph> {
        let identities = self.context.identities();
        let mut graph = TypeGraph::default();
        for (id, key) in identities.iter() {
            if let Some(definition) = self.definition_for(id, key)? {
                graph.insert(definition);
            }
        }

        if let Some(&id) = graph.dangling_references().first() {
            return Err(InspectError::DanglingReference { id });
        }

        tracing::info!(
            tracked = identities.len(),
            definitions = graph.len(),
            "generated type definitions"
        );
        Ok(graph)
    }

    /// The definition recorded for `key`, or `None` for types that are only
    /// ever inlined or referenced (primitives, collections, async wrappers,
    /// closed generic instances).
    pub fn definition_for(&self, id: TrackedIdentity, key: &TypeKey) -> Result<Option<CustomType>> {
        let ctx = &self.context;
        let desc = ctx.describe(key)?;

        let definition = match &desc.shape {
            TypeShape::Primitive { .. }
            | TypeShape::Collection { .. }
            | TypeShape::Async { .. }
            | TypeShape::GenericInstance { .. } => return Ok(None),
            TypeShape::Enum { .. } => CustomType::NumberEnum(NumberEnumType {
                id,
                names: self.naming.names_for(desc),
                description: desc.description.clone(),
                members: self.enums.members_for(desc)?,
            }),
            TypeShape::GenericDefinition { parameters } => CustomType::Generic(GenericType {
                id,
                names: self.naming.names_for(desc),
                description: desc.description.clone(),
                fields: self.properties.fields_for(desc, ctx)?,
                parameters: parameters
                    .iter()
                    .map(|param| ctx.reference_for(param))
                    .collect::<Result<Vec<_>>>()?,
            }),
            TypeShape::GenericParameter {
                owner,
                position,
                constraints,
            } => {
                let owner = match owner {
                    GenericOwner::Method { name } => {
                        return Err(InspectError::UnsupportedShape {
                            ty: key.clone(),
                            reason: format!("declared by generic method `{name}`"),
                        })
                    }
                    GenericOwner::Type { key: owner } => ctx.identity_of(owner).ok_or_else(|| {
                        InspectError::UntrackedOwner {
                            parameter: key.clone(),
                            owner: owner.clone(),
                        }
                    })?,
                };
                CustomType::GenericParameter(GenericParameterType {
                    id,
                    name: desc.name.clone(),
                    owner,
                    position: *position,
                    constraints: constraints
                        .iter()
                        .map(|c| ctx.reference_for(c))
                        .collect::<Result<Vec<_>>>()?,
                })
            }
            TypeShape::Struct => CustomType::Struct(StructType {
                id,
                names: self.naming.names_for(desc),
                description: desc.description.clone(),
                fields: self.properties.fields_for(desc, ctx)?,
            }),
        };
        tracing::trace!(%id, ty = %key, "resolved definition");
        Ok(Some(definition))
    }
}
