use super::context::ResolveContext;
use super::types::{EnumValue, FieldSchema};
use crate::error::{InspectError, Result};
use crate::facts::{EnumBacking, TypeDescription, TypeShape};
use heck::ToLowerCamelCase;

/// Decides which properties of a type become schema fields, and how they
/// are named.
pub trait PropertyStrategy {
    fn fields_for(
        &self,
        desc: &TypeDescription,
        context: &ResolveContext<'_>,
    ) -> Result<Vec<FieldSchema>>;
}

/// Turns enum declarations into member lists.
pub trait EnumStrategy {
    fn members_for(&self, desc: &TypeDescription) -> Result<Vec<EnumValue>>;
}

/// Keeps properties whose type is common or in scope, renamed to
/// lowerCamelCase. Every other property is left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseProperties;

impl PropertyStrategy for CamelCaseProperties {
    fn fields_for(
        &self,
        desc: &TypeDescription,
        context: &ResolveContext<'_>,
    ) -> Result<Vec<FieldSchema>> {
        let mut fields = Vec::with_capacity(desc.properties.len());
        for prop in &desc.properties {
            context.describe(&prop.ty)?;
            if !context.is_common(&prop.ty) && !context.is_in_scope(&prop.ty) {
                tracing::debug!(
                    owner = %desc.key,
                    property = %prop.name,
                    ty = %prop.ty,
                    "property type out of scope; dropped"
                );
                continue;
            }
            fields.push(FieldSchema {
                name: prop.name.to_lower_camel_case(),
                schema: context.reference_for(&prop.ty)?,
            });
        }
        Ok(fields)
    }
}

/// Integer-backed enums, members in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericEnums;

impl EnumStrategy for NumericEnums {
    fn members_for(&self, desc: &TypeDescription) -> Result<Vec<EnumValue>> {
        match &desc.shape {
            TypeShape::Enum {
                backing: EnumBacking::Integer,
                members,
            } => Ok(members
                .iter()
                .map(|m| EnumValue {
                    name: m.name.clone(),
                    value: m.value,
                    description: m.description.clone(),
                })
                .collect()),
            TypeShape::Enum {
                backing: EnumBacking::String,
                ..
            } => Err(InspectError::UnsupportedEnumBacking {
                ty: desc.key.clone(),
            }),
            _ => Err(InspectError::UnsupportedShape {
                ty: desc.key.clone(),
                reason: "not an enum".to_string(),
            }),
        }
    }
}
