use super::route::{controller_route_name, has_placeholder, join_route};
use super::types::{EndpointDescriptor, EndpointParameter, HttpVerb, ParameterPosition};
use crate::error::{InspectError, Result};
use crate::facts::{
    GenericOwner, MethodDescription, ParameterDescription, ParameterSource, TypeDescription,
    TypeFacts, TypeKey, TypeShape,
};
use crate::schema::{EnumStrategy, ResolveContext};
use std::collections::BTreeSet;
use crate::tracker::{DependencyTracker, ModuleScope, TrackStrategy, TypeTrackStrategy};

/// Default suffix removed from controller names before `[controller]`
/// substitution.
pub const DEFAULT_CONTROLLER_SUFFIX: &str = "Controller";

/// An endpoint whose route and parameter positions are known but whose
/// schemas are not resolved yet.
#[derive(Debug, Clone)]
pub struct PlannedEndpoint<'a> {
    pub controller: &'a TypeDescription,
    pub method: &'a MethodDescription,
    pub verb: HttpVerb,
    pub route: String,
    pub parameters: Vec<PlannedParameter<'a>>,
    /// Return type with async wrappers removed; `None` for void members and
    /// for responses cleared by [`ApiSurfaceExtractor::contain_responses`].
    pub response: Option<TypeKey>,
}

#[derive(Debug, Clone)]
pub struct PlannedParameter<'a> {
    pub description: &'a ParameterDescription,
    /// Parameter type with async wrappers removed.
    pub ty: TypeKey,
    pub position: ParameterPosition,
}

impl PlannedEndpoint<'_> {
    /// Every type the endpoint needs in the graph, parameters first.
    pub fn entry_types(&self) -> impl Iterator<Item = &TypeKey> {
        self.parameters
            .iter()
            .map(|p| &p.ty)
            .chain(self.response.iter())
    }
}

/// Walks controller members and describes each one as an endpoint.
///
/// Extraction runs in two phases around tracking: [`plan`](Self::plan)
/// computes routes and positions and yields the types to seed, then
/// [`describe_endpoints`](Self::describe_endpoints) resolves their schemas
/// once identities exist.
pub struct ApiSurfaceExtractor<'a> {
    facts: &'a dyn TypeFacts,
    scope: &'a ModuleScope,
    controller_suffix: &'a str,
}

impl<'a> ApiSurfaceExtractor<'a> {
    pub fn new(facts: &'a dyn TypeFacts, scope: &'a ModuleScope, controller_suffix: &'a str) -> Self {
        ApiSurfaceExtractor {
            facts,
            scope,
            controller_suffix,
        }
    }

    /// Controller types declared in a searched module, in facts order.
    pub fn controllers(&self) -> impl Iterator<Item = &'a TypeDescription> + 'a {
        let scope = self.scope;
        self.facts
            .types()
            .filter(move |desc| desc.is_controller() && scope.contains(&desc.module))
    }

    /// Public instance members that are not constructors, accessors or
    /// explicitly excluded.
    pub fn is_entry_point(method: &MethodDescription) -> bool {
        method.public
            && !method.is_static
            && !method.constructor
            && !method.accessor
            && !method.non_action
    }

    /// Route, verb and parameter positions for every entry-point member.
    ///
    /// # Errors
    ///
    /// [`InspectError::AmbiguousParameterPosition`] when a parameter has no
    /// explicit source, is not a route placeholder and the verb has no
    /// default position.
    pub fn plan(&self) -> Result<Vec<PlannedEndpoint<'a>>> {
        let strategy = TypeTrackStrategy::new(self.facts, self.scope);
        let mut endpoints = Vec::new();

        for controller in self.controllers() {
            let controller_template = controller
                .controller
                .as_ref()
                .and_then(|c| c.route.as_deref())
                .unwrap_or("");
            let route_name = controller_route_name(&controller.name, self.controller_suffix);

            for method in controller.methods.iter().filter(|m| Self::is_entry_point(m)) {
                let annotation = method.verbs.first();
                let verb = annotation.map_or(HttpVerb::Get, |a| a.verb);
                let member_template = method
                    .route
                    .as_deref()
                    .or_else(|| annotation.and_then(|a| a.template.as_deref()))
                    .unwrap_or(method.name.as_str());
                let route = join_route(controller_template, member_template, route_name, &method.name);

                let mut parameters = Vec::with_capacity(method.parameters.len());
                for param in &method.parameters {
                    let Some(position) = classify_parameter(controller, method, param, &route, verb)?
                    else {
                        continue;
                    };
                    parameters.push(PlannedParameter {
                        description: param,
                        ty: strategy.unwrap_async(&param.ty).unwrap_or_else(|| param.ty.clone()),
                        position,
                    });
                }

                let response = method
                    .returns
                    .as_ref()
                    .and_then(|ret| strategy.unwrap_async(ret));

                tracing::debug!(
                    controller = %controller.name,
                    member = %method.name,
                    %verb,
                    route = %route,
                    "planned endpoint"
                );
                endpoints.push(PlannedEndpoint {
                    controller,
                    method,
                    verb,
                    route,
                    parameters,
                    response,
                });
            }
        }
        Ok(endpoints)
    }

    /// Clear responses whose type has no schema definition, so they are never
    /// seeded and resolve to a dynamic node instead of failing the run.
    ///
    /// Covers method-owned generic parameters and enums rejected by `enums`,
    /// including when they appear as collection elements or generic
    /// arguments of the response. The same types still fail when reached
    /// through a parameter or a field.
    pub fn contain_responses(&self, plan: &mut [PlannedEndpoint<'_>], enums: &dyn EnumStrategy) {
        for endpoint in plan.iter_mut() {
            let Some(response) = &endpoint.response else {
                continue;
            };
            let mut seen = BTreeSet::new();
            if let Some(err) = self.unsupported_in(response, enums, &mut seen) {
                tracing::warn!(
                    controller = %endpoint.controller.name,
                    member = %endpoint.method.name,
                    ty = %response,
                    error = %err,
                    "response type degraded to dynamic"
                );
                endpoint.response = None;
            }
        }
    }

    fn unsupported_in(
        &self,
        key: &TypeKey,
        enums: &dyn EnumStrategy,
        seen: &mut BTreeSet<TypeKey>,
    ) -> Option<InspectError> {
        if !seen.insert(key.clone()) {
            return None;
        }
        let desc = self.facts.describe(key)?;
        match &desc.shape {
            TypeShape::GenericParameter {
                owner: GenericOwner::Method { name },
                ..
            } => Some(InspectError::UnsupportedShape {
                ty: key.clone(),
                reason: format!("declared by generic method `{name}`"),
            }),
            TypeShape::Enum { .. } => enums.members_for(desc).err(),
            TypeShape::Collection { element } => self.unsupported_in(element, enums, seen),
            TypeShape::Async {
                result: Some(result),
            } => self.unsupported_in(result, enums, seen),
            TypeShape::GenericInstance { arguments, .. } => arguments
                .iter()
                .find_map(|arg| self.unsupported_in(arg, enums, seen)),
            _ => None,
        }
    }

    /// Register every parameter and response type of `plan` as an entry point.
    pub fn seed<S>(&self, plan: &[PlannedEndpoint<'_>], tracker: &mut DependencyTracker<TypeKey, S>)
    where
        S: TrackStrategy<TypeKey>,
    {
        for endpoint in plan {
            for ty in endpoint.entry_types() {
                tracker.add_entry_point(ty.clone());
            }
        }
    }

    /// Resolve parameter and response schemas of planned endpoints.
    ///
    /// Parameter resolution errors propagate; a response that cannot be
    /// resolved becomes a dynamic node.
    pub fn describe_endpoints(
        &self,
        plan: &[PlannedEndpoint<'_>],
        context: &ResolveContext<'_>,
    ) -> Result<Vec<EndpointDescriptor>> {
        plan.iter()
            .map(|endpoint| {
                let parameters = endpoint
                    .parameters
                    .iter()
                    .map(|p| {
                        Ok(EndpointParameter {
                            name: p.description.name.clone(),
                            schema: context.reference_for(&p.ty)?,
                            position: p.position,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(EndpointDescriptor {
                    route: endpoint.route.clone(),
                    name: endpoint.method.name.clone(),
                    controller: endpoint.controller.name.clone(),
                    verb: endpoint.verb,
                    parameters,
                    response: context.response_reference_for(endpoint.response.as_ref()),
                })
            })
            .collect()
    }
}

/// Position of one parameter, or `None` when it is injected by the host and
/// not part of the request.
fn classify_parameter(
    controller: &TypeDescription,
    method: &MethodDescription,
    param: &ParameterDescription,
    route: &str,
    verb: HttpVerb,
) -> Result<Option<ParameterPosition>> {
    let position = match param.source {
        Some(ParameterSource::Services) => return Ok(None),
        Some(ParameterSource::Route) => ParameterPosition::Route,
        Some(ParameterSource::Query) => ParameterPosition::Query,
        Some(ParameterSource::Body) => ParameterPosition::Body,
        Some(ParameterSource::Form) => ParameterPosition::Form,
        Some(ParameterSource::Header) => ParameterPosition::Header,
        None if has_placeholder(route, &param.name) => ParameterPosition::Route,
        None => match verb {
            HttpVerb::Get => ParameterPosition::Query,
            HttpVerb::Post | HttpVerb::Put | HttpVerb::Patch | HttpVerb::Delete => {
                ParameterPosition::Body
            }
            HttpVerb::Head | HttpVerb::Options => {
                return Err(InspectError::AmbiguousParameterPosition {
                    endpoint: format!("{}.{}", controller.name, method.name),
                    parameter: param.name.clone(),
                    verb,
                })
            }
        },
    };
    Ok(Some(position))
}
