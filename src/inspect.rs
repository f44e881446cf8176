//! # Inspection Runs
//!
//! [`Inspector`] wires the facts provider, tracker, resolver and API
//! extractor together for one run:
//!
//! 1. plan endpoints from controller members, clearing responses that have
//!    no schema definition
//! 2. seed configured entry points, then every endpoint parameter and
//!    response type
//! 3. track all reachable types
//! 4. resolve one definition per tracked type
//! 5. resolve endpoint schemas
//!
//! Every call to [`Inspector::inspect`] owns its own tracker and resolver;
//! the returned document is an immutable snapshot.

use crate::api::{ApiSurfaceExtractor, EndpointDescriptor};
use crate::config::InspectOptions;
use crate::error::Result;
use crate::facts::{TypeFacts, TypeKey};
use crate::naming::{DefaultNaming, NamingStrategy};
use crate::schema::{
    CamelCaseProperties, EnumStrategy, NumericEnums, PropertyStrategy, ResolveContext, SchemaNode,
    TypeDefinitionResolver, TypeGraph,
};
use crate::tracker::{DependencyTracker, IdentityMap, ModuleScope, TypeTrackStrategy};
use serde::{Deserialize, Serialize};

/// Wire output of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionDocument {
    /// `kind = custom` nodes in identity order.
    pub definitions: Vec<SchemaNode>,
    pub apis: Vec<EndpointDescriptor>,
}

/// Everything one run produced, before flattening into a document.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub identities: IdentityMap<TypeKey>,
    pub graph: TypeGraph,
    pub apis: Vec<EndpointDescriptor>,
}

impl From<Inspection> for InspectionDocument {
    fn from(inspection: Inspection) -> Self {
        InspectionDocument {
            definitions: inspection.graph.into_nodes(),
            apis: inspection.apis,
        }
    }
}

pub struct Inspector<'a> {
    facts: &'a dyn TypeFacts,
    options: InspectOptions,
    scope: ModuleScope,
    naming: Box<dyn NamingStrategy + 'a>,
    properties: Box<dyn PropertyStrategy + 'a>,
    enums: Box<dyn EnumStrategy + 'a>,
}

impl<'a> Inspector<'a> {
    pub fn new(facts: &'a dyn TypeFacts, options: InspectOptions) -> Self {
        let scope = ModuleScope::new(options.searched_modules.iter().cloned());
        Inspector {
            facts,
            options,
            scope,
            naming: Box::new(DefaultNaming),
            properties: Box::new(CamelCaseProperties),
            enums: Box::new(NumericEnums),
        }
    }

    pub fn with_naming(mut self, naming: impl NamingStrategy + 'a) -> Self {
        self.naming = Box::new(naming);
        self
    }

    pub fn with_property_strategy(mut self, properties: impl PropertyStrategy + 'a) -> Self {
        self.properties = Box::new(properties);
        self
    }

    pub fn with_enum_strategy(mut self, enums: impl EnumStrategy + 'a) -> Self {
        self.enums = Box::new(enums);
        self
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    /// Run the inspection and flatten the result into its wire document.
    ///
    /// # Errors
    ///
    /// Any definition or parameter error aborts the whole run; see
    /// [`InspectError`](crate::InspectError).
    pub fn inspect(&self) -> Result<InspectionDocument> {
        self.run().map(InspectionDocument::from)
    }

    /// Run the inspection, keeping identities and the graph addressable.
    pub fn run(&self) -> Result<Inspection> {
        let span = tracing::info_span!(
            "inspect",
            modules = self.scope.modules().count(),
            tracked = tracing::field::Empty,
            definitions = tracing::field::Empty,
            endpoints = tracing::field::Empty,
        );
        let _guard = span.enter();

        let strategy = TypeTrackStrategy::new(self.facts, &self.scope);
        let extractor =
            ApiSurfaceExtractor::new(self.facts, &self.scope, &self.options.controller_suffix);
        let mut plan = extractor.plan()?;
        extractor.contain_responses(&mut plan, self.enums.as_ref());

        let mut tracker = DependencyTracker::new(strategy);
        for key in &self.options.extra_entry_points {
            tracker.add_entry_point(key.clone());
        }
        extractor.seed(&plan, &mut tracker);
        tracker.collect();
        let rejected = tracker.rejected_count();
        let identities = tracker.into_identities();

        let context = ResolveContext::new(self.facts, strategy, &identities);
        let resolver = TypeDefinitionResolver::new(
            context,
            self.naming.as_ref(),
            self.properties.as_ref(),
            self.enums.as_ref(),
        );
        let graph = resolver.generate_type_definitions()?;
        let apis = extractor.describe_endpoints(&plan, &context)?;

        span.record("tracked", identities.len());
        span.record("definitions", graph.len());
        span.record("endpoints", apis.len());
        tracing::info!(
            tracked = identities.len(),
            out_of_scope = rejected,
            definitions = graph.len(),
            endpoints = apis.len(),
            "inspection complete"
        );

        Ok(Inspection {
            identities,
            graph,
            apis,
        })
    }
}
