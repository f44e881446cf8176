//! # typegraph
//!
//! **typegraph** turns type metadata into a portable, cross-referenced schema
//! graph plus a description of the API surface built on top of it. Client
//! generators consume the result to emit type definitions and API stubs.
//!
//! ## Overview
//!
//! Starting from the parameter and return types of every controller action,
//! a breadth-first tracker discovers each reachable type and gives it a
//! stable integer identity. Each tracked type then becomes exactly one tagged
//! schema node. Nested uses point at identities instead of re-embedding
//! structure, so the output stays finite and deduplicated even on cyclic
//! graphs.
//!
//! ## Architecture
//!
//! - **[`facts`]** - The [`TypeFacts`] provider boundary and the declarative [`TypeCatalog`]
//! - **[`tracker`]** - Generic breadth-first dependency tracking and type scope rules
//! - **[`naming`]** - Pluggable display names for definitions
//! - **[`schema`]** - Schema nodes, the type graph and the definition resolver
//! - **[`api`]** - Controller action discovery, routes and parameter positions
//! - **[`inspect`]** - One inspection run, end to end
//! - **[`config`]** - Inspection options from files or the environment
//! - **[`logging`]** - Subscriber setup for the binary
//! - **[`validator`]** - Catalog validation issues
//!
//! ### Inspection Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Inspector as inspect::Inspector
//!     participant Api as api::ApiSurfaceExtractor
//!     participant Tracker as tracker::DependencyTracker
//!     participant Resolver as schema::TypeDefinitionResolver
//!
//!     Caller->>Inspector: inspect()
//!     Inspector->>Api: plan()
//!     Api-->>Inspector: routes, verbs, positions
//!     Inspector->>Tracker: add_entry_point(...)
//!     Inspector->>Tracker: collect()
//!     Tracker-->>Inspector: IdentityMap
//!     Inspector->>Resolver: generate_type_definitions()
//!     Resolver-->>Inspector: TypeGraph
//!     Inspector->>Api: describe_endpoints()
//!     Api-->>Inspector: Vec<EndpointDescriptor>
//!     Inspector-->>Caller: InspectionDocument
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use typegraph::api::HttpVerb;
//! use typegraph::facts::{MethodDescription, TypeCatalog, TypeDescription, TypeShape};
//! use typegraph::{InspectOptions, Inspector};
//!
//! let catalog = TypeCatalog::from_descriptions(vec![
//!     TypeDescription::new("Shop.Order", "Order", "Shop", TypeShape::Struct)
//!         .with_property("Id", "int32"),
//!     TypeDescription::new("Shop.OrdersController", "OrdersController", "Shop", TypeShape::Struct)
//!         .as_controller(Some("api/[controller]"))
//!         .with_method(
//!             MethodDescription::action("Get")
//!                 .verb(HttpVerb::Get, Some("{id}"))
//!                 .param("id", "int32")
//!                 .returns("Shop.Order"),
//!         ),
//! ]);
//!
//! let document = Inspector::new(&catalog, InspectOptions::new(["Shop"]))
//!     .inspect()
//!     .unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! assert_eq!(document.apis[0].route, "api/Orders/{id}");
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod facts;
pub mod inspect;
pub mod logging;
pub mod naming;
pub mod schema;
pub mod tracker;
pub mod validator;

pub use config::InspectOptions;
pub use error::{InspectError, Result};
pub use facts::{load_catalog, TypeCatalog, TypeDescription, TypeFacts, TypeKey};
pub use inspect::{Inspection, InspectionDocument, Inspector};
pub use schema::{SchemaNode, TypeGraph};
pub use tracker::{DependencyTracker, TrackStrategy, TrackedIdentity};
