//! # API Surface
//!
//! Describes the callable surface of the inspected code as a list of
//! [`EndpointDescriptor`]s: one per public action member of every controller
//! declared in a searched module.
//!
//! ## Routes
//!
//! The controller template and the member template are joined on `/`:
//!
//! - `[controller]` becomes the controller name without its suffix
//!   (`OrdersController` → `Orders`)
//! - `[action]` becomes the member name
//! - a member template starting with `/` or `~/` ignores the controller template
//! - without any member template the member name is used
//!
//! ## Parameter positions
//!
//! 1. an explicit source annotation
//! 2. `route` when the joined route has a `{name}` placeholder (any case,
//!    constraints and defaults allowed)
//! 3. the verb default: `query` for GET, `body` for POST, PUT, PATCH and
//!    DELETE; HEAD and OPTIONS require an explicit source
//!
//! Host-injected parameters (`services`) are not part of the surface.

mod extract;
mod route;
mod types;

pub use extract::{
    ApiSurfaceExtractor, PlannedEndpoint, PlannedParameter, DEFAULT_CONTROLLER_SUFFIX,
};
pub use route::{controller_route_name, has_placeholder, join_route, route_placeholders};
pub use types::*;
