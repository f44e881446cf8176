//! # Schema Graph
//!
//! Turns tracked identities into a tagged, cross-referenced schema graph.
//!
//! Common types (strings, numbers, booleans, dynamic values, arrays) are
//! inlined wherever they are used. Everything else with a name (structs,
//! enums, open generic definitions, generic parameters) is recorded once in
//! a [`TypeGraph`] under its [`TrackedIdentity`](crate::tracker::TrackedIdentity)
//! and referred to by identity everywhere else. Closed generic instances are
//! never recorded; they become a reference to their open definition plus the
//! resolved arguments.
//!
//! ## Resolution rules
//!
//! | Facts shape            | Schema                                  |
//! |------------------------|-----------------------------------------|
//! | primitive              | inline `common`                         |
//! | collection             | inline `common/array`                   |
//! | enum (integer backing) | `custom/numberEnum`                     |
//! | generic definition     | `custom/generic`                        |
//! | generic instance       | `reference/generic` to the definition   |
//! | generic parameter      | `custom/genericParameter`               |
//! | struct                 | `custom/struct`                         |
//! | async wrapper          | its payload                             |
//!
//! Field naming and enum members are pluggable through [`PropertyStrategy`]
//! and [`EnumStrategy`].

mod context;
mod resolver;
mod strategy;
mod types;


pub use context::{primitive_schema, ResolveContext};
pub use resolver::TypeDefinitionResolver;
pub use strategy::{CamelCaseProperties, EnumStrategy, NumericEnums, PropertyStrategy};
pub use types::*;
