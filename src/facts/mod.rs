//! # Type Facts
//!
//! The boundary between the inspection engine and whatever enumerates types in
//! the host ecosystem. The engine never introspects anything itself: it asks a
//! [`TypeFacts`] provider for [`TypeDescription`]s keyed by [`TypeKey`].
//!
//! A thin adapter per host ecosystem implements [`TypeFacts`]. The crate ships
//! [`TypeCatalog`], a declarative provider that can be built in code or loaded
//! from a YAML/JSON document:
//!
//! ```yaml
//! types:
//!   - key: Shop.Order
//!     name: Order
//!     namespace: Shop
//!     module: Shop
//!     shape: { kind: struct }
//!     properties:
//!       - { name: Id, type: int32 }
//!       - { name: Lines, type: "List[Shop.OrderLine]" }
//!   - key: "List[Shop.OrderLine]"
//!     name: List
//!     module: System
//!     shape: { kind: collection, element: Shop.OrderLine }
//! ```

mod catalog;
mod load;
mod types;

pub use catalog::*;
pub use load::*;
pub use types::*;

/// Source of type metadata for one inspection run.
pub trait TypeFacts {
    /// Look up a type by key. `None` means the provider knows nothing about it.
    fn describe(&self, key: &TypeKey) -> Option<&TypeDescription>;

    /// Every declared type, in a stable order.
    fn types(&self) -> Box<dyn Iterator<Item = &TypeDescription> + '_>;
}
