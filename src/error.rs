use crate::api::HttpVerb;
use crate::facts::TypeKey;
use crate::tracker::TrackedIdentity;
use crate::validator::ValidationIssue;

/// Errors that abort an inspection run.
///
/// Scope misses are never errors: a dependency pointing outside the searched
/// modules is simply left out of the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    /// The facts provider has no description for a referenced key.
    #[error("type `{0}` is not described by the facts provider")]
    UnknownType(TypeKey),

    /// Only integer-backed enums can be described.
    #[error("enum `{ty}` is string-backed; only integer-backed enums are supported")]
    UnsupportedEnumBacking { ty: TypeKey },

    #[error("type `{ty}` has an unsupported shape: {reason}")]
    UnsupportedShape { ty: TypeKey, reason: String },

    #[error("generic parameter `{parameter}` is declared by `{owner}`, which was never tracked")]
    UntrackedOwner { parameter: TypeKey, owner: TypeKey },

    /// No source annotation, no route placeholder, and the verb has no default position.
    #[error(
        "cannot infer the position of parameter `{parameter}` on `{endpoint}` for {verb} requests; \
         annotate its source explicitly"
    )]
    AmbiguousParameterPosition {
        endpoint: String,
        parameter: String,
        verb: HttpVerb,
    },

    #[error("reference to identity {id} has no definition in the type graph")]
    DanglingReference { id: TrackedIdentity },

    #[error("type catalog is invalid ({count} issue(s))")]
    InvalidCatalog {
        count: usize,
        issues: Vec<ValidationIssue>,
    },
}

pub type Result<T, E = InspectError> = std::result::Result<T, E>;
