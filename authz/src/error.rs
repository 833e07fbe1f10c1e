//! Authorization failure taxonomy.

use thiserror::Error;
use uuid::Uuid;

use crate::access::AccessKind;
use crate::entities::EntityKind;

/// Errors produced by authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    /// No qualifying grant exists in any projected scope.
    ///
    /// Expected, user-facing outcome. The message names the identity, the
    /// access kind, and the entity, but never enumerates existing grants.
    #[error("user '{user}' does not have permission to perform '{access}' on {entity_kind} {entity_id}")]
    AccessDenied {
        user: String,
        access: AccessKind,
        entity_kind: EntityKind,
        entity_id: Uuid,
    },

    /// A required ownership reference was absent mid-chain.
    ///
    /// Data-integrity fault upstream of authorization. Must be surfaced
    /// distinctly from a denial; re-fetching the missing reference is the
    /// caller's responsibility.
    #[error("{entity_kind} {entity_id} has no resolvable '{missing}' reference")]
    BrokenChain {
        entity_kind: EntityKind,
        entity_id: Uuid,
        missing: &'static str,
    },
}
