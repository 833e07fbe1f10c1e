//! Permission evaluation over projected scopes.

use std::sync::Arc;

use uuid::Uuid;

use crate::access::AccessKind;
use crate::audit::{AuditEvent, AuditSink, TracingAudit};
use crate::entities::{Entity, EntityKind, Investigation};
use crate::error::AuthzError;
use crate::scope::project_scopes;

/// Authorization decision engine.
///
/// Stateless across calls: every decision is a pure read over the
/// caller-supplied entity graph, so one instance can be shared freely
/// between request handlers. The only injected collaborator is the
/// [`AuditSink`] notified of each decision.
pub struct Gatekeeper {
    audit: Arc<dyn AuditSink>,
}

impl Gatekeeper {
    /// Engine with the default [`TracingAudit`] sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            audit: Arc::new(TracingAudit),
        }
    }

    /// Engine reporting decisions to the given sink.
    #[must_use]
    pub fn with_audit(audit: Arc<dyn AuditSink>) -> Self {
        Self { audit }
    }

    /// Decide whether `user` may perform `access` on `entity`.
    ///
    /// Projects the entity onto its governing investigations, then scans
    /// their permission grants. Returns silently on grant.
    ///
    /// # Errors
    ///
    /// [`AuthzError::AccessDenied`] when no qualifying grant exists;
    /// [`AuthzError::BrokenChain`] when an ownership reference required for
    /// projection is absent.
    pub fn authorize(
        &self,
        user: &str,
        entity: &Entity,
        access: AccessKind,
    ) -> Result<(), AuthzError> {
        let scopes = project_scopes(entity)?;
        self.evaluate(user, &scopes, access, entity.kind(), entity.id())
    }

    /// Scan `scopes` in order for a grant carrying the flag `access` maps to.
    ///
    /// The first qualifying grant wins and ends the whole request; no
    /// aggregation across scopes is performed, which is what gives studies
    /// their ANY-investigation semantics. An empty scope sequence denies.
    /// [`AccessKind::FineGrained`] has no backing flag and is granted before
    /// any scope is read.
    ///
    /// Grants are matched on access-kind flags only: the requesting `user`
    /// is never compared against a grant's `user_id`. Loaders are expected
    /// to supply the grant collection already filtered to the requesting
    /// user; a grant reaching this method is trusted as applicable.
    ///
    /// # Errors
    ///
    /// [`AuthzError::AccessDenied`] when every grant on every scope has been
    /// examined without a match.
    pub fn evaluate(
        &self,
        user: &str,
        scopes: &[Arc<Investigation>],
        access: AccessKind,
        entity_kind: EntityKind,
        entity_id: Uuid,
    ) -> Result<(), AuthzError> {
        let event = AuditEvent {
            user: user.to_string(),
            access,
            entity_kind,
            entity_id,
        };

        let Some(required) = access.flag() else {
            self.audit.granted(&event);
            return Ok(());
        };

        for investigation in scopes {
            for grant in &investigation.permissions {
                if grant.flags.has(required) {
                    self.audit.granted(&event);
                    return Ok(());
                }
            }
        }

        self.audit.denied(&event);
        Err(AuthzError::AccessDenied {
            user: event.user,
            access,
            entity_kind,
            entity_id,
        })
    }

    /// Non-failing variant of [`Self::authorize`].
    ///
    /// Maps a denial to `Ok(false)`; a broken ownership chain still
    /// propagates as an error.
    pub fn is_authorized(
        &self,
        user: &str,
        entity: &Entity,
        access: AccessKind,
    ) -> Result<bool, AuthzError> {
        match self.authorize(user, entity, access) {
            Ok(()) => Ok(true),
            Err(AuthzError::AccessDenied { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Keep only the entities `user` may `access`.
    ///
    /// Intended for filtering search results before they leave the service
    /// layer. Denied entities are dropped; a broken ownership chain aborts
    /// the whole filter.
    pub fn filter_authorized(
        &self,
        user: &str,
        entities: Vec<Entity>,
        access: AccessKind,
    ) -> Result<Vec<Entity>, AuthzError> {
        let mut kept = Vec::with_capacity(entities.len());
        for entity in entities {
            if self.is_authorized(user, &entity, access)? {
                kept.push(entity);
            }
        }
        Ok(kept)
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Gatekeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gatekeeper").finish_non_exhaustive()
    }
}
