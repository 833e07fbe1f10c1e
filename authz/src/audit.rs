//! Audit emission for authorization decisions.
//!
//! Every decision is reported to an injected [`AuditSink`]. Emission is
//! observability only; sink behavior never affects the decision.

use serde::Serialize;
use uuid::Uuid;

use crate::access::AccessKind;
use crate::entities::EntityKind;

/// Diagnostic fields carried by every decision event.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub user: String,
    pub access: AccessKind,
    pub entity_kind: EntityKind,
    pub entity_id: Uuid,
}

/// Collaborator notified of authorization decisions.
///
/// Implementations must not panic; a decision stands regardless of what the
/// sink does with the event.
pub trait AuditSink: Send + Sync {
    /// Called once when a request is granted.
    fn granted(&self, event: &AuditEvent);

    /// Called once when a request is denied.
    fn denied(&self, event: &AuditEvent);
}

/// Default sink emitting structured tracing events.
///
/// Grants are informational; denials are warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn granted(&self, event: &AuditEvent) {
        tracing::debug!(
            user = %event.user,
            access = event.access.action_name(),
            entity_kind = event.entity_kind.entity_name(),
            entity_id = %event.entity_id,
            "access granted"
        );
    }

    fn denied(&self, event: &AuditEvent) {
        tracing::warn!(
            user = %event.user,
            access = event.access.action_name(),
            entity_kind = event.entity_kind.entity_name(),
            entity_id = %event.entity_id,
            "access denied"
        );
    }
}
