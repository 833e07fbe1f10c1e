//! Strata Authorization Engine
//!
//! Decides whether an identity may perform an operation on a catalog entity.
//! Every governed entity kind resolves, possibly through a multi-hop
//! ownership chain, to the investigation(s) governing it; the permission
//! grants attached to those investigations are then scanned for one carrying
//! the requested access flag.
//!
//! Two-step pipeline:
//! - Scope projection ([`scope::project_scopes`]): entity → governing
//!   investigations.
//! - Permission evaluation ([`Gatekeeper`]): identity + scopes + access kind
//!   → grant, or a typed denial.
//!
//! Decisions are pure, synchronous reads over caller-supplied entity graphs;
//! persistence, entity lifecycle, and the service layer live elsewhere.

pub mod access;
pub mod audit;
pub mod entities;
pub mod error;
pub mod flags;
pub mod gatekeeper;
pub mod scope;

pub use access::AccessKind;
pub use audit::{AuditEvent, AuditSink, TracingAudit};
pub use entities::{
    Datafile, DatafileParameter, Dataset, DatasetParameter, Entity, EntityKind, Investigation,
    InvestigationPermission, Sample, SampleParameter, Study, StudyInvestigation,
};
pub use error::AuthzError;
pub use flags::PermissionFlags;
pub use gatekeeper::Gatekeeper;
pub use scope::project_scopes;
