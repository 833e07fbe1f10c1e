//! Catalog entity model consumed by the authorization engine.
//!
//! Entities are owned and mutated by the persistence layer; this crate only
//! reads ownership links and permission flags for the duration of a single
//! decision. Parent references are `Option<Arc<_>>`: the loader resolves and
//! shares them, and `None` at a link the projector must follow is a
//! data-integrity fault, not a denial.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::flags::PermissionFlags;

/// Top-level authorization scope. Permission grants attach here.
#[derive(Debug, Clone, Serialize)]
pub struct Investigation {
    pub id: Uuid,
    pub name: String,
    /// Facility visit this investigation belongs to.
    pub visit_id: Option<String>,
    pub title: Option<String>,
    pub permissions: Vec<InvestigationPermission>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One permission grant attached to an investigation.
#[derive(Debug, Clone, Serialize)]
pub struct InvestigationPermission {
    pub id: Uuid,
    /// Identity this grant was issued to. Evaluation does not re-check it;
    /// loaders supply the grant collection already scoped to the requesting
    /// user (see [`crate::Gatekeeper::evaluate`]).
    pub user_id: String,
    pub flags: PermissionFlags,
    pub granted_by: Option<String>,
    pub granted_at: DateTime<Utc>,
}

/// Composite aggregating several investigations via join records.
#[derive(Debug, Clone, Serialize)]
pub struct Study {
    pub id: Uuid,
    pub name: String,
    pub investigations: Vec<StudyInvestigation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Join record linking a study to one investigation.
#[derive(Debug, Clone, Serialize)]
pub struct StudyInvestigation {
    pub id: Uuid,
    pub investigation: Option<Arc<Investigation>>,
}

/// A collection of datafiles gathered under one investigation.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub id: Uuid,
    pub name: String,
    pub investigation: Option<Arc<Investigation>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single file registered in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Datafile {
    pub id: Uuid,
    pub name: String,
    /// Storage location as recorded by the ingest pipeline.
    pub location: Option<String>,
    pub dataset: Option<Arc<Dataset>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Physical sample examined during an investigation.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub id: Uuid,
    pub name: String,
    pub investigation: Option<Arc<Investigation>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Name/value annotation on a sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleParameter {
    pub id: Uuid,
    pub name: String,
    pub units: Option<String>,
    pub value: Option<String>,
    pub sample: Option<Arc<Sample>>,
}

/// Name/value annotation on a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetParameter {
    pub id: Uuid,
    pub name: String,
    pub units: Option<String>,
    pub value: Option<String>,
    pub dataset: Option<Arc<Dataset>>,
}

/// Name/value annotation on a datafile.
#[derive(Debug, Clone, Serialize)]
pub struct DatafileParameter {
    pub id: Uuid,
    pub name: String,
    pub units: Option<String>,
    pub value: Option<String>,
    pub datafile: Option<Arc<Datafile>>,
}

/// Closed set of entity kinds whose access is governed by investigations.
///
/// Each variant resolves to its governing investigation(s) through a fixed
/// ownership chain; see [`crate::scope::project_scopes`].
#[derive(Debug, Clone, Serialize)]
pub enum Entity {
    Investigation(Arc<Investigation>),
    Study(Arc<Study>),
    Dataset(Arc<Dataset>),
    Datafile(Arc<Datafile>),
    Sample(Arc<Sample>),
    SampleParameter(Arc<SampleParameter>),
    DatasetParameter(Arc<DatasetParameter>),
    DatafileParameter(Arc<DatafileParameter>),
}

impl Entity {
    /// The kind tag for diagnostics and audit records.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Investigation(_) => EntityKind::Investigation,
            Self::Study(_) => EntityKind::Study,
            Self::Dataset(_) => EntityKind::Dataset,
            Self::Datafile(_) => EntityKind::Datafile,
            Self::Sample(_) => EntityKind::Sample,
            Self::SampleParameter(_) => EntityKind::SampleParameter,
            Self::DatasetParameter(_) => EntityKind::DatasetParameter,
            Self::DatafileParameter(_) => EntityKind::DatafileParameter,
        }
    }

    /// Primary key of the wrapped entity.
    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            Self::Investigation(e) => e.id,
            Self::Study(e) => e.id,
            Self::Dataset(e) => e.id,
            Self::Datafile(e) => e.id,
            Self::Sample(e) => e.id,
            Self::SampleParameter(e) => e.id,
            Self::DatasetParameter(e) => e.id,
            Self::DatafileParameter(e) => e.id,
        }
    }
}

impl From<Arc<Investigation>> for Entity {
    fn from(value: Arc<Investigation>) -> Self {
        Self::Investigation(value)
    }
}

impl From<Arc<Study>> for Entity {
    fn from(value: Arc<Study>) -> Self {
        Self::Study(value)
    }
}

impl From<Arc<Dataset>> for Entity {
    fn from(value: Arc<Dataset>) -> Self {
        Self::Dataset(value)
    }
}

impl From<Arc<Datafile>> for Entity {
    fn from(value: Arc<Datafile>) -> Self {
        Self::Datafile(value)
    }
}

impl From<Arc<Sample>> for Entity {
    fn from(value: Arc<Sample>) -> Self {
        Self::Sample(value)
    }
}

impl From<Arc<SampleParameter>> for Entity {
    fn from(value: Arc<SampleParameter>) -> Self {
        Self::SampleParameter(value)
    }
}

impl From<Arc<DatasetParameter>> for Entity {
    fn from(value: Arc<DatasetParameter>) -> Self {
        Self::DatasetParameter(value)
    }
}

impl From<Arc<DatafileParameter>> for Entity {
    fn from(value: Arc<DatafileParameter>) -> Self {
        Self::DatafileParameter(value)
    }
}

/// Entity kind tag used in audit records and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Investigation,
    Study,
    Dataset,
    Datafile,
    Sample,
    SampleParameter,
    DatasetParameter,
    DatafileParameter,
}

impl EntityKind {
    /// Returns the entity name used in audit records and error messages.
    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        match self {
            Self::Investigation => "investigation",
            Self::Study => "study",
            Self::Dataset => "dataset",
            Self::Datafile => "datafile",
            Self::Sample => "sample",
            Self::SampleParameter => "sample_parameter",
            Self::DatasetParameter => "dataset_parameter",
            Self::DatafileParameter => "datafile_parameter",
        }
    }

    /// Returns all governed entity kinds as a slice.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Investigation,
            Self::Study,
            Self::Dataset,
            Self::Datafile,
            Self::Sample,
            Self::SampleParameter,
            Self::DatasetParameter,
            Self::DatafileParameter,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.entity_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investigation() -> Arc<Investigation> {
        Arc::new(Investigation {
            id: Uuid::new_v4(),
            name: "EXP-100".to_string(),
            visit_id: Some("V1".to_string()),
            title: None,
            permissions: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    #[test]
    fn test_entity_kind_dispatch() {
        let inv = investigation();
        let dataset = Arc::new(Dataset {
            id: Uuid::new_v4(),
            name: "raw".to_string(),
            investigation: Some(inv.clone()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

        assert_eq!(Entity::from(inv).kind(), EntityKind::Investigation);
        assert_eq!(Entity::from(dataset).kind(), EntityKind::Dataset);
    }

    #[test]
    fn test_entity_id_matches_wrapped_entity() {
        let inv = investigation();
        let entity = Entity::from(inv.clone());
        assert_eq!(entity.id(), inv.id);
    }

    #[test]
    fn test_entity_names_are_snake_case() {
        for kind in EntityKind::all() {
            let name = kind.entity_name();
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "Entity name '{}' should be snake_case",
                name
            );
        }
    }

    #[test]
    fn test_entity_names_are_unique() {
        let names: Vec<&str> = EntityKind::all().iter().map(|k| k.entity_name()).collect();

        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate entity name found: {}", name);
                }
            }
        }
    }

    #[test]
    fn test_all_returns_all_variants() {
        assert_eq!(EntityKind::all().len(), 8);
    }

    #[test]
    fn test_display_matches_entity_name() {
        for kind in EntityKind::all() {
            assert_eq!(kind.to_string(), kind.entity_name());
        }
    }

    #[test]
    fn test_serde_matches_entity_name() {
        for kind in EntityKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            let expected = format!("\"{}\"", kind.entity_name());
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn test_shared_parent_is_not_cloned() {
        let inv = investigation();
        let a = Arc::new(Dataset {
            id: Uuid::new_v4(),
            name: "a".to_string(),
            investigation: Some(inv.clone()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        let b = Arc::new(Dataset {
            id: Uuid::new_v4(),
            name: "b".to_string(),
            investigation: Some(inv.clone()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

        assert!(Arc::ptr_eq(
            a.investigation.as_ref().unwrap(),
            b.investigation.as_ref().unwrap()
        ));
    }
}
