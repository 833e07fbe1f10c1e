//! Scope projection: resolving a governed entity to the investigations that
//! must be consulted for an authorization decision.

use std::sync::Arc;

use uuid::Uuid;

use crate::entities::{Entity, EntityKind, Investigation};
use crate::error::AuthzError;

/// Resolve a governed entity to its authorization scopes.
///
/// Each kind follows a fixed ownership chain (one to three hops) to the
/// investigation(s) governing it; the chains are tree-shaped toward
/// [`Investigation`], so there is no cycle to guard against. A study
/// projects to every investigation referenced by its join records, in join
/// order. Duplicates are preserved, not collapsed: evaluation only needs one
/// positive match, so a scope reachable twice is harmless.
///
/// A study with zero join records projects to an empty sequence, which the
/// evaluator turns into a denial.
///
/// # Errors
///
/// [`AuthzError::BrokenChain`] if a reference required mid-chain is absent.
/// That is a data-integrity fault, never an authorization outcome.
pub fn project_scopes(entity: &Entity) -> Result<Vec<Arc<Investigation>>, AuthzError> {
    let kind = entity.kind();
    let id = entity.id();

    match entity {
        Entity::Investigation(inv) => Ok(vec![Arc::clone(inv)]),

        Entity::Dataset(ds) => Ok(vec![require(kind, id, &ds.investigation, "investigation")?]),

        Entity::Sample(sample) => Ok(vec![require(
            kind,
            id,
            &sample.investigation,
            "investigation",
        )?]),

        Entity::Datafile(df) => {
            let dataset = require(kind, id, &df.dataset, "dataset")?;
            Ok(vec![require(
                kind,
                id,
                &dataset.investigation,
                "dataset.investigation",
            )?])
        }

        Entity::SampleParameter(param) => {
            let sample = require(kind, id, &param.sample, "sample")?;
            Ok(vec![require(
                kind,
                id,
                &sample.investigation,
                "sample.investigation",
            )?])
        }

        Entity::DatasetParameter(param) => {
            let dataset = require(kind, id, &param.dataset, "dataset")?;
            Ok(vec![require(
                kind,
                id,
                &dataset.investigation,
                "dataset.investigation",
            )?])
        }

        Entity::DatafileParameter(param) => {
            let datafile = require(kind, id, &param.datafile, "datafile")?;
            let dataset = require(kind, id, &datafile.dataset, "datafile.dataset")?;
            Ok(vec![require(
                kind,
                id,
                &dataset.investigation,
                "datafile.dataset.investigation",
            )?])
        }

        Entity::Study(study) => {
            let mut scopes = Vec::with_capacity(study.investigations.len());
            for join in &study.investigations {
                scopes.push(require(
                    kind,
                    id,
                    &join.investigation,
                    "study_investigation.investigation",
                )?);
            }
            Ok(scopes)
        }
    }
}

/// Follow one ownership link, failing with a broken-chain fault if absent.
fn require<T>(
    entity_kind: EntityKind,
    entity_id: Uuid,
    link: &Option<Arc<T>>,
    missing: &'static str,
) -> Result<Arc<T>, AuthzError> {
    link.as_ref().map(Arc::clone).ok_or(AuthzError::BrokenChain {
        entity_kind,
        entity_id,
        missing,
    })
}
