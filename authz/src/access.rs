//! Access kinds requestable against governed entities.

use crate::flags::PermissionFlags;

/// Kind of operation an identity requests on a governed entity.
///
/// Five kinds are backed by a grant flag; `FineGrained` is not and is
/// granted unconditionally by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    /// Read an entity and its metadata
    Read,
    /// Modify an existing entity
    Update,
    /// Remove an entity
    Delete,
    /// Add a new child entity under an existing one
    Create,
    /// Administer the governing investigation
    Admin,
    /// Row-level restricted access. Carries no grant flag yet; evaluation
    /// treats it as an unconditional grant.
    FineGrained,
}

impl AccessKind {
    /// Returns the action name used in audit records and error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_authz::AccessKind;
    ///
    /// assert_eq!(AccessKind::FineGrained.action_name(), "fine_grained");
    /// ```
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Create => "create",
            Self::Admin => "admin",
            Self::FineGrained => "fine_grained",
        }
    }

    /// Returns all access kinds as a slice.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Read,
            Self::Update,
            Self::Delete,
            Self::Create,
            Self::Admin,
            Self::FineGrained,
        ]
    }

    /// Returns a human-readable description of the access kind.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Read => "Read an entity and its metadata",
            Self::Update => "Modify an existing entity",
            Self::Delete => "Remove an entity",
            Self::Create => "Add a new child entity",
            Self::Admin => "Administer the governing investigation",
            Self::FineGrained => "Row-level restricted access",
        }
    }

    /// The grant flag this access kind is checked against.
    ///
    /// `None` for [`Self::FineGrained`], which has no backing flag: no grant
    /// is inspected and the request is granted unconditionally.
    #[must_use]
    pub const fn flag(self) -> Option<PermissionFlags> {
        match self {
            Self::Read => Some(PermissionFlags::READ),
            Self::Update => Some(PermissionFlags::UPDATE),
            Self::Delete => Some(PermissionFlags::DELETE),
            Self::Create => Some(PermissionFlags::CREATE),
            Self::Admin => Some(PermissionFlags::ADMIN),
            Self::FineGrained => None,
        }
    }
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.action_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_are_snake_case() {
        for kind in AccessKind::all() {
            let name = kind.action_name();
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "Action name '{}' should be snake_case",
                name
            );
        }
    }

    #[test]
    fn test_action_names_are_unique() {
        let names: Vec<&str> = AccessKind::all().iter().map(|k| k.action_name()).collect();

        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate action name found: {}", name);
                }
            }
        }
    }

    #[test]
    fn test_all_returns_all_variants() {
        let all = AccessKind::all();
        assert_eq!(all.len(), 6);

        assert!(all.contains(&AccessKind::Read));
        assert!(all.contains(&AccessKind::Update));
        assert!(all.contains(&AccessKind::Delete));
        assert!(all.contains(&AccessKind::Create));
        assert!(all.contains(&AccessKind::Admin));
        assert!(all.contains(&AccessKind::FineGrained));
    }

    #[test]
    fn test_flag_mapping() {
        assert_eq!(AccessKind::Read.flag(), Some(PermissionFlags::READ));
        assert_eq!(AccessKind::Update.flag(), Some(PermissionFlags::UPDATE));
        assert_eq!(AccessKind::Delete.flag(), Some(PermissionFlags::DELETE));
        assert_eq!(AccessKind::Create.flag(), Some(PermissionFlags::CREATE));
        assert_eq!(AccessKind::Admin.flag(), Some(PermissionFlags::ADMIN));
    }

    #[test]
    fn test_fine_grained_has_no_flag() {
        assert_eq!(AccessKind::FineGrained.flag(), None);
    }

    #[test]
    fn test_descriptions_are_not_empty() {
        for kind in AccessKind::all() {
            assert!(
                !kind.description().is_empty(),
                "Description for {:?} should not be empty",
                kind
            );
        }
    }

    #[test]
    fn test_display_matches_action_name() {
        for kind in AccessKind::all() {
            assert_eq!(kind.to_string(), kind.action_name());
        }
    }

    // === Serde Tests ===

    #[test]
    fn test_serialize_access_kind() {
        let json = serde_json::to_string(&AccessKind::FineGrained).unwrap();
        assert_eq!(json, "\"fine_grained\"");
    }

    #[test]
    fn test_deserialize_access_kind() {
        let kind: AccessKind = serde_json::from_str("\"delete\"").unwrap();
        assert_eq!(kind, AccessKind::Delete);
    }

    #[test]
    fn test_serde_matches_action_name() {
        for kind in AccessKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            let expected = format!("\"{}\"", kind.action_name());
            assert_eq!(
                json, expected,
                "Serialized form should match action_name() for {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        for original in AccessKind::all() {
            let json = serde_json::to_string(original).unwrap();
            let restored: AccessKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*original, restored);
        }
    }
}
