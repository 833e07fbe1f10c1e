//! Investigation-level permission flags using bitflags.
//!
//! Every grant record carries five independent flags, one per real access
//! kind. Fine-grained access has no flag (see [`crate::access::AccessKind::flag`]).

use bitflags::bitflags;

bitflags! {
    /// Permission flags carried by a single investigation-level grant.
    ///
    /// Stored as BIGINT in PostgreSQL by the persistence layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct PermissionFlags: u64 {
        /// Permission to read the governed entity
        const READ   = 1 << 0;
        /// Permission to modify the governed entity
        const UPDATE = 1 << 1;
        /// Permission to remove the governed entity
        const DELETE = 1 << 2;
        /// Permission to add children under the governed entity
        const CREATE = 1 << 3;
        /// Permission to administer the investigation
        const ADMIN  = 1 << 4;
    }
}

impl PermissionFlags {
    // === Preset Combinations ===

    /// Grant issued to plain collaborators: read access only.
    pub const READ_ONLY: Self = Self::READ;

    /// Default grant for contributing scientists: read plus data ingest.
    pub const CONTRIBUTOR_DEFAULT: Self = Self::READ.union(Self::CREATE).union(Self::UPDATE);

    /// Default grant for the investigation manager: every flag.
    pub const MANAGER_DEFAULT: Self = Self::CONTRIBUTOR_DEFAULT
        .union(Self::DELETE)
        .union(Self::ADMIN);

    // === Database Conversion ===

    /// Create flags from a database BIGINT value.
    ///
    /// Handles the i64 to u64 conversion required for `PostgreSQL`
    /// compatibility. Unknown bits are silently ignored to maintain forward
    /// compatibility.
    #[must_use]
    pub const fn from_db(value: i64) -> Self {
        let bits = value as u64;
        Self::from_bits_truncate(bits)
    }

    /// Convert flags to a database BIGINT value.
    #[must_use]
    pub const fn to_db(self) -> i64 {
        self.bits() as i64
    }

    // === Flag Checking ===

    /// Check if this flag set includes the specified flag(s).
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_authz::PermissionFlags;
    ///
    /// let flags = PermissionFlags::READ | PermissionFlags::UPDATE;
    /// assert!(flags.has(PermissionFlags::READ));
    /// assert!(!flags.has(PermissionFlags::ADMIN));
    /// ```
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        self.contains(flag)
    }
}

impl Default for PermissionFlags {
    fn default() -> Self {
        Self::empty()
    }
}
