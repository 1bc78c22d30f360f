//! Folder entity and organization identifiers
//!
//! Hierarchy is not stored as links between folders. Each folder carries its
//! full ancestor chain as a dot-joined path (`A.B.C`), and every tree query
//! is recovered from those strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between path segments
pub const SEPARATOR: char = '.';

/// Opaque organization identifier
///
/// The nil UUID is the "no organization" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(Uuid);

impl OrgId {
    /// Generate a fresh random organization id
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_u128(v: u128) -> Self {
        Self(Uuid::from_u128(v))
    }

    /// The "no organization" sentinel
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for OrgId {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OrgId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A folder in an organization's namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// The folder's own label, a single path segment
    pub name: String,
    /// Organization this folder belongs to
    #[serde(rename = "orgId")]
    pub org_id: OrgId,
    /// Dot-joined ancestor chain ending in `name`
    #[serde(rename = "paths", alias = "path")]
    pub path: String,
}

impl Folder {
    pub fn new(name: impl Into<String>, org_id: OrgId, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id,
            path: path.into(),
        }
    }

    /// Number of segments in the path
    pub fn depth(&self) -> usize {
        self.path.split(SEPARATOR).count()
    }

    /// Name of the immediate parent, if the path has one
    pub fn parent_name(&self) -> Option<&str> {
        let mut segments = self.path.rsplit(SEPARATOR);
        segments.next()?;
        segments.next()
    }
}
