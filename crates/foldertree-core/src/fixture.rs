//! Folder fixtures
//!
//! Folders enter the system as a JSON array in the fixture format:
//! `[{"name": "...", "orgId": "<uuid>", "paths": "..."}]`. A sample data set
//! is bundled with the crate.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::folder::{Folder, OrgId};

/// Organization that owns most of the bundled sample
pub const DEFAULT_ORG_ID: OrgId = OrgId::from_u128(0xc1556e17_b7c0_45a3_a6ae_9546248fb17a);

const SAMPLE_JSON: &str = include_str!("../data/sample.json");

/// Parse folders from a JSON array
pub fn from_json(json: &str) -> Result<Vec<Folder>> {
    Ok(serde_json::from_str(json)?)
}

/// Load folders from a JSON fixture file
pub fn load_from_path(path: &Path) -> Result<Vec<Folder>> {
    let content = std::fs::read_to_string(path)?;
    let folders = from_json(&content)?;
    debug!(path = %path.display(), count = folders.len(), "Loaded folder fixture");
    Ok(folders)
}

/// The bundled sample data set
pub fn sample_folders() -> Result<Vec<Folder>> {
    from_json(SAMPLE_JSON)
}
