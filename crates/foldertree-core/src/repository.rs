//! Folder repository
//!
//! Owns the full folder collection for every organization. Queries hand out
//! copies; [`FolderRepository::move_folder`] rewrites the stored paths, so
//! later queries on the same repository see the moved subtree.

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::FolderResult;
use crate::folder::{Folder, OrgId};
use crate::{relocate, resolver};

/// In-memory store of folders across organizations
#[derive(Debug, Default)]
pub struct FolderRepository {
    folders: RwLock<Vec<Folder>>,
}

impl FolderRepository {
    /// Create a repository from a flat, ordered collection of folders
    pub fn new(folders: Vec<Folder>) -> Self {
        debug!(count = folders.len(), "Creating folder repository");
        Self {
            folders: RwLock::new(folders),
        }
    }

    pub fn len(&self) -> usize {
        self.folders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.read().is_empty()
    }

    /// Snapshot of the whole collection
    pub fn folders(&self) -> Vec<Folder> {
        self.folders.read().clone()
    }

    /// All folders of one organization, in their original relative order.
    ///
    /// Returns an empty list when the organization has no folders.
    pub fn get_folders_by_org_id(&self, org_id: OrgId) -> Vec<Folder> {
        resolver::folders_by_org(&self.folders.read(), org_id)
    }

    /// All descendants of the folder named `name` within `org_id`, in
    /// sorted path order.
    pub fn get_all_child_folders(&self, org_id: OrgId, name: &str) -> FolderResult<Vec<Folder>> {
        resolver::child_folders(&self.folders.read(), org_id, name)
    }

    /// Move the folder named `source` and its subtree below the folder named
    /// `destination`.
    ///
    /// Holds the write lock from lookup through rewrite. Returns the full,
    /// updated collection.
    pub fn move_folder(&self, source: &str, destination: &str) -> FolderResult<Vec<Folder>> {
        let mut folders = self.folders.write();
        let rewritten = relocate::relocate(&mut folders, source, destination)
            .inspect_err(|e| warn!(source, destination, error = %e, "Rejected folder move"))?;

        info!(source, destination, rewritten, "Moved folder");
        Ok(folders.clone())
    }
}
