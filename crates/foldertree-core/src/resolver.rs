//! Descendant resolution by sort-and-scan
//!
//! Sorting an organization's folders by path places each folder's
//! descendants directly after it, before any unrelated sibling subtree. The
//! descendants of a root are therefore the run of paths that follows the root
//! and extends its path, and the scan can stop at the first path that does
//! not.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{FolderError, FolderResult};
use crate::folder::{Folder, OrgId};
use crate::path::{ends_with_own_name, extends_path, is_valid_path, validate_ancestors};

/// Filter `folders` down to one organization, keeping their relative order.
pub fn folders_by_org(folders: &[Folder], org_id: OrgId) -> Vec<Folder> {
    folders
        .iter()
        .filter(|f| f.org_id == org_id)
        .cloned()
        .collect()
}

/// Resolve every descendant of the folder named `root_name` within `org_id`.
///
/// The root itself is not part of the result. Results come back in sorted
/// path order. Malformed folders are only reported once the scan reaches
/// them.
pub fn child_folders(folders: &[Folder], org_id: OrgId, root_name: &str) -> FolderResult<Vec<Folder>> {
    subtree(folders, org_id, root_name).map(|(_, children)| children)
}

/// Like [`child_folders`], but also returns the root the scan settled on.
///
/// With duplicate names the root is the first match in sorted path order,
/// which need not be the first match in `folders`.
pub fn subtree(folders: &[Folder], org_id: OrgId, root_name: &str) -> FolderResult<(Folder, Vec<Folder>)> {
    if org_id.is_nil() {
        return Err(FolderError::InvalidOrgId);
    }

    let mut org_folders = folders_by_org(folders, org_id);
    if org_folders.is_empty() {
        return Err(FolderError::FolderNotExistsInOrg(org_id));
    }

    debug!(org_id = %org_id, root = root_name, candidates = org_folders.len(), "Resolving child folders");

    // stable: duplicates keep their original relative order
    org_folders.sort_by(|a, b| a.path.cmp(&b.path));

    let mut root: Option<&Folder> = None;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut children = Vec::new();

    for folder in &org_folders {
        if !is_valid_path(&folder.path) {
            return Err(FolderError::InvalidFilePath(folder.path.clone()));
        }

        let Some(root_folder) = root else {
            if folder.name == root_name {
                root = Some(folder);
                seen.insert(folder.name.as_str());
            }
            continue;
        };

        if !extends_path(&folder.path, &root_folder.path) {
            // sorted order: nothing after this can be below the root
            break;
        }

        if !ends_with_own_name(folder) {
            return Err(FolderError::FolderNameMismatchPathEnd(folder.path.clone()));
        }
        validate_ancestors(&folder.path, &seen)?;

        seen.insert(folder.name.as_str());
        children.push(folder.clone());
    }

    let Some(root) = root else {
        return Err(FolderError::FolderNotExist(root_name.to_string()));
    };

    debug!(
        org_id = %org_id,
        root = root_name,
        count = children.len(),
        "Resolved child folders"
    );

    Ok((root.clone(), children))
}
