//! Subtree relocation
//!
//! Moving a folder rewrites its path and the path of every descendant so the
//! whole subtree hangs below the destination. Names and organizations never
//! change.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{FolderError, FolderResult};
use crate::folder::{Folder, SEPARATOR};
use crate::resolver::subtree;

/// Move the folder named `source` (and its subtree) below the folder named
/// `destination`, rewriting paths in `folders` in place.
///
/// Returns the number of folders whose path was rewritten. Nothing is
/// modified when an error is returned.
pub fn relocate(folders: &mut [Folder], source: &str, destination: &str) -> FolderResult<usize> {
    if source == destination {
        return Err(FolderError::SourceEqualsDestination);
    }

    let source_folder = folders.iter().find(|f| f.name == source);
    let destination_folder = folders.iter().find(|f| f.name == destination);

    let Some(source_folder) = source_folder.filter(|f| !f.org_id.is_nil()) else {
        return Err(FolderError::SourceNotExists(source.to_string()));
    };
    let Some(destination_folder) = destination_folder.filter(|f| !f.org_id.is_nil()) else {
        return Err(FolderError::DestinationNotExists(destination.to_string()));
    };
    if source_folder.org_id != destination_folder.org_id {
        return Err(FolderError::CrossOrganizationMove);
    }

    let org_id = source_folder.org_id;
    // the scanned root may differ from `source_folder` when names repeat
    let (root, descendants) = subtree(folders, org_id, source)?;

    if descendants.iter().any(|f| f.name == destination) {
        return Err(FolderError::DestinationIsDescendantOfSource);
    }

    let new_prefix = format!("{}{}{}", destination_folder.path, SEPARATOR, root.name);

    let mut rewrites: HashMap<&str, String> = HashMap::with_capacity(descendants.len() + 1);
    rewrites.insert(source, new_prefix.clone());
    for folder in &descendants {
        if let Some(suffix) = folder.path.strip_prefix(root.path.as_str()) {
            rewrites.insert(folder.name.as_str(), format!("{}{}", new_prefix, suffix));
        }
    }

    let mut rewritten = 0;
    for folder in folders.iter_mut().filter(|f| f.org_id == org_id) {
        if let Some(path) = rewrites.get(folder.name.as_str()) {
            debug!(name = %folder.name, from = %folder.path, to = %path, "Rewriting path");
            folder.path.clone_from(path);
            rewritten += 1;
        }
    }

    Ok(rewritten)
}
