//! Formatting utilities for folder results

use crate::error::Result;
use crate::folder::Folder;

/// Render folders as indented JSON
pub fn to_pretty_json(folders: &[Folder]) -> Result<String> {
    Ok(serde_json::to_string_pretty(folders)?)
}

/// Render folders as an outline indented by path depth, in the given order.
///
/// Indentation is relative to the shallowest folder in the list, so a list of
/// descendants starts flush left.
pub fn format_tree(folders: &[Folder]) -> String {
    let base = folders.iter().map(Folder::depth).min().unwrap_or(1);

    let mut output = String::new();
    for folder in folders {
        let indent = "  ".repeat(folder.depth() - base);
        output.push_str(&format!("{}{} ({})\n", indent, folder.name, folder.path));
    }
    output
}
