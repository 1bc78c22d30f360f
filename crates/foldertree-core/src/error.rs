//! Error types for Foldertree Core

use thiserror::Error;

use crate::folder::OrgId;

/// Result type alias using Foldertree Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for folder queries and relocations
pub type FolderResult<T> = std::result::Result<T, FolderError>;

/// Foldertree error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Folder hierarchy errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolderError {
    #[error("Invalid orgID")]
    InvalidOrgId,

    #[error("Folder does not exist in the specified organization: {0}")]
    FolderNotExistsInOrg(OrgId),

    #[error("Invalid file path: {0}")]
    InvalidFilePath(String),

    #[error("Folder name does not match the end of its path: {0}")]
    FolderNameMismatchPathEnd(String),

    #[error("Invalid file path structure: {0}")]
    InvalidFilePathStructure(String),

    #[error("Path contains unseen folder: {path} for {parent}")]
    UnseenFolder { path: String, parent: String },

    #[error("Folder does not exist: {0}")]
    FolderNotExist(String),

    #[error("Cannot move a folder to itself")]
    SourceEqualsDestination,

    #[error("Source folder does not exist: {0}")]
    SourceNotExists(String),

    #[error("Destination folder does not exist: {0}")]
    DestinationNotExists(String),

    #[error("Cannot move a folder to a different organization")]
    CrossOrganizationMove,

    #[error("Cannot move a folder to a child of itself")]
    DestinationIsDescendantOfSource,
}
