//! Foldertree Core - folder hierarchies encoded as dot-delimited paths
//!
//! This crate provides:
//! - The folder entity and organization ids
//! - Path grammar and ancestor checks
//! - Descendant resolution by sorted-path scanning
//! - Subtree relocation
//! - Configuration, fixtures and result formatting

pub mod config;
pub mod error;
pub mod fixture;
pub mod folder;
pub mod formatting;
pub mod path;
pub mod relocate;
pub mod repository;
pub mod resolver;

pub use config::{Config, ConfigManager, DataConfig, GeneralConfig};
pub use error::{Error, FolderError, FolderResult, Result};
pub use fixture::DEFAULT_ORG_ID;
pub use folder::{Folder, OrgId, SEPARATOR};
pub use path::{ends_with_own_name, is_valid_path, validate_ancestors};
pub use repository::FolderRepository;
