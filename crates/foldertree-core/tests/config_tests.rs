//! Configuration management tests
//!
//! Tests for ConfigManager and Config structures.

use foldertree_core::config::{Config, ConfigManager, GeneralConfig};
use foldertree_core::{OrgId, DEFAULT_ORG_ID};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory for config tests
fn setup_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

mod config_structure_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.data.fixture_path.is_none());
        assert_eq!(config.general.default_org_id, DEFAULT_ORG_ID);
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn test_general_config_defaults() {
        let general = GeneralConfig::default();
        assert!(!general.default_org_id.is_nil());
    }
}

mod config_manager_tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = setup_config_dir();
        let manager = ConfigManager::with_path(dir.path().join("config.toml")).unwrap();

        assert_eq!(manager.config().general.default_org_id, DEFAULT_ORG_ID);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = setup_config_dir();
        let path = dir.path().join("nested").join("config.toml");
        let org = OrgId::new_v4();

        let mut manager = ConfigManager::with_path(path.clone()).unwrap();
        manager.set_default_org_id(org);
        manager.set_fixture_path(Some(PathBuf::from("/data/folders.json")));
        manager.set_log_level("debug");
        manager.save().unwrap();

        let reloaded = ConfigManager::with_path(path).unwrap();
        assert_eq!(reloaded.config().general.default_org_id, org);
        assert_eq!(reloaded.config().general.log_level, "debug");
        assert_eq!(
            reloaded.config().data.fixture_path,
            Some(PathBuf::from("/data/folders.json"))
        );
    }

    #[test]
    fn test_partial_file() {
        let dir = setup_config_dir();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nlog_level = \"info\"\n").unwrap();

        let manager = ConfigManager::with_path(path).unwrap();
        assert_eq!(manager.config().general.log_level, "info");
        assert_eq!(manager.config().general.default_org_id, DEFAULT_ORG_ID);
        assert!(manager.config().data.fixture_path.is_none());
    }

    #[test]
    fn test_invalid_file() {
        let dir = setup_config_dir();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is not = = toml").unwrap();

        assert!(ConfigManager::with_path(path).is_err());
    }
}
