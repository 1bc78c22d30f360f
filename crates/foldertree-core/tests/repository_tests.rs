//! Repository and fixture tests
//!
//! Tests for organization filtering and fixture loading.

use foldertree_core::fixture::{self, DEFAULT_ORG_ID};
use foldertree_core::{Error, Folder, FolderRepository, OrgId};
use std::fs;
use tempfile::TempDir;

mod org_filter_tests {
    use super::*;

    #[test]
    fn test_default_org_only() {
        let folders = fixture::sample_folders().unwrap();
        let expected: Vec<Folder> = folders
            .iter()
            .filter(|f| f.org_id == DEFAULT_ORG_ID)
            .cloned()
            .collect();
        let repo = FolderRepository::new(folders);

        let got = repo.get_folders_by_org_id(DEFAULT_ORG_ID);
        assert!(!got.is_empty());
        assert_eq!(got, expected);
    }

    #[test]
    fn test_unknown_org_returns_empty() {
        let repo = FolderRepository::new(fixture::sample_folders().unwrap());
        assert!(repo.get_folders_by_org_id(OrgId::new_v4()).is_empty());
    }

    #[test]
    fn test_empty_repository() {
        let repo = FolderRepository::new(vec![]);
        assert!(repo.is_empty());
        assert!(repo.get_folders_by_org_id(DEFAULT_ORG_ID).is_empty());
    }

    #[test]
    fn test_preserves_original_order() {
        let org = OrgId::new_v4();
        let repo = FolderRepository::new(vec![
            Folder::new("Z", org, "Z"),
            Folder::new("X", OrgId::new_v4(), "X"),
            Folder::new("A", org, "A"),
        ]);

        let names: Vec<String> = repo
            .get_folders_by_org_id(org)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Z", "A"]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_query_results_are_snapshots() {
        let org = OrgId::new_v4();
        let repo = FolderRepository::new(vec![Folder::new("A", org, "A")]);

        let mut snapshot = repo.folders();
        snapshot[0].path = "changed".to_string();

        assert_eq!(repo.folders()[0].path, "A");
    }
}

mod fixture_tests {
    use super::*;

    #[test]
    fn test_sample_is_well_formed() {
        let folders = fixture::sample_folders().unwrap();
        let repo = FolderRepository::new(folders);

        let children = repo.get_all_child_folders(DEFAULT_ORG_ID, "noble").unwrap();
        let names: Vec<&str> = children.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["nearby", "magnetic", "steady"]);
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("folders.json");
        fs::write(
            &path,
            r#"[
                {"name": "A", "orgId": "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7", "paths": "A"},
                {"name": "B", "orgId": "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7", "paths": "A.B"}
            ]"#,
        )
        .unwrap();

        let folders = fixture::load_from_path(&path).unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[1].path, "A.B");
        assert_eq!(
            folders[0].org_id.to_string(),
            "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let result = fixture::load_from_path(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = fixture::from_json(r#"[{"name": "A"}]"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
