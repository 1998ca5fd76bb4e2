use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::ProjectError;
use crate::ignore_file::GIT_DIR;
use crate::paths::path_ancestors;

pub struct ProjectFinder;

impl ProjectFinder {
    // Walks upward from `start` looking for the source-control metadata
    // directory and returns the directory containing it.
    pub fn find_project_root(start: &Path) -> Result<PathBuf, ProjectError> {
        let mut candidates = Vec::new();

        if Self::is_directory(start)? {
            candidates.push(start.join(GIT_DIR));
        }
        for ancestor in path_ancestors(start) {
            candidates.push(ancestor.join(GIT_DIR));
        }

        let metadata_dir = Self::find_first_existing_directory(candidates)?;
        match metadata_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
            _ => Ok(metadata_dir),
        }
    }

    pub fn find_first_existing_directory(
        candidates: Vec<PathBuf>,
    ) -> Result<PathBuf, ProjectError> {
        for candidate in candidates {
            if Self::is_directory(&candidate)? {
                return Ok(candidate);
            }
        }
        Err(ProjectError::NotFound)
    }

    // Missing entries are not an error; anything else the stat reports is.
    fn is_directory(path: &Path) -> Result<bool, ProjectError> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(ProjectError::Stat {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discovers_root_from_a_nested_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/c.txt"), "x").unwrap();

        let found = ProjectFinder::find_project_root(&root.join("a/b/c.txt")).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn nearest_metadata_directory_wins() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("nested/.git")).unwrap();
        fs::write(root.join("nested/file.txt"), "x").unwrap();

        let found = ProjectFinder::find_project_root(&root.join("nested/file.txt")).unwrap();
        assert_eq!(found, root.join("nested"));
    }

    #[test]
    fn starting_at_the_root_directory_itself() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();

        let found = ProjectFinder::find_project_root(&root).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn missing_metadata_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("a")).unwrap();

        let err = ProjectFinder::find_project_root(&root.join("a")).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound));
    }

    #[test]
    fn a_metadata_file_is_not_a_metadata_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::write(root.join(".git"), "gitdir: elsewhere\n").unwrap();

        let err = ProjectFinder::find_project_root(&root).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound));
    }
}
