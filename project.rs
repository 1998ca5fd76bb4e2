use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::errors::ProjectError;
use crate::ignore_file::{IgnoreFile, ALWAYS_IGNORE_NAMES, IGNORE_FILE_NAMES, SKIP_DIRS};
use crate::paths::{clean, path_ancestors};

pub struct Project {
    root_directory: PathBuf,
    // Keyed by directory relative to the root; the root itself is keyed as
    // `.` so that lookup keys line up with `path_ancestors` output.
    ignore_files_by_directory: BTreeMap<PathBuf, Vec<IgnoreFile>>,
}

impl Project {
    pub fn new(root_directory: PathBuf) -> Self {
        Self {
            root_directory,
            ignore_files_by_directory: BTreeMap::new(),
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn to_absolute_path(&self, relative: &Path) -> PathBuf {
        self.root_directory.join(relative)
    }

    pub fn to_relative_path(&self, absolute: &Path) -> Result<PathBuf, ProjectError> {
        absolute
            .strip_prefix(&self.root_directory)
            .map(Path::to_path_buf)
            .map_err(|_| ProjectError::RelativePath {
                path: absolute.to_path_buf(),
            })
    }

    // Rescans the tree for ignore files. The previous registrations are
    // replaced wholesale on success; a failed rescan leaves them untouched.
    // Symlinks are not followed and cycles are not defended against.
    pub fn update_ignore_files(&mut self) -> Result<(), ProjectError> {
        let mut discovered: BTreeMap<PathBuf, Vec<IgnoreFile>> = BTreeMap::new();

        let walker = WalkDir::new(&self.root_directory)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !IGNORE_FILE_NAMES.contains(&name.as_ref()) {
                continue;
            }

            let matcher = IgnoreFile::compile(entry.path())?;
            let dir = match entry.path().parent() {
                Some(parent) => self.to_relative_path(parent)?,
                None => PathBuf::new(),
            };
            let key = if dir.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                dir
            };

            discovered.entry(key).or_default().push(matcher);
        }

        self.ignore_files_by_directory = discovered;
        Ok(())
    }

    // `path` is relative to the project root. Matchers are consulted deepest
    // directory first; any positive match wins.
    pub fn path_is_ignored(&self, path: &Path) -> Result<bool, ProjectError> {
        if contains_always_ignored_name(path) {
            return Ok(true);
        }

        let cleaned = clean(path);
        let is_dir = self.to_absolute_path(&cleaned).is_dir();

        for dir in path_ancestors(&cleaned) {
            let matchers = match self.ignore_files_by_directory.get(&dir) {
                Some(matchers) => matchers,
                None => continue,
            };

            let relative = if dir.as_os_str() == "." {
                cleaned.clone()
            } else {
                cleaned
                    .strip_prefix(&dir)
                    .map_err(|_| ProjectError::RelativePath {
                        path: path.to_path_buf(),
                    })?
                    .to_path_buf()
            };

            for matcher in matchers {
                if matcher.matches(&relative, is_dir) {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    // Returns the predicate handed to the archiver. Input paths are relative
    // to `reference`, which is itself relative to the project root. Anything
    // that resolves outside the root is excluded, as is anything the ignore
    // files match; errors collapse to exclusion because the archiver callback
    // only accepts a bool.
    pub fn archive_matcher(&self, reference: &Path) -> impl Fn(&Path) -> bool + '_ {
        let reference_abs = clean(&self.root_directory.join(reference));

        move |entry: &Path| {
            let absolute = clean(&reference_abs.join(entry));
            if !absolute.starts_with(&self.root_directory) {
                return false;
            }

            let relative = match absolute.strip_prefix(&self.root_directory) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => return false,
            };

            match self.path_is_ignored(&relative) {
                Ok(ignored) => !ignored,
                Err(_) => false,
            }
        }
    }
}

fn contains_always_ignored_name(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => {
            ALWAYS_IGNORE_NAMES.contains(&name.to_string_lossy().as_ref())
        }
        _ => false,
    })
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    SKIP_DIRS.contains(&name.as_ref())
}
