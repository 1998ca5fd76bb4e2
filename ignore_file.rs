use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

use crate::errors::ProjectError;

pub const GIT_DIR: &str = ".git";
pub const TERRAFORM_DIR: &str = ".terraform";

pub const GITIGNORE_NAME: &str = ".gitignore";
pub const TERRAFORMIGNORE_NAME: &str = ".terraformignore";

// File names recognized as ignore files during the project walk.
pub const IGNORE_FILE_NAMES: &[&str] = &[GITIGNORE_NAME, TERRAFORMIGNORE_NAME];

// Names excluded from every archive no matter what the ignore files say.
pub const ALWAYS_IGNORE_NAMES: &[&str] = &[GIT_DIR, TERRAFORM_DIR];

// Directories the project walk never descends into.
pub const SKIP_DIRS: &[&str] = &[GIT_DIR];

#[derive(Debug)]
pub enum IgnoreFile {
    Gitignore(Gitignore),
    Terraformignore(Gitignore),
}

impl IgnoreFile {
    pub fn compile(path: &Path) -> Result<Self, ProjectError> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

        match name {
            GITIGNORE_NAME => Ok(Self::Gitignore(compile_patterns(path)?)),
            TERRAFORMIGNORE_NAME => Ok(Self::Terraformignore(compile_patterns(path)?)),
            _ => Err(ProjectError::UnknownIgnoreFileType {
                path: path.to_path_buf(),
            }),
        }
    }

    // `relative` must be expressed relative to the directory holding the
    // ignore file; patterns never reach outside that directory's subtree.
    pub fn matches(&self, relative: &Path, is_dir: bool) -> bool {
        match self {
            Self::Gitignore(matcher) | Self::Terraformignore(matcher) => matcher
                .matched_path_or_any_parents(relative, is_dir)
                .is_ignore(),
        }
    }
}

// Both recognized dialects share the gitignore pattern grammar, so they
// compile through the same builder.
fn compile_patterns(path: &Path) -> Result<Gitignore, ProjectError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut builder = GitignoreBuilder::new(dir);
    if let Some(err) = builder.add(path) {
        return Err(ProjectError::Compile {
            path: path.to_path_buf(),
            source: err,
        });
    }

    builder.build().map_err(|err| ProjectError::Compile {
        path: path.to_path_buf(),
        source: err,
    })
}
