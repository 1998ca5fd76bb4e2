use std::path::{Component, Path, PathBuf};

// Lexical normalization: redundant separators and `.` segments are dropped,
// `..` folds into a preceding component where one exists. Empty input cleans
// to `.`, matching the convention the rest of the crate relies on.
pub fn clean(path: &Path) -> PathBuf {
    let mut cleaned: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.is_empty() {
        return PathBuf::from(".");
    }

    cleaned.into_iter().collect()
}

pub fn parent_directory(path: &Path) -> Option<PathBuf> {
    let cleaned = clean(path);

    // A relative path that escapes upward has no parent inside the tree.
    if cleaned.components().next() == Some(Component::ParentDir) {
        return None;
    }

    let parent = match cleaned.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => cleaned.clone(),
    };

    // Already-root inputs (`/`, `.`) produce a parent no shorter than the
    // input and are rejected.
    if parent.as_os_str().len() < cleaned.as_os_str().len() {
        Some(parent)
    } else {
        None
    }
}

pub fn path_ancestors(path: &Path) -> Vec<PathBuf> {
    let mut ancestors = Vec::new();
    let mut current = path.to_path_buf();

    while let Some(parent) = parent_directory(&current) {
        ancestors.push(parent.clone());
        current = parent;
    }

    ancestors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_directory_table() {
        let cases: &[(&str, Option<&str>)] = &[
            ("/hello/world", Some("/hello")),
            ("/hello", Some("/")),
            ("/", None),
            ("hello", Some(".")),
            ("./hello", Some(".")),
            ("..", None),
            ("../", None),
            ("./", None),
            (".", None),
            ("", None),
        ];

        for (input, expected) in cases {
            assert_eq!(
                parent_directory(Path::new(input)),
                expected.map(PathBuf::from),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn ancestors_of_absolute_path() {
        assert_eq!(
            path_ancestors(Path::new("/hello/world/.gitignore")),
            vec![
                PathBuf::from("/hello/world"),
                PathBuf::from("/hello"),
                PathBuf::from("/"),
            ]
        );
    }

    #[test]
    fn ancestors_of_relative_path() {
        assert_eq!(
            path_ancestors(Path::new("hello/world/.gitignore")),
            vec![
                PathBuf::from("hello/world"),
                PathBuf::from("hello"),
                PathBuf::from("."),
            ]
        );
    }

    #[test]
    fn ancestors_of_root_inputs_are_empty() {
        assert!(path_ancestors(Path::new("/")).is_empty());
        assert!(path_ancestors(Path::new(".")).is_empty());
        assert!(path_ancestors(Path::new("..")).is_empty());
        assert!(path_ancestors(Path::new("")).is_empty());
    }

    #[test]
    fn clean_normalizes_lexically() {
        assert_eq!(clean(Path::new("a//b/./c")), PathBuf::from("a/b/c"));
        assert_eq!(clean(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(clean(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(clean(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(clean(Path::new("")), PathBuf::from("."));
        assert_eq!(clean(Path::new("./hello")), PathBuf::from("hello"));
    }
}
