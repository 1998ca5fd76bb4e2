use chrono::Local;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StagingArea {
    base_dir: PathBuf,
}

impl StagingArea {
    pub fn new() -> Self {
        let project_dirs = ProjectDirs::from("dev", "upship", "upship")
            .expect("Failed to resolve a cache directory for this platform");

        let base_dir = project_dirs.cache_dir().to_path_buf();

        fs::create_dir_all(&base_dir).unwrap_or_else(|_| {
            eprintln!("Warning: Failed to create staging directory");
        });

        Self { base_dir }
    }

    // Archives land in the per-user cache directory, named after the project
    // directory and the current time so successive runs never collide.
    pub fn archive_path(&self, project_root: &Path) -> PathBuf {
        let name = project_root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("workspace");

        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        self.base_dir.join(format!("{}_{}.tar.gz", name, stamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_path_is_a_timestamped_tarball() {
        let staging = StagingArea::new();
        let path = staging.archive_path(Path::new("/tmp/myproject"));

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("myproject_"));
        assert!(name.ends_with(".tar.gz"));
    }

    #[test]
    fn rootless_paths_fall_back_to_a_generic_name() {
        let staging = StagingArea::new();
        let path = staging.archive_path(Path::new("/"));

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("workspace_"));
    }
}
