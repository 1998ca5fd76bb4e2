use flate2::write::GzEncoder;
use flate2::Compression;
use std::error::Error;
use std::fs::File;
use std::path::Path;
use tar::Builder;
use walkdir::WalkDir;

use crate::project::Project;

pub struct Archiver<'a> {
    project: &'a Project,
}

impl<'a> Archiver<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    // Packages every included file under the project root into a gzip'd
    // tarball at `output_path`, consulting the project's archive predicate
    // per entry. Returns the number of files written.
    pub fn create_archive(&self, output_path: &Path) -> Result<usize, Box<dyn Error>> {
        let root = self.project.root_directory().to_path_buf();
        let include = self.project.archive_matcher(Path::new(""));

        let file = File::create(output_path)?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = Builder::new(encoder);

        let walker = WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| match entry.path().strip_prefix(&root) {
                Ok(relative) => include(relative),
                Err(_) => false,
            });

        let mut count = 0;
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&root)?.to_path_buf();
            builder.append_path_with_name(entry.path(), &relative)?;
            count += 1;
        }

        let encoder = builder.into_inner()?;
        encoder.finish()?;

        Ok(count)
    }
}
