use std::fs;
use std::path::PathBuf;

use upship::archiver::Archiver;
use upship::browser_launcher::BrowserLauncher;
use upship::cli::CliArgs;
use upship::project::Project;
use upship::project_finder::ProjectFinder;
use upship::staging::StagingArea;
use upship::uploader::Uploader;
use upship::version::Version;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.show_version {
        Version::print();
        return;
    }

    if !args.is_valid() {
        args.print_usage();
        return;
    }

    let start = PathBuf::from(args.path.clone().unwrap_or_else(|| String::from(".")));
    let start = match fs::canonicalize(&start) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error resolving {}: {}", start.display(), e);
            return;
        }
    };

    let root = match ProjectFinder::find_project_root(&start) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error locating project root: {}", e);
            return;
        }
    };

    let mut project = Project::new(root);
    if let Err(e) = project.update_ignore_files() {
        eprintln!("Error scanning ignore files: {}", e);
        return;
    }

    let output = match &args.output {
        Some(path) => PathBuf::from(path),
        None => StagingArea::new().archive_path(project.root_directory()),
    };

    let archiver = Archiver::new(&project);
    match archiver.create_archive(&output) {
        Ok(count) => println!("Created {} ({} files)", output.display(), count),
        Err(e) => {
            eprintln!("Error creating archive: {}", e);
            return;
        }
    }

    if let Some(url) = &args.upload_url {
        let uploader = Uploader::new();
        match uploader.upload_archive(&output, url).await {
            Ok(()) => println!("Uploaded {} to {}", output.display(), url),
            Err(e) => {
                eprintln!("Error uploading archive: {}", e);
                return;
            }
        }
    }

    if let Some(url) = &args.open_url {
        if let Err(e) = BrowserLauncher::open(url) {
            eprintln!("Error opening browser: {}", e);
        }
    }
}
