use std::env;

pub struct CliArgs {
    pub path: Option<String>,
    pub output: Option<String>,
    pub upload_url: Option<String>,
    pub open_url: Option<String>,
    pub show_version: bool,
    pub show_help: bool,
}

impl CliArgs {
    pub fn parse() -> Self {
        Self::from_args(env::args().collect())
    }

    fn from_args(args: Vec<String>) -> Self {
        let mut path = None;
        let mut output = None;
        let mut upload_url = None;
        let mut open_url = None;
        let mut show_version = false;
        let mut show_help = false;
        let mut i = 1;

        while i < args.len() {
            match args[i].as_str() {
                "-v" | "--version" => show_version = true,
                "-h" | "--help" => show_help = true,
                "-o" | "--output" => {
                    if i + 1 < args.len() {
                        output = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--url" => {
                    if i + 1 < args.len() {
                        upload_url = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--open" => {
                    if i + 1 < args.len() {
                        open_url = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                _ => {
                    if !args[i].starts_with('-') {
                        path = Some(args[i].clone());
                    }
                }
            }
            i += 1;
        }

        Self {
            path,
            output,
            upload_url,
            open_url,
            show_version,
            show_help,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.show_help
    }

    pub fn print_usage(&self) {
        let program_name = env::args().next().unwrap_or_else(|| String::from("upship"));
        println!("Usage: {} [OPTIONS] [PATH]", program_name);
        println!("\nPackages the project containing PATH (default: the current directory)");
        println!("into a tarball, honoring every ignore file in the tree.");
        println!("\nOptions:");
        println!("  -o, --output <file>   Write the archive to <file>");
        println!("  --url <upload_url>    Upload the archive to <upload_url> when done");
        println!("  --open <page_url>     Open <page_url> in the browser after uploading");
        println!("  -v, --version         Show version information");
        println!("  -h, --help            Show this help");
        println!("\nExamples:");
        println!("  {}", program_name);
        println!("  {} -o /tmp/workspace.tar.gz src/", program_name);
        println!(
            "  {} --url 'https://builds.example.com/upload/123' --open 'https://builds.example.com/123'",
            program_name
        );
    }
}
