use std::error::Error;
use std::process::Command;
use url::Url;

pub struct BrowserLauncher;

impl BrowserLauncher {
    pub fn open(url: &str) -> Result<(), Box<dyn Error>> {
        // Validate before shelling out so a malformed URL fails cleanly.
        Url::parse(url)?;

        let status = if cfg!(target_os = "windows") {
            Command::new("cmd").args(["/c", "start", "", url]).status()?
        } else if cfg!(target_os = "macos") {
            Command::new("open").arg(url).status()?
        } else {
            Command::new("xdg-open").arg(url).status()?
        };

        if !status.success() {
            return Err(format!("browser command exited with {}", status).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_urls() {
        assert!(BrowserLauncher::open("not a url").is_err());
    }
}
