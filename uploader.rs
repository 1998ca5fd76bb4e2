use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use url::Url;

pub struct Uploader {
    client: reqwest::Client,
}

impl Uploader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    // PUTs the finished archive to the build service. The whole archive is
    // read up front so Content-Length can be set on the request; anything
    // other than a 2xx response is an error.
    pub async fn upload_archive(
        &self,
        archive_path: &Path,
        upload_url: &str,
    ) -> Result<(), Box<dyn Error>> {
        let url = Url::parse(upload_url)?;
        let data = fs::read(archive_path).await?;
        let content_length = data.len() as u64;

        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/x-gzip")
            .header(CONTENT_LENGTH, content_length)
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("upload rejected by server: {}", status).into());
        }

        Ok(())
    }
}
