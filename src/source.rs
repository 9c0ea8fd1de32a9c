use crate::errors::AppError;
use log::{debug, info};
use std::path::Path;

pub const DIRECTORY_URL: &str = "https://przemienniki.net/export/rxf.xml?source=all&onlyworking=true";

/// Where the repeater directory comes from.
#[derive(Clone, Debug)]
pub enum DirectorySource {
    Url(String),
    File(std::path::PathBuf),
}

impl DirectorySource {
    pub fn load(&self) -> Result<String, AppError> {
        match self {
            DirectorySource::Url(url) => fetch_directory(url),
            DirectorySource::File(path) => read_directory(path),
        }
    }
}

impl std::fmt::Display for DirectorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectorySource::Url(url) => write!(f, "{}", url),
            DirectorySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Single blocking GET, no retries and no timeout.
pub fn fetch_directory(url: &str) -> Result<String, AppError> {
    info!("Fetching repeater directory from {}", url);
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(None)
        .build()?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| AppError::Network(format!("GET {}: {}", url, e)))?;
    let status = resp.status();
    debug!("directory responded {}", status);

    let resp = resp
        .error_for_status()
        .map_err(|e| AppError::Network(format!("GET {}: {}", url, e)))?;
    let body = resp.text()?;
    debug!("directory body {} bytes", body.len());
    Ok(body)
}

pub fn read_directory(path: &Path) -> Result<String, AppError> {
    info!("Reading repeater directory {}", path.display());
    std::fs::read_to_string(path)
        .map_err(|e| AppError::Read(format!("open {}: {}", path.display(), e)))
}
