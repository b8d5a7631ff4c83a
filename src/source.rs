//! Image input sources.
//!
//! The CLI accepts three spellings for the input argument: a local file
//! path, an `http://` or `https://` URL, or `-` to read raw image bytes
//! from stdin (which is how clipboard managers pipe a pasted image in,
//! e.g. `wl-paste | satura - out.png`).

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where the input image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file path.
    File(PathBuf),
    /// Remote URL, fetched over HTTP(S).
    Url(String),
    /// Raw bytes piped through stdin.
    Stdin,
}

impl ImageSource {
    /// Classify a CLI input argument.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input == "-" {
            Self::Stdin
        } else if input.starts_with("http://") || input.starts_with("https://") {
            Self::Url(input.to_string())
        } else {
            Self::File(PathBuf::from(input))
        }
    }

    /// Short origin label for logs and error messages.
    #[must_use]
    pub fn origin(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Fetch the raw (still encoded) image bytes from this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the URL cannot be
    /// fetched, or stdin cannot be drained.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => fs::read(path).map_err(|source| Error::ImageRead {
                path: path.clone(),
                source,
            }),
            Self::Url(url) => fetch_url(url),
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin().lock().read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }
}

/// Download image bytes from a URL.
fn fetch_url(url: &str) -> Result<Vec<u8>> {
    tracing::debug!("Fetching {url}");

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

    let bytes = response.bytes().map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    Ok(bytes.to_vec())
}
