// src/core/net.rs
//
// Fetch the predictions file as text. One blocking GET per call, no retry,
// no caching: the caller decides which thread it runs on.

use std::{fs, path::Path};

use tracing::debug;

use crate::config::consts::USER_AGENT;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("http status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// GET `url` and return the body. Any non-2xx status is an error.
pub fn http_get(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text()?;
    debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}

pub fn read_file(path: &Path) -> Result<String, FetchError> {
    let text = fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read");
    Ok(text)
}
