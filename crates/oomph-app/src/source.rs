use std::path::PathBuf;

use anyhow::Context;
use reqwest::Url;

/// Where the page to scan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    File(PathBuf),
}

/// A fetched page and the URL it was served from, if any.
#[derive(Debug, Clone)]
pub struct Document {
    pub html: String,
    pub location: Option<String>,
}

impl Source {
    /// ## Summary
    /// Reads a command-line SOURCE: `http://` and `https://` arguments are
    /// URLs, anything else is a file path.
    ///
    /// ## Errors
    /// Returns an error if an http(s) argument is not a valid URL.
    pub fn parse(arg: &str) -> anyhow::Result<Self> {
        let lower = arg.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(arg.trim()).with_context(|| format!("invalid URL: {arg}"))?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::File(PathBuf::from(arg)))
        }
    }

    /// ## Summary
    /// Loads the page. A fetched page's location is the final URL after
    /// redirects.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read, or the request fails or
    /// returns an error status.
    #[tracing::instrument(skip(user_agent))]
    pub async fn load(&self, user_agent: &str) -> anyhow::Result<Document> {
        match self {
            Self::File(path) => {
                let html = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                tracing::debug!(bytes = html.len(), "Read page from file");
                Ok(Document {
                    html,
                    location: None,
                })
            }
            Self::Url(url) => {
                let client = reqwest::Client::builder()
                    .user_agent(user_agent)
                    .build()
                    .context("building HTTP client")?;
                let response = client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("fetching {url}"))?
                    .error_for_status()
                    .with_context(|| format!("fetching {url}"))?;
                let location = response.url().to_string();
                let html = response
                    .text()
                    .await
                    .with_context(|| format!("reading body of {url}"))?;
                tracing::debug!(bytes = html.len(), %location, "Fetched page");
                Ok(Document {
                    html,
                    location: Some(location),
                })
            }
        }
    }
}
