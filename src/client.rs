//! Page retrieval and image downloads
//!
//! [`Client`] wraps a reqwest client with an explicit [`FetchConfig`]: each
//! client instance carries its own timeout, retry and user-agent settings,
//! settled at construction time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::{header, redirect, Method, Url};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ScrapeError;
use crate::page::Page;

/// Browser user-agent pool used when none is configured
const DEFAULT_USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/537.36 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/537.36",
    "Mozilla/5.0 (iPad; CPU OS 16_7 like Mac OS X) AppleWebKit/537.36 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/537.36",
];

/// Retrieval configuration, held per client instance
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Extra attempts after a failed request
    pub retries: u32,
    /// Whether redirects are followed
    pub follow_redirects: bool,
    /// User-agent pool, one chosen at random per request
    pub user_agents: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retries: 2,
            follow_redirects: true,
            user_agents: DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    #[must_use]
    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    #[must_use]
    pub fn with_user_agents(mut self, user_agents: Vec<String>) -> Self {
        self.user_agents = user_agents;
        self
    }
}

/// Outcome of a single image download within a batch
#[derive(Debug, Clone, Serialize)]
pub enum ImageOutcome {
    /// Image fetched and written to disk
    Saved { url: String, path: PathBuf },
    /// Image skipped; the batch continued without it
    Skipped { url: String, reason: String },
}

/// Retrieval facade: validates URLs, fetches pages and downloads images
pub struct Client {
    http: reqwest::Client,
    config: FetchConfig,
}

impl Client {
    /// Client with default configuration
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_config(FetchConfig::default())
    }

    /// Client with explicit configuration
    pub fn with_config(config: FetchConfig) -> Result<Self, ScrapeError> {
        let policy = if config.follow_redirects {
            redirect::Policy::limited(10)
        } else {
            redirect::Policy::none()
        };

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(policy)
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch a page via GET and parse it into a [`Page`]
    pub async fn connect(&self, url: &str) -> Result<Page, ScrapeError> {
        let target = Self::validate(url)?;
        let body = self.fetch_text(Method::GET, target.clone(), None).await?;
        Ok(Page::with_base(&body, Some(target)))
    }

    /// Submit a form via POST and parse the response into a [`Page`].
    ///
    /// Form values are sanitized by stripping `<` and `>` before submission.
    pub async fn post(
        &self,
        url: &str,
        form: &HashMap<String, String>,
    ) -> Result<Page, ScrapeError> {
        let target = Self::validate(url)?;
        let fields: Vec<(String, String)> = form
            .iter()
            .map(|(k, v)| (k.clone(), sanitize_form_value(v)))
            .collect();

        let body = self
            .fetch_text(Method::POST, target.clone(), Some(&fields))
            .await?;
        Ok(Page::with_base(&body, Some(target)))
    }

    /// Download every image on the page into `folder`.
    ///
    /// Downloads fan out concurrently and all complete before returning.
    /// Per-image failures (invalid URL, non-image content type, fetch or
    /// write error) are isolated: the image is reported as skipped and its
    /// siblings continue. Only folder creation failure aborts the batch.
    pub async fn download_images(
        &self,
        page: &Page,
        folder: impl AsRef<Path>,
    ) -> Result<Vec<ImageOutcome>, ScrapeError> {
        let folder = folder.as_ref();
        let sources = page.image_sources("img");

        if sources.is_empty() {
            return Ok(vec![]);
        }

        tokio::fs::create_dir_all(folder).await?;

        let tasks = sources
            .into_iter()
            .enumerate()
            .map(|(index, src)| self.fetch_image(folder, index, src));

        Ok(futures::future::join_all(tasks).await)
    }

    async fn fetch_image(&self, folder: &Path, index: usize, src: String) -> ImageOutcome {
        let url = match Url::parse(&src) {
            Ok(u) => u,
            Err(_) => {
                warn!(url = %src, "skipping image with invalid url");
                return ImageOutcome::Skipped {
                    url: src,
                    reason: "invalid url".to_string(),
                };
            }
        };

        let response = match self
            .http
            .get(url)
            .header(header::USER_AGENT, self.user_agent())
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(r) => r,
            Err(err) => {
                warn!(url = %src, error = %err, "skipping image after fetch failure");
                return ImageOutcome::Skipped {
                    url: src,
                    reason: err.to_string(),
                };
            }
        };

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.starts_with("image/") {
            warn!(url = %src, content_type = %content_type, "skipping non-image response");
            return ImageOutcome::Skipped {
                url: src,
                reason: format!("unexpected content type: {content_type}"),
            };
        }

        let bytes = match response.bytes().await {
            Ok(b) => b,
            Err(err) => {
                return ImageOutcome::Skipped {
                    url: src,
                    reason: err.to_string(),
                };
            }
        };

        let extension = extension_for_content_type(&content_type);
        let path = folder.join(format!("image_{}.{}", index + 1, extension));

        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => {
                debug!(url = %src, path = %path.display(), "image saved");
                ImageOutcome::Saved { url: src, path }
            }
            Err(err) => ImageOutcome::Skipped {
                url: src,
                reason: err.to_string(),
            },
        }
    }

    async fn fetch_text(
        &self,
        method: Method,
        url: Url,
        form: Option<&Vec<(String, String)>>,
    ) -> Result<String, ScrapeError> {
        let mut attempt = 0;

        loop {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .header(header::USER_AGENT, self.user_agent());
            if let Some(fields) = form {
                request = request.form(fields);
            }

            let result = match request.send().await.and_then(|r| r.error_for_status()) {
                Ok(response) => response.text().await,
                Err(err) => Err(err),
            };

            match result {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.config.retries => {
                    attempt += 1;
                    warn!(url = %url, attempt, error = %err, "request failed, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn user_agent(&self) -> String {
        self.config
            .user_agents
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| DEFAULT_USER_AGENTS[0].to_string())
    }

    fn validate(url: &str) -> Result<Url, ScrapeError> {
        Url::parse(url).map_err(|_| ScrapeError::InvalidUrl(url.to_string()))
    }
}

/// Strip `<` and `>` from a form value before submission
fn sanitize_form_value(value: &str) -> String {
    value.chars().filter(|c| *c != '<' && *c != '>').collect()
}

/// Map a content type to a file extension, defaulting to jpg
fn extension_for_content_type(content_type: &str) -> &'static str {
    match content_type.split(';').next().unwrap_or("").trim() {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        "image/bmp" => "bmp",
        "image/avif" => "avif",
        _ => "jpg",
    }
}
