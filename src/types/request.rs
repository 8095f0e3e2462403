//! Request-side value types.

use bytes::Bytes;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::{Error, Result};

/// Default delay between two job result polls.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Kind of source material, sent as the `contentType` multipart field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    #[default]
    Document,
    Image,
    Book,
}

impl ContentType {
    /// Wire name (e.g., `"DOCUMENT"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Document => "DOCUMENT",
            ContentType::Image => "IMAGE",
            ContentType::Book => "BOOK",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DOCUMENT" => Ok(ContentType::Document),
            "IMAGE" => Ok(ContentType::Image),
            "BOOK" => Ok(ContentType::Book),
            other => Err(Error::validation(format!(
                "The content type {} is not supported",
                other
            ))),
        }
    }
}

/// Where a file part's bytes come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    Bytes(Bytes),
    /// Read lazily, only when the payload is serialized.
    Path(PathBuf),
}

/// A raw file uploaded as one `files` multipart part.
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub name: Option<String>,
    pub source: FileSource,
}

impl ContentFile {
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            name: None,
            source: FileSource::Bytes(bytes.into()),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            source: FileSource::Path(path.into()),
        }
    }

    /// Set the part's file name. Without one, a random UUID is used.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Read the file contents. I/O failures surface as [`Error::Io`].
    pub async fn read(&self) -> Result<Bytes> {
        match &self.source {
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
            FileSource::Path(path) => Ok(Bytes::from(tokio::fs::read(path).await?)),
        }
    }
}

/// Source material for a generation request.
///
/// At least one of `text_content`, `content_urls` or `files` must be
/// non-empty; this is checked before any network call.
#[derive(Debug, Clone, Default)]
pub struct ContentRequest {
    pub text_content: Option<String>,
    pub content_urls: Vec<String>,
    pub files: Vec<ContentFile>,
    pub content_type: ContentType,
}

impl ContentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.content_urls.push(url.into());
        self
    }

    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_urls.extend(urls.into_iter().map(Into::into));
        self
    }

    pub fn with_file(mut self, file: ContentFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Text content, treating an empty string as absent.
    pub fn text(&self) -> Option<&str> {
        self.text_content.as_deref().filter(|t| !t.is_empty())
    }

    pub fn has_content(&self) -> bool {
        self.text().is_some() || !self.content_urls.is_empty() || !self.files.is_empty()
    }
}

/// Queue-specific options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOptions {
    /// Seconds to sleep before each poll. Zero disables the delay.
    pub poll_interval_secs: u64,
    /// Optional callback URL the gateway notifies when the job finishes.
    pub webhook_url: Option<String>,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            webhook_url: None,
        }
    }
}

impl JobOptions {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// A queued generation request.
#[derive(Debug, Clone, Default)]
pub struct AsyncJobRequest {
    pub content: ContentRequest,
    pub job: JobOptions,
}

impl AsyncJobRequest {
    pub fn new(content: ContentRequest) -> Self {
        Self {
            content,
            job: JobOptions::default(),
        }
    }

    pub fn with_poll_interval_secs(mut self, secs: u64) -> Self {
        self.job.poll_interval_secs = secs;
        self
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.job.webhook_url = Some(url.into());
        self
    }
}

impl From<ContentRequest> for AsyncJobRequest {
    fn from(content: ContentRequest) -> Self {
        Self::new(content)
    }
}

/// How a payload is delivered: one blocking round trip, or a queue submission.
#[derive(Debug, Clone, Copy)]
pub enum RequestMode<'a> {
    Generate,
    Queue(&'a JobOptions),
}
