//! 请求体构建：校验内容来源并生成 multipart 表单。
//!
//! Content payload building.
//!
//! [`build`] is a pure transform from a [`ContentRequest`] to a [`Payload`];
//! file contents are only read by [`Payload::into_form`], when the payload is
//! actually serialized for the wire.

use reqwest::multipart::{Form, Part};
use url::Url;
use uuid::Uuid;

use crate::types::{ContentFile, ContentRequest, RequestMode};
use crate::{Error, ErrorContext, Result};

pub const CONTENT_TYPE_FIELD: &str = "contentType";
pub const TEXT_CONTENT_FIELD: &str = "textContent";
pub const URLS_FIELD: &str = "urls";
pub const FILES_FIELD: &str = "files";
pub const WEB_HOOK_URL_FIELD: &str = "webHookUrl";

pub const NO_CONTENT_MESSAGE: &str = "Please set either the url, text content or content input stream";

const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Transport-ready request body.
#[derive(Debug, Clone)]
pub struct Payload {
    fields: Vec<(String, String)>,
    files: Vec<ContentFile>,
}

impl Payload {
    /// Text fields in the order they are sent.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn files(&self) -> &[ContentFile] {
        &self.files
    }

    /// Serialize into a multipart form, reading file parts now.
    pub async fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let bytes = file.read().await?;
            let file_name = file
                .name
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            form = form.part(FILES_FIELD, Part::bytes(bytes.to_vec()).file_name(file_name));
        }
        Ok(form)
    }
}

/// Generic URL syntax check: absolute, with a supported scheme and a host.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            ALLOWED_URL_SCHEMES.contains(&url.scheme())
                && url.host_str().map(|h| !h.is_empty()).unwrap_or(false)
        }
        Err(_) => false,
    }
}

/// Check that the request carries content and that every URL is well formed.
pub fn validate(request: &ContentRequest) -> Result<()> {
    if !request.has_content() {
        return Err(Error::validation_with_context(
            NO_CONTENT_MESSAGE,
            ErrorContext::new().with_source("payload_builder"),
        ));
    }

    for (idx, url) in request.content_urls.iter().enumerate() {
        if !is_valid_url(url) {
            return Err(Error::validation_with_context(
                format!("{} is not a valid URL", url),
                ErrorContext::new()
                    .with_field_path(format!("request.content_urls[{}]", idx))
                    .with_source("payload_builder"),
            ));
        }
    }

    Ok(())
}

/// Build the payload for `request`. Queue submissions also carry the webhook URL.
pub fn build(request: &ContentRequest, mode: RequestMode<'_>) -> Result<Payload> {
    validate(request)?;

    let mut fields = vec![(
        CONTENT_TYPE_FIELD.to_string(),
        request.content_type.as_str().to_string(),
    )];
    if !request.content_urls.is_empty() {
        fields.push((URLS_FIELD.to_string(), request.content_urls.join(",")));
    }
    if let Some(text) = request.text() {
        fields.push((TEXT_CONTENT_FIELD.to_string(), text.to_string()));
    }
    if let RequestMode::Queue(options) = mode {
        if let Some(webhook) = &options.webhook_url {
            fields.push((WEB_HOOK_URL_FIELD.to_string(), webhook.clone()));
        }
    }

    Ok(Payload {
        fields,
        files: request.files.clone(),
    })
}
