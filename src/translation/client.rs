use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{SOURCE_LANGUAGE, TargetLanguage, TranslationError, Translator};

/// Public MyMemory `get` endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
}

/// Client for a MyMemory-compatible translation API.
///
/// Stateless apart from the connection pool; no retry, cache or timeout.
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    client: Client,
    endpoint: Url,
}

impl MyMemoryClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Builds `<endpoint>?q=<text>&langpair=en|<code>`, keeping any query the
    /// endpoint already carries.
    ///
    /// Values are percent-encoded as URI components (space is `%20`, never `+`).
    pub fn request_url(&self, text: &str, target: TargetLanguage) -> Url {
        let langpair = format!("{SOURCE_LANGUAGE}|{}", target.code());
        let pairs = format!(
            "q={}&langpair={}",
            urlencoding::encode(text),
            urlencoding::encode(&langpair)
        );

        let mut url = self.endpoint.clone();
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{pairs}"),
            _ => pairs,
        };
        url.set_query(Some(&query));
        url
    }
}

#[async_trait(?Send)]
impl Translator for MyMemoryClient {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        let url = self.request_url(text, target);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| TranslationError::Network {
                url: url.to_string(),
                source,
            })?;

        // The body is parsed whatever the status; error pages fail to parse.
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| TranslationError::Network {
                url: url.to_string(),
                source,
            })?;

        parse_envelope(status, &body)
    }
}

/// Extracts `responseData.translatedText` from a response body.
fn parse_envelope(status: u16, body: &str) -> Result<String, TranslationError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| TranslationError::MalformedResponse {
            status,
            detail: format!("invalid JSON body: {e}"),
        })?;

    envelope
        .response_data
        .and_then(|data| data.translated_text)
        .ok_or_else(|| TranslationError::MalformedResponse {
            status,
            detail: "missing responseData.translatedText".to_string(),
        })
}
