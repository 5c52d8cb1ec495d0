//! Reqwest-backed content lake client.
//!
//! Owns transport details only: endpoint construction, CDN selection,
//! bearer authentication, HTTP error mapping and unwrapping the `result`
//! envelope of query responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::ports::content::{ContentClient, ContentClientError, QueryParams};

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Connection settings for one project/dataset pair.
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
    pub timeout: Duration,
    /// Replaces `https://<project>.api(cdn).sanity.io` when set.
    pub api_host: Option<Url>,
}

pub struct SanityHttpClient {
    client: Client,
    query_url: Url,
    mutate_url: Url,
    token: Option<String>,
    send_token_on_reads: bool,
}

impl SanityHttpClient {
    /// # Errors
    ///
    /// Returns an error when the endpoints cannot be built or the reqwest
    /// client cannot be constructed.
    pub fn new(config: &SanityConfig) -> Result<Self, ContentClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ContentClientError::Transport(err.to_string()))?;

        let read_host = host_url(config, config.use_cdn)?;
        let write_host = host_url(config, false)?;
        let version = config.api_version.trim_start_matches('v');

        let query_url = join(&read_host, &format!("v{version}/data/query/{}", config.dataset))?;
        let mutate_url = join(
            &write_host,
            &format!("v{version}/data/mutate/{}", config.dataset),
        )?;

        Ok(Self {
            client,
            query_url,
            mutate_url,
            token: config.token.clone(),
            // CDN reads are anonymous; authenticated requests bypass the cache.
            send_token_on_reads: !config.use_cdn,
        })
    }

    pub fn query_url(&self) -> &Url {
        &self.query_url
    }

    pub fn mutate_url(&self) -> &Url {
        &self.mutate_url
    }

    fn build_query_url(&self, query: &str, params: &QueryParams) -> Url {
        let mut url = self.query_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }
        url
    }
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    result: Value,
}

#[async_trait]
impl ContentClient for SanityHttpClient {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ContentClientError> {
        let mut request = self
            .client
            .get(self.build_query_url(query, params))
            .header(reqwest::header::ACCEPT, "application/json");
        if self.send_token_on_reads {
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let envelope: QueryEnvelope = serde_json::from_slice(body.as_ref())
            .map_err(|err| ContentClientError::Decode(format!("invalid query response: {err}")))?;
        Ok(envelope.result)
    }

    async fn create(&self, document: Value) -> Result<(), ContentClientError> {
        let token = self
            .token
            .as_deref()
            .ok_or(ContentClientError::MissingToken)?;
        let payload = json!({ "mutations": [{ "create": document }] });

        let response = self
            .client
            .post(self.mutate_url.clone())
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn host_url(config: &SanityConfig, use_cdn: bool) -> Result<Url, ContentClientError> {
    if let Some(host) = &config.api_host {
        return Ok(host.clone());
    }
    let subdomain = if use_cdn { "apicdn" } else { "api" };
    Url::parse(&format!(
        "https://{}.{subdomain}.sanity.io/",
        config.project_id
    ))
    .map_err(|err| ContentClientError::Transport(format!("invalid project id: {err}")))
}

fn join(base: &Url, path: &str) -> Result<Url, ContentClientError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path)
        .map_err(|err| ContentClientError::Transport(format!("invalid endpoint: {err}")))
}

fn map_transport_error(err: reqwest::Error) -> ContentClientError {
    if err.is_timeout() {
        ContentClientError::Transport("request timed out".into())
    } else {
        ContentClientError::Transport(err.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ContentClientError {
    ContentClientError::Status {
        status: status.as_u16(),
        message: error_message(body),
    }
}

/// Pull a human readable message out of an error payload, falling back to
/// a truncated copy of the raw body.
fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        let described = value
            .pointer("/error/description")
            .or_else(|| value.get("message"))
            .or_else(|| value.get("error"))
            .and_then(Value::as_str);
        if let Some(message) = described {
            return message.to_owned();
        }
    }
    String::from_utf8_lossy(body)
        .chars()
        .take(MAX_ERROR_BODY_CHARS)
        .collect()
}
