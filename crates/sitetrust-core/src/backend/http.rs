//! libcurl-backed implementation of [`TrustBackend`].
//!
//! Each transfer runs on tokio's blocking pool via `spawn_blocking`, so the
//! two lookup fetches proceed in parallel without tying up async workers.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use super::{FetchError, TrustBackend};
use crate::config::ClientConfig;
use crate::host::Hostname;
use crate::model::{Explanation, HealthStatus, SiteScore, Vote, VoteReceipt};
use crate::retry::{run_with_retry, RetryPolicy};

const USER_AGENT: &str = concat!("sitetrust/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the trust API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: Url,
    connect_timeout: Duration,
    request_timeout: Duration,
    retry: RetryPolicy,
}

/// One prepared transfer. `body` present means POST with a JSON payload.
#[derive(Debug, Clone)]
struct Request {
    url: Url,
    body: Option<Vec<u8>>,
}

impl HttpBackend {
    /// Builds a client from config. Fails if `api_base` is not an absolute URL.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&cfg.api_base)?;
        if base.cannot_be_a_base() {
            return Err(FetchError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self {
            base,
            connect_timeout: cfg.connect_timeout(),
            request_timeout: cfg.request_timeout(),
            retry: cfg.retry_policy(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /v1/health`.
    pub async fn health(&self) -> Result<HealthStatus, FetchError> {
        let url = self.endpoint(&["v1", "health"])?;
        self.get_json(url).await
    }

    async fn execute(&self, request: Request) -> Result<Vec<u8>, FetchError> {
        let connect_timeout = self.connect_timeout;
        let request_timeout = self.request_timeout;
        tokio::task::spawn_blocking(move || perform(&request, connect_timeout, request_timeout))
            .await?
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let body = run_with_retry(&self.retry, || {
            self.execute(Request {
                url: url.clone(),
                body: None,
            })
        })
        .await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl TrustBackend for HttpBackend {
    async fn fetch_score(&self, host: &Hostname) -> Result<SiteScore, FetchError> {
        let url = self.endpoint(&["v1", "sites", host.as_str()])?;
        let score: SiteScore = self.get_json(url).await?;
        score.validate()?;
        Ok(score)
    }

    async fn fetch_explanation(&self, host: &Hostname) -> Result<Explanation, FetchError> {
        let url = self.endpoint(&["v1", "sites", host.as_str(), "explain"])?;
        let explanation: Explanation = self.get_json(url).await?;
        explanation.validate()?;
        Ok(explanation)
    }

    async fn submit_vote(&self, vote: &Vote) -> Result<VoteReceipt, FetchError> {
        let url = self.endpoint(&["v1", "votes"])?;
        let payload = serde_json::to_vec(vote)?;
        let body = self
            .execute(Request {
                url,
                body: Some(payload),
            })
            .await?;
        // Acceptance is the status code; the body is informational.
        match serde_json::from_slice(&body) {
            Ok(receipt) => Ok(receipt),
            Err(e) => {
                tracing::debug!(error = %e, "vote accepted with unparsed body");
                Ok(VoteReceipt::default())
            }
        }
    }
}

/// Runs one blocking transfer and returns the body of a 2xx response.
fn perform(
    request: &Request,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(request.url.as_str())?;
    easy.follow_location(true)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(request_timeout)?;
    easy.useragent(USER_AGENT)?;

    let mut headers = curl::easy::List::new();
    headers.append("Accept: application/json")?;
    match &request.body {
        Some(payload) => {
            easy.post(true)?;
            easy.post_fields_copy(payload)?;
            headers.append("Content-Type: application/json")?;
        }
        None => {
            easy.get(true)?;
            headers.append("Cache-Control: no-cache")?;
        }
    }
    easy.http_headers(headers)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(url = %request.url, code, bytes = body.len(), "transfer finished");
    if !(200..300).contains(&code) {
        return Err(FetchError::Status(code));
    }
    Ok(body)
}
