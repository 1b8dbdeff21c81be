//! # Remote Data Source
//!
//! One GET against a fixed URL, one JSON decode. No retry, no timeout, no
//! caching: every call goes to the network.

use std::error::Error;

use anyhow::Context;
use reqwest::{Client, StatusCode, Url};
use roster_common::config::Config;
use roster_common::employee::{Employee, EmployeeResponse};
use roster_common::error::FetchError;
use tracing::debug;

pub struct RemoteDataSource {
    client: Client,
    url: Url,
}

impl RemoteDataSource {
    /// Builds a source for the endpoint described by `cfg`.
    ///
    /// Fails only when the configured base URL and path do not form a valid URL.
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let raw = cfg.endpoint_url();
        let url = Url::parse(&raw).with_context(|| format!("invalid endpoint URL '{raw}'"))?;
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches the list exactly as ordered in the response payload.
    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, FetchError> {
        debug!(url = %self.url, "requesting employee list");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status: StatusCode = response.status();
        if !status.is_success() {
            debug!(%status, "employee endpoint answered with an error status");
            return Err(FetchError::Response);
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let employees = decode(&body)?;

        debug!(count = employees.len(), "employee list decoded");
        Ok(employees)
    }
}

fn decode(body: &[u8]) -> Result<Vec<Employee>, FetchError> {
    EmployeeResponse::from_json(body)
        .map(EmployeeResponse::into_employees)
        .map_err(|err| {
            debug!(error = %err, "employee payload is not valid JSON");
            FetchError::Response
        })
}

/// reqwest's own text only names the URL; the innermost source says what
/// actually went wrong (refused, dns, tls...).
fn transport_error(err: reqwest::Error) -> FetchError {
    debug!(error = ?err, "employee request failed");
    let message = match root_cause(&err) {
        Some(cause) => format!("{err}: {cause}"),
        None => err.to_string(),
    };
    FetchError::transport(message)
}

fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    let mut cause = err.source()?;
    while let Some(inner) = cause.source() {
        cause = inner;
    }
    Some(cause)
}
