//! The impls and functions
//!
use std::time::Duration;
use log::*;
use anyhow::{bail, Context, Result};
use crate::api::QueryParams;
use crate::transport::{HttpResponse, ReqwestTransport, TransportSettings};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// The capability to perform a GET request.
///
/// `params` are appended to `url` as the query string.
/// An implementation must return `Ok` for any response that was received, whatever the status.
pub trait HttpTransport {
    fn get(
        &self,
        url: &str,
        params: &QueryParams,
    ) -> Result<HttpResponse>;
}

impl HttpResponse {
    pub fn new(
        url: &str,
        status: u16,
        body: &str,
    ) -> Self
    {
        HttpResponse { url: url.to_string(), status, body: body.to_string() }
    }
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
    /// Turn a non-success status into an error, otherwise hand back the response.
    pub fn error_for_status(self) -> Result<Self> {
        if !self.is_success() {
            bail!("HTTP status {} for url: {}", self.status, self.url);
        }
        Ok(self)
    }
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("Error parsing json response from url: {}", self.url))
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        TransportSettings {
            username: None,
            password: None,
            accept_invalid_certs: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ReqwestTransport {
    pub fn new(
        settings: &TransportSettings,
    ) -> Result<Self>
    {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .timeout(settings.timeout)
            .build()
            .with_context(|| "Error creating http client")?;
        Ok(ReqwestTransport {
            client,
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(
        &self,
        url: &str,
        params: &QueryParams,
    ) -> Result<HttpResponse>
    {
        let mut request = self.client.get(url).query(params.as_slice());
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }
        let response = request.send()
            .with_context(|| format!("Error reading from url: {}", url))?;

        let status = response.status();
        let requested_url = response.url().to_string();
        if !status.is_success() {
            debug!("Non success response: {} = {}", requested_url, status);
        } else {
            debug!("Success response: {} = {}", requested_url, status);
        }
        let body = response.text()
            .with_context(|| format!("Error reading response body from url: {}", requested_url))?;

        Ok(HttpResponse { url: requested_url, status: status.as_u16(), body })
    }
}
