//! The structs
//!
use std::time::Duration;

/// The status and body of a single GET request.
///
/// `url` is the url as it was requested, including the query string,
/// so it can be used in error messages.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// The settings used to build a [ReqwestTransport].
#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub username: Option<String>,
    pub password: Option<String>,
    pub accept_invalid_certs: bool,
    pub timeout: Duration,
}

/// Blocking reqwest based transport.
#[derive(Debug)]
pub struct ReqwestTransport {
    pub(crate) client: reqwest::blocking::Client,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
}
