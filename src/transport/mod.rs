//! Module for performing the HTTP GET requests against the management API.
//!
//! The management api client ([crate::api::MarkLogicApi]) does not perform any I/O itself,
//! it is handed something that implements [HttpTransport]:
//! - [ReqwestTransport]: a blocking reqwest client, optionally with basic authentication,
//!   a request timeout and acceptance of invalid (self-signed) certificates.
//! - a recording fake in the unit tests.
//!
//! A transport returns the status and body of a response as an [HttpResponse], and only fails
//! when no response was obtained at all. A non-success status is turned into an error by
//! [HttpResponse::error_for_status].
//!
mod structs;
mod functions;
#[cfg(test)]
mod testing;

pub use structs::*;
pub use functions::*;
#[cfg(test)]
pub(crate) use testing::RecordingTransport;
