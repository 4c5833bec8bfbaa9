//! A transport for the unit tests that returns a fixed response and remembers the requests.
//!
use std::cell::RefCell;
use anyhow::Result;
use crate::api::QueryParams;
use crate::transport::{HttpResponse, HttpTransport};

pub(crate) struct RecordingTransport {
    status: u16,
    body: String,
    requests: RefCell<Vec<(String, QueryParams)>>,
}

impl RecordingTransport {
    pub(crate) fn new(
        status: u16,
        body: &str,
    ) -> Self
    {
        RecordingTransport { status, body: body.to_string(), requests: RefCell::new(Vec::new()) }
    }
    pub(crate) fn ok(body: &str) -> Self {
        RecordingTransport::new(200, body)
    }
    pub(crate) fn last_request(&self) -> (String, QueryParams) {
        self.requests.borrow().last().cloned().expect("no request was made")
    }
    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpTransport for RecordingTransport {
    fn get(
        &self,
        url: &str,
        params: &QueryParams,
    ) -> Result<HttpResponse>
    {
        self.requests.borrow_mut().push((url.to_string(), params.clone()));
        Ok(HttpResponse::new(url, self.status, &self.body))
    }
}
