//! Blocking counterpart of the request helper
//!
//! Same semantics as the async API, built on [`reqwest::blocking`]. Must not be
//! called from inside an async runtime.

use crate::{
    client::APP_USER_AGENT,
    error::Result,
    utils::build_blocking_request,
    verb::{DEFAULT_VERB, parse_verb},
};
use reqwest::blocking::{Client, Response};

#[derive(Debug, Clone)]
pub struct Requester {
    client: Client,
}

impl Default for Requester {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent(APP_USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Requester {
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// `GET url` with `Authorization: access_token`.
    pub fn basic_request(&self, url: &str, access_token: &str) -> Result<Response> {
        self.request(url, access_token, DEFAULT_VERB)
    }

    pub fn request(&self, url: &str, access_token: &str, verb: &str) -> Result<Response> {
        let method = parse_verb(verb)?;
        Ok(build_blocking_request(&self.client, method, url, access_token).send()?)
    }
}

pub fn basic_request(url: &str, access_token: &str) -> Result<Response> {
    Requester::default().basic_request(url, access_token)
}

pub fn request(url: &str, access_token: &str, verb: &str) -> Result<Response> {
    Requester::default().request(url, access_token, verb)
}
