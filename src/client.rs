//! Authorized request helper

use crate::{
    error::Result,
    utils::build_request,
    verb::{DEFAULT_VERB, parse_verb},
};
use reqwest::{Client, Response};

pub(crate) static APP_USER_AGENT: &str =
    concat!("RS", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Sends requests carrying an `Authorization` header through a shared client.
///
/// Timeouts, proxies and pooling are whatever the wrapped [`Client`] is
/// configured with.
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
    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// `GET url` with `Authorization: access_token`.
    pub async fn basic_request(&self, url: &str, access_token: &str) -> Result<Response> {
        self.request(url, access_token, DEFAULT_VERB).await
    }

    /// Send a bodyless `verb` request to `url` with `Authorization: access_token`.
    ///
    /// The response comes back as-is, whatever its status.
    pub async fn request(&self, url: &str, access_token: &str, verb: &str) -> Result<Response> {
        let method = parse_verb(verb)?;
        let resp = build_request(self.client(), method, url, access_token)
            .send()
            .await?;
        Ok(resp)
    }
}

/// `GET url` with `Authorization: access_token`, using a default [`Requester`].
pub async fn basic_request(url: &str, access_token: &str) -> Result<Response> {
    Requester::default().basic_request(url, access_token).await
}

/// Like [`basic_request`] with an explicit verb.
pub async fn request(url: &str, access_token: &str, verb: &str) -> Result<Response> {
    Requester::default().request(url, access_token, verb).await
}
