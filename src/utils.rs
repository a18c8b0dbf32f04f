use reqwest::{Client, Method, RequestBuilder, header::AUTHORIZATION};

/// Attach the single `Authorization` header to a request.
///
/// The token goes in verbatim. A value that is not a legal header value
/// surfaces from `reqwest` when the request is sent.
pub(crate) fn build_request(
    client: &Client,
    method: Method,
    url: &str,
    access_token: &str,
) -> RequestBuilder {
    tracing::debug!(method = %method, url, "dispatching request");
    client.request(method, url).header(AUTHORIZATION, access_token)
}

#[cfg(feature = "blocking")]
pub(crate) fn build_blocking_request(
    client: &reqwest::blocking::Client,
    method: Method,
    url: &str,
    access_token: &str,
) -> reqwest::blocking::RequestBuilder {
    tracing::debug!(method = %method, url, "dispatching blocking request");
    client.request(method, url).header(AUTHORIZATION, access_token)
}
