//! HTTP verb handling

use crate::{Error, error::Result};
use reqwest::Method;

/// Verb used when the caller does not pick one.
pub const DEFAULT_VERB: &str = "get";

/// Turn a caller-supplied verb into a request method.
///
/// The verb is upper-cased first, so `"post"` and `"POST"` are the same method.
/// Tokens outside the standard set are kept as extension methods.
pub fn parse_verb(verb: &str) -> Result<Method> {
    Method::from_bytes(verb.to_ascii_uppercase().as_bytes())
        .map_err(|_| Error::InvalidVerb(verb.to_owned()))
}
