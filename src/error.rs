// src/error.rs
use thiserror::Error;
use url::Url;

/// Everything that can go wrong between issuing the GET and holding the body text.
///
/// Parsing a `&str` cannot fail, so fetch (network + body decoding) is the only
/// category. The `cause` chain is rendered with `{:#}` so the log line keeps
/// the `GET ...` / `reading body ...` context.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("fetching sheet from {url} failed: {cause:#}")]
    Fetch { url: Url, cause: anyhow::Error },
}
