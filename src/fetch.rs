// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;
use tracing::debug;
use url::Url;

use crate::config::SheetConfig;

/// A client that can GET a URL and hand back the body as text.
///
/// The host supplies this; timeouts and cancellation are its business.
pub trait Fetch {
    fn get_text(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

impl Fetch for Client {
    /// Any status is accepted as long as the body can be read.
    async fn get_text(&self, url: &Url) -> Result<String> {
        let resp = self
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;
        debug!(%url, status = %resp.status(), "response received");

        let text = resp
            .text()
            .await
            .with_context(|| format!("reading body from {}", url))?;
        debug!(%url, bytes = text.len(), "body read");
        Ok(text)
    }
}

impl<F: Fetch> Fetch for &F {
    fn get_text(&self, url: &Url) -> impl Future<Output = Result<String>> + Send {
        (**self).get_text(url)
    }
}

/// The reqwest client the binary injects, with the configured timeout if any.
pub fn build_client(config: &SheetConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().context("building HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Answer exactly one request with `status` and `body`, then hang up.
    async fn serve_once(status: &str, body: &str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        Url::parse(&format!("http://{}/pub?output=csv", addr)).unwrap()
    }

    fn local_client() -> Client {
        // keep HTTP(S)_PROXY from the environment away from loopback
        Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn test_get_text_reads_body() {
        let url = serve_once("200 OK", "a,b\n1,2\n").await;
        let text = local_client().get_text(&url).await.unwrap();
        assert_eq!(text, "a,b\n1,2\n");
    }

    #[tokio::test]
    async fn test_non_success_status_still_returns_body() {
        let url = serve_once("404 Not Found", "missing").await;
        let text = local_client().get_text(&url).await.unwrap();
        assert_eq!(text, "missing");
    }

    #[tokio::test]
    async fn test_connection_refused_is_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/", addr)).unwrap();
        let err = local_client().get_text(&url).await.unwrap_err();
        assert!(format!("{:#}", err).starts_with(&format!("GET {}", url)));
    }

    #[tokio::test]
    async fn test_borrowed_client_is_fetch() {
        let url = serve_once("200 OK", "x\n1").await;
        let client = local_client();
        let borrowed: &Client = &client;
        assert_eq!(Fetch::get_text(&borrowed, &url).await.unwrap(), "x\n1");
    }

    #[tokio::test]
    async fn test_build_client_with_timeout() {
        let mut cfg = SheetConfig::default();
        cfg.timeout_secs = Some(5);
        assert!(build_client(&cfg).is_ok());
        assert!(build_client(&SheetConfig::default()).is_ok());
    }
}
