use crate::error::{Error, Result};
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, ClientBuilder};
use std::time::Duration;

/// HTTP client used to probe and fetch avatar images
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Create a new HTTP client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(concat!("gravatar-rust-sdk/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Request only the response headers of `url`.
    ///
    /// Any transport failure (DNS, refused connection, timeout) is reported
    /// as [`Error::UrlUnreachable`].
    pub async fn probe(&self, url: &str) -> Result<HeaderMap> {
        debug!("HEAD {url}");

        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| Error::UrlUnreachable(e.to_string()))?;

        debug!("HEAD {url} -> {}", response.status());
        Ok(response.headers().clone())
    }

    /// Fetch the full response body of `url`. Non-success statuses are
    /// reported as [`Error::DownloadFailed`].
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::DownloadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::DownloadFailed(format!(
                "Unexpected response status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::DownloadFailed(e.to_string()))?;

        debug!("GET {url} -> {} bytes", body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_returns_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("HEAD", "/avatar/abc")
            .with_status(200)
            .with_header("content-type", "image/png")
            .create_async()
            .await;

        let client = HttpClient::new(Duration::from_secs(5)).unwrap();
        let headers = client
            .probe(&format!("{}/avatar/abc", server.url()))
            .await
            .unwrap();

        assert_eq!(headers.get("content-type").unwrap(), "image/png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_probe_connection_refused() {
        let client = HttpClient::new(Duration::from_secs(5)).unwrap();
        let result = client.probe("http://127.0.0.1:1/avatar/abc").await;

        match result {
            Err(Error::UrlUnreachable(_)) => {} // Expected error
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/avatar/abc")
            .with_status(200)
            .with_header("content-type", "image/gif")
            .with_body("GIF89a")
            .create_async()
            .await;

        let client = HttpClient::new(Duration::from_secs(5)).unwrap();
        let body = client
            .fetch(&format!("{}/avatar/abc", server.url()))
            .await
            .unwrap();

        assert_eq!(body, b"GIF89a");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/avatar/abc")
            .with_status(500)
            .with_header("content-type", "text/html")
            .with_body("<h1>Internal Server Error</h1>")
            .create_async()
            .await;

        let client = HttpClient::new(Duration::from_secs(5)).unwrap();
        let result = client
            .fetch(&format!("{}/avatar/abc", server.url()))
            .await;

        match result {
            Err(Error::DownloadFailed(msg)) => assert!(msg.contains("500")),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let client = HttpClient::new(Duration::from_secs(5)).unwrap();
        let result = client.fetch("http://127.0.0.1:1/avatar/abc").await;

        assert!(matches!(result, Err(Error::DownloadFailed(_))));
    }
}
