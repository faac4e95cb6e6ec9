// GitHub API HTTP client.
// Handles optional authentication, rate limiting, and request/response processing.

use std::sync::Mutex;
use std::time::Duration;

use log::debug;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{InstallerError, Result};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with optional authentication and rate limit tracking.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a new client against `base_url`.
    /// Anonymous access is enough for public repositories; a token raises the rate limit.
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| InstallerError::Other(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("fbw-installer"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(InstallerError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Get the most recently observed rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(InstallerError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let header = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        let Ok(mut rate_limit) = self.rate_limit.lock() else {
            return;
        };

        if let Some(limit) = header("x-ratelimit-limit") {
            rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(InstallerError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(InstallerError::NotFound(url))
            }
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                let rate_limit = self.rate_limit();
                // Check if rate limited
                if rate_limit.remaining == 0 {
                    let reset_at = chrono::DateTime::from_timestamp(rate_limit.reset as i64, 0)
                        .map(|dt| dt.format("%H:%M:%S").to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    Err(InstallerError::RateLimited { reset_at })
                } else {
                    Err(InstallerError::Other(format!(
                        "Forbidden: {}",
                        response.text().await.unwrap_or_default()
                    )))
                }
            }
            status => Err(InstallerError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn client(server: &Server) -> GitHubClient {
        GitHubClient::new(&server.url(), None, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_sends_token_when_configured() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", "Bearer secret")
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .create_async()
            .await;

        let client = GitHubClient::new(&server.url(), Some("secret"), Duration::from_secs(5)).unwrap();
        client.get("/ping").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_tracks_rate_limit_headers() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(200)
            .with_header("x-ratelimit-limit", "60")
            .with_header("x-ratelimit-remaining", "59")
            .with_header("x-ratelimit-reset", "1700000000")
            .create_async()
            .await;

        let client = client(&server);
        client.get("/ping").await.unwrap();

        let rate_limit = client.rate_limit();
        assert_eq!(rate_limit.limit, 60);
        assert_eq!(rate_limit.remaining, 59);
        assert_eq!(rate_limit.reset, 1_700_000_000);
    }

    #[tokio::test]
    async fn test_maps_error_statuses() {
        let mut server = Server::new_async().await;
        let _unauthorized = server
            .mock("GET", "/unauthorized")
            .with_status(401)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;
        let _limited = server
            .mock("GET", "/limited")
            .with_status(403)
            .with_header("x-ratelimit-remaining", "0")
            .with_header("x-ratelimit-reset", "1700000000")
            .create_async()
            .await;
        let _broken = server
            .mock("GET", "/broken")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client(&server);

        assert!(matches!(
            client.get("/unauthorized").await,
            Err(InstallerError::Unauthorized)
        ));
        assert!(matches!(
            client.get("/missing").await,
            Err(InstallerError::NotFound(_))
        ));
        assert!(matches!(
            client.get("/limited").await,
            Err(InstallerError::RateLimited { .. })
        ));
        match client.get("/broken").await {
            Err(InstallerError::Other(message)) => assert!(message.contains("boom")),
            other => panic!("unexpected result: {:?}", other.map(|r| r.status())),
        }
    }
}
