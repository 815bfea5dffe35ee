// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP client for remote version descriptors.
//!
//! ```text
//! Fetcher::builder()
//!   .with_timeout() .with_user_agent()
//!        |
//!        v
//!   fetch_string(url)
//!     send ------- timeout ---> FetchError::Timeout
//!       |   \----- other -----> FetchError::Request
//!     status ----- non-2xx ---> FetchError::Http
//!       |
//!     body text
//!
//! Fetcher implements host::HttpClient for the update checker.
//! ```

use std::time::Duration;

use anyhow::Context;
use bon::bon;
use futures_util::future::BoxFuture;
use reqwest::Client;
use tracing::debug;

use crate::config::types::HttpConfig;
use crate::error::{FetchError, Result};
use crate::host::HttpClient;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async text fetcher over a shared `reqwest` client.
///
/// Cloning is cheap: clones share the client's connection pool.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use modver_rs::net::Fetcher;
///
/// # async fn run() -> anyhow::Result<()> {
/// let fetcher = Fetcher::builder()
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
/// let body = fetcher.fetch_string("https://example.com/lazylib.version").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

#[bon]
impl Fetcher {
    /// Build a fetcher with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    #[builder]
    pub fn new(
        #[builder(setters(name = with_timeout), default = DEFAULT_TIMEOUT)] timeout: Duration,
        #[builder(
            setters(name = with_user_agent),
            into,
            default = concat!("modver-rs/", env!("CARGO_PKG_VERSION")).to_string()
        )]
        user_agent: String,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { client })
    }
}

impl Fetcher {
    /// Fetcher configured from the `[http]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::builder()
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_user_agent(config.user_agent.clone())
            .build()
    }

    /// GET `url` and return the body as text.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] if the request exceeds the timeout.
    /// - [`FetchError::Http`] for a non-success status.
    /// - [`FetchError::Request`] for any other transport failure.
    pub async fn fetch_string(&self, url: &str) -> std::result::Result<String, FetchError> {
        debug!(url, "fetching");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| classify(url, &e))
    }
}

impl HttpClient for Fetcher {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, std::result::Result<String, FetchError>> {
        Box::pin(self.fetch_string(url))
    }
}

fn classify(url: &str, error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
