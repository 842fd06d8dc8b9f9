// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rendering-session boundary
//!
//! Results pages and article pages are loaded through a headless browser.
//! The browser itself lives outside this crate; we only see it through the
//! [`Renderer`] / [`RenderSession`] pair. Every call site acquires its own
//! session through a [`SessionGuard`], which releases the session exactly
//! once whether the caller finishes, fails, or is cancelled mid-flight.
//!
//! The production backend talks to a Browserless instance over its
//! `/content` HTTP API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::config::RenderConfig;

/// Default wait applied to `waitForSelector` when navigation has no bound
const DEFAULT_SELECTOR_TIMEOUT_MS: u64 = 30_000;

/// Rendering backend errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// Could not acquire a browser session
    #[error("Session unavailable: {0}")]
    SessionUnavailable(String),

    /// Navigation or in-page wait failed
    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// Navigation exceeded its bound
    #[error("Navigation to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    /// The session was used after release
    #[error("Session already released")]
    Released,
}

/// Readiness policy for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitUntil {
    /// Stop once the base document is parsed
    DomContentLoaded,
    /// Wait for the full load event
    #[default]
    Load,
    /// Wait until the network has (almost) settled
    NetworkIdle,
}

impl WaitUntil {
    /// Puppeteer-style name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DomContentLoaded => "domcontentloaded",
            Self::Load => "load",
            Self::NetworkIdle => "networkidle2",
        }
    }
}

/// Options for a single navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    pub wait_until: WaitUntil,
    /// `None` leaves the bound to the backend's own default
    pub timeout: Option<Duration>,
    /// Selector that must be present before the page is returned
    pub wait_for_selector: Option<String>,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_until(mut self, wait_until: WaitUntil) -> Self {
        self.wait_until = wait_until;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn wait_for(mut self, selector: impl Into<String>) -> Self {
        self.wait_for_selector = Some(selector.into());
        self
    }
}

/// One isolated browser session
#[async_trait]
pub trait RenderSession: Send {
    /// Navigate and return the rendered HTML
    async fn navigate(&mut self, url: &str, options: &NavigateOptions)
        -> Result<String, RenderError>;

    /// Release the session. Called exactly once by [`SessionGuard`].
    async fn close(&mut self);
}

/// Source of browser sessions
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn open(&self) -> Result<Box<dyn RenderSession>, RenderError>;
}

/// Scoped ownership of a [`RenderSession`]
///
/// Call [`SessionGuard::release`] on every normal and faulted path. If the
/// guard is dropped without it (the owning future was cancelled), the
/// close is spawned onto the current runtime instead.
pub struct SessionGuard {
    session: Option<Box<dyn RenderSession>>,
}

impl SessionGuard {
    /// Open a session from `renderer`
    pub async fn acquire(renderer: &dyn Renderer) -> Result<Self, RenderError> {
        let session = renderer.open().await?;
        Ok(Self {
            session: Some(session),
        })
    }

    pub async fn navigate(
        &mut self,
        url: &str,
        options: &NavigateOptions,
    ) -> Result<String, RenderError> {
        match self.session.as_mut() {
            Some(session) => session.navigate(url, options).await,
            None => Err(RenderError::Released),
        }
    }

    /// Close the session now
    pub async fn release(mut self) {
        if let Some(mut session) = self.session.take() {
            session.close().await;
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if let Some(mut session) = self.session.take() {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    debug!("Render session dropped before release, closing in background");
                    handle.spawn(async move {
                        session.close().await;
                    });
                }
                Err(_) => warn!("Render session dropped outside a runtime, close skipped"),
            }
        }
    }
}

/// Browserless `/content` backend
pub struct BrowserlessRenderer {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BrowserlessRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    fn endpoint(&self) -> String {
        let mut endpoint = format!("{}/content", self.base_url);
        if let Some(ref token) = self.token {
            endpoint.push_str(&format!("?token={}", urlencoding::encode(token)));
        }
        endpoint
    }
}

#[async_trait]
impl Renderer for BrowserlessRenderer {
    async fn open(&self) -> Result<Box<dyn RenderSession>, RenderError> {
        if self.base_url.is_empty() {
            return Err(RenderError::SessionUnavailable(
                "no Browserless URL configured".to_string(),
            ));
        }
        Ok(Box::new(BrowserlessSession {
            client: self.client.clone(),
            endpoint: self.endpoint(),
            open: true,
        }))
    }
}

struct BrowserlessSession {
    client: Client,
    endpoint: String,
    open: bool,
}

#[async_trait]
impl RenderSession for BrowserlessSession {
    async fn navigate(
        &mut self,
        url: &str,
        options: &NavigateOptions,
    ) -> Result<String, RenderError> {
        if !self.open {
            return Err(RenderError::Released);
        }

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&content_request_body(url, options));

        // Leave the backend room to report its own navigation timeout first
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout + Duration::from_secs(5));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RenderError::Timeout {
                    url: url.to_string(),
                    timeout_ms: options.timeout.map(|t| t.as_millis() as u64).unwrap_or(0),
                }
            } else {
                RenderError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RenderError::Navigation {
                url: url.to_string(),
                message: format!("HTTP {}: {}", status.as_u16(), message),
            });
        }

        response.text().await.map_err(|e| RenderError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn close(&mut self) {
        self.open = false;
        debug!("Browserless session closed");
    }
}

/// Build the Browserless `/content` request body
fn content_request_body(url: &str, options: &NavigateOptions) -> Value {
    let mut goto = json!({ "waitUntil": options.wait_until.as_str() });
    if let Some(timeout) = options.timeout {
        goto["timeout"] = json!(timeout.as_millis() as u64);
    }

    let mut body = json!({ "url": url, "gotoOptions": goto });
    if let Some(ref selector) = options.wait_for_selector {
        let wait_ms = options
            .timeout
            .map(|t| t.as_millis() as u64)
            .unwrap_or(DEFAULT_SELECTOR_TIMEOUT_MS);
        body["waitForSelector"] = json!({ "selector": selector, "timeout": wait_ms });
    }
    body
}
