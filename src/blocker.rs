use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::credential::SessionCredentials;
use crate::types::BlockResult;

const BASE_URL: &str = "https://steamcommunity.com";
const BLOCK_ENDPOINT: &str = "/actions/BlockUserAjax";

/// The endpoint does not always signal failure via status code, but 200 is
/// the only value ever observed on a successful block.
const EXPECTED_STATUS: u16 = 200;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Fixed Chrome 137 desktop profile presented on every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7";
const SEC_CH_UA: &str = "\"Google Chrome\";v=\"137\", \"Chromium\";v=\"137\", \"Not/A)Brand\";v=\"24\"";

// Run-invariant cookies; sessionid and steamLoginSecure are filled in from
// the credentials at construction.
const COOKIE_TIMEZONE_OFFSET: &str = "32400,0";
const COOKIE_LANGUAGE: &str = "koreana";
const COOKIE_BROWSER_ID: &str = "181938084950144526";
const COOKIE_COUNTRY: &str = "KR%7Cdfc519408d201aa2c016d8767f6cc734";

/// Configuration for [`Blocker`].
#[derive(Debug, Clone)]
pub struct BlockerConfig {
    /// Endpoint origin. Defaults to the Steam Community origin; tests point
    /// this at a local server.
    pub base_url: String,
    /// Per-request timeout. A request past this is treated as a transport
    /// failure.
    pub timeout: Duration,
}

impl Default for BlockerConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Issues block requests against the Steam Community AJAX endpoint.
///
/// Holds the fixed request shape (headers, cookies, endpoint) and the
/// session credentials baked in at construction. Each call is stateless
/// beyond that.
pub struct Blocker {
    http_client: reqwest::Client,
    session_id: String,
    base_url: String,
}

impl Blocker {
    pub fn new(credentials: SessionCredentials) -> Result<Self> {
        Self::with_config(credentials, BlockerConfig::default())
    }

    pub fn with_config(credentials: SessionCredentials, config: BlockerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(
            header::ORIGIN,
            HeaderValue::from_str(&config.base_url)
                .context("base URL is not a valid header value")?,
        );
        headers.insert(
            "x-requested-with",
            HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert("sec-ch-ua", HeaderValue::from_static(SEC_CH_UA));
        headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
        headers.insert("sec-ch-ua-platform", HeaderValue::from_static("\"Windows\""));
        headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
        headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
        headers.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));

        let cookies = format!(
            "timezoneOffset={COOKIE_TIMEZONE_OFFSET}; Steam_Language={COOKIE_LANGUAGE}; \
             browserid={COOKIE_BROWSER_ID}; sessionid={}; steamCountry={COOKIE_COUNTRY}; \
             steamLoginSecure={}",
            credentials.session_id, credentials.steam_login_secure
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&cookies)
                .context("session cookies contain characters invalid in a header")?,
        );

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http_client,
            session_id: credentials.session_id,
            base_url: config.base_url,
        })
    }

    /// Issue one block request for `steam_id`.
    ///
    /// Never errors to the caller: every outcome, including transport
    /// failures, is folded into the returned [`BlockResult`]. Success means
    /// status 200 exactly; any other status keeps the raw body for
    /// inspection.
    pub async fn block_one(&self, steam_id: &str) -> BlockResult {
        let url = format!("{}{}", self.base_url, BLOCK_ENDPOINT);
        let referer = format!("{}/profiles/{}/", self.base_url, steam_id);
        let form = [
            ("sessionID", self.session_id.as_str()),
            ("steamid", steam_id),
            ("block", "1"),
        ];

        let outcome = async {
            let response = self
                .http_client
                .post(&url)
                .header(header::REFERER, &referer)
                .form(&form)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        }
        .await;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        match outcome {
            Ok((status, body)) => {
                let success = status == EXPECTED_STATUS;
                if !success {
                    tracing::warn!(steam_id, status, "unexpected status from block endpoint");
                }
                BlockResult {
                    steam_id: steam_id.to_string(),
                    status_code: Some(status),
                    response_text: body,
                    success,
                    timestamp,
                }
            }
            Err(e) => {
                tracing::warn!(steam_id, error = %e, "block request failed in transport");
                BlockResult {
                    steam_id: steam_id.to_string(),
                    status_code: None,
                    response_text: e.to_string(),
                    success: false,
                    timestamp,
                }
            }
        }
    }

    /// Block every target in input order, sleeping `delay` between
    /// consecutive requests (`len - 1` sleeps for `len` targets).
    ///
    /// A failed request never aborts the batch; the output always has one
    /// result per target, in input order. Progress is printed per target.
    pub async fn block_many(&self, steam_ids: &[String], delay: Duration) -> Vec<BlockResult> {
        let total = steam_ids.len();
        let mut results = Vec::with_capacity(total);

        for (i, steam_id) in steam_ids.iter().enumerate() {
            println!("[{}/{}] Blocking Steam ID {}...", i + 1, total, steam_id);

            let result = self.block_one(steam_id).await;
            if result.success {
                println!("  ✓ blocked: {steam_id}");
            } else {
                println!("  ✗ failed: {} - {}", steam_id, result.response_text);
            }
            results.push(result);

            if i + 1 < total {
                tracing::debug!(delay_ms = delay.as_millis() as u64, "waiting before next request");
                tokio::time::sleep(delay).await;
            }
        }

        results
    }
}
