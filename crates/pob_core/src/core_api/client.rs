use reqwest::blocking::Client;

use super::error::{CoreError, CoreErrorCode};
use super::types::ProfileId;
use crate::profile::api_error;

pub const DEFAULT_API_BASE: &str = "https://www.pathofexile.com/character-window";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:97.0) Gecko/20100101 Firefox/97.0";

const ITEMS_ENDPOINT: &str = "get-items";
const PASSIVES_ENDPOINT: &str = "get-passive-skills";

/// Blocking client for the public `character-window` endpoints.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: Client,
    api_base: String,
}

impl ProfileClient {
    pub fn with_options(api_base: impl Into<String>, user_agent: &str) -> Result<Self, CoreError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                CoreError::new(
                    CoreErrorCode::Fetch,
                    format!("failed to build HTTP client: {e}"),
                )
            })?;

        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }

    /// Returns the raw `get-items` body for `profile`.
    pub fn fetch_items(&self, profile: &ProfileId) -> Result<String, CoreError> {
        self.fetch(ITEMS_ENDPOINT, profile)
    }

    pub fn fetch_passives(&self, profile: &ProfileId) -> Result<String, CoreError> {
        self.fetch(PASSIVES_ENDPOINT, profile)
    }

    fn fetch(&self, endpoint: &str, profile: &ProfileId) -> Result<String, CoreError> {
        let url = format!("{}/{endpoint}", self.api_base.trim_end_matches('/'));
        tracing::debug!(%url, %profile, "requesting profile data");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("character", profile.character.as_str()),
                ("accountName", profile.account.as_str()),
            ])
            .send()
            .map_err(|e| fetch_error(endpoint, profile, e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| fetch_error(endpoint, profile, e))?;

        if let Some(error) = api_error(&body) {
            return Err(fetch_error(
                endpoint,
                profile,
                format!(
                    "API error {}: {} (HTTP {status})",
                    error.code, error.message
                ),
            ));
        }
        if !status.is_success() {
            return Err(fetch_error(endpoint, profile, format!("HTTP {status}")));
        }

        tracing::debug!(endpoint, bytes = body.len(), "received profile data");
        Ok(body)
    }
}

fn fetch_error(endpoint: &str, profile: &ProfileId, cause: impl std::fmt::Display) -> CoreError {
    CoreError::new(
        CoreErrorCode::Fetch,
        format!("{endpoint} for {profile} failed: {cause}"),
    )
}
