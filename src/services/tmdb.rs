//! TMDB API client.

use crate::models::config::TmdbConfig;
use crate::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Fixed timeout applied to every request. Expiry surfaces as a
/// transport error like any other network failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Multi-search response envelope.
///
/// Results are kept as raw JSON values: each one is decoded individually
/// during candidate selection so a malformed entry only costs itself.
#[derive(Debug, Deserialize)]
pub struct MultiSearchResponse {
    pub total_results: u32,
    pub results: Vec<serde_json::Value>,
}

/// Movie credits response.
#[derive(Debug, Deserialize)]
pub struct CreditsResponse {
    pub crew: Vec<CrewMember>,
}

/// Crew member.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub job: String,
    pub name: String,
}

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client. Fails when no read token is configured.
    pub fn new(config: TmdbConfig) -> Result<Self> {
        config.read_token()?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Build a request with Bearer authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Accept", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.config.read_token.as_deref().unwrap_or_default()),
            )
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// Network failure, a non-2xx status and an undecodable body all
    /// count as transport errors; the pipeline never retries them.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .build_request(url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("HTTP {} on {}", status, url)));
        }

        resp.json()
            .await
            .map_err(|e| Error::Transport(e.to_string()))
    }

    /// Search all media kinds at once.
    ///
    /// `None` issues an unparameterized listing call on the endpoint.
    pub async fn search_multi(&self, query: Option<&str>) -> Result<MultiSearchResponse> {
        let endpoint = "search/multi";
        let url = match query {
            Some(q) => format!(
                "{}/{}?query={}",
                self.config.api_url,
                endpoint,
                urlencoding::encode(q)
            ),
            None => format!("{}/{}", self.config.api_url, endpoint),
        };
        tracing::info!(endpoint, query, "searching TMDB");
        self.get_json(&url).await
    }

    /// Get movie credits (crew list with jobs).
    pub async fn movie_credits(&self, movie_id: u64) -> Result<CreditsResponse> {
        let url = format!("{}/movie/{}/credits", self.config.api_url, movie_id);
        tracing::info!(movie_id, "fetching movie credits");
        self.get_json(&url).await
    }

    /// Download poster bytes.
    ///
    /// The image host takes the v3 api key as a query parameter. Whether a
    /// failure here matters is the caller's call; during a scan it is a
    /// warning only.
    pub async fn download_poster(&self, poster_path: &str) -> Result<Vec<u8>> {
        let url = match self.config.api_key.as_deref() {
            Some(key) => format!("{}{}?api_key={}", self.config.image_url, poster_path, key),
            None => format!("{}{}", self.config.image_url, poster_path),
        };
        tracing::info!(poster_path, "downloading poster");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("HTTP {} on {}", status, url)));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
