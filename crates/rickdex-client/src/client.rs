use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use rickdex_types::{
    Character, CharacterRepository, Cursor, Location, NetworkError, Page,
};

use crate::types::{CharacterDto, ClientConfig, LocationDto, OneOrMany, Paged};

/// Client for the public Rick and Morty REST API.
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NetworkError::Connection(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_raw(&self, url: &str) -> Result<reqwest::Response, NetworkError> {
        let resp = self.client.get(url).send().await.map_err(map_transport)?;

        let status = resp.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            return Err(NetworkError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(NetworkError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NetworkError> {
        self.get_raw(url)
            .await?
            .json()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CharacterRepository for ApiClient {
    /// Walk the character list endpoint until the API reports no next page.
    async fn fetch_all(&self) -> Result<Vec<Character>, NetworkError> {
        let mut url = format!("{}/character", self.config.base_url);
        let mut characters = Vec::new();
        let mut pages = 0usize;

        loop {
            let page: Paged<CharacterDto> = self.get_json(&url).await?;
            pages += 1;

            for dto in page.results.unwrap_or_default() {
                characters.push(Character::try_from(dto)?);
            }

            match page.info.and_then(|i| i.next) {
                Some(next) => url = next,
                None => break,
            }
        }

        tracing::debug!("Fetched {} characters across {} pages", characters.len(), pages);
        Ok(characters)
    }

    async fn fetch_locations_page(
        &self,
        cursor: Option<Cursor>,
    ) -> Result<Page<Location>, NetworkError> {
        let url = match &cursor {
            Some(c) => c.as_str().to_string(),
            None => format!("{}/location", self.config.base_url),
        };

        let page: Paged<LocationDto> = self.get_json(&url).await?;

        let items = page
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched location page with {} entries", items.len());

        Ok(Page {
            items,
            next: page.info.and_then(|i| i.next).map(Cursor::new),
        })
    }

    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<Character>, NetworkError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/character/{}", self.config.base_url, ids.join(","));

        // The API answers 404 when none of the ids exist; the contract treats
        // unknown ids as absent, not as a failure.
        let body: OneOrMany<CharacterDto> = match self.get_json(&url).await {
            Ok(body) => body,
            Err(NetworkError::Server { status: 404, .. }) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Vec::from(body)
            .into_iter()
            .map(Character::try_from)
            .collect()
    }
}

fn map_transport(e: reqwest::Error) -> NetworkError {
    if e.is_timeout() {
        NetworkError::Timeout
    } else {
        NetworkError::Connection(e.to_string())
    }
}
