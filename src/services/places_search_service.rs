//! Text search against the Google Places API (v1).
//!
//! Requires `GOOGLE_PLACES_API_KEY`. `GOOGLE_PLACES_BASE_URL` can point the
//! client at another host, which the integration tests use.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use crate::config::PlacesConfig;
use crate::errors::PlanError;
use crate::models::place::{PlaceRecord, SearchTextRequest, SearchTextResponse};

const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.googleMapsUri,places.types,places.id";

#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Runs a free-text place search. An empty result is not an error here.
    async fn search_text(&self, query: &str) -> Result<Vec<PlaceRecord>, PlanError>;
}

/// Search text sent to the provider: all keywords followed by the location.
pub fn build_text_query(keywords: &[String], location: &str) -> String {
    format!("{} in {}", keywords.join(" "), location)
}

#[derive(Clone)]
pub struct GooglePlacesSearch {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl GooglePlacesSearch {
    pub fn new(config: &PlacesConfig) -> Result<Self, PlanError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl PlaceSearch for GooglePlacesSearch {
    async fn search_text(&self, query: &str) -> Result<Vec<PlaceRecord>, PlanError> {
        let url = format!("{}/v1/places:searchText", self.base_url);
        log::info!("Searching places for '{}'", query);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&SearchTextRequest { text_query: query })
            .send()
            .await?;

        let status = response.status();
        // Error responses may not carry a JSON body at all.
        let body: SearchTextResponse = response.json().await.unwrap_or_default();

        if !status.is_success() {
            log::warn!("Places search failed with status {}", status);
            return Err(match status {
                StatusCode::BAD_REQUEST => PlanError::SearchRejected,
                StatusCode::TOO_MANY_REQUESTS => PlanError::RateLimited,
                other => PlanError::UpstreamStatus(other.as_u16()),
            });
        }

        if let Some(error) = body.error {
            log::warn!(
                "Places provider returned an error: {:?} {:?}",
                error.status,
                error.message
            );
            return Err(PlanError::Provider(
                error
                    .message
                    .unwrap_or_else(|| "Unknown API error".to_string()),
            ));
        }

        let places = body.places.unwrap_or_default();
        log::info!("Places search returned {} results", places.len());
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_text_query() {
        let keywords = vec!["park".to_string(), "natur".to_string()];
        assert_eq!(build_text_query(&keywords, "Uppsala"), "park natur in Uppsala");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SearchTextRequest {
            text_query: "bad in Örebro",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "textQuery": "bad in Örebro" }));
    }
}
