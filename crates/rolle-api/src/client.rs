//! Async client for the rested REST endpoints
//!
//! All endpoints are read-only GETs returning JSON arrays. Failures are not
//! retried; callers log them and leave the affected view as-is.

use rolle_core::prelude::*;
use url::Url;

use crate::types::{Character, NameId, Place};

/// Client handle over a shared connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Create a client for a server base URL such as `http://localhost:8080/`.
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Parse and validate a base URL from a settings/CLI string.
    pub fn from_base_url(base: &str) -> Result<Self> {
        let url = Url::parse(base)
            .map_err(|e| Error::config(format!("invalid server url {:?}: {}", base, e)))?;
        Ok(Self::new(url))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET /characters/id,name` - all characters.
    pub async fn characters(&self) -> Result<Vec<NameId>> {
        debug!("fetch characters");
        self.get_json(self.endpoint("characters/id,name", None)?)
            .await
    }

    /// `GET /characters/id,name?place=<id>|null` - characters at a place.
    ///
    /// Place id 0 is the "no place" sentinel and queries for characters
    /// with a null place.
    pub async fn characters_at(&self, place_id: i64) -> Result<Vec<NameId>> {
        debug!(place_id, "fetch characters at place");
        let query = if place_id > 0 {
            format!("place={}", place_id)
        } else {
            "place=null".to_string()
        };
        self.get_json(self.endpoint("characters/id,name", Some(&query))?)
            .await
    }

    /// `GET /characters/<id>` - one full character record.
    pub async fn character(&self, id: i64) -> Result<Character> {
        debug!(id, "fetch character");
        let records: Vec<Character> = self
            .get_json(self.endpoint(&format!("characters/{}", id), None)?)
            .await?;
        expect_one(records, "character", id)
    }

    /// `GET /places/id,name` - all places.
    pub async fn places(&self) -> Result<Vec<NameId>> {
        debug!("fetch places");
        self.get_json(self.endpoint("places/id,name", None)?).await
    }

    /// `GET /places/<id>` - one full place record.
    pub async fn place(&self, id: i64) -> Result<Place> {
        debug!(id, "fetch place");
        let records: Vec<Place> = self
            .get_json(self.endpoint(&format!("places/{}", id), None)?)
            .await?;
        expect_one(records, "place", id)
    }

    fn endpoint(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut url = self
            .base
            .join(path)
            .map_err(|e| Error::config(format!("invalid endpoint {:?}: {}", path, e)))?;
        url.set_query(query);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(format!("GET {}: {}", url, e)))?
            .error_for_status()
            .map_err(|e| Error::http(format!("GET {}: {}", url, e)))?;
        response
            .json()
            .await
            .map_err(|e| Error::http(format!("GET {}: invalid body: {}", url, e)))
    }
}

/// Classify an expected-one-record response: zero and many records are
/// distinct errors, both logged by the caller and never surfaced in the UI.
fn expect_one<T>(mut records: Vec<T>, entity: &'static str, id: i64) -> Result<T> {
    match records.len() {
        1 => Ok(records.remove(0)),
        0 => Err(Error::missing_record(entity, id)),
        n => Err(Error::ambiguous_record(entity, id, n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::from_base_url("http://localhost:8080/").unwrap()
    }

    #[test]
    fn test_from_base_url_rejects_garbage() {
        assert!(ApiClient::from_base_url("not a url").is_err());
    }

    #[test]
    fn test_listing_endpoint() {
        let url = client().endpoint("characters/id,name", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/characters/id,name");
    }

    #[test]
    fn test_place_filter_query() {
        let url = client()
            .endpoint("characters/id,name", Some("place=5"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/characters/id,name?place=5"
        );
    }

    #[test]
    fn test_by_id_endpoint() {
        let url = client().endpoint("places/12", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/places/12");
    }

    #[test]
    fn test_expect_one_ok() {
        let record = expect_one(vec![7], "character", 3).unwrap();
        assert_eq!(record, 7);
    }

    #[test]
    fn test_expect_one_missing() {
        let err = expect_one(Vec::<i64>::new(), "character", 3).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingRecord {
                entity: "character",
                id: 3
            }
        ));
    }

    #[test]
    fn test_expect_one_ambiguous() {
        let err = expect_one(vec![1, 2], "place", 5).unwrap_err();
        assert!(matches!(err, Error::AmbiguousRecord { count: 2, .. }));
    }
}
