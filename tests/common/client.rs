//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest and
//! provides methods for all setlist-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET / - server stats
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }

    /// GET /songs - the full repertoire
    pub async fn list_songs(&self) -> Response {
        self.client
            .get(format!("{}/songs", self.base_url))
            .send()
            .await
            .expect("list_songs request failed")
    }

    /// POST /songs - create a song
    pub async fn create_song(&self, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("{}/songs", self.base_url))
            .json(body)
            .send()
            .await
            .expect("create_song request failed")
    }

    /// PUT /songs/{id} - update a song
    pub async fn update_song(&self, id: &str, body: &serde_json::Value) -> Response {
        self.client
            .put(format!("{}/songs/{}", self.base_url, id))
            .json(body)
            .send()
            .await
            .expect("update_song request failed")
    }

    /// DELETE /songs/{id} - delete a song
    pub async fn delete_song(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/songs/{}", self.base_url, id))
            .send()
            .await
            .expect("delete_song request failed")
    }
}
