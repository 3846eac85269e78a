// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! HTTP client for the REST collaborator.
//!
//! Three categories of calls go through here: read-only public fetches,
//! authenticated writes, and best-effort analytics deliveries. The bearer
//! token, when present, rides along on every request. No timeouts are set
//! beyond the transport defaults, and nothing here retries.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crave_core::analytics::TrackEventRequest;
use crave_core::{
    ApiResponse, AuthResponse, Creator, LoginRequest, NewRecommendation, Recommendation,
    RegisterRequest,
};

const GENERIC_REJECTION: &str = "Request failed. Please try again.";

/// Errors surfaced by API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The resource does not exist; rendered as a view, not an error banner.
    #[error("not found")]
    NotFound,

    /// The server rejected the request; carries its message verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Envelope(String),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a request and unwrap the response envelope.
    ///
    /// 404 maps to [`ApiError::NotFound`]; any other failed status or a
    /// `success: false` envelope maps to [`ApiError::Rejected`] carrying the
    /// server's message when it sent one.
    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let response = req.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let envelope: ApiResponse<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Rejected(GENERIC_REJECTION.to_string()));
            }
            Err(e) => return Err(ApiError::Transport(e)),
        };

        if !status.is_success() || !envelope.success {
            return Err(ApiError::Rejected(
                envelope.message.unwrap_or_else(|| GENERIC_REJECTION.to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Envelope("missing data field".to_string()))
    }

    pub async fn creator_by_slug(&self, slug: &str) -> Result<Creator, ApiError> {
        self.send(self.request(Method::GET, &format!("/public/creators/{slug}")))
            .await
    }

    pub async fn public_recommendations(
        &self,
        slug: &str,
        page: u32,
        size: u32,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let req = self
            .request(
                Method::GET,
                &format!("/public/creators/{slug}/recommendations"),
            )
            .query(&[("page", page), ("size", size)]);
        self.send(req).await
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send(self.request(Method::POST, "/auth/register").json(payload))
            .await
    }

    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send(self.request(Method::POST, "/auth/login").json(payload))
            .await
    }

    pub async fn create_recommendation(
        &self,
        payload: &NewRecommendation,
    ) -> Result<Recommendation, ApiError> {
        self.send(
            self.request(Method::POST, "/creator/recommendations")
                .json(payload),
        )
        .await
    }

    pub async fn my_recommendations(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let req = self
            .request(Method::GET, "/creator/recommendations")
            .query(&[("page", page), ("size", size)]);
        self.send(req).await
    }

    /// Deliver one analytics event. Callers go through
    /// [`crate::analytics::AnalyticsSink`], which swallows the error.
    pub async fn track_event(&self, event: &TrackEventRequest) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, "/public/events")
            .json(event)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected(format!(
                "event delivery returned {status}"
            )));
        }
        Ok(())
    }
}
