// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Creator profile and auth wire types.

use serde::{Deserialize, Serialize};

/// Public creator profile as served by `GET /public/creators/{slug}`.
/// Immutable on this side; refreshed only by re-fetching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(default)]
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub instagram_handle: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub total_recommendations: u64,
    #[serde(default)]
    pub total_page_views: u64,
}

/// Registration payload. Blank optional fields are omitted entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued by `/auth/register` and `/auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub creator: Creator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_omits_blank_optionals() {
        let payload = RegisterRequest {
            email: "creator@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            display_name: "Delhi Food Explorer".to_string(),
            slug: "delhi-food-explorer".to_string(),
            instagram_handle: None,
            bio: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("instagramHandle").is_none());
        assert!(json.get("bio").is_none());
        assert_eq!(json["displayName"], "Delhi Food Explorer");
    }

    #[test]
    fn test_auth_response_decodes() {
        let json = r#"{
            "token": "jwt-token",
            "expiresIn": 86400000,
            "creator": {
                "username": "delhifoodie",
                "displayName": "Delhi Food Explorer",
                "slug": "delhi-food-explorer",
                "totalRecommendations": 3,
                "totalPageViews": 120
            }
        }"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.token, "jwt-token");
        assert_eq!(auth.expires_in, Some(86_400_000));
        assert_eq!(auth.creator.slug, "delhi-food-explorer");
        assert!(auth.creator.bio.is_none());
    }
}
