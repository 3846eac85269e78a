// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Response envelope shared by every endpoint of the REST collaborator.

use serde::Deserialize;

/// `{ success, message?, data?, timestamp }`. Failed requests come back with
/// `success: false` and a human-readable `message`; `data` is absent then.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creator::Creator;

    #[test]
    fn test_decodes_success_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "username": "delhifoodie",
                "displayName": "Delhi Food Explorer",
                "slug": "delhi-food-explorer",
                "totalRecommendations": 12,
                "totalPageViews": 3400
            },
            "timestamp": "2026-08-06T10:15:00Z"
        }"#;
        let envelope: ApiResponse<Creator> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.message.is_none());
        let creator = envelope.data.unwrap();
        assert_eq!(creator.total_recommendations, 12);
    }

    #[test]
    fn test_decodes_failure_envelope() {
        let json = r#"{
            "success": false,
            "message": "Slug already taken",
            "data": null,
            "timestamp": "2026-08-06T10:15:00Z"
        }"#;
        let envelope: ApiResponse<Creator> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Slug already taken"));
        assert!(envelope.data.is_none());
    }
}
