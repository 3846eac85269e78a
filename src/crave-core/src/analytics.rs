// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Analytics event wire types.
//!
//! Events are ephemeral: built, sent once, dropped. Nothing here is ever
//! persisted on the client side.

use serde::Serialize;
use uuid::Uuid;

/// Event vocabulary understood by `POST /public/events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    PageView,
    Search,
    RecommendationView,
    InstagramClick,
    MapsClick,
    Save,
}

/// One fire-and-forget event. Optional references are absent when unset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEventRequest {
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl TrackEventRequest {
    pub fn page_view(creator_slug: &str, session_id: &str) -> Self {
        Self {
            event_type: EventType::PageView,
            recommendation_id: None,
            creator_slug: Some(creator_slug.to_string()),
            search_query: None,
            session_id: Some(session_id.to_string()),
        }
    }

    pub fn search(creator_slug: &str, query: &str, session_id: &str) -> Self {
        Self {
            event_type: EventType::Search,
            recommendation_id: None,
            creator_slug: Some(creator_slug.to_string()),
            search_query: Some(query.to_string()),
            session_id: Some(session_id.to_string()),
        }
    }

    pub fn instagram_click(creator_slug: &str, recommendation_id: i64, session_id: &str) -> Self {
        Self {
            event_type: EventType::InstagramClick,
            recommendation_id: Some(recommendation_id),
            creator_slug: Some(creator_slug.to_string()),
            search_query: None,
            session_id: Some(session_id.to_string()),
        }
    }

    pub fn maps_click(creator_slug: &str, recommendation_id: i64, session_id: &str) -> Self {
        Self {
            event_type: EventType::MapsClick,
            recommendation_id: Some(recommendation_id),
            creator_slug: Some(creator_slug.to_string()),
            search_query: None,
            session_id: Some(session_id.to_string()),
        }
    }
}

/// Random token grouping the events of one page view. Lives from view start
/// to view end, in memory only.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_payload() {
        let event = TrackEventRequest::page_view("delhi-food-explorer", "session-1");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "eventType": "PAGE_VIEW",
                "creatorSlug": "delhi-food-explorer",
                "sessionId": "session-1",
            })
        );
    }

    #[test]
    fn test_click_payload_carries_recommendation_id() {
        let event = TrackEventRequest::maps_click("delhi-food-explorer", 42, "session-1");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "MAPS_CLICK");
        assert_eq!(json["recommendationId"], 42);
        assert!(json.get("searchQuery").is_none());
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
