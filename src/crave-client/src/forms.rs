// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Form state and submit-time validation for the registration and authoring
//! flows.
//!
//! Validation runs before anything touches the network; the first failing
//! rule wins and produces the single message shown to the user. The forms
//! are pure state machines, so "no request is sent on a validation failure"
//! holds by construction.

use std::fmt;

use crave_core::slug::{is_valid_slug, normalize_slug, MIN_SLUG_LEN};
use crave_core::{
    CuisineType, DishCategory, MealType, NewRecommendation, PriceRange, RegisterRequest,
};

/// Single user-visible validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Registration form state.
///
/// Display-name and slug edits go through the setters because they carry the
/// auto-derivation policy: the slug follows the display name until the user
/// diverges it by hand.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    display_name: String,
    slug: String,
    pub instagram_handle: String,
    pub bio: String,
}

impl RegistrationForm {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Edit the display name.
    ///
    /// While the slug is empty or still equals the derivation of the
    /// previous display-name value, it is re-derived from the new value;
    /// once diverged it is left alone. Editing the display name to something
    /// whose derivation happens to equal the diverged slug re-enables
    /// derivation on the next edit.
    pub fn set_display_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.slug.is_empty() || self.slug == normalize_slug(&self.display_name) {
            self.slug = normalize_slug(&value);
        }
        self.display_name = value;
    }

    /// Edit the slug directly. The returned flag reports whether the new
    /// value has a valid format; it is advisory only and re-checked at
    /// submit time.
    pub fn set_slug(&mut self, value: impl Into<String>) -> bool {
        self.slug = value.into();
        is_valid_slug(&self.slug)
    }

    /// Submit-time validation. Check order matches the registration form:
    /// password confirmation, password length, slug length.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError("Passwords do not match".to_string()));
        }
        if self.password.chars().count() < 8 {
            return Err(ValidationError(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        if self.slug.chars().count() < MIN_SLUG_LEN {
            return Err(ValidationError(
                "Slug must be at least 3 characters".to_string(),
            ));
        }
        Ok(RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            display_name: self.display_name.clone(),
            slug: self.slug.clone(),
            instagram_handle: opt_text(&self.instagram_handle),
            bio: opt_text(&self.bio),
        })
    }
}

/// Authoring form state for a new recommendation. The categorical fields are
/// already typed; `None` means unset and stays unset on the wire.
#[derive(Debug, Clone, Default)]
pub struct RecommendationForm {
    pub dish_name: String,
    pub restaurant_name: String,
    pub area: String,
    pub full_address: String,
    pub google_maps_url: String,
    pub creator_quote: String,
    pub description: String,
    pub dish_category: Option<DishCategory>,
    pub cuisine_type: Option<CuisineType>,
    pub meal_type: Option<MealType>,
    pub price_range: Option<PriceRange>,
    /// Comma-separated; split at submit time.
    pub tags: String,
}

impl RecommendationForm {
    /// Submit-time validation: dish and restaurant name are mandatory,
    /// every other field is dropped from the payload when blank.
    pub fn validate(&self) -> Result<NewRecommendation, ValidationError> {
        if self.dish_name.trim().is_empty() {
            return Err(ValidationError("Dish name is required".to_string()));
        }
        if self.restaurant_name.trim().is_empty() {
            return Err(ValidationError("Restaurant name is required".to_string()));
        }
        Ok(NewRecommendation {
            dish_name: self.dish_name.trim().to_string(),
            restaurant_name: self.restaurant_name.trim().to_string(),
            area: opt_text(&self.area),
            full_address: opt_text(&self.full_address),
            google_maps_url: opt_text(&self.google_maps_url),
            creator_quote: opt_text(&self.creator_quote),
            description: opt_text(&self.description),
            dish_category: self.dish_category,
            cuisine_type: self.cuisine_type,
            meal_type: self.meal_type,
            price_range: self.price_range,
            tags: split_tags(&self.tags),
        })
    }
}

/// Blank → omitted, never an empty string.
fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split comma-separated tags, dropping blank entries. `None` when nothing
/// survives, so the field is absent from the payload rather than `[]`.
fn split_tags(input: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegistrationForm {
        let mut form = RegistrationForm {
            email: "creator@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            ..Default::default()
        };
        form.set_display_name("Delhi Food Explorer");
        form
    }

    #[test]
    fn test_slug_follows_display_name() {
        let mut form = RegistrationForm::default();
        form.set_display_name("Delhi Food Explorer!!");
        assert_eq!(form.slug(), "delhi-food-explorer");

        form.set_display_name("Mumbai Street Eats");
        assert_eq!(form.slug(), "mumbai-street-eats");
    }

    #[test]
    fn test_diverged_slug_is_left_alone() {
        let mut form = RegistrationForm::default();
        form.set_display_name("Delhi Food Explorer");
        assert!(form.set_slug("delhifoodie"));

        form.set_display_name("Completely Different");
        assert_eq!(form.slug(), "delhifoodie");
    }

    #[test]
    fn test_manual_slug_matching_derivation_reenables_following() {
        let mut form = RegistrationForm::default();
        form.set_display_name("Cool Cat");
        // Typing the derived value by hand is indistinguishable from never
        // having diverged, so the slug starts following again.
        assert!(form.set_slug("cool-cat"));
        form.set_display_name("Warm Dog");
        assert_eq!(form.slug(), "warm-dog");
    }

    #[test]
    fn test_set_slug_reports_format_validity() {
        let mut form = RegistrationForm::default();
        assert!(!form.set_slug("ab"));
        assert!(!form.set_slug("Has Caps"));
        assert!(form.set_slug("all-good-9"));
    }

    #[test]
    fn test_password_mismatch_is_first_failure() {
        let mut form = valid_registration();
        form.confirm_password = "different".to_string();
        form.password = "short".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.0, "Passwords do not match");
    }

    #[test]
    fn test_short_password_fails_before_any_request_is_built() {
        let mut form = valid_registration();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.0, "Password must be at least 8 characters");
    }

    #[test]
    fn test_short_slug_fails() {
        let mut form = valid_registration();
        form.set_slug("ab");
        let err = form.validate().unwrap_err();
        assert_eq!(err.0, "Slug must be at least 3 characters");
    }

    #[test]
    fn test_valid_registration_builds_payload() {
        let mut form = valid_registration();
        form.instagram_handle = "  ".to_string();
        form.bio = "Exploring Delhi's best food spots".to_string();

        let payload = form.validate().unwrap();
        assert_eq!(payload.slug, "delhi-food-explorer");
        assert!(payload.instagram_handle.is_none());
        assert_eq!(payload.bio.as_deref(), Some("Exploring Delhi's best food spots"));
    }

    #[test]
    fn test_recommendation_requires_dish_then_restaurant() {
        let form = RecommendationForm::default();
        assert_eq!(form.validate().unwrap_err().0, "Dish name is required");

        let form = RecommendationForm {
            dish_name: "Butter Chicken".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err().0, "Restaurant name is required");
    }

    #[test]
    fn test_blank_optionals_are_omitted() {
        let form = RecommendationForm {
            dish_name: "Butter Chicken".to_string(),
            restaurant_name: "Moti Mahal".to_string(),
            area: "   ".to_string(),
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        assert!(payload.area.is_none());
        assert!(payload.creator_quote.is_none());
        assert!(payload.tags.is_none());
    }

    #[test]
    fn test_tags_are_split_trimmed_and_dropped_when_empty() {
        assert_eq!(
            split_tags(" vegetarian, spicy , ,must-try,"),
            Some(vec![
                "vegetarian".to_string(),
                "spicy".to_string(),
                "must-try".to_string()
            ])
        );
        assert_eq!(split_tags(""), None);
        assert_eq!(split_tags(" , ,"), None);
    }

    #[test]
    fn test_tagless_payload_has_no_tags_key() {
        let form = RecommendationForm {
            dish_name: "Momos".to_string(),
            restaurant_name: "Dolma Aunty".to_string(),
            tags: " , ".to_string(),
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("tags").is_none());
    }
}
