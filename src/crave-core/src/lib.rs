// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

pub mod analytics;
pub mod api;
pub mod creator;
pub mod recommendation;
pub mod search;
pub mod slug;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use api::ApiResponse;
pub use creator::{AuthResponse, Creator, LoginRequest, RegisterRequest};
pub use recommendation::{
    CuisineType, DishCategory, MealType, NewRecommendation, PriceRange, Recommendation,
};
pub use search::filter_recommendations;
pub use slug::{is_valid_slug, normalize_slug};
