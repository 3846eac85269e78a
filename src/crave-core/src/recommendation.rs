// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Recommendation wire types and the closed categorical vocabularies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unrecognized value for one of the categorical fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    field: &'static str,
    value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.field, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Uppercase and join so `street-food`, `STREET_FOOD` and `Street_Food`
/// all hit the same match arm.
fn canon(value: &str) -> String {
    value.trim().to_ascii_uppercase().replace('-', "_")
}

/// Dish category vocabulary understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishCategory {
    Biryani,
    Momos,
    StreetFood,
    FineDining,
    Dessert,
    Breakfast,
    Kebabs,
    Chinese,
    SouthIndian,
    Other,
}

impl DishCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biryani => "BIRYANI",
            Self::Momos => "MOMOS",
            Self::StreetFood => "STREET_FOOD",
            Self::FineDining => "FINE_DINING",
            Self::Dessert => "DESSERT",
            Self::Breakfast => "BREAKFAST",
            Self::Kebabs => "KEBABS",
            Self::Chinese => "CHINESE",
            Self::SouthIndian => "SOUTH_INDIAN",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DishCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canon(s).as_str() {
            "BIRYANI" => Ok(Self::Biryani),
            "MOMOS" => Ok(Self::Momos),
            "STREET_FOOD" => Ok(Self::StreetFood),
            "FINE_DINING" => Ok(Self::FineDining),
            "DESSERT" => Ok(Self::Dessert),
            "BREAKFAST" => Ok(Self::Breakfast),
            "KEBABS" => Ok(Self::Kebabs),
            "CHINESE" => Ok(Self::Chinese),
            "SOUTH_INDIAN" => Ok(Self::SouthIndian),
            "OTHER" => Ok(Self::Other),
            _ => Err(UnknownVariant { field: "dish category", value: s.to_string() }),
        }
    }
}

/// Cuisine vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CuisineType {
    NorthIndian,
    SouthIndian,
    Chinese,
    Mughlai,
    StreetFood,
    Continental,
    FastFood,
    Other,
}

impl CuisineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NorthIndian => "NORTH_INDIAN",
            Self::SouthIndian => "SOUTH_INDIAN",
            Self::Chinese => "CHINESE",
            Self::Mughlai => "MUGHLAI",
            Self::StreetFood => "STREET_FOOD",
            Self::Continental => "CONTINENTAL",
            Self::FastFood => "FAST_FOOD",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CuisineType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canon(s).as_str() {
            "NORTH_INDIAN" => Ok(Self::NorthIndian),
            "SOUTH_INDIAN" => Ok(Self::SouthIndian),
            "CHINESE" => Ok(Self::Chinese),
            "MUGHLAI" => Ok(Self::Mughlai),
            "STREET_FOOD" => Ok(Self::StreetFood),
            "CONTINENTAL" => Ok(Self::Continental),
            "FAST_FOOD" => Ok(Self::FastFood),
            "OTHER" => Ok(Self::Other),
            _ => Err(UnknownVariant { field: "cuisine type", value: s.to_string() }),
        }
    }
}

/// Meal slot vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Beverage,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
            Self::Snack => "SNACK",
            Self::Beverage => "BEVERAGE",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canon(s).as_str() {
            "BREAKFAST" => Ok(Self::Breakfast),
            "LUNCH" => Ok(Self::Lunch),
            "DINNER" => Ok(Self::Dinner),
            "SNACK" => Ok(Self::Snack),
            "BEVERAGE" => Ok(Self::Beverage),
            _ => Err(UnknownVariant { field: "meal type", value: s.to_string() }),
        }
    }
}

/// Per-person price tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceRange {
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl PriceRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "BUDGET",
            Self::Mid => "MID",
            Self::Premium => "PREMIUM",
            Self::Luxury => "LUXURY",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canon(s).as_str() {
            "BUDGET" => Ok(Self::Budget),
            "MID" => Ok(Self::Mid),
            "PREMIUM" => Ok(Self::Premium),
            "LUXURY" => Ok(Self::Luxury),
            _ => Err(UnknownVariant { field: "price range", value: s.to_string() }),
        }
    }
}

/// A dish endorsement as served by the REST API. Read-only on this side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub dish_name: String,
    pub restaurant_name: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub full_address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub google_maps_url: Option<String>,
    #[serde(default)]
    pub creator_quote: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dish_category: Option<DishCategory>,
    #[serde(default)]
    pub cuisine_type: Option<CuisineType>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub instagram_clicks: u64,
    #[serde(default)]
    pub maps_clicks: u64,
    #[serde(default)]
    pub save_count: u64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Authoring payload for `POST /creator/recommendations`.
///
/// `None` fields are absent from the JSON body entirely. The backend treats
/// absence as "unset", which is not the same thing as an empty string or an
/// empty tag list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub dish_name: String,
    pub restaurant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_category: Option<DishCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<CuisineType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&DishCategory::StreetFood).unwrap(), "\"STREET_FOOD\"");
        assert_eq!(serde_json::to_string(&CuisineType::NorthIndian).unwrap(), "\"NORTH_INDIAN\"");
        assert_eq!(serde_json::to_string(&MealType::Beverage).unwrap(), "\"BEVERAGE\"");
        assert_eq!(serde_json::to_string(&PriceRange::Budget).unwrap(), "\"BUDGET\"");
    }

    #[test]
    fn test_enum_from_str_is_forgiving() {
        assert_eq!("street-food".parse::<DishCategory>().unwrap(), DishCategory::StreetFood);
        assert_eq!("STREET_FOOD".parse::<DishCategory>().unwrap(), DishCategory::StreetFood);
        assert_eq!("Street_Food".parse::<CuisineType>().unwrap(), CuisineType::StreetFood);
        assert_eq!("beverage".parse::<MealType>().unwrap(), MealType::Beverage);
        assert_eq!(" luxury ".parse::<PriceRange>().unwrap(), PriceRange::Luxury);
        assert!("espresso".parse::<MealType>().is_err());
    }

    #[test]
    fn test_new_recommendation_minimal_payload() {
        let payload = NewRecommendation {
            dish_name: "Butter Chicken".to_string(),
            restaurant_name: "Moti Mahal".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dishName": "Butter Chicken",
                "restaurantName": "Moti Mahal",
            })
        );
    }

    #[test]
    fn test_new_recommendation_full_payload_keys() {
        let payload = NewRecommendation {
            dish_name: "Momos".to_string(),
            restaurant_name: "Dolma Aunty".to_string(),
            area: Some("Lajpat Nagar".to_string()),
            dish_category: Some(DishCategory::Momos),
            price_range: Some(PriceRange::Budget),
            tags: Some(vec!["street-food".to_string(), "must-try".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["area"], "Lajpat Nagar");
        assert_eq!(json["dishCategory"], "MOMOS");
        assert_eq!(json["priceRange"], "BUDGET");
        assert_eq!(json["tags"], serde_json::json!(["street-food", "must-try"]));
        assert!(json.get("creatorQuote").is_none());
    }

    #[test]
    fn test_recommendation_decodes_sparse_row() {
        let json = r#"{
            "id": 7,
            "dishName": "Hyderabadi Biryani",
            "restaurantName": "Paradise",
            "area": "Connaught Place",
            "tags": []
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, 7);
        assert_eq!(rec.dish_name, "Hyderabadi Biryani");
        assert!(rec.dish_category.is_none());
        assert!(rec.tags.is_empty());
        assert_eq!(rec.view_count, 0);
    }
}
