use serde::{Deserialize, Serialize};

/// A single dish in the catalog
///
/// Every attribute except the name may be missing in the source dataset.
/// Missing values are carried as `None` and serialize as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub dish_name: String,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub average_cost: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub diet_type: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
}

impl DishRecord {
    /// Create a record with only a name; every other attribute is absent
    pub fn named(dish_name: impl Into<String>) -> Self {
        Self {
            dish_name: dish_name.into(),
            restaurant_name: None,
            average_cost: None,
            rating: None,
            diet_type: None,
            calories: None,
            cuisine: None,
            img_url: None,
        }
    }

    /// Replace non-finite numbers and blank strings with `None`
    pub fn normalized(self) -> Self {
        Self {
            dish_name: self.dish_name,
            restaurant_name: present_text(self.restaurant_name),
            average_cost: finite(self.average_cost),
            rating: finite(self.rating),
            diet_type: present_text(self.diet_type),
            calories: finite(self.calories),
            cuisine: present_text(self.cuisine),
            img_url: present_text(self.img_url),
        }
    }

    /// Boundary view used by the home page
    pub fn featured(&self) -> FeaturedDish {
        FeaturedDish {
            food_name: self.dish_name.clone(),
            restaurant_name: self.restaurant_name.clone(),
            average_cost: self.average_cost,
            rating: self.rating,
            diet_type: self.diet_type.clone(),
            calories: self.calories,
            cuisine: self.cuisine.clone(),
            image: self.img_url.clone(),
        }
    }
}

#[inline]
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[inline]
fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Dish as shown on the home page (`dish_name` -> `food_name`, `img_url` -> `image`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedDish {
    pub food_name: String,
    pub restaurant_name: Option<String>,
    pub average_cost: Option<f64>,
    pub rating: Option<f64>,
    pub diet_type: Option<String>,
    pub calories: Option<f64>,
    pub cuisine: Option<String>,
    pub image: Option<String>,
}

/// Output of the recommendation selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub favorite_dish: String,
    pub recommendations: Vec<DishRecord>,
    pub recently_rated: Vec<DishRecord>,
}

/// Sample sizes and seeds used by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionParams {
    pub recommendation_limit: usize,
    pub recommendation_seed: u64,
    pub recently_rated_limit: usize,
    pub recently_rated_seed: u64,
    pub featured_limit: usize,
    pub featured_seed: u64,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            recommendation_limit: 6,
            recommendation_seed: 42,
            recently_rated_limit: 6,
            recently_rated_seed: 10,
            featured_limit: 12,
            featured_seed: 42,
        }
    }
}
