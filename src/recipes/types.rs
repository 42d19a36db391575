//! Recipe data types
//!
//! Wire types for TheMealDB search responses and the `Recipe` value that
//! lives in a meal plan.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Highest `strIngredientN` / `strMeasureN` index the API returns
pub const MAX_INGREDIENTS: usize = 20;

/// Shown on a card when the record carries no instructions
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// Shown on a card when the record carries no title
pub const UNTITLED: &str = "Untitled recipe";

/// Separator between entries of an ingredients summary
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// A recipe saved to the meal plan.
///
/// Field names match the persisted layout: `{id, title, image, ingredients}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    /// `", "`-joined `"measure name"` entries
    pub ingredients: String,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
        ingredients: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            ingredients: ingredients.into(),
        }
    }

    /// Split the ingredients summary back into individual entries.
    ///
    /// An empty summary yields no entries.
    pub fn ingredient_entries(&self) -> impl Iterator<Item = &str> {
        let summary = self.ingredients.as_str();
        let mut split = summary.split(INGREDIENT_SEPARATOR);
        if summary.is_empty() {
            // Exhaust the iterator so `"".split(..)` doesn't yield a lone ""
            split.next();
        }
        split
    }
}

/// Body of `GET /search.php`
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// `null` when nothing matched
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

/// One raw meal as returned by the API.
///
/// The twenty ingredient/measure pairs are kept in `fields` and read by
/// index through [`MealRecord::ingredient`] and [`MealRecord::measure`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal", default)]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl MealRecord {
    /// `strIngredient{n}`, if present and a string
    pub fn ingredient(&self, n: usize) -> Option<&str> {
        self.field(&format!("strIngredient{}", n))
    }

    /// `strMeasure{n}`, if present and a string
    pub fn measure(&self, n: usize) -> Option<&str> {
        self.field(&format!("strMeasure{}", n))
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Collect `"measure name"` entries for every non-blank ingredient.
    pub fn ingredient_list(&self) -> Vec<String> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|n| {
                let name = self.ingredient(n)?.trim();
                if name.is_empty() {
                    return None;
                }
                let measure = self.measure(n).map(str::trim).unwrap_or("");
                Some(format!("{} {}", measure, name).trim().to_string())
            })
            .collect()
    }

    /// The comma-joined ingredients summary used on cards and in the meal plan
    pub fn ingredients_summary(&self) -> String {
        self.ingredient_list().join(INGREDIENT_SEPARATOR)
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn thumbnail_or_default(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or("")
    }

    pub fn instructions_or_default(&self) -> &str {
        match self.instructions.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => NO_INSTRUCTIONS,
        }
    }
}
