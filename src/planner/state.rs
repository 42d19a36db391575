//! Planner state
//!
//! The meal plan, the manual shopping items, and the shopping list derived
//! from both.

use crate::recipes::Recipe;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Ordered recipes, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealPlan {
    recipes: Vec<Recipe>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `recipe` unless one with the same id is already planned.
    ///
    /// Returns `false` (leaving the plan untouched) for a duplicate.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    /// Drop every recipe with this id, returning how many were removed
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        before - self.recipes.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<Vec<Recipe>> for MealPlan {
    /// Builds through `add`, so duplicate ids in the input are dropped
    fn from(recipes: Vec<Recipe>) -> Self {
        let mut plan = MealPlan::new();
        for recipe in recipes {
            plan.add(recipe);
        }
        plan
    }
}

impl<'de> Deserialize<'de> for MealPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Recipe>::deserialize(deserializer).map(MealPlan::from)
    }
}

/// Free-text shopping entries, unique by exact text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ManualItems {
    items: Vec<String>,
}

impl ManualItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless it's already present. Returns whether it was added.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<String>> for ManualItems {
    fn from(items: Vec<String>) -> Self {
        let mut manual = ManualItems::new();
        for item in items {
            manual.add(item);
        }
        manual
    }
}

impl<'de> Deserialize<'de> for ManualItems {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(ManualItems::from)
    }
}

/// All mutable planner state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerState {
    pub meal_plan: MealPlan,
    pub manual_items: ManualItems,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every planned ingredient followed by every manual item, de-duplicated
    /// in first-seen order.
    pub fn shopping_list(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.meal_plan
            .iter()
            .flat_map(Recipe::ingredient_entries)
            .chain(self.manual_items.iter())
            .filter(|item| seen.insert(*item))
            .map(str::to_string)
            .collect()
    }
}
