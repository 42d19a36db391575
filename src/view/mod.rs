//! Views
//!
//! Planner operations never touch an output device directly. They build a
//! view description from the current state and hand it to a [`Renderer`];
//! each render call fully replaces what that region showed before.
//!
//! - [`SearchView`]: recipe cards, or exactly one message
//! - [`MealPlanView`]: planned recipes, each with a remove action
//! - [`ShoppingListView`]: the derived shopping list
//! - [`Notice`]: a blocking user-facing notice (duplicate, empty input)
//!
//! [`TerminalRenderer`] draws all of them, plus the clock, on a terminal.

mod terminal;

pub use terminal::TerminalRenderer;

use crate::planner::PlannerState;
use crate::recipes::{MealRecord, Recipe};
use std::fmt;

/// One search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: String,
    pub title: String,
    pub image: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeCard {
    pub fn from_record(record: &MealRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title_or_default().to_string(),
            image: record.thumbnail_or_default().to_string(),
            ingredients: record.ingredients_summary(),
            instructions: record.instructions_or_default().to_string(),
        }
    }

    /// The card's "Add to Meal Plan" action: the recipe it would add
    pub fn recipe(&self) -> Recipe {
        Recipe::new(
            self.id.clone(),
            self.title.clone(),
            self.image.clone(),
            self.ingredients.clone(),
        )
    }
}

/// Message shown in place of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    NoResults,
    RequestFailed(u16),
    Unexpected,
}

impl fmt::Display for SearchMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResults => write!(f, "No recipes found for your search."),
            Self::RequestFailed(status) => {
                write!(f, "API request failed with status: {}", status)
            }
            Self::Unexpected => write!(f, "Sorry, something went wrong. Please try again later."),
        }
    }
}

/// Contents of the search results region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// Nothing shown (a search just started, or the query was empty)
    Cleared,
    Cards(Vec<RecipeCard>),
    Message(SearchMessage),
}

impl SearchView {
    pub fn from_records(records: &[MealRecord]) -> Self {
        if records.is_empty() {
            return Self::Message(SearchMessage::NoResults);
        }
        Self::Cards(records.iter().map(RecipeCard::from_record).collect())
    }

    pub fn cards(&self) -> &[RecipeCard] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// One planned recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlanEntry {
    pub id: String,
    pub title: String,
    pub image: String,
}

impl MealPlanEntry {
    /// Id the entry's "Remove" action removes
    pub fn remove_target(&self) -> &str {
        &self.id
    }
}

/// Contents of the meal plan region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealPlanView {
    Empty,
    Entries(Vec<MealPlanEntry>),
}

impl MealPlanView {
    pub const EMPTY_MESSAGE: &'static str = "No recipes added to your meal plan yet.";

    pub fn build(state: &PlannerState) -> Self {
        if state.meal_plan.is_empty() {
            return Self::Empty;
        }
        Self::Entries(
            state
                .meal_plan
                .iter()
                .map(|r| MealPlanEntry {
                    id: r.id.clone(),
                    title: r.title.clone(),
                    image: r.image.clone(),
                })
                .collect(),
        )
    }
}

/// Contents of the shopping list region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListView {
    Empty,
    Items(Vec<String>),
}

impl ShoppingListView {
    pub const EMPTY_MESSAGE: &'static str = "Your shopping list is empty.";

    pub fn build(state: &PlannerState) -> Self {
        let items = state.shopping_list();
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }
}

/// Blocking notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyQuery,
    DuplicateRecipe,
    EmptyItem,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "Please enter a recipe name!"),
            Self::DuplicateRecipe => write!(f, "This recipe is already in your meal plan."),
            Self::EmptyItem => write!(f, "Please enter an item to add."),
        }
    }
}

/// Output side of the planner
pub trait Renderer {
    fn search_results(&mut self, view: &SearchView);

    fn meal_plan(&mut self, view: &MealPlanView);

    fn shopping_list(&mut self, view: &ShoppingListView);

    fn notice(&mut self, notice: Notice);

    /// Reset the manual shopping item input after a successful add
    fn clear_item_input(&mut self) {}
}

/// Output side of a clock
pub trait ClockDisplay: Send + Sync {
    /// Replace the text of the clock element
    fn show_time(&self, element: &str, text: &str);

    /// Leave the current page for `target`
    fn navigate(&self, target: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_action_rebuilds_recipe() {
        let record: MealRecord = serde_json::from_value(json!({
            "idMeal": "52771",
            "strMeal": "Spicy Arrabiata Penne",
            "strMealThumb": "https://example.test/penne.jpg",
            "strInstructions": null,
            "strIngredient1": "penne rigate",
            "strMeasure1": "1 pound",
            "strIngredient2": "olive oil",
            "strMeasure2": "1/4 cup",
        }))
        .unwrap();

        let card = RecipeCard::from_record(&record);
        assert_eq!(card.instructions, "No instructions available.");
        assert_eq!(
            card.recipe(),
            Recipe::new(
                "52771",
                "Spicy Arrabiata Penne",
                "https://example.test/penne.jpg",
                "1 pound penne rigate, 1/4 cup olive oil"
            )
        );
    }

    #[test]
    fn test_search_view_from_empty_records() {
        assert_eq!(
            SearchView::from_records(&[]),
            SearchView::Message(SearchMessage::NoResults)
        );
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            SearchMessage::RequestFailed(404).to_string(),
            "API request failed with status: 404"
        );
        assert_eq!(Notice::EmptyItem.to_string(), "Please enter an item to add.");
    }

    #[test]
    fn test_empty_views() {
        let state = PlannerState::new();
        assert_eq!(MealPlanView::build(&state), MealPlanView::Empty);
        assert_eq!(ShoppingListView::build(&state), ShoppingListView::Empty);
    }

    #[test]
    fn test_meal_plan_entries_carry_remove_target() {
        let mut state = PlannerState::new();
        state.meal_plan.add(Recipe::new("9", "Stew", "stew.jpg", "beef"));

        match MealPlanView::build(&state) {
            MealPlanView::Entries(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].remove_target(), "9");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }
}
