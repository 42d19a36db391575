//! Planner controller
//!
//! Owns the planner state and runs every user operation as
//! mutate → render → persist. Search is the only operation that awaits.

use crate::planner::error::PlannerResult;
use crate::planner::state::PlannerState;
use crate::recipes::{ApiError, Recipe, RecipeSource};
use crate::storage::Persistence;
use crate::view::{MealPlanView, Notice, Renderer, SearchMessage, SearchView, ShoppingListView};

/// Result of a mutating operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed, views re-rendered, state persisted
    Applied,
    /// Rejected with a notice; nothing changed
    Rejected(Notice),
}

pub struct PlannerController<R: Renderer> {
    state: PlannerState,
    source: Box<dyn RecipeSource>,
    persistence: Persistence,
    renderer: R,
}

impl<R: Renderer> PlannerController<R> {
    /// Create a controller with empty state. Call [`load`](Self::load) to
    /// restore saved state.
    pub fn new(source: Box<dyn RecipeSource>, persistence: Persistence, renderer: R) -> Self {
        Self {
            state: PlannerState::new(),
            source,
            persistence,
            renderer,
        }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Restore saved state and render both views when anything was found.
    ///
    /// Returns whether saved state was found.
    pub fn load(&mut self) -> PlannerResult<bool> {
        let found = self.restore()?;
        if found {
            self.render_meal_plan();
            self.render_shopping_list();
        }
        Ok(found)
    }

    /// Restore saved state without rendering
    pub fn restore(&mut self) -> PlannerResult<bool> {
        let loaded = self.persistence.load()?;
        if !loaded.any() {
            tracing::debug!("No saved planner state");
            return Ok(false);
        }

        loaded.apply(&mut self.state);
        tracing::info!(
            recipes = self.state.meal_plan.len(),
            manual_items = self.state.manual_items.len(),
            "Restored planner state"
        );
        Ok(true)
    }

    /// Search recipes and render the results.
    ///
    /// The previous results are always cleared first. Never fails: every
    /// failure becomes a single message in the results view.
    pub async fn search(&mut self, query: &str) -> SearchView {
        self.renderer.search_results(&SearchView::Cleared);

        let query = query.trim();
        if query.is_empty() {
            self.renderer.notice(Notice::EmptyQuery);
            return SearchView::Cleared;
        }

        let view = match self.source.search(query).await {
            Ok(records) => {
                tracing::info!(query = %query, results = records.len(), "recipe search finished");
                SearchView::from_records(&records)
            }
            Err(ApiError::Status(status)) => {
                tracing::error!(
                    "Error fetching recipes: API request failed with status {}",
                    status
                );
                SearchView::Message(SearchMessage::RequestFailed(status))
            }
            Err(e) => {
                tracing::error!("Error fetching recipes: {}", e);
                SearchView::Message(SearchMessage::Unexpected)
            }
        };

        self.renderer.search_results(&view);
        view
    }

    /// Add a recipe to the meal plan unless its id is already planned
    pub fn add_to_meal_plan(&mut self, recipe: Recipe) -> PlannerResult<Outcome> {
        let id = recipe.id.clone();
        if !self.state.meal_plan.add(recipe) {
            tracing::debug!(id = %id, "recipe already planned");
            return Ok(self.reject(Notice::DuplicateRecipe));
        }

        tracing::info!(id = %id, "added recipe to meal plan");
        self.render_meal_plan();
        self.render_shopping_list();
        self.persistence.save(&self.state)?;
        Ok(Outcome::Applied)
    }

    /// Remove every planned recipe with this id
    pub fn remove_from_meal_plan(&mut self, id: &str) -> PlannerResult<Outcome> {
        let removed = self.state.meal_plan.remove(id);
        tracing::info!(id = %id, removed, "removed recipe from meal plan");

        self.render_meal_plan();
        self.render_shopping_list();
        self.persistence.save(&self.state)?;
        Ok(Outcome::Applied)
    }

    /// Add a free-text shopping item
    pub fn add_manual_item(&mut self, input: &str) -> PlannerResult<Outcome> {
        let item = input.trim();
        if item.is_empty() {
            return Ok(self.reject(Notice::EmptyItem));
        }

        if !self.state.manual_items.add(item) {
            tracing::debug!(item = %item, "manual item already listed");
        }

        self.renderer.clear_item_input();
        self.render_shopping_list();
        self.persistence.save(&self.state)?;
        Ok(Outcome::Applied)
    }

    /// Rebuild the meal plan view from current state
    pub fn render_meal_plan(&mut self) {
        let view = MealPlanView::build(&self.state);
        self.renderer.meal_plan(&view);
    }

    /// Rebuild the shopping list view from current state
    pub fn render_shopping_list(&mut self) {
        let view = ShoppingListView::build(&self.state);
        self.renderer.shopping_list(&view);
    }

    fn reject(&mut self, notice: Notice) -> Outcome {
        self.renderer.notice(notice);
        Outcome::Rejected(notice)
    }
}
