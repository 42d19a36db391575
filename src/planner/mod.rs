//! Meal Planner
//!
//! - **state**: `MealPlan`, `ManualItems` and the derived shopping list
//! - **controller**: user operations (search, add, remove, manual items)
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use mealplan::planner::PlannerController;
//! use mealplan::recipes::{MealDbClient, MealDbConfig};
//! use mealplan::storage::{MemoryStore, Persistence};
//! use mealplan::view::TerminalRenderer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MealDbClient::new(MealDbConfig::default())?;
//!     let persistence = Persistence::new(Box::new(MemoryStore::new()));
//!     let mut planner =
//!         PlannerController::new(Box::new(client), persistence, TerminalRenderer::stdout());
//!
//!     let view = planner.search("arrabiata").await;
//!     if let Some(card) = view.cards().first() {
//!         planner.add_to_meal_plan(card.recipe())?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod error;
pub mod state;

pub use controller::{Outcome, PlannerController};
pub use error::{PlannerError, PlannerResult};
pub use state::{ManualItems, MealPlan, PlannerState};
