//! # Mealplan
//!
//! Recipe search, meal planning and shopping lists backed by
//! [TheMealDB](https://www.themealdb.com).
//!
//! ## Features
//!
//! - **Recipe search**: one request per search, results rendered as cards
//! - **Meal plan**: recipes added from cards, unique by id
//! - **Shopping list**: derived from the meal plan plus manual items
//! - **Persistence**: both lists saved after every change, restored at start-up
//! - **Clock**: a once-per-second time display for a fixed time zone
//!
//! ## Modules
//!
//! - [`recipes`]: API client and recipe types
//! - [`planner`]: planner state and the controller running user operations
//! - [`storage`]: key-value stores and planner persistence
//! - [`view`]: view descriptions and renderers
//! - [`clock`]: clock formatting and the recurring ticker
//! - [`config`]: configuration loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mealplan::planner::PlannerController;
//! use mealplan::recipes::{MealDbClient, MealDbConfig};
//! use mealplan::storage::{FileStore, Persistence};
//! use mealplan::view::TerminalRenderer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MealDbClient::new(MealDbConfig::default())?;
//!     let store = FileStore::open(std::path::Path::new("./mealplan_data"))?;
//!
//!     let mut planner = PlannerController::new(
//!         Box::new(client),
//!         Persistence::new(Box::new(store)),
//!         TerminalRenderer::stdout(),
//!     );
//!     planner.load()?;
//!
//!     planner.search("chicken").await;
//!     planner.add_manual_item("milk")?;
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod planner;
pub mod recipes;
pub mod storage;
pub mod view;

// Re-export top-level types for convenience
pub use clock::{Clock, ClockFormat, ClockHandle, ClockVariant, FooterLink};

pub use config::{ApiConfig, ClockConfig, Config, ConfigError, LoggingConfig, StorageConfig};

pub use planner::{
    ManualItems, MealPlan, Outcome, PlannerController, PlannerError, PlannerResult, PlannerState,
};

pub use recipes::{ApiError, MealDbClient, MealDbConfig, MealRecord, Recipe, RecipeSource};

pub use storage::{FileStore, KeyValueStore, MemoryStore, Persistence, StoreError, StoreResult};

pub use view::{
    ClockDisplay, MealPlanView, Notice, RecipeCard, Renderer, SearchMessage, SearchView,
    ShoppingListView, TerminalRenderer,
};
