//! Planner Storage
//!
//! Durable key-value storage for planner state:
//!
//! - **store**: the `KeyValueStore` trait with file and memory backends
//! - **persistence**: encoding of the meal plan and manual items into two keys
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use mealplan::planner::PlannerState;
//! use mealplan::storage::{FileStore, Persistence};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileStore::open(std::path::Path::new("./mealplan_data"))?;
//!     let persistence = Persistence::new(Box::new(store));
//!
//!     let mut state = PlannerState::new();
//!     persistence.load()?.apply(&mut state);
//!     println!("{} recipes planned", state.meal_plan.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use persistence::{LoadedState, Persistence, MANUAL_ITEMS_KEY, MEAL_PLAN_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
