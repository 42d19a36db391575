//! Planner persistence
//!
//! The meal plan and the manual shopping items are JSON-encoded into two
//! fixed keys of a `KeyValueStore`. The derived shopping list is never stored.

use crate::planner::{ManualItems, MealPlan, PlannerState};
use crate::storage::error::StoreResult;
use crate::storage::store::KeyValueStore;
use serde::de::DeserializeOwned;

/// Key holding the meal plan (array of recipe objects)
pub const MEAL_PLAN_KEY: &str = "mealPlan";

/// Key holding the manual shopping items (array of strings)
pub const MANUAL_ITEMS_KEY: &str = "manualShoppingItems";

/// What was found in the store at start-up
#[derive(Debug, Default)]
pub struct LoadedState {
    pub meal_plan: Option<MealPlan>,
    pub manual_items: Option<ManualItems>,
}

impl LoadedState {
    /// True when at least one of the two keys held usable state
    pub fn any(&self) -> bool {
        self.meal_plan.is_some() || self.manual_items.is_some()
    }

    /// Merge into `state`, replacing only the lists that were found
    pub fn apply(self, state: &mut PlannerState) {
        if let Some(plan) = self.meal_plan {
            state.meal_plan = plan;
        }
        if let Some(items) = self.manual_items {
            state.manual_items = items;
        }
    }
}

/// Reads and writes planner state through a key-value store
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Write both lists
    pub fn save(&mut self, state: &PlannerState) -> StoreResult<()> {
        let plan = serde_json::to_string(&state.meal_plan)?;
        let items = serde_json::to_string(&state.manual_items)?;

        self.store.set(MEAL_PLAN_KEY, plan)?;
        self.store.set(MANUAL_ITEMS_KEY, items)?;

        tracing::debug!(
            recipes = state.meal_plan.len(),
            manual_items = state.manual_items.len(),
            "saved planner state"
        );
        Ok(())
    }

    /// Read both lists. Absent keys, and values that fail to decode, come
    /// back as `None`.
    pub fn load(&self) -> StoreResult<LoadedState> {
        Ok(LoadedState {
            meal_plan: self.load_key(MEAL_PLAN_KEY)?,
            manual_items: self.load_key(MANUAL_ITEMS_KEY)?,
        })
    }

    fn load_key<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable {} value: {}", key, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::Recipe;
    use crate::storage::store::{FileStore, MemoryStore};
    use tempfile::tempdir;

    fn sample_state() -> PlannerState {
        let mut state = PlannerState::new();
        state.meal_plan.add(Recipe::new(
            "52772",
            "Teriyaki Chicken Casserole",
            "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "3/4 cup soy sauce, 1/2 cup water",
        ));
        state.meal_plan.add(Recipe::new("52959", "Baked salmon", "", ""));
        state.manual_items.add("milk");
        state
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let persistence = Persistence::new(Box::new(MemoryStore::new()));
        let loaded = persistence.load().unwrap();
        assert!(!loaded.any());
    }

    #[test]
    fn test_round_trip() {
        let state = sample_state();
        let mut persistence = Persistence::new(Box::new(MemoryStore::new()));
        persistence.save(&state).unwrap();

        let mut restored = PlannerState::new();
        persistence.load().unwrap().apply(&mut restored);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_wire_layout() {
        let mut store = MemoryStore::new();
        store
            .set(
                MEAL_PLAN_KEY,
                r#"[{"id":"1","title":"Soup","image":"s.jpg","ingredients":"1 l water"}]"#
                    .to_string(),
            )
            .unwrap();
        let persistence = Persistence::new(Box::new(store));

        let loaded = persistence.load().unwrap();
        let plan = loaded.meal_plan.unwrap();
        assert_eq!(
            plan.iter().next().unwrap(),
            &Recipe::new("1", "Soup", "s.jpg", "1 l water")
        );
        assert!(loaded.manual_items.is_none());
    }

    #[test]
    fn test_duplicate_stored_entries_collapse() {
        let mut store = MemoryStore::new();
        store
            .set(
                MEAL_PLAN_KEY,
                r#"[
                    {"id":"1","title":"Soup","image":"s.jpg","ingredients":"1 l water"},
                    {"id":"2","title":"Stew","image":"t.jpg","ingredients":""},
                    {"id":"1","title":"Soup again","image":"","ingredients":"salt"}
                ]"#
                .to_string(),
            )
            .unwrap();
        store
            .set(MANUAL_ITEMS_KEY, r#"["milk","eggs","milk"]"#.to_string())
            .unwrap();
        let persistence = Persistence::new(Box::new(store));

        let loaded = persistence.load().unwrap();
        let plan = loaded.meal_plan.unwrap();
        let titles: Vec<&str> = plan.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Soup", "Stew"]);

        let items: Vec<&str> = loaded.manual_items.as_ref().unwrap().iter().collect();
        assert_eq!(items, ["milk", "eggs"]);
    }

    #[test]
    fn test_unreadable_value_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(MANUAL_ITEMS_KEY, "{broken".to_string()).unwrap();
        let persistence = Persistence::new(Box::new(store));

        let loaded = persistence.load().unwrap();
        assert!(loaded.manual_items.is_none());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let state = sample_state();

        {
            let store = FileStore::open(dir.path()).unwrap();
            let mut persistence = Persistence::new(Box::new(store));
            persistence.save(&state).unwrap();
        }

        let store = FileStore::open(dir.path()).unwrap();
        let persistence = Persistence::new(Box::new(store));
        let mut restored = PlannerState::new();
        persistence.load().unwrap().apply(&mut restored);
        assert_eq!(restored, state);
    }
}
