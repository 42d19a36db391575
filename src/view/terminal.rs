//! Terminal renderer
//!
//! Draws planner views as plain text. Cards are numbered from 1 so the CLI
//! can refer to them.

use super::{ClockDisplay, MealPlanView, Notice, Renderer, SearchView, ShoppingListView};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct TerminalRenderer<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn search_results(&mut self, view: &SearchView) {
        let mut text = String::new();
        match view {
            SearchView::Cleared => return,
            SearchView::Message(message) => {
                text.push_str(&format!("{}\n", message));
            }
            SearchView::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    text.push_str(&format!("[{}] {} (id {})\n", i + 1, card.title, card.id));
                    if !card.image.is_empty() {
                        text.push_str(&format!("    Image: {}\n", card.image));
                    }
                    text.push_str(&format!("    Ingredients: {}\n", card.ingredients));
                    text.push_str(&format!("    Instructions: {}\n", card.instructions));
                    text.push('\n');
                }
            }
        }
        self.emit(&text);
    }

    fn meal_plan(&mut self, view: &MealPlanView) {
        let mut text = String::from("Meal plan:\n");
        match view {
            MealPlanView::Empty => {
                text.push_str(&format!("  {}\n", MealPlanView::EMPTY_MESSAGE));
            }
            MealPlanView::Entries(entries) => {
                for entry in entries {
                    text.push_str(&format!(
                        "  - {} (remove with: mealplan remove {})\n",
                        entry.title,
                        entry.remove_target()
                    ));
                }
            }
        }
        self.emit(&text);
    }

    fn shopping_list(&mut self, view: &ShoppingListView) {
        let mut text = String::from("Shopping list:\n");
        match view {
            ShoppingListView::Empty => {
                text.push_str(&format!("  {}\n", ShoppingListView::EMPTY_MESSAGE));
            }
            ShoppingListView::Items(items) => {
                for item in items {
                    text.push_str(&format!("  * {}\n", item));
                }
            }
        }
        self.emit(&text);
    }

    fn notice(&mut self, notice: Notice) {
        self.emit(&format!("! {}\n", notice));
    }
}

impl<W: Write + Send> ClockDisplay for TerminalRenderer<W> {
    fn show_time(&self, element: &str, text: &str) {
        self.emit(&format!("\r[{}] {}", element, text));
    }

    fn navigate(&self, target: &str) {
        self.emit(&format!("\nNavigating to {}\n", target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{MealPlanEntry, RecipeCard, SearchMessage};

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_cards_are_numbered() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.search_results(&SearchView::Cards(vec![RecipeCard {
            id: "52772".into(),
            title: "Teriyaki Chicken Casserole".into(),
            image: String::new(),
            ingredients: "3/4 cup soy sauce".into(),
            instructions: "Preheat oven.".into(),
        }]));

        let text = output(renderer);
        assert!(text.starts_with("[1] Teriyaki Chicken Casserole (id 52772)\n"));
        assert!(text.contains("Ingredients: 3/4 cup soy sauce"));
        assert!(!text.contains("Image:"));
    }

    #[test]
    fn test_message_and_empty_states() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.search_results(&SearchView::Message(SearchMessage::NoResults));
        renderer.meal_plan(&MealPlanView::Empty);
        renderer.shopping_list(&ShoppingListView::Empty);
        renderer.notice(Notice::DuplicateRecipe);

        let text = output(renderer);
        assert!(text.contains("No recipes found for your search."));
        assert!(text.contains("No recipes added to your meal plan yet."));
        assert!(text.contains("Your shopping list is empty."));
        assert!(text.contains("! This recipe is already in your meal plan."));
    }

    #[test]
    fn test_meal_plan_entries() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.meal_plan(&MealPlanView::Entries(vec![MealPlanEntry {
            id: "7".into(),
            title: "Stew".into(),
            image: String::new(),
        }]));

        assert!(output(renderer).contains("  - Stew (remove with: mealplan remove 7)"));
    }

    #[test]
    fn test_clock_output() {
        let renderer = TerminalRenderer::new(Vec::new());
        renderer.show_time("dateTime", "10/17/2026, 09:05:01");
        renderer.navigate("about.html");

        assert_eq!(
            output(renderer),
            "\r[dateTime] 10/17/2026, 09:05:01\nNavigating to about.html\n"
        );
    }
}
