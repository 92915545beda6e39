//! Plain-text views of the session for the terminal.

use std::fmt::Write as _;

use menu_core::{CatalogStore, DraftView, SubmitOutcome};
use shared::domain::{Course, MenuItem};

pub fn render_catalog(catalog: &CatalogStore, title: &str, currency_symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", catalog.summary_label());
    for (position, item) in catalog.list().enumerate() {
        let _ = write!(out, "{}", render_item(position + 1, item, currency_symbol));
    }
    out
}

fn render_item(position: usize, item: &MenuItem, currency_symbol: &str) -> String {
    format!(
        "{position}. {}\n   {}\n   Course: {}\n   Price: {currency_symbol}{}\n",
        item.name(),
        item.description(),
        item.course(),
        item.display_price(),
    )
}

pub fn render_draft(view: &DraftView) -> String {
    if !view.is_open {
        return "Form closed. Type 'open' to add a menu item.\n".to_string();
    }

    let courses: Vec<&str> = Course::ALL.iter().map(|course| course.label()).collect();
    format!(
        "Add New Menu Item\n  Dish Name:        {}\n  Dish Description: {}\n  Price:            {}\n  Course:           {} ({})\n",
        view.name,
        view.description,
        view.price_text,
        view.course,
        courses.join(" / "),
    )
}

pub fn render_outcome(
    outcome: SubmitOutcome,
    catalog: &CatalogStore,
    currency_symbol: &str,
) -> String {
    match outcome {
        SubmitOutcome::Added(id) => match catalog.list().find(|item| item.id() == id) {
            Some(item) => format!(
                "Added {} ({currency_symbol}{}).\n",
                item.name(),
                item.display_price()
            ),
            None => format!("Added item {id}.\n"),
        },
        SubmitOutcome::Rejected(err) => format!("Error: {err}\n"),
    }
}

pub fn render_catalog_json(catalog: &CatalogStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(catalog.items())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
