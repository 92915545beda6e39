//! Draft form state and its conversion into committed menu items.
//!
//! The draft holds raw, possibly invalid input. Nothing is checked while the
//! user types; all rules run in [`DraftController::submit`].

use serde::Serialize;
use shared::{
    domain::{Course, MenuItem},
    error::ValidationError,
};
use tracing::{debug, trace};

use crate::ids::{IdSource, SequentialIds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    Closed,
    Open,
}

/// One committed field edit from the host's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Description(String),
    Price(String),
    Course(Course),
}

impl DraftField {
    pub fn field_name(&self) -> &'static str {
        match self {
            DraftField::Name(_) => "name",
            DraftField::Description(_) => "description",
            DraftField::Price(_) => "price",
            DraftField::Course(_) => "course",
        }
    }
}

/// Snapshot of the form as the host should display it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftView {
    pub name: String,
    pub description: String,
    pub price_text: String,
    pub course: Course,
    pub is_open: bool,
}

#[derive(Debug)]
pub struct DraftController<I = SequentialIds> {
    form: DraftView,
    ids: I,
}

impl DraftController<SequentialIds> {
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl Default for DraftController<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> DraftController<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            form: DraftView::default(),
            ids,
        }
    }

    pub fn view(&self) -> &DraftView {
        &self.form
    }

    pub fn state(&self) -> DraftState {
        if self.form.is_open {
            DraftState::Open
        } else {
            DraftState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.form.is_open
    }

    /// Shows the form. Whatever the fields hold is kept as is.
    pub fn open(&mut self) {
        self.form.is_open = true;
        debug!("draft opened");
    }

    pub fn set_field(&mut self, field: DraftField) {
        trace!(field = field.field_name(), "draft field updated");
        match field {
            DraftField::Name(value) => self.form.name = value,
            DraftField::Description(value) => self.form.description = value,
            DraftField::Price(value) => self.form.price_text = value,
            DraftField::Course(course) => self.form.course = course,
        }
    }

    /// Hides the form and clears every field back to its default.
    pub fn cancel(&mut self) {
        self.reset();
        debug!("draft cancelled");
    }

    /// Same end state as [`cancel`](Self::cancel); used after a successful commit.
    pub fn reset(&mut self) {
        self.form = DraftView::default();
    }

    /// Validates the draft and builds an item from it.
    ///
    /// Leaves the form untouched in every case; on success the caller stores
    /// the item and then calls [`reset`](Self::reset). An id is only drawn
    /// from the source once validation has passed.
    pub fn submit(&mut self) -> Result<MenuItem, ValidationError> {
        let name = non_empty_trimmed(&self.form.name)?;
        let description = non_empty_trimmed(&self.form.description)?;
        let price = parse_price(&self.form.price_text)?;

        Ok(MenuItem::from_validated(
            self.ids.next_id(),
            name.to_string(),
            description.to_string(),
            price,
            self.form.course,
        ))
    }
}

fn non_empty_trimmed(value: &str) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    Ok(trimmed)
}

/// Accepts finite decimals strictly above zero. Surrounding whitespace is ignored.
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    let price = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidPrice)?;

    // NaN fails the comparison as well.
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(ValidationError::InvalidPrice)
    }
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
