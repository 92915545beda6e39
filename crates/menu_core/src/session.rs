//! Single owner of the draft and the catalog. Hosts translate each user action
//! into a [`Command`] and hand it to [`MenuSession::handle`].

use serde::Serialize;
use shared::{domain::ItemId, error::ValidationError};

use crate::{
    catalog::CatalogStore,
    draft::{DraftController, DraftField},
    ids::{IdSource, SequentialIds},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Cancel,
    SetField(DraftField),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Added(ItemId),
    Rejected(ValidationError),
}

#[derive(Debug)]
pub struct MenuSession<I = SequentialIds> {
    draft: DraftController<I>,
    catalog: CatalogStore,
    last_outcome: Option<SubmitOutcome>,
}

impl MenuSession<SequentialIds> {
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl Default for MenuSession<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> MenuSession<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            draft: DraftController::with_ids(ids),
            catalog: CatalogStore::new(),
            last_outcome: None,
        }
    }

    /// Applies one user action. Returns the submit outcome for `Submit`,
    /// `None` for everything else.
    pub fn handle(&mut self, command: Command) -> Option<SubmitOutcome> {
        match command {
            Command::Open => self.draft.open(),
            Command::Cancel => self.draft.cancel(),
            Command::SetField(field) => self.draft.set_field(field),
            Command::Submit => return Some(self.submit()),
        }
        None
    }

    fn submit(&mut self) -> SubmitOutcome {
        let outcome = match self.draft.submit() {
            Ok(item) => {
                let id = item.id();
                self.catalog.append(item);
                self.draft.reset();
                SubmitOutcome::Added(id)
            }
            Err(err) => SubmitOutcome::Rejected(err),
        };
        self.last_outcome = Some(outcome);
        outcome
    }

    pub fn draft(&self) -> &DraftController<I> {
        &self.draft
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.last_outcome
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
