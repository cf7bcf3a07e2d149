//! List screen state and event handlers.
//!
//! # Responsibility
//! - Refresh the people cache from the store whenever the screen is shown.
//! - Append newly saved people to the cache without a full refresh.
//! - Project the cache into row labels for the host table view.
//!
//! # Invariants
//! - A failed refresh keeps the previous cache.
//! - A failed or cancelled add keeps the cache unchanged.
//! - Rows are a plain projection of the cache: no sorting, no filtering.

use crate::model::person::Person;
use crate::presentation::prompt::{NamePrompt, PromptOutcome, ADD_NAME_PROMPT};
use crate::repo::person_repo::PersonRepository;
use crate::service::person_service::PersonService;
use log::{debug, error, info};

/// Fixed screen title, quotes included.
pub const LIST_TITLE: &str = "\"The List\"";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: String,
}

/// Table surface implemented by the host UI.
pub trait ListView {
    /// Redraws the table with the given rows.
    fn reload(&mut self, rows: &[RowView]);
    /// Shows a user-visible store failure.
    fn show_error(&mut self, message: &str);
}

/// Result of `ListScreen::on_screen_shown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed { count: usize },
    Failed,
}

/// Result of `ListScreen::on_add_requested`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Person),
    Cancelled,
    Failed,
}

/// Headless list screen: owns the cache and talks to the store.
pub struct ListScreen<R: PersonRepository, V: ListView> {
    store: PersonService<R>,
    view: V,
    people: Vec<Person>,
    last_error: Option<String>,
}

impl<R: PersonRepository, V: ListView> ListScreen<R, V> {
    /// Creates a screen with an empty cache. Nothing is read until the
    /// screen is shown.
    pub fn new(store: PersonService<R>, view: V) -> Self {
        Self {
            store,
            view,
            people: Vec::new(),
            last_error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        LIST_TITLE
    }

    /// Reloads the cache from the store and redraws.
    pub fn on_screen_shown(&mut self) -> RefreshOutcome {
        match self.store.list_all() {
            Ok(people) => {
                self.people = people;
                self.last_error = None;
                info!(
                    "event=list_refresh module=presentation status=ok count={}",
                    self.people.len()
                );
                self.redraw();
                RefreshOutcome::Refreshed {
                    count: self.people.len(),
                }
            }
            Err(err) => {
                error!(
                    "event=list_refresh module=presentation status=error cached={} error={}",
                    self.people.len(),
                    err
                );
                self.report_failure(format!("Could not load names: {err}"));
                RefreshOutcome::Failed
            }
        }
    }

    /// Runs the add flow: prompt, then persist and append on Save.
    pub fn on_add_requested(&mut self, prompt: &mut impl NamePrompt) -> AddOutcome {
        let text = match prompt.ask(&ADD_NAME_PROMPT) {
            PromptOutcome::Save(text) => text,
            PromptOutcome::Cancel => {
                debug!("event=add_prompt module=presentation status=cancelled");
                return AddOutcome::Cancelled;
            }
        };
        debug!(
            "event=add_prompt module=presentation status=save name_chars={}",
            text.chars().count()
        );

        match self.store.add(text) {
            Ok(person) => {
                self.people.push(person.clone());
                self.last_error = None;
                info!(
                    "event=person_add module=presentation status=ok count={}",
                    self.people.len()
                );
                self.redraw();
                AddOutcome::Added(person)
            }
            Err(err) => {
                error!(
                    "event=person_add module=presentation status=error error={}",
                    err
                );
                self.report_failure(format!("Could not save name: {err}"));
                AddOutcome::Failed
            }
        }
    }

    /// Cached people as of the last refresh plus successful adds.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn row_count(&self) -> usize {
        self.people.len()
    }

    pub fn row_label(&self, index: usize) -> Option<&str> {
        self.people.get(index).map(|person| person.name.as_str())
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.people
            .iter()
            .map(|person| RowView {
                label: person.name.clone(),
            })
            .collect()
    }

    /// Message of the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn redraw(&mut self) {
        let rows = self.rows();
        self.view.reload(&rows);
    }

    fn report_failure(&mut self, message: String) {
        self.view.show_error(&message);
        self.last_error = Some(message);
    }
}
