//! Terminal picker built on dialoguer
//!
//! Each prompt is a `Select` list. A leading ".. (Back)" entry is shown when
//! the caller allows going back, and a "Filter..." entry asks for a query
//! that narrows the list by case-insensitive substring. Esc means Back when
//! Back is offered and Exit otherwise; Ctrl+C always means Exit.

use std::io;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use s3t_core::ports::{filter_items, ISelector, SelectionError, SelectionOutcome, BACK_OPTION};
use tracing::debug;

const FILTER_OPTION: &str = "Filter...";

/// One line of the menu
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Back,
    Filter,
    Item(String),
}

/// The entries shown for one render of a prompt
#[derive(Debug)]
struct Menu {
    entries: Vec<Entry>,
}

impl Menu {
    fn new(visible: &[&String], show_back: bool) -> Self {
        let mut entries = Vec::with_capacity(visible.len() + 2);
        if show_back {
            entries.push(Entry::Back);
        }
        entries.push(Entry::Filter);
        entries.extend(visible.iter().map(|item| Entry::Item((*item).clone())));
        Self { entries }
    }

    fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| match entry {
                Entry::Back => BACK_OPTION,
                Entry::Filter => FILTER_OPTION,
                Entry::Item(name) => name.as_str(),
            })
            .collect()
    }

    /// Cursor starts on the first real item
    fn default_index(&self) -> usize {
        self.entries
            .iter()
            .position(|entry| matches!(entry, Entry::Item(_)))
            .unwrap_or(0)
    }

    fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }
}

fn prompt_label(label: &str, query: &str) -> String {
    if query.is_empty() {
        label.to_string()
    } else {
        format!("{label} (filter: '{query}')")
    }
}

/// What Esc means at a level
fn dismissed(show_back: bool) -> SelectionOutcome {
    if show_back {
        SelectionOutcome::Back
    } else {
        SelectionOutcome::Exit
    }
}

fn from_prompt_error(err: dialoguer::Error) -> Result<SelectionOutcome, SelectionError> {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            Ok(SelectionOutcome::Exit)
        }
        other => Err(SelectionError::Prompt(other.to_string())),
    }
}

/// [`ISelector`] rendering to the terminal with dialoguer
pub struct DialoguerSelector {
    theme: ColorfulTheme,
    term: Term,
}

impl DialoguerSelector {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }

    fn ask_query(&self) -> Result<String, dialoguer::Error> {
        let query: String = Input::with_theme(&self.theme)
            .with_prompt("Filter (empty to clear)")
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(query.trim().to_string())
    }
}

impl Default for DialoguerSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ISelector for DialoguerSelector {
    fn select(
        &mut self,
        label: &str,
        items: &[String],
        show_back: bool,
    ) -> Result<SelectionOutcome, SelectionError> {
        if items.is_empty() {
            return Err(SelectionError::NoItems);
        }

        let mut query = String::new();
        loop {
            let visible = filter_items(items, &query);
            let menu = Menu::new(&visible, show_back);

            let choice = Select::with_theme(&self.theme)
                .with_prompt(prompt_label(label, &query))
                .items(&menu.labels())
                .default(menu.default_index())
                .interact_on_opt(&self.term);

            let index = match choice {
                Ok(Some(index)) => index,
                Ok(None) => return Ok(dismissed(show_back)),
                Err(err) => return from_prompt_error(err),
            };

            match menu.entry(index) {
                Some(Entry::Item(name)) => return Ok(SelectionOutcome::Selected(name.clone())),
                Some(Entry::Back) => return Ok(SelectionOutcome::Back),
                Some(Entry::Filter) => {
                    let next = match self.ask_query() {
                        Ok(next) => next,
                        Err(err) => return from_prompt_error(err),
                    };
                    if !next.is_empty() && filter_items(items, &next).is_empty() {
                        self.notice(&format!("No matches for '{next}'"));
                        query.clear();
                    } else {
                        query = next;
                    }
                    debug!(label, query = %query, "Filter applied");
                }
                None => return Err(SelectionError::UnknownItem(index.to_string())),
            }
        }
    }

    fn notice(&mut self, message: &str) {
        println!("{}", style(message).yellow());
    }
}
