//! Interactive selection port (driving-side UI collaborator)
//!
//! The browse use case asks the user to pick from a list at every level.
//! How the list is rendered, how typing filters it and how Back/Exit are
//! signalled is the adapter's business; the use case only sees a
//! [`SelectionOutcome`].

use thiserror::Error;

/// Label of the synthetic "go back" entry shown by pickers
pub const BACK_OPTION: &str = ".. (Back)";

/// Result of one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The user chose this item (one of the offered names)
    Selected(String),
    /// The user asked to return to the previous level
    Back,
    /// The user aborted (Ctrl+C)
    Exit,
}

/// Errors raised by a picker
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A prompt was requested with nothing to choose from
    #[error("no items to select")]
    NoItems,

    /// The terminal prompt failed
    #[error("selection failed: {0}")]
    Prompt(String),

    /// The picker returned a name that was not offered
    #[error("selected item '{0}' is not in the list")]
    UnknownItem(String),
}

/// Port trait for the interactive picker
///
/// Implementations block until the user answers.
pub trait ISelector {
    /// Presents `items` under `label` and waits for a choice
    ///
    /// When `show_back` is true, a Back entry is offered in addition to the
    /// items. Case-insensitive substring filtering while typing is part of
    /// this contract.
    ///
    /// # Errors
    /// [`SelectionError::NoItems`] if `items` is empty.
    fn select(
        &mut self,
        label: &str,
        items: &[String],
        show_back: bool,
    ) -> Result<SelectionOutcome, SelectionError>;

    /// Shows an informational line (e.g. "No tables found ...")
    fn notice(&mut self, message: &str);
}

/// Case-insensitive substring filter used by pickers
///
/// An empty query matches everything. Order is preserved.
pub fn filter_items<'a>(items: &'a [String], query: &str) -> Vec<&'a String> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .collect()
}
