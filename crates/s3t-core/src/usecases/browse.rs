//! Interactive browse use case
//!
//! Drives the Bucket → Namespace → Table navigation state machine. Each
//! level's listing is fetched once per parent and kept in
//! [`NavigationState`]; going Back re-shows the cached list without calling
//! the service again. Choosing a new parent clears the caches below it.
//!
//! Choosing a table ends the session with that table's record.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    domain::{
        names_of, DomainError, NavigationAction, NavigationLevel, NavigationState, RemoteError,
        ResourceArn, Table,
    },
    ports::{ISelector, ITablesService, SelectionError, SelectionOutcome},
    usecases::lister::TablesLister,
};

/// Errors that end a browse session abnormally
#[derive(Debug, Error)]
pub enum NavigationError {
    /// A listing call failed
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The picker failed
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The session was started without the context its level needs
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The picker returned a name that was not offered
fn unknown_selection(label: &str, name: String) -> SelectionError {
    warn!(label, item = %name, "Picker returned an item that was not listed");
    SelectionError::UnknownItem(name)
}

/// How a browse session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The user picked a table
    TableSelected(Table),
    /// The user left, or there was nothing to browse
    Exited,
}

/// Use case for one interactive browse session
///
/// Owns its [`NavigationState`] exclusively for the lifetime of the session.
pub struct BrowseTablesUseCase<S: ISelector> {
    lister: TablesLister,
    selector: S,
    state: NavigationState,
    selected_table: Option<Table>,
}

impl<S: ISelector> BrowseTablesUseCase<S> {
    /// Creates a new BrowseTablesUseCase
    ///
    /// # Arguments
    ///
    /// * `service` - Remote tables service used for listings
    /// * `selector` - Interactive picker shown at every level
    pub fn new(service: Arc<dyn ITablesService>, selector: S) -> Self {
        Self {
            lister: TablesLister::new(service),
            selector,
            state: NavigationState::new(),
            selected_table: None,
        }
    }

    /// Pre-selects the parent context so a session can start below the bucket level
    pub fn seed(&mut self, bucket: &str, bucket_arn: ResourceArn, namespace: Option<&str>) {
        self.state.seed(bucket, bucket_arn, namespace);
    }

    /// Current navigation state (level, caches, selected path)
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The table chosen in the last session, if any
    pub fn selected_table(&self) -> Option<&Table> {
        self.selected_table.as_ref()
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Runs the session starting at `start`
    ///
    /// # Errors
    ///
    /// Any listing or picker failure ends the session immediately and is
    /// returned. Starting at `Namespace` needs a seeded bucket; starting at
    /// `Table` needs a seeded bucket and namespace.
    pub async fn run(&mut self, start: NavigationLevel) -> Result<NavigationOutcome, NavigationError> {
        self.check_context(start)?;
        self.state.set_level(start);
        self.selected_table = None;

        loop {
            let level = self.state.level();
            let action = match level {
                NavigationLevel::TableBucket => self.browse_table_buckets().await?,
                NavigationLevel::Namespace => self.browse_namespaces().await?,
                NavigationLevel::Table => self.browse_tables().await?,
            };

            debug!(level = %level, action = %action, "Navigation step");

            match (action, level) {
                (NavigationAction::Exit, _) | (NavigationAction::Back, NavigationLevel::TableBucket) => {
                    return Ok(NavigationOutcome::Exited);
                }
                (NavigationAction::Select, NavigationLevel::Table) => {
                    return Ok(self
                        .selected_table
                        .clone()
                        .map_or(NavigationOutcome::Exited, NavigationOutcome::TableSelected));
                }
                (NavigationAction::Select, _) => {
                    if let Some(child) = level.child() {
                        self.state.set_level(child);
                    }
                }
                (NavigationAction::Back, _) => {
                    if let Some(parent) = level.parent() {
                        self.state.set_level(parent);
                    }
                }
            }
        }
    }

    fn check_context(&self, start: NavigationLevel) -> Result<(), DomainError> {
        let missing = match start {
            NavigationLevel::TableBucket => None,
            NavigationLevel::Namespace => self
                .state
                .selected_bucket_arn()
                .is_none()
                .then_some("table bucket"),
            NavigationLevel::Table => {
                if self.state.selected_bucket_arn().is_none() {
                    Some("table bucket")
                } else if self.state.selected_namespace().is_none() {
                    Some("namespace")
                } else {
                    None
                }
            }
        };

        match missing {
            Some(missing) => Err(DomainError::MissingContext {
                level: start.to_string(),
                missing: missing.to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn browse_table_buckets(&mut self) -> Result<NavigationAction, NavigationError> {
        if self.state.buckets().is_none() {
            let buckets = self.lister.list_table_buckets_all(None).await?;
            self.state.cache_buckets(buckets);
        }

        let buckets = self.state.buckets().unwrap_or_default();
        if buckets.is_empty() {
            self.selector.notice("No table buckets found");
            return Ok(NavigationAction::Exit);
        }

        let names = names_of(buckets);
        let name = match self.selector.select("Select Table Bucket", &names, false)? {
            SelectionOutcome::Selected(name) => name,
            SelectionOutcome::Back => return Ok(NavigationAction::Back),
            SelectionOutcome::Exit => return Ok(NavigationAction::Exit),
        };

        let bucket = buckets
            .iter()
            .find(|bucket| bucket.name == name)
            .cloned()
            .ok_or_else(|| unknown_selection("Select Table Bucket", name))?;

        info!(table_bucket = %bucket.name, "Selected table bucket");
        self.state.select_bucket(&bucket);
        Ok(NavigationAction::Select)
    }

    async fn browse_namespaces(&mut self) -> Result<NavigationAction, NavigationError> {
        let Some(bucket_arn) = self.state.selected_bucket_arn().cloned() else {
            return Ok(NavigationAction::Back);
        };

        if self.state.namespaces().is_none() {
            let namespaces = self.lister.list_namespaces_all(&bucket_arn, None).await?;
            self.state.cache_namespaces(namespaces);
        }

        let namespaces = self.state.namespaces().unwrap_or_default();
        if namespaces.is_empty() {
            let bucket = self.state.selected_bucket().unwrap_or_default();
            self.selector
                .notice(&format!("No namespaces found in table bucket '{bucket}'"));
            return Ok(NavigationAction::Back);
        }

        let names = names_of(namespaces);
        let name = match self.selector.select("Select Namespace", &names, true)? {
            SelectionOutcome::Selected(name) => name,
            SelectionOutcome::Back => return Ok(NavigationAction::Back),
            SelectionOutcome::Exit => return Ok(NavigationAction::Exit),
        };

        if !names.contains(&name) {
            return Err(unknown_selection("Select Namespace", name).into());
        }

        info!(namespace = %name, "Selected namespace");
        self.state.select_namespace(&name);
        Ok(NavigationAction::Select)
    }

    async fn browse_tables(&mut self) -> Result<NavigationAction, NavigationError> {
        let (Some(bucket_arn), Some(namespace)) = (
            self.state.selected_bucket_arn().cloned(),
            self.state.selected_namespace().map(str::to_string),
        ) else {
            return Ok(NavigationAction::Back);
        };

        if self.state.tables().is_none() {
            let tables = self
                .lister
                .list_tables_all(&bucket_arn, &namespace, None)
                .await?;
            self.state.cache_tables(tables);
        }

        let tables = self.state.tables().unwrap_or_default();
        if tables.is_empty() {
            self.selector
                .notice(&format!("No tables found in namespace '{namespace}'"));
            return Ok(NavigationAction::Back);
        }

        let names = names_of(tables);
        let name = match self.selector.select("Select Table", &names, true)? {
            SelectionOutcome::Selected(name) => name,
            SelectionOutcome::Back => return Ok(NavigationAction::Back),
            SelectionOutcome::Exit => return Ok(NavigationAction::Exit),
        };

        let table = tables
            .iter()
            .find(|table| table.name == name)
            .cloned()
            .ok_or_else(|| unknown_selection("Select Table", name))?;

        info!(namespace = %namespace, table = %table.name, "Selected table");
        self.selected_table = Some(table);
        Ok(NavigationAction::Select)
    }
}
