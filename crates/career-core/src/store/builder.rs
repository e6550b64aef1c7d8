//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use log::{debug, warn};

use super::PlanStore;
use crate::{
    error::{PlannerError, Result},
    expansion::ExpansionState,
    models::CareerPlan,
    storage::{
        MemoryStorage, SqliteStorage, Storage, CORRUPT_PLAN_KEY, EXPANSION_KEY, PLAN_KEY,
    },
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Default)]
pub struct PlanStoreBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Box<dyn Storage>>,
    reference_date: Option<Date>,
    remember_expansion: bool,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/career-planner/career.db` or
    /// `~/.local/share/career-planner/career.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given storage adapter instead of a database file.
    pub fn with_storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Keeps everything in memory; nothing survives the store.
    pub fn in_memory(self) -> Self {
        self.with_storage(MemoryStorage::new())
    }

    /// Fixes the date default day dates are computed from.
    pub fn with_reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Loads and saves expansion state alongside the plan.
    pub fn remember_expansion(mut self, remember: bool) -> Self {
        self.remember_expansion = remember;
        self
    }

    /// Builds the configured store, loading any saved plan.
    ///
    /// A missing snapshot starts the default plan. An unreadable one also
    /// starts the default plan, after its raw contents are copied to
    /// `CORRUPT_PLAN_KEY`; the reason is available from
    /// [`PlanStore::load_error`].
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `PlannerError::Database` if database initialization fails, or
    /// if an unreadable snapshot cannot be copied aside
    pub fn build(self) -> Result<PlanStore> {
        let mut storage = match self.storage {
            Some(storage) => storage,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                debug!("Opening plan database at {}", db_path.display());
                Box::new(SqliteStorage::open(&db_path)?) as Box<dyn Storage>
            }
        };

        let mut load_error = None;

        let plan = match load_snapshot::<CareerPlan>(storage.as_ref(), PLAN_KEY) {
            Ok(Some(plan)) => plan,
            Ok(None) => {
                debug!("No saved plan found, starting a new one");
                CareerPlan::default()
            }
            Err(e) => {
                // Never let the first save overwrite the only copy
                storage.copy(PLAN_KEY, CORRUPT_PLAN_KEY)?;
                warn!(
                    "Saved plan could not be loaded, starting a new one; \
                     the unreadable snapshot was kept under '{CORRUPT_PLAN_KEY}': {e}"
                );
                load_error = Some(format!(
                    "Saved plan could not be loaded ({e}). Started a new plan; \
                     the unreadable snapshot was kept under '{CORRUPT_PLAN_KEY}'."
                ));
                CareerPlan::default()
            }
        };

        let mut expansion = ExpansionState::new();
        if self.remember_expansion {
            match load_snapshot::<ExpansionState>(storage.as_ref(), EXPANSION_KEY) {
                Ok(saved) => expansion = saved.unwrap_or_default(),
                Err(e) => warn!("Saved expansion state ignored: {e}"),
            }
            expansion.retain_existing(&plan);
        }

        let mut store = PlanStore::new(
            plan,
            expansion,
            storage,
            self.reference_date,
            self.remember_expansion,
        );
        store.load_error = load_error;
        Ok(store)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("career-planner")
            .place_data_file("career.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

fn load_snapshot<T: serde::de::DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> Result<Option<T>> {
    match storage.load(key)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
