use std::path::PathBuf;

use career_core::{PlanStore, PlanStoreBuilder};
use jiff::civil::{date, Date};
use tempfile::TempDir;

/// Date every test store treats as today.
pub const REFERENCE_DATE: Date = date(2024, 6, 15);

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("career.db");
    (temp_dir, db_path)
}

/// Opens a store on `db_path` that remembers expansion state.
pub fn open_store(db_path: &PathBuf) -> PlanStore {
    PlanStoreBuilder::new()
        .with_database_path(Some(db_path))
        .with_reference_date(REFERENCE_DATE)
        .remember_expansion(true)
        .build()
        .expect("Failed to create store")
}

/// Helper function to create an in-memory test store
pub fn create_memory_store() -> PlanStore {
    PlanStoreBuilder::new()
        .in_memory()
        .with_reference_date(REFERENCE_DATE)
        .build()
        .expect("Failed to create store")
}
