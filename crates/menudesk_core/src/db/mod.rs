//! Menu store bootstrap: connection setup, migrations, schema readiness.
//!
//! # Responsibility
//! - Open SQLite connections configured for the menu store.
//! - Bring the schema to the version this binary ships.
//! - Refuse connections whose schema cannot hold menus.
//!
//! # Invariants
//! - The schema version lives in `PRAGMA user_version`.
//! - A failed migration leaves the store at its previous version.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::verify_menu_schema;

pub type DbResult<T> = Result<T, DbError>;

/// Storage failures below the repository layer.
#[derive(Debug)]
pub enum DbError {
    /// Driver error outside migration.
    Sqlite(rusqlite::Error),
    /// Store was written by a newer binary.
    SchemaTooNew { found: u32, supported: u32 },
    /// Store is behind the version this binary expects.
    SchemaBehind { found: u32, expected: u32 },
    /// One migration step failed and was rolled back.
    MigrationFailed {
        version: u32,
        name: &'static str,
        source: rusqlite::Error,
    },
    /// A table the menu store relies on is absent.
    MissingTable(&'static str),
    /// A column the menu store relies on is absent.
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "menu store schema v{found} is newer than this binary supports (v{supported})"
            ),
            Self::SchemaBehind { found, expected } => write!(
                f,
                "menu store schema v{found} has not been migrated to v{expected}"
            ),
            Self::MigrationFailed {
                version,
                name,
                source,
            } => write!(f, "migration v{version} `{name}` failed: {source}"),
            Self::MissingTable(table) => write!(f, "menu store is missing table `{table}`"),
            Self::MissingColumn { table, column } => {
                write!(f, "menu store table `{table}` is missing column `{column}`")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) | Self::MigrationFailed { source: err, .. } => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
