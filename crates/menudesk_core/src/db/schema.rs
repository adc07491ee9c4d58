//! Readiness check run before a repository touches a connection.

use super::migrations::{latest_version, schema_version};
use super::{DbError, DbResult};
use rusqlite::Connection;

const MENU_COLUMNS: &[&str] = &["id", "name", "slug", "created_at", "updated_at"];

const ITEM_COLUMNS: &[&str] = &[
    "id",
    "menu_id",
    "parent_id",
    "title",
    "slug",
    "url",
    "sort_order",
    "is_root",
    "created_at",
    "updated_at",
];

/// Tables and columns the menu repository reads and writes.
const MENU_SCHEMA: [(&str, &[&str]); 2] = [("menus", MENU_COLUMNS), ("menu_items", ITEM_COLUMNS)];

/// Fails unless `conn` is migrated and carries every menu table and column.
pub fn verify_menu_schema(conn: &Connection) -> DbResult<()> {
    let expected = latest_version();
    let found = schema_version(conn)?;
    if found > expected {
        return Err(DbError::SchemaTooNew {
            found,
            supported: expected,
        });
    }
    if found < expected {
        return Err(DbError::SchemaBehind { found, expected });
    }

    for (table, columns) in MENU_SCHEMA {
        let present = table_columns(conn, table)?;
        if present.is_empty() {
            return Err(DbError::MissingTable(table));
        }
        for &column in columns {
            if !present.iter().any(|name| name == column) {
                return Err(DbError::MissingColumn { table, column });
            }
        }
    }
    Ok(())
}

/// Column names of `table`; empty when the table does not exist.
fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}
