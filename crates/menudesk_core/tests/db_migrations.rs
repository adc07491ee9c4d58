use menudesk_core::db::migrations::latest_version;
use menudesk_core::db::{open_db, open_db_in_memory, verify_menu_schema, DbError};
use menudesk_core::{MenuRepoError, SqliteMenuRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "menus");
    assert_table_exists(&conn, "menu_items");
    assert_index_exists(&conn, "idx_menu_items_single_root");
    assert_index_exists(&conn, "idx_menu_items_siblings");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menudesk.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "menu_items");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteMenuRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        MenuRepoError::Db(DbError::SchemaBehind { found: 0, .. })
    ));
}

#[test]
fn schema_check_names_missing_table_and_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};
         CREATE TABLE menus (id TEXT PRIMARY KEY, name TEXT, slug TEXT, created_at INTEGER);",
        latest_version()
    ))
    .unwrap();

    let err = verify_menu_schema(&conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::MissingColumn {
            table: "menus",
            column: "updated_at"
        }
    ));

    conn.execute_batch("ALTER TABLE menus ADD COLUMN updated_at INTEGER;")
        .unwrap();
    let err = verify_menu_schema(&conn).unwrap_err();
    assert!(matches!(err, DbError::MissingTable("menu_items")));
}

#[test]
fn schema_rejects_second_root_for_same_menu() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO menus (id, name) VALUES ('m1', 'Main');",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO menu_items (id, menu_id, parent_id, title, sort_order, is_root)
         VALUES ('r1', 'm1', NULL, 'Main', 0, 1);",
        [],
    )
    .unwrap();

    let second_root = conn.execute(
        "INSERT INTO menu_items (id, menu_id, parent_id, title, sort_order, is_root)
         VALUES ('r2', 'm1', NULL, 'Main', 0, 1);",
        [],
    );
    assert!(second_root.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    assert_schema_object(conn, "table", table_name);
}

fn assert_index_exists(conn: &Connection, index_name: &str) {
    assert_schema_object(conn, "index", index_name);
}

fn assert_schema_object(conn: &Connection, kind: &str, name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = ?1 AND name = ?2
            );",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "{kind} {name} does not exist");
}
