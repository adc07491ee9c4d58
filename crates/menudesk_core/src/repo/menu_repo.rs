//! Menu repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for menus and their parent-linked items.
//! - Keep SQL details and sibling ordering behavior inside the repository.
//!
//! # Invariants
//! - Sibling listing is deterministic: `sort_order ASC, id ASC`.
//! - Every multi-row mutation runs in one `IMMEDIATE` transaction and leaves
//!   the affected sibling sets contiguous from 0.
//! - The root item is written only together with its menu.
//! - Ancestry is re-checked inside the move transaction, so concurrent moves
//!   cannot link two items under each other.

use crate::db::{verify_menu_schema, DbError};
use crate::model::menu::{Menu, MenuId, MenuItem, MenuItemId};
use rusqlite::{
    params, Connection, ErrorCode, OptionalExtension, Row, Transaction, TransactionBehavior,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const MENU_SELECT_SQL: &str = "SELECT
    id,
    name,
    slug,
    created_at,
    updated_at
FROM menus";

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    menu_id,
    parent_id,
    title,
    slug,
    url,
    sort_order,
    is_root,
    created_at,
    updated_at
FROM menu_items";

/// Result type used by menu repository operations.
pub type MenuRepoResult<T> = Result<T, MenuRepoError>;

/// Errors from menu repository operations.
#[derive(Debug)]
pub enum MenuRepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Target menu does not exist.
    MenuNotFound(MenuId),
    /// Target item does not exist.
    ItemNotFound(MenuItemId),
    /// Requested parent does not exist in the item's menu.
    ParentNotFound(MenuItemId),
    /// Menu exists but has no root item row.
    RootItemMissing(MenuId),
    /// Another menu already holds this slug.
    SlugConflict(String),
    /// Target parent lies inside the moved item's subtree.
    Cycle {
        item_id: MenuItemId,
        parent_id: MenuItemId,
    },
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for MenuRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MenuNotFound(id) => write!(f, "menu not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "menu item not found: {id}"),
            Self::ParentNotFound(id) => write!(f, "parent item not found: {id}"),
            Self::RootItemMissing(id) => write!(f, "root item for menu {id} not found"),
            Self::SlugConflict(slug) => write!(f, "menu slug already in use: {slug}"),
            Self::Cycle { item_id, parent_id } => {
                write!(f, "item {parent_id} is inside the subtree of {item_id}")
            }
            Self::InvalidData(message) => write!(f, "invalid menu data: {message}"),
        }
    }
}

impl Error for MenuRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for MenuRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for MenuRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Insert payload for one non-root item. Fields are already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub menu_id: MenuId,
    pub parent_id: MenuItemId,
    pub title: String,
    pub slug: Option<String>,
    pub url: Option<String>,
}

/// Partial update of an item's descriptive fields.
///
/// Outer `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemFields {
    pub title: Option<String>,
    pub slug: Option<Option<String>>,
    pub url: Option<Option<String>>,
}

impl MenuItemFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.slug.is_none() && self.url.is_none()
    }
}

/// Target position for a move or reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItemPlacement {
    pub parent_id: MenuItemId,
    /// Sibling index, clamped to `0..=len`. `None` keeps the current slot,
    /// or appends when the parent changes.
    pub order: Option<i64>,
}

/// Repository interface for menu operations.
pub trait MenuRepository {
    /// Creates a menu and its root item atomically.
    fn create_menu(&self, name: &str, slug: Option<&str>) -> MenuRepoResult<Menu>;
    /// Loads one menu by id.
    fn get_menu(&self, menu_id: MenuId) -> MenuRepoResult<Option<Menu>>;
    /// Lists all menus by creation time.
    fn list_menus(&self) -> MenuRepoResult<Vec<Menu>>;
    /// Updates menu name and/or slug, mirroring both onto the root item.
    fn update_menu(
        &self,
        menu_id: MenuId,
        name: Option<&str>,
        slug: Option<Option<&str>>,
    ) -> MenuRepoResult<()>;
    /// Deletes a menu and all of its items.
    fn delete_menu(&self, menu_id: MenuId) -> MenuRepoResult<()>;
    /// Returns the menu currently holding `slug`, if any.
    fn slug_owner(&self, slug: &str) -> MenuRepoResult<Option<MenuId>>;
    /// Lists every item of one menu.
    fn list_items(&self, menu_id: MenuId) -> MenuRepoResult<Vec<MenuItem>>;
    /// Lists every item of every menu.
    fn list_all_items(&self) -> MenuRepoResult<Vec<MenuItem>>;
    /// Loads one item scoped to its menu.
    fn get_item(&self, menu_id: MenuId, item_id: MenuItemId) -> MenuRepoResult<Option<MenuItem>>;
    /// Loads the root item of one menu.
    fn root_item(&self, menu_id: MenuId) -> MenuRepoResult<Option<MenuItem>>;
    /// Appends one item at the end of its parent's children.
    fn create_item(&self, item: &NewMenuItem) -> MenuRepoResult<MenuItem>;
    /// Applies field changes and an optional move in one transaction.
    fn update_item(
        &self,
        item_id: MenuItemId,
        fields: &MenuItemFields,
        placement: Option<MenuItemPlacement>,
    ) -> MenuRepoResult<()>;
    /// Deletes one item with its subtree and closes the sibling gap.
    fn delete_item(&self, item_id: MenuItemId) -> MenuRepoResult<()>;
}

/// SQLite-backed menu repository.
pub struct SqliteMenuRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMenuRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> MenuRepoResult<Self> {
        verify_menu_schema(conn)?;
        Ok(Self { conn })
    }
}

impl MenuRepository for SqliteMenuRepository<'_> {
    fn create_menu(&self, name: &str, slug: Option<&str>) -> MenuRepoResult<Menu> {
        let menu_id = Uuid::new_v4();
        let root_id = Uuid::new_v4();

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO menus (id, name, slug) VALUES (?1, ?2, ?3);",
            params![menu_id.to_string(), name, slug],
        )
        .map_err(|err| slug_conflict_or(err, slug))?;
        tx.execute(
            "INSERT INTO menu_items (
                id,
                menu_id,
                parent_id,
                title,
                slug,
                url,
                sort_order,
                is_root
            ) VALUES (?1, ?2, NULL, ?3, ?4, NULL, 0, 1);",
            params![root_id.to_string(), menu_id.to_string(), name, slug],
        )?;
        tx.commit()?;

        self.get_menu(menu_id)?
            .ok_or(MenuRepoError::MenuNotFound(menu_id))
    }

    fn get_menu(&self, menu_id: MenuId) -> MenuRepoResult<Option<Menu>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MENU_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([menu_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_menu_row(row)?));
        }
        Ok(None)
    }

    fn list_menus(&self) -> MenuRepoResult<Vec<Menu>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MENU_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut menus = Vec::new();
        while let Some(row) = rows.next()? {
            menus.push(parse_menu_row(row)?);
        }
        Ok(menus)
    }

    fn update_menu(
        &self,
        menu_id: MenuId,
        name: Option<&str>,
        slug: Option<Option<&str>>,
    ) -> MenuRepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !menu_exists(&tx, menu_id)? {
            return Err(MenuRepoError::MenuNotFound(menu_id));
        }
        if !root_exists(&tx, menu_id)? {
            return Err(MenuRepoError::RootItemMissing(menu_id));
        }

        if let Some(name) = name {
            tx.execute(
                "UPDATE menus
                 SET name = ?2,
                     updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?1;",
                params![menu_id.to_string(), name],
            )?;
            tx.execute(
                "UPDATE menu_items
                 SET title = ?2,
                     updated_at = (strftime('%s', 'now') * 1000)
                 WHERE menu_id = ?1
                   AND is_root = 1;",
                params![menu_id.to_string(), name],
            )?;
        }

        if let Some(slug) = slug {
            tx.execute(
                "UPDATE menus
                 SET slug = ?2,
                     updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?1;",
                params![menu_id.to_string(), slug],
            )
            .map_err(|err| slug_conflict_or(err, slug))?;
            tx.execute(
                "UPDATE menu_items
                 SET slug = ?2,
                     updated_at = (strftime('%s', 'now') * 1000)
                 WHERE menu_id = ?1
                   AND is_root = 1;",
                params![menu_id.to_string(), slug],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn delete_menu(&self, menu_id: MenuId) -> MenuRepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "DELETE FROM menu_items WHERE menu_id = ?1;",
            [menu_id.to_string()],
        )?;
        let changed = tx.execute("DELETE FROM menus WHERE id = ?1;", [menu_id.to_string()])?;
        if changed == 0 {
            return Err(MenuRepoError::MenuNotFound(menu_id));
        }
        tx.commit()?;
        Ok(())
    }

    fn slug_owner(&self, slug: &str) -> MenuRepoResult<Option<MenuId>> {
        let owner: Option<String> = self
            .conn
            .query_row("SELECT id FROM menus WHERE slug = ?1;", [slug], |row| {
                row.get(0)
            })
            .optional()?;
        owner
            .map(|value| parse_uuid(&value, "menus.id"))
            .transpose()
    }

    fn list_items(&self, menu_id: MenuId) -> MenuRepoResult<Vec<MenuItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE menu_id = ?1
             ORDER BY parent_id ASC, sort_order ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([menu_id.to_string()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn list_all_items(&self) -> MenuRepoResult<Vec<MenuItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             ORDER BY menu_id ASC, parent_id ASC, sort_order ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn get_item(&self, menu_id: MenuId, item_id: MenuItemId) -> MenuRepoResult<Option<MenuItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE id = ?1
               AND menu_id = ?2;"
        ))?;
        let mut rows = stmt.query([item_id.to_string(), menu_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }
        Ok(None)
    }

    fn root_item(&self, menu_id: MenuId) -> MenuRepoResult<Option<MenuItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE menu_id = ?1
               AND is_root = 1;"
        ))?;
        let mut rows = stmt.query([menu_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }
        Ok(None)
    }

    fn create_item(&self, item: &NewMenuItem) -> MenuRepoResult<MenuItem> {
        let item_id = Uuid::new_v4();

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !item_in_menu(&tx, item.menu_id, item.parent_id)? {
            return Err(MenuRepoError::ParentNotFound(item.parent_id));
        }
        let sort_order = next_sort_order(&tx, item.menu_id, item.parent_id)?;
        tx.execute(
            "INSERT INTO menu_items (
                id,
                menu_id,
                parent_id,
                title,
                slug,
                url,
                sort_order,
                is_root
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0);",
            params![
                item_id.to_string(),
                item.menu_id.to_string(),
                item.parent_id.to_string(),
                item.title.as_str(),
                item.slug.as_deref(),
                item.url.as_deref(),
                sort_order,
            ],
        )?;
        tx.commit()?;

        load_required_item(self.conn, item_id)
    }

    fn update_item(
        &self,
        item_id: MenuItemId,
        fields: &MenuItemFields,
        placement: Option<MenuItemPlacement>,
    ) -> MenuRepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let item = load_required_item(&tx, item_id)?;

        if let Some(placement) = placement {
            place_item(&tx, &item, placement)?;
        }
        apply_fields(&tx, item_id, fields)?;

        tx.commit()?;
        Ok(())
    }

    fn delete_item(&self, item_id: MenuItemId) -> MenuRepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let item = load_required_item(&tx, item_id)?;

        delete_subtree(&tx, item_id)?;
        close_order_gap(&tx, item.menu_id, item.parent_id, item.order)?;

        tx.commit()?;
        Ok(())
    }
}

fn place_item(
    conn: &Connection,
    item: &MenuItem,
    placement: MenuItemPlacement,
) -> MenuRepoResult<()> {
    let parent_id = placement.parent_id;

    if !item.is_child_of(parent_id) {
        if !item_in_menu(conn, item.menu_id, parent_id)? {
            return Err(MenuRepoError::ParentNotFound(parent_id));
        }
        if subtree_contains(conn, item.id, parent_id)? {
            return Err(MenuRepoError::Cycle {
                item_id: item.id,
                parent_id,
            });
        }

        close_order_gap(conn, item.menu_id, item.parent_id, item.order)?;
        let sort_order = next_sort_order(conn, item.menu_id, parent_id)?;
        conn.execute(
            "UPDATE menu_items
             SET parent_id = ?2,
                 sort_order = ?3,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![item.id.to_string(), parent_id.to_string(), sort_order],
        )?;
    }

    if let Some(order) = placement.order {
        let mut sibling_ids = list_child_ids(conn, item.menu_id, Some(parent_id))?;
        sibling_ids.retain(|id| *id != item.id);

        let index = order.clamp(0, sibling_ids.len() as i64) as usize;
        sibling_ids.insert(index, item.id);
        resequence(conn, &sibling_ids)?;
    }

    Ok(())
}

fn apply_fields(
    conn: &Connection,
    item_id: MenuItemId,
    fields: &MenuItemFields,
) -> MenuRepoResult<()> {
    if let Some(title) = fields.title.as_deref() {
        conn.execute(
            "UPDATE menu_items
             SET title = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![item_id.to_string(), title],
        )?;
    }
    if let Some(slug) = fields.slug.as_ref() {
        conn.execute(
            "UPDATE menu_items
             SET slug = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![item_id.to_string(), slug.as_deref()],
        )?;
    }
    if let Some(url) = fields.url.as_ref() {
        conn.execute(
            "UPDATE menu_items
             SET url = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![item_id.to_string(), url.as_deref()],
        )?;
    }
    Ok(())
}

fn load_required_item(conn: &Connection, item_id: MenuItemId) -> MenuRepoResult<MenuItem> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([item_id.to_string()])?;
    if let Some(row) = rows.next()? {
        return parse_item_row(row);
    }
    Err(MenuRepoError::ItemNotFound(item_id))
}

fn menu_exists(conn: &Connection, menu_id: MenuId) -> MenuRepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM menus WHERE id = ?1);",
        [menu_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn root_exists(conn: &Connection, menu_id: MenuId) -> MenuRepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM menu_items WHERE menu_id = ?1 AND is_root = 1
        );",
        [menu_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn item_in_menu(conn: &Connection, menu_id: MenuId, item_id: MenuItemId) -> MenuRepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM menu_items WHERE id = ?1 AND menu_id = ?2);",
        [item_id.to_string(), menu_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Whether `candidate` is `root_id` itself or one of its descendants.
fn subtree_contains(
    conn: &Connection,
    root_id: MenuItemId,
    candidate: MenuItemId,
) -> MenuRepoResult<bool> {
    // `UNION` deduplicates, so the walk stops even on already-looped links.
    let found: i64 = conn.query_row(
        "WITH RECURSIVE subtree(id) AS (
            SELECT ?1
            UNION
            SELECT child.id
            FROM menu_items child
            INNER JOIN subtree parent ON child.parent_id = parent.id
        )
        SELECT EXISTS(SELECT 1 FROM subtree WHERE id = ?2);",
        [root_id.to_string(), candidate.to_string()],
        |row| row.get(0),
    )?;
    Ok(found == 1)
}

fn next_sort_order(
    conn: &Connection,
    menu_id: MenuId,
    parent_id: MenuItemId,
) -> MenuRepoResult<i64> {
    let next = conn.query_row(
        "SELECT COALESCE(MAX(sort_order), -1) + 1
         FROM menu_items
         WHERE menu_id = ?1
           AND parent_id = ?2;",
        [menu_id.to_string(), parent_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(next)
}

/// Shifts siblings after `removed_order` one slot down.
fn close_order_gap(
    conn: &Connection,
    menu_id: MenuId,
    parent_id: Option<MenuItemId>,
    removed_order: i64,
) -> MenuRepoResult<()> {
    // `IS` matches NULL parents too.
    conn.execute(
        "UPDATE menu_items
         SET sort_order = sort_order - 1,
             updated_at = (strftime('%s', 'now') * 1000)
         WHERE menu_id = ?1
           AND parent_id IS ?2
           AND sort_order > ?3;",
        params![
            menu_id.to_string(),
            parent_id.map(|value| value.to_string()),
            removed_order,
        ],
    )?;
    Ok(())
}

fn list_child_ids(
    conn: &Connection,
    menu_id: MenuId,
    parent_id: Option<MenuItemId>,
) -> MenuRepoResult<Vec<MenuItemId>> {
    let mut stmt = conn.prepare(
        "SELECT id
         FROM menu_items
         WHERE menu_id = ?1
           AND parent_id IS ?2
         ORDER BY sort_order ASC, id ASC;",
    )?;
    let mut rows = stmt.query(params![
        menu_id.to_string(),
        parent_id.map(|value| value.to_string()),
    ])?;
    let mut ids = Vec::new();
    while let Some(row) = rows.next()? {
        let value: String = row.get(0)?;
        ids.push(parse_uuid(&value, "menu_items.id")?);
    }
    Ok(ids)
}

fn resequence(conn: &Connection, ordered_ids: &[MenuItemId]) -> MenuRepoResult<()> {
    for (index, id) in ordered_ids.iter().enumerate() {
        conn.execute(
            "UPDATE menu_items
             SET sort_order = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1
               AND sort_order <> ?2;",
            params![id.to_string(), index as i64],
        )?;
    }
    Ok(())
}

fn delete_subtree(conn: &Connection, item_id: MenuItemId) -> MenuRepoResult<()> {
    conn.execute(
        "WITH RECURSIVE subtree(id) AS (
            SELECT id
            FROM menu_items
            WHERE id = ?1
            UNION
            SELECT child.id
            FROM menu_items child
            INNER JOIN subtree parent ON child.parent_id = parent.id
        )
        DELETE FROM menu_items
        WHERE id IN (SELECT id FROM subtree);",
        [item_id.to_string()],
    )?;
    Ok(())
}

/// Maps a `UNIQUE` failure on `menus.slug` to [`MenuRepoError::SlugConflict`].
fn slug_conflict_or(err: rusqlite::Error, slug: Option<&str>) -> MenuRepoError {
    if let (rusqlite::Error::SqliteFailure(failure, Some(message)), Some(slug)) = (&err, slug) {
        if failure.code == ErrorCode::ConstraintViolation && message.contains("menus.slug") {
            return MenuRepoError::SlugConflict(slug.to_string());
        }
    }
    err.into()
}

fn parse_menu_row(row: &Row<'_>) -> MenuRepoResult<Menu> {
    let id_text: String = row.get("id")?;
    Ok(Menu {
        id: parse_uuid(&id_text, "menus.id")?,
        name: row.get("name")?,
        slug: row.get("slug")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_item_row(row: &Row<'_>) -> MenuRepoResult<MenuItem> {
    let id_text: String = row.get("id")?;
    let menu_id_text: String = row.get("menu_id")?;
    let parent_id = row
        .get::<_, Option<String>>("parent_id")?
        .map(|value| parse_uuid(&value, "menu_items.parent_id"))
        .transpose()?;

    let is_root = match row.get::<_, i64>("is_root")? {
        0 => false,
        1 => true,
        other => {
            return Err(MenuRepoError::InvalidData(format!(
                "invalid is_root value `{other}` in menu_items.is_root"
            )));
        }
    };

    Ok(MenuItem {
        id: parse_uuid(&id_text, "menu_items.id")?,
        menu_id: parse_uuid(&menu_id_text, "menu_items.menu_id")?,
        parent_id,
        title: row.get("title")?,
        slug: row.get("slug")?,
        url: row.get("url")?,
        order: row.get("sort_order")?,
        is_root,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_uuid(value: &str, column: &'static str) -> MenuRepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| MenuRepoError::InvalidData(format!("invalid uuid `{value}` in {column}")))
}
