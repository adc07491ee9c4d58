//! Menu use-case service.
//!
//! # Responsibility
//! - Validate menu and item input above the repository layer.
//! - Enforce tree invariants: single immovable root, no cycles, same-menu
//!   parents.
//! - Return the freshly assembled menu view after every mutation.
//!
//! # Invariants
//! - The root item is never deleted, moved, or reordered.
//! - A move target must not be the item itself or one of its descendants;
//!   the repository re-checks ancestry inside the move transaction.
//! - Menu slugs are unique across menus.

use crate::model::menu::{
    normalize_item_title, normalize_menu_name, normalize_slug, normalize_url, Menu, MenuId,
    MenuItem, MenuItemId, MenuValidationError,
};
use crate::repo::menu_repo::{
    MenuItemFields, MenuItemPlacement, MenuRepoError, MenuRepository, NewMenuItem,
};
use crate::tree::assembly::MenuView;
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input for creating a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMenuRequest {
    pub name: String,
    pub slug: Option<String>,
}

/// Partial menu update. `slug: Some(None)` clears the slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMenuRequest {
    pub name: Option<String>,
    pub slug: Option<Option<String>>,
}

/// Input for appending an item under an existing parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMenuItemRequest {
    pub parent_id: MenuItemId,
    pub title: String,
    pub slug: Option<String>,
    pub url: Option<String>,
}

/// Partial item update.
///
/// `parent_id: Some(None)` moves the item directly under the root.
/// `order` repositions the item among its (possibly new) siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMenuItemRequest {
    pub parent_id: Option<Option<MenuItemId>>,
    pub title: Option<String>,
    pub slug: Option<Option<String>>,
    pub url: Option<Option<String>>,
    pub order: Option<i64>,
}

/// Errors from menu service operations.
#[derive(Debug)]
pub enum MenuServiceError {
    /// Field input failed normalization.
    Validation(MenuValidationError),
    /// Target menu does not exist.
    MenuNotFound(MenuId),
    /// Target item does not exist in the menu.
    ItemNotFound(MenuItemId),
    /// Requested parent does not exist in the menu.
    ParentNotFound(MenuItemId),
    /// Menu has no root item row.
    RootItemMissing(MenuId),
    /// Another menu already uses this slug.
    SlugTaken(String),
    /// Item was asked to become its own parent.
    SelfParent(MenuItemId),
    /// Move would place an item below one of its descendants.
    CycleDetected {
        item_id: MenuItemId,
        parent_id: MenuItemId,
    },
    /// Root item deletion attempt.
    RootNotDeletable(MenuItemId),
    /// Root item reparent or reorder attempt.
    RootNotMovable(MenuItemId),
    /// Repository-level failure.
    Repo(MenuRepoError),
}

impl Display for MenuServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MenuNotFound(id) => write!(f, "Menu {id} not found"),
            Self::ItemNotFound(id) => write!(f, "Menu item {id} not found"),
            Self::ParentNotFound(id) => write!(f, "Parent item {id} not found"),
            Self::RootItemMissing(id) => write!(f, "Root item for menu {id} not found"),
            Self::SlugTaken(slug) => write!(f, "Slug `{slug}` is already used by another menu"),
            Self::SelfParent(_) => write!(f, "Item cannot be its own parent"),
            Self::CycleDetected { .. } => write!(f, "Cannot move an item inside its descendants"),
            Self::RootNotDeletable(_) => write!(f, "Cannot delete the root item"),
            Self::RootNotMovable(_) => write!(f, "Cannot move or reorder the root item"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MenuServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MenuValidationError> for MenuServiceError {
    fn from(value: MenuValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<MenuRepoError> for MenuServiceError {
    fn from(value: MenuRepoError) -> Self {
        match value {
            MenuRepoError::MenuNotFound(id) => Self::MenuNotFound(id),
            MenuRepoError::ItemNotFound(id) => Self::ItemNotFound(id),
            MenuRepoError::ParentNotFound(id) => Self::ParentNotFound(id),
            MenuRepoError::RootItemMissing(id) => Self::RootItemMissing(id),
            MenuRepoError::SlugConflict(slug) => Self::SlugTaken(slug),
            MenuRepoError::Cycle { item_id, parent_id } => {
                Self::CycleDetected { item_id, parent_id }
            }
            other => Self::Repo(other),
        }
    }
}

pub type MenuServiceResult<T> = Result<T, MenuServiceError>;

/// Menu service facade.
pub struct MenuService<R: MenuRepository> {
    repo: R,
}

impl<R: MenuRepository> MenuService<R> {
    /// Creates service from repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a menu together with its root item.
    pub fn create_menu(&self, request: &CreateMenuRequest) -> MenuServiceResult<MenuView> {
        let name = normalize_menu_name(&request.name)?;
        let slug = normalize_slug(request.slug.as_deref())?;
        if let Some(slug) = slug.as_deref() {
            self.ensure_slug_available(slug, None)?;
        }

        let menu = self.repo.create_menu(&name, slug.as_deref())?;
        info!(
            "event=menu_create module=service status=ok menu_id={}",
            menu.id
        );
        self.get_menu(menu.id, None)
    }

    /// Lists every menu with its full tree, oldest first.
    pub fn list_menus(&self) -> MenuServiceResult<Vec<MenuView>> {
        let menus = self.repo.list_menus()?;
        if menus.is_empty() {
            return Ok(Vec::new());
        }

        let mut items_by_menu: HashMap<MenuId, Vec<MenuItem>> = HashMap::new();
        for item in self.repo.list_all_items()? {
            items_by_menu.entry(item.menu_id).or_default().push(item);
        }

        Ok(menus
            .into_iter()
            .map(|menu| {
                let items = items_by_menu.remove(&menu.id).unwrap_or_default();
                MenuView::assemble(menu, items, None)
            })
            .collect())
    }

    /// Loads one menu view, optionally truncated at `depth_limit`.
    pub fn get_menu(
        &self,
        menu_id: MenuId,
        depth_limit: Option<u32>,
    ) -> MenuServiceResult<MenuView> {
        let menu = self.require_menu(menu_id)?;
        let items = self.repo.list_items(menu_id)?;
        Ok(MenuView::assemble(menu, items, depth_limit))
    }

    /// Renames and/or re-slugs a menu; the root item mirrors both.
    pub fn update_menu(
        &self,
        menu_id: MenuId,
        request: &UpdateMenuRequest,
    ) -> MenuServiceResult<MenuView> {
        let menu = self.require_menu(menu_id)?;

        let name = request
            .name
            .as_deref()
            .map(normalize_menu_name)
            .transpose()?
            .filter(|name| *name != menu.name);
        let slug = request
            .slug
            .as_ref()
            .map(|slug| normalize_slug(slug.as_deref()))
            .transpose()?
            .filter(|slug| *slug != menu.slug);

        if let Some(Some(slug)) = slug.as_ref() {
            self.ensure_slug_available(slug, Some(menu_id))?;
        }

        if name.is_some() || slug.is_some() {
            self.repo.update_menu(
                menu_id,
                name.as_deref(),
                slug.as_ref().map(|slug| slug.as_deref()),
            )?;
            info!(
                "event=menu_update module=service status=ok menu_id={} renamed={} reslugged={}",
                menu_id,
                name.is_some(),
                slug.is_some()
            );
        }

        self.get_menu(menu_id, None)
    }

    /// Deletes a menu with all of its items.
    pub fn delete_menu(&self, menu_id: MenuId) -> MenuServiceResult<()> {
        self.repo.delete_menu(menu_id)?;
        info!(
            "event=menu_delete module=service status=ok menu_id={}",
            menu_id
        );
        Ok(())
    }

    /// Appends a new item as the last child of `request.parent_id`.
    pub fn create_item(
        &self,
        menu_id: MenuId,
        request: &CreateMenuItemRequest,
    ) -> MenuServiceResult<MenuView> {
        self.require_menu(menu_id)?;
        let parent = self.require_parent(menu_id, request.parent_id)?;

        let new_item = NewMenuItem {
            menu_id,
            parent_id: parent.id,
            title: normalize_item_title(&request.title)?,
            slug: normalize_slug(request.slug.as_deref())?,
            url: normalize_url(request.url.as_deref())?,
        };
        let item = self.repo.create_item(&new_item)?;
        info!(
            "event=menu_item_create module=service status=ok menu_id={} item_id={} order={}",
            menu_id, item.id, item.order
        );

        self.get_menu(menu_id, None)
    }

    /// Updates, moves, and/or reorders one item.
    ///
    /// On the root item a `title` renames the menu and a `slug` re-slugs it;
    /// `parent_id` and `order` are rejected.
    pub fn update_item(
        &self,
        menu_id: MenuId,
        item_id: MenuItemId,
        request: &UpdateMenuItemRequest,
    ) -> MenuServiceResult<MenuView> {
        self.require_menu(menu_id)?;
        let item = self.require_item(menu_id, item_id)?;

        if item.is_root {
            return self.update_root_item(menu_id, &item, request);
        }

        let fields = MenuItemFields {
            title: request
                .title
                .as_deref()
                .map(normalize_item_title)
                .transpose()?,
            slug: request
                .slug
                .as_ref()
                .map(|slug| normalize_slug(slug.as_deref()))
                .transpose()?,
            url: request
                .url
                .as_ref()
                .map(|url| normalize_url(url.as_deref()))
                .transpose()?,
        };

        let target_parent_id = match request.parent_id {
            None => None,
            Some(None) => Some(self.require_root(menu_id)?.id),
            Some(Some(parent_id)) => Some(self.require_parent(menu_id, parent_id)?.id),
        };

        if target_parent_id == Some(item_id) {
            return Err(MenuServiceError::SelfParent(item_id));
        }

        let reparented = target_parent_id.is_some_and(|parent_id| !item.is_child_of(parent_id));
        let placement = if reparented || request.order.is_some() {
            let parent_id = match target_parent_id.or(item.parent_id) {
                Some(parent_id) => parent_id,
                None => {
                    return Err(MenuServiceError::Repo(MenuRepoError::InvalidData(format!(
                        "non-root item {item_id} has no parent"
                    ))));
                }
            };
            Some(MenuItemPlacement {
                parent_id,
                order: request.order,
            })
        } else {
            None
        };

        if placement.is_none() && fields.is_empty() {
            return self.get_menu(menu_id, None);
        }

        self.repo.update_item(item_id, &fields, placement)?;
        info!(
            "event=menu_item_update module=service status=ok menu_id={} item_id={} reparented={} target_order={:?}",
            menu_id,
            item_id,
            reparented,
            request.order
        );

        self.get_menu(menu_id, None)
    }

    /// Deletes one item and its subtree.
    pub fn delete_item(
        &self,
        menu_id: MenuId,
        item_id: MenuItemId,
    ) -> MenuServiceResult<MenuView> {
        self.require_menu(menu_id)?;
        let item = self.require_item(menu_id, item_id)?;
        if item.is_root {
            return Err(MenuServiceError::RootNotDeletable(item_id));
        }

        self.repo.delete_item(item_id)?;
        info!(
            "event=menu_item_delete module=service status=ok menu_id={} item_id={}",
            menu_id, item_id
        );

        self.get_menu(menu_id, None)
    }

    fn update_root_item(
        &self,
        menu_id: MenuId,
        root: &MenuItem,
        request: &UpdateMenuItemRequest,
    ) -> MenuServiceResult<MenuView> {
        if request.parent_id.is_some() || request.order.is_some() {
            return Err(MenuServiceError::RootNotMovable(root.id));
        }

        let url = request
            .url
            .as_ref()
            .map(|url| normalize_url(url.as_deref()))
            .transpose()?;

        if request.title.is_some() || request.slug.is_some() {
            self.update_menu(
                menu_id,
                &UpdateMenuRequest {
                    name: request.title.clone(),
                    slug: request.slug.clone(),
                },
            )?;
        }

        if url.is_some() {
            self.repo.update_item(
                root.id,
                &MenuItemFields {
                    url,
                    ..MenuItemFields::default()
                },
                None,
            )?;
        }

        self.get_menu(menu_id, None)
    }

    fn require_menu(&self, menu_id: MenuId) -> MenuServiceResult<Menu> {
        self.repo
            .get_menu(menu_id)?
            .ok_or(MenuServiceError::MenuNotFound(menu_id))
    }

    fn require_item(&self, menu_id: MenuId, item_id: MenuItemId) -> MenuServiceResult<MenuItem> {
        self.repo
            .get_item(menu_id, item_id)?
            .ok_or(MenuServiceError::ItemNotFound(item_id))
    }

    fn require_parent(
        &self,
        menu_id: MenuId,
        parent_id: MenuItemId,
    ) -> MenuServiceResult<MenuItem> {
        self.repo
            .get_item(menu_id, parent_id)?
            .ok_or(MenuServiceError::ParentNotFound(parent_id))
    }

    fn require_root(&self, menu_id: MenuId) -> MenuServiceResult<MenuItem> {
        self.repo
            .root_item(menu_id)?
            .ok_or(MenuServiceError::RootItemMissing(menu_id))
    }

    fn ensure_slug_available(
        &self,
        slug: &str,
        current_menu: Option<MenuId>,
    ) -> MenuServiceResult<()> {
        match self.repo.slug_owner(slug)? {
            Some(owner) if Some(owner) != current_menu => {
                Err(MenuServiceError::SlugTaken(slug.to_string()))
            }
            _ => Ok(()),
        }
    }
}
