//! Menu domain model.
//!
//! # Responsibility
//! - Define the `Menu` and `MenuItem` records shared by every layer.
//! - Normalize and validate user-supplied names, titles, slugs and urls.
//!
//! # Invariants
//! - Every menu owns exactly one root item (`is_root`, no parent).
//! - Siblings under one `(menu_id, parent_id)` have contiguous zero-based
//!   `order` values.
//! - Normalizers trim input; an empty optional field means "unset".

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable menu identifier.
pub type MenuId = Uuid;

/// Stable menu item identifier.
pub type MenuItemId = Uuid;

pub const MENU_NAME_MIN_CHARS: usize = 2;
pub const MENU_NAME_MAX_CHARS: usize = 120;
pub const ITEM_TITLE_MAX_CHARS: usize = 120;
pub const SLUG_MAX_CHARS: usize = 160;
pub const URL_MAX_CHARS: usize = 255;

/// Named navigation tree header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    /// Unique across menus when set.
    pub slug: Option<String>,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms update timestamp.
    pub updated_at: i64,
}

/// One node of a menu tree, as stored (flat, parent-linked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub menu_id: MenuId,
    /// `None` only for the root item.
    pub parent_id: Option<MenuItemId>,
    pub title: String,
    pub slug: Option<String>,
    pub url: Option<String>,
    /// Zero-based position among siblings.
    pub order: i64,
    pub is_root: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MenuItem {
    /// Returns whether this item sits directly under `parent_id`.
    pub fn is_child_of(&self, parent_id: MenuItemId) -> bool {
        self.parent_id == Some(parent_id)
    }
}

/// Input validation failures for menu fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuValidationError {
    NameTooShort { min: usize, actual: usize },
    NameTooLong { max: usize, actual: usize },
    BlankTitle,
    TitleTooLong { max: usize, actual: usize },
    SlugTooLong { max: usize, actual: usize },
    UrlTooLong { max: usize, actual: usize },
}

impl Display for MenuValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { min, actual } => write!(
                f,
                "menu name must be at least {min} characters, got {actual}"
            ),
            Self::NameTooLong { max, actual } => write!(
                f,
                "menu name must be at most {max} characters, got {actual}"
            ),
            Self::BlankTitle => write!(f, "menu item title must not be blank"),
            Self::TitleTooLong { max, actual } => write!(
                f,
                "menu item title must be at most {max} characters, got {actual}"
            ),
            Self::SlugTooLong { max, actual } => {
                write!(f, "slug must be at most {max} characters, got {actual}")
            }
            Self::UrlTooLong { max, actual } => {
                write!(f, "url must be at most {max} characters, got {actual}")
            }
        }
    }
}

impl Error for MenuValidationError {}

/// Trims a menu name and enforces its length bounds.
pub fn normalize_menu_name(value: &str) -> Result<String, MenuValidationError> {
    let trimmed = value.trim();
    let actual = trimmed.chars().count();
    if actual < MENU_NAME_MIN_CHARS {
        return Err(MenuValidationError::NameTooShort {
            min: MENU_NAME_MIN_CHARS,
            actual,
        });
    }
    if actual > MENU_NAME_MAX_CHARS {
        return Err(MenuValidationError::NameTooLong {
            max: MENU_NAME_MAX_CHARS,
            actual,
        });
    }
    Ok(trimmed.to_string())
}

/// Trims an item title and enforces its length bounds.
pub fn normalize_item_title(value: &str) -> Result<String, MenuValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MenuValidationError::BlankTitle);
    }
    let actual = trimmed.chars().count();
    if actual > ITEM_TITLE_MAX_CHARS {
        return Err(MenuValidationError::TitleTooLong {
            max: ITEM_TITLE_MAX_CHARS,
            actual,
        });
    }
    Ok(trimmed.to_string())
}

/// Normalizes an optional slug. Blank input clears the slug.
pub fn normalize_slug(value: Option<&str>) -> Result<Option<String>, MenuValidationError> {
    let Some(trimmed) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    let actual = trimmed.chars().count();
    if actual > SLUG_MAX_CHARS {
        return Err(MenuValidationError::SlugTooLong {
            max: SLUG_MAX_CHARS,
            actual,
        });
    }
    Ok(Some(trimmed.to_string()))
}

/// Normalizes an optional url. Blank input clears the url.
pub fn normalize_url(value: Option<&str>) -> Result<Option<String>, MenuValidationError> {
    let Some(trimmed) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    let actual = trimmed.chars().count();
    if actual > URL_MAX_CHARS {
        return Err(MenuValidationError::UrlTooLong {
            max: URL_MAX_CHARS,
            actual,
        });
    }
    Ok(Some(trimmed.to_string()))
}
