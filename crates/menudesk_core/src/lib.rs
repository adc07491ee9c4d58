//! Core domain logic for menudesk.
//! This crate is the single source of truth for menu tree invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod tree;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::menu::{Menu, MenuId, MenuItem, MenuItemId, MenuValidationError};
pub use repo::menu_repo::{
    MenuItemFields, MenuItemPlacement, MenuRepoError, MenuRepoResult, MenuRepository, NewMenuItem,
    SqliteMenuRepository,
};
pub use service::menu_service::{
    CreateMenuItemRequest, CreateMenuRequest, MenuService, MenuServiceError, MenuServiceResult,
    UpdateMenuItemRequest, UpdateMenuRequest,
};
pub use tree::assembly::{assemble_tree, AssembledTree, MenuTreeNode, MenuView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
