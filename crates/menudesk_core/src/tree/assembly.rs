//! Nested tree assembly from flat menu item rows.
//!
//! # Responsibility
//! - Link parent-indexed rows into one rooted, ordered tree.
//! - Truncate children below an optional depth limit.
//! - Report the realized depth of the emitted tree.
//!
//! # Invariants
//! - Children are ordered by `order ASC, id ASC`.
//! - Nodes at `depth == limit` keep an empty `children` list.
//! - Rows whose parent is missing from the input are never emitted.

use crate::model::menu::{Menu, MenuId, MenuItem, MenuItemId};
use serde::Serialize;
use std::collections::HashMap;

/// One emitted tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTreeNode {
    pub id: MenuItemId,
    pub menu_id: MenuId,
    pub parent_id: Option<MenuItemId>,
    pub title: String,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub order: i64,
    /// Distance from the root; the root is 0.
    pub depth: u32,
    pub is_root: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    fn from_item(item: MenuItem, depth: u32) -> Self {
        Self {
            id: item.id,
            menu_id: item.menu_id,
            parent_id: item.parent_id,
            title: item.title,
            slug: item.slug,
            url: item.url,
            order: item.order,
            depth,
            is_root: item.is_root,
            created_at: item.created_at,
            updated_at: item.updated_at,
            children: Vec::new(),
        }
    }

}

/// Output of [`assemble_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledTree {
    /// `None` when the input had no root row.
    pub root: Option<MenuTreeNode>,
    /// Deepest emitted level.
    pub depth: u32,
}

/// Menu header plus its assembled tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub id: MenuId,
    pub name: String,
    pub slug: Option<String>,
    pub depth: u32,
    pub created_at: i64,
    pub updated_at: i64,
    pub root_item: Option<MenuTreeNode>,
}

impl MenuView {
    /// Assembles `items` and attaches the result to `menu`.
    pub fn assemble(menu: Menu, items: Vec<MenuItem>, depth_limit: Option<u32>) -> Self {
        let tree = assemble_tree(items, depth_limit);
        Self {
            id: menu.id,
            name: menu.name,
            slug: menu.slug,
            depth: tree.depth,
            created_at: menu.created_at,
            updated_at: menu.updated_at,
            root_item: tree.root,
        }
    }
}

/// Builds a rooted tree from the flat rows of one menu.
pub fn assemble_tree(items: Vec<MenuItem>, depth_limit: Option<u32>) -> AssembledTree {
    let mut root: Option<MenuItem> = None;
    let mut children_by_parent: HashMap<MenuItemId, Vec<MenuItem>> = HashMap::new();

    for item in items {
        match item.parent_id {
            Some(parent_id) => children_by_parent.entry(parent_id).or_default().push(item),
            None => {
                // A flagged root wins over a stray parentless row.
                let replace = root
                    .as_ref()
                    .map_or(true, |current| !current.is_root && item.is_root);
                if replace {
                    root = Some(item);
                }
            }
        }
    }

    for siblings in children_by_parent.values_mut() {
        siblings.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
    }

    let Some(root) = root else {
        return AssembledTree {
            root: None,
            depth: 0,
        };
    };

    let mut max_depth = 0;
    let root = build_node(root, 0, depth_limit, &mut children_by_parent, &mut max_depth);
    AssembledTree {
        root: Some(root),
        depth: max_depth,
    }
}

fn build_node(
    item: MenuItem,
    depth: u32,
    depth_limit: Option<u32>,
    children_by_parent: &mut HashMap<MenuItemId, Vec<MenuItem>>,
    max_depth: &mut u32,
) -> MenuTreeNode {
    *max_depth = (*max_depth).max(depth);

    // Removing the entry also guarantees each row is emitted at most once.
    let children = children_by_parent.remove(&item.id).unwrap_or_default();
    let mut node = MenuTreeNode::from_item(item, depth);
    if depth_limit.is_some_and(|limit| depth >= limit) {
        return node;
    }

    node.children = children
        .into_iter()
        .map(|child| build_node(child, depth + 1, depth_limit, children_by_parent, max_depth))
        .collect();
    node
}

#[cfg(test)]
mod tests {
    use super::{assemble_tree, MenuTreeNode, MenuView};
    use crate::model::menu::{Menu, MenuItem};
    use uuid::Uuid;

    fn find_node(node: &MenuTreeNode, id: Uuid) -> Option<&MenuTreeNode> {
        if node.id == id {
            return Some(node);
        }
        node.children.iter().find_map(|child| find_node(child, id))
    }

    fn count_nodes(node: &MenuTreeNode) -> usize {
        1 + node.children.iter().map(count_nodes).sum::<usize>()
    }

    fn item(menu_id: Uuid, parent_id: Option<Uuid>, title: &str, order: i64) -> MenuItem {
        MenuItem {
            id: Uuid::new_v4(),
            menu_id,
            parent_id,
            title: title.to_string(),
            slug: None,
            url: None,
            order,
            is_root: parent_id.is_none(),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// root -> [a -> [a1 -> [a1x]], b]
    fn sample() -> (Vec<MenuItem>, Uuid, Uuid, Uuid, Uuid) {
        let menu_id = Uuid::new_v4();
        let root = item(menu_id, None, "Root", 0);
        let b = item(menu_id, Some(root.id), "B", 1);
        let a = item(menu_id, Some(root.id), "A", 0);
        let a1 = item(menu_id, Some(a.id), "A1", 0);
        let a1x = item(menu_id, Some(a1.id), "A1x", 0);
        let ids = (root.id, a.id, b.id, a1.id);
        (vec![a1x, b, a1, root, a], ids.0, ids.1, ids.2, ids.3)
    }

    #[test]
    fn empty_input_has_no_root() {
        let tree = assemble_tree(Vec::new(), None);
        assert!(tree.root.is_none());
        assert_eq!(tree.depth, 0);
    }

    #[test]
    fn links_and_orders_children_regardless_of_input_order() {
        let (items, root_id, a_id, b_id, a1_id) = sample();
        let tree = assemble_tree(items, None);

        let root = tree.root.expect("root should be present");
        assert_eq!(root.id, root_id);
        assert_eq!(root.depth, 0);
        let child_ids: Vec<_> = root.children.iter().map(|child| child.id).collect();
        assert_eq!(child_ids, vec![a_id, b_id]);
        assert_eq!(root.children[0].children[0].id, a1_id);
        assert_eq!(root.children[0].children[0].depth, 2);
        assert_eq!(count_nodes(&root), 5);
        assert_eq!(tree.depth, 3);
    }

    #[test]
    fn depth_one_keeps_only_root_and_immediate_children() {
        let (items, _, a_id, b_id, _) = sample();
        let tree = assemble_tree(items, Some(1));

        let root = tree.root.expect("root should be present");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].id, a_id);
        assert_eq!(root.children[1].id, b_id);
        assert!(root.children.iter().all(|child| child.children.is_empty()));
        assert_eq!(tree.depth, 1);
    }

    #[test]
    fn depth_zero_returns_bare_root() {
        let (items, root_id, ..) = sample();
        let tree = assemble_tree(items, Some(0));

        let root = tree.root.expect("root should be present");
        assert_eq!(root.id, root_id);
        assert!(root.children.is_empty());
        assert_eq!(tree.depth, 0);
    }

    #[test]
    fn limit_beyond_tree_height_changes_nothing() {
        let (items, ..) = sample();
        let unlimited = assemble_tree(items.clone(), None);
        let limited = assemble_tree(items, Some(10));
        assert_eq!(unlimited, limited);
    }

    #[test]
    fn orphaned_rows_are_dropped() {
        let (mut items, root_id, ..) = sample();
        let menu_id = items[0].menu_id;
        let orphan = item(menu_id, Some(Uuid::new_v4()), "Orphan", 0);
        let orphan_id = orphan.id;
        items.push(orphan);

        let tree = assemble_tree(items, None);
        let root = tree.root.expect("root should be present");
        assert_eq!(root.id, root_id);
        assert!(find_node(&root, orphan_id).is_none());
        assert_eq!(count_nodes(&root), 5);
    }

    #[test]
    fn sibling_ties_break_by_id() {
        let menu_id = Uuid::new_v4();
        let root = item(menu_id, None, "Root", 0);
        let first = item(menu_id, Some(root.id), "X", 0);
        let second = item(menu_id, Some(root.id), "Y", 0);
        let mut expected = vec![first.id, second.id];
        expected.sort();

        let tree = assemble_tree(vec![second, root, first], None);
        let root = tree.root.expect("root should be present");
        let ids: Vec<_> = root.children.iter().map(|child| child.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn menu_view_serializes_camel_case_fields() {
        let (items, root_id, ..) = sample();
        let menu = Menu {
            id: items[0].menu_id,
            name: "Main".to_string(),
            slug: Some("main".to_string()),
            created_at: 1,
            updated_at: 2,
        };
        let view = MenuView::assemble(menu, items, Some(1));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["depth"], 1);
        assert_eq!(json["createdAt"], 1);
        assert_eq!(json["rootItem"]["id"], root_id.to_string());
        assert_eq!(json["rootItem"]["isRoot"], true);
        assert_eq!(json["rootItem"]["parentId"], serde_json::Value::Null);
        assert_eq!(json["rootItem"]["children"][0]["order"], 0);
    }
}
