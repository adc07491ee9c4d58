use menudesk_core::model::menu::{
    normalize_item_title, normalize_menu_name, normalize_slug, normalize_url, MenuItem,
    ITEM_TITLE_MAX_CHARS, SLUG_MAX_CHARS, URL_MAX_CHARS,
};
use menudesk_core::MenuValidationError;
use uuid::Uuid;

#[test]
fn menu_name_is_trimmed_and_bounded() {
    assert_eq!(normalize_menu_name("  Main nav ").unwrap(), "Main nav");
    assert_eq!(
        normalize_menu_name(" A ").unwrap_err(),
        MenuValidationError::NameTooShort { min: 2, actual: 1 }
    );
    assert!(matches!(
        normalize_menu_name(&"x".repeat(121)).unwrap_err(),
        MenuValidationError::NameTooLong { max: 120, .. }
    ));
}

#[test]
fn item_title_rejects_blank_and_overlong_values() {
    assert_eq!(normalize_item_title(" Users ").unwrap(), "Users");
    assert_eq!(
        normalize_item_title("   ").unwrap_err(),
        MenuValidationError::BlankTitle
    );
    assert!(normalize_item_title(&"t".repeat(ITEM_TITLE_MAX_CHARS)).is_ok());
    assert!(normalize_item_title(&"t".repeat(ITEM_TITLE_MAX_CHARS + 1)).is_err());
}

#[test]
fn slug_blank_means_unset() {
    assert_eq!(normalize_slug(None).unwrap(), None);
    assert_eq!(normalize_slug(Some("   ")).unwrap(), None);
    assert_eq!(
        normalize_slug(Some(" system-code ")).unwrap(),
        Some("system-code".to_string())
    );
}

#[test]
fn slug_accepts_any_text_up_to_the_length_cap() {
    for value in ["System", "a--b", "with space", "under_score", "Home Page"] {
        assert_eq!(
            normalize_slug(Some(value)).unwrap(),
            Some(value.to_string()),
            "`{value}` should be kept as given"
        );
    }
    assert!(normalize_slug(Some(&"a".repeat(SLUG_MAX_CHARS))).is_ok());
    assert!(matches!(
        normalize_slug(Some(&"a".repeat(SLUG_MAX_CHARS + 1))),
        Err(MenuValidationError::SlugTooLong { max: 160, .. })
    ));
}

#[test]
fn url_is_trimmed_and_bounded() {
    assert_eq!(
        normalize_url(Some(" /system/users ")).unwrap(),
        Some("/system/users".to_string())
    );
    assert_eq!(normalize_url(Some("")).unwrap(), None);
    assert!(matches!(
        normalize_url(Some(&"u".repeat(URL_MAX_CHARS + 1))),
        Err(MenuValidationError::UrlTooLong { max: 255, .. })
    ));
}

#[test]
fn menu_item_serializes_with_camel_case_wire_fields() {
    let menu_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let parent_id = Uuid::new_v4();
    let item = MenuItem {
        id: Uuid::new_v4(),
        menu_id,
        parent_id: Some(parent_id),
        title: "Users".to_string(),
        slug: Some("users".to_string()),
        url: None,
        order: 2,
        is_root: false,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_360_000,
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["menuId"], menu_id.to_string());
    assert_eq!(json["parentId"], parent_id.to_string());
    assert_eq!(json["order"], 2);
    assert_eq!(json["isRoot"], false);
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
    assert!(json["url"].is_null());
    assert!(item.is_child_of(parent_id));
}
