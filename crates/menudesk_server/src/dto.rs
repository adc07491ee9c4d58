//! JSON request bodies and query parameters.
//!
//! Bodies reject unknown fields. Nullable patch fields distinguish an
//! absent key (leave unchanged) from an explicit `null` (clear or move to
//! root) through [`deserialize_some`].

use crate::error::ApiError;
use menudesk_core::{
    CreateMenuItemRequest, CreateMenuRequest, MenuId, MenuItemId, UpdateMenuItemRequest,
    UpdateMenuRequest,
};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMenuBody {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl From<CreateMenuBody> for CreateMenuRequest {
    fn from(value: CreateMenuBody) -> Self {
        Self {
            name: value.name,
            slug: value.slug,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMenuBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub slug: Option<Option<String>>,
}

impl From<UpdateMenuBody> for UpdateMenuRequest {
    fn from(value: UpdateMenuBody) -> Self {
        Self {
            name: value.name,
            slug: value.slug,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMenuItemBody {
    pub parent_id: MenuItemId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<CreateMenuItemBody> for CreateMenuItemRequest {
    fn from(value: CreateMenuItemBody) -> Self {
        Self {
            parent_id: value.parent_id,
            title: value.title,
            slug: value.slug,
            url: value.url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMenuItemBody {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub parent_id: Option<Option<MenuItemId>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub slug: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub url: Option<Option<String>>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// `order` is passed through as sent; out-of-range values are clamped when
/// the item is placed.
impl From<UpdateMenuItemBody> for UpdateMenuItemRequest {
    fn from(value: UpdateMenuItemBody) -> Self {
        Self {
            parent_id: value.parent_id,
            title: value.title,
            slug: value.slug,
            url: value.url,
            order: value.order,
        }
    }
}

/// Raw `?depth=` query. Parsed by hand so malformed values get the JSON
/// error body instead of the extractor's plain-text rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    pub depth: Option<String>,
}

impl MenuQuery {
    pub fn depth_limit(&self) -> Result<Option<u32>, ApiError> {
        let Some(raw) = self.depth.as_deref() else {
            return Ok(None);
        };
        raw.trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ApiError::bad_request("depth must be a non-negative integer"))
    }
}

/// Parses a path segment as a menu or item id.
pub fn parse_id(raw: &str, label: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        ApiError::bad_request(format!("Validation failed ({label} is expected to be a uuid)"))
    })
}

/// Menu id and item id from `/menus/{id}/items/{item_id}`.
pub fn parse_item_path(raw: &(String, String)) -> Result<(MenuId, MenuItemId), ApiError> {
    Ok((parse_id(&raw.0, "id")?, parse_id(&raw.1, "itemId")?))
}

/// Maps a present key to `Some(value)`, including `Some(None)` for `null`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{parse_id, MenuQuery, UpdateMenuItemBody};
    use axum::http::StatusCode;
    use menudesk_core::UpdateMenuItemRequest;

    #[test]
    fn nullable_fields_distinguish_absent_from_null() {
        let absent: UpdateMenuItemBody = serde_json::from_str(r#"{"title":"Users"}"#).unwrap();
        assert_eq!(absent.parent_id, None);
        assert_eq!(absent.url, None);

        let null: UpdateMenuItemBody =
            serde_json::from_str(r#"{"parentId":null,"url":null}"#).unwrap();
        assert_eq!(null.parent_id, Some(None));
        assert_eq!(null.url, Some(None));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<UpdateMenuItemBody>(r#"{"colour":"red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn negative_order_passes_through_for_clamping() {
        let body: UpdateMenuItemBody = serde_json::from_str(r#"{"order":-1}"#).unwrap();
        let request = UpdateMenuItemRequest::from(body);
        assert_eq!(request.order, Some(-1));
    }

    #[test]
    fn depth_limit_parses_non_negative_integers_only() {
        let query = |depth: Option<&str>| MenuQuery {
            depth: depth.map(str::to_string),
        };
        assert_eq!(query(None).depth_limit().unwrap(), None);
        assert_eq!(query(Some("0")).depth_limit().unwrap(), Some(0));
        assert_eq!(query(Some("3")).depth_limit().unwrap(), Some(3));
        let err = query(Some("-1")).depth_limit().unwrap_err();
        assert_eq!(err.message(), "depth must be a non-negative integer");
        assert!(query(Some("deep")).depth_limit().is_err());
    }

    #[test]
    fn parse_id_rejects_non_uuid_segments() {
        let err = parse_id("not-a-uuid", "id").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("uuid"));
    }
}
