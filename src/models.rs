//! Frontend Models
//!
//! Data structures matching the items API.

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier
pub type ItemId = u32;

/// Item data structure (matches `GET /items`)
///
/// Ids must be JSON integers. json-server 1.x assigns string ids like `"a1"`
/// to posted items; a collection containing one fails to decode and the list
/// keeps its previous rows. Use a server that assigns integer ids
/// (json-server 0.17 does).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

/// Body of `POST /items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem {
    pub name: String,
}

impl NewItem {
    /// Build a request from the raw form draft. Blank drafts yield `None`.
    pub fn from_draft(draft: &str) -> Option<Self> {
        let name = draft.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self { name: name.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ignores_unknown_fields() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":1,"name":"milk","createdAt":"today"}]"#).unwrap();
        assert_eq!(items, vec![Item { id: 1, name: "milk".into() }]);
    }

    #[test]
    fn test_item_requires_numeric_id() {
        let parsed = serde_json::from_str::<Item>(r#"{"name":"milk"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_item_rejects_string_id() {
        let err = serde_json::from_str::<Vec<Item>>(r#"[{"id":"a1","name":"eggs"}]"#).unwrap_err();
        assert!(err.to_string().contains("expected u32"));
    }

    #[test]
    fn test_new_item_from_draft_trims() {
        let item = NewItem::from_draft("  eggs \n").expect("non-blank draft");
        assert_eq!(item.name, "eggs");
        assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"name":"eggs"}"#);
    }

    #[test]
    fn test_new_item_from_blank_draft() {
        assert_eq!(NewItem::from_draft(""), None);
        assert_eq!(NewItem::from_draft("   \t"), None);
    }
}
