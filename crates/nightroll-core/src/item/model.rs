//! Item domain model.

use serde::{Deserialize, Serialize};

/// A swipeable candidate.
///
/// Items are immutable values. An `id` identifies the candidate within its
/// `category`; the remaining fields are display data.
///
/// The serialized form matches the persisted record layout:
/// `{ id, category, title, subtitle?, image? }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier, unique within its category
    pub id: String,
    /// Grouping key (e.g. "bar", "show")
    pub category: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Opaque reference to externally resolved media
    #[serde(default, rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl Item {
    /// Creates an item with no subtitle or image.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            subtitle: None,
            image_ref: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let item = Item::new("1", "bar", "Tony Niks Cafe")
            .with_subtitle("Classic cocktails, cozy vibe")
            .with_image_ref("/imgs/bar1.png");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["category"], "bar");
        assert_eq!(json["image"], "/imgs/bar1.png");
        assert!(json.get("imageRef").is_none());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let item = Item::new("s1", "show", "Comedy Night");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("subtitle"));
        assert!(!json.contains("image"));

        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
