//! Selections DTOs.
//!
//! The persisted record is an envelope of the form
//! `{ "state": { "likes": {...}, "passes": {...} }, "version": 0 }`,
//! the same shape browser builds of the app write to local storage.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use nightroll_core::selection::CategoryMap;
use nightroll_core::{Item, NightrollError, Result, Selections};

/// Current envelope version.
pub const SELECTIONS_VERSION: u32 = 0;

/// Persisted item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDto {
    pub id: String,
    pub category: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            category: item.category.clone(),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            image: item.image_ref.clone(),
        }
    }
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Item {
            id: dto.id,
            category: dto.category,
            title: dto.title,
            subtitle: dto.subtitle,
            image_ref: dto.image,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionsStateDto {
    #[serde(default)]
    pub likes: IndexMap<String, Vec<ItemDto>>,
    #[serde(default)]
    pub passes: IndexMap<String, Vec<ItemDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionsEnvelope {
    pub state: SelectionsStateDto,
    #[serde(default)]
    pub version: u32,
}

impl From<&Selections> for SelectionsEnvelope {
    fn from(selections: &Selections) -> Self {
        Self {
            state: SelectionsStateDto {
                likes: to_dto_map(selections.likes()),
                passes: to_dto_map(selections.passes()),
            },
            version: SELECTIONS_VERSION,
        }
    }
}

impl SelectionsEnvelope {
    /// Converts into the domain model, rejecting unknown versions.
    pub fn into_domain(self) -> Result<Selections> {
        if self.version != SELECTIONS_VERSION {
            return Err(NightrollError::persistence(format!(
                "unsupported selections version {} (expected {})",
                self.version, SELECTIONS_VERSION
            )));
        }
        Ok(Selections::from_maps(
            from_dto_map(self.state.likes),
            from_dto_map(self.state.passes),
        ))
    }
}

fn to_dto_map(map: &CategoryMap) -> IndexMap<String, Vec<ItemDto>> {
    map.iter()
        .map(|(category, items)| (category.clone(), items.iter().map(ItemDto::from).collect()))
        .collect()
}

fn from_dto_map(map: IndexMap<String, Vec<ItemDto>>) -> CategoryMap {
    map.into_iter()
        .map(|(category, items)| (category, items.into_iter().map(Item::from).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let mut selections = Selections::new();
        selections.add_like(
            "bar",
            Item::new("1", "bar", "Tony Niks Cafe").with_image_ref("/imgs/bar1.png"),
        );

        let json = serde_json::to_value(SelectionsEnvelope::from(&selections)).unwrap();
        assert_eq!(json["version"], 0);
        assert_eq!(json["state"]["likes"]["bar"][0]["image"], "/imgs/bar1.png");
        assert_eq!(json["state"]["passes"]["bar"], serde_json::json!([]));
    }

    #[test]
    fn test_parses_browser_record() {
        let raw = r#"{
            "state": {
                "likes": {
                    "show": [{"id": "s1", "category": "show", "title": "Comedy Night", "subtitle": "9PM open mic"}],
                    "bar": [{"id": "4", "category": "bar", "title": "Tupelo"}]
                },
                "passes": {}
            },
            "version": 0
        }"#;

        let envelope: SelectionsEnvelope = serde_json::from_str(raw).unwrap();
        let selections = envelope.into_domain().unwrap();

        let ids: Vec<_> = selections.all_liked().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["s1", "4"]);
        assert_eq!(
            selections.liked("show")[0].subtitle.as_deref(),
            Some("9PM open mic")
        );
    }

    #[test]
    fn test_missing_version_defaults_to_current() {
        let raw = r#"{"state": {"likes": {}, "passes": {}}}"#;
        let envelope: SelectionsEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.into_domain().is_ok());
    }

    #[test]
    fn test_unknown_version_rejected() {
        let envelope = SelectionsEnvelope {
            state: SelectionsStateDto::default(),
            version: 7,
        };
        assert!(envelope.into_domain().unwrap_err().is_persistence());
    }
}
