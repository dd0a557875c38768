use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo entry.
///
/// `id` and `created_at` are assigned by the store when the item is added and
/// never change afterwards. Only `text` and `completed` can be updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub(crate) fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Request body for `POST /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemInput {
    pub text: String,
}

/// Request body for `PUT /items/{id}`. All fields are optional for partial updates.
///
/// `id` and `createdAt` have no field here, so those keys in a request body
/// are dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body returned by `DELETE /items/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub success: bool,
}

/// Millisecond-precision UTC timestamps (`2024-05-01T12:00:00.000Z`).
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_camel_case_and_millisecond_timestamp() {
        let item = Item {
            id: Uuid::nil(),
            text: "buy milk".to_string(),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00.000Z");
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn deserializes_any_rfc3339_offset() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": Uuid::nil(),
            "text": "walk dog",
            "completed": true,
            "createdAt": "2024-05-01T14:00:00+02:00",
        }))
        .unwrap();

        assert_eq!(
            item.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn update_input_ignores_immutable_fields() {
        let input: UpdateItemInput = serde_json::from_value(serde_json::json!({
            "id": "not-this-one",
            "createdAt": "1970-01-01T00:00:00.000Z",
            "completed": true,
        }))
        .unwrap();

        assert_eq!(input.completed, Some(true));
        assert!(input.text.is_none());
    }

    #[test]
    fn new_items_start_incomplete_with_distinct_ids() {
        let a = Item::new("a".to_string());
        let b = Item::new("b".to_string());

        assert!(!a.completed);
        assert_ne!(a.id, b.id);
    }
}
