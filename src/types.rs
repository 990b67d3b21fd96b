//! View-projections of the backend's JSON payloads. Nothing here is ever
//! created or mutated locally; each value lives for one tool call.

use serde::Deserialize;
use serde_json::Value;

/// The `{code, message, data}` wrapper around every backend response.
/// `code == 200` is the sole success discriminator.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: i64,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// File size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub upload_time: Option<String>,
    #[serde(default)]
    pub shoot_time: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub camera_model: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub thumbnail_path: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    /// Backend order is preserved.
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

impl ImageRecord {
    /// Display title: the explicit title, falling back to the file name.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|value| !value.is_empty())
            .or_else(|| {
                self.file_name
                    .as_deref()
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or("Untitled image")
    }
}

/// Tag as embedded in an image record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRef {
    pub tag_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRecord {
    pub id: i64,
    pub tag_name: String,
    #[serde(default)]
    pub tag_type: Option<i64>,
    #[serde(default)]
    pub use_count: Option<u64>,
}

/// One page of image records. The canonical paginated shape is
/// `{records, total}`; other shapes the legacy frontend tolerated are not
/// accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePage {
    #[serde(default)]
    pub records: Vec<ImageRecord>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    #[serde(default)]
    pub total_images: u64,
    #[serde(default)]
    pub total_tags: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_record_parses_camel_case_fields() {
        let image: ImageRecord = serde_json::from_value(json!({
            "id": 7,
            "fileName": "sunset.jpg",
            "fileSize": 1048576,
            "uploadTime": "2026-01-02 10:00:00",
            "viewCount": 3,
            "tags": [{"tagName": "sky"}]
        }))
        .unwrap();
        assert_eq!(image.id, 7);
        assert_eq!(image.file_name.as_deref(), Some("sunset.jpg"));
        assert_eq!(image.file_size, Some(1_048_576));
        assert_eq!(image.tags[0].tag_name, "sky");
        assert!(image.title.is_none());
    }

    #[test]
    fn display_title_falls_back_to_file_name() {
        let image: ImageRecord =
            serde_json::from_value(json!({"id": 1, "fileName": "a.png"})).unwrap();
        assert_eq!(image.display_title(), "a.png");

        let image: ImageRecord =
            serde_json::from_value(json!({"id": 1, "title": "", "fileName": "a.png"})).unwrap();
        assert_eq!(image.display_title(), "a.png");

        let image: ImageRecord = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(image.display_title(), "Untitled image");
    }

    #[test]
    fn envelope_tolerates_missing_message_and_data() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({"code": 200})).unwrap();
        assert_eq!(envelope.code, 200);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }
}
