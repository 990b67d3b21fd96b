//! Pure text formatters for backend records. Deterministic string builders
//! with no side effects; every tool response is produced here.

use crate::config::Config;
use crate::types::{ImageRecord, LibraryStats, TagRecord};

const NO_IMAGES: &str = "No matching images found.";
const NO_TAGS: &str = "No tags available.";

/// Full detail view of a single image. Lines for optional fields are skipped
/// entirely when the field is absent, never shown with an empty value.
pub fn format_image(image: &ImageRecord, config: &Config) -> String {
    let mut lines = vec![
        format!("**{}**", image.display_title()),
        format!("- ID: {}", image.id),
    ];
    if let Some(file_name) = non_empty(image.file_name.as_deref()) {
        lines.push(format!("- File name: {file_name}"));
    }
    if let Some(description) = non_empty(image.description.as_deref()) {
        lines.push(format!("- Description: {description}"));
    }
    if let (Some(width), Some(height)) = (image.width, image.height) {
        lines.push(format!("- Dimensions: {width} x {height}"));
    }
    if let Some(file_size) = image.file_size {
        let size_mb = file_size as f64 / 1024.0 / 1024.0;
        lines.push(format!("- File size: {size_mb:.2} MB"));
    }
    if let Some(upload_time) = non_empty(image.upload_time.as_deref()) {
        lines.push(format!("- Uploaded: {upload_time}"));
    }
    if let Some(shoot_time) = non_empty(image.shoot_time.as_deref()) {
        lines.push(format!("- Captured: {shoot_time}"));
    }
    if let Some(device) = non_empty(image.device.as_deref()) {
        lines.push(format!("- Device: {device}"));
    }
    if let Some(camera_model) = non_empty(image.camera_model.as_deref()) {
        lines.push(format!("- Camera model: {camera_model}"));
    }
    if let Some(location) = non_empty(image.location.as_deref()) {
        lines.push(format!("- Location: {location}"));
    }
    if !image.tags.is_empty() {
        lines.push(format!("- Tags: {}", tag_names(image)));
    }
    if let Some(view_count) = image.view_count {
        lines.push(format!("- Views: {view_count}"));
    }
    let base = config.asset_base_url();
    let key_query = config.api_key_query();
    if let Some(thumbnail_path) = non_empty(image.thumbnail_path.as_deref()) {
        lines.push(format!(
            "- Thumbnail: {base}/api/files/thumbnails/{thumbnail_path}{key_query}"
        ));
    }
    if let Some(file_path) = non_empty(image.file_path.as_deref()) {
        lines.push(format!("- Original: {base}/api/files/{file_path}{key_query}"));
    }
    lines.join("\n")
}

/// One page of images as an enumerated list. Entry numbers continue across
/// pages: the first entry on page `p` is `(p-1)*page_size + 1`.
pub fn format_image_list(images: &[ImageRecord], total: u64, page: u64, page_size: u64) -> String {
    if images.is_empty() {
        return NO_IMAGES.to_string();
    }
    let total_pages = total.div_ceil(page_size);
    let mut out = format!("Found {total} images (page {page}/{total_pages}):\n\n");
    let entries: Vec<String> = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let num = (page - 1) * page_size + index as u64 + 1;
            let mut entry = format!("{num}. **{}** (ID: {})", image.display_title(), image.id);
            if !image.tags.is_empty() {
                entry.push_str(&format!(" [{}]", tag_names(image)));
            }
            entry
        })
        .collect();
    out.push_str(&entries.join("\n"));
    out
}

pub fn format_tag_list(tags: &[TagRecord]) -> String {
    if tags.is_empty() {
        return NO_TAGS.to_string();
    }
    let mut out = format!("{} tags available:\n\n", tags.len());
    let entries: Vec<String> = tags
        .iter()
        .map(|tag| {
            format!(
                "- **{}** (ID: {}, type: {}, uses: {})",
                tag.tag_name,
                tag.id,
                tag_type_label(tag.tag_type),
                tag.use_count.unwrap_or(0)
            )
        })
        .collect();
    out.push_str(&entries.join("\n"));
    out
}

pub fn format_stats(stats: &LibraryStats) -> String {
    format!(
        "Total images: {}\nTotal tags: {}",
        stats.total_images, stats.total_tags
    )
}

fn tag_type_label(tag_type: Option<i64>) -> &'static str {
    match tag_type {
        Some(1) => "auto",
        Some(2) => "custom",
        Some(3) => "AI",
        _ => "unknown",
    }
}

fn tag_names(image: &ImageRecord) -> String {
    image
        .tags
        .iter()
        .map(|tag| tag.tag_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image(value: serde_json::Value) -> ImageRecord {
        serde_json::from_value(value).unwrap()
    }

    fn tag(value: serde_json::Value) -> TagRecord {
        serde_json::from_value(value).unwrap()
    }

    fn config() -> Config {
        Config::new("http://localhost:8080/api", "secret-key")
    }

    #[test]
    fn format_image_full_record() {
        let image = image(json!({
            "id": 42,
            "title": "Harbor at dusk",
            "fileName": "harbor.jpg",
            "description": "Evening shot of the harbor",
            "width": 4032,
            "height": 3024,
            "fileSize": 2097152,
            "uploadTime": "2026-01-02 10:00:00",
            "shootTime": "2026-01-01 18:30:00",
            "device": "iPhone 15",
            "cameraModel": "Apple iPhone 15 Pro",
            "location": "Hamburg",
            "viewCount": 12,
            "thumbnailPath": "2026/01/harbor_thumb.jpg",
            "filePath": "2026/01/harbor.jpg",
            "tags": [{"tagName": "harbor"}, {"tagName": "dusk"}]
        }));
        let expected = "\
**Harbor at dusk**
- ID: 42
- File name: harbor.jpg
- Description: Evening shot of the harbor
- Dimensions: 4032 x 3024
- File size: 2.00 MB
- Uploaded: 2026-01-02 10:00:00
- Captured: 2026-01-01 18:30:00
- Device: iPhone 15
- Camera model: Apple iPhone 15 Pro
- Location: Hamburg
- Tags: harbor, dusk
- Views: 12
- Thumbnail: http://localhost:8080/api/files/thumbnails/2026/01/harbor_thumb.jpg?api_key=secret-key
- Original: http://localhost:8080/api/files/2026/01/harbor.jpg?api_key=secret-key";
        assert_eq!(format_image(&image, &config()), expected);
    }

    #[test]
    fn format_image_skips_absent_optional_lines() {
        let image = image(json!({"id": 5, "fileName": "bare.png"}));
        let expected = "**bare.png**\n- ID: 5\n- File name: bare.png";
        assert_eq!(format_image(&image, &config()), expected);
    }

    #[test]
    fn format_image_omits_dimensions_when_height_missing() {
        let image = image(json!({"id": 5, "fileName": "bare.png", "width": 800}));
        let text = format_image(&image, &config());
        assert!(!text.contains("Dimensions"));
    }

    #[test]
    fn format_image_links_without_api_key() {
        let config = Config::new("http://localhost:8080/api", "");
        let image = image(json!({"id": 5, "filePath": "a/b.png"}));
        let text = format_image(&image, &config);
        assert!(text.ends_with("- Original: http://localhost:8080/api/files/a/b.png"));
    }

    #[test]
    fn format_image_renders_zero_view_count() {
        let image = image(json!({"id": 5, "viewCount": 0}));
        assert!(format_image(&image, &config()).contains("- Views: 0"));
    }

    #[test]
    fn empty_image_list_is_fixed_sentence_for_any_page() {
        assert_eq!(format_image_list(&[], 0, 1, 10), NO_IMAGES);
        assert_eq!(format_image_list(&[], 0, 99, 50), NO_IMAGES);
    }

    #[test]
    fn image_list_numbers_entries_by_page_offset() {
        let images = vec![
            image(json!({"id": 21, "title": "first", "tags": [{"tagName": "a"}, {"tagName": "b"}]})),
            image(json!({"id": 22, "fileName": "second.png"})),
        ];
        let expected = "\
Found 25 images (page 3/3):

21. **first** (ID: 21) [a, b]
22. **second.png** (ID: 22)";
        assert_eq!(format_image_list(&images, 25, 3, 10), expected);
    }

    #[test]
    fn image_list_page_count_rounds_up() {
        let images = vec![image(json!({"id": 1}))];
        let text = format_image_list(&images, 11, 1, 10);
        assert!(text.starts_with("Found 11 images (page 1/2):"));
    }

    #[test]
    fn empty_tag_list_is_fixed_sentence() {
        assert_eq!(format_tag_list(&[]), NO_TAGS);
    }

    #[test]
    fn tag_list_maps_type_codes_to_labels() {
        let tags = vec![
            tag(json!({"id": 1, "tagName": "scan", "tagType": 1, "useCount": 4})),
            tag(json!({"id": 2, "tagName": "trip", "tagType": 2, "useCount": 9})),
            tag(json!({"id": 3, "tagName": "faces", "tagType": 3, "useCount": 1})),
            tag(json!({"id": 4, "tagName": "odd", "tagType": 99})),
        ];
        let expected = "\
4 tags available:

- **scan** (ID: 1, type: auto, uses: 4)
- **trip** (ID: 2, type: custom, uses: 9)
- **faces** (ID: 3, type: AI, uses: 1)
- **odd** (ID: 4, type: unknown, uses: 0)";
        assert_eq!(format_tag_list(&tags), expected);
    }

    #[test]
    fn tag_without_type_is_unknown() {
        let tags = vec![tag(json!({"id": 7, "tagName": "plain"}))];
        assert!(format_tag_list(&tags).contains("type: unknown"));
    }

    #[test]
    fn stats_is_two_fixed_lines() {
        let stats = LibraryStats {
            total_images: 120,
            total_tags: 8,
        };
        assert_eq!(format_stats(&stats), "Total images: 120\nTotal tags: 8");
    }
}
