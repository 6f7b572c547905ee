use catalog_model::{Media, MediaKind, Rating};
use serde::{Deserialize, Serialize};

use crate::domain::{Video, VideoFields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFieldsInput {
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub opened: bool,
    pub rating: Rating,
}

impl From<VideoFieldsInput> for VideoFields {
    fn from(input: VideoFieldsInput) -> Self {
        VideoFields {
            title: input.title,
            description: input.description,
            year_launched: input.year_launched,
            duration: input.duration,
            opened: input.opened,
            rating: input.rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVideoInput {
    #[serde(flatten)]
    pub fields: VideoFieldsInput,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast_members: Vec<String>,
}

/// Replaces the scalar attributes and every relation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVideoInput {
    pub id: String,
    #[serde(flatten)]
    pub fields: VideoFieldsInput,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast_members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoOutput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub opened: bool,
    pub rating: Rating,
    pub published: bool,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub thumb_file: Option<String>,
    pub thumb_half: Option<String>,
    pub banner_file: Option<String>,
    pub trailer_file: Option<Media>,
    pub video_file: Option<Media>,
    pub created_at: String,
}

impl From<&Video> for VideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
            title: video.title().to_owned(),
            description: video.description().to_owned(),
            year_launched: video.year_launched(),
            duration: video.duration(),
            opened: video.opened(),
            rating: video.rating(),
            published: video.published(),
            categories: strings(video.categories_id()),
            genres: strings(video.genres_id()),
            cast_members: strings(video.cast_member_ids()),
            thumb_file: video.thumb_file().map(|i| i.path().to_owned()),
            thumb_half: video.thumb_half().map(|i| i.path().to_owned()),
            banner_file: video.banner_file().map(|i| i.path().to_owned()),
            trailer_file: video.trailer_file().cloned(),
            video_file: video.video_file().cloned(),
            created_at: video.created_at_formatted(),
        }
    }
}

impl From<Video> for VideoOutput {
    fn from(video: Video) -> Self {
        Self::from(&video)
    }
}

fn strings<T: ToString>(ids: &[T]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

/// Record the encoded artifact of an uploaded media slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEncodedPathInput {
    pub id: String,
    pub encoded_path: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEncodedPathOutput {
    pub id: String,
    pub encoded_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::{CategoryID, Image, MediaStatus};

    fn fields() -> VideoFieldsInput {
        VideoFieldsInput {
            title: "Some title".into(),
            description: "Some description".into(),
            year_launched: 2026,
            duration: 50,
            opened: true,
            rating: Rating::L,
        }
    }

    #[test]
    fn create_input_reads_flat_json() {
        let input: CreateVideoInput = serde_json::from_str(
            r#"{
                "title": "Some title",
                "description": "Some description",
                "year_launched": 2026,
                "duration": 50,
                "opened": true,
                "rating": "L",
                "categories": ["a"]
            }"#,
        )
        .unwrap();

        assert_eq!(input.fields, fields());
        assert_eq!(input.categories, vec!["a".to_owned()]);
        assert!(input.genres.is_empty());
    }

    #[test]
    fn output_renders_slots() {
        let mut video = Video::new(fields().into()).unwrap();
        let category = CategoryID::new();
        video.add_category_id(category);
        video.set_banner_file(Image::new("banner.png"));
        video.set_video_file(Media::new("video.mp4", MediaStatus::Processing));

        let json = serde_json::to_value(VideoOutput::from(&video)).unwrap();

        assert_eq!(json["rating"], "L");
        assert_eq!(json["categories"][0], category.to_string());
        assert_eq!(json["banner_file"], "banner.png");
        assert!(json["thumb_file"].is_null());
        assert_eq!(json["video_file"]["file_path"], "video.mp4");
        assert_eq!(json["video_file"]["media_status"], "processing");
    }
}
