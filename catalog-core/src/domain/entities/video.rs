use catalog_model::{
    CastMemberID, CategoryID, GenreID, Image, Media, Rating, VideoID,
};
use chrono::{DateTime, Utc};

use crate::domain::notification::Notification;
use crate::domain::validator::{
    EntityValidator, ValidatorFactory, VideoValidator,
};
use crate::error::{CatalogError, Result};

/// Scalar attributes a caller supplies when creating or restoring a video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFields {
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub opened: bool,
    pub rating: Rating,
}

/// Video aggregate: scalar metadata, references to categories / genres /
/// cast members, and optional image and media slots.
///
/// Validation runs through [`VideoValidator`] and collects every broken rule
/// before failing with [`CatalogError::Notification`].
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    id: VideoID,
    title: String,
    description: String,
    year_launched: i32,
    duration: i32,
    opened: bool,
    rating: Rating,
    published: bool,
    categories_id: Vec<CategoryID>,
    genres_id: Vec<GenreID>,
    cast_member_ids: Vec<CastMemberID>,
    thumb_file: Option<Image>,
    thumb_half: Option<Image>,
    banner_file: Option<Image>,
    trailer_file: Option<Media>,
    video_file: Option<Media>,
    created_at: DateTime<Utc>,
}

impl Video {
    pub fn new(fields: VideoFields) -> Result<Self> {
        Self::restore(VideoID::new(), fields, false, Utc::now())
    }

    pub fn restore(
        id: VideoID,
        fields: VideoFields,
        published: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let VideoFields {
            title,
            description,
            year_launched,
            duration,
            opened,
            rating,
        } = fields;

        let video = Self {
            id,
            title,
            description,
            year_launched,
            duration,
            opened,
            rating,
            published,
            categories_id: Vec::new(),
            genres_id: Vec::new(),
            cast_member_ids: Vec::new(),
            thumb_file: None,
            thumb_half: None,
            banner_file: None,
            trailer_file: None,
            video_file: None,
            created_at,
        };
        video.validate()?;
        Ok(video)
    }

    pub fn id(&self) -> VideoID {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn year_launched(&self) -> i32 {
        self.year_launched
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn opened(&self) -> bool {
        self.opened
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_at_formatted(&self) -> String {
        super::format_created_at(self.created_at)
    }

    pub fn categories_id(&self) -> &[CategoryID] {
        &self.categories_id
    }

    pub fn genres_id(&self) -> &[GenreID] {
        &self.genres_id
    }

    pub fn cast_member_ids(&self) -> &[CastMemberID] {
        &self.cast_member_ids
    }

    pub fn thumb_file(&self) -> Option<&Image> {
        self.thumb_file.as_ref()
    }

    pub fn thumb_half(&self) -> Option<&Image> {
        self.thumb_half.as_ref()
    }

    pub fn banner_file(&self) -> Option<&Image> {
        self.banner_file.as_ref()
    }

    pub fn trailer_file(&self) -> Option<&Media> {
        self.trailer_file.as_ref()
    }

    pub fn video_file(&self) -> Option<&Media> {
        self.video_file.as_ref()
    }

    /// Replace the scalar attributes, keeping identity, relations and media.
    pub fn update(&mut self, fields: VideoFields) -> Result<()> {
        let mut candidate = self.clone();
        candidate.title = fields.title;
        candidate.description = fields.description;
        candidate.year_launched = fields.year_launched;
        candidate.duration = fields.duration;
        candidate.opened = fields.opened;
        candidate.rating = fields.rating;
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    pub fn publish(&mut self) {
        self.published = true;
    }

    pub fn add_category_id(&mut self, category_id: CategoryID) {
        self.categories_id.push(category_id);
    }

    pub fn remove_category_id(&mut self, category_id: CategoryID) {
        remove_first(&mut self.categories_id, &category_id);
    }

    pub fn add_genre(&mut self, genre_id: GenreID) {
        self.genres_id.push(genre_id);
    }

    pub fn remove_genre(&mut self, genre_id: GenreID) {
        remove_first(&mut self.genres_id, &genre_id);
    }

    pub fn add_cast_member(&mut self, cast_member_id: CastMemberID) {
        self.cast_member_ids.push(cast_member_id);
    }

    pub fn remove_cast_member(&mut self, cast_member_id: CastMemberID) {
        remove_first(&mut self.cast_member_ids, &cast_member_id);
    }

    pub fn replace_categories(&mut self, ids: Vec<CategoryID>) {
        self.categories_id = ids;
    }

    pub fn replace_genres(&mut self, ids: Vec<GenreID>) {
        self.genres_id = ids;
    }

    pub fn replace_cast_members(&mut self, ids: Vec<CastMemberID>) {
        self.cast_member_ids = ids;
    }

    pub fn set_thumb_file(&mut self, image: Image) {
        self.thumb_file = Some(image);
    }

    pub fn set_thumb_half(&mut self, image: Image) {
        self.thumb_half = Some(image);
    }

    pub fn set_banner_file(&mut self, image: Image) {
        self.banner_file = Some(image);
    }

    pub fn set_trailer_file(&mut self, media: Media) {
        self.trailer_file = Some(media);
    }

    pub fn set_video_file(&mut self, media: Media) {
        self.video_file = Some(media);
    }

    fn validate(&self) -> Result<()> {
        let mut notification = Notification::new();
        ValidatorFactory::video().validate(self, &mut notification);

        if notification.has_errors() {
            return Err(CatalogError::Notification(
                notification.messages(Some(VideoValidator::CONTEXT)),
            ));
        }
        Ok(())
    }
}

fn remove_first<T: PartialEq>(items: &mut Vec<T>, target: &T) {
    if let Some(index) = items.iter().position(|item| item == target) {
        items.remove(index);
    }
}
