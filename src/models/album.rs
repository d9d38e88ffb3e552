use serde::{Deserialize, Serialize};

/// Platshållare som används när ett album saknar foton
pub const DEFAULT_COVER: &str = "assets/album-placeholder.png";

/// Platshållarminiatyr för media som inte är bilder
pub const VIDEO_THUMBNAIL: &str = "assets/video-placeholder.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    #[default]
    Photo,
    Video,
}

/// Fotoalbum. Aggregatfälten `item_count` och `cover_url` underhålls av
/// albumrepositoryt vid varje media-mutation och ska aldrig sättas av vyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    pub trip_id: String,
    pub title: String,
    #[serde(default = "default_cover")]
    pub cover_url: String,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_cover() -> String {
    DEFAULT_COVER.to_string()
}

impl Album {
    pub fn new(trip_id: String, title: String) -> Self {
        Self {
            id: None,
            trip_id,
            title,
            cover_url: DEFAULT_COVER.to_string(),
            item_count: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Mediapost i ett album. Lagras partitionerat per album
/// (en store-nyckel per album-id), inte i någon global collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub id: Option<String>,
    pub album_id: String,
    pub media_type: MediaType,
    /// Data-URL med inbäddad nyttolast; kan vara stor
    pub url: String,
    pub thumbnail: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Media {
    pub fn new(album_id: String, media_type: MediaType, url: String, thumbnail: String) -> Self {
        Self {
            id: None,
            album_id,
            media_type,
            url,
            thumbnail,
            title: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_photo(&self) -> bool {
        self.media_type == MediaType::Photo
    }
}
