use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A number that exports write either as a JSON number or as a decimal string.
///
/// It is written back out in the form it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(u64),
    Text(String),
}

impl Numeric {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<u64> for Numeric {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// A tweet as exported.
///
/// Only `entities` is decoded up front since the filter needs it. The other
/// fields stay untyped until the tweet has been selected, so odd values in
/// tweets that are filtered out never matter.
#[derive(Debug, Deserialize)]
pub struct RawTweet {
    pub id: Option<Value>,
    pub full_text: Option<Value>,
    pub created_at: Option<Value>,
    pub entities: Entities,
    pub extended_entities: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Entities {
    pub hashtags: Vec<Hashtag>,

    /// Whether a `media` key is present at all, whatever its value.
    #[serde(default, rename = "media", deserialize_with = "key_present")]
    pub has_media: bool,
}

#[derive(Debug, Deserialize)]
pub struct Hashtag {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtendedEntities {
    pub media: Option<Vec<RawMedia>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMedia {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub sizes: Option<MediaSizes>,
    pub media_url_https: Option<String>,
    pub video_info: Option<VideoInfo>,
}

#[derive(Debug, Deserialize)]
pub struct MediaSizes {
    pub large: Option<MediaSize>,
}

#[derive(Debug, Deserialize)]
pub struct MediaSize {
    pub w: Option<Numeric>,
    pub h: Option<Numeric>,
}

#[derive(Debug, Deserialize)]
pub struct VideoInfo {
    pub variants: Option<Vec<VideoVariant>>,
}

#[derive(Debug, Deserialize)]
pub struct VideoVariant {
    pub bitrate: Option<Numeric>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatTweet {
    pub id: Option<Numeric>,
    pub text: Option<String>,
    pub created_at: Option<String>,
    pub media: Vec<CatMedia>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatMedia {
    pub media_type: Option<String>,
    pub width: Option<Numeric>,
    pub height: Option<Numeric>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(|_| true)
}
