mod archive;
mod error;
mod parse;
mod tweet;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::info;
use typed_builder::TypedBuilder;

pub use archive::read_entry;
pub use error::ExtractError;
pub use parse::parse_tweets;
pub use tweet::{
    CatMedia, CatTweet, Entities, ExtendedEntities, Hashtag, MediaSize, MediaSizes, Numeric,
    RawMedia, RawTweet, VideoInfo, VideoVariant,
};

/// Where a Twitter data export keeps the account's tweets.
pub const DEFAULT_ENTRY: &str = "data/tweets.js";

/// Length of `window.YTD.tweet.part0 = `, which precedes the JSON in [`DEFAULT_ENTRY`].
pub const DEFAULT_PREFIX_LEN: usize = 25;

pub const DEFAULT_HASHTAG: &str = "每日一猫";

pub const DEFAULT_OUTPUT: &str = "cats.json";

#[derive(TypedBuilder)]
pub struct CatExtractor {
    #[builder(setter(into))]
    archive: PathBuf,

    #[builder(setter(into), default = DEFAULT_ENTRY.to_owned())]
    entry: String,

    #[builder(default = DEFAULT_PREFIX_LEN)]
    prefix_len: usize,

    #[builder(setter(into), default = DEFAULT_HASHTAG.to_owned())]
    hashtag: String,

    #[builder(setter(into), default = PathBuf::from(DEFAULT_OUTPUT))]
    output: PathBuf,
}

impl CatExtractor {
    /// Read the archive and return the matching tweets, newest first.
    pub fn extract(&self) -> Result<Vec<CatTweet>, ExtractError> {
        info!("reading {} from {}", self.entry, self.archive.display());
        let data = read_entry(&self.archive, &self.entry)?;
        let tweets = parse_tweets(&data, self.prefix_len)?;

        let mut cats = tweets
            .iter()
            .filter(|tweet| is_cat_tweet(tweet, &self.hashtag))
            .map(CatTweet::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "{} of {} tweets tagged #{} with media",
            cats.len(),
            tweets.len(),
            self.hashtag
        );

        sort_cats(&mut cats);
        Ok(cats)
    }

    pub fn write(&self, cats: &[CatTweet]) -> Result<(), ExtractError> {
        write_cats(&self.output, cats)?;
        info!("wrote {} tweets to {}", cats.len(), self.output.display());
        Ok(())
    }

    pub fn run(&self) -> Result<Vec<CatTweet>, ExtractError> {
        let cats = self.extract()?;
        self.write(&cats)?;
        Ok(cats)
    }
}

/// A tweet is kept if it carries `hashtag` and its entities have a `media` key.
pub fn is_cat_tweet(tweet: &RawTweet, hashtag: &str) -> bool {
    tweet
        .entities
        .hashtags
        .iter()
        .any(|tag| tag.text == hashtag)
        && tweet.entities.has_media
}

impl TryFrom<&RawTweet> for CatTweet {
    type Error = ExtractError;

    fn try_from(tweet: &RawTweet) -> Result<Self, Self::Error> {
        let extended: Option<ExtendedEntities> =
            decode_field(tweet.extended_entities.as_ref(), "extended_entities")?;
        let media = match extended.and_then(|extended| extended.media) {
            Some(media) => media
                .iter()
                .map(CatMedia::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![],
        };

        Ok(CatTweet {
            id: decode_field(tweet.id.as_ref(), "id")?,
            text: decode_field(tweet.full_text.as_ref(), "full_text")?,
            created_at: decode_field(tweet.created_at.as_ref(), "created_at")?,
            media,
        })
    }
}

fn decode_field<T: DeserializeOwned>(
    value: Option<&Value>,
    field: &str,
) -> Result<Option<T>, ExtractError> {
    value
        .map(|value| {
            <T as Deserialize>::deserialize(value)
                .map_err(|e| ExtractError::Schema(format!("{}: {}", field, e)))
        })
        .transpose()
}

impl TryFrom<&RawMedia> for CatMedia {
    type Error = ExtractError;

    fn try_from(media: &RawMedia) -> Result<Self, Self::Error> {
        let large = media.sizes.as_ref().and_then(|sizes| sizes.large.as_ref());

        // Only videos get a video url, even if other media carry variants
        let video_url = match media.media_type.as_deref() {
            Some("video") => {
                let variants = media
                    .video_info
                    .as_ref()
                    .and_then(|info| info.variants.as_deref())
                    .unwrap_or_default();
                best_variant_url(variants)?
            }
            _ => None,
        };

        Ok(CatMedia {
            media_type: media.media_type.clone(),
            width: large.and_then(|size| size.w.clone()),
            height: large.and_then(|size| size.h.clone()),
            image_url: media.media_url_https.clone(),
            video_url,
        })
    }
}

/// Url of the highest bitrate variant. The first one listed wins a tie.
pub fn best_variant_url(variants: &[VideoVariant]) -> Result<Option<String>, ExtractError> {
    let mut best: Option<(u64, &VideoVariant)> = None;
    for variant in variants {
        let bitrate = variant_bitrate(variant)?;
        match best {
            Some((best_bitrate, _)) if best_bitrate >= bitrate => {}
            _ => best = Some((bitrate, variant)),
        }
    }
    Ok(best.and_then(|(_, variant)| variant.url.clone()))
}

fn variant_bitrate(variant: &VideoVariant) -> Result<u64, ExtractError> {
    match &variant.bitrate {
        None => Ok(0),
        Some(bitrate) => bitrate.as_u64().ok_or_else(|| {
            ExtractError::Schema(format!("video bitrate {:?} is not an integer", bitrate))
        }),
    }
}

/// Sort by numeric id, largest first. Ids that aren't numbers go last.
pub fn sort_cats(cats: &mut [CatTweet]) {
    let key = |cat: &CatTweet| cat.id.as_ref().and_then(Numeric::as_u64);
    cats.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Write `cats` as JSON indented by four spaces, replacing any existing file.
pub fn write_cats(path: &Path, cats: &[CatTweet]) -> Result<(), ExtractError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    cats.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}
