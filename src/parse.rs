use serde::Deserialize;
use tracing::debug;

use crate::error::ExtractError;
use crate::tweet::RawTweet;

/// One element of the exported array; the tweet itself sits one level down.
#[derive(Deserialize)]
struct TweetEntry {
    tweet: RawTweet,
}

/// Strip the `prefix_len` byte JavaScript assignment in front of the payload
/// and parse the rest as a JSON array of tweet entries.
pub fn parse_tweets(data: &[u8], prefix_len: usize) -> Result<Vec<RawTweet>, ExtractError> {
    let payload = data
        .get(prefix_len..)
        .ok_or(ExtractError::TruncatedPayload {
            expected: prefix_len,
            actual: data.len(),
        })?;

    let entries: Vec<TweetEntry> = serde_json::from_slice(payload)?;
    debug!("parsed {} tweets", entries.len());

    Ok(entries.into_iter().map(|entry| entry.tweet).collect())
}
