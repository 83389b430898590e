use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use super::error::{ReviewError, ReviewResult};
use super::storage::ReviewStorage;
use crate::models::review::{MAX_STARS, MIN_STARS};
use crate::models::{ANONYMOUS_AUTHOR, Comment, ReviewRecord};

/// Prefix of every storage key; the rest is the literal URL
const KEY_PREFIX: &str = "reviews_";

fn storage_key(url: &str) -> String {
    format!("{}{}", KEY_PREFIX, url)
}

/// Per-URL rating aggregation and comment storage.
///
/// Each operation is a whole-record read-modify-write against the injected
/// storage. Writes that fail leave the previously persisted record in place.
pub struct ReviewStore<S: ReviewStorage> {
    storage: S,
}

impl<S: ReviewStorage> ReviewStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Record for `url`, or an empty one if none is stored.
    /// Storage faults are logged and degrade to the empty record.
    pub fn read(&self, url: &str) -> ReviewRecord {
        match self.load(url) {
            Ok(record) => record,
            Err(e) => {
                warn!("Falling back to empty review record for {}: {}", url, e);
                ReviewRecord::empty(url)
            }
        }
    }

    /// Fold the viewer's rating into the aggregate.
    ///
    /// A first rating grows the count; re-rating swaps the viewer's old stars
    /// for the new ones and keeps the count.
    pub fn submit_rating(&mut self, url: &str, stars: u8) -> ReviewResult<ReviewRecord> {
        if !(MIN_STARS..=MAX_STARS).contains(&stars) {
            return Err(ReviewError::InvalidRatingValue(stars));
        }

        let mut record = self.load(url)?;
        let aggregate = &mut record.aggregate;
        let count = f64::from(aggregate.rating_count);
        let total = aggregate.mean_stars * count;

        match record.viewer_rating {
            Some(previous) if aggregate.rating_count > 0 => {
                aggregate.mean_stars = (total - f64::from(previous) + f64::from(stars)) / count;
            }
            _ => {
                aggregate.rating_count += 1;
                aggregate.mean_stars =
                    (total + f64::from(stars)) / f64::from(aggregate.rating_count);
            }
        }
        record.viewer_rating = Some(stars);

        self.save(&record)?;
        debug!(
            "Rated {} with {} stars (mean {:.2} over {})",
            url, stars, record.aggregate.mean_stars, record.aggregate.rating_count
        );
        Ok(record)
    }

    /// Prepend a comment; the newest comment is always first
    pub fn submit_comment(
        &mut self,
        url: &str,
        author: &str,
        text: &str,
    ) -> ReviewResult<ReviewRecord> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReviewError::EmptyCommentText);
        }

        let mut record = self.load(url)?;
        let author = author.trim();
        let comment = Comment {
            id: Uuid::now_v7().to_string(),
            author: if author.is_empty() { ANONYMOUS_AUTHOR.to_string() } else { author.to_string() },
            text: text.to_string(),
            submitted_at: Utc::now(),
            rating_at_submission: record.viewer_rating.unwrap_or(0),
        };
        record.comments.insert(0, comment);

        self.save(&record)?;
        debug!("Stored comment for {} ({} total)", url, record.comments.len());
        Ok(record)
    }

    /// Strict read used before writes, so a fault never clobbers stored data
    fn load(&self, url: &str) -> ReviewResult<ReviewRecord> {
        let key = storage_key(url);
        let Some(raw) = self.storage.get(&key)? else {
            return Ok(ReviewRecord::empty(url));
        };

        let mut record: ReviewRecord = serde_json::from_str(&raw)
            .map_err(|e| ReviewError::StorageCorrupt { key, message: e.to_string() })?;
        // Key is authoritative
        record.url = url.to_string();
        Ok(record)
    }

    fn save(&mut self, record: &ReviewRecord) -> ReviewResult<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| ReviewError::StorageUnavailable(e.to_string()))?;
        self.storage.set(&storage_key(&record.url), json).inspect_err(|e| {
            warn!("Failed to persist review record for {}: {}", record.url, e);
        })
    }
}
