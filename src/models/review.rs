use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author shown for comments posted without a name
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

/// Running mean of all viewers' star ratings for a URL
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingAggregate {
    pub mean_stars: f64,
    pub rating_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub submitted_at: DateTime<Utc>,
    /// Viewer's rating when the comment was posted, 0 when none
    #[serde(default)]
    pub rating_at_submission: u8,
}

/// Aggregate rating and comments stored for a single URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub url: String,
    #[serde(default)]
    pub aggregate: RatingAggregate,
    /// Newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_rating: Option<u8>,
}

impl ReviewRecord {
    /// Empty record for a URL nobody has reviewed yet
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            aggregate: RatingAggregate::default(),
            comments: Vec::new(),
            viewer_rating: None,
        }
    }

    pub fn has_ratings(&self) -> bool {
        self.aggregate.rating_count > 0
    }

    /// Summary line such as `4.0 (1 rating)` or `3.5 (2 ratings)`
    pub fn rating_summary(&self) -> String {
        let count = self.aggregate.rating_count;
        format!(
            "{:.1} ({} rating{})",
            self.aggregate.mean_stars,
            count,
            if count == 1 { "" } else { "s" }
        )
    }
}

/// Five-character star bar, `filled` stars highlighted
pub fn render_stars(filled: u8) -> String {
    (MIN_STARS..=MAX_STARS).map(|star| if star <= filled { '★' } else { '☆' }).collect()
}

/// Mean rating rounded to whole stars for display
pub fn rounded_stars(mean: f64) -> u8 {
    mean.round().clamp(0.0, f64::from(MAX_STARS)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = ReviewRecord::empty("https://github.com");
        assert_eq!(record.url, "https://github.com");
        assert_eq!(record.aggregate.mean_stars, 0.0);
        assert_eq!(record.aggregate.rating_count, 0);
        assert!(record.comments.is_empty());
        assert!(record.viewer_rating.is_none());
        assert!(!record.has_ratings());
    }

    #[test]
    fn test_rating_summary_pluralization() {
        let mut record = ReviewRecord::empty("u");
        record.aggregate = RatingAggregate { mean_stars: 4.0, rating_count: 1 };
        assert_eq!(record.rating_summary(), "4.0 (1 rating)");

        record.aggregate = RatingAggregate { mean_stars: 3.5, rating_count: 2 };
        assert_eq!(record.rating_summary(), "3.5 (2 ratings)");
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(0), "☆☆☆☆☆");
        assert_eq!(render_stars(3), "★★★☆☆");
        assert_eq!(render_stars(5), "★★★★★");
    }

    #[test]
    fn test_rounded_stars() {
        assert_eq!(rounded_stars(3.5), 4);
        assert_eq!(rounded_stars(3.49), 3);
        assert_eq!(rounded_stars(0.0), 0);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"url":"https://medium.com"}"#;
        let record: ReviewRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, ReviewRecord::empty("https://medium.com"));
    }

    #[test]
    fn test_serialized_field_names() {
        let mut record = ReviewRecord::empty("https://reddit.com");
        record.viewer_rating = Some(4);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"viewerRating\":4"));
        assert!(json.contains("\"meanStars\""));
        assert!(json.contains("\"ratingCount\""));
    }
}
