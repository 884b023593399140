use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed set of self-report mood categories accepted by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Neutral,
    Sad,
    Anxious,
}

impl MoodLabel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(MoodLabel::Happy),
            "neutral" => Some(MoodLabel::Neutral),
            "sad" => Some(MoodLabel::Sad),
            "anxious" => Some(MoodLabel::Anxious),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Sad => "sad",
            MoodLabel::Anxious => "anxious",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MoodEntry {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub mood: String,
    pub note: Option<String>,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_known_labels() {
        assert_eq!(MoodLabel::parse("happy"), Some(MoodLabel::Happy));
        assert_eq!(MoodLabel::parse("neutral"), Some(MoodLabel::Neutral));
        assert_eq!(MoodLabel::parse("sad"), Some(MoodLabel::Sad));
        assert_eq!(MoodLabel::parse("anxious"), Some(MoodLabel::Anxious));
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        assert_eq!(MoodLabel::parse("ecstatic"), None);
        assert_eq!(MoodLabel::parse(""), None);
        assert_eq!(MoodLabel::parse("Happy"), None);
    }

    #[test]
    fn test_round_trip() {
        for label in [
            MoodLabel::Happy,
            MoodLabel::Neutral,
            MoodLabel::Sad,
            MoodLabel::Anxious,
        ] {
            assert_eq!(MoodLabel::parse(label.as_str()), Some(label));
        }
    }
}
