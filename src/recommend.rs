//! Mood-based meditation recommendations.
//!
//! Maps a reported mood to a fixed keyword set, matches the catalog on
//! title, description, or category, and tops the result up to three entries
//! from the rest of the catalog.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Meditation, MoodLabel};

pub const MAX_RECOMMENDATIONS: i64 = 3;

const DEFAULT_KEYWORDS: &[&str] = &["mindfulness", "balance"];

/// Keyword set for a mood. Total over the label enum, with a single default
/// arm for anything outside the recognized set.
pub fn keywords_for(label: Option<MoodLabel>) -> &'static [&'static str] {
    match label {
        Some(MoodLabel::Happy) => &["gratitude", "joy", "positive", "happiness"],
        Some(MoodLabel::Sad) => &["comfort", "healing", "uplift", "peace"],
        Some(MoodLabel::Anxious) => &["calm", "anxiety relief", "relaxation", "stress"],
        Some(MoodLabel::Neutral) => &["balance", "mindfulness", "awareness", "present"],
        None => DEFAULT_KEYWORDS,
    }
}

/// Up to three meditations relevant to `mood`, in store order. Fewer than
/// three keyword matches are topped up with arbitrary other catalog entries;
/// an empty catalog yields an empty list.
pub async fn recommended_for_mood(db: &PgPool, mood: &str) -> Result<Vec<Meditation>, sqlx::Error> {
    let patterns: Vec<String> = keywords_for(MoodLabel::parse(mood))
        .iter()
        .map(|kw| format!("%{}%", kw))
        .collect();

    let mut meditations = sqlx::query_as::<_, Meditation>(
        r#"
        SELECT * FROM "Meditations"
        WHERE title ILIKE ANY($1)
           OR description ILIKE ANY($1)
           OR category ILIKE ANY($1)
        LIMIT $2
        "#,
    )
    .bind(&patterns)
    .bind(MAX_RECOMMENDATIONS)
    .fetch_all(db)
    .await?;

    if (meditations.len() as i64) < MAX_RECOMMENDATIONS {
        let matched_ids: Vec<Uuid> = meditations.iter().map(|m| m.id).collect();
        let top_up = sqlx::query_as::<_, Meditation>(
            r#"
            SELECT * FROM "Meditations"
            WHERE id != ALL($1)
            LIMIT $2
            "#,
        )
        .bind(&matched_ids)
        .bind(MAX_RECOMMENDATIONS - meditations.len() as i64)
        .fetch_all(db)
        .await?;

        meditations.extend(top_up);
    }

    Ok(meditations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_has_keywords() {
        for label in [
            MoodLabel::Happy,
            MoodLabel::Neutral,
            MoodLabel::Sad,
            MoodLabel::Anxious,
        ] {
            let keywords = keywords_for(Some(label));
            assert!(keywords.len() >= 3);
        }
    }

    #[test]
    fn test_unrecognized_mood_falls_back_to_default() {
        assert_eq!(keywords_for(MoodLabel::parse("confused")), DEFAULT_KEYWORDS);
        assert_eq!(keywords_for(MoodLabel::parse("")), DEFAULT_KEYWORDS);
        assert_eq!(keywords_for(None), DEFAULT_KEYWORDS);
    }

    #[test]
    fn test_anxious_maps_to_calming_keywords() {
        let keywords = keywords_for(MoodLabel::parse("anxious"));
        assert!(keywords.contains(&"calm"));
        assert!(keywords.contains(&"anxiety relief"));
    }
}
