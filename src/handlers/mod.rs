pub mod auth_handler;
pub mod chat_handler;
pub mod community_handler;
pub mod health;
pub mod journal_handler;
pub mod meditation_handler;
pub mod metrics;
pub mod mood_handler;

pub use health::health_check;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};

/// Number of pages needed to show `total` documents at `limit` per page
pub(crate) fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::total_pages;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(25, 5), 5);
    }
}
