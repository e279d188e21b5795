use chrono::{DateTime, Utc};
use tracing::debug;

use ringside_common::{NewsItem, RecencyWindow, RingsideResult};

/// Keep news items published within the last `window_days` days.
///
/// `window_days` is user-facing text; anything that is not a non-negative
/// whole number is rejected before any filtering happens.
pub fn filter_by_recency(items: &[NewsItem], window_days: &str) -> RingsideResult<Vec<NewsItem>> {
    let window = RecencyWindow::parse(window_days)?;
    Ok(filter_by_recency_at(items, window, Utc::now()))
}

/// Keep items whose `pub_date` is on or after `now - window`, in input order.
pub fn filter_by_recency_at(
    items: &[NewsItem],
    window: RecencyWindow,
    now: DateTime<Utc>,
) -> Vec<NewsItem> {
    let cutoff = window.cutoff(now);

    let kept: Vec<NewsItem> = items
        .iter()
        .filter(|item| item.pub_date >= cutoff)
        .cloned()
        .collect();

    debug!(
        total = items.len(),
        kept = kept.len(),
        window = %window,
        cutoff = %cutoff,
        "news: filtered by recency"
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use ringside_common::RingsideError;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 20, 18, 0, 0).unwrap()
    }

    fn item(title: &str, age: Duration) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            content_snippet: None,
            pub_date: now() - age,
            link: None,
            source: None,
        }
    }

    #[test]
    fn keeps_items_inside_window_in_original_order() {
        let items = vec![
            item("fresh", Duration::hours(2)),
            item("stale", Duration::days(10)),
            item("last week", Duration::days(6)),
        ];

        let kept = filter_by_recency_at(&items, RecencyWindow::days(7), now());
        let titles: Vec<&str> = kept.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["fresh", "last week"]);
    }

    #[test]
    fn item_exactly_at_cutoff_is_kept() {
        let items = vec![item("boundary", Duration::days(7))];
        let kept = filter_by_recency_at(&items, RecencyWindow::days(7), now());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn zero_window_keeps_only_future_or_now() {
        let items = vec![item("now", Duration::zero()), item("a minute ago", Duration::minutes(1))];
        let kept = filter_by_recency_at(&items, RecencyWindow::days(0), now());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "now");
    }

    #[test]
    fn widening_window_never_shrinks_result() {
        let items: Vec<NewsItem> = (0..40)
            .map(|d| item(&format!("day {d}"), Duration::days(d) + Duration::hours(3)))
            .collect();

        let mut previous = 0;
        for days in 0..45 {
            let kept = filter_by_recency_at(&items, RecencyWindow::days(days), now());
            assert!(kept.len() >= previous, "window {days} shrank the result");
            previous = kept.len();
        }
        assert_eq!(previous, items.len());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let items = vec![item("ancient", Duration::days(365))];
        let kept = filter_by_recency(&items, "1").unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn window_beyond_calendar_range_keeps_everything() {
        let items = vec![item("ancient", Duration::days(365 * 200)), item("fresh", Duration::hours(1))];
        let kept = filter_by_recency(&items, "4294967295").unwrap();
        assert_eq!(kept, items);
    }

    #[test]
    fn non_numeric_window_is_rejected() {
        let err = filter_by_recency(&[], "a week").unwrap_err();
        assert!(matches!(err, RingsideError::InvalidArgument(_)));
    }
}
