//! Filter/Sort Projection
//!
//! Pure derivation of the displayed sequence from the canonical list and
//! the active filter criteria. Never mutates the canonical list; time
//! windows are evaluated against the `now` passed in at projection time.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::ListEntity;
use crate::query::QueryState;

/// Relative creation-time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    /// age < 1 day
    Today,
    /// age <= N days
    Days(u32),
}

impl TimeRange {
    /// URL values are `today|7|15|30`; `week` and `month` are accepted as
    /// aliases for 7 and 30 (the values the dashboard UI historically
    /// used). Anything else is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "today" => Some(Self::Today),
            "week" => Some(Self::Days(7)),
            "month" => Some(Self::Days(30)),
            other => other.parse::<u32>().ok().filter(|d| *d > 0).map(Self::Days),
        }
    }

    fn matches(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(created_at);
        match self {
            Self::Today => age < chrono::Duration::days(1),
            Self::Days(days) => age <= chrono::Duration::days(*days as i64),
        }
    }
}

/// How the projected sequence is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Newest first, the default display order
    #[default]
    CreatedAtDesc,
    /// Keep the input sequence untouched; reorder-primary tables pass the
    /// drag list, whose sequence is the storage order (or the live
    /// preview mid-gesture)
    StorageOrder,
}

/// Active predicates, derived from the query state. At most one of
/// `range`/`created_on` is set (the query store enforces exclusivity).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub status: Option<String>,
    pub range: Option<TimeRange>,
    pub created_on: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn from_query(query: &QueryState) -> Self {
        let category = query
            .get("category")
            .filter(|c| !c.is_empty() && *c != "All")
            .map(str::to_string);
        let status = query
            .get("status")
            .filter(|s| !s.is_empty() && *s != "All")
            .map(str::to_string);
        let range = query.get("range").and_then(TimeRange::parse);
        let created_on = query
            .get("createdAt")
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
        Self {
            category,
            status,
            range,
            created_on,
        }
    }

    /// True when any predicate narrows the visible set. Index-based
    /// reordering is incoherent over a partial view: a drop measured over
    /// the visible rows would move the dragged row past hidden ones.
    pub fn narrows(&self) -> bool {
        self.category.is_some()
            || self.status.is_some()
            || self.range.is_some()
            || self.created_on.is_some()
    }
}

/// Apply predicates in fixed order (category, status, time) and sort.
/// Items with absent optional fields simply fail the specific predicates;
/// they are never an error.
pub fn project<T: ListEntity>(
    items: &[T],
    criteria: &FilterCriteria,
    sort: SortMode,
    now: DateTime<Utc>,
) -> Vec<T> {
    let mut result: Vec<T> = items
        .iter()
        .filter(|item| {
            if let Some(category) = &criteria.category {
                if item.category() != Some(category.as_str()) {
                    return false;
                }
            }
            if let Some(status) = &criteria.status {
                if item.status_label() != Some(status.as_str()) {
                    return false;
                }
            }
            if let Some(range) = &criteria.range {
                match item.created_at() {
                    Some(created) if range.matches(created, now) => {}
                    _ => return false,
                }
            }
            if let Some(date) = &criteria.created_on {
                match item.created_at() {
                    Some(created) if created.date_naive() == *date => {}
                    _ => return false,
                }
            }
            true
        })
        .cloned()
        .collect();

    match sort {
        SortMode::CreatedAtDesc => {
            // Missing timestamps sink to the end
            result.sort_by(|a, b| match (b.created_at(), a.created_at()) {
                (Some(b_at), Some(a_at)) => b_at.cmp(&a_at),
                (Some(_), None) => std::cmp::Ordering::Greater,
                (None, Some(_)) => std::cmp::Ordering::Less,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }
        SortMode::StorageOrder => {}
    }
    result
}

/// Distinct categories present in the list, "All" first; used to build
/// the category dropdown.
pub fn category_options<T: ListEntity>(items: &[T]) -> Vec<String> {
    let mut options = vec!["All".to_string()];
    for item in items {
        if let Some(category) = item.category() {
            if !category.is_empty() && !options.iter().any(|c| c == category) {
                options.push(category.to_string());
            }
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Blog;
    use chrono::Duration;

    fn make_blog(id: &str, category: Option<&str>, age_days: i64, now: DateTime<Utc>) -> Blog {
        Blog {
            id: id.to_string(),
            title: format!("Blog {}", id),
            category: category.map(str::to_string),
            created_at: Some(now - Duration::days(age_days)),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-06-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_week_window_with_category() {
        // tech items aged 2, 10, 40 days; only the 2-day-old survives
        let now = now();
        let blogs = vec![
            make_blog("a", Some("tech"), 2, now),
            make_blog("b", Some("tech"), 10, now),
            make_blog("c", Some("tech"), 40, now),
        ];
        let criteria = FilterCriteria {
            category: Some("tech".to_string()),
            range: TimeRange::parse("week"),
            ..Default::default()
        };
        let shown = project(&blogs, &criteria, SortMode::CreatedAtDesc, now);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "a");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let now = now();
        let blogs = vec![
            make_blog("a", Some("tech"), 1, now),
            make_blog("b", Some("life"), 3, now),
            make_blog("c", Some("tech"), 9, now),
        ];
        let criteria = FilterCriteria {
            range: Some(TimeRange::Days(30)),
            ..Default::default()
        };
        let once = project(&blogs, &criteria, SortMode::CreatedAtDesc, now);
        let twice = project(&once, &criteria, SortMode::CreatedAtDesc, now);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_default_sort_is_created_at_desc() {
        let now = now();
        let blogs = vec![
            make_blog("old", None, 20, now),
            make_blog("new", None, 1, now),
            make_blog("mid", None, 5, now),
        ];
        let shown = project(&blogs, &FilterCriteria::default(), SortMode::CreatedAtDesc, now);
        let ids: Vec<&str> = shown.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_missing_created_at_fails_time_filters_but_not_projection() {
        let now = now();
        let mut dateless = make_blog("x", Some("tech"), 0, now);
        dateless.created_at = None;
        let blogs = vec![dateless.clone(), make_blog("y", Some("tech"), 2, now)];

        let with_range = FilterCriteria {
            range: Some(TimeRange::Days(7)),
            ..Default::default()
        };
        let shown = project(&blogs, &with_range, SortMode::CreatedAtDesc, now);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "y");

        // No time filter: the dateless item stays, sorted last
        let shown = project(&blogs, &FilterCriteria::default(), SortMode::CreatedAtDesc, now);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[1].id, "x");
    }

    #[test]
    fn test_today_is_strictly_under_one_day() {
        let now = now();
        let blogs = vec![
            make_blog("fresh", None, 0, now),
            make_blog("yesterday", None, 1, now),
        ];
        let criteria = FilterCriteria {
            range: Some(TimeRange::Today),
            ..Default::default()
        };
        let shown = project(&blogs, &criteria, SortMode::CreatedAtDesc, now);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "fresh");
    }

    #[test]
    fn test_absolute_date_matches_calendar_day() {
        let now = now();
        let blogs = vec![
            make_blog("a", None, 2, now),
            make_blog("b", None, 3, now),
        ];
        let criteria = FilterCriteria {
            created_on: Some("2025-06-13".parse().unwrap()),
            ..Default::default()
        };
        let shown = project(&blogs, &criteria, SortMode::CreatedAtDesc, now);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "a");
    }

    #[test]
    fn test_range_aliases() {
        assert_eq!(TimeRange::parse("today"), Some(TimeRange::Today));
        assert_eq!(TimeRange::parse("week"), Some(TimeRange::Days(7)));
        assert_eq!(TimeRange::parse("month"), Some(TimeRange::Days(30)));
        assert_eq!(TimeRange::parse("15"), Some(TimeRange::Days(15)));
        assert_eq!(TimeRange::parse("all"), None);
        assert_eq!(TimeRange::parse("0"), None);
    }

    #[test]
    fn test_criteria_from_query_ignores_all_sentinel() {
        let mut q = QueryState::default();
        q.set_param("category", Some("All"));
        q.set_param("status", Some("Pending"));
        let criteria = FilterCriteria::from_query(&q);
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.status.as_deref(), Some("Pending"));
    }

    #[test]
    fn test_narrows_on_any_active_predicate() {
        assert!(!FilterCriteria::default().narrows());
        assert!(FilterCriteria {
            category: Some("tech".to_string()),
            ..Default::default()
        }
        .narrows());
        assert!(FilterCriteria {
            status: Some("Pending".to_string()),
            ..Default::default()
        }
        .narrows());
        assert!(FilterCriteria {
            range: Some(TimeRange::Days(7)),
            ..Default::default()
        }
        .narrows());
        assert!(FilterCriteria {
            created_on: Some("2025-06-13".parse().unwrap()),
            ..Default::default()
        }
        .narrows());
    }

    #[test]
    fn test_category_options_unique_with_all_first() {
        let now = now();
        let blogs = vec![
            make_blog("a", Some("tech"), 1, now),
            make_blog("b", Some("life"), 2, now),
            make_blog("c", Some("tech"), 3, now),
            make_blog("d", None, 4, now),
        ];
        assert_eq!(category_options(&blogs), vec!["All", "tech", "life"]);
    }
}
