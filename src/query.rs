//! Query State Store
//!
//! Single source of truth for filter + pagination state, mirrored into the
//! URL query string so table state survives reload and can be shared.
//! All mutations go through `set_param`/`reset`; nothing else touches the
//! query string.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Fixed page size for every table
pub const DEFAULT_LIMIT: u32 = 10;

/// Characters escaped in query keys and values
const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'%')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// String-keyed filter/pagination mapping. Keys are kept sorted so the
/// serialized form is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    params: BTreeMap<String, String>,
}

impl Default for QueryState {
    fn default() -> Self {
        let mut params = BTreeMap::new();
        params.insert("page".to_string(), "1".to_string());
        params.insert("limit".to_string(), DEFAULT_LIMIT.to_string());
        Self { params }
    }
}

impl QueryState {
    /// Parse a query string (with or without leading `?`). Unknown keys
    /// pass through inertly; malformed pairs are skipped, never an error.
    pub fn parse(query: &str) -> Self {
        let mut state = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };
            let key = percent_decode_str(key).decode_utf8_lossy().into_owned();
            let value = percent_decode_str(value).decode_utf8_lossy().into_owned();
            if !key.is_empty() {
                state.params.insert(key, value);
            }
        }
        state
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Current page, clamped to at least 1
    pub fn page(&self) -> u32 {
        self.get("page")
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(1)
            .max(1)
    }

    pub fn limit(&self) -> u32 {
        self.get("limit")
            .and_then(|l| l.parse::<u32>().ok())
            .unwrap_or(DEFAULT_LIMIT)
    }

    /// Merge one key into the state. `None` deletes the key.
    ///
    /// Two coupled rules:
    /// - `createdAt` and `range` are mutually exclusive; setting one
    ///   removes the other.
    /// - setting any key other than `page` resets `page` to `"1"`,
    ///   so a filter change never strands the user on a stale page.
    pub fn set_param(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.params.insert(key.to_string(), v.to_string());
            }
            None => {
                self.params.remove(key);
            }
        }
        match key {
            "createdAt" if value.is_some() => {
                self.params.remove("range");
            }
            "range" if value.is_some() => {
                self.params.remove("createdAt");
            }
            _ => {}
        }
        if key != "page" {
            self.params.insert("page".to_string(), "1".to_string());
        }
    }

    /// Clamp `page` into `[1, page_count]` once the server-reported total
    /// is known.
    pub fn clamp_page(&mut self, page_count: u32) {
        let clamped = self.page().min(page_count.max(1));
        self.params.insert("page".to_string(), clamped.to_string());
    }

    /// Drop everything except the defaults (`page=1`, `limit=10`)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any key beyond the pagination defaults is set
    pub fn has_filters(&self) -> bool {
        self.params
            .keys()
            .any(|k| k != "page" && k != "limit")
    }

    /// Percent-encoded `key=value` pairs joined with `&`, in key order
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_SET),
                    utf8_percent_encode(v, QUERY_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Read the current URL query into a `QueryState`
pub fn from_location() -> QueryState {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    QueryState::parse(&search)
}

/// Push the state into the URL without a navigation
pub fn sync_to_url(state: &QueryState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    let url = format!("{}?{}", path, state.to_query_string());
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = QueryState::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);
        assert!(!q.has_filters());
    }

    #[test]
    fn test_created_at_and_range_are_mutually_exclusive() {
        let mut q = QueryState::default();
        q.set_param("createdAt", Some("2024-01-01"));
        q.set_param("range", Some("7"));
        assert_eq!(q.get("range"), Some("7"));
        assert_eq!(q.get("createdAt"), None);

        q.set_param("createdAt", Some("2024-02-02"));
        assert_eq!(q.get("createdAt"), Some("2024-02-02"));
        assert_eq!(q.get("range"), None);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut q = QueryState::default();
        q.set_param("page", Some("3"));
        assert_eq!(q.page(), 3);

        q.set_param("status", Some("Pending"));
        assert_eq!(q.page(), 1);

        q.set_param("page", Some("2"));
        q.set_param("range", Some("30"));
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_set_date_on_filtered_state() {
        // page=2 + status=Pending, then an absolute date arrives
        let mut q = QueryState::default();
        q.set_param("status", Some("Pending"));
        q.set_param("page", Some("2"));

        q.set_param("createdAt", Some("2024-01-01"));

        assert_eq!(q.get("page"), Some("1"));
        assert_eq!(q.get("createdAt"), Some("2024-01-01"));
        assert_eq!(q.get("status"), Some("Pending"));
        assert_eq!(q.get("range"), None);
    }

    #[test]
    fn test_none_deletes_key() {
        let mut q = QueryState::default();
        q.set_param("status", Some("Replied"));
        q.set_param("status", None);
        assert_eq!(q.get("status"), None);
    }

    #[test]
    fn test_reset_keeps_defaults_only() {
        let mut q = QueryState::default();
        q.set_param("status", Some("Pending"));
        q.set_param("category", Some("tech"));
        q.reset();
        assert_eq!(q.get("status"), None);
        assert_eq!(q.get("category"), None);
        assert_eq!(q.get("page"), Some("1"));
        assert_eq!(q.get("limit"), Some("10"));
    }

    #[test]
    fn test_screen_change_rewinds_to_defaults() {
        // On navigation the URL is rewritten from a fresh default state,
        // so another screen's filter keys never survive into the next
        // screen's initial parse.
        let foreign = QueryState::parse("?page=3&status=draft&category=tech");
        assert!(foreign.has_filters());

        let fresh = QueryState::default();
        assert!(!fresh.has_filters());
        let reread = QueryState::parse(&fresh.to_query_string());
        assert_eq!(reread.get("status"), None);
        assert_eq!(reread.get("category"), None);
        assert_eq!(reread.page(), 1);
    }

    #[test]
    fn test_round_trip() {
        let mut q = QueryState::default();
        q.set_param("category", Some("web apps"));
        q.set_param("range", Some("7"));
        let parsed = QueryState::parse(&q.to_query_string());
        assert_eq!(parsed, q);
    }

    #[test]
    fn test_parse_passes_unknown_keys_through() {
        let q = QueryState::parse("?page=4&utm_source=mail&weird");
        assert_eq!(q.page(), 4);
        assert_eq!(q.get("utm_source"), Some("mail"));
        assert_eq!(q.get("weird"), Some(""));
    }

    #[test]
    fn test_clamp_page() {
        let mut q = QueryState::default();
        q.set_param("page", Some("9"));
        q.clamp_page(3);
        assert_eq!(q.page(), 3);
        q.clamp_page(0);
        assert_eq!(q.page(), 1);
    }
}
