//! Filter state for the load board, round-tripped through the URL query string.
//!
//! Every view the board can show is captured by a [`LoadFilters`] value, so a
//! history entry (or a pasted link) restores search, status, carrier and page
//! exactly. Fields at their defaults are omitted from the encoded form to keep
//! URLs short.

use std::fmt;

/// Search text, reference-data filters and page selection for the load board.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFilters {
    /// 1-based page number.
    pub page: u32,
    /// Free-text search over load id, origin and destination.
    pub search: String,
    /// Status id filter, `None` when showing all statuses.
    pub status: Option<u32>,
    /// Carrier id filter, `None` when showing all carriers.
    pub carrier: Option<u32>,
}

impl Default for LoadFilters {
    fn default() -> Self {
        LoadFilters {
            page: 1,
            search: String::new(),
            status: None,
            carrier: None,
        }
    }
}

impl LoadFilters {
    /// Encodes the non-default fields as a query string, without the leading `?`.
    ///
    /// Zero ids count as unset, mirroring the parse side.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if self.page > 1 {
            pairs.push(format!("page={}", self.page));
        }
        if !self.search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        if let Some(status) = self.status.filter(|&id| id >= 1) {
            pairs.push(format!("status={}", status));
        }
        if let Some(carrier) = self.carrier.filter(|&id| id >= 1) {
            pairs.push(format!("carrier={}", carrier));
        }
        pairs.join("&")
    }

    /// Parses a query string, with or without the leading `?`.
    ///
    /// Unknown keys are ignored, the first occurrence of a repeated key wins,
    /// and values that fail to parse fall back to the field's default.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let page = first_value(query, "page")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);
        let search = first_value(query, "search").unwrap_or_default();
        let status = first_value(query, "status").and_then(|v| parse_id(&v));
        let carrier = first_value(query, "carrier").and_then(|v| parse_id(&v));
        LoadFilters {
            page,
            search,
            status,
            carrier,
        }
    }

    /// Replaces the search text and returns to the first page.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        LoadFilters {
            page: 1,
            search: search.into(),
            ..self.clone()
        }
    }

    /// Replaces the status filter and returns to the first page.
    pub fn with_status(&self, status: Option<u32>) -> Self {
        LoadFilters {
            page: 1,
            status,
            ..self.clone()
        }
    }

    /// Replaces the carrier filter and returns to the first page.
    pub fn with_carrier(&self, carrier: Option<u32>) -> Self {
        LoadFilters {
            page: 1,
            carrier,
            ..self.clone()
        }
    }

    /// Moves to `page`, clamped to 1 at the low end.
    pub fn with_page(&self, page: u32) -> Self {
        LoadFilters {
            page: page.max(1),
            ..self.clone()
        }
    }
}

/// First value for `key` in a `k=v&k=v` query string, percent-decoded.
///
/// `+` is treated as a space. If percent-decoding produces invalid UTF-8 the
/// value is kept as-is rather than dropped.
fn first_value(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if k != key {
            return None;
        }
        let v = v.replace('+', " ");
        Some(match urlencoding::decode(&v) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => v,
        })
    })
}

/// Reference-data ids are positive integers. Zero or garbage means "no filter".
fn parse_id(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|&id| id >= 1)
}

// The router stores the whole query segment as one LoadFilters value and
// percent-decodes the stored string once before handing it to From<&str> on
// a history restore. Display escapes the codec's percent signs so that
// decode pass peels exactly one layer off and from_query receives the
// canonical to_query form, search text still encoded and separators intact.
impl fmt::Display for LoadFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query().replace('%', "%25"))
    }
}

impl From<&str> for LoadFilters {
    fn from(query: &str) -> Self {
        LoadFilters::from_query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_encodes_to_empty_query() {
        assert_eq!(LoadFilters::default().to_query(), "");
        assert_eq!(LoadFilters::from_query(""), LoadFilters::default());
    }

    #[test]
    fn test_full_round_trip() {
        let filters = LoadFilters {
            page: 3,
            search: "chicago".to_string(),
            status: Some(2),
            carrier: Some(7),
        };
        assert_eq!(filters.to_query(), "page=3&search=chicago&status=2&carrier=7");
        assert_eq!(LoadFilters::from_query(&filters.to_query()), filters);
    }

    #[test]
    fn test_page_one_is_omitted() {
        let filters = LoadFilters::default().with_search("rail");
        assert_eq!(filters.to_query(), "search=rail");
    }

    #[test]
    fn test_search_is_percent_encoded() {
        let filters = LoadFilters::default().with_search("Fort Worth & Co");
        assert_eq!(filters.to_query(), "search=Fort%20Worth%20%26%20Co");
        assert_eq!(LoadFilters::from_query(&filters.to_query()), filters);
    }

    #[test]
    fn test_plus_decodes_as_space() {
        assert_eq!(LoadFilters::from_query("search=los+angeles").search, "los angeles");
    }

    #[test]
    fn test_leading_question_mark_is_tolerated() {
        let filters = LoadFilters::from_query("?page=2&status=4");
        assert_eq!(filters.page, 2);
        assert_eq!(filters.status, Some(4));
    }

    #[test]
    fn test_invalid_page_falls_back_to_one() {
        for query in ["page=0", "page=-2", "page=abc", "page=", "page"] {
            assert_eq!(LoadFilters::from_query(query).page, 1, "query {query:?}");
        }
    }

    #[test]
    fn test_zero_or_invalid_id_means_unfiltered() {
        let filters = LoadFilters::from_query("status=0&carrier=nope");
        assert_eq!(filters.status, None);
        assert_eq!(filters.carrier, None);
    }

    #[test]
    fn test_first_occurrence_of_repeated_key_wins() {
        let filters = LoadFilters::from_query("page=2&page=9&search=a&search=b");
        assert_eq!(filters.page, 2);
        assert_eq!(filters.search, "a");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let filters = LoadFilters::from_query("sort=asc&limit=50&search=rail");
        assert_eq!(filters, LoadFilters::default().with_search("rail"));
    }

    #[test]
    fn test_filter_changes_reset_the_page() {
        let paged = LoadFilters::default().with_page(4);
        assert_eq!(paged.with_search("x").page, 1);
        assert_eq!(paged.with_status(Some(2)).page, 1);
        assert_eq!(paged.with_carrier(Some(3)).page, 1);
    }

    #[test]
    fn test_with_page_clamps_to_one() {
        assert_eq!(LoadFilters::default().with_page(0).page, 1);
    }

    #[test]
    fn test_with_page_preserves_the_other_fields() {
        let filters = LoadFilters {
            page: 1,
            search: "chicago".to_string(),
            status: Some(2),
            carrier: Some(7),
        };
        let paged = filters.with_page(3);
        assert_eq!(paged.page, 3);
        assert_eq!(paged.search, filters.search);
        assert_eq!(paged.status, filters.status);
        assert_eq!(paged.carrier, filters.carrier);
    }

    #[test]
    fn test_clearing_a_filter_also_resets_the_page() {
        let filters = LoadFilters::from_query("page=5&status=2");
        let cleared = filters.with_status(None);
        assert_eq!(cleared, LoadFilters::default());
    }

    #[test]
    fn test_route_storage_escapes_the_codec_percent_signs() {
        let plain = LoadFilters::default().with_status(Some(5)).with_page(2);
        assert_eq!(plain.to_string(), "page=2&status=5");

        let encoded = LoadFilters::default().with_search("los angeles");
        assert_eq!(encoded.to_query(), "search=los%20angeles");
        assert_eq!(encoded.to_string(), "search=los%2520angeles");
    }

    #[test]
    fn test_reparse_after_route_decode_restores_the_state() {
        // Route storage percent-decodes the query once before it reaches
        // From<&str>; reserved characters in the search text must survive.
        for search in ["plain", "Fort Worth & Co", "a+b", "50% off", "100%25"] {
            let filters = LoadFilters {
                page: 2,
                search: search.to_string(),
                status: Some(3),
                carrier: Some(7),
            };
            let stored = filters.to_string();
            let decoded = urlencoding::decode(&stored).unwrap();
            assert_eq!(
                LoadFilters::from(decoded.as_ref()),
                filters,
                "search {search:?}"
            );
        }
    }

    #[test]
    fn test_zero_ids_are_not_emitted() {
        let filters = LoadFilters {
            page: 1,
            search: String::new(),
            status: Some(0),
            carrier: Some(0),
        };
        assert_eq!(filters.to_query(), "");
        assert_eq!(LoadFilters::from_query(&filters.to_query()), LoadFilters::default());
    }
}
