//! Search parameters and query-string encoding.

/// Limit/offset value that leaves the parameter out of the request.
pub const OMIT_PARAM: i64 = -1;

/// One search request: a Lucene query expression plus paging bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub limit: i64,
    pub offset: i64,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, limit: i64, offset: i64) -> Self {
        Self {
            query: query.into(),
            limit,
            offset,
        }
    }

    /// Ordered `(key, value)` pairs. `limit`/`offset` equal to [`OMIT_PARAM`]
    /// are skipped; every other value, zero and negatives included, is sent as-is.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("query", self.query.clone())];
        if let Some(limit) = int_param(self.limit) {
            pairs.push(("limit", limit));
        }
        if let Some(offset) = int_param(self.offset) {
            pairs.push(("offset", offset));
        }
        pairs
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn encode(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn int_param(value: i64) -> Option<String> {
    (value != OMIT_PARAM).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::{SearchParams, OMIT_PARAM};

    #[test]
    fn test_sentinel_omits_limit_and_offset() {
        let params = SearchParams::new("Nirvana", OMIT_PARAM, OMIT_PARAM);
        assert_eq!(params.encode(), "query=Nirvana");
    }

    #[test]
    fn test_offset_omitted_when_only_offset_is_sentinel() {
        let params = SearchParams::new("Nirvana", 5, OMIT_PARAM);
        assert_eq!(params.encode(), "query=Nirvana&limit=5");
    }

    #[test]
    fn test_zero_and_other_negatives_pass_through() {
        let params = SearchParams::new("x", 0, -2);
        assert_eq!(params.encode(), "query=x&limit=0&offset=-2");

        let params = SearchParams::new("x", -100, 0);
        assert_eq!(params.encode(), "query=x&limit=-100&offset=0");
    }

    #[test]
    fn test_query_value_is_percent_encoded() {
        let params = SearchParams::new("artist:\"Simon & Garfunkel\" AND country:US", 25, 50);
        assert_eq!(
            params.encode(),
            "query=artist%3A%22Simon%20%26%20Garfunkel%22%20AND%20country%3AUS&limit=25&offset=50"
        );
    }

    #[test]
    fn test_pairs_keep_query_limit_offset_order() {
        let keys: Vec<&str> = SearchParams::new("q", 1, 2)
            .to_pairs()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["query", "limit", "offset"]);
    }
}
