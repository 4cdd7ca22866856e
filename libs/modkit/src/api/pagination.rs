//! Offset pagination for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

/// `?skip=&limit=` query parameters as sent by clients.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Number of records to skip (default 0).
    pub skip: Option<u64>,
    /// Maximum number of records to return (default 100).
    pub limit: Option<u64>,
}

/// Resolved window into an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

/// SQL backends bind offsets and limits as signed 64-bit integers.
const MAX_SQL_WINDOW: u64 = i64::MAX as u64;

impl PageQuery {
    /// Apply defaults and clamp `limit` to `max_limit`.
    ///
    /// Both values are also capped at `i64::MAX`; a larger `skip` simply
    /// points past the end of the collection.
    pub fn resolve(self, default_limit: u64, max_limit: u64) -> Page {
        Page {
            skip: self.skip.unwrap_or(0).min(MAX_SQL_WINDOW),
            limit: self
                .limit
                .unwrap_or(default_limit)
                .min(max_limit)
                .min(MAX_SQL_WINDOW),
        }
    }
}

impl Page {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        assert_eq!(PageQuery::default().resolve(100, 1000), Page::new(0, 100));
    }

    #[test]
    fn limit_is_clamped() {
        let q = PageQuery {
            skip: Some(5),
            limit: Some(5000),
        };
        assert_eq!(q.resolve(100, 1000), Page::new(5, 1000));
    }

    #[test]
    fn huge_values_fit_a_signed_sql_integer() {
        let q = PageQuery {
            skip: Some(u64::MAX),
            limit: Some(u64::MAX),
        };
        let page = q.resolve(100, u64::MAX);
        assert_eq!(page.skip, i64::MAX as u64);
        assert_eq!(page.limit, i64::MAX as u64);
    }

    #[test]
    fn zero_limit_is_kept() {
        let q = PageQuery {
            skip: None,
            limit: Some(0),
        };
        assert_eq!(q.resolve(100, 1000).limit, 0);
    }
}
