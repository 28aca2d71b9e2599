use axum::http::Uri;
use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 25;
pub const MAX_LIMIT: u32 = 100;

/// Resolved page/limit/offset triple for a list request.
///
/// Invariants: `page >= 1`, `1 <= limit <= max_limit`, and
/// `offset == (page - 1) * limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub offset: u64,
}

impl Pagination {
    /// Resolve pagination from an already-parsed request URI.
    ///
    /// Never fails: a missing, non-numeric or non-positive `page` becomes 1,
    /// and a missing, non-numeric or zero `limit` becomes `default_limit`
    /// before being clamped into `1..=max_limit`.
    pub fn from_uri(uri: &Uri, default_limit: u32, max_limit: u32) -> Self {
        Self::from_query(uri.query().unwrap_or_default(), default_limit, max_limit)
    }

    /// Resolve pagination from a raw `application/x-www-form-urlencoded`
    /// query string (without the leading `?`).
    pub fn from_query(query: &str, default_limit: u32, max_limit: u32) -> Self {
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self::from_pairs(&pairs, default_limit, max_limit)
    }

    fn from_pairs(pairs: &[(String, String)], default_limit: u32, max_limit: u32) -> Self {
        let raw = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| parse_leading_int(v))
        };

        // A zero parse is treated like a failed one for both parameters.
        let page = match raw("page") {
            Some(p) if p != 0 => p.max(1),
            _ => 1,
        };
        let limit = match raw("limit") {
            Some(l) if l != 0 => l,
            _ => i64::from(default_limit),
        };
        let limit = limit.clamp(1, i64::from(max_limit.max(1)));

        let page = u32::try_from(page).unwrap_or(u32::MAX);
        let limit = u32::try_from(limit).unwrap_or(u32::MAX);
        Self {
            page,
            limit,
            offset: u64::from(page - 1) * u64::from(limit),
        }
    }
}

/// Parse pagination parameters out of a URL string.
///
/// Only the query component is consulted: everything after the first `?`
/// and before any `#fragment`. The rest of the URL is never validated, so
/// characters a strict URI parser rejects elsewhere in the string do not
/// affect the result.
pub fn parse_pagination(url: &str, default_limit: u32, max_limit: u32) -> Pagination {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    let query = without_fragment
        .split_once('?')
        .map_or("", |(_, query)| query);
    Pagination::from_query(query, default_limit, max_limit)
}

/// Lenient integer parse: leading whitespace, an optional sign, then a run
/// of decimal digits. Trailing garbage is ignored (`"3abc"` is 3, `"2.5"`
/// is 2). Out-of-range values saturate.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Standard envelope for offset-paginated list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    /// Wrap one page of results. `total` is the full match count, not
    /// `data.len()`. `page` and `limit` are trusted as already resolved.
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

pub fn paginated_response<T>(
    data: Vec<T>,
    total: u64,
    page: u32,
    limit: u32,
) -> PaginatedResponse<T> {
    PaginatedResponse::new(data, total, page, limit)
}

/// Slice an in-memory collection according to `pagination` and wrap it.
pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> PaginatedResponse<T> {
    let start = usize::try_from(pagination.offset)
        .unwrap_or(usize::MAX)
        .min(items.len());
    let end = start
        .saturating_add(pagination.limit as usize)
        .min(items.len());
    PaginatedResponse::new(
        items[start..end].to_vec(),
        items.len() as u64,
        pagination.page,
        pagination.limit,
    )
}
