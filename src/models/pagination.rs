use serde::{Deserialize, Serialize};

/// Pagination metadata attached to a list response. Any key may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// One page of entities plus optional metadata.
///
/// Keys other than `data` and `meta` (e.g. `links`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> PaginatedResponse<T> {
    /// Last page number, `1` when absent or zero.
    pub fn last_page(&self) -> u32 {
        self.meta
            .and_then(|m| m.last_page)
            .filter(|&p| p > 0)
            .unwrap_or(1)
    }

    /// Total item count, falling back to the size of this page when absent.
    pub fn total(&self) -> u64 {
        self.meta
            .and_then(|m| m.total)
            .unwrap_or(self.data.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_laravel_style_page() {
        let page: PaginatedResponse<serde_json::Value> = serde_json::from_value(json!({
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"current_page": 2, "last_page": 4, "total": 70, "per_page": 20},
            "links": {"next": "http://api/patients?page=3"}
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.last_page(), 4);
        assert_eq!(page.total(), 70);
        assert_eq!(page.meta.unwrap().per_page, Some(20));
    }

    #[test]
    fn partial_meta_fills_gaps() {
        let page: PaginatedResponse<serde_json::Value> = serde_json::from_value(json!({
            "data": [{"id": 1}],
            "meta": {"total": 1}
        }))
        .unwrap();
        assert_eq!(page.last_page(), 1);
        assert_eq!(page.total(), 1);
        assert_eq!(page.meta.unwrap().current_page, None);

        let page: PaginatedResponse<serde_json::Value> = serde_json::from_value(json!({
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"last_page": 0}
        }))
        .unwrap();
        assert_eq!(page.last_page(), 1);
        assert_eq!(page.total(), 2);
    }

    #[test]
    fn explicit_zero_total_is_kept() {
        let page: PaginatedResponse<serde_json::Value> = serde_json::from_value(json!({
            "data": [{"id": 1}],
            "meta": {"current_page": 1, "last_page": 1, "total": 0}
        }))
        .unwrap();
        assert_eq!(page.total(), 0);
    }

    #[test]
    fn missing_meta_falls_back() {
        let page: PaginatedResponse<serde_json::Value> =
            serde_json::from_value(json!({"data": [{}, {}, {}]})).unwrap();
        assert_eq!(page.last_page(), 1);
        assert_eq!(page.total(), 3);
    }

    #[test]
    fn missing_data_is_empty() {
        let page: PaginatedResponse<serde_json::Value> = serde_json::from_value(json!({})).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total(), 0);
    }
}
