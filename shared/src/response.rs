//! API response envelopes
//!
//! List endpoints answer `{"data": [...], "meta": {...}}`; single resources
//! are bare objects. Mutation endpoints answer either an empty body or
//! `{"message": "..."}` — neither shape is relied on beyond the optional
//! message field.

use serde::{Deserialize, Serialize};

/// Envelope for list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> ListEnvelope<T> {
    /// The collection, or empty when the body omits the list
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Pagination metadata
///
/// The aliases absorb the two meta spellings the backend emits (camelCase
/// for products, `per_page`/`pages` for coupons).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, alias = "per_page")]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, alias = "totalPages", alias = "pages")]
    pub total_pages: Option<u32>,
    #[serde(default, alias = "hasNext")]
    pub has_next: Option<bool>,
    #[serde(default, alias = "hasPrev")]
    pub has_prev: Option<bool>,
}

/// Body of message-only mutation responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /health/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
