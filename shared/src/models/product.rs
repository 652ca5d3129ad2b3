//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Active discount mechanism on a product.
///
/// The server stores at most one mechanism at a time; the tagged encoding
/// makes "percent and coupon at once" unrepresentable on the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    /// Flat percentage off the list price
    Percent { percent: f64 },
    /// Discount taken from a coupon, referenced by code
    Coupon { code: String },
    /// No discount active
    #[default]
    None,
}

impl Discount {
    /// True when any discount mechanism is active
    pub fn is_active(&self) -> bool {
        !matches!(self, Discount::None)
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned ID, immutable once created
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    pub stock: i64,
    /// Active discount mechanism (absent on the wire means none)
    #[serde(default)]
    pub discount: Discount,
    /// Server-derived price after discount; never exceeds `price`
    #[serde(default)]
    pub final_price: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Price the buyer actually pays: the server-derived final price when a
    /// discount is active, the list price otherwise.
    pub fn effective_price(&self) -> f64 {
        self.final_price.unwrap_or(self.price)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }
}

/// Create/update payload
///
/// The forms always submit the full draft, so a single payload type covers
/// both POST and PUT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

/// Percent discount payload for `POST /products/{id}/discount/percent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentDiscountInput {
    pub percent: f64,
}

/// Coupon discount payload for `POST /products/{id}/discount/coupon`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponDiscountInput {
    pub code: String,
}

/// User-facing product filters, combined with AND semantics.
///
/// Filtering happens server-side; `matches` mirrors the server rule so the
/// controllers and tests can reason about expected results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl ProductFilters {
    /// No filtering at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// AND of every present criterion; the name match is a case-insensitive
    /// substring test.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// Sortable product columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    Name,
    Price,
    Stock,
    CreatedAt,
}

impl ProductSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Full query for `GET /products`: filters plus sorting, pagination, and
/// the stock/discount toggles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub filters: ProductFilters,
    pub sort_by: Option<ProductSort>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub has_discount: Option<bool>,
    pub only_out_of_stock: Option<bool>,
}

impl ProductQuery {
    /// Query with filters only, everything else server-default
    pub fn filtered(filters: ProductFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Wire query parameters, in the order the route documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.filters.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(min) = self.filters.min_price {
            pairs.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.filters.max_price {
            pairs.push(("max_price", max.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sort_order", order.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(has_discount) = self.has_discount {
            pairs.push(("has_discount", has_discount.to_string()));
        }
        if let Some(oos) = self.only_out_of_stock {
            pairs.push(("only_out_of_stock", oos.to_string()));
        }
        pairs
    }
}
