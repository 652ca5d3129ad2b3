//! Domain validators
//!
//! Pure pre-submission checks mirroring the server-side constraints. A
//! failing draft never reaches the network: the form and page controllers
//! block submission on any non-empty result.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Coupon, CouponDraft, ProductDraft};

/// Per-deployment validation rules.
///
/// The two deployed UIs disagree on the minimum price (0.01 vs. any positive
/// value) and on whether the description is required. Each deployment picks
/// exactly one policy; the rules are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPolicy {
    /// Smallest accepted price; a price exactly at the minimum passes
    pub min_price: f64,
    pub require_description: bool,
}

impl DraftPolicy {
    /// Backend-aligned rules: price at least 0.01, description required
    pub fn strict() -> Self {
        Self {
            min_price: 0.01,
            require_description: true,
        }
    }

    /// Any positive price, description optional
    pub fn lenient() -> Self {
        Self {
            min_price: 0.0,
            require_description: false,
        }
    }
}

impl Default for DraftPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Field name → error message mapping; empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the stored error for one field, leaving the others untouched
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a product draft against the deployment policy.
///
/// Text fields must be non-empty after trimming; the price must be positive
/// and at least `policy.min_price`; the stock must not be negative.
pub fn validate_product_draft(draft: &ProductDraft, policy: &DraftPolicy) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
    if policy.require_description && draft.description.trim().is_empty() {
        errors.insert("description", "Description is required");
    }
    if draft.category.trim().is_empty() {
        errors.insert("category", "Category is required");
    }
    if draft.price <= 0.0 {
        errors.insert("price", "Price must be greater than zero");
    } else if draft.price < policy.min_price {
        errors.insert(
            "price",
            format!("Price must be at least {:.2}", policy.min_price),
        );
    }
    if draft.stock < 0 {
        errors.insert("stock", "Stock cannot be negative");
    }

    errors
}

/// Rejected discount percent input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercentError {
    #[error("Discount percent is required")]
    Required,
    #[error("Discount percent must be a number")]
    NotANumber,
    #[error("Discount percent must be greater than zero")]
    NotPositive,
    #[error("Discount percent cannot exceed 100")]
    TooLarge,
}

/// Parse and range-check a raw percent input; accepts the half-open window
/// (0, 100] and returns the parsed value.
pub fn validate_discount_percent(input: &str) -> Result<f64, PercentError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PercentError::Required);
    }
    let percent: f64 = trimmed.parse().map_err(|_| PercentError::NotANumber)?;
    if !percent.is_finite() {
        return Err(PercentError::NotANumber);
    }
    if percent <= 0.0 {
        return Err(PercentError::NotPositive);
    }
    if percent > 100.0 {
        return Err(PercentError::TooLarge);
    }
    Ok(percent)
}

/// Rejected coupon selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponSelectionError {
    /// Empty selection, or a code not present in the loaded set
    #[error("No coupon selected")]
    NotSelected,
    #[error("This coupon is not active")]
    NotActive,
}

/// Check a selected coupon code against the loaded coupon collection and
/// return the matching coupon.
pub fn validate_coupon_selection<'a>(
    code: &str,
    coupons: &'a [Coupon],
) -> Result<&'a Coupon, CouponSelectionError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(CouponSelectionError::NotSelected);
    }
    let coupon = coupons
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .ok_or(CouponSelectionError::NotSelected)?;
    if !coupon.is_active {
        return Err(CouponSelectionError::NotActive);
    }
    Ok(coupon)
}

/// Validate a coupon creation draft against the server's rules: non-empty
/// code, percentage within [0, 100], a coherent validity window ending in
/// the future, and a usage limit of at least 1 when given.
pub fn validate_coupon_draft(draft: &CouponDraft, now: DateTime<Utc>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.code.trim().is_empty() {
        errors.insert("code", "Code is required");
    }
    if !(0.0..=100.0).contains(&draft.discount_percentage) {
        errors.insert(
            "discount_percentage",
            "Discount percentage must be between 0 and 100",
        );
    }
    if draft.valid_from >= draft.valid_until {
        errors.insert("valid_from", "Start date must be before the end date");
    }
    if draft.valid_until <= now {
        errors.insert("valid_until", "End date must be in the future");
    }
    if let Some(limit) = draft.usage_limit {
        if limit < 1 {
            errors.insert("usage_limit", "Usage limit must be at least 1");
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(name: &str, description: &str, category: &str, price: f64, stock: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price,
            stock,
        }
    }

    fn coupon(code: &str, active: bool) -> Coupon {
        Coupon {
            id: None,
            code: code.to_string(),
            description: String::new(),
            discount_percentage: 10.0,
            valid_from: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            valid_until: Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(),
            usage_limit: 10,
            usage_count: 0,
            is_active: active,
            is_valid: active,
            is_expired: false,
            is_not_started: false,
            is_limit_reached: false,
            remaining_uses: 10,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn empty_fields_are_all_reported() {
        let errors = validate_product_draft(&draft("", "  ", "\t", 10.0, 0), &DraftPolicy::strict());
        assert!(errors.get("name").is_some());
        assert!(errors.get("description").is_some());
        assert!(errors.get("category").is_some());
        assert!(errors.get("price").is_none());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn price_boundary_follows_policy_minimum() {
        let strict = DraftPolicy::strict();
        let ok = |p| validate_product_draft(&draft("a", "b", "c", p, 0), &strict);
        assert_eq!(ok(0.0).get("price"), Some("Price must be greater than zero"));
        assert_eq!(ok(-1.0).get("price"), Some("Price must be greater than zero"));
        assert_eq!(ok(0.005).get("price"), Some("Price must be at least 0.01"));
        assert!(ok(0.01).is_empty());

        let lenient = DraftPolicy::lenient();
        let errors = validate_product_draft(&draft("a", "", "c", 0.005, 0), &lenient);
        assert!(errors.is_empty());
    }

    #[test]
    fn negative_stock_is_rejected() {
        let errors = validate_product_draft(&draft("a", "b", "c", 1.0, -1), &DraftPolicy::strict());
        assert_eq!(errors.get("stock"), Some("Stock cannot be negative"));
    }

    #[test]
    fn percent_window_is_half_open() {
        assert_eq!(validate_discount_percent(""), Err(PercentError::Required));
        assert_eq!(
            validate_discount_percent("abc"),
            Err(PercentError::NotANumber)
        );
        assert_eq!(
            validate_discount_percent("0"),
            Err(PercentError::NotPositive)
        );
        assert_eq!(
            validate_discount_percent("-5"),
            Err(PercentError::NotPositive)
        );
        assert_eq!(
            validate_discount_percent("100.5"),
            Err(PercentError::TooLarge)
        );
        assert_eq!(validate_discount_percent("100"), Ok(100.0));
        assert_eq!(validate_discount_percent(" 12.5 "), Ok(12.5));
    }

    #[test]
    fn coupon_selection_distinguishes_missing_from_inactive() {
        let coupons = vec![coupon("PROMO10", true), coupon("OLD20", false)];

        assert_eq!(
            validate_coupon_selection("", &coupons),
            Err(CouponSelectionError::NotSelected)
        );
        assert_eq!(
            validate_coupon_selection("UNKNOWN", &coupons),
            Err(CouponSelectionError::NotSelected)
        );
        assert_eq!(
            validate_coupon_selection("OLD20", &coupons),
            Err(CouponSelectionError::NotActive)
        );
        let found = validate_coupon_selection("promo10", &coupons).unwrap();
        assert_eq!(found.code, "PROMO10");
    }

    #[test]
    fn coupon_draft_rules_match_server() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let valid = CouponDraft {
            code: "NEW10".to_string(),
            description: None,
            discount_percentage: 10.0,
            valid_from: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
            valid_until: Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(),
            usage_limit: Some(5),
        };
        assert!(validate_coupon_draft(&valid, now).is_empty());

        let mut bad = valid.clone();
        bad.code = "  ".to_string();
        bad.discount_percentage = 150.0;
        bad.usage_limit = Some(0);
        let errors = validate_coupon_draft(&bad, now);
        assert!(errors.get("code").is_some());
        assert!(errors.get("discount_percentage").is_some());
        assert!(errors.get("usage_limit").is_some());

        let mut inverted = valid.clone();
        inverted.valid_from = inverted.valid_until;
        assert!(
            validate_coupon_draft(&inverted, now)
                .get("valid_from")
                .is_some()
        );

        let mut past = valid;
        past.valid_until = Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap();
        assert!(
            validate_coupon_draft(&past, now)
                .get("valid_until")
                .is_some()
        );
    }
}
