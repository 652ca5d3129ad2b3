//! Shared types for the Vitrine product/coupon management client
//!
//! Wire models, response envelopes, and the domain validators used by
//! both the API client and the admin controllers.

pub mod models;
pub mod response;
pub mod validate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Coupon, CouponDiscountInput, CouponDraft, CouponUpdate, CouponValidation, Discount,
    PercentDiscountInput, Product, ProductDraft, ProductFilters, ProductQuery, ProductSort,
    SortOrder,
};
pub use response::{ApiMessage, HealthStatus, ListEnvelope, PageMeta};
pub use validate::{
    CouponSelectionError, DraftPolicy, FieldErrors, PercentError, validate_coupon_draft,
    validate_coupon_selection, validate_discount_percent, validate_product_draft,
};
