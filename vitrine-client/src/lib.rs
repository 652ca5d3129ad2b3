//! Vitrine Client - HTTP client for the product/coupon management API
//!
//! Typed resource operations over a pluggable transport: network calls via
//! reqwest, or in-process calls into an axum router for tests and demos.

pub mod client;
pub mod config;
pub mod coupons;
pub mod error;
pub mod oneshot;
pub mod products;
pub mod transport;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use oneshot::OneshotTransport;
pub use transport::{NetworkTransport, Transport};

// Re-export shared types for convenience
pub use shared::models::{
    Coupon, CouponDraft, CouponUpdate, CouponValidation, Discount, Product, ProductDraft,
    ProductFilters, ProductQuery, ProductSort, SortOrder,
};
pub use shared::response::HealthStatus;
