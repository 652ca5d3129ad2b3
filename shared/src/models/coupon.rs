//! Coupon Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coupon entity
///
/// `code` is the primary key from the client's perspective; the validity
/// flags and `remaining_uses` are derived server-side at serialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default)]
    pub id: Option<i64>,
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub discount_percentage: f64,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub usage_limit: i32,
    #[serde(default)]
    pub usage_count: i32,
    pub is_active: bool,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default)]
    pub is_not_started: bool,
    #[serde(default)]
    pub is_limit_reached: bool,
    #[serde(default)]
    pub remaining_uses: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Recompute the derived validity flags against `now`.
    ///
    /// Mirrors the server's serialization rule; in-process test servers and
    /// demos use it to keep fixtures coherent.
    pub fn recompute_status(&mut self, now: DateTime<Utc>) {
        self.is_expired = now > self.valid_until;
        self.is_not_started = now < self.valid_from;
        self.is_limit_reached = self.usage_count >= self.usage_limit;
        self.remaining_uses = (self.usage_limit - self.usage_count).max(0);
        self.is_valid =
            self.is_active && !self.is_expired && !self.is_not_started && !self.is_limit_reached;
    }
}

/// Create coupon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponDraft {
    /// Uppercased server-side
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_percentage: f64,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    /// Server default is 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i32>,
}

/// Partial coupon update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i32>,
}

/// Result of `GET /coupons/validate/{code}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponValidation {
    pub valid: bool,
    /// Human-readable reason when invalid
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub coupon: Option<Coupon>,
}
