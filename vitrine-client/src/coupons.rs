//! Coupon API operations

use shared::models::{Coupon, CouponDraft, CouponUpdate, CouponValidation};
use shared::response::ListEnvelope;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
    // ========== Coupons API ==========

    /// List coupons; the endpoint takes no parameters.
    pub async fn list_coupons(&self) -> ClientResult<Vec<Coupon>> {
        let envelope: ListEnvelope<Coupon> = self.transport().get("/coupons/", &[]).await?;
        Ok(envelope.into_items())
    }

    /// Create a coupon.
    pub async fn create_coupon(&self, draft: &CouponDraft) -> ClientResult<Coupon> {
        self.transport().post("/coupons/", draft).await
    }

    /// Fetch a coupon by code.
    pub async fn get_coupon(&self, code: &str) -> ClientResult<Coupon> {
        self.transport()
            .get(&format!("/coupons/{}", code), &[])
            .await
    }

    /// Partially update a coupon by code.
    pub async fn update_coupon(&self, code: &str, update: &CouponUpdate) -> ClientResult<Coupon> {
        self.transport()
            .put(&format!("/coupons/{}", code), update)
            .await
    }

    /// Soft-delete a coupon by code.
    pub async fn delete_coupon(&self, code: &str) -> ClientResult<()> {
        self.transport().delete(&format!("/coupons/{}", code)).await
    }

    /// Mark a coupon as used, consuming one of its remaining uses.
    pub async fn use_coupon(&self, code: &str) -> ClientResult<Coupon> {
        self.transport()
            .post_empty(&format!("/coupons/use/{}", code))
            .await
    }

    /// Ask the server whether a coupon can currently be used.
    pub async fn validate_coupon(&self, code: &str) -> ClientResult<CouponValidation> {
        self.transport()
            .get(&format!("/coupons/validate/{}", code), &[])
            .await
    }
}
