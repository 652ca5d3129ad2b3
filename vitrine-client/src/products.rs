//! Product API operations

use shared::models::{
    CouponDiscountInput, PercentDiscountInput, Product, ProductDraft, ProductQuery,
};
use shared::response::{ApiMessage, ListEnvelope};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
    // ========== Products API ==========

    /// List products; a response without a `data` list yields `[]`.
    pub async fn list_products(&self, query: &ProductQuery) -> ClientResult<Vec<Product>> {
        let pairs = query.query_pairs();
        let envelope: ListEnvelope<Product> =
            self.transport().get("/products", &pairs).await?;
        Ok(envelope.into_items())
    }

    /// Fetch a single product by id.
    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.transport()
            .get(&format!("/products/{}", id), &[])
            .await
    }

    /// Create a product from a validated draft.
    pub async fn create_product(&self, draft: &ProductDraft) -> ClientResult<Product> {
        self.transport().post("/products/", draft).await
    }

    /// Replace a product's editable fields.
    pub async fn update_product(&self, id: i64, draft: &ProductDraft) -> ClientResult<Product> {
        self.transport()
            .put(&format!("/products/{}", id), draft)
            .await
    }

    /// Delete a product.
    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.transport().delete(&format!("/products/{}", id)).await
    }

    // ========== Discount API ==========

    /// Apply a flat percentage discount; the caller reloads to observe the
    /// new final price.
    pub async fn apply_percent_discount(&self, id: i64, percent: f64) -> ClientResult<()> {
        let payload = PercentDiscountInput { percent };
        let _: ApiMessage = self
            .transport()
            .post(&format!("/products/{}/discount/percent", id), &payload)
            .await?;
        Ok(())
    }

    /// Apply a coupon discount by code.
    pub async fn apply_coupon_discount(&self, id: i64, code: &str) -> ClientResult<()> {
        let payload = CouponDiscountInput {
            code: code.to_string(),
        };
        let _: ApiMessage = self
            .transport()
            .post(&format!("/products/{}/discount/coupon", id), &payload)
            .await?;
        Ok(())
    }

    /// Remove the active discount. Removing when none is active is a
    /// server-side no-op; only a missing product is `NotFound`.
    pub async fn remove_discount(&self, id: i64) -> ClientResult<()> {
        self.transport()
            .delete(&format!("/products/{}/discount", id))
            .await
    }
}
