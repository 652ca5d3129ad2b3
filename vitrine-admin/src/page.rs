//! Management page controller
//!
//! Owns the product and coupon collections, the active filters, the modal
//! state, and the notice board, and orchestrates the load/mutate/reload
//! cycles. Collections are always replaced wholesale after a mutation; on
//! failure they keep their last successfully loaded value.

use std::time::Duration;

use shared::models::{Coupon, Product, ProductFilters, ProductQuery};
use shared::validate::{DraftPolicy, validate_coupon_selection, validate_discount_percent};
use vitrine_client::{ApiClient, Transport};

use crate::form::ProductForm;
use crate::notice::{Notice, NoticeBoard};

/// State of the percent-discount modal
#[derive(Debug, Clone)]
pub struct DiscountPrompt {
    pub product_id: i64,
    pub input: String,
    pub error: Option<String>,
}

/// State of the apply-coupon modal
#[derive(Debug, Clone)]
pub struct CouponPrompt {
    pub product_id: i64,
    pub selected: String,
    pub error: Option<String>,
}

/// Product form plus the record it targets (`None` when creating)
#[derive(Debug)]
struct OpenForm {
    form: ProductForm,
    target: Option<i64>,
}

/// Controller behind the product management page.
///
/// All methods take `&mut self`: the page is single-threaded and
/// event-driven, so no locking is involved. Network calls go through the
/// [`ApiClient`] and every failure becomes a transient notice; nothing here
/// panics on a remote error.
#[derive(Debug)]
pub struct PageController<T: Transport> {
    client: ApiClient<T>,
    policy: DraftPolicy,
    products: Vec<Product>,
    coupons: Vec<Coupon>,
    filters: ProductFilters,
    form: Option<OpenForm>,
    discount_prompt: Option<DiscountPrompt>,
    coupon_prompt: Option<CouponPrompt>,
    pending_delete: Option<i64>,
    notices: NoticeBoard,
}

impl<T: Transport> PageController<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            client,
            policy: DraftPolicy::default(),
            products: Vec::new(),
            coupons: Vec::new(),
            filters: ProductFilters::none(),
            form: None,
            discount_prompt: None,
            coupon_prompt: None,
            pending_delete: None,
            notices: NoticeBoard::default(),
        }
    }

    /// Set the draft validation policy for this deployment
    pub fn with_policy(mut self, policy: DraftPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override how long transient notices stay visible
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notices = NoticeBoard::new(ttl);
        self
    }

    // ========== Accessors ==========

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn product_form(&self) -> Option<&ProductForm> {
        self.form.as_ref().map(|open| &open.form)
    }

    pub fn product_form_mut(&mut self) -> Option<&mut ProductForm> {
        self.form.as_mut().map(|open| &mut open.form)
    }

    pub fn discount_prompt(&self) -> Option<&DiscountPrompt> {
        self.discount_prompt.as_ref()
    }

    pub fn coupon_prompt(&self) -> Option<&CouponPrompt> {
        self.coupon_prompt.as_ref()
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    // ========== Loading ==========

    /// Initial activation: load products and coupons concurrently. The two
    /// loads are independent; either failure surfaces a notice without
    /// blocking the other.
    pub async fn activate(&mut self) {
        let query = ProductQuery::filtered(self.filters.clone());
        let (products, coupons) =
            tokio::join!(self.client.list_products(&query), self.client.list_coupons());

        match products {
            Ok(list) => self.products = list,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load products");
                self.notices.error("Failed to load products");
            }
        }
        match coupons {
            Ok(list) => self.coupons = list,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load coupons");
                self.notices.error("Failed to load coupons");
            }
        }
    }

    async fn reload_products(&mut self) {
        let query = ProductQuery::filtered(self.filters.clone());
        match self.client.list_products(&query).await {
            Ok(list) => self.products = list,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load products");
                self.notices.error("Failed to load products");
            }
        }
    }

    /// Replace the filter set and reload; an empty set means "no filter".
    pub async fn apply_filters(&mut self, filters: ProductFilters) {
        self.filters = filters;
        self.reload_products().await;
    }

    pub async fn clear_filters(&mut self) {
        self.apply_filters(ProductFilters::none()).await;
    }

    // ========== Product form ==========

    pub fn open_create_form(&mut self) {
        self.form = Some(OpenForm {
            form: ProductForm::create(self.policy.clone()),
            target: None,
        });
    }

    /// Open the edit form seeded from a listed product; ignored when the id
    /// is not on the current page.
    pub fn open_edit_form(&mut self, id: i64) {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.form = Some(OpenForm {
                form: ProductForm::edit(product, self.policy.clone()),
                target: Some(id),
            });
        }
    }

    pub fn close_product_form(&mut self) {
        self.form = None;
    }

    /// Validate and submit the open form. Validation failure keeps the form
    /// open with its field errors; an API failure keeps it open and posts an
    /// error notice; success closes it and reloads the list.
    pub async fn submit_product_form(&mut self) {
        let Some(open) = self.form.as_mut() else {
            return;
        };
        let Ok(draft) = open.form.submit() else {
            return;
        };
        let target = open.target;

        let result = match target {
            Some(id) => self
                .client
                .update_product(id, &draft)
                .await
                .map(|_| "Product updated"),
            None => self
                .client
                .create_product(&draft)
                .await
                .map(|_| "Product created"),
        };

        match result {
            Ok(message) => {
                self.form = None;
                self.notices.success(message);
                self.reload_products().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save product");
                self.notices.error(format!("Failed to save product: {}", err));
            }
        }
    }

    // ========== Deletion (destructive-action gate) ==========

    /// Record the delete request; nothing reaches the API until
    /// [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.client.delete_product(id).await {
            Ok(()) => {
                self.notices.success("Product deleted");
                self.reload_products().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, product_id = id, "failed to delete product");
                self.notices
                    .error(format!("Failed to delete product: {}", err));
            }
        }
    }

    // ========== Percent discount ==========

    pub fn open_discount_prompt(&mut self, product_id: i64) {
        self.discount_prompt = Some(DiscountPrompt {
            product_id,
            input: String::new(),
            error: None,
        });
    }

    pub fn close_discount_prompt(&mut self) {
        self.discount_prompt = None;
    }

    /// Update the raw percent input, clearing the inline error
    pub fn set_discount_input(&mut self, value: impl Into<String>) {
        if let Some(prompt) = self.discount_prompt.as_mut() {
            prompt.input = value.into();
            prompt.error = None;
        }
    }

    /// Validate the percent input and apply it. Invalid input never reaches
    /// the API; any failure keeps the prompt open with an inline error.
    pub async fn submit_discount(&mut self) {
        let Some(prompt) = self.discount_prompt.as_mut() else {
            return;
        };
        let percent = match validate_discount_percent(&prompt.input) {
            Ok(percent) => percent,
            Err(err) => {
                prompt.error = Some(err.to_string());
                return;
            }
        };
        let id = prompt.product_id;

        match self.client.apply_percent_discount(id, percent).await {
            Ok(()) => {
                self.discount_prompt = None;
                self.notices.success("Discount applied");
                self.reload_products().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, product_id = id, "failed to apply discount");
                if let Some(prompt) = self.discount_prompt.as_mut() {
                    prompt.error = Some(err.to_string());
                }
            }
        }
    }

    // ========== Coupon discount ==========

    pub fn open_coupon_prompt(&mut self, product_id: i64) {
        self.coupon_prompt = Some(CouponPrompt {
            product_id,
            selected: String::new(),
            error: None,
        });
    }

    pub fn close_coupon_prompt(&mut self) {
        self.coupon_prompt = None;
    }

    /// Update the selected coupon code, clearing the inline error
    pub fn select_coupon(&mut self, code: impl Into<String>) {
        if let Some(prompt) = self.coupon_prompt.as_mut() {
            prompt.selected = code.into();
            prompt.error = None;
        }
    }

    /// Check the selection against the loaded coupons and apply it. An
    /// unselected or inactive coupon never reaches the API.
    pub async fn submit_coupon(&mut self) {
        let (id, selected) = match &self.coupon_prompt {
            Some(prompt) => (prompt.product_id, prompt.selected.clone()),
            None => return,
        };

        let code = match validate_coupon_selection(&selected, &self.coupons) {
            Ok(coupon) => coupon.code.clone(),
            Err(err) => {
                if let Some(prompt) = self.coupon_prompt.as_mut() {
                    prompt.error = Some(err.to_string());
                }
                return;
            }
        };

        match self.client.apply_coupon_discount(id, &code).await {
            Ok(()) => {
                self.coupon_prompt = None;
                self.notices.success("Coupon applied");
                self.reload_products().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, product_id = id, "failed to apply coupon");
                if let Some(prompt) = self.coupon_prompt.as_mut() {
                    prompt.error = Some(err.to_string());
                }
            }
        }
    }

    // ========== Discount removal ==========

    /// Remove the active discount. Removing twice is safe: the second call
    /// is a server-side no-op or an error notice, never a crash.
    pub async fn remove_discount(&mut self, id: i64) {
        match self.client.remove_discount(id).await {
            Ok(()) => {
                self.notices.success("Discount removed");
                self.reload_products().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, product_id = id, "failed to remove discount");
                self.notices
                    .error(format!("Failed to remove discount: {}", err));
            }
        }
    }
}
