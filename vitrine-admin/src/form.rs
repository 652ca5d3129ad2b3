//! Product form state controller
//!
//! Holds the draft being edited, re-validates on submit, and keeps the
//! per-field error map in sync: changing a field clears only that field's
//! error, everything else waits for the next submit.

use shared::models::{Product, ProductDraft};
use shared::validate::{DraftPolicy, FieldErrors, validate_product_draft};

/// Create starts empty and resets after a successful submit; Edit is seeded
/// from an existing record and keeps the draft afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Draft + validation state for the product form
#[derive(Debug, Clone)]
pub struct ProductForm {
    mode: FormMode,
    draft: ProductDraft,
    errors: FieldErrors,
    policy: DraftPolicy,
}

impl ProductForm {
    /// Empty form for creating a new product
    pub fn create(policy: DraftPolicy) -> Self {
        Self {
            mode: FormMode::Create,
            draft: ProductDraft::default(),
            errors: FieldErrors::new(),
            policy,
        }
    }

    /// Form seeded from an existing product
    pub fn edit(product: &Product, policy: DraftPolicy) -> Self {
        Self {
            mode: FormMode::Edit,
            draft: ProductDraft {
                name: product.name.clone(),
                description: product.description.clone(),
                category: product.category.clone(),
                price: product.price,
                stock: product.stock,
            },
            errors: FieldErrors::new(),
            policy,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    // ========== Field setters ==========

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
        self.errors.clear("name");
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
        self.errors.clear("description");
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.draft.category = value.into();
        self.errors.clear("category");
    }

    pub fn set_price(&mut self, value: f64) {
        self.draft.price = value;
        self.errors.clear("price");
    }

    pub fn set_stock(&mut self, value: i64) {
        self.draft.stock = value;
        self.errors.clear("stock");
    }

    /// Re-validate the whole draft.
    ///
    /// On success the draft is handed back for submission (and reset in
    /// create mode); on failure the error map is stored and returned, and
    /// nothing is submitted.
    pub fn submit(&mut self) -> Result<ProductDraft, FieldErrors> {
        let errors = validate_product_draft(&self.draft, &self.policy);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors = FieldErrors::new();
        let draft = self.draft.clone();
        if self.mode == FormMode::Create {
            self.draft = ProductDraft::default();
        }
        Ok(draft)
    }
}
