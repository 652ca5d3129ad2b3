// In-process stub of the management backend, served to the controllers
// through the oneshot transport. Mirrors the real API surface the page
// controller touches: list/create/update/delete products, the discount
// routes, and the coupon listing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use shared::models::{
    Coupon, CouponDiscountInput, Discount, PercentDiscountInput, Product, ProductDraft,
    ProductFilters,
};
use vitrine_client::{ApiClient, OneshotTransport};

#[derive(Default)]
pub struct StubBackend {
    products: Mutex<Vec<Product>>,
    coupons: Mutex<Vec<Coupon>>,
    next_id: Mutex<i64>,
    calls: Mutex<Vec<String>>,
    pub fail_coupon_listing: Mutex<bool>,
}

pub type Backend = Arc<StubBackend>;

impl StubBackend {
    fn log(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }

    /// Number of recorded requests whose "METHOD /path" starts with `prefix`
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.starts_with(prefix))
            .count()
    }

    pub fn seed_product(&self, name: &str, price: f64, stock: i64) -> i64 {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;
        self.products.lock().unwrap().push(Product {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            category: "misc".to_string(),
            price,
            stock,
            discount: Discount::None,
            final_price: None,
            is_active: true,
            created_at: Some(Utc::now()),
            updated_at: None,
        });
        id
    }

    pub fn seed_coupon(&self, code: &str, percentage: f64, active: bool) {
        let mut coupon = Coupon {
            id: None,
            code: code.to_string(),
            description: String::new(),
            discount_percentage: percentage,
            valid_from: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            valid_until: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            usage_limit: 100,
            usage_count: 0,
            is_active: active,
            is_valid: false,
            is_expired: false,
            is_not_started: false,
            is_limit_reached: false,
            remaining_uses: 0,
            created_at: None,
            updated_at: None,
        };
        coupon.recompute_status(Utc::now());
        self.coupons.lock().unwrap().push(coupon);
    }

    pub fn product(&self, id: i64) -> Option<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Produto não encontrado"})),
    )
}

async fn list_products(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    backend.log("GET /products");
    let filters = ProductFilters {
        name: params.get("name").cloned(),
        min_price: params.get("min_price").and_then(|v| v.parse().ok()),
        max_price: params.get("max_price").and_then(|v| v.parse().ok()),
    };
    let products: Vec<Product> = backend
        .products
        .lock()
        .unwrap()
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect();
    let total = products.len();
    Json(json!({"data": products, "meta": {"page": 1, "total": total}}))
}

async fn create_product(
    State(backend): State<Backend>,
    Json(draft): Json<ProductDraft>,
) -> (StatusCode, Json<Value>) {
    backend.log("POST /products/");
    let mut next_id = backend.next_id.lock().unwrap();
    *next_id += 1;
    let product = Product {
        id: *next_id,
        name: draft.name,
        description: draft.description,
        category: draft.category,
        price: draft.price,
        stock: draft.stock,
        discount: Discount::None,
        final_price: None,
        is_active: true,
        created_at: Some(Utc::now()),
        updated_at: None,
    };
    backend.products.lock().unwrap().push(product.clone());
    (StatusCode::CREATED, Json(json!(product)))
}

async fn update_product(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(draft): Json<ProductDraft>,
) -> (StatusCode, Json<Value>) {
    backend.log(format!("PUT /products/{}", id));
    let mut products = backend.products.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.name = draft.name;
            product.description = draft.description;
            product.category = draft.category;
            product.price = draft.price;
            product.stock = draft.stock;
            product.updated_at = Some(Utc::now());
            (StatusCode::OK, Json(json!(product.clone())))
        }
        None => not_found(),
    }
}

async fn delete_product(State(backend): State<Backend>, Path(id): Path<i64>) -> StatusCode {
    backend.log(format!("DELETE /products/{}", id));
    let mut products = backend.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn apply_percent(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(input): Json<PercentDiscountInput>,
) -> (StatusCode, Json<Value>) {
    backend.log(format!("POST /products/{}/discount/percent", id));
    let mut products = backend.products.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.discount = Discount::Percent {
                percent: input.percent,
            };
            product.final_price = Some(round2(product.price * (1.0 - input.percent / 100.0)));
            (
                StatusCode::OK,
                Json(json!({"message": "Desconto aplicado com sucesso"})),
            )
        }
        None => not_found(),
    }
}

async fn apply_coupon(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(input): Json<CouponDiscountInput>,
) -> (StatusCode, Json<Value>) {
    backend.log(format!("POST /products/{}/discount/coupon", id));
    let coupon = backend
        .coupons
        .lock()
        .unwrap()
        .iter()
        .find(|c| c.code == input.code && c.is_active)
        .cloned();
    let Some(coupon) = coupon else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Cupom inválido ou inativo"})),
        );
    };

    let mut products = backend.products.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.discount = Discount::Coupon {
                code: coupon.code.clone(),
            };
            product.final_price = Some(round2(
                product.price * (1.0 - coupon.discount_percentage / 100.0),
            ));
            (
                StatusCode::OK,
                Json(json!({"message": "Cupom aplicado com sucesso"})),
            )
        }
        None => not_found(),
    }
}

async fn remove_discount(State(backend): State<Backend>, Path(id): Path<i64>) -> StatusCode {
    backend.log(format!("DELETE /products/{}/discount", id));
    let mut products = backend.products.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            // Removing an absent discount is a no-op, like the real service
            product.discount = Discount::None;
            product.final_price = None;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn list_coupons(State(backend): State<Backend>) -> (StatusCode, Json<Value>) {
    backend.log("GET /coupons/");
    if *backend.fail_coupon_listing.lock().unwrap() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Erro interno"})),
        );
    }
    let coupons: Vec<Coupon> = backend.coupons.lock().unwrap().clone();
    (StatusCode::OK, Json(json!({"data": coupons})))
}

pub fn router(backend: Backend) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/", post(create_product))
        .route(
            "/products/{id}",
            put(update_product).delete(delete_product),
        )
        .route("/products/{id}/discount/percent", post(apply_percent))
        .route("/products/{id}/discount/coupon", post(apply_coupon))
        .route("/products/{id}/discount", delete(remove_discount))
        .route("/coupons/", get(list_coupons))
        .with_state(backend)
}

/// A page-controller client wired to the stub through the oneshot transport
pub fn client(backend: Backend) -> ApiClient<OneshotTransport> {
    ApiClient::with_transport(OneshotTransport::new(router(backend)))
}
