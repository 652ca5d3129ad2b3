//! End-to-end demo against a running management backend
//!
//! Creates a product, lists the catalog with a price filter, applies and
//! removes a percent discount, and checks a coupon.
//!
//! Run: BASE_URL=http://localhost:5000 cargo run --example manage_products

use anyhow::Context;
use vitrine_client::{ApiClient, ClientConfig, ProductDraft, ProductFilters, ProductQuery};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_client=debug".into()),
        )
        .init();

    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let config = ClientConfig::new(base_url).with_timeout(10);
    let client = ApiClient::new(&config).context("failed to build client")?;

    let health = client.health().await.context("backend unreachable")?;
    println!("backend status: {}", health.status);

    let draft = ProductDraft {
        name: format!("Demo Monitor {}", std::process::id()),
        description: "27 inch, 144 Hz".to_string(),
        category: "Electronics".to_string(),
        price: 899.0,
        stock: 3,
    };
    let created = client.create_product(&draft).await?;
    println!("created product #{}: {}", created.id, created.name);

    client.apply_percent_discount(created.id, 15.0).await?;
    let discounted = client.get_product(created.id).await?;
    println!(
        "after discount: {:.2} -> {:.2}",
        discounted.price,
        discounted.effective_price()
    );

    let query = ProductQuery::filtered(ProductFilters {
        name: None,
        min_price: Some(100.0),
        max_price: None,
    });
    let expensive = client.list_products(&query).await?;
    println!("{} products at 100.00 or more:", expensive.len());
    for product in &expensive {
        println!("  #{:>4} {:<30} {:>10.2}", product.id, product.name, product.price);
    }

    client.remove_discount(created.id).await?;

    for coupon in client.list_coupons().await? {
        let validation = client.validate_coupon(&coupon.code).await?;
        println!(
            "coupon {:<12} valid={} {}",
            coupon.code,
            validation.valid,
            validation.message.unwrap_or_default()
        );
    }

    client.delete_product(created.id).await?;
    println!("cleaned up product #{}", created.id);

    Ok(())
}
