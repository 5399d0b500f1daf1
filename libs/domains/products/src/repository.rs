use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, normalize_price};
use crate::query::ProductQuery;

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and assign its id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Overwrite the product stored under `product.id`
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Get a product by its exact name
    async fn get_by_name(&self, name: &str) -> ProductResult<Option<Product>>;

    /// All products matching `query`, ordered by id
    async fn find_all_matching(&self, query: ProductQuery) -> ProductResult<Vec<Product>>;

    /// Returns `false` when nothing was stored under `id`
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

/// Mirrors the `NOT NULL`/non-empty constraints the database enforces.
pub(crate) fn check_required(name: &str, description: &str) -> ProductResult<()> {
    if name.is_empty() {
        return Err(ProductError::Validation("name must not be empty".to_string()));
    }
    if description.is_empty() {
        return Err(ProductError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        check_required(&input.name, &input.description)?;

        let mut products = self.products.write().await;

        if products.values().any(|p| p.name == input.name) {
            return Err(ProductError::DuplicateName(input.name));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::new(id, input);
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        check_required(&product.name, &product.description)?;

        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(ProductError::NotFound(product.id));
        }

        if products
            .values()
            .any(|p| p.id != product.id && p.name == product.name)
        {
            return Err(ProductError::DuplicateName(product.name));
        }

        let product = Product {
            price: normalize_price(product.price),
            ..product
        };
        products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.values().find(|p| p.name == name).cloned())
    }

    async fn find_all_matching(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        // BTreeMap iteration is already ordered by id
        let result: Vec<Product> = products
            .values()
            .filter(|p| query.matches(p))
            .cloned()
            .collect();

        tracing::debug!(?query, count = result.len(), "Listed products");
        Ok(result)
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
