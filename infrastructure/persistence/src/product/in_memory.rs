use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::pagination::PageRequest;
use business::domain::shared::value_objects::ShopId;

/// Process-local product store. Deleted products stay in the map, like rows in the table.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(RepositoryError::Duplicated);
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn get_active_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .get(&id)
            .filter(|p| p.is_active())
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_active_page(
        &self,
        shop_id: &ShopId,
        page: PageRequest,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        let mut active: Vec<&Product> = products
            .values()
            .filter(|p| p.shop_id == *shop_id && p.is_active())
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(active
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count_active(&self, shop_id: &ShopId) -> Result<u64, RepositoryError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.shop_id == *shop_id && p.is_active())
            .count() as u64)
    }

    async fn update_details(
        &self,
        id: Uuid,
        shop_id: &ShopId,
        details: &ProductDetails,
        updated_at: DateTime<Utc>,
    ) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(&id)
            .filter(|p| p.shop_id == *shop_id)
            .ok_or(RepositoryError::NotFound)?;

        // Deleted rows read as absent; invalid data is what a CHECK constraint would refuse.
        product
            .replace_details(details.clone(), updated_at)
            .map_err(|e| match e {
                ProductError::NotFound => RepositoryError::NotFound,
                _ => RepositoryError::DatabaseError,
            })?;

        Ok(product.clone())
    }

    async fn soft_delete(
        &self,
        id: Uuid,
        shop_id: &ShopId,
        deleted_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        products
            .get_mut(&id)
            .filter(|p| p.shop_id == *shop_id)
            .ok_or(RepositoryError::NotFound)?
            .mark_deleted(deleted_at)
            .map_err(|_| RepositoryError::NotFound)
    }
}
