use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::PageRequest;
use crate::domain::shared::value_objects::ShopId;

use super::model::{Product, ProductDetails};

/// Persistence port for products.
///
/// Every read and write only sees active products; a soft-deleted row is
/// reported as `RepositoryError::NotFound`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn get_active_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Newest first, `page.limit()` rows starting at `page.offset()`.
    async fn get_active_page(
        &self,
        shop_id: &ShopId,
        page: PageRequest,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn count_active(&self, shop_id: &ShopId) -> Result<u64, RepositoryError>;
    /// Replaces the editable fields in a single statement and returns the stored product.
    async fn update_details(
        &self,
        id: Uuid,
        shop_id: &ShopId,
        details: &ProductDetails,
        updated_at: DateTime<Utc>,
    ) -> Result<Product, RepositoryError>;
    async fn soft_delete(
        &self,
        id: Uuid,
        shop_id: &ShopId,
        deleted_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
}
