use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::Paginated;
use crate::domain::shared::value_objects::ShopId;

/// Page and limit arrive unchecked; the use case validates them.
#[derive(Debug, Clone)]
pub struct GetAllProductsParams {
    pub shop_id: ShopId,
    pub page: i64,
    pub limit: i64,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams)
    -> Result<Paginated<Product>, ProductError>;
}
