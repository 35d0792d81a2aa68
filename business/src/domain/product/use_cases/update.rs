use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ShopId;

#[derive(Debug, Clone)]
pub struct UpdateProductParams {
    pub id: Uuid,
    pub shop_id: ShopId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
    pub category: String,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
