use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ShopId;

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub shop_id: ShopId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
    pub category: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
