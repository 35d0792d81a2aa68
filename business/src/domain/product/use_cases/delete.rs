use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::ShopId;

#[derive(Debug, Clone)]
pub struct DeleteProductParams {
    pub id: Uuid,
    pub shop_id: ShopId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
