use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product '{}' for shop {}",
            params.name, params.shop_id
        ));

        let details = ProductDetails {
            name: params.name.clone(),
            description: params.description.clone(),
            price: params.price,
            stock: params.stock,
            category: params.category.clone(),
        };
        let product = Product::new(params.shop_id, details).inspect_err(|e| {
            self.logger.warn(&format!(
                "product::create - rejected ({e}), payload: {params:?}"
            ))
        })?;

        self.repository.insert(&product).await.inspect_err(|e| {
            self.logger.error(&format!(
                "product::create - failed to persist product ({e}), payload: {params:?}"
            ))
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
