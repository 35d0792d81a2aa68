use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger.debug(&format!("Fetching product: {}", params.id));

        self.repository
            .get_active_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })
            .inspect_err(|e| {
                self.logger.error(&format!(
                    "product::get_by_id - failed to get product ({e}), payload: {params:?}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductDetails;
    use crate::domain::product::value_objects::Lifecycle;
    use crate::domain::shared::pagination::PageRequest;
    use crate::domain::shared::value_objects::ShopId;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn get_active_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_active_page(&self, shop_id: &ShopId, page: PageRequest) -> Result<Vec<Product>, RepositoryError>;
            async fn count_active(&self, shop_id: &ShopId) -> Result<u64, RepositoryError>;
            async fn update_details(&self, id: Uuid, shop_id: &ShopId, details: &ProductDetails, updated_at: DateTime<Utc>) -> Result<Product, RepositoryError>;
            async fn soft_delete(&self, id: Uuid, shop_id: &ShopId, deleted_at: DateTime<Utc>) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_active() {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_active_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |id| {
                Ok(Product::from_repository(
                    id,
                    ShopId::new(Uuid::new_v4()),
                    ProductDetails {
                        name: "Mug".to_string(),
                        description: "Ceramic mug".to_string(),
                        price: 1000,
                        stock: 50,
                        category: "kitchen".to_string(),
                    },
                    now,
                    now,
                    Lifecycle::Active,
                ))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await
            .unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(product.details.name, "Mug");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_absent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_active_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_database_errors_distinct_from_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_active_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
