use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let details = ProductDetails {
            name: params.name.clone(),
            description: params.description.clone(),
            price: params.price,
            stock: params.stock,
            category: params.category.clone(),
        };
        details.validate().inspect_err(|e| {
            self.logger.warn(&format!(
                "product::update - rejected ({e}), payload: {params:?}"
            ))
        })?;

        // Single statement: no read-modify-write, last writer wins.
        let updated = self
            .repository
            .update_details(params.id, &params.shop_id, &details, Utc::now())
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })
            .inspect_err(|e| {
                self.logger.error(&format!(
                    "product::update - failed to update product ({e}), payload: {params:?}"
                ))
            })?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::errors::{Field, Violation};
    use crate::domain::product::value_objects::Lifecycle;
    use crate::domain::shared::pagination::PageRequest;
    use crate::domain::shared::value_objects::ShopId;
    use chrono::{DateTime, Duration};
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

    fn cup_params(id: Uuid, shop_id: ShopId) -> UpdateProductParams {
        UpdateProductParams {
            id,
            shop_id,
            name: "Cup".to_string(),
            description: "Paper cup".to_string(),
            price: 25,
            stock: 400,
            category: "disposables".to_string(),
        }
    }

    #[tokio::test]
    async fn should_replace_all_fields_when_product_active() {
        let product_id = Uuid::new_v4();
        let shop_id = ShopId::new(Uuid::new_v4());
        let created_at = Utc::now() - Duration::days(1);

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update_details()
            .withf(move |id, s, details, _| {
                *id == product_id
                    && *s == shop_id
                    && details.name == "Cup"
                    && details.description == "Paper cup"
                    && details.price == 25
                    && details.stock == 400
                    && details.category == "disposables"
            })
            .times(1)
            .returning(move |id, s, details, updated_at| {
                Ok(Product::from_repository(
                    id,
                    *s,
                    details.clone(),
                    created_at,
                    updated_at,
                    Lifecycle::Active,
                ))
            });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(cup_params(product_id, shop_id))
            .await
            .unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(product.details.name, "Cup");
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at > created_at);
    }

    #[tokio::test]
    async fn should_reject_negative_stock_without_touching_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update_details().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                stock: -1,
                ..cup_params(Uuid::new_v4(), ShopId::new(Uuid::new_v4()))
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation {
                field: Field::Stock,
                violation: Violation::Negative
            }
        ));
    }

    #[tokio::test]
    async fn should_reject_long_description_without_touching_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update_details().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                description: "x".repeat(256),
                ..cup_params(Uuid::new_v4(), ShopId::new(Uuid::new_v4()))
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation {
                field: Field::Description,
                violation: Violation::TooLong
            }
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_active_product_matches() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update_details()
            .returning(|_, _, _, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(cup_params(Uuid::new_v4(), ShopId::new(Uuid::new_v4())))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
