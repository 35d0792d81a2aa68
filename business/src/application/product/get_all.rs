use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::{PageRequest, Paginated};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductsParams,
    ) -> Result<Paginated<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching active products for shop {} (page {}, limit {})",
            params.shop_id, params.page, params.limit
        ));

        let request = PageRequest::new(params.page, params.limit).inspect_err(|e| {
            self.logger.warn(&format!(
                "product::get_all - rejected ({e}), payload: {params:?}"
            ))
        })?;

        // Page and count are two separate reads; no shared snapshot.
        let items = self
            .repository
            .get_active_page(&params.shop_id, request)
            .await
            .inspect_err(|e| {
                self.logger.error(&format!(
                    "product::get_all - failed to get products ({e}), payload: {params:?}"
                ))
            })?;
        let total = self
            .repository
            .count_active(&params.shop_id)
            .await
            .inspect_err(|e| {
                self.logger.error(&format!(
                    "product::get_all - failed to count products ({e}), payload: {params:?}"
                ))
            })?;

        self.logger.info(&format!(
            "Found {} of {} active products",
            items.len(),
            total
        ));
        Ok(Paginated::new(items, total, request))
    }
}
