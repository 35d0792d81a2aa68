use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::in_memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::database_config::{StoreConfig, init_database};

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub async fn new(store: &StoreConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let product_repository: Arc<dyn ProductRepository> = match store {
            StoreConfig::Postgres {
                database,
                migrations_path,
            } => {
                let pool = init_database(database, migrations_path).await?;
                Arc::new(ProductRepositoryPostgres::new(pool))
            }
            StoreConfig::Memory => {
                tracing::warn!("Using in-memory product store, data is lost on restart");
                Arc::new(ProductRepositoryInMemory::new())
            }
        };

        Ok(Self {
            health_api: HealthApi::new(),
            product_api: product_api(product_repository, logger),
        })
    }
}

/// Wires the product use cases around a single repository.
pub fn product_api(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> ProductApi {
    let create_use_case = Arc::new(CreateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let update_use_case = Arc::new(UpdateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
        repository,
        logger: logger.clone(),
    });

    ProductApi::new(
        create_use_case,
        get_all_use_case,
        get_by_id_use_case,
        update_use_case,
        delete_use_case,
        logger,
    )
}
