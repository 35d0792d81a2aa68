use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::pagination::PageRequest;
use business::domain::shared::value_objects::ShopId;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str =
    "id, shop_id, name, description, price, stock, category, created_at, updated_at, deleted_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |e| {
        tracing::error!(error = %e, operation, "product query failed");
        match e.as_database_error() {
            Some(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, shop_id, name, description, price, stock, category, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
        )
        .bind(product.id)
        .bind(product.shop_id.as_uuid())
        .bind(&product.details.name)
        .bind(&product.details.description)
        .bind(product.details.price)
        .bind(product.details.stock)
        .bind(&product.details.category)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error("insert"))?;

        Ok(())
    }

    async fn get_active_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("get_active_by_id"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_active_page(
        &self,
        shop_id: &ShopId,
        page: PageRequest,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE shop_id = $1 AND deleted_at IS NULL \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(shop_id.as_uuid())
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("get_active_page"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_active(&self, shop_id: &ShopId) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products WHERE shop_id = $1 AND deleted_at IS NULL",
        )
        .bind(shop_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("count_active"))?;

        Ok(count.max(0) as u64)
    }

    async fn update_details(
        &self,
        id: Uuid,
        shop_id: &ShopId,
        details: &ProductDetails,
        updated_at: DateTime<Utc>,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "UPDATE products \
             SET name = $1, description = $2, price = $3, stock = $4, category = $5, updated_at = $6 \
             WHERE id = $7 AND shop_id = $8 AND deleted_at IS NULL \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&details.name)
        .bind(&details.description)
        .bind(details.price)
        .bind(details.stock)
        .bind(&details.category)
        .bind(updated_at)
        .bind(id)
        .bind(shop_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("update_details"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn soft_delete(
        &self,
        id: Uuid,
        shop_id: &ShopId,
        deleted_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET deleted_at = $1 \
             WHERE id = $2 AND shop_id = $3 AND deleted_at IS NULL",
        )
        .bind(deleted_at)
        .bind(id)
        .bind(shop_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(database_error("soft_delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
