use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::value_objects::Lifecycle;
use business::domain::shared::value_objects::ShopId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            ShopId::new(self.shop_id),
            ProductDetails {
                name: self.name,
                description: self.description,
                price: self.price,
                stock: self.stock,
                category: self.category,
            },
            self.created_at,
            self.updated_at,
            Lifecycle::from_deleted_at(self.deleted_at),
        )
    }
}
