use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::shared::pagination::Paginated;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Description (cannot be empty, at most 255 characters)
    pub description: String,
    /// Price in minor currency units (>= 0)
    pub price: i64,
    /// Units in stock (>= 0)
    pub stock: i64,
    /// Free-text category label (cannot be empty)
    pub category: String,
}

/// Full replacement of the editable fields; every field is required.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Description (cannot be empty, at most 255 characters)
    pub description: String,
    /// Price in minor currency units (>= 0)
    pub price: i64,
    /// Units in stock (>= 0)
    pub stock: i64,
    /// Free-text category label (cannot be empty)
    pub category: String,
}

#[derive(Debug, Clone, Object)]
pub struct CreatedProductResponse {
    /// Identifier of the new product
    pub id: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Description
    pub description: String,
    /// Price in minor currency units
    pub price: i64,
    /// Units in stock
    pub stock: i64,
    /// Category label
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.details.name,
            description: product.details.description,
            price: product.details.price,
            stock: product.details.stock,
            category: product.details.category,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    /// Products on the requested page, newest first
    pub products: Vec<ProductResponse>,
    /// Number of active products of the shop across all pages
    pub total: u64,
    /// Requested page (1-based)
    pub page: u32,
    /// Requested page size
    pub limit: u32,
}

impl From<Paginated<Product>> for ProductListResponse {
    fn from(page: Paginated<Product>) -> Self {
        let page = page.map(ProductResponse::from);
        Self {
            products: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}
