use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::logger::Logger;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use business::domain::shared::value_objects::ShopId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, CreatedProductResponse, ProductListResponse, ProductResponse,
    UpdateProductRequest,
};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "product.id_malformed";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    logger: Arc<dyn Logger>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            logger,
        }
    }

    fn parse_shop_id(&self, operation: &str, raw: &str) -> Result<ShopId, Json<ErrorResponse>> {
        ShopId::parse(raw).map_err(|err| {
            self.logger.warn(&format!(
                "product::{operation} - rejected X-Shop-Id ({err}), payload: {raw:?}"
            ));
            err.into_error_response().1
        })
    }

    fn parse_product_id(&self, operation: &str, raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
        Uuid::parse_str(raw).map_err(|_| {
            self.logger.warn(&format!(
                "product::{operation} - rejected product id ({INVALID_ID}), payload: {raw:?}"
            ));
            ErrorResponse::validation(INVALID_ID)
        })
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and soft-deleting a shop's products.
/// Shop-scoped endpoints take the shop identity from the `X-Shop-Id` header.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Creates an active product owned by the calling shop and returns its id.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        #[oai(name = "X-Shop-Id")] shop_id: Header<String>,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let shop_id = match self.parse_shop_id("create", &shop_id.0) {
            Ok(shop_id) => shop_id,
            Err(json) => return CreateProductResponse::BadRequest(json),
        };

        let params = CreateProductParams {
            shop_id,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            stock: body.0.stock,
            category: body.0.category,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(CreatedProductResponse {
                id: product.id.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List the shop's products
    ///
    /// Returns one page of active products, newest first, plus the total count.
    /// `page` defaults to 1 and `limit` to 10; `limit` may not exceed 100.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        #[oai(name = "X-Shop-Id")] shop_id: Header<String>,
        page: Query<Option<i64>>,
        limit: Query<Option<i64>>,
    ) -> GetAllProductsResponse {
        let shop_id = match self.parse_shop_id("get_all", &shop_id.0) {
            Ok(shop_id) => shop_id,
            Err(json) => return GetAllProductsResponse::BadRequest(json),
        };

        let params = GetAllProductsParams {
            shop_id,
            page: page.0.unwrap_or(DEFAULT_PAGE),
            limit: limit.0.unwrap_or(DEFAULT_LIMIT),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => GetAllProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllProductsResponse::BadRequest(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single active product. Deleted products are reported as not found.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match self.parse_product_id("get_by_id", &id.0) {
            Ok(uuid) => uuid,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces name, description, price, stock and category of an active
    /// product owned by the calling shop.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        #[oai(name = "X-Shop-Id")] shop_id: Header<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match self.parse_product_id("update", &id.0) {
            Ok(uuid) => uuid,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };
        let shop_id = match self.parse_shop_id("update", &shop_id.0) {
            Ok(shop_id) => shop_id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id: uuid,
            shop_id,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            stock: body.0.stock,
            category: body.0.category,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Soft-deletes an active product owned by the calling shop. The row is kept
    /// but no longer visible; deleting it again returns 404.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        id: Path<String>,
        #[oai(name = "X-Shop-Id")] shop_id: Header<String>,
    ) -> DeleteProductResponse {
        let uuid = match self.parse_product_id("delete", &id.0) {
            Ok(uuid) => uuid,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };
        let shop_id = match self.parse_shop_id("delete", &shop_id.0) {
            Ok(shop_id) => shop_id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid, shop_id })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<CreatedProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
