//! Product HTTP handlers.
//!
//! ```text
//! GET    /v1/product
//! GET    /v1/product/{id}
//! GET    /v1/product/category/{id}
//! POST   /v1/product
//! PUT    /v1/product
//! DELETE /v1/product/{id}
//! ```

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    CategoryId, Error, Product, ProductDraft, ProductId, ProductPatch, ProductWithCategory,
};
use crate::inbound::http::categories::CategoryResponse;
use crate::inbound::http::extractors::read_path_id;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Request payload for registering a product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateRequest {
    #[schema(example = "Go Design")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
    pub category_id: Option<Uuid>,
}

/// Request payload for the field-merge product update.
///
/// `categoryId` is accepted for wire compatibility but never applied; the
/// stored category assignment survives every update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateRequest {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<Uuid>,
}

/// Product response body with its category embedded when resolvable.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Uuid,
    pub category: Option<CategoryResponse>,
}

impl ProductResponse {
    fn from_record(product: Product) -> Self {
        Self {
            id: product.id().as_uuid(),
            title: product.title().to_owned(),
            description: product.description().map(str::to_owned),
            price: product.price(),
            category_id: product.category_id().as_uuid(),
            category: None,
        }
    }
}

impl From<ProductWithCategory> for ProductResponse {
    fn from(value: ProductWithCategory) -> Self {
        let mut response = Self::from_record(value.product);
        response.category = value.category.map(CategoryResponse::from);
        response
    }
}

/// Collects required-field violations into one per-field error map.
struct RequiredFields {
    missing: serde_json::Map<String, serde_json::Value>,
}

impl RequiredFields {
    fn new() -> Self {
        Self {
            missing: serde_json::Map::new(),
        }
    }

    fn take<T>(&mut self, value: Option<T>, field: &str) -> Option<T> {
        if value.is_none() {
            self.missing
                .insert(field.to_owned(), json!(format!("{field} is required")));
        }
        value
    }

    fn finish(self) -> Result<(), Error> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(Error::invalid_request("product model is invalid")
            .with_details(json!({ "fieldErrors": self.missing })))
    }
}

/// List all products with their categories embedded.
#[utoipa::path(
    get,
    path = "/v1/product",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["product"],
    operation_id = "listProducts"
)]
#[get("/product")]
pub async fn list_products(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let products = state.products.list().await?;
    Ok(web::Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// List the products referencing a category.
#[utoipa::path(
    get,
    path = "/v1/product/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Products in the category", body = [ProductResponse]),
        (status = 404, description = "The nil or unparseable category id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["product"],
    operation_id = "getProductsByCategory"
)]
#[get("/product/category/{id}")]
pub async fn list_products_by_category(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let id = read_path_id(&id, "no products for the given category id")?;
    let products = state
        .products
        .list_by_category(CategoryId::from(id))
        .await?;
    Ok(web::Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Fetch a product by id.
#[utoipa::path(
    get,
    path = "/v1/product/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "No product with the given id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["product"],
    operation_id = "getProductById"
)]
#[get("/product/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<ProductResponse>> {
    let id = read_path_id(&id, "no product with the given id")?;
    let product = state.products.get(ProductId::from(id)).await?;
    Ok(web::Json(ProductResponse::from(product)))
}

/// Register a new product.
///
/// The category reference is stored as given; its existence is not checked.
#[utoipa::path(
    post,
    path = "/v1/product",
    request_body = ProductCreateRequest,
    responses(
        (status = 201, description = "Product registered", body = ProductResponse,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 400, description = "The product model is invalid", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["product"],
    operation_id = "createProduct"
)]
#[post("/product")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductCreateRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let mut required = RequiredFields::new();
    let title = required.take(payload.title, "title");
    let price = required.take(payload.price, "price");
    let category_id = required.take(payload.category_id, "categoryId");
    required.finish()?;

    // All three are present once finish() returned Ok.
    let draft = ProductDraft {
        title: title.unwrap_or_default(),
        description: payload.description,
        price: price.unwrap_or_default(),
        category_id: CategoryId::from(category_id.unwrap_or_default()),
    };
    let created = state.products.create(draft).await?;
    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("/v1/product/{}", created.id()),
        ))
        .json(ProductResponse::from_record(created)))
}

/// Merge an update onto a stored product.
#[utoipa::path(
    put,
    path = "/v1/product",
    request_body = ProductUpdateRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "The product model is invalid", body = ApiError),
        (status = 404, description = "No product with the given id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["product"],
    operation_id = "updateProduct"
)]
#[put("/product")]
pub async fn update_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductUpdateRequest>,
) -> ApiResult<web::Json<ProductResponse>> {
    let payload = payload.into_inner();
    let mut required = RequiredFields::new();
    let title = required.take(payload.title, "title");
    let price = required.take(payload.price, "price");
    required.finish()?;

    let patch = ProductPatch {
        id: ProductId::from(payload.id),
        title: title.unwrap_or_default(),
        description: payload.description,
        price: price.unwrap_or_default(),
    };
    let updated = state.products.update(patch).await?;
    Ok(web::Json(ProductResponse::from_record(updated)))
}

/// Delete a product by id.
#[utoipa::path(
    delete,
    path = "/v1/product/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "The id is not a valid UUID", body = ApiError),
        (status = 404, description = "No product with the given id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["product"],
    operation_id = "deleteProduct"
)]
#[delete("/product/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.products.delete(ProductId::from(*id)).await?;
    Ok(HttpResponse::Ok().finish())
}
