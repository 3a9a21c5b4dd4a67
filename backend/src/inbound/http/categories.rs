//! Category HTTP handlers.
//!
//! ```text
//! GET    /v1/category
//! GET    /v1/category/{id}
//! POST   /v1/category
//! PUT    /v1/category
//! DELETE /v1/category/{id}
//! ```

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Category, CategoryDraft, CategoryId, CategoryUpdate};
use crate::inbound::http::extractors::read_path_id;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Request payload for registering a category.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateRequest {
    /// Category title, 3 to 50 characters.
    #[schema(example = "Books")]
    pub title: Option<String>,
}

/// Request payload for the full-replace category update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdateRequest {
    pub id: Uuid,
    #[schema(example = "Books")]
    pub title: Option<String>,
}

/// Category response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub title: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().as_uuid(),
            title: value.title().as_str().to_owned(),
        }
    }
}

/// Location of a category resource, used in `Location` headers.
pub(crate) fn category_location(id: CategoryId) -> String {
    format!("/v1/category/{id}")
}

/// List all categories.
#[utoipa::path(
    get,
    path = "/v1/category",
    responses(
        (status = 200, description = "All categories", body = [CategoryResponse]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["category"],
    operation_id = "listCategories"
)]
#[get("/category")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CategoryResponse>>> {
    let categories = state.categories.list().await?;
    Ok(web::Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Fetch a category by id.
#[utoipa::path(
    get,
    path = "/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = CategoryResponse),
        (status = 404, description = "No category with the given id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["category"],
    operation_id = "getCategoryById"
)]
#[get("/category/{id}")]
pub async fn get_category(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<CategoryResponse>> {
    let id = read_path_id(&id, "no category with the given id")?;
    let category = state.categories.get(CategoryId::from(id)).await?;
    Ok(web::Json(CategoryResponse::from(category)))
}

/// Register a new category.
#[utoipa::path(
    post,
    path = "/v1/category",
    request_body = CategoryCreateRequest,
    responses(
        (status = 201, description = "Category registered", body = CategoryResponse,
            headers(("Location" = String, description = "URL of the created category"))),
        (status = 400, description = "The category model is invalid", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["category"],
    operation_id = "createCategory"
)]
#[post("/category")]
pub async fn create_category(
    state: web::Data<HttpState>,
    payload: web::Json<CategoryCreateRequest>,
) -> ApiResult<HttpResponse> {
    let draft = CategoryDraft {
        title: payload.into_inner().title.unwrap_or_default(),
    };
    let created = state.categories.create(draft).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, category_location(created.id())))
        .json(CategoryResponse::from(created)))
}

/// Replace a category wholesale.
#[utoipa::path(
    put,
    path = "/v1/category",
    request_body = CategoryUpdateRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "The category model is invalid", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["category"],
    operation_id = "updateCategory"
)]
#[put("/category")]
pub async fn update_category(
    state: web::Data<HttpState>,
    payload: web::Json<CategoryUpdateRequest>,
) -> ApiResult<web::Json<CategoryResponse>> {
    let payload = payload.into_inner();
    let updated = state
        .categories
        .update(CategoryUpdate {
            id: CategoryId::from(payload.id),
            title: payload.title.unwrap_or_default(),
        })
        .await?;
    Ok(web::Json(CategoryResponse::from(updated)))
}

/// Delete a category by id.
#[utoipa::path(
    delete,
    path = "/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 400, description = "The id is not a valid UUID", body = ApiError),
        (status = 404, description = "No category with the given id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["category"],
    operation_id = "deleteCategory"
)]
#[delete("/category/{id}")]
pub async fn delete_category(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.categories.delete(CategoryId::from(*id)).await?;
    Ok(HttpResponse::Ok().finish())
}
