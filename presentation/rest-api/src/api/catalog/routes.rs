use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::get_all::GetCatalogUseCase;

use crate::api::catalog::dto::CatalogEntryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(get_catalog_use_case: Arc<dyn GetCatalogUseCase>) -> Self {
        Self {
            get_catalog_use_case,
        }
    }
}

#[OpenApi]
impl CatalogApi {
    /// List rentable bikes
    ///
    /// Returns every bike with its rental rates and availability.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self) -> GetCatalogResponse {
        match self.get_catalog_use_case.execute().await {
            Ok(entries) => {
                GetCatalogResponse::Ok(Json(entries.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCatalogResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CatalogEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
