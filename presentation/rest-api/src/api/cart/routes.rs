use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCatalogItemParams, AddCatalogItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_summary::{
    GetCartSummaryUseCase, GetQuantityParams, GetQuantityUseCase,
};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::shared::value_objects::{ItemId, RentalPeriod};

use crate::api::cart::dto::{
    AddCartItemRequest, CartSummaryResponse, MutationResponse, QuantityResponse,
    UpdateQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddCatalogItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    summary_use_case: Arc<dyn GetCartSummaryUseCase>,
    quantity_use_case: Arc<dyn GetQuantityUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCatalogItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        summary_use_case: Arc<dyn GetCartSummaryUseCase>,
        quantity_use_case: Arc<dyn GetQuantityUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            summary_use_case,
            quantity_use_case,
        }
    }
}

/// Rental cart API
///
/// Line items are addressed by bike id and rental period; the same bike
/// rented for two different periods occupies two lines.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns every line with the cart total. `is_ready` stays false until
    /// the stored cart has been restored.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.summary_use_case.execute().await {
            Ok(summary) => GetCartResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a bike to the cart
    ///
    /// Priced from the catalog rate for the requested period. Adding a bike
    /// already in the cart for that period increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> CartMutationResponse {
        let params = AddCatalogItemParams {
            item_id: ItemId::new(body.0.item_id),
            rental_period: RentalPeriod::new(body.0.rental_period),
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(outcome) => CartMutationResponse::Ok(Json(outcome.into())),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Change a line's quantity
    ///
    /// Quantities above the bike's availability are capped. Zero or negative
    /// quantities leave the line untouched; use DELETE to remove it.
    #[oai(
        path = "/cart/items/:item_id/:rental_period",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_quantity(
        &self,
        item_id: Path<u64>,
        rental_period: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> CartMutationResponse {
        let params = UpdateCartQuantityParams {
            item_id: ItemId::new(item_id.0),
            rental_period: RentalPeriod::new(rental_period.0),
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(outcome) => CartMutationResponse::Ok(Json(outcome.into())),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Get a line's quantity
    #[oai(
        path = "/cart/items/:item_id/:rental_period",
        method = "get",
        tag = "ApiTags::Cart"
    )]
    async fn get_quantity(
        &self,
        item_id: Path<u64>,
        rental_period: Path<String>,
    ) -> GetQuantityResponse {
        let params = GetQuantityParams {
            item_id: ItemId::new(item_id.0),
            rental_period: RentalPeriod::new(rental_period.0.clone()),
        };

        match self.quantity_use_case.execute(params).await {
            Ok(quantity) => GetQuantityResponse::Ok(Json(QuantityResponse {
                item_id: item_id.0,
                rental_period: rental_period.0,
                quantity,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetQuantityResponse::InternalError(json)
            }
        }
    }

    /// Remove a line
    #[oai(
        path = "/cart/items/:item_id/:rental_period",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        item_id: Path<u64>,
        rental_period: Path<String>,
    ) -> CartMutationResponse {
        let params = RemoveCartItemParams {
            item_id: ItemId::new(item_id.0),
            rental_period: RentalPeriod::new(rental_period.0),
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(outcome) => CartMutationResponse::Ok(Json(outcome.into())),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> CartMutationResponse {
        match self.clear_use_case.execute().await {
            Ok(outcome) => CartMutationResponse::Ok(Json(outcome.into())),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<QuantityResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<MutationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartMutationResponse::BadRequest(json),
            404 => CartMutationResponse::NotFound(json),
            409 => CartMutationResponse::Conflict(json),
            _ => CartMutationResponse::InternalError(json),
        }
    }
}
