use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::RentalPeriodNotOffered
            | CartError::InvalidQuantity
            | CartError::LineTotalOutOfRange => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            CartError::AvailabilityExceeded { .. } => {
                (StatusCode::CONFLICT, "AvailabilityExceeded")
            }
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for error in [
            CartError::InvalidQuantity,
            CartError::RentalPeriodNotOffered,
            CartError::LineTotalOutOfRange,
        ] {
            let (status, body) = error.into_error_response();

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.0.name, "ValidationError");
        }
    }

    #[test]
    fn should_map_unknown_item_to_not_found() {
        let (status, body) = CartError::ItemNotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "cart.item_not_found");
    }

    #[test]
    fn should_map_availability_to_conflict() {
        let (status, body) = CartError::AvailabilityExceeded {
            requested: 5,
            available: 4,
        }
        .into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "cart.availability_exceeded");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, body) =
            CartError::Repository(RepositoryError::Corrupted).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "repository.persistence");
    }
}
