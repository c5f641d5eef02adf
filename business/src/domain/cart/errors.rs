#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.rental_period_not_offered")]
    RentalPeriodNotOffered,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    /// The line total would leave the supported range.
    #[error("cart.line_total_out_of_range")]
    LineTotalOutOfRange,
    #[error("cart.availability_exceeded")]
    AvailabilityExceeded { requested: u64, available: u32 },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
