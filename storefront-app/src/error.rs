use storefront_order::OrderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Order line refers to unknown product: {0}")]
    UnknownProduct(String),

    #[error(transparent)]
    Order(#[from] OrderError),
}
