pub mod models;
pub mod fulfillment;

pub use models::{LineSummary, Order, OrderError, OrderItem, OrderSummary};
pub use fulfillment::{CourierDelivery, Delivery, PostDelivery};
