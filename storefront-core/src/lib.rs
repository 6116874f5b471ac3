pub mod console;
pub mod payment;
pub mod notification;

pub use console::Console;
pub use payment::{CreditCardPayment, PayPalPayment, PaymentMethod};
pub use notification::{EmailNotification, Notifier, SmsNotification};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Payment of {amount} declined: {reason}")]
    PaymentDeclined { amount: f64, reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
