pub mod app_config;

pub use app_config::{
    CheckoutConfig, Config, DeliveryKind, DiscountConfig, LineConfig, NotificationKind, PaymentKind,
};
pub use config::ConfigError;
