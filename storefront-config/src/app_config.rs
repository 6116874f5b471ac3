use serde::Deserialize;
use std::env;
use storefront_catalog::Product;

/// Built-in scenario: two books and a laptop, 10% off, paid by card, sent by
/// courier, announced by email and SMS.
const DEFAULTS: &str = r#"
[[catalog]]
name = "Book"
price = 100.0

[[catalog]]
name = "Laptop"
price = 1000.0

[[order]]
product = "Book"
quantity = 2

[[order]]
product = "Laptop"
quantity = 1

[checkout]
payment = "credit_card"
delivery = "courier"
notifications = ["email", "sms"]

[checkout.discount]
kind = "ten_percent"
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: Vec<Product>,
    pub order: Vec<LineConfig>,
    pub checkout: CheckoutConfig,
}

/// An order line, naming a catalog product.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LineConfig {
    pub product: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckoutConfig {
    pub payment: PaymentKind,
    pub delivery: DeliveryKind,
    #[serde(default)]
    pub notifications: Vec<NotificationKind>,
    pub discount: DiscountConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    CreditCard,
    PayPal,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    Courier,
    Post,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Email,
    Sms,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountConfig {
    None,
    TenPercent,
    Percentage { percent: f64 },
    FixedAmount { amount: f64 },
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        tracing::debug!(%run_mode, "Loading configuration");

        let s = config::Config::builder()
            // Built-in sample scenario
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml))
            // Optional overrides, most specific last
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `STOREFRONT__CHECKOUT__PAYMENT=pay_pal`,
            // `STOREFRONT__CHECKOUT__NOTIFICATIONS=email,sms`
            .add_source(
                config::Environment::with_prefix("STOREFRONT")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("checkout.notifications"),
            )
            .build()?;

        s.try_deserialize()
    }

    /// The built-in scenario alone, ignoring files and environment.
    pub fn defaults() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.name == name)
    }
}
