use crate::fulfillment::Delivery;
use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_catalog::{Discount, Product};
use storefront_core::{CoreError, Notifier, PaymentMethod};
use uuid::Uuid;

/// A product and how many units of it were ordered.
///
/// The product is borrowed: catalog entries outlive the orders that use them
/// and may appear in any number of items.
#[derive(Debug, Clone, Copy)]
pub struct OrderItem<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl<'a> OrderItem<'a> {
    pub fn new(product: &'a Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn line_total(&self) -> f64 {
        self.product.line_total(self.quantity)
    }
}

/// A customer's basket together with the strategies used to check it out.
///
/// There is no status field. `complete_order` can be called any number of
/// times and re-runs every side effect on each call.
pub struct Order<'a> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    items: Vec<OrderItem<'a>>,
    payment: Option<Box<dyn PaymentMethod>>,
    delivery: Option<Box<dyn Delivery>>,
    notifications: Vec<Box<dyn Notifier>>,
}

impl<'a> Order<'a> {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
            payment: None,
            delivery: None,
            notifications: Vec::new(),
        }
    }

    /// Append a line. Quantity and product are taken as given.
    pub fn add_item(&mut self, product: &'a Product, quantity: u32) {
        self.items.push(OrderItem::new(product, quantity));
    }

    pub fn items(&self) -> &[OrderItem<'a>] {
        &self.items
    }

    pub fn set_payment(&mut self, payment: Box<dyn PaymentMethod>) {
        self.payment = Some(payment);
    }

    pub fn set_delivery(&mut self, delivery: Box<dyn Delivery>) {
        self.delivery = Some(delivery);
    }

    pub fn add_notification(&mut self, notifier: Box<dyn Notifier>) {
        self.notifications.push(notifier);
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    /// Sum of `price * quantity` across all items, before any discount.
    ///
    /// Folds from `0.0` so an empty order totals positive zero.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.line_total())
    }

    /// Discounted total. Always recomputed from the current items.
    pub fn calculate_total(&self, discount: &dyn Discount) -> f64 {
        discount.apply(self.subtotal())
    }

    /// Charge, ship, then notify every attached channel.
    ///
    /// Both payment and delivery must be assigned; if either is missing
    /// nothing is charged or printed. A failed payment stops the order before
    /// delivery. Returns the charged total.
    pub fn complete_order(&self, discount: &dyn Discount) -> Result<f64, OrderError> {
        let payment = self.payment.as_deref().ok_or_else(|| {
            tracing::warn!(order_id = %self.id, "No payment method assigned");
            OrderError::MissingPayment(self.id)
        })?;
        let delivery = self.delivery.as_deref().ok_or_else(|| {
            tracing::warn!(order_id = %self.id, "No delivery method assigned");
            OrderError::MissingDelivery(self.id)
        })?;

        let total = self.calculate_total(discount);

        payment.process(total).map_err(|err| {
            tracing::warn!(order_id = %self.id, total, error = %err, "Payment failed");
            OrderError::from(err)
        })?;

        delivery.deliver(self);

        let message = format!("Order total {} processed.", total);
        for notifier in &self.notifications {
            notifier.notify(&message);
        }

        tracing::info!(
            order_id = %self.id,
            total,
            notifications = self.notification_count(),
            "Order completed"
        );

        Ok(total)
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            created_at: self.created_at,
            lines: self
                .items
                .iter()
                .map(|item| LineSummary {
                    product: item.product.name.clone(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    line_total: item.line_total(),
                })
                .collect(),
            subtotal: self.subtotal(),
        }
    }
}

impl Default for Order<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of an order's contents, used for structured logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<LineSummary>,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    pub product: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order {0} has no payment method")]
    MissingPayment(Uuid),

    #[error("Order {0} has no delivery method")]
    MissingDelivery(Uuid),

    #[error("Payment failed: {0}")]
    Payment(#[from] CoreError),
}
