pub mod checkout;
pub mod error;

pub use error::AppError;

use storefront_config::Config;
use storefront_core::Console;
use storefront_order::Order;

/// Build the configured order, attach its strategies and complete it.
///
/// Side effects go to `console`; returns the charged total.
pub fn run(config: &Config, console: &Console) -> Result<f64, AppError> {
    let mut order = Order::new();
    for line in &config.order {
        let product = config
            .product(&line.product)
            .ok_or_else(|| AppError::UnknownProduct(line.product.clone()))?;
        order.add_item(product, line.quantity);
    }

    let settings = &config.checkout;
    order.set_payment(checkout::payment_method(settings.payment, console.clone()));
    order.set_delivery(checkout::delivery_method(settings.delivery, console.clone()));
    for kind in &settings.notifications {
        order.add_notification(checkout::notifier(*kind, console.clone()));
    }

    match serde_json::to_string(&order.summary()) {
        Ok(summary) => tracing::debug!(%summary, "Order assembled"),
        Err(err) => {
            tracing::warn!(order_id = %order.id, error = %err, "Could not serialize order summary")
        }
    }

    let discount = checkout::discount(settings.discount);
    let total = order.complete_order(discount.as_ref())?;
    Ok(total)
}
