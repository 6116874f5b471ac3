use crate::models::Order;
use storefront_core::Console;

/// Ships a paid order to the customer.
pub trait Delivery {
    fn deliver(&self, order: &Order<'_>);
}

#[derive(Debug, Clone, Default)]
pub struct CourierDelivery {
    console: Console,
}

impl CourierDelivery {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Delivery for CourierDelivery {
    fn deliver(&self, order: &Order<'_>) {
        tracing::debug!(
            order_id = %order.id,
            items = order.items().len(),
            "Dispatching by courier"
        );
        self.console.line("Delivered by courier");
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostDelivery {
    console: Console,
}

impl PostDelivery {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Delivery for PostDelivery {
    fn deliver(&self, order: &Order<'_>) {
        tracing::debug!(
            order_id = %order.id,
            items = order.items().len(),
            "Dispatching by post"
        );
        self.console.line("Delivered via post");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_confirmation() {
        let console = Console::captured();
        CourierDelivery::new(console.clone()).deliver(&Order::new());
        assert_eq!(console.lines(), vec!["Delivered by courier"]);
    }

    #[test]
    fn test_post_confirmation() {
        let console = Console::captured();
        PostDelivery::new(console.clone()).deliver(&Order::new());
        assert_eq!(console.lines(), vec!["Delivered via post"]);
    }
}
