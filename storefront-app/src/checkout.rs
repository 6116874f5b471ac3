use storefront_catalog::{
    Discount, FixedAmountDiscount, NoDiscount, PercentageDiscount, TenPercentDiscount,
};
use storefront_config::{DeliveryKind, DiscountConfig, NotificationKind, PaymentKind};
use storefront_core::{
    Console, CreditCardPayment, EmailNotification, Notifier, PayPalPayment, PaymentMethod,
    SmsNotification,
};
use storefront_order::{CourierDelivery, Delivery, PostDelivery};

pub fn payment_method(kind: PaymentKind, console: Console) -> Box<dyn PaymentMethod> {
    match kind {
        PaymentKind::CreditCard => Box::new(CreditCardPayment::new(console)),
        PaymentKind::PayPal => Box::new(PayPalPayment::new(console)),
    }
}

pub fn delivery_method(kind: DeliveryKind, console: Console) -> Box<dyn Delivery> {
    match kind {
        DeliveryKind::Courier => Box::new(CourierDelivery::new(console)),
        DeliveryKind::Post => Box::new(PostDelivery::new(console)),
    }
}

pub fn notifier(kind: NotificationKind, console: Console) -> Box<dyn Notifier> {
    match kind {
        NotificationKind::Email => Box::new(EmailNotification::new(console)),
        NotificationKind::Sms => Box::new(SmsNotification::new(console)),
    }
}

pub fn discount(config: DiscountConfig) -> Box<dyn Discount> {
    match config {
        DiscountConfig::None => Box::new(NoDiscount),
        DiscountConfig::TenPercent => Box::new(TenPercentDiscount),
        DiscountConfig::Percentage { percent } => Box::new(PercentageDiscount::new(percent)),
        DiscountConfig::FixedAmount { amount } => Box::new(FixedAmountDiscount::new(amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_kinds() {
        let console = Console::captured();
        payment_method(PaymentKind::CreditCard, console.clone()).process(10.0).unwrap();
        payment_method(PaymentKind::PayPal, console.clone()).process(10.0).unwrap();
        assert_eq!(console.lines(), vec!["Paid 10 via Credit Card", "Paid 10 via PayPal"]);
    }

    #[test]
    fn test_notification_kinds() {
        let console = Console::captured();
        notifier(NotificationKind::Email, console.clone()).notify("hi");
        notifier(NotificationKind::Sms, console.clone()).notify("hi");
        assert_eq!(console.lines(), vec!["[Email] hi", "[SMS] hi"]);
    }

    #[test]
    fn test_discount_kinds() {
        assert_eq!(discount(DiscountConfig::None).apply(200.0), 200.0);
        assert_eq!(discount(DiscountConfig::TenPercent).apply(200.0), 180.0);
        assert_eq!(discount(DiscountConfig::Percentage { percent: 50.0 }).apply(200.0), 100.0);
        assert_eq!(discount(DiscountConfig::FixedAmount { amount: 250.0 }).apply(200.0), 0.0);
    }
}
