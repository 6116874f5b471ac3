use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_catalog::{Discount, NoDiscount, Product, TenPercentDiscount};
use storefront_core::{CoreResult, Notifier, PaymentMethod};
use storefront_order::{Delivery, Order};

type CallLog = Rc<RefCell<Vec<&'static str>>>;

struct CountingPayment(CallLog);

impl PaymentMethod for CountingPayment {
    fn process(&self, _amount: f64) -> CoreResult<()> {
        self.0.borrow_mut().push("payment");
        Ok(())
    }
}

struct CountingDelivery(CallLog);

impl Delivery for CountingDelivery {
    fn deliver(&self, _order: &Order<'_>) {
        self.0.borrow_mut().push("delivery");
    }
}

struct CountingNotifier(CallLog);

impl Notifier for CountingNotifier {
    fn notify(&self, _message: &str) {
        self.0.borrow_mut().push("notify");
    }
}

fn products() -> impl Strategy<Value = Vec<(Product, u32)>> {
    prop::collection::vec(
        ("[a-z]{1,8}", 0u32..10_000, 1u32..50)
            .prop_map(|(name, cents, qty)| (Product::new(name, f64::from(cents) / 100.0), qty)),
        0..12,
    )
}

proptest! {
    #[test]
    fn identity_discount_total_is_sum_of_lines(lines in products()) {
        let mut order = Order::new();
        for (product, quantity) in &lines {
            order.add_item(product, *quantity);
        }

        let expected = lines
            .iter()
            .fold(0.0, |acc, (p, q)| acc + p.price * f64::from(*q));
        let total = order.calculate_total(&NoDiscount);
        prop_assert_eq!(total, expected);
        prop_assert!(!total.is_sign_negative());
    }

    #[test]
    fn ten_percent_is_ninety_percent_of_total(total in 0.0f64..1.0e9) {
        prop_assert_eq!(TenPercentDiscount.apply(total), total * 0.9);
    }

    #[test]
    fn completion_calls_each_role_in_order(notifiers in 0usize..6) {
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        let book = Product::new("Book", 100.0);

        let mut order = Order::new();
        order.add_item(&book, 1);
        order.set_payment(Box::new(CountingPayment(log.clone())));
        order.set_delivery(Box::new(CountingDelivery(log.clone())));
        for _ in 0..notifiers {
            order.add_notification(Box::new(CountingNotifier(log.clone())));
        }

        order.complete_order(&NoDiscount).unwrap();

        let mut expected = vec!["payment", "delivery"];
        expected.extend(std::iter::repeat("notify").take(notifiers));
        prop_assert_eq!(log.borrow().clone(), expected);
    }
}
