use crate::{Console, CoreResult};

/// Charges an order total.
///
/// Returning an error stops checkout before anything is shipped or announced.
pub trait PaymentMethod {
    fn process(&self, amount: f64) -> CoreResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct CreditCardPayment {
    console: Console,
}

impl CreditCardPayment {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl PaymentMethod for CreditCardPayment {
    fn process(&self, amount: f64) -> CoreResult<()> {
        tracing::debug!(amount, method = "credit_card", "Charging payment");
        self.console.line(format!("Paid {} via Credit Card", amount));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PayPalPayment {
    console: Console,
}

impl PayPalPayment {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl PaymentMethod for PayPalPayment {
    fn process(&self, amount: f64) -> CoreResult<()> {
        tracing::debug!(amount, method = "pay_pal", "Charging payment");
        self.console.line(format!("Paid {} via PayPal", amount));
        Ok(())
    }
}
