/// Maps an order total to the amount actually charged.
///
/// Implementations must be pure: same input, same output, no side effects.
pub trait Discount {
    fn apply(&self, total: f64) -> f64;
}

/// Identity discount: charges the full total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoDiscount;

impl Discount for NoDiscount {
    fn apply(&self, total: f64) -> f64 {
        total
    }
}

/// Flat 10% off the whole order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TenPercentDiscount;

impl Discount for TenPercentDiscount {
    fn apply(&self, total: f64) -> f64 {
        total * 0.9
    }
}

/// Arbitrary percentage off, e.g. `25.0` for a quarter off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    pub percent: f64,
}

impl PercentageDiscount {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }
}

impl Discount for PercentageDiscount {
    fn apply(&self, total: f64) -> f64 {
        total * (1.0 - self.percent / 100.0)
    }
}

/// Fixed amount off; the charged total never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAmountDiscount {
    pub amount: f64,
}

impl FixedAmountDiscount {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl Discount for FixedAmountDiscount {
    fn apply(&self, total: f64) -> f64 {
        (total - self.amount).max(0.0)
    }
}
