pub mod product;
pub mod pricing;

pub use product::Product;
pub use pricing::{
    Discount, FixedAmountDiscount, NoDiscount, PercentageDiscount, TenPercentDiscount,
};
