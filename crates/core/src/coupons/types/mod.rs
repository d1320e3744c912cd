//! Rule Types

mod buy_x_get_y;
mod cart_wise;
mod product_wise;

pub use buy_x_get_y::{BxGyRule, CouponProduct, CouponProducts};
pub use cart_wise::CartWiseRule;
pub use product_wise::ProductWiseRule;
