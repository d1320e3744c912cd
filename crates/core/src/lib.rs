//! Coupons
//!
//! Coupons is a small, deterministic coupon evaluation engine: given a priced cart and a set
//! of coupon rules it reports which coupons apply, and itemises the result of applying one.

pub mod applications;
pub mod cart;
pub mod coupons;
pub mod discounts;
pub mod eligibility;
pub mod fixtures;
pub mod observer;
pub mod prelude;
pub mod products;
pub mod receipt;
