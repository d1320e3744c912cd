//! Coupons service errors.

use coupons::coupons::RuleError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CouponsServiceError {
    #[error("coupon not found")]
    NotFound,

    #[error("invalid coupon rule")]
    InvalidRule(#[from] RuleError),
}
