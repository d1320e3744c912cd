//! Prelude

pub use crate::{
    applications::{apply, apply_with_observer},
    cart::{Cart, PricedItem},
    coupons::{
        Coupon, CouponId, DiscountRule, RuleError, RuleKind,
        evaluation::{Attribution, Award, Evaluation, Ineligibility},
        types::{BxGyRule, CartWiseRule, CouponProduct, CouponProducts, ProductWiseRule},
    },
    eligibility::{DiscountCandidate, find_applicable, find_applicable_with_observer},
    observer::{EvaluationObserver, NoopObserver},
    products::ProductId,
    receipt::{DiscountedCart, DiscountedItem},
};
