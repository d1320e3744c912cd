//! Evaluating a fixture-defined coupon set against a cart.

use testresult::TestResult;

use coupons::{fixtures::CouponsFixture, prelude::*};

fn storefront() -> Result<Vec<Coupon>, coupons::fixtures::FixtureError> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/storefront.yml");

    Ok(CouponsFixture::from_path(path)?.into_coupons())
}

#[test]
fn lists_applicable_storefront_coupons() -> TestResult {
    let coupons = storefront()?;
    let cart = Cart::new([
        PricedItem::new(ProductId::new(1), 6, 10),
        PricedItem::new(ProductId::new(4), 1, 8),
        PricedItem::new(ProductId::new(5), 1, 9),
        PricedItem::new(ProductId::new(6), 1, 11),
    ]);

    let candidates = find_applicable(&cart, &coupons);

    assert_eq!(
        candidates,
        vec![
            DiscountCandidate {
                coupon_id: CouponId::new(2),
                kind: RuleKind::ProductWise,
                discount: 12,
            },
            DiscountCandidate {
                coupon_id: CouponId::new(3),
                kind: RuleKind::BxGy,
                discount: 28,
            },
        ]
    );

    Ok(())
}

#[test]
fn large_cart_unlocks_cart_wise_coupons() -> TestResult {
    let coupons = storefront()?;
    let cart = Cart::new([PricedItem::new(ProductId::new(10), 1_000, 100)]);

    let kinds: Vec<(u64, u64)> = find_applicable(&cart, &coupons)
        .into_iter()
        .map(|candidate| (candidate.coupon_id.get(), candidate.discount))
        .collect();

    assert_eq!(kinds, vec![(1, 10_000), (4, 50_000)]);

    Ok(())
}
