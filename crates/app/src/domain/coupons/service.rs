//! Coupons service.

use std::sync::Arc;

use async_trait::async_trait;
use coupons::coupons::{Coupon, CouponId};
use mockall::automock;
use tracing::info;

use crate::domain::coupons::{
    data::{CouponUpdate, NewCoupon},
    errors::CouponsServiceError,
    records::CouponRecord,
    repository::InMemoryCouponsRepository,
};

#[derive(Debug, Clone)]
pub struct InMemoryCouponsService {
    repository: Arc<InMemoryCouponsRepository>,
}

impl InMemoryCouponsService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryCouponsRepository::new()),
        }
    }
}

impl Default for InMemoryCouponsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CouponsService for InMemoryCouponsService {
    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError> {
        Ok(self.repository.list_coupons().await)
    }

    async fn get_coupon(&self, coupon: CouponId) -> Result<CouponRecord, CouponsServiceError> {
        self.repository
            .get_coupon(coupon)
            .await
            .ok_or(CouponsServiceError::NotFound)
    }

    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError> {
        coupon.rule.validate()?;

        let created = self.repository.create_coupon(coupon.rule).await;

        info!(coupon_id = created.id.get(), kind = %created.rule.kind(), "coupon created");

        Ok(created)
    }

    async fn update_coupon(
        &self,
        coupon: CouponId,
        update: CouponUpdate,
    ) -> Result<CouponRecord, CouponsServiceError> {
        update.rule.validate()?;

        let updated = self
            .repository
            .update_coupon(coupon, update.rule)
            .await
            .ok_or(CouponsServiceError::NotFound)?;

        info!(coupon_id = coupon.get(), kind = %updated.rule.kind(), "coupon updated");

        Ok(updated)
    }

    async fn delete_coupon(&self, coupon: CouponId) -> Result<(), CouponsServiceError> {
        if !self.repository.delete_coupon(coupon).await {
            return Err(CouponsServiceError::NotFound);
        }

        info!(coupon_id = coupon.get(), "coupon deleted");

        Ok(())
    }

    async fn snapshot(&self) -> Vec<Coupon> {
        self.repository
            .list_coupons()
            .await
            .into_iter()
            .map(Coupon::from)
            .collect()
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Retrieves all coupons, ordered by id.
    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError>;

    /// Retrieve a single coupon.
    async fn get_coupon(&self, coupon: CouponId) -> Result<CouponRecord, CouponsServiceError>;

    /// Validates and stores a new coupon under a freshly assigned id.
    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError>;

    /// Replaces the rule of an existing coupon, keeping its id.
    async fn update_coupon(
        &self,
        coupon: CouponId,
        update: CouponUpdate,
    ) -> Result<CouponRecord, CouponsServiceError>;

    /// Deletes a coupon. Its id is never reused.
    async fn delete_coupon(&self, coupon: CouponId) -> Result<(), CouponsServiceError>;

    /// Consistent copy of every coupon for a single engine call.
    async fn snapshot(&self) -> Vec<Coupon>;
}
