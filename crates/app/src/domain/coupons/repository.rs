//! Coupons Repository

use std::collections::BTreeMap;

use coupons::coupons::{CouponId, DiscountRule};
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::domain::coupons::records::CouponRecord;

#[derive(Debug, Default)]
struct CouponsTable {
    last_id: u64,
    rows: BTreeMap<CouponId, CouponRecord>,
}

/// In-memory coupon storage. Ids are assigned from a counter that never goes backwards,
/// so a deleted id is never handed out again.
#[derive(Debug, Default)]
pub(crate) struct InMemoryCouponsRepository {
    table: RwLock<CouponsTable>,
}

impl InMemoryCouponsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn list_coupons(&self) -> Vec<CouponRecord> {
        self.table.read().await.rows.values().cloned().collect()
    }

    pub(crate) async fn get_coupon(&self, id: CouponId) -> Option<CouponRecord> {
        self.table.read().await.rows.get(&id).cloned()
    }

    pub(crate) async fn create_coupon(&self, rule: DiscountRule) -> CouponRecord {
        let mut table = self.table.write().await;

        table.last_id = table.last_id.saturating_add(1);

        let now = Timestamp::now();
        let record = CouponRecord {
            id: CouponId::new(table.last_id),
            rule,
            created_at: now,
            updated_at: now,
        };

        table.rows.insert(record.id, record.clone());

        record
    }

    pub(crate) async fn update_coupon(
        &self,
        id: CouponId,
        rule: DiscountRule,
    ) -> Option<CouponRecord> {
        let mut table = self.table.write().await;

        let record = table.rows.get_mut(&id)?;

        record.rule = rule;
        record.updated_at = Timestamp::now();

        Some(record.clone())
    }

    pub(crate) async fn delete_coupon(&self, id: CouponId) -> bool {
        self.table.write().await.rows.remove(&id).is_some()
    }
}
