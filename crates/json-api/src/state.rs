//! State

use std::sync::Arc;

use coupons_app::{
    context::AppContext,
    domain::{carts::CartsService, coupons::CouponsService},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) coupons: Arc<dyn CouponsService>,
    pub(crate) carts: Arc<dyn CartsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(coupons: Arc<dyn CouponsService>, carts: Arc<dyn CartsService>) -> Self {
        Self { coupons, carts }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.coupons, app.carts))
    }
}
