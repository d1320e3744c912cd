//! App Router

use salvo::Router;

use crate::{
    carts::{applicable, apply},
    coupons::{create, delete, get, index, update},
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("coupons")
                .get(index::handler)
                .post(create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(get::handler)
                        .put(update::handler)
                        .delete(delete::handler),
                ),
        )
        .push(Router::with_path("applicable-coupons").post(applicable::handler))
        .push(Router::with_path("applicable-coupon").post(applicable::handler))
        .push(Router::with_path("apply-coupon/{id}").post(apply::handler))
}
