//! Depot helper extensions.

use std::{any::Any, sync::Arc};

use salvo::prelude::{Depot, StatusError};

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Shared server state injected by the router.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain_or_500::<Arc<State>>()
    }
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            tracing::error!(
                r#type = std::any::type_name::<T>(),
                "missing depot value"
            );

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_is_internal_error() {
        let depot = Depot::new();

        let result = depot.state_or_500();

        assert!(
            matches!(&result, Err(error) if error.code == salvo::http::StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500 for missing state"
        );
    }
}
