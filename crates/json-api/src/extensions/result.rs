//! Result helper extensions for HTTP handlers.

use std::error::Error;

use salvo::prelude::StatusError;
use tracing::error;

/// Collapse failures the client can do nothing about into a bare 500.
pub(crate) trait ResultExt<T> {
    /// `action` names what the handler was doing when it failed; it is logged, never sent.
    fn or_500(self, action: &'static str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + 'static,
{
    fn or_500(self, action: &'static str) -> Result<T, StatusError> {
        self.map_err(|cause| {
            error!(action, error = &cause as &dyn Error, "request failed");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn failures_become_internal_server_errors() {
        let result: Result<(), io::Error> = Err(io::Error::other("header rejected"));

        let mapped = result.or_500("set location header");

        assert!(
            matches!(&mapped, Err(error) if error.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500"
        );
    }

    #[test]
    fn action_is_not_leaked_to_the_client() {
        let result: Result<(), io::Error> = Err(io::Error::other("secret"));

        let mapped = result.or_500("set location header");

        assert!(
            matches!(&mapped, Err(error) if !error.brief.contains("location") && !error.brief.contains("secret")),
            "expected a generic brief, got {mapped:?}"
        );
    }

    #[test]
    fn ok_values_pass_through() {
        let result: Result<u64, io::Error> = Ok(7);

        assert!(matches!(result.or_500("unused"), Ok(7)), "expected Ok(7)");
    }
}
