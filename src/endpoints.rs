//! The API endpoint URIs.

/// The route for assigning a spending category to a transaction.
pub const CATEGORIZE: &str = "/categorize";
/// The route for checking that the service is up.
pub const HEALTH: &str = "/health";

// These tests are here so that we know the routes will not panic when the
// router parses them.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::CATEGORIZE);
        assert_endpoint_is_valid_uri(endpoints::HEALTH);
    }
}
